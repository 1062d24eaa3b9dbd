//! Bookmark and news fixtures plus the loaders that fill their regions

use crate::view::{Region, Tile, View};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bookmark {
    pub icon: &'static str,
    pub title: &'static str,
    pub url: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewsItem {
    pub icon: &'static str,
    pub title: &'static str,
    pub source: &'static str,
}

pub const BOOKMARKS: &[Bookmark] = &[
    Bookmark { icon: "💻", title: "GitHub", url: "https://github.com" },
    Bookmark { icon: "▶", title: "YouTube", url: "https://www.youtube.com" },
    Bookmark { icon: "✉", title: "Gmail", url: "https://mail.google.com" },
    Bookmark { icon: "💬", title: "Reddit", url: "https://www.reddit.com" },
    Bookmark { icon: "❓", title: "Stack Overflow", url: "https://stackoverflow.com" },
    Bookmark { icon: "📖", title: "Wikipedia", url: "https://www.wikipedia.org" },
    Bookmark { icon: "🦀", title: "Rust Docs", url: "https://doc.rust-lang.org" },
    Bookmark { icon: "🗺", title: "Maps", url: "https://maps.google.com" },
];

pub const NEWS: &[NewsItem] = &[
    NewsItem { icon: "🚀", title: "New launch window opens for lunar cargo missions", source: "Space Daily" },
    NewsItem { icon: "💡", title: "Researchers demo low-power chip for edge inference", source: "Tech Review" },
    NewsItem { icon: "🌍", title: "Coastal cities trial floating solar farms", source: "Planet Wire" },
    NewsItem { icon: "📈", title: "Markets steady ahead of quarterly earnings", source: "Finance Now" },
    NewsItem { icon: "⚽", title: "Underdogs advance after extra-time thriller", source: "Sports Desk" },
];

pub fn bookmark(index: usize) -> Option<&'static Bookmark> {
    BOOKMARKS.get(index)
}

/// Rebuild the bookmark grid in fixture order
pub fn load_bookmarks(view: &mut impl View) {
    view.clear_region(Region::Bookmarks);
    for (index, item) in BOOKMARKS.iter().enumerate() {
        view.push_tile(
            Region::Bookmarks,
            Tile {
                index,
                icon: item.icon,
                title: item.title,
                source: None,
            },
        );
    }
}

/// Rebuild the news list in fixture order
pub fn load_news(view: &mut impl View) {
    view.clear_region(Region::News);
    for (index, item) in NEWS.iter().enumerate() {
        view.push_tile(
            Region::News,
            Tile {
                index,
                icon: item.icon,
                title: item.title,
                source: Some(item.source),
            },
        );
    }
}
