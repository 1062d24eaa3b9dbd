//! Dashboard configuration record
//!
//! The single persisted entity: theme, font, blur, particle flag and the
//! per-section visibility flags. Every field is required when decoding, so a
//! partially shaped record fails to parse as a whole.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::defaults;

/// Font families offered by the settings panel
pub const FONTS: &[&str] = &["Inter", "Roboto", "Poppins", "Fira Code", "Georgia"];

/// Named color palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Ocean,
    Sunset,
    Forest,
    Midnight,
    Lavender,
}

impl Theme {
    pub fn all() -> &'static [Theme] {
        &[
            Self::Ocean,
            Self::Sunset,
            Self::Forest,
            Self::Midnight,
            Self::Lavender,
        ]
    }

    /// Marker value written to the root container (matches the stored name)
    pub fn name(self) -> &'static str {
        match self {
            Self::Ocean => "ocean",
            Self::Sunset => "sunset",
            Self::Forest => "forest",
            Self::Midnight => "midnight",
            Self::Lavender => "lavender",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ocean => write!(f, "Ocean"),
            Self::Sunset => write!(f, "Sunset"),
            Self::Forest => write!(f, "Forest"),
            Self::Midnight => write!(f, "Midnight"),
            Self::Lavender => write!(f, "Lavender"),
        }
    }
}

/// Toggleable page region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Search,
    Time,
    Bookmarks,
    News,
    Stats,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Search,
        Section::Time,
        Section::Bookmarks,
        Section::News,
        Section::Stats,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Search => "search",
            Self::Time => "time",
            Self::Bookmarks => "bookmarks",
            Self::News => "news",
            Self::Stats => "stats",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Search => write!(f, "Search"),
            Self::Time => write!(f, "Clock"),
            Self::Bookmarks => write!(f, "Bookmarks"),
            Self::News => write!(f, "News"),
            Self::Stats => write!(f, "Stats"),
        }
    }
}

/// Visibility flag for each of the five sections
///
/// Stored as a JSON object keyed by section name. A struct rather than a map
/// keeps the five keys mandatory; unknown keys are ignored on decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sections {
    pub search: bool,
    pub time: bool,
    pub bookmarks: bool,
    pub news: bool,
    pub stats: bool,
}

impl Sections {
    pub fn all_visible() -> Self {
        Self {
            search: true,
            time: true,
            bookmarks: true,
            news: true,
            stats: true,
        }
    }

    pub fn get(&self, section: Section) -> bool {
        match section {
            Section::Search => self.search,
            Section::Time => self.time,
            Section::Bookmarks => self.bookmarks,
            Section::News => self.news,
            Section::Stats => self.stats,
        }
    }

    pub fn set(&mut self, section: Section, visible: bool) {
        let slot = match section {
            Section::Search => &mut self.search,
            Section::Time => &mut self.time,
            Section::Bookmarks => &mut self.bookmarks,
            Section::News => &mut self.news,
            Section::Stats => &mut self.stats,
        };
        *slot = visible;
    }
}

impl Default for Sections {
    fn default() -> Self {
        Self::all_visible()
    }
}

/// The persisted dashboard configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub theme: Theme,
    pub font: String,
    /// Background blur radius in pixels
    pub blur: u32,
    /// Particle effect flag (effect itself is not rendered)
    pub particles: bool,
    pub sections: Sections,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            font: defaults::FONT.to_string(),
            blur: defaults::BLUR_PX,
            particles: defaults::PARTICLES,
            sections: Sections::all_visible(),
        }
    }
}
