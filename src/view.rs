//! Display surface seam
//!
//! Everything the dashboard logic changes on screen goes through [`View`].
//! [`DisplayState`] is the concrete surface: a plain snapshot the egui layer
//! renders every frame, which also makes the observable state comparable in
//! tests.

use std::collections::BTreeMap;

use crate::config::{Section, Sections, Theme};

/// Tile container filled by the content loaders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Bookmarks,
    News,
}

/// One clickable tile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    /// Position in the fixture list, reported back on click
    pub index: usize,
    pub icon: &'static str,
    pub title: &'static str,
    /// Source label, news tiles only
    pub source: Option<&'static str>,
}

/// Values shown by the settings panel widgets
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ControlValues {
    pub theme: Theme,
    pub font: String,
    pub blur: u32,
    /// Numeric readout next to the blur slider
    pub blur_readout: String,
    pub particles: bool,
    pub sections: Sections,
}

/// View-update interface
pub trait View {
    /// Theme marker on the root container
    fn set_theme(&mut self, theme: Theme);
    fn set_font(&mut self, font: &str);
    fn set_blur(&mut self, px: u32);
    fn set_section_visible(&mut self, section: Section, visible: bool);
    fn sync_controls(&mut self, controls: ControlValues);

    fn clear_region(&mut self, region: Region);
    fn push_tile(&mut self, region: Region, tile: Tile);

    fn set_click_count(&mut self, count: u64);
    fn set_search_count(&mut self, count: u64);
    fn set_minutes(&mut self, minutes: u64);
    fn set_clock(&mut self, time: &str, date: &str);

    fn set_settings_open(&mut self, open: bool);
}

/// Snapshot of everything currently on screen
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayState {
    pub theme: Option<Theme>,
    pub font: String,
    pub blur_px: u32,
    pub visible: BTreeMap<Section, bool>,
    pub controls: ControlValues,
    pub bookmarks: Vec<Tile>,
    pub news: Vec<Tile>,
    pub clicks: u64,
    pub searches: u64,
    pub minutes: u64,
    pub time: String,
    pub date: String,
    pub settings_open: bool,
}

impl DisplayState {
    /// Sections are shown until the first apply says otherwise
    pub fn is_visible(&self, section: Section) -> bool {
        self.visible.get(&section).copied().unwrap_or(true)
    }

    pub fn tiles(&self, region: Region) -> &[Tile] {
        match region {
            Region::Bookmarks => &self.bookmarks,
            Region::News => &self.news,
        }
    }

    fn tiles_mut(&mut self, region: Region) -> &mut Vec<Tile> {
        match region {
            Region::Bookmarks => &mut self.bookmarks,
            Region::News => &mut self.news,
        }
    }
}

impl View for DisplayState {
    fn set_theme(&mut self, theme: Theme) {
        self.theme = Some(theme);
    }

    fn set_font(&mut self, font: &str) {
        self.font = font.to_string();
    }

    fn set_blur(&mut self, px: u32) {
        self.blur_px = px;
    }

    fn set_section_visible(&mut self, section: Section, visible: bool) {
        self.visible.insert(section, visible);
    }

    fn sync_controls(&mut self, controls: ControlValues) {
        self.controls = controls;
    }

    fn clear_region(&mut self, region: Region) {
        self.tiles_mut(region).clear();
    }

    fn push_tile(&mut self, region: Region, tile: Tile) {
        self.tiles_mut(region).push(tile);
    }

    fn set_click_count(&mut self, count: u64) {
        self.clicks = count;
    }

    fn set_search_count(&mut self, count: u64) {
        self.searches = count;
    }

    fn set_minutes(&mut self, minutes: u64) {
        self.minutes = minutes;
    }

    fn set_clock(&mut self, time: &str, date: &str) {
        self.time = time.to_string();
        self.date = date.to_string();
    }

    fn set_settings_open(&mut self, open: bool) {
        self.settings_open = open;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tile(index: usize) -> Tile {
        Tile {
            index,
            icon: "*",
            title: "t",
            source: None,
        }
    }

    #[test]
    fn test_sections_visible_before_first_apply() {
        let state = DisplayState::default();
        assert!(Section::ALL.iter().all(|s| state.is_visible(*s)));
    }

    #[test]
    fn test_clear_region_only_clears_that_region() {
        let mut state = DisplayState::default();
        state.push_tile(Region::Bookmarks, tile(0));
        state.push_tile(Region::News, tile(0));
        state.push_tile(Region::News, tile(1));

        state.clear_region(Region::News);

        assert_eq!(state.tiles(Region::Bookmarks).len(), 1);
        assert!(state.tiles(Region::News).is_empty());
    }

    #[test]
    fn test_set_section_visible() {
        let mut state = DisplayState::default();
        state.set_section_visible(Section::Time, false);
        assert!(!state.is_visible(Section::Time));
        assert!(state.is_visible(Section::Search));
    }
}
