//! Dashboard controller
//!
//! Owns the configuration record, the session counters and the three effect
//! seams (storage, view, navigator). Every settings handler follows the same
//! cycle: mutate one field, persist the whole record, re-apply it.

use std::time::Instant;
use tracing::{debug, info};

use crate::apply::apply;
use crate::clock;
use crate::config::{Config, ConfigStore, Section, Storage, Theme};
use crate::content;
use crate::navigator::Navigator;
use crate::search;
use crate::stats::SessionStats;
use crate::view::{Region, View};

pub struct Dashboard<S: Storage, V: View, N: Navigator> {
    store: ConfigStore<S>,
    view: V,
    navigator: N,
    config: Config,
    stats: SessionStats,
}

impl<S: Storage, V: View, N: Navigator> Dashboard<S, V, N> {
    /// Load the stored config (or defaults), apply it and show zeroed stats
    pub fn new(storage: S, view: V, navigator: N, started: Instant) -> Self {
        let store = ConfigStore::new(storage);
        let config = store.load();
        let mut dashboard = Self {
            store,
            view,
            navigator,
            config,
            stats: SessionStats::new(started),
        };

        apply(&dashboard.config, &mut dashboard.view);
        dashboard.view.set_click_count(0);
        dashboard.view.set_search_count(0);
        dashboard.view.set_minutes(0);
        dashboard
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    #[cfg(test)]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[cfg(test)]
    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    fn commit(&mut self) {
        self.store.save(&self.config);
        apply(&self.config, &mut self.view);
    }

    // Settings handlers

    pub fn set_theme(&mut self, theme: Theme) {
        info!(theme = %theme.name(), "Theme changed");
        self.config.theme = theme;
        self.commit();
    }

    pub fn set_font(&mut self, font: &str) {
        info!(font = %font, "Font changed");
        self.config.font = font.to_string();
        self.commit();
    }

    pub fn set_blur(&mut self, px: u32) {
        debug!(blur = px, "Blur changed");
        self.config.blur = px;
        self.commit();
    }

    pub fn set_particles(&mut self, enabled: bool) {
        info!(enabled, "Particles toggled");
        self.config.particles = enabled;
        self.commit();
    }

    pub fn set_section_visible(&mut self, section: Section, visible: bool) {
        info!(section = %section.name(), visible, "Section toggled");
        self.config.sections.set(section, visible);
        self.commit();
    }

    /// Replace the record with a fresh default, persist and re-apply
    pub fn reset(&mut self) {
        info!("Resetting settings to defaults");
        self.config = Config::default();
        self.commit();
    }

    // Settings panel visibility, no config involved

    pub fn open_settings(&mut self) {
        self.view.set_settings_open(true);
    }

    pub fn close_settings(&mut self) {
        self.view.set_settings_open(false);
    }

    // Stats handlers

    /// Click on one of the designated action controls
    pub fn click_action(&mut self) {
        let clicks = self.stats.record_click();
        debug!(clicks, "Action click");
        self.view.set_click_count(clicks);
    }

    /// Click on a bookmark or news tile; bookmarks also open their URL
    pub fn click_tile(&mut self, region: Region, index: usize) {
        let clicks = self.stats.record_click();
        debug!(?region, index, clicks, "Tile click");
        self.view.set_click_count(clicks);

        if region == Region::Bookmarks
            && let Some(bookmark) = content::bookmark(index)
        {
            self.navigator.open(bookmark.url);
        }
    }

    /// Submit a search; whitespace-only queries do nothing
    ///
    /// Returns true when a search was performed.
    pub fn submit_search(&mut self, query: &str) -> bool {
        let Some(url) = search::search_url(query) else {
            debug!("Ignoring empty search");
            return false;
        };

        let searches = self.stats.record_search();
        info!(searches, "Search submitted");
        self.view.set_search_count(searches);
        self.navigator.open(&url);
        true
    }

    // Timer handlers

    pub fn tick_clock(&mut self) {
        let (time, date) = clock::now();
        self.view.set_clock(&time, &date);
    }

    pub fn tick_minutes(&mut self, now: Instant) {
        let minutes = self.stats.elapsed_minutes(now);
        self.view.set_minutes(minutes);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::storage::memory::MemoryStorage;
    use crate::constants::storage::CONFIG_KEY;
    use crate::navigator::recording::RecordingNavigator;
    use crate::view::DisplayState;
    use std::time::Duration;

    type TestDashboard = Dashboard<MemoryStorage, DisplayState, RecordingNavigator>;

    fn dashboard() -> TestDashboard {
        Dashboard::new(
            MemoryStorage::default(),
            DisplayState::default(),
            RecordingNavigator::default(),
            Instant::now(),
        )
    }

    fn stored(dashboard: &TestDashboard) -> Option<Config> {
        dashboard
            .store
            .storage()
            .entries
            .get(CONFIG_KEY)
            .map(|json| serde_json::from_str(json).unwrap())
    }

    fn applied(config: &Config) -> DisplayState {
        let mut state = DisplayState::default();
        apply(config, &mut state);
        state
    }

    #[test]
    fn test_new_applies_loaded_config() {
        let stored_config = Config {
            theme: Theme::Sunset,
            ..Config::default()
        };
        let json = serde_json::to_string(&stored_config).unwrap();

        let dashboard = Dashboard::new(
            MemoryStorage::with_value(CONFIG_KEY, &json),
            DisplayState::default(),
            RecordingNavigator::default(),
            Instant::now(),
        );

        assert_eq!(dashboard.config().theme, Theme::Sunset);
        assert_eq!(dashboard.view().theme, Some(Theme::Sunset));
        assert_eq!(dashboard.view().clicks, 0);
        assert_eq!(dashboard.view().searches, 0);
        assert_eq!(dashboard.view().minutes, 0);
        // Loading alone does not write
        assert_eq!(dashboard.store.storage().writes, 0);
    }

    #[test]
    fn test_setting_change_persists_and_applies() {
        let mut dashboard = dashboard();

        dashboard.set_theme(Theme::Midnight);
        dashboard.set_font("Roboto");
        dashboard.set_blur(35);
        dashboard.set_particles(false);

        let config = dashboard.config().clone();
        assert_eq!(stored(&dashboard), Some(config.clone()));
        assert_eq!(dashboard.store.storage().writes, 4);

        let view = dashboard.view();
        assert_eq!(view.theme, Some(Theme::Midnight));
        assert_eq!(view.font, "Roboto");
        assert_eq!(view.blur_px, 35);
        assert_eq!(view.controls.blur_readout, "35 px");
        assert!(!view.controls.particles);
    }

    #[test]
    fn test_section_toggle_isolation() {
        let mut dashboard = dashboard();
        let before_config = dashboard.config().clone();
        let before_view = dashboard.view().clone();

        dashboard.set_section_visible(Section::Time, false);

        let after = dashboard.config();
        assert!(!after.sections.time);
        assert_eq!(after.theme, before_config.theme);
        assert_eq!(after.font, before_config.font);
        assert_eq!(after.blur, before_config.blur);
        assert_eq!(after.particles, before_config.particles);

        for section in Section::ALL {
            let expected = section != Section::Time;
            assert_eq!(after.sections.get(section), expected);
            assert_eq!(dashboard.view().is_visible(section), expected);
        }
        assert_eq!(dashboard.view().theme, before_view.theme);
        assert_eq!(dashboard.view().blur_px, before_view.blur_px);
        assert_eq!(stored(&dashboard), Some(after.clone()));
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut dashboard = dashboard();
        dashboard.set_theme(Theme::Forest);
        dashboard.set_blur(3);
        dashboard.set_section_visible(Section::News, false);
        dashboard.open_settings();

        dashboard.reset();

        assert_eq!(dashboard.config(), &Config::default());
        assert_eq!(stored(&dashboard), Some(Config::default()));

        let expected = applied(&Config::default());
        assert!(dashboard.view().settings_open);
        assert_eq!(dashboard.view().visible, expected.visible);
        assert_eq!(dashboard.view().controls, expected.controls);
        assert_eq!(dashboard.view().theme, expected.theme);
    }

    #[test]
    fn test_reset_from_default_still_saves() {
        let mut dashboard = dashboard();
        dashboard.reset();
        assert_eq!(dashboard.store.storage().writes, 1);
        assert_eq!(stored(&dashboard), Some(Config::default()));
    }

    #[test]
    fn test_settings_panel_does_not_touch_config() {
        let mut dashboard = dashboard();
        dashboard.open_settings();
        assert!(dashboard.view().settings_open);
        dashboard.close_settings();
        assert!(!dashboard.view().settings_open);

        assert_eq!(dashboard.store.storage().writes, 0);
        assert_eq!(dashboard.config(), &Config::default());
    }

    #[test]
    fn test_whitespace_search_ignored() {
        let mut dashboard = dashboard();
        assert!(!dashboard.submit_search("   "));
        assert!(!dashboard.submit_search(""));

        assert_eq!(dashboard.stats().searches(), 0);
        assert_eq!(dashboard.view().searches, 0);
        assert!(dashboard.navigator.opened.is_empty());
    }

    #[test]
    fn test_search_counts_and_navigates() {
        let mut dashboard = dashboard();
        assert!(dashboard.submit_search("cats"));

        assert_eq!(dashboard.stats().searches(), 1);
        assert_eq!(dashboard.view().searches, 1);
        assert_eq!(
            dashboard.navigator.opened,
            vec!["https://www.google.com/search?q=cats".to_string()]
        );
        // Searching is not a click
        assert_eq!(dashboard.stats().clicks(), 0);
    }

    #[test]
    fn test_click_aggregation() {
        let mut dashboard = dashboard();
        for index in 0..3 {
            dashboard.click_tile(Region::Bookmarks, index);
        }
        for index in 0..2 {
            dashboard.click_tile(Region::News, index);
        }

        assert_eq!(dashboard.stats().clicks(), 5);
        assert_eq!(dashboard.view().clicks, 5);
    }

    #[test]
    fn test_bookmark_click_opens_url_news_does_not() {
        let mut dashboard = dashboard();
        dashboard.click_tile(Region::Bookmarks, 1);
        dashboard.click_tile(Region::News, 1);

        assert_eq!(
            dashboard.navigator.opened,
            vec![content::BOOKMARKS[1].url.to_string()]
        );
    }

    #[test]
    fn test_action_click_counts() {
        let mut dashboard = dashboard();
        dashboard.click_action();
        dashboard.click_tile(Region::News, 0);
        assert_eq!(dashboard.view().clicks, 2);
        // Clicks never touch the stored config
        assert_eq!(dashboard.store.storage().writes, 0);
    }

    #[test]
    fn test_tick_minutes() {
        let start = Instant::now();
        let mut dashboard = Dashboard::new(
            MemoryStorage::default(),
            DisplayState::default(),
            RecordingNavigator::default(),
            start,
        );

        let mut previous = 0;
        for tick in 1..=5u64 {
            dashboard.tick_minutes(start + Duration::from_secs(60 * tick + 1));
            let minutes = dashboard.view().minutes;
            assert!(minutes >= previous);
            assert_eq!(minutes, tick);
            previous = minutes;
        }
    }

    #[test]
    fn test_tick_clock_fills_header() {
        let mut dashboard = dashboard();
        dashboard.tick_clock();
        assert_eq!(dashboard.view().time.len(), "00:00:00".len());
        assert!(!dashboard.view().date.is_empty());
    }
}
