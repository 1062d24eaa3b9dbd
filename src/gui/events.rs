//! Widget events and their mapping onto dashboard handlers

use crate::config::{Section, Storage, Theme};
use crate::dashboard::Dashboard;
use crate::navigator::Navigator;
use crate::view::{Region, View};

/// Interaction produced by a widget during one frame
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    OpenSettings,
    CloseSettings,
    Reset,
    Theme(Theme),
    Font(String),
    Blur(u32),
    Particles(bool),
    Section(Section, bool),
    Search,
    TileClicked(Region, usize),
}

/// Route one event to its dashboard handler; `query` is the search field text
pub fn dispatch<S: Storage, V: View, N: Navigator>(
    dashboard: &mut Dashboard<S, V, N>,
    query: &str,
    event: UiEvent,
) {
    match event {
        UiEvent::OpenSettings => {
            // Settings button is one of the counted action controls
            dashboard.click_action();
            dashboard.open_settings();
        }
        UiEvent::CloseSettings => dashboard.close_settings(),
        UiEvent::Reset => {
            dashboard.click_action();
            dashboard.reset();
        }
        UiEvent::Theme(theme) => dashboard.set_theme(theme),
        UiEvent::Font(font) => dashboard.set_font(&font),
        UiEvent::Blur(px) => dashboard.set_blur(px),
        UiEvent::Particles(enabled) => dashboard.set_particles(enabled),
        UiEvent::Section(section, visible) => dashboard.set_section_visible(section, visible),
        UiEvent::Search => {
            dashboard.submit_search(query);
        }
        UiEvent::TileClicked(region, index) => dashboard.click_tile(region, index),
    }
}
