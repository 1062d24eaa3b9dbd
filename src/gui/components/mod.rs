//! Dashboard panels

pub mod header;
pub mod search_bar;
pub mod settings_panel;
pub mod stats_bar;
pub mod tiles;

use eframe::egui::{self, Frame};

use super::constants::{CARD_PADDING, CARD_RADIUS};
use super::theme::Palette;
use crate::view::DisplayState;

/// Rounded card behind each section, filled according to theme and blur
pub fn card(state: &DisplayState) -> Frame {
    let palette = Palette::for_theme(state.theme.unwrap_or_default());
    Frame::new()
        .fill(palette.card_fill(state.blur_px))
        .corner_radius(CARD_RADIUS)
        .inner_margin(egui::Margin::same(CARD_PADDING))
}
