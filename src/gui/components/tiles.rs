//! Bookmark grid and news list

use eframe::egui;

use crate::gui::UiEvent;
use crate::gui::constants::*;
use crate::view::{DisplayState, Region};

pub fn bookmarks(ui: &mut egui::Ui, state: &DisplayState, events: &mut Vec<UiEvent>) {
    ui.label(egui::RichText::new("Bookmarks").size(HEADING_SIZE).strong());
    ui.add_space(ITEM_SPACING);

    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing = egui::vec2(ITEM_SPACING, ITEM_SPACING);
        for tile in state.tiles(Region::Bookmarks) {
            let text = egui::RichText::new(format!("{}\n{}", tile.icon, tile.title)).size(BODY_SIZE);
            let button = egui::Button::new(text)
                .min_size(egui::vec2(BOOKMARK_TILE_WIDTH, BOOKMARK_TILE_HEIGHT));
            if ui.add(button).clicked() {
                events.push(UiEvent::TileClicked(Region::Bookmarks, tile.index));
            }
        }
    });
}

pub fn news(ui: &mut egui::Ui, state: &DisplayState, events: &mut Vec<UiEvent>) {
    ui.label(egui::RichText::new("News").size(HEADING_SIZE).strong());
    ui.add_space(ITEM_SPACING);

    for tile in state.tiles(Region::News) {
        let mut label = format!("{}  {}", tile.icon, tile.title);
        if let Some(source) = tile.source {
            label.push_str(&format!("\n{source}"));
        }

        let button = egui::Button::new(egui::RichText::new(label).size(BODY_SIZE))
            .min_size(egui::vec2(ui.available_width(), NEWS_TILE_HEIGHT));
        if ui.add(button).clicked() {
            events.push(UiEvent::TileClicked(Region::News, tile.index));
        }
    }
}
