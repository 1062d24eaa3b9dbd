use eframe::egui;

use crate::gui::constants::ITEM_SPACING;
use crate::view::DisplayState;

pub fn ui(ui: &mut egui::Ui, state: &DisplayState) {
    ui.horizontal(|ui| {
        stat(ui, "🖱 Clicks", state.clicks);
        ui.add_space(ITEM_SPACING * 3.0);
        stat(ui, "🔍 Searches", state.searches);
        ui.add_space(ITEM_SPACING * 3.0);
        stat(ui, "⏱ Minutes", state.minutes);
    });
}

fn stat(ui: &mut egui::Ui, label: &str, value: u64) {
    ui.label(egui::RichText::new(value.to_string()).strong());
    ui.label(label);
}
