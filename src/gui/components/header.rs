//! Clock header with the settings button

use eframe::egui;

use crate::gui::UiEvent;
use crate::gui::constants::{CLOCK_SIZE, DATE_SIZE};
use crate::view::DisplayState;

/// `show_clock` follows the "time" section flag; the settings button is always shown
pub fn ui(ui: &mut egui::Ui, state: &DisplayState, show_clock: bool, events: &mut Vec<UiEvent>) {
    ui.horizontal(|ui| {
        ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
            if ui.button("⚙ Settings").clicked() {
                events.push(UiEvent::OpenSettings);
            }
        });
    });

    if show_clock {
        ui.vertical_centered(|ui| {
            ui.label(egui::RichText::new(&state.time).size(CLOCK_SIZE).strong());
            ui.label(egui::RichText::new(&state.date).size(DATE_SIZE));
        });
    }
}
