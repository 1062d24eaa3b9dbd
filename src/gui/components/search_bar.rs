//! Search input with submit button

use eframe::egui;

use crate::gui::UiEvent;
use crate::gui::constants::{ITEM_SPACING, SEARCH_HINT};

const INPUT_ID: &str = "search_input";

pub fn ui(ui: &mut egui::Ui, query: &mut String, events: &mut Vec<UiEvent>) {
    ui.horizontal(|ui| {
        let button_width = 90.0;
        let input = egui::TextEdit::singleline(query)
            .id(egui::Id::new(INPUT_ID))
            .hint_text(SEARCH_HINT)
            .desired_width(ui.available_width() - button_width - ITEM_SPACING);
        let response = ui.add(input);

        // Enter inside the field commits
        let committed = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        let clicked = ui
            .add_sized([button_width, response.rect.height()], egui::Button::new("Search"))
            .clicked();

        if committed || clicked {
            events.push(UiEvent::Search);
        }
    });
}
