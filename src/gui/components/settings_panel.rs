//! Settings panel for theme, font, blur, particles and section visibility

use eframe::egui;

use crate::config::{FONTS, Section, Theme};
use crate::constants::limits::{BLUR_MAX_PX, BLUR_MIN_PX};
use crate::gui::UiEvent;
use crate::gui::constants::{ITEM_SPACING, SECTION_SPACING};
use crate::view::DisplayState;

/// Renders the panel when open; widgets start from the synced control values
/// and report any change as an event
pub fn ui(ctx: &egui::Context, state: &DisplayState, events: &mut Vec<UiEvent>) {
    if !state.settings_open {
        return;
    }

    let controls = &state.controls;
    let mut open = true;

    egui::Window::new("Settings")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            // Appearance Section
            ui.group(|ui| {
                ui.label(egui::RichText::new("Appearance").strong());
                ui.add_space(ITEM_SPACING);

                // Theme
                let mut theme = controls.theme;
                ui.horizontal(|ui| {
                    ui.label("Theme:");
                    egui::ComboBox::from_id_salt("theme_select")
                        .selected_text(theme.to_string())
                        .show_ui(ui, |ui| {
                            for option in Theme::all() {
                                ui.selectable_value(&mut theme, *option, option.to_string());
                            }
                        });
                });
                if theme != controls.theme {
                    events.push(UiEvent::Theme(theme));
                }

                // Font
                let mut font = controls.font.clone();
                ui.horizontal(|ui| {
                    ui.label("Font:");
                    egui::ComboBox::from_id_salt("font_select")
                        .selected_text(&font)
                        .width(160.0)
                        .show_ui(ui, |ui| {
                            for option in FONTS {
                                ui.selectable_value(&mut font, option.to_string(), *option);
                            }
                        });
                });
                if font != controls.font {
                    events.push(UiEvent::Font(font));
                }

                // Blur
                // Never clamp on render: a stored value outside the slider
                // range must survive until the user drags the handle
                let mut blur = controls.blur;
                let slider = ui
                    .horizontal(|ui| {
                        ui.label("Blur:");
                        let response = ui.add(
                            egui::Slider::new(&mut blur, BLUR_MIN_PX..=BLUR_MAX_PX)
                                .clamping(egui::SliderClamping::Never)
                                .show_value(false),
                        );
                        ui.label(&controls.blur_readout);
                        response
                    })
                    .inner;
                if slider.changed() && blur != controls.blur {
                    events.push(UiEvent::Blur(blur));
                }

                // Particles
                let mut particles = controls.particles;
                if ui.checkbox(&mut particles, "Particle effect").changed() {
                    events.push(UiEvent::Particles(particles));
                }
            });

            ui.add_space(SECTION_SPACING);

            // Sections
            ui.group(|ui| {
                ui.label(egui::RichText::new("Sections").strong());
                ui.add_space(ITEM_SPACING);

                for section in Section::ALL {
                    let mut visible = controls.sections.get(section);
                    if ui.checkbox(&mut visible, section.to_string()).changed() {
                        events.push(UiEvent::Section(section, visible));
                    }
                }
            });

            ui.add_space(SECTION_SPACING);

            ui.horizontal(|ui| {
                if ui.button("↺ Reset to defaults").clicked() {
                    events.push(UiEvent::Reset);
                }
                if ui.button("Close").clicked() {
                    events.push(UiEvent::CloseSettings);
                }
            });
        });

    // Window title-bar close button
    if !open {
        events.push(UiEvent::CloseSettings);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apply::apply;
    use crate::config::Config;

    fn render(state: &DisplayState) -> Vec<UiEvent> {
        let ctx = egui::Context::default();
        let mut events = Vec::new();
        // A window sizes itself on its first frame, so render two
        for _ in 0..2 {
            let _ = ctx.run(egui::RawInput::default(), |ctx| {
                ui(ctx, state, &mut events);
            });
        }
        events
    }

    fn open_state(config: &Config) -> DisplayState {
        let mut state = DisplayState::default();
        apply(config, &mut state);
        state.settings_open = true;
        state
    }

    #[test]
    fn test_opening_with_defaults_emits_nothing() {
        let state = open_state(&Config::default());
        assert!(render(&state).is_empty());
    }

    #[test]
    fn test_out_of_range_blur_not_rewritten_on_open() {
        let state = open_state(&Config {
            blur: 90,
            ..Config::default()
        });
        assert_eq!(state.controls.blur, 90);
        assert!(render(&state).is_empty());
    }

    #[test]
    fn test_closed_panel_renders_nothing() {
        let state = DisplayState::default();
        assert!(render(&state).is_empty());
    }
}
