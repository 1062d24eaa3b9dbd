//! Maps the applied display state onto egui styling

use eframe::egui::{self, Color32, FontFamily, Visuals};

use super::constants::*;
use crate::config::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color32,
    pub card: Color32,
    pub accent: Color32,
    pub text: Color32,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        let [background, card, accent, text] = match theme {
            Theme::Ocean => OCEAN,
            Theme::Sunset => SUNSET,
            Theme::Forest => FOREST,
            Theme::Midnight => MIDNIGHT,
            Theme::Lavender => LAVENDER,
        };
        Self {
            background,
            card,
            accent,
            text,
        }
    }

    /// Card fill for a blur radius; more blur reads as a denser frosted panel
    pub fn card_fill(&self, blur_px: u32) -> Color32 {
        let alpha = CARD_BASE_ALPHA
            .saturating_add(blur_px.saturating_mul(CARD_ALPHA_PER_BLUR_PX))
            .min(255) as u8;
        Color32::from_rgba_unmultiplied(self.card.r(), self.card.g(), self.card.b(), alpha)
    }
}

pub fn visuals(theme: Theme) -> Visuals {
    let palette = Palette::for_theme(theme);
    let mut visuals = Visuals::dark();
    visuals.panel_fill = palette.background;
    visuals.window_fill = palette.card;
    visuals.extreme_bg_color = palette.background;
    visuals.override_text_color = Some(palette.text);
    visuals.hyperlink_color = palette.accent;
    visuals.selection.bg_fill = palette.accent.gamma_multiply(0.6);
    visuals.widgets.inactive.weak_bg_fill = palette.card;
    visuals.widgets.hovered.weak_bg_fill = palette.accent.gamma_multiply(0.35);
    visuals
}

/// egui only bundles two families, so offered fonts map onto one of them
pub fn font_family(font: &str) -> FontFamily {
    if font == MONOSPACE_FONT {
        FontFamily::Monospace
    } else {
        FontFamily::Proportional
    }
}

/// Push theme and font to the egui context
pub fn apply_style(ctx: &egui::Context, theme: Theme, font: &str) {
    ctx.set_visuals(visuals(theme));
    let family = font_family(font);
    ctx.style_mut(|style| {
        for font_id in style.text_styles.values_mut() {
            font_id.family = family.clone();
        }
    });
}
