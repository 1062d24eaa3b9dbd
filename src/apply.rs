//! Config apply pipeline
//!
//! Pushes the whole record to the view in a fixed order. Every step overwrites
//! unconditionally, so applying the same record twice leaves the same state.

use tracing::{debug, info};

use crate::config::{Config, Section};
use crate::content;
use crate::view::{ControlValues, View};

pub fn apply(config: &Config, view: &mut impl View) {
    debug!(theme = %config.theme.name(), font = %config.font, blur = config.blur, "Applying config");

    view.set_theme(config.theme);
    view.set_font(&config.font);
    view.set_blur(config.blur);

    for section in Section::ALL {
        view.set_section_visible(section, config.sections.get(section));
    }

    view.sync_controls(ControlValues {
        theme: config.theme,
        font: config.font.clone(),
        blur: config.blur,
        blur_readout: format!("{} px", config.blur),
        particles: config.particles,
        sections: config.sections,
    });

    if config.particles {
        info!("Particle effect enabled (not rendered)");
    }

    // Loaders run regardless of section visibility
    content::load_bookmarks(view);
    content::load_news(view);
}
