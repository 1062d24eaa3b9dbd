//! Native dashboard window (eframe/egui)
//!
//! Widgets never touch the configuration directly: each frame renders the
//! current [`DisplayState`](crate::view::DisplayState) and collects
//! [`UiEvent`]s, which the app then hands to the dashboard controller.

mod app;
mod components;
mod constants;
mod events;
mod theme;

pub use app::run_gui;
pub use events::UiEvent;
