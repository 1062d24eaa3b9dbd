//! GUI-specific constants for layout, sizing and palettes

use egui::Color32;

/// Window dimensions
pub const WINDOW_WIDTH: f32 = 960.0;
pub const WINDOW_HEIGHT: f32 = 820.0;
pub const WINDOW_MIN_WIDTH: f32 = 560.0;
pub const WINDOW_MIN_HEIGHT: f32 = 480.0;
pub const WINDOW_TITLE: &str = "startdeck";

/// Layout spacing
pub const SECTION_SPACING: f32 = 18.0;
pub const ITEM_SPACING: f32 = 8.0;
pub const CONTENT_MAX_WIDTH: f32 = 760.0;

/// Cards
pub const CARD_RADIUS: f32 = 12.0;
pub const CARD_PADDING: i8 = 14;

/// Text sizes
pub const CLOCK_SIZE: f32 = 56.0;
pub const DATE_SIZE: f32 = 18.0;
pub const BODY_SIZE: f32 = 15.0;
pub const HEADING_SIZE: f32 = 18.0;

/// Tiles
pub const BOOKMARK_TILE_WIDTH: f32 = 150.0;
pub const BOOKMARK_TILE_HEIGHT: f32 = 64.0;
pub const NEWS_TILE_HEIGHT: f32 = 44.0;

/// Search box
pub const SEARCH_HINT: &str = "Search the web...";

/// Card alpha at zero blur and per blur pixel ("frosted" look)
pub const CARD_BASE_ALPHA: u32 = 90;
pub const CARD_ALPHA_PER_BLUR_PX: u32 = 4;

/// Font offered as the code font, rendered with the monospace family
pub const MONOSPACE_FONT: &str = "Fira Code";

/// Palette colors: background, card, accent, text
pub const OCEAN: [Color32; 4] = [
    Color32::from_rgb(12, 34, 56),
    Color32::from_rgb(24, 64, 96),
    Color32::from_rgb(64, 196, 255),
    Color32::from_rgb(230, 244, 255),
];
pub const SUNSET: [Color32; 4] = [
    Color32::from_rgb(52, 22, 36),
    Color32::from_rgb(92, 40, 56),
    Color32::from_rgb(255, 140, 90),
    Color32::from_rgb(255, 236, 224),
];
pub const FOREST: [Color32; 4] = [
    Color32::from_rgb(16, 36, 24),
    Color32::from_rgb(32, 64, 44),
    Color32::from_rgb(120, 210, 120),
    Color32::from_rgb(228, 246, 230),
];
pub const MIDNIGHT: [Color32; 4] = [
    Color32::from_rgb(8, 8, 16),
    Color32::from_rgb(26, 26, 40),
    Color32::from_rgb(150, 130, 255),
    Color32::from_rgb(224, 224, 240),
];
pub const LAVENDER: [Color32; 4] = [
    Color32::from_rgb(40, 30, 58),
    Color32::from_rgb(70, 54, 96),
    Color32::from_rgb(210, 170, 255),
    Color32::from_rgb(246, 238, 255),
];
