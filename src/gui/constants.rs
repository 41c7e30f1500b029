//! GUI-specific constants for layout, preview colours and zoom

use egui;

/// Settings window dimensions
pub const WINDOW_WIDTH: f32 = 900.0;
pub const WINDOW_HEIGHT: f32 = 640.0;
pub const WINDOW_MIN_WIDTH: f32 = 640.0;
pub const WINDOW_MIN_HEIGHT: f32 = 480.0;

/// Width of the settings side panel
pub const SETTINGS_PANEL_WIDTH: f32 = 360.0;

/// Layout spacing
pub const SECTION_SPACING: f32 = 15.0;
pub const ITEM_SPACING: f32 = 8.0;
pub const PADDING: f32 = 10.0;

/// Hex colour text field width
pub const HEX_FIELD_WIDTH: f32 = 80.0;

/// Swatch next to each colour row
pub const SWATCH_SIZE: f32 = 18.0;

/// Preview backdrop
pub const PREVIEW_BACKGROUND: egui::Color32 = egui::Color32::from_rgb(48, 52, 58);
pub const PREVIEW_GUIDE: egui::Color32 = egui::Color32::from_rgb(70, 75, 82);

/// Preview magnification
pub const DEFAULT_ZOOM: f32 = 3.0;
pub const MIN_ZOOM: f32 = 1.0;
pub const MAX_ZOOM: f32 = 8.0;
