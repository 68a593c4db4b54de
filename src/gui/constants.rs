//! GUI-specific constants for layout, banner colors and timings

use egui;

/// Builder window limits
pub const WINDOW_MIN_WIDTH: f32 = 800.0;
pub const WINDOW_MIN_HEIGHT: f32 = 600.0;

/// Layout spacing
pub const PADDING: f32 = 10.0;
pub const SECTION_SPACING: f32 = 15.0;
pub const ITEM_SPACING: f32 = 8.0;
pub const FORM_PANEL_WIDTH: f32 = 420.0;

/// Banner colors
pub const BANNER_SUCCESS: egui::Color32 = egui::Color32::from_rgb(110, 231, 183);
pub const BANNER_ERROR: egui::Color32 = egui::Color32::from_rgb(253, 164, 175);

/// Banners dismiss themselves after this long
pub const BANNER_LIFETIME_MS: u64 = 2500;

/// Repaint cadence while something time-based is on screen
pub const REPAINT_INTERVAL_MS: u64 = 250;

/// On-screen edge length of the QR code
pub const QR_DISPLAY_SIZE: f32 = 260.0;
