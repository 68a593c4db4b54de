//! Application-wide constants
//!
//! This module contains the magic numbers and string literals used throughout
//! the builder, providing a single source of truth for constant values.

/// Configuration file locations
pub mod config {
    /// Directory name under the platform config/data directories
    pub const APP_DIR: &str = "portfolio-builder";

    /// Settings file name
    pub const FILENAME: &str = "settings.json";

    /// Default origin + path that share links point at
    pub const DEFAULT_SHARE_BASE_URL: &str = "https://jonascode.dev/portfolio-builder";
}

/// Durable draft slot
pub mod storage {
    /// Key of the durable slot holding the autosaved draft
    pub const STORAGE_KEY: &str = "portfolioBuilder:v1";

    /// Schema version written into the slot
    pub const SNAPSHOT_VERSION: u32 = 1;
}

/// Debounced autosave timing
pub mod autosave {
    /// Quiet period after the last edit before the draft is written
    pub const DEFAULT_DELAY_MS: u64 = 600;

    /// Lower bound accepted from settings
    pub const MIN_DELAY_MS: u64 = 50;

    /// Upper bound accepted from settings
    pub const MAX_DELAY_MS: u64 = 10_000;

    /// Below this age the label reads "Saved just now"
    pub const JUST_NOW_SECS: i64 = 15;
}

/// Derived view limits
pub mod draft {
    /// Maximum number of skill chips shown
    pub const MAX_SKILLS: usize = 12;

    /// Separator between title and link on a project line
    pub const PROJECT_SEPARATOR: &str = " - ";

    /// Scheme prefix a link must start with to be displayed
    pub const LINK_PREFIX: &str = "http";
}

/// Export artifacts
pub mod export {
    /// Standalone document file name
    pub const HTML_FILENAME: &str = "portfolio.html";

    /// Structured data file name
    pub const JSON_FILENAME: &str = "portfolio.json";

    /// QR image file name (CLI only)
    pub const QR_FILENAME: &str = "portfolio-qr.png";

    /// Version tag written into portfolio.json
    pub const JSON_VERSION: u32 = 1;

    /// Rendered QR code edge length in pixels
    pub const QR_SIZE: u32 = 260;

    /// Quiet-zone margin in modules
    pub const QR_MARGIN: u32 = 1;

    /// Max width of the standalone document content column
    pub const DOCUMENT_MAX_WIDTH_PX: u32 = 820;
}
