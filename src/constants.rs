//! Application-wide constants
//!
//! This module contains all magic numbers and string literals used throughout
//! the application, providing a single source of truth for constant values.

/// Config file location
pub mod config {
    /// Directory under the platform config dir
    pub const APP_DIR: &str = "reticle-overlay";

    /// Settings file name
    pub const FILENAME: &str = "reticle.toml";
}

/// Canonical default values, as stored (strings)
pub mod defaults {
    pub const INNER_ENABLED: &str = "true";
    pub const INNER_LENGTH: &str = "15";
    pub const INNER_THICKNESS: &str = "2";
    pub const INNER_OFFSET: &str = "3";
    pub const INNER_COLOR: &str = "#FF0000";
    pub const INNER_OUTLINE_ENABLED: &str = "true";
    pub const INNER_OUTLINE_THICKNESS: &str = "1";
    pub const INNER_OUTLINE_COLOR: &str = "#000000";

    pub const OUTER_ENABLED: &str = "true";
    pub const OUTER_LENGTH: &str = "25";
    pub const OUTER_THICKNESS: &str = "2";
    pub const OUTER_OFFSET: &str = "8";
    pub const OUTER_COLOR: &str = "#FF0000";
    pub const OUTER_OUTLINE_ENABLED: &str = "true";
    pub const OUTER_OUTLINE_THICKNESS: &str = "1";
    pub const OUTER_OUTLINE_COLOR: &str = "#000000";

    pub const CENTER_DOT_ENABLED: &str = "false";
    pub const CENTER_DOT_SIZE: &str = "3";
    pub const CENTER_DOT_COLOR: &str = "#FF0000";
    pub const CENTER_DOT_OUTLINE_ENABLED: &str = "true";
    pub const CENTER_DOT_OUTLINE_THICKNESS: &str = "1";
    pub const CENTER_DOT_OUTLINE_COLOR: &str = "#000000";

    pub const OPACITY: &str = "0.8";
    pub const HOTKEY_TOGGLE: &str = "F1";
}

/// Accepted ranges for edited values (inclusive)
pub mod validation {
    pub const MIN_LENGTH: u32 = 0;
    pub const MAX_LENGTH: u32 = 200;

    pub const MIN_OFFSET: u32 = 0;
    pub const MAX_OFFSET: u32 = 200;

    /// Base line thickness; zero would make an enabled layer invisible
    pub const MIN_THICKNESS: u32 = 1;
    pub const MAX_THICKNESS: u32 = 50;

    pub const MIN_OUTLINE_THICKNESS: u32 = 0;
    pub const MAX_OUTLINE_THICKNESS: u32 = 20;

    pub const MIN_DOT_SIZE: u32 = 1;
    pub const MAX_DOT_SIZE: u32 = 50;

    /// Opacity as shown on controls (percent)
    pub const MIN_OPACITY_PERCENT: u8 = 10;
    pub const MAX_OPACITY_PERCENT: u8 = 100;
}

/// Colour codec constants
pub mod color {
    use crate::color::Rgb;

    /// Returned by `decode` for anything that is not exactly six hex digits
    pub const FALLBACK: Rgb = Rgb::new(255, 0, 0);

    /// Number of hex digits in `RRGGBB`
    pub const HEX_DIGITS: usize = 6;
}

/// Literal boolean spellings in the settings file
pub mod boolean {
    pub const TRUE: &str = "true";
    pub const FALSE: &str = "false";
}
