//! Colour and opacity conversions
//!
//! Colours are stored as `#RRGGBB` strings and edited as three 0-255
//! channels. Opacity is edited as a percentage and stored as a float.

use serde::Serialize;
use std::fmt;
use std::ops::RangeInclusive;

use crate::constants::color::{FALLBACK, HEX_DIGITS};
use crate::constants::validation::{MAX_OPACITY_PERCENT, MIN_OPACITY_PERCENT};

/// An opaque 8-bit-per-channel colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

/// One of the three decomposed channels of an [`Rgb`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    pub fn label(self) -> &'static str {
        match self {
            Channel::Red => "R",
            Channel::Green => "G",
            Channel::Blue => "B",
        }
    }
}

impl Rgb {
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    pub fn channel(&self, channel: Channel) -> u8 {
        match channel {
            Channel::Red => self.red,
            Channel::Green => self.green,
            Channel::Blue => self.blue,
        }
    }

    /// Copy of this colour with one channel replaced
    pub fn with_channel(mut self, channel: Channel, value: u8) -> Self {
        match channel {
            Channel::Red => self.red = value,
            Channel::Green => self.green = value,
            Channel::Blue => self.blue = value,
        }
        self
    }

    /// Strict parse: optional `#` followed by exactly six hex digits
    pub fn parse_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != HEX_DIGITS || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }

        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
        Some(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// `#RRGGBB`, uppercase, zero-padded per channel
    pub fn to_hex_string(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex_string())
    }
}

/// Lenient decode: malformed input silently becomes [`FALLBACK`] (red)
pub fn decode(hex: &str) -> Rgb {
    Rgb::parse_hex(hex).unwrap_or(FALLBACK)
}

pub fn encode(rgb: Rgb) -> String {
    rgb.to_hex_string()
}

/// Tolerance when matching a stored float to a whole percent
const STORED_EPSILON: f64 = 1e-9;

/// Overlay opacity, held as the percentage shown on controls
///
/// The stored float is always derived as `percent / 100`, and loading only
/// accepts floats on that grid, so `73 -> 0.73 -> 73` is exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Opacity(u8);

impl Opacity {
    /// 80%, stored as `0.8`
    pub const DEFAULT: Opacity = Opacity(80);

    /// Accepts only 10..=100
    pub fn from_percent(percent: u8) -> Option<Self> {
        (MIN_OPACITY_PERCENT..=MAX_OPACITY_PERCENT)
            .contains(&percent)
            .then_some(Self(percent))
    }

    /// Stored float range, `MIN_OPACITY_PERCENT / 100 ..= MAX_OPACITY_PERCENT / 100`
    pub fn stored_range() -> RangeInclusive<f64> {
        f64::from(MIN_OPACITY_PERCENT) / 100.0..=f64::from(MAX_OPACITY_PERCENT) / 100.0
    }

    /// Accepts only whole percents within [`Opacity::stored_range`]. Values
    /// outside the range (including NaN) and values between two percents
    /// (`0.733`) are rejected, never rounded.
    pub fn from_stored(value: f64) -> Option<Self> {
        if !Self::stored_range().contains(&value) {
            return None;
        }
        let percent = (value * 100.0).round();
        if (percent / 100.0 - value).abs() > STORED_EPSILON {
            return None;
        }
        Self::from_percent(percent as u8)
    }

    /// True when `value` lies in the stored range but is not a whole percent
    pub fn is_off_grid(value: f64) -> bool {
        Self::stored_range().contains(&value) && Self::from_stored(value).is_none()
    }

    pub fn percent(&self) -> u8 {
        self.0
    }

    pub fn as_f32(&self) -> f32 {
        f32::from(self.0) / 100.0
    }

    pub fn as_f64(&self) -> f64 {
        f64::from(self.0) / 100.0
    }

    /// Shortest decimal form, e.g. `0.8` or `0.73`
    pub fn to_stored_string(&self) -> String {
        self.as_f64().to_string()
    }
}
