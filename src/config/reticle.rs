//! Typed reticle configuration
//!
//! The single source of truth for every layer. Values enter only through
//! [`ReticleConfiguration::set`], which validates the raw control/file text
//! for the targeted key; serialization back to the flat string map goes
//! through [`ReticleConfiguration::get`].

use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use tracing::{error, warn};

use crate::color::{Opacity, Rgb};
use crate::config::keys::{ColorGroup, SettingKey};
use crate::constants::{boolean, validation::*};
use crate::error::ApplyError;

/// Contrast outline drawn behind a layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outline {
    pub enabled: bool,
    pub thickness: u32,
    pub color: Rgb,
}

/// Four-armed line layer (inner or outer)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineLayer {
    pub enabled: bool,
    pub length: u32,
    pub thickness: u32,
    pub offset: u32,
    pub color: Rgb,
    pub outline: Outline,
}

impl LineLayer {
    /// Distance from centre to the far end of each arm
    pub fn reach(&self) -> u32 {
        self.offset + self.length
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DotLayer {
    pub enabled: bool,
    pub size: u32,
    pub color: Rgb,
    pub outline: Outline,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReticleConfiguration {
    pub inner: LineLayer,
    pub outer: LineLayer,
    pub center_dot: DotLayer,
    pub opacity: Opacity,
    pub toggle_hotkey: String,
}

impl Default for ReticleConfiguration {
    /// The documented default table, applied key by key
    fn default() -> Self {
        let mut config = Self::unset();
        for key in SettingKey::ALL {
            if let Err(err) = config.set(key, key.default_value()) {
                error!(key = %key, error = %err, "Default value failed validation");
            }
        }
        config
    }
}

impl ReticleConfiguration {
    /// Placeholder every field is written over by `Default`
    fn unset() -> Self {
        let black = Rgb::new(0, 0, 0);
        let outline = Outline {
            enabled: false,
            thickness: 0,
            color: black,
        };
        let line = LineLayer {
            enabled: false,
            length: 0,
            thickness: 0,
            offset: 0,
            color: black,
            outline: outline.clone(),
        };

        Self {
            inner: line.clone(),
            outer: line,
            center_dot: DotLayer {
                enabled: false,
                size: 0,
                color: black,
                outline,
            },
            opacity: Opacity::DEFAULT,
            toggle_hotkey: String::new(),
        }
    }

    /// Build from a stored map, substituting the default for any key that is
    /// missing or holds a value that fails validation.
    ///
    /// Returns the configuration plus the keys that had to be repaired.
    pub fn from_map(values: &BTreeMap<String, String>) -> (Self, Vec<SettingKey>) {
        let mut config = Self::default();
        let mut repaired = Vec::new();

        for key in SettingKey::ALL {
            let Some(raw) = values.get(key.as_str()) else {
                repaired.push(key);
                continue;
            };
            if let Err(err) = config.set(key, raw) {
                warn!(key = %key, value = %raw, error = %err, "Invalid stored value, using default");
                repaired.push(key);
            }
        }

        (config, repaired)
    }

    /// Current value of a channel-edited colour
    pub fn color(&self, group: ColorGroup) -> Rgb {
        match group {
            ColorGroup::Inner => self.inner.color,
            ColorGroup::InnerOutline => self.inner.outline.color,
            ColorGroup::Outer => self.outer.color,
            ColorGroup::OuterOutline => self.outer.outline.color,
            ColorGroup::CenterDot => self.center_dot.color,
            ColorGroup::CenterDotOutline => self.center_dot.outline.color,
        }
    }

    /// Full flat map, one entry per canonical key
    pub fn to_map(&self) -> BTreeMap<String, String> {
        SettingKey::ALL
            .iter()
            .map(|key| (key.as_str().to_string(), self.get(*key)))
            .collect()
    }

    /// Stored string form of one field
    pub fn get(&self, key: SettingKey) -> String {
        match key {
            SettingKey::InnerEnabled => bool_str(self.inner.enabled),
            SettingKey::InnerLength => self.inner.length.to_string(),
            SettingKey::InnerThickness => self.inner.thickness.to_string(),
            SettingKey::InnerOffset => self.inner.offset.to_string(),
            SettingKey::InnerColor => self.inner.color.to_hex_string(),
            SettingKey::InnerOutlineEnabled => bool_str(self.inner.outline.enabled),
            SettingKey::InnerOutlineThickness => self.inner.outline.thickness.to_string(),
            SettingKey::InnerOutlineColor => self.inner.outline.color.to_hex_string(),
            SettingKey::OuterEnabled => bool_str(self.outer.enabled),
            SettingKey::OuterLength => self.outer.length.to_string(),
            SettingKey::OuterThickness => self.outer.thickness.to_string(),
            SettingKey::OuterOffset => self.outer.offset.to_string(),
            SettingKey::OuterColor => self.outer.color.to_hex_string(),
            SettingKey::OuterOutlineEnabled => bool_str(self.outer.outline.enabled),
            SettingKey::OuterOutlineThickness => self.outer.outline.thickness.to_string(),
            SettingKey::OuterOutlineColor => self.outer.outline.color.to_hex_string(),
            SettingKey::CenterDotEnabled => bool_str(self.center_dot.enabled),
            SettingKey::CenterDotSize => self.center_dot.size.to_string(),
            SettingKey::CenterDotColor => self.center_dot.color.to_hex_string(),
            SettingKey::CenterDotOutlineEnabled => bool_str(self.center_dot.outline.enabled),
            SettingKey::CenterDotOutlineThickness => self.center_dot.outline.thickness.to_string(),
            SettingKey::CenterDotOutlineColor => self.center_dot.outline.color.to_hex_string(),
            SettingKey::Opacity => self.opacity.to_stored_string(),
            SettingKey::HotkeyToggle => self.toggle_hotkey.clone(),
        }
    }

    /// Validate `raw` for `key` and write it. On error nothing is written.
    pub fn set(&mut self, key: SettingKey, raw: &str) -> Result<(), ApplyError> {
        match key {
            SettingKey::InnerEnabled => self.inner.enabled = parse_bool(key, raw)?,
            SettingKey::InnerLength => self.inner.length = parse_u32(key, raw, MIN_LENGTH..=MAX_LENGTH)?,
            SettingKey::InnerThickness => {
                self.inner.thickness = parse_u32(key, raw, MIN_THICKNESS..=MAX_THICKNESS)?
            }
            SettingKey::InnerOffset => self.inner.offset = parse_u32(key, raw, MIN_OFFSET..=MAX_OFFSET)?,
            SettingKey::InnerColor => self.inner.color = parse_color(key, raw)?,
            SettingKey::InnerOutlineEnabled => self.inner.outline.enabled = parse_bool(key, raw)?,
            SettingKey::InnerOutlineThickness => {
                self.inner.outline.thickness =
                    parse_u32(key, raw, MIN_OUTLINE_THICKNESS..=MAX_OUTLINE_THICKNESS)?
            }
            SettingKey::InnerOutlineColor => self.inner.outline.color = parse_color(key, raw)?,
            SettingKey::OuterEnabled => self.outer.enabled = parse_bool(key, raw)?,
            SettingKey::OuterLength => self.outer.length = parse_u32(key, raw, MIN_LENGTH..=MAX_LENGTH)?,
            SettingKey::OuterThickness => {
                self.outer.thickness = parse_u32(key, raw, MIN_THICKNESS..=MAX_THICKNESS)?
            }
            SettingKey::OuterOffset => self.outer.offset = parse_u32(key, raw, MIN_OFFSET..=MAX_OFFSET)?,
            SettingKey::OuterColor => self.outer.color = parse_color(key, raw)?,
            SettingKey::OuterOutlineEnabled => self.outer.outline.enabled = parse_bool(key, raw)?,
            SettingKey::OuterOutlineThickness => {
                self.outer.outline.thickness =
                    parse_u32(key, raw, MIN_OUTLINE_THICKNESS..=MAX_OUTLINE_THICKNESS)?
            }
            SettingKey::OuterOutlineColor => self.outer.outline.color = parse_color(key, raw)?,
            SettingKey::CenterDotEnabled => self.center_dot.enabled = parse_bool(key, raw)?,
            SettingKey::CenterDotSize => {
                self.center_dot.size = parse_u32(key, raw, MIN_DOT_SIZE..=MAX_DOT_SIZE)?
            }
            SettingKey::CenterDotColor => self.center_dot.color = parse_color(key, raw)?,
            SettingKey::CenterDotOutlineEnabled => self.center_dot.outline.enabled = parse_bool(key, raw)?,
            SettingKey::CenterDotOutlineThickness => {
                self.center_dot.outline.thickness =
                    parse_u32(key, raw, MIN_OUTLINE_THICKNESS..=MAX_OUTLINE_THICKNESS)?
            }
            SettingKey::CenterDotOutlineColor => self.center_dot.outline.color = parse_color(key, raw)?,
            SettingKey::Opacity => self.opacity = parse_opacity(key, raw)?,
            SettingKey::HotkeyToggle => self.toggle_hotkey = parse_label(key, raw)?,
        }

        Ok(())
    }
}

fn bool_str(value: bool) -> String {
    let literal = if value { boolean::TRUE } else { boolean::FALSE };
    literal.to_string()
}

fn parse_bool(key: SettingKey, raw: &str) -> Result<bool, ApplyError> {
    match raw.trim() {
        boolean::TRUE => Ok(true),
        boolean::FALSE => Ok(false),
        other => Err(ApplyError::Malformed {
            key,
            value: other.to_string(),
            expected: "boolean (true/false)",
        }),
    }
}

fn parse_u32(key: SettingKey, raw: &str, range: RangeInclusive<u32>) -> Result<u32, ApplyError> {
    let trimmed = raw.trim();
    // Parse wide so "-3" and "99999999999" report as range errors, not syntax
    let value: i64 = trimmed.parse().map_err(|_| ApplyError::Malformed {
        key,
        value: trimmed.to_string(),
        expected: "integer",
    })?;

    if value < i64::from(*range.start()) || value > i64::from(*range.end()) {
        return Err(ApplyError::OutOfRange {
            key,
            value: value.to_string(),
            min: range.start().to_string(),
            max: range.end().to_string(),
        });
    }

    Ok(value as u32)
}

fn parse_color(key: SettingKey, raw: &str) -> Result<Rgb, ApplyError> {
    Rgb::parse_hex(raw.trim()).ok_or_else(|| ApplyError::Malformed {
        key,
        value: raw.to_string(),
        expected: "#RRGGBB colour",
    })
}

fn parse_opacity(key: SettingKey, raw: &str) -> Result<Opacity, ApplyError> {
    let trimmed = raw.trim();
    let value: f64 = trimmed.parse().map_err(|_| ApplyError::Malformed {
        key,
        value: trimmed.to_string(),
        expected: "decimal opacity",
    })?;

    if Opacity::is_off_grid(value) {
        return Err(ApplyError::Malformed {
            key,
            value: trimmed.to_string(),
            expected: "opacity in whole percent steps (0.01)",
        });
    }

    let range = Opacity::stored_range();
    Opacity::from_stored(value).ok_or_else(|| ApplyError::OutOfRange {
        key,
        value: trimmed.to_string(),
        min: range.start().to_string(),
        max: range.end().to_string(),
    })
}

fn parse_label(key: SettingKey, raw: &str) -> Result<String, ApplyError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ApplyError::EmptyValue { key });
    }
    Ok(trimmed.to_string())
}
