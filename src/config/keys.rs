//! Canonical setting keys
//!
//! One flat namespace shared by the settings file, the apply entry points and
//! the CLI. Every key has a documented default which is backfilled on load.

use std::fmt;
use std::str::FromStr;

use crate::constants::defaults;
use crate::error::ApplyError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SettingKey {
    InnerEnabled,
    InnerLength,
    InnerThickness,
    InnerOffset,
    InnerColor,
    InnerOutlineEnabled,
    InnerOutlineThickness,
    InnerOutlineColor,
    OuterEnabled,
    OuterLength,
    OuterThickness,
    OuterOffset,
    OuterColor,
    OuterOutlineEnabled,
    OuterOutlineThickness,
    OuterOutlineColor,
    CenterDotEnabled,
    CenterDotSize,
    CenterDotColor,
    CenterDotOutlineEnabled,
    CenterDotOutlineThickness,
    CenterDotOutlineColor,
    Opacity,
    HotkeyToggle,
}

/// A colour that is edited channel-by-channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorGroup {
    Inner,
    InnerOutline,
    Outer,
    OuterOutline,
    CenterDot,
    CenterDotOutline,
}

impl ColorGroup {
    pub const ALL: [ColorGroup; 6] = [
        ColorGroup::Inner,
        ColorGroup::InnerOutline,
        ColorGroup::Outer,
        ColorGroup::OuterOutline,
        ColorGroup::CenterDot,
        ColorGroup::CenterDotOutline,
    ];

    /// Key holding this group's `#RRGGBB` value
    pub fn key(self) -> SettingKey {
        match self {
            ColorGroup::Inner => SettingKey::InnerColor,
            ColorGroup::InnerOutline => SettingKey::InnerOutlineColor,
            ColorGroup::Outer => SettingKey::OuterColor,
            ColorGroup::OuterOutline => SettingKey::OuterOutlineColor,
            ColorGroup::CenterDot => SettingKey::CenterDotColor,
            ColorGroup::CenterDotOutline => SettingKey::CenterDotOutlineColor,
        }
    }
}

impl SettingKey {
    pub const ALL: [SettingKey; 24] = [
        SettingKey::InnerEnabled,
        SettingKey::InnerLength,
        SettingKey::InnerThickness,
        SettingKey::InnerOffset,
        SettingKey::InnerColor,
        SettingKey::InnerOutlineEnabled,
        SettingKey::InnerOutlineThickness,
        SettingKey::InnerOutlineColor,
        SettingKey::OuterEnabled,
        SettingKey::OuterLength,
        SettingKey::OuterThickness,
        SettingKey::OuterOffset,
        SettingKey::OuterColor,
        SettingKey::OuterOutlineEnabled,
        SettingKey::OuterOutlineThickness,
        SettingKey::OuterOutlineColor,
        SettingKey::CenterDotEnabled,
        SettingKey::CenterDotSize,
        SettingKey::CenterDotColor,
        SettingKey::CenterDotOutlineEnabled,
        SettingKey::CenterDotOutlineThickness,
        SettingKey::CenterDotOutlineColor,
        SettingKey::Opacity,
        SettingKey::HotkeyToggle,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SettingKey::InnerEnabled => "inner_enabled",
            SettingKey::InnerLength => "inner_length",
            SettingKey::InnerThickness => "inner_thickness",
            SettingKey::InnerOffset => "inner_offset",
            SettingKey::InnerColor => "inner_color",
            SettingKey::InnerOutlineEnabled => "inner_outline_enabled",
            SettingKey::InnerOutlineThickness => "inner_outline_thickness",
            SettingKey::InnerOutlineColor => "inner_outline_color",
            SettingKey::OuterEnabled => "outer_enabled",
            SettingKey::OuterLength => "outer_length",
            SettingKey::OuterThickness => "outer_thickness",
            SettingKey::OuterOffset => "outer_offset",
            SettingKey::OuterColor => "outer_color",
            SettingKey::OuterOutlineEnabled => "outer_outline_enabled",
            SettingKey::OuterOutlineThickness => "outer_outline_thickness",
            SettingKey::OuterOutlineColor => "outer_outline_color",
            SettingKey::CenterDotEnabled => "center_dot_enabled",
            SettingKey::CenterDotSize => "center_dot_size",
            SettingKey::CenterDotColor => "center_dot_color",
            SettingKey::CenterDotOutlineEnabled => "center_dot_outline_enabled",
            SettingKey::CenterDotOutlineThickness => "center_dot_outline_thickness",
            SettingKey::CenterDotOutlineColor => "center_dot_outline_color",
            SettingKey::Opacity => "opacity",
            SettingKey::HotkeyToggle => "hotkey_toggle",
        }
    }

    pub fn default_value(self) -> &'static str {
        match self {
            SettingKey::InnerEnabled => defaults::INNER_ENABLED,
            SettingKey::InnerLength => defaults::INNER_LENGTH,
            SettingKey::InnerThickness => defaults::INNER_THICKNESS,
            SettingKey::InnerOffset => defaults::INNER_OFFSET,
            SettingKey::InnerColor => defaults::INNER_COLOR,
            SettingKey::InnerOutlineEnabled => defaults::INNER_OUTLINE_ENABLED,
            SettingKey::InnerOutlineThickness => defaults::INNER_OUTLINE_THICKNESS,
            SettingKey::InnerOutlineColor => defaults::INNER_OUTLINE_COLOR,
            SettingKey::OuterEnabled => defaults::OUTER_ENABLED,
            SettingKey::OuterLength => defaults::OUTER_LENGTH,
            SettingKey::OuterThickness => defaults::OUTER_THICKNESS,
            SettingKey::OuterOffset => defaults::OUTER_OFFSET,
            SettingKey::OuterColor => defaults::OUTER_COLOR,
            SettingKey::OuterOutlineEnabled => defaults::OUTER_OUTLINE_ENABLED,
            SettingKey::OuterOutlineThickness => defaults::OUTER_OUTLINE_THICKNESS,
            SettingKey::OuterOutlineColor => defaults::OUTER_OUTLINE_COLOR,
            SettingKey::CenterDotEnabled => defaults::CENTER_DOT_ENABLED,
            SettingKey::CenterDotSize => defaults::CENTER_DOT_SIZE,
            SettingKey::CenterDotColor => defaults::CENTER_DOT_COLOR,
            SettingKey::CenterDotOutlineEnabled => defaults::CENTER_DOT_OUTLINE_ENABLED,
            SettingKey::CenterDotOutlineThickness => defaults::CENTER_DOT_OUTLINE_THICKNESS,
            SettingKey::CenterDotOutlineColor => defaults::CENTER_DOT_OUTLINE_COLOR,
            SettingKey::Opacity => defaults::OPACITY,
            SettingKey::HotkeyToggle => defaults::HOTKEY_TOGGLE,
        }
    }
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SettingKey {
    type Err = ApplyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SettingKey::ALL
            .iter()
            .copied()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| ApplyError::UnknownKey(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_key_names_are_unique_and_parse_back() {
        let names: HashSet<_> = SettingKey::ALL.iter().map(|k| k.as_str()).collect();
        assert_eq!(names.len(), SettingKey::ALL.len());
        for key in SettingKey::ALL {
            assert_eq!(key.as_str().parse::<SettingKey>(), Ok(key));
        }
    }

    #[test]
    fn test_unknown_key() {
        let err = "crosshair_size".parse::<SettingKey>().unwrap_err();
        assert_eq!(err, ApplyError::UnknownKey("crosshair_size".to_string()));
    }

    #[test]
    fn test_documented_defaults() {
        assert_eq!(SettingKey::InnerLength.default_value(), "15");
        assert_eq!(SettingKey::OuterOffset.default_value(), "8");
        assert_eq!(SettingKey::CenterDotEnabled.default_value(), "false");
        assert_eq!(SettingKey::Opacity.default_value(), "0.8");
        assert_eq!(SettingKey::HotkeyToggle.default_value(), "F1");
    }

    #[test]
    fn test_color_groups_map_to_color_keys() {
        for group in ColorGroup::ALL {
            assert!(group.key().as_str().ends_with("_color"));
        }
    }
}
