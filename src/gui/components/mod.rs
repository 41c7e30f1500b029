//! Settings panel components
//!
//! Components never write the configuration themselves. They read a snapshot
//! and return the edits the user made this frame; the manager routes each
//! edit through the sync engine.

pub mod color_row;
pub mod dot_layer;
pub mod global_settings;
pub mod line_layer;

use crate::color::Channel;
use crate::config::keys::{ColorGroup, SettingKey};
use crate::config::reticle::ReticleConfiguration;
use crate::presets::Preset;

/// One user edit from a control
#[derive(Debug, Clone, PartialEq)]
pub enum Edit {
    Field(SettingKey, String),
    Channel(ColorGroup, Channel, u8),
    OpacityPercent(u8),
    Preset(Preset),
}

/// Text buffers for controls that accept free typing
///
/// A buffer keeps whatever the user typed, valid or not; only the engine
/// decides what reaches the configuration.
pub struct ControlDrafts {
    colors: [String; 6],
    pub hotkey: String,
}

impl ControlDrafts {
    pub fn from_config(config: &ReticleConfiguration) -> Self {
        Self {
            colors: ColorGroup::ALL.map(|group| config.color(group).to_hex_string()),
            hotkey: config.toggle_hotkey.clone(),
        }
    }

    pub fn color_mut(&mut self, group: ColorGroup) -> &mut String {
        &mut self.colors[group_index(group)]
    }

    /// Overwrite a colour buffer from the configuration (after a slider edit)
    pub fn reset_color(&mut self, group: ColorGroup, config: &ReticleConfiguration) {
        self.colors[group_index(group)] = config.color(group).to_hex_string();
    }
}

/// Slot in `ControlDrafts::colors`; matches the order of `ColorGroup::ALL`
fn group_index(group: ColorGroup) -> usize {
    match group {
        ColorGroup::Inner => 0,
        ColorGroup::InnerOutline => 1,
        ColorGroup::Outer => 2,
        ColorGroup::OuterOutline => 3,
        ColorGroup::CenterDot => 4,
        ColorGroup::CenterDotOutline => 5,
    }
}
