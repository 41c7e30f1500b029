//! Controls for one line layer (inner or outer)

use eframe::egui;

use super::{ControlDrafts, Edit, color_row};
use crate::config::keys::{ColorGroup, SettingKey};
use crate::config::reticle::LineLayer;
use crate::config::reticle::ReticleConfiguration;
use crate::constants::validation::*;
use crate::gui::constants::*;

/// Which of the two line layers a section edits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineSlot {
    Inner,
    Outer,
}

/// Keys a line layer section writes to
pub struct LineKeys {
    pub title: &'static str,
    pub slot: LineSlot,
    pub enabled: SettingKey,
    pub length: SettingKey,
    pub thickness: SettingKey,
    pub offset: SettingKey,
    pub outline_enabled: SettingKey,
    pub outline_thickness: SettingKey,
    pub color: ColorGroup,
    pub outline_color: ColorGroup,
}

impl LineKeys {
    pub const INNER: LineKeys = LineKeys {
        title: "Inner Lines",
        slot: LineSlot::Inner,
        enabled: SettingKey::InnerEnabled,
        length: SettingKey::InnerLength,
        thickness: SettingKey::InnerThickness,
        offset: SettingKey::InnerOffset,
        outline_enabled: SettingKey::InnerOutlineEnabled,
        outline_thickness: SettingKey::InnerOutlineThickness,
        color: ColorGroup::Inner,
        outline_color: ColorGroup::InnerOutline,
    };

    pub const OUTER: LineKeys = LineKeys {
        title: "Outer Lines",
        slot: LineSlot::Outer,
        enabled: SettingKey::OuterEnabled,
        length: SettingKey::OuterLength,
        thickness: SettingKey::OuterThickness,
        offset: SettingKey::OuterOffset,
        outline_enabled: SettingKey::OuterOutlineEnabled,
        outline_thickness: SettingKey::OuterOutlineThickness,
        color: ColorGroup::Outer,
        outline_color: ColorGroup::OuterOutline,
    };

    pub fn layer<'a>(&self, config: &'a ReticleConfiguration) -> &'a LineLayer {
        match self.slot {
            LineSlot::Inner => &config.inner,
            LineSlot::Outer => &config.outer,
        }
    }
}

pub fn ui(
    ui: &mut egui::Ui,
    keys: &LineKeys,
    config: &ReticleConfiguration,
    drafts: &mut ControlDrafts,
) -> Vec<Edit> {
    let mut edits = Vec::new();
    let layer = keys.layer(config);

    ui.group(|ui| {
        ui.label(egui::RichText::new(keys.title).strong());
        ui.add_space(ITEM_SPACING);

        toggle(ui, "Enabled", layer.enabled, keys.enabled, &mut edits);

        // Hidden layers keep their values; only the toggle is offered
        if !layer.enabled {
            return;
        }

        number(ui, "Length:", layer.length, MIN_LENGTH..=MAX_LENGTH, keys.length, &mut edits);
        number(ui, "Thickness:", layer.thickness, MIN_THICKNESS..=MAX_THICKNESS, keys.thickness, &mut edits);
        number(ui, "Offset:", layer.offset, MIN_OFFSET..=MAX_OFFSET, keys.offset, &mut edits);
        color_row::ui(ui, "Color:", keys.color, config, drafts, &mut edits);

        ui.add_space(ITEM_SPACING);
        toggle(ui, "Outline", layer.outline.enabled, keys.outline_enabled, &mut edits);
        if layer.outline.enabled {
            ui.indent((keys.title, "outline"), |ui| {
                number(
                    ui,
                    "Thickness:",
                    layer.outline.thickness,
                    MIN_OUTLINE_THICKNESS..=MAX_OUTLINE_THICKNESS,
                    keys.outline_thickness,
                    &mut edits,
                );
                color_row::ui(ui, "Color:", keys.outline_color, config, drafts, &mut edits);
            });
        }
    });

    edits
}

pub(super) fn toggle(ui: &mut egui::Ui, label: &str, current: bool, key: SettingKey, edits: &mut Vec<Edit>) {
    let mut value = current;
    if ui.checkbox(&mut value, label).changed() {
        edits.push(Edit::Field(key, value.to_string()));
    }
}

pub(super) fn number(
    ui: &mut egui::Ui,
    label: &str,
    current: u32,
    range: std::ops::RangeInclusive<u32>,
    key: SettingKey,
    edits: &mut Vec<Edit>,
) {
    ui.horizontal(|ui| {
        ui.label(label);
        let mut value = current;
        if ui.add(egui::DragValue::new(&mut value).range(range)).changed() {
            edits.push(Edit::Field(key, value.to_string()));
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_keys_pick_their_layer() {
        let mut config = ReticleConfiguration::default();
        config.inner.length = 11;
        config.outer.length = 22;

        assert_eq!(LineKeys::INNER.layer(&config).length, 11);
        assert_eq!(LineKeys::OUTER.layer(&config).length, 22);
        assert_eq!(LineKeys::INNER.slot, LineSlot::Inner);
        assert_eq!(LineKeys::OUTER.slot, LineSlot::Outer);
    }

    #[test]
    fn test_line_keys_write_their_own_layer() {
        for keys in [LineKeys::INNER, LineKeys::OUTER] {
            let mut config = ReticleConfiguration::default();
            config.set(keys.length, "77").unwrap();
            config.set(keys.offset, "5").unwrap();
            assert_eq!(keys.layer(&config).length, 77);
            assert_eq!(keys.layer(&config).reach(), 82);
        }
    }

    #[test]
    fn test_line_keys_colour_groups_match_keys() {
        for keys in [LineKeys::INNER, LineKeys::OUTER] {
            let color = keys.color.key().as_str();
            let outline = keys.outline_color.key().as_str();
            let prefix = keys.enabled.as_str().trim_end_matches("_enabled");
            assert!(color.starts_with(prefix), "{color} vs {prefix}");
            assert!(outline.starts_with(prefix), "{outline} vs {prefix}");
        }
    }
}
