use eframe::egui;

use super::line_layer::{number, toggle};
use super::{ControlDrafts, Edit, color_row};
use crate::config::keys::{ColorGroup, SettingKey};
use crate::config::reticle::ReticleConfiguration;
use crate::constants::validation::*;
use crate::gui::constants::*;

pub fn ui(ui: &mut egui::Ui, config: &ReticleConfiguration, drafts: &mut ControlDrafts) -> Vec<Edit> {
    let mut edits = Vec::new();
    let dot = &config.center_dot;

    ui.group(|ui| {
        ui.label(egui::RichText::new("Center Dot").strong());
        ui.add_space(ITEM_SPACING);

        toggle(ui, "Enabled", dot.enabled, SettingKey::CenterDotEnabled, &mut edits);
        if !dot.enabled {
            return;
        }

        number(ui, "Size:", dot.size, MIN_DOT_SIZE..=MAX_DOT_SIZE, SettingKey::CenterDotSize, &mut edits);
        color_row::ui(ui, "Color:", ColorGroup::CenterDot, config, drafts, &mut edits);

        ui.add_space(ITEM_SPACING);
        toggle(
            ui,
            "Outline",
            dot.outline.enabled,
            SettingKey::CenterDotOutlineEnabled,
            &mut edits,
        );
        if dot.outline.enabled {
            ui.indent("center_dot_outline", |ui| {
                number(
                    ui,
                    "Thickness:",
                    dot.outline.thickness,
                    MIN_OUTLINE_THICKNESS..=MAX_OUTLINE_THICKNESS,
                    SettingKey::CenterDotOutlineThickness,
                    &mut edits,
                );
                color_row::ui(ui, "Color:", ColorGroup::CenterDotOutline, config, drafts, &mut edits);
            });
        }
    });

    edits
}
