//! Opacity, toggle hotkey and preset buttons

use eframe::egui;

use super::{ControlDrafts, Edit};
use crate::config::keys::SettingKey;
use crate::config::reticle::ReticleConfiguration;
use crate::constants::validation::{MAX_OPACITY_PERCENT, MIN_OPACITY_PERCENT};
use crate::gui::constants::*;
use crate::presets::Preset;

pub fn ui(ui: &mut egui::Ui, config: &ReticleConfiguration, drafts: &mut ControlDrafts) -> Vec<Edit> {
    let mut edits = Vec::new();

    ui.group(|ui| {
        ui.label(egui::RichText::new("General").strong());
        ui.add_space(ITEM_SPACING);

        ui.horizontal(|ui| {
            ui.label("Opacity:");
            let mut percent = config.opacity.percent();
            if ui
                .add(egui::Slider::new(&mut percent, MIN_OPACITY_PERCENT..=MAX_OPACITY_PERCENT).suffix("%"))
                .changed()
            {
                edits.push(Edit::OpacityPercent(percent));
            }
        });

        ui.horizontal(|ui| {
            ui.label("Toggle Hotkey:");
            let response = ui.add(egui::TextEdit::singleline(&mut drafts.hotkey).desired_width(HEX_FIELD_WIDTH));
            if response.changed() {
                edits.push(Edit::Field(SettingKey::HotkeyToggle, drafts.hotkey.clone()));
            }
        });

        ui.add_space(ITEM_SPACING);
        ui.horizontal(|ui| {
            ui.label("Presets:");
            for preset in Preset::ALL {
                if ui.button(preset.name()).clicked() {
                    edits.push(Edit::Preset(preset));
                }
            }
        });
    });

    edits
}
