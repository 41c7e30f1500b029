//! Hex field, swatch and per-channel sliders for one colour

use eframe::egui;

use super::{ControlDrafts, Edit};
use crate::color::Channel;
use crate::config::keys::ColorGroup;
use crate::config::reticle::ReticleConfiguration;
use crate::gui::constants::*;
use crate::gui::painter::to_color32;

pub fn ui(
    ui: &mut egui::Ui,
    label: &str,
    group: ColorGroup,
    config: &ReticleConfiguration,
    drafts: &mut ControlDrafts,
    edits: &mut Vec<Edit>,
) {
    let rgb = config.color(group);

    ui.horizontal(|ui| {
        ui.label(label);

        let text = drafts.color_mut(group);
        let response = ui.add(egui::TextEdit::singleline(text).desired_width(HEX_FIELD_WIDTH));
        if response.changed() {
            edits.push(Edit::Field(group.key(), text.clone()));
        }

        let (rect, _) = ui.allocate_exact_size(egui::vec2(SWATCH_SIZE, SWATCH_SIZE), egui::Sense::hover());
        ui.painter()
            .rect_filled(rect, egui::CornerRadius::ZERO, to_color32(rgb, 1.0));
    });

    ui.indent(("channels", group.key().as_str()), |ui| {
        for channel in Channel::ALL {
            let mut value = rgb.channel(channel);
            if ui
                .add(egui::Slider::new(&mut value, 0..=255).text(channel.label()))
                .changed()
            {
                edits.push(Edit::Channel(group, channel, value));
            }
        }
    });
}
