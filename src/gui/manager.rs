//! Settings window implemented with egui/eframe
//!
//! Left panel holds the controls, the rest of the window is the live preview.

use anyhow::{Result, anyhow};
use eframe::{CreationContext, NativeOptions, egui};
use tracing::{info, warn};

use super::components::{self, ControlDrafts, Edit};
use super::constants::*;
use super::painter::PreviewSurface;
use crate::config::keys::SettingKey;
use crate::config::store::{ConfigurationStore, FileStore};
use crate::sync::{ApplyOutcome, RenderSurface, SettingsSyncEngine};

const TITLE: &str = "Reticle Overlay";

struct ManagerApp {
    engine: SettingsSyncEngine<FileStore, PreviewSurface>,
    drafts: ControlDrafts,
    toggle_key: Option<egui::Key>,
    zoom: f32,
}

impl ManagerApp {
    fn new(_cc: &CreationContext<'_>, engine: SettingsSyncEngine<FileStore, PreviewSurface>) -> Self {
        info!(path = %engine.store().path().display(), "Initializing settings window");

        let drafts = ControlDrafts::from_config(engine.config());
        let toggle_key = resolve_hotkey(&engine.config().toggle_hotkey);

        Self {
            engine,
            drafts,
            toggle_key,
            zoom: DEFAULT_ZOOM,
        }
    }

    fn apply(&mut self, edits: Vec<Edit>) {
        for edit in edits {
            let hotkey_changed = matches!(edit, Edit::Field(SettingKey::HotkeyToggle, _));
            let outcome = apply_edit(&mut self.engine, &mut self.drafts, edit);
            if hotkey_changed && outcome.is_applied() {
                self.toggle_key = resolve_hotkey(&self.engine.config().toggle_hotkey);
            }
        }
    }

    fn handle_hotkey(&mut self, ctx: &egui::Context) {
        // Typing the key into a text field should not hide the reticle
        if ctx.wants_keyboard_input() {
            return;
        }
        if let Some(key) = self.toggle_key {
            if ctx.input(|i| i.key_pressed(key)) {
                self.engine.surface_mut().toggle();
                info!(visible = self.engine.surface().visible, "Reticle visibility toggled by hotkey");
            }
        }
    }

    fn settings_panel(&mut self, ui: &mut egui::Ui) -> Vec<Edit> {
        let mut edits = Vec::new();
        let config = self.engine.config();

        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.add_space(PADDING);
            ui.heading(TITLE);
            ui.add_space(SECTION_SPACING);

            edits.extend(components::global_settings::ui(ui, config, &mut self.drafts));
            ui.add_space(SECTION_SPACING);

            edits.extend(components::line_layer::ui(
                ui,
                &components::line_layer::LineKeys::INNER,
                config,
                &mut self.drafts,
            ));
            ui.add_space(SECTION_SPACING);

            edits.extend(components::line_layer::ui(
                ui,
                &components::line_layer::LineKeys::OUTER,
                config,
                &mut self.drafts,
            ));
            ui.add_space(SECTION_SPACING);

            edits.extend(components::dot_layer::ui(ui, config, &mut self.drafts));
            ui.add_space(PADDING);
        });

        edits
    }

    fn preview_panel(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let surface = self.engine.surface_mut();
            let label = if surface.visible { "Hide Reticle" } else { "Show Reticle" };
            if ui.button(label).clicked() {
                surface.toggle();
            }

            ui.add_space(ITEM_SPACING);
            ui.add(egui::Slider::new(&mut self.zoom, MIN_ZOOM..=MAX_ZOOM).text("Zoom"));

            ui.add_space(ITEM_SPACING);
            ui.label(format!("{} primitives", surface.primitive_count()));
        });

        ui.add_space(ITEM_SPACING);

        let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::hover());
        let rect = response.rect;
        let center = rect.center();

        painter.rect_filled(rect, egui::CornerRadius::ZERO, PREVIEW_BACKGROUND);
        let guide = egui::Stroke::new(1.0, PREVIEW_GUIDE);
        painter.line_segment([egui::pos2(rect.left(), center.y), egui::pos2(rect.right(), center.y)], guide);
        painter.line_segment([egui::pos2(center.x, rect.top()), egui::pos2(center.x, rect.bottom())], guide);

        self.engine.surface().paint(&painter, center, self.zoom);
    }
}

impl eframe::App for ManagerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_hotkey(ctx);

        let mut edits = Vec::new();
        egui::SidePanel::left("settings")
            .resizable(false)
            .exact_width(SETTINGS_PANEL_WIDTH)
            .show(ctx, |ui| {
                edits = self.settings_panel(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.preview_panel(ui);
        });

        if !edits.is_empty() {
            self.apply(edits);
            ctx.request_repaint();
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!("Settings window exiting");
    }
}

/// Route one control edit through the engine and keep the text drafts in step
fn apply_edit<S, R>(engine: &mut SettingsSyncEngine<S, R>, drafts: &mut ControlDrafts, edit: Edit) -> ApplyOutcome
where
    S: ConfigurationStore,
    R: RenderSurface,
{
    match edit {
        Edit::Field(key, value) => engine.apply_field(key, &value),
        Edit::Channel(group, channel, value) => {
            let outcome = engine.apply_channel(group, channel, &value.to_string());
            if outcome.is_applied() {
                drafts.reset_color(group, engine.config());
            }
            outcome
        }
        Edit::OpacityPercent(percent) => engine.apply_opacity_percent(&percent.to_string()),
        Edit::Preset(preset) => {
            info!(preset = %preset, "Applying preset");
            preset.apply(engine)
        }
    }
}

/// Map a stored hotkey label to an egui key
///
/// Labels egui cannot name are kept in the configuration; only the in-window
/// shortcut is unavailable.
fn resolve_hotkey(label: &str) -> Option<egui::Key> {
    let key = egui::Key::from_name(label.trim());
    if key.is_none() {
        warn!(hotkey = label, "Toggle hotkey is not a key egui can listen for");
    }
    key
}

pub fn run_gui(engine: SettingsSyncEngine<FileStore, PreviewSurface>) -> Result<()> {
    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([WINDOW_WIDTH, WINDOW_HEIGHT])
            .with_min_inner_size([WINDOW_MIN_WIDTH, WINDOW_MIN_HEIGHT])
            .with_title(TITLE),
        ..Default::default()
    };

    eframe::run_native(
        TITLE,
        options,
        Box::new(|cc| Ok(Box::new(ManagerApp::new(cc, engine)))),
    )
    .map_err(|err| anyhow!("Failed to launch settings window: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Channel;
    use crate::config::keys::ColorGroup;
    use crate::config::store::MemoryStore;
    use crate::presets::Preset;
    use crate::sync::RecordingSurface;

    fn engine() -> SettingsSyncEngine<MemoryStore, RecordingSurface> {
        SettingsSyncEngine::new(MemoryStore::default(), RecordingSurface::default())
    }

    #[test]
    fn test_channel_edit_resets_hex_draft() {
        let mut engine = engine();
        let mut drafts = ControlDrafts::from_config(engine.config());
        drafts.color_mut(ColorGroup::Inner).push_str("garbage");

        let outcome = apply_edit(&mut engine, &mut drafts, Edit::Channel(ColorGroup::Inner, Channel::Blue, 128));

        assert!(outcome.is_applied());
        assert_eq!(drafts.color_mut(ColorGroup::Inner), "#FF0080");
        assert_eq!(engine.store().values["inner_color"], "#FF0080");
    }

    #[test]
    fn test_invalid_hex_draft_is_kept() {
        let mut engine = engine();
        let mut drafts = ControlDrafts::from_config(engine.config());
        drafts.color_mut(ColorGroup::Outer).clear();
        drafts.color_mut(ColorGroup::Outer).push_str("#12");

        let outcome = apply_edit(&mut engine, &mut drafts, Edit::Field(SettingKey::OuterColor, "#12".to_string()));

        assert!(!outcome.is_applied());
        assert_eq!(drafts.color_mut(ColorGroup::Outer), "#12");
        assert_eq!(engine.config().outer.color.to_hex_string(), "#FF0000");
    }

    #[test]
    fn test_opacity_and_preset_edits() {
        let mut engine = engine();
        let mut drafts = ControlDrafts::from_config(engine.config());

        assert!(apply_edit(&mut engine, &mut drafts, Edit::OpacityPercent(55)).is_applied());
        assert_eq!(engine.store().values["opacity"], "0.55");

        assert!(apply_edit(&mut engine, &mut drafts, Edit::Preset(Preset::Dot)).is_applied());
        assert!(engine.config().center_dot.enabled);
        assert!(!engine.config().inner.enabled);
    }

    #[test]
    fn test_resolve_hotkey() {
        assert_eq!(resolve_hotkey("F1"), Some(egui::Key::F1));
        assert_eq!(resolve_hotkey(" F5 "), Some(egui::Key::F5));
        assert_eq!(resolve_hotkey("NotAKey"), None);
    }
}
