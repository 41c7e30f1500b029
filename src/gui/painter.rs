//! egui render surface for the reticle preview

use eframe::egui;

use crate::color::Rgb;
use crate::compositor::{DrawablePrimitive, LayeredPrimitive, Point};
use crate::sync::RenderSurface;

/// Holds the latest composed frame until egui asks for a repaint
pub struct PreviewSurface {
    frame: Vec<LayeredPrimitive>,
    opacity: f32,
    pub visible: bool,
}

impl PreviewSurface {
    pub fn new() -> Self {
        Self {
            frame: Vec::new(),
            opacity: 1.0,
            visible: true,
        }
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    pub fn primitive_count(&self) -> usize {
        self.frame.len()
    }

    /// Paint the frame around `center`, scaled by `zoom`
    pub fn paint(&self, painter: &egui::Painter, center: egui::Pos2, zoom: f32) {
        if !self.visible {
            return;
        }

        for item in &self.frame {
            match &item.primitive {
                DrawablePrimitive::Line {
                    from,
                    to,
                    stroke_color,
                    stroke_width,
                } => {
                    painter.line_segment(
                        [to_screen(center, *from, zoom), to_screen(center, *to, zoom)],
                        egui::Stroke::new(stroke_width * zoom, to_color32(*stroke_color, self.opacity)),
                    );
                }
                DrawablePrimitive::Oval {
                    center: oval_center,
                    radius,
                    fill_color,
                    outline_color,
                    outline_width,
                } => {
                    let fill = fill_color
                        .map(|c| to_color32(c, self.opacity))
                        .unwrap_or(egui::Color32::TRANSPARENT);
                    let stroke = outline_color
                        .map(|c| egui::Stroke::new(outline_width * zoom, to_color32(c, self.opacity)))
                        .unwrap_or(egui::Stroke::NONE);
                    painter.circle(to_screen(center, *oval_center, zoom), radius * zoom, fill, stroke);
                }
            }
        }
    }
}

impl Default for PreviewSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderSurface for PreviewSurface {
    fn on_configuration_changed(&mut self, primitives: &[LayeredPrimitive], opacity: f32) {
        self.frame = primitives.to_vec();
        self.opacity = opacity;
    }
}

/// Local reticle coordinates to screen space
pub fn to_screen(center: egui::Pos2, point: Point, zoom: f32) -> egui::Pos2 {
    egui::pos2(center.x + point.x * zoom, center.y + point.y * zoom)
}

pub fn to_color32(rgb: Rgb, opacity: f32) -> egui::Color32 {
    egui::Color32::from_rgb(rgb.red, rgb.green, rgb.blue).gamma_multiply(opacity.clamp(0.0, 1.0))
}
