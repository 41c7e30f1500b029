//! Reticle layer composition
//!
//! Turns a [`ReticleConfiguration`] into an ordered, back-to-front list of
//! primitives around a local origin. Pure: no I/O, no state, same input gives
//! the same output.
//!
//! Fixed z-order: outer outline, outer lines, inner outline, inner lines,
//! centre dot outline, centre dot. Inner lines must never be covered by outer
//! lines and the dot is always on top.

use serde::Serialize;

use crate::color::Rgb;
use crate::config::reticle::{DotLayer, LineLayer, ReticleConfiguration};

/// Upper bound on primitives per frame (two lines per line layer, doubled by
/// outlines, plus two ovals)
pub const MAX_PRIMITIVES: usize = 10;

/// Position relative to the reticle centre, +y pointing down
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: Point) -> f32 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DrawablePrimitive {
    Line {
        from: Point,
        to: Point,
        stroke_color: Rgb,
        stroke_width: f32,
    },
    Oval {
        center: Point,
        radius: f32,
        fill_color: Option<Rgb>,
        outline_color: Option<Rgb>,
        outline_width: f32,
    },
}

/// Which layer a primitive came from; declaration order is paint order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerTag {
    OuterOutline,
    Outer,
    InnerOutline,
    Inner,
    DotOutline,
    Dot,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayeredPrimitive {
    pub layer: LayerTag,
    #[serde(flatten)]
    pub primitive: DrawablePrimitive,
}

/// Build the frame for `config`, back to front
pub fn compose(config: &ReticleConfiguration) -> Vec<LayeredPrimitive> {
    let mut frame = Vec::with_capacity(MAX_PRIMITIVES);

    push_line_layer(&mut frame, &config.outer, LayerTag::OuterOutline, LayerTag::Outer);
    push_line_layer(&mut frame, &config.inner, LayerTag::InnerOutline, LayerTag::Inner);
    push_dot_layer(&mut frame, &config.center_dot);

    frame
}

fn push_line_layer(
    frame: &mut Vec<LayeredPrimitive>,
    layer: &LineLayer,
    outline_tag: LayerTag,
    base_tag: LayerTag,
) {
    if !layer.enabled {
        return;
    }

    let reach = layer.reach() as f32;

    if layer.outline.enabled {
        let width = (layer.thickness + 2 * layer.outline.thickness) as f32;
        push_cross(frame, outline_tag, reach, layer.outline.color, width);
    }

    push_cross(frame, base_tag, reach, layer.color, layer.thickness as f32);
}

/// Horizontal then vertical line, each spanning `-reach..=reach`.
/// A zero reach still yields two (point) lines.
fn push_cross(frame: &mut Vec<LayeredPrimitive>, layer: LayerTag, reach: f32, color: Rgb, width: f32) {
    let segments = [
        (Point::new(-reach, 0.0), Point::new(reach, 0.0)),
        (Point::new(0.0, -reach), Point::new(0.0, reach)),
    ];

    for (from, to) in segments {
        frame.push(LayeredPrimitive {
            layer,
            primitive: DrawablePrimitive::Line {
                from,
                to,
                stroke_color: color,
                stroke_width: width,
            },
        });
    }
}

fn push_dot_layer(frame: &mut Vec<LayeredPrimitive>, dot: &DotLayer) {
    if !dot.enabled {
        return;
    }

    if dot.outline.enabled {
        frame.push(LayeredPrimitive {
            layer: LayerTag::DotOutline,
            primitive: DrawablePrimitive::Oval {
                center: Point::ORIGIN,
                radius: (dot.size + dot.outline.thickness) as f32,
                fill_color: Some(dot.outline.color),
                outline_color: None,
                outline_width: 0.0,
            },
        });
    }

    frame.push(LayeredPrimitive {
        layer: LayerTag::Dot,
        primitive: DrawablePrimitive::Oval {
            center: Point::ORIGIN,
            radius: dot.size as f32,
            fill_color: Some(dot.color),
            outline_color: None,
            outline_width: 0.0,
        },
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::keys::SettingKey;

    fn all_disabled() -> ReticleConfiguration {
        let mut config = ReticleConfiguration::default();
        config.inner.enabled = false;
        config.outer.enabled = false;
        config.center_dot.enabled = false;
        config
    }

    fn tags(frame: &[LayeredPrimitive]) -> Vec<LayerTag> {
        let mut tags: Vec<LayerTag> = frame.iter().map(|p| p.layer).collect();
        tags.dedup();
        tags
    }

    fn line_widths(frame: &[LayeredPrimitive]) -> Vec<f32> {
        frame
            .iter()
            .filter_map(|p| match p.primitive {
                DrawablePrimitive::Line { stroke_width, .. } => Some(stroke_width),
                DrawablePrimitive::Oval { .. } => None,
            })
            .collect()
    }

    #[test]
    fn test_everything_disabled_is_empty() {
        assert!(compose(&all_disabled()).is_empty());
    }

    #[test]
    fn test_inner_only_without_outline() {
        let mut config = all_disabled();
        config.inner.enabled = true;
        config.inner.outline.enabled = false;
        config.inner.thickness = 3;

        let frame = compose(&config);
        assert_eq!(frame.len(), 2);
        assert_eq!(line_widths(&frame), vec![3.0, 3.0]);

        let reach = config.inner.reach() as f32;
        assert_eq!(
            frame[0].primitive,
            DrawablePrimitive::Line {
                from: Point::new(-reach, 0.0),
                to: Point::new(reach, 0.0),
                stroke_color: config.inner.color,
                stroke_width: 3.0,
            }
        );
        assert_eq!(
            frame[1].primitive,
            DrawablePrimitive::Line {
                from: Point::new(0.0, -reach),
                to: Point::new(0.0, reach),
                stroke_color: config.inner.color,
                stroke_width: 3.0,
            }
        );
    }

    #[test]
    fn test_inner_outline_precedes_base_and_is_wider() {
        let mut config = all_disabled();
        config.inner.enabled = true;
        config.inner.thickness = 2;
        config.inner.outline.enabled = true;
        config.inner.outline.thickness = 1;

        let frame = compose(&config);
        assert_eq!(frame.len(), 4);
        assert_eq!(line_widths(&frame), vec![4.0, 4.0, 2.0, 2.0]);
        assert_eq!(
            frame.iter().map(|p| p.layer).collect::<Vec<_>>(),
            vec![
                LayerTag::InnerOutline,
                LayerTag::InnerOutline,
                LayerTag::Inner,
                LayerTag::Inner
            ]
        );
    }

    #[test]
    fn test_full_z_order() {
        let mut config = ReticleConfiguration::default();
        config.center_dot.enabled = true;

        let frame = compose(&config);
        assert_eq!(frame.len(), MAX_PRIMITIVES);
        assert_eq!(
            tags(&frame),
            vec![
                LayerTag::OuterOutline,
                LayerTag::Outer,
                LayerTag::InnerOutline,
                LayerTag::Inner,
                LayerTag::DotOutline,
                LayerTag::Dot,
            ]
        );
    }

    #[test]
    fn test_z_order_survivors_keep_relative_order() {
        let mut config = ReticleConfiguration::default();
        config.center_dot.enabled = true;
        config.outer.outline.enabled = false;
        config.inner.enabled = false;

        let frame = compose(&config);
        assert_eq!(
            tags(&frame),
            vec![LayerTag::Outer, LayerTag::DotOutline, LayerTag::Dot]
        );
        assert!(frame.windows(2).all(|w| w[0].layer <= w[1].layer));
    }

    #[test]
    fn test_zero_length_still_emits_lines() {
        let mut config = all_disabled();
        config.outer.enabled = true;
        config.outer.outline.enabled = false;
        config.outer.length = 0;
        config.outer.offset = 0;

        let frame = compose(&config);
        assert_eq!(frame.len(), 2);
        for p in &frame {
            match p.primitive {
                DrawablePrimitive::Line { from, to, .. } => assert_eq!(from, to),
                DrawablePrimitive::Oval { .. } => panic!("unexpected oval"),
            }
        }
    }

    #[test]
    fn test_center_dot_outline_radius() {
        let mut config = all_disabled();
        config.center_dot.enabled = true;
        config.center_dot.size = 4;
        config.center_dot.outline.thickness = 2;

        let frame = compose(&config);
        let radii: Vec<f32> = frame
            .iter()
            .filter_map(|p| match p.primitive {
                DrawablePrimitive::Oval { radius, .. } => Some(radius),
                DrawablePrimitive::Line { .. } => None,
            })
            .collect();
        assert_eq!(radii, vec![6.0, 4.0]);
        assert_eq!(frame[1].layer, LayerTag::Dot);
    }

    #[test]
    fn test_dot_layers_are_filled_discs() {
        let mut config = all_disabled();
        config.center_dot.enabled = true;
        config.center_dot.color = Rgb::new(0, 255, 0);

        for item in compose(&config) {
            match item.primitive {
                DrawablePrimitive::Oval {
                    fill_color,
                    outline_color,
                    outline_width,
                    ..
                } => {
                    assert!(fill_color.is_some(), "{:?}", item.layer);
                    assert_eq!(outline_color, None);
                    assert_eq!(outline_width, 0.0);
                }
                DrawablePrimitive::Line { .. } => panic!("dot layer emitted a line"),
            }
        }
    }

    #[test]
    fn test_disabled_layer_ignores_its_fields() {
        let mut config = ReticleConfiguration::default();
        let before = compose(&config);
        config.outer.enabled = false;
        config.outer.length = 200;
        config.outer.thickness = 50;
        let hidden = compose(&config);
        config.outer.length = 1;
        config.outer.thickness = 1;

        assert_eq!(hidden, compose(&config));
        assert_eq!(hidden.len(), before.len() - 4);
    }

    #[test]
    fn test_inner_reach_tracks_length_from_defaults() {
        let mut config = ReticleConfiguration::default();
        for length in 1..=50 {
            config.set(SettingKey::InnerLength, &length.to_string()).unwrap();
            let expected = (config.inner.offset + length) as f32;

            for p in compose(&config).iter().filter(|p| p.layer == LayerTag::Inner) {
                let DrawablePrimitive::Line { from, to, .. } = p.primitive else {
                    panic!("inner layer must only emit lines");
                };
                assert_eq!(from.distance_to(Point::ORIGIN), expected);
                assert_eq!(to.distance_to(Point::ORIGIN), expected);
            }
        }
    }

    #[test]
    fn test_compose_is_deterministic() {
        let config = ReticleConfiguration::default();
        assert_eq!(compose(&config), compose(&config));
    }
}
