//! Turns a name list and a rotation angle into something drawable.
//!
//! [`layout`] is pure: it computes one [`WheelFrame`] per call and keeps nothing
//! around, so it is safe to call on every animation frame and after every pool
//! change. [`paint`] replays a frame onto any [`WheelSurface`].

use serde::{Deserialize, Serialize};

use crate::angle::arc_size;
use crate::constants::*;

/// How slices are colored. Either way the color depends on slice position only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub enum Palette {
    /// Cycles through [`PALETTE`].
    #[default]
    Fixed,
    /// Spreads hues evenly around the color wheel, one step per slice.
    HueRotation { saturation: f64, lightness: f64 },
}

impl Palette {
    pub fn color(&self, index: usize, count: usize) -> String {
        match self {
            Palette::Fixed => PALETTE[index % PALETTE.len()].to_string(),
            Palette::HueRotation { saturation, lightness } => {
                let hue = if count == 0 {
                    0.0
                } else {
                    (index % count) as f64 * 360.0 / count as f64
                };
                format!("hsl({:.1}, {}%, {}%)", hue, saturation, lightness)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub index: usize,
    pub name: String,
    pub start_angle: f64,
    pub end_angle: f64,
    pub color: String,
}

impl Segment {
    /// Direction the label is drawn along.
    pub fn bisector(&self) -> f64 {
        (self.start_angle + self.end_angle) / 2.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WheelFrame {
    /// Nothing to spin yet: a neutral disc with a prompt.
    Placeholder { message: String },
    Segments(Vec<Segment>),
}

impl WheelFrame {
    pub fn segments(&self) -> &[Segment] {
        match self {
            WheelFrame::Placeholder { .. } => &[],
            WheelFrame::Segments(segments) => segments,
        }
    }
}

pub fn layout(names: &[String], angle: f64, palette: Palette) -> WheelFrame {
    if names.is_empty() {
        return WheelFrame::Placeholder {
            message: EMPTY_WHEEL_MESSAGE.to_string(),
        };
    }

    let count = names.len();
    let segments = names
        .iter()
        .enumerate()
        .map(|(index, name)| {
            let (start_angle, end_angle) = WheelGeometry::slice_path(angle, index, count);
            Segment {
                index,
                name: name.clone(),
                start_angle,
                end_angle,
                color: palette.color(index, count),
            }
        })
        .collect();

    WheelFrame::Segments(segments)
}

/// Disc placement inside a drawing surface of the given size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WheelGeometry {
    pub width: f64,
    pub height: f64,
    pub center_x: f64,
    pub center_y: f64,
    pub radius: f64,
}

impl WheelGeometry {
    pub fn for_canvas(width: f64, height: f64) -> Self {
        let center_x = width / 2.0;
        let center_y = height / 2.0;
        Self {
            width,
            height,
            center_x,
            center_y,
            radius: (center_x.min(center_y) - WHEEL_MARGIN).max(0.0),
        }
    }

    /// Label position in the slice's rotated frame: near the rim, just below the bisector.
    pub fn label_anchor(&self) -> (f64, f64) {
        (self.radius - LABEL_RIM_INSET, LABEL_BASELINE_OFFSET)
    }

    /// Start/end angles of slice `index` for a wheel of `count` entries at `angle`.
    pub fn slice_path(angle: f64, index: usize, count: usize) -> (f64, f64) {
        let arc = arc_size(count);
        let start = angle + index as f64 * arc;
        (start, start + arc)
    }
}

/// Drawing primitives a frame needs. Implemented by the browser canvas and by test recorders.
pub trait WheelSurface {
    fn clear(&mut self, width: f64, height: f64);

    fn fill_disc(&mut self, center_x: f64, center_y: f64, radius: f64, color: &str);

    /// Pie slice from the center, filled then outlined.
    #[allow(clippy::too_many_arguments)]
    fn fill_slice(
        &mut self,
        center_x: f64,
        center_y: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        fill: &str,
        stroke: &str,
        stroke_width: f64,
    );

    /// Right-aligned text at (`x`, `y`) in a frame translated to the center and rotated by `rotation`.
    #[allow(clippy::too_many_arguments)]
    fn draw_rotated_label(
        &mut self,
        center_x: f64,
        center_y: f64,
        rotation: f64,
        x: f64,
        y: f64,
        text: &str,
        color: &str,
        font: &str,
    );

    fn draw_centered_text(&mut self, x: f64, y: f64, text: &str, color: &str, font: &str);
}

pub fn paint<S: WheelSurface + ?Sized>(frame: &WheelFrame, geometry: &WheelGeometry, surface: &mut S) {
    let WheelGeometry {
        width,
        height,
        center_x,
        center_y,
        radius,
    } = *geometry;

    surface.clear(width, height);

    match frame {
        WheelFrame::Placeholder { message } => {
            surface.fill_disc(center_x, center_y, radius, PLACEHOLDER_FILL);
            surface.draw_centered_text(center_x, center_y, message, PLACEHOLDER_TEXT_COLOR, PLACEHOLDER_FONT);
        }
        WheelFrame::Segments(segments) => {
            let (label_x, label_y) = geometry.label_anchor();
            for segment in segments {
                surface.fill_slice(
                    center_x,
                    center_y,
                    radius,
                    segment.start_angle,
                    segment.end_angle,
                    &segment.color,
                    SLICE_STROKE_COLOR,
                    SLICE_STROKE_WIDTH,
                );
                surface.draw_rotated_label(
                    center_x,
                    center_y,
                    segment.bisector(),
                    label_x,
                    label_y,
                    &segment.name,
                    LABEL_COLOR,
                    LABEL_FONT,
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::angle::TWO_PI;
    use std::f64::consts::PI;

    #[derive(Default)]
    struct Recorder {
        ops: Vec<String>,
    }

    impl WheelSurface for Recorder {
        fn clear(&mut self, width: f64, height: f64) {
            self.ops.push(format!("clear {width}x{height}"));
        }

        fn fill_disc(&mut self, _cx: f64, _cy: f64, radius: f64, color: &str) {
            self.ops.push(format!("disc {radius} {color}"));
        }

        fn fill_slice(
            &mut self,
            _cx: f64,
            _cy: f64,
            _radius: f64,
            _start: f64,
            _end: f64,
            fill: &str,
            _stroke: &str,
            _stroke_width: f64,
        ) {
            self.ops.push(format!("slice {fill}"));
        }

        fn draw_rotated_label(
            &mut self,
            _cx: f64,
            _cy: f64,
            _rotation: f64,
            x: f64,
            y: f64,
            text: &str,
            _color: &str,
            _font: &str,
        ) {
            self.ops.push(format!("label {text} at {x},{y}"));
        }

        fn draw_centered_text(&mut self, _x: f64, _y: f64, text: &str, _color: &str, _font: &str) {
            self.ops.push(format!("text {text}"));
        }
    }

    fn covered_angle(frame: &WheelFrame) -> f64 {
        frame
            .segments()
            .iter()
            .map(|segment| segment.end_angle - segment.start_angle)
            .sum()
    }

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn test_empty_pool_renders_placeholder() {
        let frame = layout(&[], 1.0, Palette::Fixed);
        assert_eq!(
            frame,
            WheelFrame::Placeholder {
                message: EMPTY_WHEEL_MESSAGE.to_string()
            }
        );
        assert!(frame.segments().is_empty());
    }

    #[test]
    fn test_slices_start_at_current_angle() {
        let frame = layout(&names(&["Ana", "Bob", "Cleo", "Dan"]), 0.5, Palette::Fixed);
        let segments = frame.segments();
        assert_eq!(segments.len(), 4);
        assert!((segments[0].start_angle - 0.5).abs() < 1e-12);
        assert!((segments[2].start_angle - (0.5 + PI)).abs() < 1e-12);
        assert!((segments[3].end_angle - (0.5 + 2.0 * PI)).abs() < 1e-12);
        assert!((covered_angle(&frame) - TWO_PI).abs() < 1e-9);
        assert_eq!(segments[1].name, "Bob");
    }

    #[test]
    fn test_fixed_palette_cycles_by_position() {
        let list = names(&["a", "b", "c", "d", "e", "f", "g"]);
        let frame = layout(&list, 0.0, Palette::Fixed);
        let segments = frame.segments();
        assert_eq!(segments[0].color, PALETTE[0]);
        assert_eq!(segments[5].color, PALETTE[0]);
        assert_eq!(segments[6].color, PALETTE[1]);
    }

    #[test]
    fn test_hue_rotation_palette() {
        let palette = Palette::HueRotation {
            saturation: 70.0,
            lightness: 55.0,
        };
        assert_eq!(palette.color(0, 4), "hsl(0.0, 70%, 55%)");
        assert_eq!(palette.color(1, 4), "hsl(90.0, 70%, 55%)");
        assert_eq!(palette.color(3, 4), "hsl(270.0, 70%, 55%)");
    }

    #[test]
    fn test_geometry_for_canvas() {
        let geometry = WheelGeometry::for_canvas(400.0, 300.0);
        assert_eq!(geometry.center_x, 200.0);
        assert_eq!(geometry.center_y, 150.0);
        assert_eq!(geometry.radius, 140.0);
        assert_eq!(geometry.label_anchor(), (126.0, 5.0));
    }

    #[test]
    fn test_paint_placeholder() {
        let mut recorder = Recorder::default();
        let geometry = WheelGeometry::for_canvas(100.0, 100.0);
        paint(&layout(&[], 0.0, Palette::Fixed), &geometry, &mut recorder);
        assert_eq!(
            recorder.ops,
            vec![
                "clear 100x100".to_string(),
                format!("disc 40 {PLACEHOLDER_FILL}"),
                format!("text {EMPTY_WHEEL_MESSAGE}"),
            ]
        );
    }

    #[test]
    fn test_paint_draws_slice_then_label() {
        let mut recorder = Recorder::default();
        let geometry = WheelGeometry::for_canvas(100.0, 100.0);
        paint(&layout(&names(&["Ana", "Bob"]), 0.0, Palette::Fixed), &geometry, &mut recorder);
        assert_eq!(recorder.ops.len(), 5);
        assert_eq!(recorder.ops[1], format!("slice {}", PALETTE[0]));
        assert_eq!(recorder.ops[2], "label Ana at 26,5");
        assert_eq!(recorder.ops[4], "label Bob at 26,5");
    }

    #[test]
    fn test_paint_is_idempotent() {
        let geometry = WheelGeometry::for_canvas(200.0, 200.0);
        let frame = layout(&names(&["Ana", "Bob", "Cleo"]), 2.0, Palette::Fixed);
        let mut first = Recorder::default();
        let mut second = Recorder::default();
        paint(&frame, &geometry, &mut first);
        paint(&frame, &geometry, &mut second);
        assert_eq!(first.ops, second.ops);
    }
}
