// File: crates/linechart-core/src/surface.rs
// Summary: Drawing surface abstraction consumed by the renderer, plus a headless recording surface.

use crate::geometry::Point;
use crate::path::Path;
use crate::types::Color;

/// Bounding box of a laid-out string, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TextBounds {
    pub width: f32,
    pub height: f32,
}

impl TextBounds {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Text measurement under the host's current font.
pub trait TextMeasure {
    fn measure_text(&self, text: &str, size: f32) -> TextBounds;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaintStyle {
    Stroke,
    Fill,
    FillAndStroke,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Paint {
    pub color: Color,
    pub style: PaintStyle,
    pub stroke_width: f32,
}

impl Paint {
    pub const fn stroke(color: Color, width: f32) -> Self {
        Self { color, style: PaintStyle::Stroke, stroke_width: width }
    }
    pub const fn fill(color: Color) -> Self {
        Self { color, style: PaintStyle::Fill, stroke_width: 0.0 }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub size: f32,
    pub color: Color,
    pub align: TextAlign,
}

/// Host drawing target. Coordinates are pixels with the origin at the top-left.
pub trait Surface: TextMeasure {
    /// `(width, height)` of the drawable area.
    fn size(&self) -> (f32, f32);
    fn draw_line(&mut self, from: Point, to: Point, paint: &Paint);
    fn draw_path(&mut self, path: &Path, paint: &Paint);
    fn draw_circle(&mut self, center: Point, radius: f32, paint: &Paint);
    /// `origin.y` is the text baseline; `origin.x` is interpreted per `style.align`.
    fn draw_text(&mut self, text: &str, origin: Point, style: &TextStyle);
    /// Ask the host to schedule a repaint. Headless surfaces may ignore it.
    fn request_redraw(&mut self) {}
}

/// Deterministic metrics: every character has the same advance, and the
/// height is a fixed fraction of the text size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedMetrics {
    pub advance_ratio: f32,
    pub height_ratio: f32,
}

impl FixedMetrics {
    pub const fn new(advance_ratio: f32, height_ratio: f32) -> Self {
        Self { advance_ratio, height_ratio }
    }
}

impl Default for FixedMetrics {
    fn default() -> Self {
        Self::new(0.5, 0.75)
    }
}

impl TextMeasure for FixedMetrics {
    fn measure_text(&self, text: &str, size: f32) -> TextBounds {
        if text.is_empty() {
            return TextBounds::default();
        }
        let chars = text.chars().count() as f32;
        TextBounds::new(chars * size * self.advance_ratio, size * self.height_ratio)
    }
}

/// A recorded draw call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Line { from: Point, to: Point, paint: Paint },
    Path { path: Path, paint: Paint },
    Circle { center: Point, radius: f32, paint: Paint },
    Text { text: String, origin: Point, style: TextStyle },
}

/// Surface that records draw calls instead of rasterising them.
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    width: f32,
    height: f32,
    metrics: FixedMetrics,
    ops: Vec<DrawOp>,
    redraw_requests: usize,
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self::with_metrics(width, height, FixedMetrics::default())
    }

    pub fn with_metrics(width: f32, height: f32, metrics: FixedMetrics) -> Self {
        Self { width, height, metrics, ops: Vec::new(), redraw_requests: 0 }
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn redraw_requests(&self) -> usize {
        self.redraw_requests
    }

    pub fn lines(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Line { from, to, .. } => Some((*from, *to)),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = (&str, Point, &TextStyle)> + '_ {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text { text, origin, style } => Some((text.as_str(), *origin, style)),
            _ => None,
        })
    }

    pub fn circles(&self) -> impl Iterator<Item = (Point, f32, &Paint)> + '_ {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Circle { center, radius, paint } => Some((*center, *radius, paint)),
            _ => None,
        })
    }

    pub fn paths(&self) -> impl Iterator<Item = (&Path, &Paint)> + '_ {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Path { path, paint } => Some((path, paint)),
            _ => None,
        })
    }
}

impl TextMeasure for RecordingSurface {
    fn measure_text(&self, text: &str, size: f32) -> TextBounds {
        self.metrics.measure_text(text, size)
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    fn draw_line(&mut self, from: Point, to: Point, paint: &Paint) {
        self.ops.push(DrawOp::Line { from, to, paint: *paint });
    }

    fn draw_path(&mut self, path: &Path, paint: &Paint) {
        self.ops.push(DrawOp::Path { path: path.clone(), paint: *paint });
    }

    fn draw_circle(&mut self, center: Point, radius: f32, paint: &Paint) {
        self.ops.push(DrawOp::Circle { center, radius, paint: *paint });
    }

    fn draw_text(&mut self, text: &str, origin: Point, style: &TextStyle) {
        self.ops.push(DrawOp::Text { text: text.to_string(), origin, style: *style });
    }

    fn request_redraw(&mut self) {
        self.redraw_requests += 1;
    }
}
