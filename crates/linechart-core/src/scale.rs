// File: crates/linechart-core/src/scale.rs
// Summary: Index (X) and value (Y) scale transforms and the point projection built on them.

use crate::geometry::{ContentBox, Point};

/// Horizontal divisor used when the series has at most one value.
/// Keeps `width / divisor` finite; a lone point lands on the left edge.
pub const DEGENERATE_X_DIVISOR: f32 = 2.0;
/// Vertical divisor used when `max_y - min_y` is not positive (flat series).
/// Avoids a zero division; every point then sits on the bottom edge.
pub const FLAT_Y_DIVISOR: f32 = 2.0;

/// Horizontal scale mapping a value index to a pixel column.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IndexScale {
    pub left_px: f32,
    pub step_px: f32,
}

impl IndexScale {
    /// Spread `value_count` indices across `content`. If more X labels than
    /// values exist the labels define the grid, so the step follows them.
    pub fn new(content: &ContentBox, value_count: usize, x_label_count: Option<usize>) -> Self {
        let divisor = match x_label_count {
            Some(labels) if labels > value_count && labels > 1 => (labels - 1) as f32,
            _ if value_count > 1 => (value_count - 1) as f32,
            _ => DEGENERATE_X_DIVISOR,
        };
        Self { left_px: content.left, step_px: content.width() / divisor }
    }

    #[inline]
    pub fn to_px(&self, index: usize) -> f32 {
        self.left_px + index as f32 * self.step_px
    }
}

/// Vertical value scale mapping `[min, max]` onto `[bottom, top]` pixels.
/// Range arithmetic runs in f64: two finite f32 extremes can differ by more than `f32::MAX`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueScale {
    pub top_px: f32,
    pub height_px: f32,
    pub vmin: f32,
    span: f64,
}

impl ValueScale {
    pub fn new(content: &ContentBox, vmin: f32, vmax: f32) -> Self {
        let range = f64::from(vmax) - f64::from(vmin);
        let span = if range > 0.0 { range } else { f64::from(FLAT_Y_DIVISOR) };
        Self { top_px: content.top, height_px: content.height(), vmin, span }
    }

    /// Larger values map to smaller pixel rows.
    #[inline]
    pub fn to_px(&self, v: f32) -> f32 {
        let offset = (f64::from(v) - f64::from(self.vmin)) / self.span * f64::from(self.height_px);
        (f64::from(self.top_px) + f64::from(self.height_px) - offset) as f32
    }

    pub fn span(&self) -> f64 { self.span }
}

/// Minimum and maximum of `values`, or `(0, 0)` for an empty slice.
pub fn value_range(values: &[f32]) -> (f32, f32) {
    let Some(&first) = values.first() else { return (0.0, 0.0) };
    values.iter().fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v)))
}

/// Project `values` into screen space inside `content`.
pub fn project(
    values: &[f32],
    x_label_count: Option<usize>,
    content: &ContentBox,
    min_y: f32,
    max_y: f32,
) -> Vec<Point> {
    let xs = IndexScale::new(content, values.len(), x_label_count);
    let ys = ValueScale::new(content, min_y, max_y);
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| Point::new(xs.to_px(i), ys.to_px(v)))
        .collect()
}
