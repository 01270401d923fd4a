// File: crates/linechart-core/src/style.rs
// Summary: Style configuration (sizes, smoothing, toggles, colors) with the widget defaults.

use crate::types::{
    Color, DEFAULT_CIRCLE_SIZE, DEFAULT_SMOOTH_SIZE, DEFAULT_STROKE_SIZE, DEFAULT_TEXT_SIZE, MAX_SMOOTH_SIZE,
};

/// Alpha applied to the chart color when filling the area under the curve.
pub const FILL_ALPHA: u8 = 0x10;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StyleConfig {
    /// Marker diameter in pixels.
    pub circle_size: f32,
    /// Curve stroke width in pixels; also the marker ring thickness.
    pub stroke_size: f32,
    pub smooth_size: f32,
    pub fill_bottom: bool,
    pub show_points: bool,
    /// Horizontal gridlines at the Y-label positions (lines parallel to the X axis).
    pub show_x_axis: bool,
    /// Vertical gridlines at every data point (lines parallel to the Y axis).
    pub show_y_axis: bool,
    pub chart_color: Color,
    pub marker_inner_color: Color,
    pub axis_text_size: f32,
    pub axis_text_color: Color,
    pub axis_line_color: Color,
}

impl StyleConfig {
    /// Defaults with marker and stroke sizes multiplied by a display density.
    pub fn scaled(density: f32) -> Self {
        Self {
            circle_size: DEFAULT_CIRCLE_SIZE * density,
            stroke_size: DEFAULT_STROKE_SIZE * density,
            ..Self::default()
        }
    }

    pub fn is_valid_smooth_size(v: f32) -> bool {
        v > 0.0 && v <= MAX_SMOOTH_SIZE
    }

    /// Fill color: chart hue, fixed low alpha.
    pub fn fill_color(&self) -> Color {
        self.chart_color.with_alpha(FILL_ALPHA)
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            circle_size: DEFAULT_CIRCLE_SIZE,
            stroke_size: DEFAULT_STROKE_SIZE,
            smooth_size: DEFAULT_SMOOTH_SIZE,
            fill_bottom: true,
            show_points: true,
            show_x_axis: true,
            show_y_axis: true,
            chart_color: Color::CHART_BLUE,
            marker_inner_color: Color::WHITE,
            axis_text_size: DEFAULT_TEXT_SIZE,
            axis_text_color: Color::GRAY,
            axis_line_color: Color::DARK_GRAY,
        }
    }
}
