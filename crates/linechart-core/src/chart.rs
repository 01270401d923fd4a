// File: crates/linechart-core/src/chart.rs
// Summary: LineChart model; owns dataset, labels and style, keeps derived min/max and label offsets current.

use std::fmt;

use tracing::warn;

use crate::axis;
use crate::error::{ChartError, ChartResult};
use crate::geometry::{ContentBox, Point};
use crate::scale::{project, value_range};
use crate::style::StyleConfig;
use crate::surface::{FixedMetrics, TextMeasure};
use crate::types::{Color, LayoutBox};

/// Chart state owned by a single host context.
///
/// Layout (label offsets) is recomputed when labels, text size or marker size
/// change; projection is deferred to render time. Every mutation raises the
/// redraw flag, which the host consumes with [`LineChart::take_redraw_request`].
pub struct LineChart {
    values: Vec<f32>,
    x_labels: Vec<String>,
    y_labels: Vec<String>,
    style: StyleConfig,
    min_y: f32,
    max_y: f32,
    offsets: LayoutBox,
    needs_redraw: bool,
    measure: Box<dyn TextMeasure>,
}

impl LineChart {
    pub fn new(measure: impl TextMeasure + 'static) -> Self {
        Self::with_style(StyleConfig::default(), measure)
    }

    pub fn with_style(style: StyleConfig, measure: impl TextMeasure + 'static) -> Self {
        let mut chart = Self {
            values: Vec::new(),
            x_labels: Vec::new(),
            y_labels: Vec::new(),
            style: StyleConfig::default(),
            min_y: 0.0,
            max_y: 0.0,
            offsets: LayoutBox::default(),
            needs_redraw: false,
            measure: Box::new(measure),
        };
        chart.apply_style(style);
        chart.needs_redraw = false;
        chart
    }

    /// Chart measuring text with [`FixedMetrics`]; for tests and headless hosts.
    pub fn headless() -> Self {
        Self::new(FixedMetrics::default())
    }

    // ---- dataset -------------------------------------------------------------

    /// Replace the dataset. Non-finite values are dropped with a warning.
    pub fn set_values(&mut self, values: impl Into<Vec<f32>>) {
        let mut values = values.into();
        let before = values.len();
        values.retain(|v| v.is_finite());
        if values.len() != before {
            warn!(dropped = before - values.len(), "ignoring non-finite chart values");
        }
        (self.min_y, self.max_y) = value_range(&values);
        self.values = values;
        self.invalidate();
    }

    pub fn values(&self) -> &[f32] { &self.values }
    pub fn min_y(&self) -> f32 { self.min_y }
    pub fn max_y(&self) -> f32 { self.max_y }

    // ---- labels --------------------------------------------------------------

    pub fn set_x_labels<S: Into<String>>(&mut self, labels: impl IntoIterator<Item = S>) {
        self.x_labels = labels.into_iter().map(Into::into).collect();
        self.relayout();
    }

    pub fn set_y_labels<S: Into<String>>(&mut self, labels: impl IntoIterator<Item = S>) {
        self.y_labels = labels.into_iter().map(Into::into).collect();
        self.relayout();
    }

    pub fn x_labels(&self) -> &[String] { &self.x_labels }
    pub fn y_labels(&self) -> &[String] { &self.y_labels }

    /// Offsets reserved for axis labels, as of the last label change.
    pub fn offsets(&self) -> LayoutBox { self.offsets }

    // ---- style ---------------------------------------------------------------

    pub fn style(&self) -> &StyleConfig { &self.style }

    /// Replace the whole style. An invalid smoothing factor or size in `style`
    /// is ignored (with a warning) and the current value is kept.
    pub fn apply_style(&mut self, style: StyleConfig) {
        let StyleConfig { smooth_size, circle_size, stroke_size, axis_text_size, .. } = style;
        let keep = self.style;
        self.style = StyleConfig {
            smooth_size: keep.smooth_size,
            circle_size: keep.circle_size,
            stroke_size: keep.stroke_size,
            axis_text_size: keep.axis_text_size,
            ..style
        };
        self.set_smooth_size(smooth_size);
        self.set_circle_size(circle_size);
        self.set_stroke_size(stroke_size);
        self.set_axis_text_size(axis_text_size);
        self.relayout();
    }

    /// Set the smoothing factor; values outside `(0, 0.5]` are logged and ignored.
    pub fn set_smooth_size(&mut self, smooth_size: f32) {
        if let Err(err) = self.try_set_smooth_size(smooth_size) {
            warn!(%err, current = self.style.smooth_size, "smooth size rejected");
        }
    }

    pub fn try_set_smooth_size(&mut self, smooth_size: f32) -> ChartResult<()> {
        if !StyleConfig::is_valid_smooth_size(smooth_size) {
            return Err(ChartError::InvalidSmoothSize(smooth_size));
        }
        self.style.smooth_size = smooth_size;
        self.invalidate();
        Ok(())
    }

    pub fn smooth_size(&self) -> f32 { self.style.smooth_size }

    pub fn set_fill_bottom(&mut self, fill_bottom: bool) {
        self.style.fill_bottom = fill_bottom;
        self.invalidate();
    }

    pub fn fill_bottom(&self) -> bool { self.style.fill_bottom }

    pub fn set_show_points(&mut self, show_points: bool) {
        self.style.show_points = show_points;
        self.invalidate();
    }

    pub fn show_points(&self) -> bool { self.style.show_points }

    /// Toggle the horizontal gridlines drawn at Y-label positions.
    pub fn set_show_x_axis(&mut self, show: bool) {
        self.style.show_x_axis = show;
        self.invalidate();
    }

    pub fn show_x_axis(&self) -> bool { self.style.show_x_axis }

    /// Toggle the vertical gridlines drawn through every data point.
    pub fn set_show_y_axis(&mut self, show: bool) {
        self.style.show_y_axis = show;
        self.invalidate();
    }

    pub fn show_y_axis(&self) -> bool { self.style.show_y_axis }

    /// Label text size in pixels. Changes the label metrics, so offsets are recomputed.
    pub fn set_axis_text_size(&mut self, size: f32) {
        if let Err(err) = check_size("axis text size", size) {
            warn!(%err, "axis text size rejected");
            return;
        }
        self.style.axis_text_size = size;
        self.relayout();
    }

    pub fn set_axis_text_color(&mut self, color: Color) {
        self.style.axis_text_color = color;
        self.invalidate();
    }

    pub fn set_axis_line_color(&mut self, color: Color) {
        self.style.axis_line_color = color;
        self.invalidate();
    }

    pub fn set_chart_color(&mut self, color: Color) {
        self.style.chart_color = color;
        self.invalidate();
    }

    /// Marker diameter. Also the floor for every label offset.
    pub fn set_circle_size(&mut self, size: f32) {
        if let Err(err) = check_size("circle size", size) {
            warn!(%err, "circle size rejected");
            return;
        }
        self.style.circle_size = size;
        self.relayout();
    }

    pub fn set_stroke_size(&mut self, size: f32) {
        if let Err(err) = check_size("stroke size", size) {
            warn!(%err, "stroke size rejected");
            return;
        }
        self.style.stroke_size = size;
        self.invalidate();
    }

    // ---- derived geometry ----------------------------------------------------

    pub fn content_box(&self, width: f32, height: f32) -> ContentBox {
        ContentBox::from_surface(width, height, &self.offsets)
    }

    /// Project the dataset onto a `width` x `height` surface.
    pub fn points(&self, width: f32, height: f32) -> Vec<Point> {
        let content = self.content_box(width, height);
        let x_label_count = (!self.x_labels.is_empty()).then_some(self.x_labels.len());
        project(&self.values, x_label_count, &content, self.min_y, self.max_y)
    }

    // ---- redraw --------------------------------------------------------------

    pub fn needs_redraw(&self) -> bool { self.needs_redraw }

    /// Returns the pending redraw request and clears it.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    fn invalidate(&mut self) {
        self.needs_redraw = true;
    }

    fn relayout(&mut self) {
        let base = LayoutBox::uniform(self.style.circle_size / 2.0);
        self.offsets = axis::layout(
            &self.x_labels,
            &self.y_labels,
            self.style.axis_text_size,
            self.measure.as_ref(),
            base,
        );
        self.invalidate();
    }
}

impl fmt::Debug for LineChart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineChart")
            .field("values", &self.values)
            .field("x_labels", &self.x_labels)
            .field("y_labels", &self.y_labels)
            .field("style", &self.style)
            .field("min_y", &self.min_y)
            .field("max_y", &self.max_y)
            .field("offsets", &self.offsets)
            .field("needs_redraw", &self.needs_redraw)
            .finish_non_exhaustive()
    }
}

fn check_size(field: &'static str, value: f32) -> ChartResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ChartError::InvalidSize { field, value })
    }
}
