// File: crates/linechart-core/src/config.rs
// Summary: TOML chart configuration (dataset, labels, style overrides) and how it is applied to a LineChart.

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::chart::LineChart;
use crate::error::ChartResult;
use crate::style::StyleConfig;
use crate::surface::TextMeasure;
use crate::types::Color;

/// Whole-chart config file.
///
/// ```toml
/// values = [100, 0, 300, 260, 400]
/// x_labels = ["Sep", "Oct", "Nov"]
/// y_labels = ["$0.0", "$200", "$400"]
///
/// [style]
/// smooth_size = 0.45
/// fill_bottom = false
/// chart_color = "#0099CC"
/// ```
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ChartConfig {
    pub values: Vec<f32>,
    pub x_labels: Vec<String>,
    pub y_labels: Vec<String>,
    pub style: StyleSection,
}

/// Optional overrides on top of [`StyleConfig`] defaults.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct StyleSection {
    /// Display density multiplier for marker and stroke sizes.
    pub density: Option<f32>,
    pub circle_size: Option<f32>,
    pub stroke_size: Option<f32>,
    pub smooth_size: Option<f32>,
    pub fill_bottom: Option<bool>,
    pub show_points: Option<bool>,
    pub show_x_axis: Option<bool>,
    pub show_y_axis: Option<bool>,
    pub chart_color: Option<String>,
    pub marker_inner_color: Option<String>,
    pub axis_text_size: Option<f32>,
    pub axis_text_color: Option<String>,
    pub axis_line_color: Option<String>,
}

fn color(slot: &mut Color, value: &Option<String>) -> ChartResult<()> {
    if let Some(s) = value {
        *slot = s.parse()?;
    }
    Ok(())
}

impl StyleSection {
    /// Resolve against the defaults. Colors must parse; numeric ranges are
    /// checked later by the chart setters, which warn and keep the old value.
    pub fn resolve(&self) -> ChartResult<StyleConfig> {
        let mut style = StyleConfig::scaled(self.density.unwrap_or(1.0));
        if let Some(v) = self.circle_size { style.circle_size = v; }
        if let Some(v) = self.stroke_size { style.stroke_size = v; }
        if let Some(v) = self.smooth_size { style.smooth_size = v; }
        if let Some(v) = self.fill_bottom { style.fill_bottom = v; }
        if let Some(v) = self.show_points { style.show_points = v; }
        if let Some(v) = self.show_x_axis { style.show_x_axis = v; }
        if let Some(v) = self.show_y_axis { style.show_y_axis = v; }
        if let Some(v) = self.axis_text_size { style.axis_text_size = v; }
        color(&mut style.chart_color, &self.chart_color)?;
        color(&mut style.marker_inner_color, &self.marker_inner_color)?;
        color(&mut style.axis_text_color, &self.axis_text_color)?;
        color(&mut style.axis_line_color, &self.axis_line_color)?;
        Ok(style)
    }
}

impl ChartConfig {
    pub fn from_toml_str(s: &str) -> ChartResult<Self> {
        Ok(toml::from_str(s)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> ChartResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let cfg = Self::from_toml_str(&text)?;
        debug!(path = %path.display(), values = cfg.values.len(), "loaded chart config");
        Ok(cfg)
    }

    /// Apply style, labels and values in that order. On a color error the
    /// chart is left untouched.
    pub fn apply_to(&self, chart: &mut LineChart) -> ChartResult<()> {
        let style = self.style.resolve()?;
        chart.apply_style(style);
        chart.set_y_labels(self.y_labels.iter().cloned());
        chart.set_x_labels(self.x_labels.iter().cloned());
        chart.set_values(self.values.clone());
        Ok(())
    }

    pub fn build(&self, measure: impl TextMeasure + 'static) -> ChartResult<LineChart> {
        let mut chart = LineChart::new(measure);
        self.apply_to(&mut chart)?;
        Ok(chart)
    }
}
