// File: crates/linechart-core/tests/config.rs
// Purpose: TOML config parsing and application onto a chart.

use linechart_core::types::{DEFAULT_SMOOTH_SIZE, DEFAULT_TEXT_SIZE};
use linechart_core::{ChartConfig, ChartError, Color, FixedMetrics, LineChart};

const SAMPLE: &str = r##"
values = [100, 0, 300, 260, 400, 200, 250, 100]
x_labels = ["Sep", "Oct", "Nov", "Des", "Jan", "Feb"]
y_labels = ["$0.0", "$100", "$200", "$300", "$400"]

[style]
smooth_size = 0.45
fill_bottom = false
show_y_axis = false
chart_color = "#CC3300"
axis_text_color = "#FF666666"
"##;

#[test]
fn parses_and_applies_sample() {
    let cfg = ChartConfig::from_toml_str(SAMPLE).expect("valid config");
    assert_eq!(cfg.values.len(), 8);
    let chart = cfg.build(FixedMetrics::default()).expect("build chart");
    assert_eq!(chart.smooth_size(), 0.45);
    assert!(!chart.fill_bottom());
    assert!(!chart.show_y_axis());
    assert!(chart.show_points());
    assert_eq!(chart.style().chart_color, Color(0xFFCC3300));
    assert_eq!(chart.style().axis_text_color, Color(0xFF666666));
    assert_eq!((chart.min_y(), chart.max_y()), (0.0, 400.0));
    assert_eq!(chart.offsets().left, 120.0);
}

#[test]
fn empty_config_is_default_chart() {
    let cfg = ChartConfig::from_toml_str("").expect("empty is valid");
    let chart = cfg.build(FixedMetrics::default()).expect("build");
    assert!(chart.values().is_empty());
    assert_eq!(chart.smooth_size(), DEFAULT_SMOOTH_SIZE);
}

#[test]
fn density_scales_marker() {
    let cfg = ChartConfig::from_toml_str("[style]\ndensity = 3.0\n").expect("valid");
    let chart = cfg.build(FixedMetrics::default()).expect("build");
    assert_eq!(chart.style().circle_size, 24.0);
    assert_eq!(chart.style().stroke_size, 6.0);
}

#[test]
fn out_of_range_smoothing_keeps_default() {
    let cfg = ChartConfig::from_toml_str("[style]\nsmooth_size = 0.8\n").expect("valid toml");
    let chart = cfg.build(FixedMetrics::default()).expect("build");
    assert_eq!(chart.smooth_size(), DEFAULT_SMOOTH_SIZE);
}

#[test]
fn nan_axis_text_size_keeps_default() {
    let cfg = ChartConfig::from_toml_str("[style]\naxis_text_size = nan\n").expect("valid toml");
    let chart = cfg.build(FixedMetrics::default()).expect("build");
    assert_eq!(chart.style().axis_text_size, DEFAULT_TEXT_SIZE);
}

#[test]
fn bad_color_is_an_error_and_leaves_chart_alone() {
    let cfg = ChartConfig::from_toml_str("values = [1, 2]\n[style]\nchart_color = \"blue\"\n").expect("valid toml");
    let mut chart = LineChart::headless();
    let err = cfg.apply_to(&mut chart).unwrap_err();
    assert!(matches!(err, ChartError::InvalidColor(ref s) if s == "blue"));
    assert!(chart.values().is_empty());
}

#[test]
fn unknown_keys_are_rejected() {
    let err = ChartConfig::from_toml_str("[style]\nsmoothness = 0.2\n").unwrap_err();
    assert!(matches!(err, ChartError::Config(_)));
}

#[test]
fn missing_file_is_io_error() {
    let err = ChartConfig::from_path("does/not/exist.toml").unwrap_err();
    assert!(matches!(err, ChartError::Io(_)));
}
