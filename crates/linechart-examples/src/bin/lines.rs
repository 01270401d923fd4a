// File: crates/linechart-examples/src/bin/lines.rs
// Summary: Renders the three reference line charts (line only, points, full) to PNG.
// Usage: example-lines [config.toml]
//   With a config file, renders that single chart instead of the built-in set.

use anyhow::{Context, Result};
use linechart_core::{ChartConfig, LineChart};
use linechart_render_skia::{render_to_png, RenderOptions, SkiaTextMeasure};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const VALUES: [f32; 8] = [100.0, 0.0, 300.0, 260.0, 400.0, 200.0, 250.0, 100.0];
const X_LABELS: [&str; 6] = ["Sep", "Oct", "Nov", "Des", "Jan", "Feb"];
const Y_LABELS: [&str; 5] = ["$0.0", "$100", "$200", "$300", "$400"];
const AXIS_TEXT_SIZE: f32 = 28.0;

fn base_chart() -> LineChart {
    let mut chart = LineChart::new(SkiaTextMeasure::new());
    chart.set_axis_text_size(AXIS_TEXT_SIZE);
    chart
}

fn with_data(mut chart: LineChart) -> LineChart {
    chart.set_y_labels(Y_LABELS);
    chart.set_x_labels(X_LABELS);
    chart.set_values(VALUES);
    chart
}

fn line_only() -> LineChart {
    let mut chart = base_chart();
    chart.set_smooth_size(0.45);
    chart.set_fill_bottom(false);
    chart.set_show_y_axis(false);
    chart.set_show_points(false);
    with_data(chart)
}

fn points() -> LineChart {
    let mut chart = base_chart();
    chart.set_fill_bottom(false);
    chart.set_show_y_axis(false);
    chart.set_show_x_axis(false);
    with_data(chart)
}

fn full() -> LineChart {
    let mut chart = base_chart();
    chart.set_smooth_size(0.3);
    with_data(chart)
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let opts = RenderOptions { width: 960, height: 540, ..RenderOptions::default() };
    let out_dir = PathBuf::from("target/out");

    if let Some(config_path) = std::env::args().nth(1) {
        let cfg = ChartConfig::from_path(&config_path)
            .with_context(|| format!("failed to load config '{config_path}'"))?;
        let chart = cfg.build(SkiaTextMeasure::new())?;
        let out = out_dir.join("example_config.png");
        render_to_png(&chart, &opts, &out)?;
        tracing::info!(path = %out.display(), "wrote chart from config");
        return Ok(());
    }

    for (name, chart) in [("line_only", line_only()), ("points", points()), ("full", full())] {
        let out = out_dir.join(format!("example_{name}.png"));
        render_to_png(&chart, &opts, &out).with_context(|| format!("render {name}"))?;
        tracing::info!(path = %out.display(), "wrote chart");
    }
    Ok(())
}
