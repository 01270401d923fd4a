// File: crates/linechart-render-skia/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing a PNG through the Skia surface.

use linechart_core::{LineChart, TextMeasure};
use linechart_render_skia::{render_to_png, render_to_png_bytes, RenderOptions, SkiaTextMeasure};

fn sample_chart() -> LineChart {
    let mut chart = LineChart::new(SkiaTextMeasure::new());
    chart.set_y_labels(["$0.0", "$100", "$200", "$300", "$400"]);
    chart.set_x_labels(["Sep", "Oct", "Nov", "Des", "Jan", "Feb"]);
    chart.set_values([100.0, 0.0, 300.0, 260.0, 400.0, 200.0, 250.0, 100.0]);
    chart
}

#[test]
fn render_smoke_png() {
    let chart = sample_chart();
    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/test_out/smoke.png");

    render_to_png(&chart, &opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = render_to_png_bytes(&chart, &opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn empty_chart_is_background_only() {
    let chart = LineChart::new(SkiaTextMeasure::new());
    let opts = RenderOptions { width: 64, height: 48, ..RenderOptions::default() };
    let bytes = render_to_png_bytes(&chart, &opts).expect("render bytes");
    let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    assert_eq!((img.width(), img.height()), (64, 48));
    assert!(img.pixels().all(|p| p.0 == [255, 255, 255, 255]));
}

#[test]
fn measured_text_grows_with_size() {
    let m = SkiaTextMeasure::new();
    let small = m.measure_text("$400", 10.0);
    let large = m.measure_text("$400", 40.0);
    assert!(large.width >= small.width);
    assert!(large.height >= small.height);
}

#[test]
fn redraw_request_reaches_skia_surface() {
    use linechart_core::flush_redraw;
    use linechart_render_skia::SkiaSurface;

    let mut raster = skia_safe::surfaces::raster_n32_premul((16, 16)).expect("raster surface");
    let mut chart = sample_chart();
    let mut target = SkiaSurface::new(raster.canvas(), 16.0, 16.0);
    assert!(!target.redraw_requested());
    assert!(flush_redraw(&mut chart, &mut target));
    assert!(target.redraw_requested());
}
