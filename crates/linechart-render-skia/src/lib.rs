// File: crates/linechart-render-skia/src/lib.rs
// Summary: Skia backend; a Surface over a raster canvas, Skia text metrics, and headless PNG rendering.

use std::path::Path as FsPath;

use anyhow::{Context, Result};
use linechart_core::{
    render, Color, LineChart, Paint, PaintStyle, Path, PathCommand, Point, Surface, TextAlign, TextBounds,
    TextMeasure, TextStyle,
};
use skia_safe as skia;
use tracing::debug;

/// Default surface width in pixels.
pub const WIDTH: i32 = 1024;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 640;

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub background: Color,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { width: WIDTH, height: HEIGHT, background: Color::WHITE }
    }
}

fn to_sk_color(c: Color) -> skia::Color {
    skia::Color::new(c.0)
}

fn to_sk_paint(p: &Paint) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_color(to_sk_color(p.color));
    paint.set_stroke_width(p.stroke_width);
    paint.set_style(match p.style {
        PaintStyle::Stroke => skia::paint::Style::Stroke,
        PaintStyle::Fill => skia::paint::Style::Fill,
        PaintStyle::FillAndStroke => skia::paint::Style::StrokeAndFill,
    });
    paint
}

fn to_sk_path(path: &Path) -> skia::Path {
    let mut out = skia::Path::new();
    for cmd in path.commands() {
        match *cmd {
            PathCommand::MoveTo(p) => { out.move_to((p.x, p.y)); }
            PathCommand::LineTo(p) => { out.line_to((p.x, p.y)); }
            PathCommand::CubicTo(c1, c2, end) => { out.cubic_to((c1.x, c1.y), (c2.x, c2.y), (end.x, end.y)); }
            PathCommand::Close => { out.close(); }
        }
    }
    out
}

/// Text metrics from a Skia font; the size is applied per call.
#[derive(Clone)]
pub struct SkiaTextMeasure {
    font: skia::Font,
}

impl SkiaTextMeasure {
    pub fn new() -> Self {
        // Use the platform font manager's default face; fall back to Skia's empty default.
        let font = skia::FontMgr::default()
            .legacy_make_typeface(None, skia::FontStyle::default())
            .map(|tf| skia::Font::from_typeface(tf, 12.0))
            .unwrap_or_default();
        Self { font }
    }

    fn font_at(&self, size: f32) -> skia::Font {
        let mut font = self.font.clone();
        font.set_size(size.max(1.0));
        font
    }
}

impl Default for SkiaTextMeasure {
    fn default() -> Self {
        Self::new()
    }
}

impl TextMeasure for SkiaTextMeasure {
    fn measure_text(&self, text: &str, size: f32) -> TextBounds {
        let (_, bounds) = self.font_at(size).measure_str(text, None);
        TextBounds::new(bounds.width(), bounds.height())
    }
}

/// Surface drawing straight onto a Skia canvas.
pub struct SkiaSurface<'a> {
    canvas: &'a skia::Canvas,
    width: f32,
    height: f32,
    text: SkiaTextMeasure,
    redraw_requested: bool,
}

impl<'a> SkiaSurface<'a> {
    pub fn new(canvas: &'a skia::Canvas, width: f32, height: f32) -> Self {
        Self { canvas, width, height, text: SkiaTextMeasure::new(), redraw_requested: false }
    }

    pub fn redraw_requested(&self) -> bool {
        self.redraw_requested
    }
}

impl TextMeasure for SkiaSurface<'_> {
    fn measure_text(&self, text: &str, size: f32) -> TextBounds {
        self.text.measure_text(text, size)
    }
}

impl Surface for SkiaSurface<'_> {
    fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    fn draw_line(&mut self, from: Point, to: Point, paint: &Paint) {
        self.canvas.draw_line((from.x, from.y), (to.x, to.y), &to_sk_paint(paint));
    }

    fn draw_path(&mut self, path: &Path, paint: &Paint) {
        self.canvas.draw_path(&to_sk_path(path), &to_sk_paint(paint));
    }

    fn draw_circle(&mut self, center: Point, radius: f32, paint: &Paint) {
        self.canvas.draw_circle((center.x, center.y), radius, &to_sk_paint(paint));
    }

    fn draw_text(&mut self, text: &str, origin: Point, style: &TextStyle) {
        let font = self.text.font_at(style.size);
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_color(to_sk_color(style.color));
        let x = match style.align {
            TextAlign::Left => origin.x,
            TextAlign::Center => origin.x - font.measure_str(text, Some(&paint)).0 / 2.0,
        };
        self.canvas.draw_str(text, (x, origin.y), &font, &paint);
    }

    fn request_redraw(&mut self) {
        self.redraw_requested = true;
    }
}

/// Render `chart` to PNG bytes using a CPU raster surface.
pub fn render_to_png_bytes(chart: &LineChart, opts: &RenderOptions) -> Result<Vec<u8>> {
    let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
        .ok_or_else(|| anyhow::anyhow!("failed to create {}x{} raster surface", opts.width, opts.height))?;
    {
        let canvas = surface.canvas();
        canvas.clear(to_sk_color(opts.background));
        let mut target = SkiaSurface::new(canvas, opts.width as f32, opts.height as f32);
        render(&mut target, chart);
    }

    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
    debug!(bytes = data.as_bytes().len(), width = opts.width, height = opts.height, "chart rasterised");
    Ok(data.as_bytes().to_vec())
}

/// Render `chart` to a PNG file, creating parent directories as needed.
pub fn render_to_png(chart: &LineChart, opts: &RenderOptions, output_png_path: impl AsRef<FsPath>) -> Result<()> {
    let path = output_png_path.as_ref();
    let bytes = render_to_png_bytes(chart, opts)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}
