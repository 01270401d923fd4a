// File: crates/linechart-core/src/render.rs
// Summary: Frame composition; gridlines, curve, fill, markers and labels emitted onto a Surface.

use tracing::trace;

use crate::axis::{label_positions, AxisKind};
use crate::chart::LineChart;
use crate::curve::build_path;
use crate::geometry::{ContentBox, Point};
use crate::style::StyleConfig;
use crate::surface::{Paint, PaintStyle, Surface, TextAlign, TextStyle};

/// Draw `chart` onto `surface`. Keeps no state between calls; an empty
/// dataset draws nothing.
pub fn render(surface: &mut dyn Surface, chart: &LineChart) {
    if chart.values().is_empty() {
        return;
    }
    let (width, height) = surface.size();
    let content = chart.content_box(width, height);
    let points = chart.points(width, height);
    let style = chart.style();
    trace!(points = points.len(), ?content, "render pass");

    if style.show_y_axis {
        draw_point_gridlines(surface, &points, &content, style);
    }
    draw_curve(surface, &points, &content, style);
    if style.show_points {
        draw_markers(surface, &points, style);
    }
    draw_y_labels(surface, chart, &content);
    draw_x_labels(surface, chart, &content, height);
}

fn axis_paint(style: &StyleConfig) -> Paint {
    Paint::stroke(style.axis_line_color, 1.0)
}

fn draw_point_gridlines(surface: &mut dyn Surface, points: &[Point], content: &ContentBox, style: &StyleConfig) {
    let paint = axis_paint(style);
    for p in points {
        surface.draw_line(Point::new(p.x, content.bottom), Point::new(p.x, content.top), &paint);
    }
}

fn draw_curve(surface: &mut dyn Surface, points: &[Point], content: &ContentBox, style: &StyleConfig) {
    let curve = build_path(points, style.smooth_size, style.fill_bottom, content);
    // A single point has no segments; its marker is still drawn.
    if curve.stroke.segment_count() == 0 {
        return;
    }
    surface.draw_path(&curve.stroke, &Paint::stroke(style.chart_color, style.stroke_size));
    if let Some(fill) = &curve.fill {
        surface.draw_path(fill, &Paint::fill(style.fill_color()));
    }
}

fn draw_markers(surface: &mut dyn Surface, points: &[Point], style: &StyleConfig) {
    let outer = Paint { color: style.chart_color, style: PaintStyle::FillAndStroke, stroke_width: 0.0 };
    for &p in points {
        surface.draw_circle(p, style.circle_size / 2.0, &outer);
    }
    let inner = Paint::fill(style.marker_inner_color);
    let inner_radius = ((style.circle_size - style.stroke_size) / 2.0).max(0.0);
    for &p in points {
        surface.draw_circle(p, inner_radius, &inner);
    }
}

fn label_style(style: &StyleConfig, align: TextAlign) -> TextStyle {
    TextStyle { size: style.axis_text_size, color: style.axis_text_color, align }
}

fn draw_y_labels(surface: &mut dyn Surface, chart: &LineChart, content: &ContentBox) {
    let style = chart.style();
    let text = label_style(style, TextAlign::Left);
    let paint = axis_paint(style);
    for label in label_positions(chart.y_labels(), AxisKind::Y, content) {
        if style.show_x_axis {
            surface.draw_line(Point::new(content.left, label.pos), Point::new(content.right, label.pos), &paint);
        }
        surface.draw_text(label.text, Point::new(0.0, label.pos + style.axis_text_size / 2.0), &text);
    }
}

fn draw_x_labels(surface: &mut dyn Surface, chart: &LineChart, content: &ContentBox, height: f32) {
    let text = label_style(chart.style(), TextAlign::Center);
    for label in label_positions(chart.x_labels(), AxisKind::X, content) {
        surface.draw_text(label.text, Point::new(label.pos, height), &text);
    }
}

/// Forward a pending model redraw request to the host surface.
/// Returns whether a request was forwarded.
pub fn flush_redraw(chart: &mut LineChart, surface: &mut dyn Surface) -> bool {
    let pending = chart.take_redraw_request();
    if pending {
        surface.request_redraw();
    }
    pending
}
