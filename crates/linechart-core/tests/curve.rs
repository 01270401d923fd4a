// File: crates/linechart-core/tests/curve.rs
// Purpose: Structural checks on the smoothed path: start point, segment count, degenerate inputs.

use linechart_core::{build_path, ContentBox, PathCommand, Point};

fn content() -> ContentBox {
    ContentBox::from_ltrb(0.0, 0.0, 400.0, 300.0)
}

fn zigzag(n: usize) -> Vec<Point> {
    (0..n).map(|i| Point::new(i as f32 * 10.0, if i % 2 == 0 { 50.0 } else { 150.0 })).collect()
}

#[test]
fn starts_at_first_point_with_one_cubic_per_gap() {
    let pts = zigzag(8);
    let curve = build_path(&pts, 0.3, false, &content());
    assert_eq!(curve.stroke.start(), Some(pts[0]));
    assert_eq!(curve.stroke.cubic_count(), 7);
    assert_eq!(curve.stroke.segment_count(), 7);
}

#[test]
fn segments_end_on_data_points() {
    let pts = zigzag(5);
    let curve = build_path(&pts, 0.45, false, &content());
    let ends: Vec<Point> = curve
        .stroke
        .commands()
        .iter()
        .filter_map(|c| match *c {
            PathCommand::CubicTo(_, _, end) => Some(end),
            _ => None,
        })
        .collect();
    assert_eq!(ends, pts[1..].to_vec());
}

#[test]
fn single_point_has_no_segments() {
    let pts = [Point::new(10.0, 10.0)];
    let curve = build_path(&pts, 0.3, true, &content());
    assert_eq!(curve.stroke.start(), Some(pts[0]));
    assert_eq!(curve.stroke.cubic_count(), 0);
}

#[test]
fn empty_input_builds_empty_path() {
    let curve = build_path(&[], 0.3, true, &content());
    assert!(curve.stroke.is_empty());
    assert!(curve.fill.is_none());
}

#[test]
fn tiny_smoothing_pulls_controls_onto_endpoints() {
    let pts = zigzag(4);
    let curve = build_path(&pts, 1e-6, false, &content());
    for c in curve.stroke.commands() {
        if let PathCommand::CubicTo(c1, c2, end) = *c {
            assert!((c2.x - end.x).abs() < 1e-3 && (c2.y - end.y).abs() < 1e-3);
            assert!(c1.x <= end.x);
        }
    }
}

#[test]
fn fill_extends_stroke_and_closes() {
    let pts = zigzag(3);
    let curve = build_path(&pts, 0.3, true, &content());
    let fill = curve.fill.expect("fill requested");
    assert_eq!(&fill.commands()[..curve.stroke.commands().len()], curve.stroke.commands());
    assert_eq!(fill.commands().last(), Some(&PathCommand::Close));
}
