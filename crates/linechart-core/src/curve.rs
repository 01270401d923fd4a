// File: crates/linechart-core/src/curve.rs
// Summary: Smooth curve builder; turns projected points into cubic Bézier (or straight) paths.

use crate::geometry::{ContentBox, Point};
use crate::path::Path;

/// Stroke outline plus the optional closed area under it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CurvePath {
    pub stroke: Path,
    pub fill: Option<Path>,
}

/// Build a C1-continuous curve through `points`.
///
/// Each segment `p[i-1] -> p[i]` gets control points `p[i-1] + t[i-1]` and
/// `p[i] - t[i]`, where `t[i] = (p[i+1] - p[i-1]) / 2 * smooth_size` and the
/// last point reuses itself as its successor. `smooth_size -> 0` approaches a
/// polyline. With `fill_bottom` the fill path closes the curve down to
/// `content.bottom`.
pub fn build_path(points: &[Point], smooth_size: f32, fill_bottom: bool, content: &ContentBox) -> CurvePath {
    let Some(&first) = points.first() else { return CurvePath::default() };

    let mut stroke = Path::with_capacity(points.len());
    stroke.move_to(first);

    let mut tangent = Point::default();
    for (i, window) in points.windows(2).enumerate() {
        let (prev, cur) = (window[0], window[1]);
        let next = points.get(i + 2).copied().unwrap_or(cur);
        let c1 = prev + tangent;
        tangent = (next - prev).scale(0.5 * smooth_size);
        let c2 = cur - tangent;
        stroke.cubic_to(c1, c2, cur);
    }

    let fill = fill_bottom.then(|| close_to_bottom(&stroke, first, points[points.len() - 1], content));
    CurvePath { stroke, fill }
}

/// Straight segments between consecutive points.
pub fn polyline(points: &[Point]) -> Path {
    let mut path = Path::with_capacity(points.len());
    if let Some((&first, rest)) = points.split_first() {
        path.move_to(first);
        for &p in rest {
            path.line_to(p);
        }
    }
    path
}

fn close_to_bottom(stroke: &Path, first: Point, last: Point, content: &ContentBox) -> Path {
    let mut fill = stroke.clone();
    fill.line_to(Point::new(last.x, content.bottom))
        .line_to(Point::new(first.x, content.bottom))
        .close();
    fill
}
