// File: crates/linechart-core/src/axis.rs
// Summary: Axis label layout: offsets reserved for labels and evenly spaced label positions.

use tracing::debug;

use crate::geometry::ContentBox;
use crate::grid::even_stops;
use crate::surface::TextMeasure;
use crate::types::LayoutBox;

/// Fewer labels than this leave an axis without offsets, positions or gridlines.
pub const MIN_AXIS_LABELS: usize = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisKind {
    X,
    Y,
}

/// A label and its coordinate along its axis (x for the X axis, y for the Y axis).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelPlacement<'a> {
    pub text: &'a str,
    pub pos: f32,
}

fn usable(labels: &[String]) -> Option<&str> {
    (labels.len() >= MIN_AXIS_LABELS).then(|| labels[0].as_str())
}

/// Offsets around the content box for the given labels.
///
/// The first label of each axis stands in for all of them:
/// - Y: `left = w + 2 * floor(w / chars)`, `top = h`
/// - X: `bottom = 2 * h`, `right = w / 2` (the last label is centered on the right edge)
///
/// No offset shrinks below `base`, which keeps room for half a marker.
pub fn layout(
    x_labels: &[String],
    y_labels: &[String],
    text_size: f32,
    measure: &dyn TextMeasure,
    base: LayoutBox,
) -> LayoutBox {
    let mut out = base;

    if let Some(first) = usable(y_labels) {
        let b = measure.measure_text(first, text_size);
        let chars = first.chars().count();
        let per_char = if chars > 0 { (b.width / chars as f32).floor() } else { 0.0 };
        out.left = (b.width + per_char * 2.0).max(base.left);
        out.top = b.height.max(base.top);
    }

    if let Some(first) = usable(x_labels) {
        let b = measure.measure_text(first, text_size);
        out.bottom = (b.height * 2.0).max(base.bottom);
        out.right = (b.width / 2.0).max(base.right);
    }

    debug!(?out, x_labels = x_labels.len(), y_labels = y_labels.len(), "axis layout recomputed");
    out
}

/// Evenly spaced label coordinates. Y labels run bottom to top (label 0 at
/// `content.bottom`); X labels run left to right (label 0 at `content.left`).
pub fn label_positions<'a>(labels: &'a [String], axis: AxisKind, content: &ContentBox) -> Vec<LabelPlacement<'a>> {
    if usable(labels).is_none() {
        return Vec::new();
    }
    let parts = labels.len() - 1;
    let stops = match axis {
        AxisKind::X => even_stops(content.left, content.right, parts),
        AxisKind::Y => even_stops(content.bottom, content.top, parts),
    };
    labels
        .iter()
        .zip(stops)
        .map(|(text, pos)| LabelPlacement { text: text.as_str(), pos })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::FixedMetrics;

    fn labels(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn y_labels_reserve_left_and_top() {
        // "$100" at size 40: width 4 * 20 = 80, height 30
        let m = FixedMetrics::default();
        let out = layout(&[], &labels(&["$100", "$200"]), 40.0, &m, LayoutBox::uniform(4.0));
        assert_eq!(out.left, 80.0 + 20.0 * 2.0);
        assert_eq!(out.top, 30.0);
        assert_eq!(out.right, 4.0);
        assert_eq!(out.bottom, 4.0);
    }

    #[test]
    fn x_labels_reserve_bottom_and_right() {
        let m = FixedMetrics::default();
        let out = layout(&labels(&["Sep", "Oct"]), &[], 40.0, &m, LayoutBox::uniform(4.0));
        assert_eq!(out.bottom, 60.0);
        assert_eq!(out.right, 30.0);
        assert_eq!(out.left, 4.0);
    }

    #[test]
    fn single_label_keeps_defaults() {
        let m = FixedMetrics::default();
        let base = LayoutBox::uniform(4.0);
        assert_eq!(layout(&labels(&["Sep"]), &labels(&["$0"]), 40.0, &m, base), base);
        let c = ContentBox::from_ltwh(0.0, 0.0, 100.0, 100.0);
        assert!(label_positions(&labels(&["Sep"]), AxisKind::X, &c).is_empty());
    }

    #[test]
    fn x_positions_span_width() {
        let c = ContentBox::from_ltwh(10.0, 0.0, 300.0, 100.0);
        let l = labels(&["a", "b", "c", "d"]);
        let xs: Vec<f32> = label_positions(&l, AxisKind::X, &c).iter().map(|p| p.pos).collect();
        assert_eq!(xs, vec![10.0, 110.0, 210.0, 310.0]);
    }
}
