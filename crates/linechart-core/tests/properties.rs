// File: crates/linechart-core/tests/properties.rs
// Purpose: Property tests over arbitrary datasets for projection and curve building.

use linechart_core::{build_path, project, value_range, ContentBox, LineChart};
use proptest::prelude::*;

fn dataset() -> impl Strategy<Value = Vec<f32>> {
    prop::collection::vec(-1.0e4f32..1.0e4, 1..64)
}

proptest! {
    #[test]
    fn values_lie_within_min_max(values in dataset()) {
        let (lo, hi) = value_range(&values);
        prop_assert!(values.iter().all(|&v| lo <= v && v <= hi));
    }

    #[test]
    fn projection_is_monotonic_in_x(values in dataset(), labels in proptest::option::of(0usize..100)) {
        let content = ContentBox::from_ltwh(10.0, 10.0, 500.0, 300.0);
        let (lo, hi) = value_range(&values);
        let pts = project(&values, labels, &content, lo, hi);
        prop_assert_eq!(pts.len(), values.len());
        prop_assert!(pts.windows(2).all(|w| w[1].x > w[0].x));
    }

    #[test]
    fn projection_stays_inside_content(values in dataset()) {
        let content = ContentBox::from_ltwh(0.0, 0.0, 640.0, 480.0);
        let (lo, hi) = value_range(&values);
        let pts = project(&values, None, &content, lo, hi);
        for p in pts {
            prop_assert!(p.y >= content.top - 1e-2 && p.y <= content.bottom + 1e-2);
            prop_assert!(p.x >= content.left && p.x <= content.right + 1e-2);
        }
    }

    #[test]
    fn curve_has_one_cubic_per_gap(values in dataset(), smooth in 0.01f32..=0.5, fill in any::<bool>()) {
        let content = ContentBox::from_ltwh(0.0, 0.0, 640.0, 480.0);
        let (lo, hi) = value_range(&values);
        let pts = project(&values, None, &content, lo, hi);
        let curve = build_path(&pts, smooth, fill, &content);
        prop_assert_eq!(curve.stroke.start(), Some(pts[0]));
        prop_assert_eq!(curve.stroke.cubic_count(), pts.len() - 1);
        prop_assert_eq!(curve.fill.is_some(), fill);
    }

    #[test]
    fn accepted_smoothing_round_trips(s in -1.0f32..1.0) {
        let mut chart = LineChart::headless();
        chart.set_smooth_size(s);
        if s > 0.0 && s <= 0.5 {
            prop_assert_eq!(chart.smooth_size(), s);
        } else {
            prop_assert_eq!(chart.smooth_size(), 0.3);
        }
    }
}
