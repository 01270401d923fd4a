// File: crates/linechart-core/src/grid.rs
// Summary: Even spacing helper for label and gridline positions.

/// `parts + 1` evenly spaced stops from `start` to `end` inclusive.
/// Returns an empty list when `parts == 0`; a single label has no interval to span.
pub fn even_stops(start: f32, end: f32, parts: usize) -> Vec<f32> {
    if parts == 0 { return Vec::new(); }
    let step = (end - start) / parts as f32;
    (0..=parts).map(|i| start + step * i as f32).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_parts_give_five_stops() {
        assert_eq!(even_stops(0.0, 400.0, 4), vec![0.0, 100.0, 200.0, 300.0, 400.0]);
    }

    #[test]
    fn zero_parts_is_empty() {
        assert!(even_stops(0.0, 10.0, 0).is_empty());
    }
}
