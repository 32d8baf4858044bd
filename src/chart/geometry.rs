//! Distance primitives for hit-testing. Exact measurements; tolerance
//! is the caller's business.

/// Euclidean distance between two points.
pub fn distance_to_point(px: f32, py: f32, x: f32, y: f32) -> f32 {
    ((px - x).powi(2) + (py - y).powi(2)).sqrt()
}

/// Distance from a point to a line segment: project onto the infinite
/// line, clamp the parameter to [0, 1], measure to the clamped point.
/// A zero-length segment degrades to point distance.
pub fn distance_to_segment(px: f32, py: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    let ax = px - x1;
    let ay = py - y1;
    let dx = x2 - x1;
    let dy = y2 - y1;

    let len_sq = dx * dx + dy * dy;
    if len_sq == 0.0 {
        return distance_to_point(px, py, x1, y1);
    }

    let t = ((ax * dx + ay * dy) / len_sq).clamp(0.0, 1.0);
    let cx = x1 + t * dx;
    let cy = y1 + t * dy;

    distance_to_point(px, py, cx, cy)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_distance_is_euclidean() {
        assert_eq!(distance_to_point(0.0, 0.0, 3.0, 4.0), 5.0);
        assert_eq!(distance_to_point(1.0, 1.0, 1.0, 1.0), 0.0);
    }

    #[test]
    fn perpendicular_distance_to_segment() {
        // Horizontal segment y=0, query directly above the middle.
        assert_eq!(distance_to_segment(5.0, 3.0, 0.0, 0.0, 10.0, 0.0), 3.0);
    }

    #[test]
    fn projection_clamps_to_endpoints() {
        // Query beyond the right end: distance measured to (10, 0).
        assert_eq!(distance_to_segment(13.0, 4.0, 0.0, 0.0, 10.0, 0.0), 5.0);
        // And beyond the left end.
        assert_eq!(distance_to_segment(-3.0, 4.0, 0.0, 0.0, 10.0, 0.0), 5.0);
    }

    #[test]
    fn degenerate_segment_equals_point_distance() {
        for (px, py) in [(0.0, 0.0), (7.0, -2.0), (3.5, 3.5)] {
            let seg = distance_to_segment(px, py, 2.0, 2.0, 2.0, 2.0);
            let pt = distance_to_point(px, py, 2.0, 2.0);
            assert_eq!(seg, pt);
        }
    }

    #[test]
    fn on_segment_distance_is_zero() {
        assert_eq!(distance_to_segment(5.0, 5.0, 0.0, 0.0, 10.0, 10.0), 0.0);
    }
}
