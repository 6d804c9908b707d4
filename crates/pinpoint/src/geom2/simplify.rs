//! Ramer–Douglas–Peucker polyline simplification.
//!
//! Used to bound the cost of vertical distance queries against dense boundaries.
//! Endpoints are always kept; interior vertices survive only if they are
//! farther than `tolerance` from the chord of the span they split.

use super::distance::squared_distance_point_segment;
use super::types::Point;

/// Simplify `points` with distance `tolerance`. Inputs of ≤ 2 vertices are returned as-is.
pub fn simplify_polyline(points: &[Point], tolerance: f64) -> Vec<Point> {
    if points.len() <= 2 {
        return points.to_vec();
    }
    let sq_tol = tolerance.max(0.0).powi(2);
    let last = points.len() - 1;
    let mut keep = vec![false; points.len()];
    keep[0] = true;
    keep[last] = true;

    // Explicit stack instead of recursion: boundaries can have 1e5+ vertices.
    let mut stack = vec![(0usize, last)];
    while let Some((first, end)) = stack.pop() {
        if end <= first + 1 {
            continue;
        }
        let mut max_d2 = sq_tol;
        let mut index = None;
        for i in first + 1..end {
            let d2 = squared_distance_point_segment(points[i], points[first], points[end]);
            if d2 > max_d2 {
                max_d2 = d2;
                index = Some(i);
            }
        }
        if let Some(i) = index {
            keep[i] = true;
            stack.push((first, i));
            stack.push((i, end));
        }
    }

    points
        .iter()
        .zip(keep)
        .filter_map(|(p, k)| k.then_some(*p))
        .collect()
}
