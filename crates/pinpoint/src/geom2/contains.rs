//! Ray-casting point-in-polygon with degenerate-case correction.
//!
//! Vertices and non-horizontal edges count as inside. Points on a horizontal
//! edge follow the nudged edge and may report either way. The ring is never
//! mutated: vertices whose ordinate equals the query ordinate are nudged on read.

use super::predicates::{on_segment, orientation, segments_intersect};
use super::types::{GeomCfg, Orientation, Point, Segment};

/// Point-in-polygon with default tolerances.
#[inline]
pub fn point_in_polygon(p: Point, ring: &[Point]) -> bool {
    point_in_polygon_eps(p, ring, GeomCfg::default().vertex_eps)
}

/// Point-in-polygon with an explicit vertex nudge `eps`.
///
/// Returns `false` for rings with fewer than 3 vertices.
pub fn point_in_polygon_eps(p: Point, ring: &[Point], eps: f64) -> bool {
    let n = ring.len();
    if n < 3 {
        return false;
    }

    let mut max_x = f64::NEG_INFINITY;
    for v in ring {
        if *v == p {
            return true;
        }
        max_x = max_x.max(v.x);
    }

    // A vertex on the ray's line would be counted by both adjacent edges (or
    // neither); lift it just above the ray instead.
    let vertex = |i: usize| -> Point {
        let v = ring[i];
        if v.y == p.y {
            Point::new(v.x, nudge_up(v.y, eps))
        } else {
            v
        }
    };

    let ray = Segment::new(p, Point::new(max_x + 1.0, p.y));
    let mut count = 0usize;
    for i in 0..n {
        let edge = Segment::new(vertex(i), vertex((i + 1) % n));
        if segments_intersect(ray, edge) {
            if orientation(edge.a, p, edge.b) == Orientation::Collinear {
                return on_segment(edge.a, p, edge.b);
            }
            count += 1;
        }
    }
    count % 2 == 1
}

/// `y + eps`, widened to at least one representable step so large ordinates still move.
#[inline]
fn nudge_up(y: f64, eps: f64) -> f64 {
    y + eps.max(y.abs() * f64::EPSILON * 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    fn square() -> Vec<Point> {
        vec![vector![0.0, 0.0], vector![10.0, 0.0], vector![10.0, 10.0], vector![0.0, 10.0]]
    }

    #[test]
    fn square_inside_outside_boundary() {
        let sq = square();
        assert!(point_in_polygon(vector![5.0, 5.0], &sq));
        assert!(!point_in_polygon(vector![15.0, 5.0], &sq));
        assert!(!point_in_polygon(vector![-1.0, 5.0], &sq));
        // vertex, edge
        assert!(point_in_polygon(vector![10.0, 10.0], &sq));
        assert!(point_in_polygon(vector![10.0, 4.0], &sq));
        assert!(point_in_polygon(vector![0.0, 7.0], &sq));
    }

    #[test]
    fn ray_through_vertex_is_not_double_counted() {
        // Diamond: the ray from the centre passes exactly through the right vertex.
        let diamond = vec![
            vector![5.0, 0.0],
            vector![10.0, 5.0],
            vector![5.0, 10.0],
            vector![0.0, 5.0],
        ];
        assert!(point_in_polygon(vector![5.0, 5.0], &diamond));
        assert!(!point_in_polygon(vector![-3.0, 5.0], &diamond));
        assert!(!point_in_polygon(vector![11.0, 5.0], &diamond));
    }

    #[test]
    fn concave_ring_with_shared_ordinates() {
        // U shape, opening at the top (y down): notch between x=3..7, y=0..6.
        let u = vec![
            vector![0.0, 0.0],
            vector![3.0, 0.0],
            vector![3.0, 6.0],
            vector![7.0, 6.0],
            vector![7.0, 0.0],
            vector![10.0, 0.0],
            vector![10.0, 10.0],
            vector![0.0, 10.0],
        ];
        assert!(point_in_polygon(vector![1.0, 6.0], &u));
        assert!(!point_in_polygon(vector![5.0, 3.0], &u));
        assert!(point_in_polygon(vector![5.0, 8.0], &u));
        assert!(point_in_polygon(vector![5.0, 7.0], &u));
        assert!(point_in_polygon(vector![3.0, 6.0], &u));
        assert!(!point_in_polygon(vector![-1.0, 6.0], &u));
    }

    #[test]
    fn ring_is_not_mutated_and_short_rings_are_outside() {
        let sq = square();
        let before = sq.clone();
        let _ = point_in_polygon(vector![5.0, 0.0], &sq);
        let _ = point_in_polygon(vector![3.0, 10.0], &sq);
        assert_eq!(sq, before);
        assert!(!point_in_polygon(vector![0.0, 0.0], &sq[..2]));
    }

    #[test]
    fn closing_duplicate_is_harmless() {
        let mut sq = square();
        sq.push(sq[0]);
        assert!(point_in_polygon(vector![5.0, 5.0], &sq));
        assert!(!point_in_polygon(vector![5.0, 11.0], &sq));
    }
}
