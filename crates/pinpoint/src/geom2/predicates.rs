//! Exact-comparison predicates on points and segments.
//!
//! No epsilons here: callers that need tie-breaking (point-in-polygon) perturb
//! their inputs instead.

use super::types::{LineIntersection, Orientation, Point, Segment};

/// Sign of `(p2 - p1) × (p3 - p2)`, reported as an orientation.
#[inline]
pub fn orientation(p1: Point, p2: Point, p3: Point) -> Orientation {
    let val = (p2.y - p1.y) * (p3.x - p2.x) - (p2.x - p1.x) * (p3.y - p2.y);
    if val == 0.0 {
        Orientation::Collinear
    } else if val > 0.0 {
        Orientation::Clockwise
    } else {
        Orientation::Counterclockwise
    }
}

/// True iff `p2` lies in the axis-aligned box of `p1, p3`.
///
/// Only meaningful when the three points are already known to be collinear.
#[inline]
pub fn on_segment(p1: Point, p2: Point, p3: Point) -> bool {
    p2.x <= p1.x.max(p3.x)
        && p2.x >= p1.x.min(p3.x)
        && p2.y <= p1.y.max(p3.y)
        && p2.y >= p1.y.min(p3.y)
}

/// Closed segment intersection; touching endpoints and collinear overlap count.
pub fn segments_intersect(s1: Segment, s2: Segment) -> bool {
    let (p1, q1) = (s1.a, s1.b);
    let (p2, q2) = (s2.a, s2.b);

    let o1 = orientation(p1, q1, p2);
    let o2 = orientation(p1, q1, q2);
    let o3 = orientation(p2, q2, p1);
    let o4 = orientation(p2, q2, q1);

    if o1 != o2 && o3 != o4 {
        return true;
    }

    (o1 == Orientation::Collinear && on_segment(p1, p2, q1))
        || (o2 == Orientation::Collinear && on_segment(p1, q2, q1))
        || (o3 == Orientation::Collinear && on_segment(p2, p1, q2))
        || (o4 == Orientation::Collinear && on_segment(p2, q1, q2))
}

/// Intersect the infinite lines through `s1` and `s2` (determinant formula).
pub fn line_line_intersection(s1: Segment, s2: Segment) -> LineIntersection {
    let (x1, y1, x2, y2) = (s1.a.x, s1.a.y, s1.b.x, s1.b.y);
    let (x3, y3, x4, y4) = (s2.a.x, s2.a.y, s2.b.x, s2.b.y);

    let den = (x1 - x2) * (y3 - y4) - (y1 - y2) * (x3 - x4);
    if den == 0.0 {
        // Parallel; same line iff an endpoint of s2 is collinear with s1.
        return if orientation(s1.a, s1.b, s2.a) == Orientation::Collinear {
            LineIntersection::Coincident
        } else {
            LineIntersection::Parallel
        };
    }

    let c1 = x1 * y2 - y1 * x2;
    let c2 = x3 * y4 - y3 * x4;
    let x = (c1 * (x3 - x4) - (x1 - x2) * c2) / den;
    let y = (c1 * (y3 - y4) - (y1 - y2) * c2) / den;
    LineIntersection::Point(Point::new(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    fn seg(ax: f64, ay: f64, bx: f64, by: f64) -> Segment {
        Segment::new(vector![ax, ay], vector![bx, by])
    }

    #[test]
    fn orientation_three_cases() {
        let a = vector![0.0, 0.0];
        let b = vector![1.0, 0.0];
        assert_eq!(orientation(a, b, vector![2.0, 0.0]), Orientation::Collinear);
        // In y-down screen space this turn is drawn clockwise.
        assert_eq!(orientation(a, b, vector![1.0, 1.0]), Orientation::Counterclockwise);
        assert_eq!(orientation(a, b, vector![1.0, -1.0]), Orientation::Clockwise);
    }

    #[test]
    fn crossing_touching_and_disjoint_segments() {
        assert!(segments_intersect(seg(0.0, 0.0, 2.0, 2.0), seg(0.0, 2.0, 2.0, 0.0)));
        // endpoint touch
        assert!(segments_intersect(seg(0.0, 0.0, 1.0, 1.0), seg(1.0, 1.0, 2.0, 0.0)));
        // collinear overlap
        assert!(segments_intersect(seg(0.0, 0.0, 2.0, 0.0), seg(1.0, 0.0, 3.0, 0.0)));
        // collinear, disjoint
        assert!(!segments_intersect(seg(0.0, 0.0, 1.0, 0.0), seg(2.0, 0.0, 3.0, 0.0)));
        assert!(!segments_intersect(seg(0.0, 0.0, 1.0, 1.0), seg(0.0, 1.0, 0.4, 0.9)));
    }

    #[test]
    fn line_line_point_parallel_and_coincident() {
        let hit = line_line_intersection(seg(0.0, 0.0, 1.0, 1.0), seg(0.0, 2.0, 2.0, 0.0));
        let p = hit.point().expect("point");
        assert!((p - vector![1.0, 1.0]).norm() < 1e-12);

        // Lines, not segments: the crossing lies outside both inputs.
        let far = line_line_intersection(seg(0.0, 0.0, 1.0, 0.0), seg(5.0, 1.0, 5.0, 2.0));
        assert_eq!(far, LineIntersection::Point(vector![5.0, 0.0]));

        assert_eq!(
            line_line_intersection(seg(0.0, 0.0, 1.0, 0.0), seg(0.0, 1.0, 1.0, 1.0)),
            LineIntersection::Parallel
        );
        assert_eq!(
            line_line_intersection(seg(0.0, 0.0, 1.0, 0.0), seg(3.0, 0.0, 4.0, 0.0)),
            LineIntersection::Coincident
        );
    }
}
