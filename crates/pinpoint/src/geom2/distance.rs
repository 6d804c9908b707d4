//! Distances, closest points, and bounding boxes.
//!
//! Hot loops work on squared distances; square roots are taken only when a
//! distance is reported to a caller.

use super::types::{BBox, GeomError, Point, Polygon};

/// Squared Euclidean distance between two points.
#[inline]
pub fn squared_distance(p: Point, q: Point) -> f64 {
    (q - p).norm_squared()
}

/// Squared distance from `p` to the segment `[a, b]` (vector projection).
///
/// A zero-length segment measures the distance to its single point.
pub fn squared_distance_point_segment(p: Point, a: Point, b: Point) -> f64 {
    let ab = b - a;
    let ap = p - a;
    let bp = p - b;

    if ab.dot(&bp) > 0.0 {
        // projects beyond b
        return bp.norm_squared();
    }
    if ab.dot(&ap) < 0.0 {
        // projects before a
        return ap.norm_squared();
    }
    let len2 = ab.norm_squared();
    if len2 == 0.0 {
        return ap.norm_squared();
    }
    let cross = ab.x * ap.y - ab.y * ap.x;
    cross * cross / len2
}

/// Minimum distance from `p` to an open polyline (consecutive vertex pairs only).
pub fn distance_point_polyline(p: Point, polyline: &[Point]) -> Result<f64, GeomError> {
    if polyline.len() < 2 {
        return Err(GeomError::too_few(2, polyline.len()));
    }
    let d2 = polyline
        .windows(2)
        .map(|w| squared_distance_point_segment(p, w[0], w[1]))
        .fold(f64::INFINITY, f64::min);
    Ok(d2.sqrt())
}

/// Minimum distance from `p` to the boundary of a closed ring (edge `N-1 -> 0` included).
///
/// Works whether or not the ring repeats its first vertex at the end.
pub fn distance_point_ring(p: Point, ring: &[Point]) -> Result<f64, GeomError> {
    if ring.len() < 2 {
        return Err(GeomError::too_few(2, ring.len()));
    }
    let n = ring.len();
    let mut d2 = f64::INFINITY;
    for i in 0..n {
        let d = squared_distance_point_segment(p, ring[i], ring[(i + 1) % n]);
        if d < d2 {
            d2 = d;
        }
    }
    Ok(d2.sqrt())
}

/// Projection parameter `λ = ((p - a)·(b - a)) / |b - a|²`.
#[inline]
fn projection_lambda(p: Point, a: Point, b: Point) -> f64 {
    let v = b - a;
    (p - a).dot(&v) / v.norm_squared()
}

/// Closest point to `p` on the segment `[a, b]`.
pub fn closest_point_on_segment(p: Point, a: Point, b: Point) -> Point {
    let l = projection_lambda(p, a, b);
    // NaN (a == b) falls through to `a` via the first arm's negation.
    if !(l > 0.0) {
        a
    } else if l >= 1.0 {
        b
    } else {
        a + (b - a) * l
    }
}

/// Closest point to `p` on a closed ring.
pub fn closest_point_on_ring(p: Point, ring: &[Point]) -> Result<Point, GeomError> {
    if ring.len() < 2 {
        return Err(GeomError::too_few(2, ring.len()));
    }
    let n = ring.len();
    let mut best = ring[0];
    let mut best_d2 = f64::INFINITY;
    for i in 0..n {
        let (a, b) = (ring[i], ring[(i + 1) % n]);
        let d2 = squared_distance_point_segment(p, a, b);
        if d2 < best_d2 {
            best_d2 = d2;
            best = closest_point_on_segment(p, a, b);
        }
    }
    Ok(best)
}

/// Bounding box of a polyline (or ring) by linear scan.
pub fn polyline_bbox(polyline: &[Point]) -> Result<BBox, GeomError> {
    if polyline.len() < 2 {
        return Err(GeomError::too_few(2, polyline.len()));
    }
    let mut min = Point::new(f64::INFINITY, f64::INFINITY);
    let mut max = Point::new(f64::NEG_INFINITY, f64::NEG_INFINITY);
    for p in polyline {
        min.x = min.x.min(p.x);
        min.y = min.y.min(p.y);
        max.x = max.x.max(p.x);
        max.y = max.y.max(p.y);
    }
    let bbox = BBox::new(min, max);
    // f64::min/max skip NaN, so check the inputs too.
    if !bbox.is_finite() || polyline.iter().any(|p| !p.x.is_finite() || !p.y.is_finite()) {
        return Err(GeomError::NonFiniteBounds);
    }
    Ok(bbox)
}

/// Union of the exterior-ring boxes of all polygons.
///
/// Polygons whose own box cannot be computed are skipped; if none remain, the
/// result is `NonFiniteBounds`.
pub fn multi_polygon_bbox(multi: &[Polygon]) -> Result<BBox, GeomError> {
    let mut acc: Option<BBox> = None;
    for poly in multi {
        match polyline_bbox(&poly.exterior) {
            Ok(b) => acc = Some(acc.map_or(b, |a| a.union(&b))),
            Err(err) => tracing::debug!(%err, "skipping ring in multi-polygon bbox"),
        }
    }
    acc.filter(BBox::is_finite).ok_or(GeomError::NonFiniteBounds)
}
