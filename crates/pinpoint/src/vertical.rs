//! Vertical (y-axis) separation between a segment and a boundary.
//!
//! Callers use this to test label collisions along one axis only. Distances
//! are measured inside the shared x-band of the two segments; `Ok(None)` means
//! the bands do not overlap.
//!
//! Dense boundaries (`simplify_min_vertices` and up) are simplified with
//! Ramer–Douglas–Peucker first, trading exactness for bounded cost.

use crate::geom2::{
    line_line_intersection, segments_intersect, simplify_polyline, GeomCfg, GeomError,
    LineIntersection as Hit, Point, Polygon, Segment,
};
use std::borrow::Cow;

/// Minimum vertical distance between two segments.
///
/// `Ok(None)` if their x-ranges are disjoint, `Ok(Some(0.0))` if they intersect.
/// `Err(NonFiniteBounds)` for a non-finite coordinate, `Err(Invariant)` only on an
/// internal inconsistency.
pub fn vertical_distance_between_segments(
    s1: Segment,
    s2: Segment,
) -> Result<Option<f64>, GeomError> {
    if !s1.is_finite() || !s2.is_finite() {
        return Err(GeomError::NonFiniteBounds);
    }
    let s1 = s1.sorted_by_x();
    let s2 = s2.sorted_by_x();
    if s1.b.x < s2.a.x || s1.a.x > s2.b.x {
        return Ok(None);
    }
    if segments_intersect(s1, s2) {
        return Ok(Some(0.0));
    }

    // Vertical probes through both edges of the shared band, tall enough to
    // cross both segments.
    let (lo_x, hi_x) = (s1.a.x.max(s2.a.x), s1.b.x.min(s2.b.x));
    let ys = [s1.a.y, s1.b.y, s2.a.y, s2.b.y];
    let min_y = ys.iter().copied().fold(f64::INFINITY, f64::min);
    let max_y = ys.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let probe = |x: f64| Segment::new(Point::new(x, min_y), Point::new(x, max_y));

    let d = gap_along(s1, s2, probe(lo_x))?.min(gap_along(s1, s2, probe(hi_x))?);
    if !d.is_finite() {
        return Err(GeomError::invariant("vertical distance is not finite"));
    }
    Ok(Some(d))
}

/// Vertical gap between `s1` and `s2` measured on the vertical line `probe`.
fn gap_along(s1: Segment, s2: Segment, probe: Segment) -> Result<f64, GeomError> {
    match (line_line_intersection(s1, probe), line_line_intersection(s2, probe)) {
        (Hit::Point(p), Hit::Point(q)) => Ok((p.y - q.y).abs()),
        (Hit::Coincident, Hit::Point(p)) => Ok(gap_to_ends(p, s1)),
        (Hit::Point(p), Hit::Coincident) => Ok(gap_to_ends(p, s2)),
        (Hit::Coincident, Hit::Coincident) => Ok(interval_gap(s1, s2)),
        _ => Err(GeomError::invariant("probe line misses a segment")),
    }
}

/// Distance from `p` to the nearer end of vertical segment `s` (p lies outside it).
#[inline]
fn gap_to_ends(p: Point, s: Segment) -> f64 {
    (p.y - s.a.y).abs().min((p.y - s.b.y).abs())
}

/// Gap between the y-ranges of two vertical segments on the same line.
fn interval_gap(s1: Segment, s2: Segment) -> f64 {
    let (a_lo, a_hi) = (s1.a.y.min(s1.b.y), s1.a.y.max(s1.b.y));
    let (b_lo, b_hi) = (s2.a.y.min(s2.b.y), s2.a.y.max(s2.b.y));
    (a_lo.max(b_lo) - a_hi.min(b_hi)).max(0.0)
}

/// Vertical distance from `segment` to an open polyline, default configuration.
#[inline]
pub fn vertical_distance_between_segment_and_polyline(
    segment: Segment,
    polyline: &[Point],
) -> Result<Option<f64>, GeomError> {
    vertical_distance_between_segment_and_polyline_cfg(segment, polyline, &GeomCfg::default())
}

/// Minimum over the polyline's segments; stops early at `0`.
pub fn vertical_distance_between_segment_and_polyline_cfg(
    segment: Segment,
    polyline: &[Point],
    cfg: &GeomCfg,
) -> Result<Option<f64>, GeomError> {
    if polyline.len() < 2 {
        return Err(GeomError::too_few(2, polyline.len()));
    }
    if polyline.iter().any(|p| !p.x.is_finite() || !p.y.is_finite()) {
        return Err(GeomError::NonFiniteBounds);
    }
    let points: Cow<[Point]> = if polyline.len() >= cfg.simplify_min_vertices {
        Cow::Owned(simplify_polyline(polyline, cfg.simplify_tolerance))
    } else {
        Cow::Borrowed(polyline)
    };

    let mut best: Option<f64> = None;
    for w in points.windows(2) {
        if let Some(d) = vertical_distance_between_segments(segment, Segment::new(w[0], w[1]))? {
            if d == 0.0 {
                return Ok(Some(0.0));
            }
            best = Some(best.map_or(d, |b| b.min(d)));
        }
    }
    Ok(best)
}

/// Vertical distance from `segment` to the exterior rings of `multi`, default configuration.
#[inline]
pub fn vertical_distance_between_segment_and_multi_polygon(
    segment: Segment,
    multi: &[Polygon],
) -> Result<Option<f64>, GeomError> {
    vertical_distance_between_segment_and_multi_polygon_cfg(segment, multi, &GeomCfg::default())
}

/// Rings are measured closed. Malformed rings are skipped; invariant failures propagate.
///
/// `Err(NonFiniteBounds)` if `segment` itself has a non-finite coordinate.
pub fn vertical_distance_between_segment_and_multi_polygon_cfg(
    segment: Segment,
    multi: &[Polygon],
    cfg: &GeomCfg,
) -> Result<Option<f64>, GeomError> {
    if !segment.is_finite() {
        return Err(GeomError::NonFiniteBounds);
    }
    nearest_ring(multi, |ring| {
        vertical_distance_between_segment_and_polyline_cfg(segment, &closed(ring), cfg)
    })
}

/// Smallest `measure` over the exterior rings, stopping early at `0`.
fn nearest_ring<F>(multi: &[Polygon], mut measure: F) -> Result<Option<f64>, GeomError>
where
    F: FnMut(&[Point]) -> Result<Option<f64>, GeomError>,
{
    let mut best: Option<f64> = None;
    for (index, poly) in multi.iter().enumerate() {
        let d = match measure(&poly.exterior) {
            Ok(d) => d,
            Err(err) if err.is_invariant() => return Err(err),
            Err(err) => {
                tracing::warn!(index, %err, "skipping ring");
                continue;
            }
        };
        if let Some(d) = d {
            if d == 0.0 {
                return Ok(Some(0.0));
            }
            best = Some(best.map_or(d, |b| b.min(d)));
        }
    }
    Ok(best)
}

/// `ring` with its first vertex repeated at the end, unless already closed.
fn closed(ring: &[Point]) -> Cow<'_, [Point]> {
    match (ring.first(), ring.last()) {
        (Some(first), Some(last)) if ring.len() > 1 && first != last => {
            let mut v = ring.to_vec();
            v.push(*first);
            Cow::Owned(v)
        }
        _ => Cow::Borrowed(ring),
    }
}
