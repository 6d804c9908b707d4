use super::polygon::find_point_in_polygon_cfg;
use super::{Attractor, Axis};
use crate::geom2::{
    distance_point_ring, multi_polygon_bbox, point_in_polygon_eps, polyline_bbox, BBox, GeomCfg,
    GeomError, Point, Polygon,
};

/// A member ring large enough to host a buffered point.
struct Candidate<'a> {
    index: usize,
    ring: &'a [Point],
    bbox: BBox,
    /// Contains the preferred coordinates (too close to the boundary to accept outright).
    preferred: bool,
}

/// Place a point in a multi-polygon with default configuration.
#[inline]
pub fn find_point_in_multi_polygon(
    multi: &[Polygon],
    preferred: Option<Point>,
    attractor: Attractor,
    buffer: f64,
    axis: Axis,
) -> Result<Option<Point>, GeomError> {
    find_point_in_multi_polygon_cfg(multi, preferred, attractor, buffer, axis, &GeomCfg::default())
}

/// Find a buffered interior point in one of the exterior rings of `multi`.
///
/// `preferred` is returned unchanged if some ring contains it with boundary
/// distance `> buffer`. Otherwise rings are tried in ranked order (rings that
/// contain `preferred` first, then by `attractor` and `axis`) and the first
/// successful placement wins. Malformed member rings are skipped; only an
/// unusable overall bounding box is an error.
pub fn find_point_in_multi_polygon_cfg(
    multi: &[Polygon],
    preferred: Option<Point>,
    attractor: Attractor,
    buffer: f64,
    axis: Axis,
    cfg: &GeomCfg,
) -> Result<Option<Point>, GeomError> {
    let _span =
        tracing::debug_span!("find_point_in_multi_polygon", rings = multi.len(), %attractor, %axis)
            .entered();
    let bbox = multi_polygon_bbox(multi)?;
    if bbox.too_small_for(buffer) {
        tracing::debug!(min_extent = bbox.min_extent(), buffer, "multi-polygon too small");
        return Ok(None);
    }

    let mut candidates = Vec::with_capacity(multi.len());
    for (index, poly) in multi.iter().enumerate() {
        let ring = poly.exterior.as_slice();
        if ring.len() < 3 {
            tracing::warn!(index, vertices = ring.len(), "skipping malformed ring");
            continue;
        }
        let mut contains_preferred = false;
        if let Some(p) = preferred {
            if point_in_polygon_eps(p, ring, cfg.vertex_eps) {
                contains_preferred = true;
                match distance_point_ring(p, ring) {
                    Ok(d) if d > buffer => return Ok(Some(p)),
                    Ok(_) => {}
                    Err(err) => {
                        tracing::warn!(index, %err, "skipping ring");
                        continue;
                    }
                }
            }
        }
        let ring_bbox = match polyline_bbox(ring) {
            Ok(b) => b,
            Err(err) => {
                tracing::warn!(index, %err, "skipping ring");
                continue;
            }
        };
        if !ring_bbox.too_small_for(buffer) {
            candidates.push(Candidate {
                index,
                ring,
                bbox: ring_bbox,
                preferred: contains_preferred,
            });
        }
    }

    // Stable: equal-ranked rings keep input order.
    candidates.sort_by(|a, b| {
        b.preferred
            .cmp(&a.preferred)
            .then_with(|| attractor.rank(axis, &a.bbox, &b.bbox))
    });

    let line = attractor.search_line();
    for c in &candidates {
        let start = match (c.preferred, preferred) {
            (true, Some(p)) => p,
            _ => attractor.anchor(&c.bbox),
        };
        match find_point_in_polygon_cfg(c.ring, start, buffer, line, cfg) {
            Ok(Some(p)) => {
                tracing::debug!(index = c.index, "placed");
                return Ok(Some(p));
            }
            Ok(None) => {}
            Err(err) => tracing::warn!(index = c.index, %err, "skipping ring"),
        }
    }
    Ok(None)
}
