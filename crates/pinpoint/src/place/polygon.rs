use crate::geom2::{
    distance_point_ring, point_in_polygon_eps, polyline_bbox, GeomCfg, GeomError, Point,
};
use crate::search::{search_cfg, SearchLine};
use std::time::Instant;

/// Place a point in `ring` with default configuration.
#[inline]
pub fn find_point_in_polygon(
    ring: &[Point],
    attractor: Point,
    buffer: f64,
    line: SearchLine,
) -> Result<Option<Point>, GeomError> {
    find_point_in_polygon_cfg(ring, attractor, buffer, line, &GeomCfg::default())
}

/// Find a point inside `ring`, at least `buffer` from its boundary, near `attractor`.
///
/// - `Err(TooFewVertices)` for rings with fewer than 3 vertices.
/// - `Ok(None)` when `2 * buffer` exceeds the narrower bbox extent.
/// - `attractor` itself when it is inside with boundary distance `> buffer`.
/// - Otherwise the grid search along `line`.
pub fn find_point_in_polygon_cfg(
    ring: &[Point],
    attractor: Point,
    buffer: f64,
    line: SearchLine,
    cfg: &GeomCfg,
) -> Result<Option<Point>, GeomError> {
    let _span =
        tracing::debug_span!("find_point_in_polygon", vertices = ring.len(), %line).entered();
    if ring.len() < 3 {
        return Err(GeomError::too_few(3, ring.len()));
    }
    let bbox = polyline_bbox(ring)?;
    if bbox.too_small_for(buffer) {
        tracing::debug!(min_extent = bbox.min_extent(), buffer, "ring too small");
        return Ok(None);
    }
    if point_in_polygon_eps(attractor, ring, cfg.vertex_eps)
        && distance_point_ring(attractor, ring)? > buffer
    {
        return Ok(Some(attractor));
    }

    let t0 = Instant::now();
    let found = search_cfg(ring, attractor, buffer, line, cfg)?;
    tracing::debug!(
        elapsed_us = t0.elapsed().as_micros() as u64,
        found = found.is_some(),
        "searched"
    );
    Ok(found)
}
