//! Label placement geometry.
//!
//! Given a polygon (or multi-polygon) and an attractor, find a point inside
//! the shape, at least a buffer away from its boundary, close to the attractor.
//!
//! Layout
//! - `geom2`: points, segments, bounding boxes, predicates, point-in-polygon.
//! - `search`: the directional grid search along one of four lines.
//! - `place`: single- and multi-polygon orchestration.
//! - `vertical`: vertical separation between a segment and a boundary.
//!
//! All calls are synchronous and side-effect free apart from `tracing` events;
//! inputs are borrowed and never mutated.

pub mod geom2;
pub mod place;
pub mod search;
pub mod vertical;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom2::{GeomCfg, GeomError, Point, Polygon, Segment};
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::rand::{draw_ring_radial, RadialCfg, ReplayToken, VertexCount};
    pub use crate::geom2::{BBox, GeomCfg, GeomError, Point, Polygon, Segment};
    pub use crate::place::{
        find_point_in_multi_polygon, find_point_in_multi_polygon_cfg, find_point_in_polygon,
        find_point_in_polygon_cfg, Attractor, Axis,
    };
    pub use crate::search::{SearchDirection, SearchLine};
    pub use crate::vertical::{
        vertical_distance_between_segment_and_multi_polygon,
        vertical_distance_between_segment_and_polyline, vertical_distance_between_segments,
    };
}
