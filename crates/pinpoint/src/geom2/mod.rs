//! 2D geometry primitives for label placement.
//!
//! Purpose
//! - Distances (squared internally), closest points, and bounding boxes.
//! - Exact predicates: orientation, segment intersection, line–line intersection.
//! - Ray-casting point-in-polygon that never mutates its input.
//! - Polyline simplification and a reproducible random ring sampler.
//!
//! Conventions
//! - Rings are open or closed vertex lists (a repeated first vertex is harmless);
//!   the successor of vertex `i` is `(i + 1) mod N`.
//! - Screen space: `y` grows downwards.

mod contains;
mod distance;
mod predicates;
pub mod rand;
mod simplify;
mod types;

pub use contains::{point_in_polygon, point_in_polygon_eps};
pub use distance::{
    closest_point_on_ring, closest_point_on_segment, distance_point_polyline, distance_point_ring,
    multi_polygon_bbox, polyline_bbox, squared_distance, squared_distance_point_segment,
};
pub use predicates::{line_line_intersection, on_segment, orientation, segments_intersect};
pub use simplify::simplify_polyline;
pub use types::{BBox, GeomCfg, GeomError, LineIntersection, Orientation, Point, Polygon, Segment};
