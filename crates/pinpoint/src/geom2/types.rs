//! Basic 2D value types, tolerances, and the error enum shared by the engine.
//!
//! - `GeomCfg`: centralizes the numeric knobs (step cap, vertex epsilon, simplification).
//! - `Segment`, `BBox`, `Polygon`: plain values built per call, never cached.
//! - `Orientation`, `LineIntersection`: results of the low-level predicates.
//! - `GeomError`: malformed input or an internal invariant violation.
//!
//! Coordinates follow screen conventions: `y` grows downwards, so "top" is `min_y`.

use nalgebra::Vector2;
use std::fmt;

/// A point (or vector) in the plane.
pub type Point = Vector2<f64>;

/// Geometry configuration (tolerances and search caps).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeomCfg {
    /// Upper bound on grid steps per bbox axis; step sizes grow past it.
    pub max_steps: i64,
    /// Upward nudge applied to vertices sharing the query ordinate in point-in-polygon.
    pub vertex_eps: f64,
    /// Polylines with at least this many vertices are simplified before vertical distances.
    pub simplify_min_vertices: usize,
    /// Ramer–Douglas–Peucker tolerance for that simplification.
    pub simplify_tolerance: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            max_steps: 1000,
            vertex_eps: 1e-10,
            simplify_min_vertices: 100,
            simplify_tolerance: 10.0,
        }
    }
}

/// Errors reported by the engine.
///
/// "No solution" is never an error; it is `Ok(None)` at the call sites.
#[derive(Clone, Debug, PartialEq)]
pub enum GeomError {
    /// A ring or polyline has fewer vertices than the operation needs.
    TooFewVertices { needed: usize, got: usize },
    /// A bounding box came out with a non-finite bound (or nothing to bound).
    NonFiniteBounds,
    /// A coordinate is too large in magnitude for the integer search grid.
    OutOfGridRange,
    /// An internal consistency check failed; this is a bug, not bad input.
    Invariant { reason: &'static str },
}

impl GeomError {
    #[inline]
    pub(crate) fn too_few(needed: usize, got: usize) -> Self {
        Self::TooFewVertices { needed, got }
    }

    #[inline]
    pub(crate) fn invariant(reason: &'static str) -> Self {
        Self::Invariant { reason }
    }

    /// True for category (c) failures that indicate a defect rather than bad input.
    #[inline]
    pub fn is_invariant(&self) -> bool {
        matches!(self, Self::Invariant { .. })
    }
}

impl fmt::Display for GeomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeomError::TooFewVertices { needed, got } => {
                write!(f, "need at least {needed} vertices, got {got}")
            }
            GeomError::NonFiniteBounds => write!(f, "bounding box has a non-finite bound"),
            GeomError::OutOfGridRange => write!(f, "coordinates exceed the search grid range"),
            GeomError::Invariant { reason } => write!(f, "internal invariant violated: {reason}"),
        }
    }
}

impl std::error::Error for GeomError {}

/// Segment `[a, b]`. Direction matters only for orientation-based predicates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub a: Point,
    pub b: Point,
}

impl Segment {
    #[inline]
    pub fn new(a: Point, b: Point) -> Self {
        Self { a, b }
    }

    /// Same segment with endpoints ordered by increasing `x`.
    #[inline]
    pub fn sorted_by_x(self) -> Self {
        if self.a.x > self.b.x {
            Self::new(self.b, self.a)
        } else {
            self
        }
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.a.iter().chain(self.b.iter()).all(|v| v.is_finite())
    }
}

/// Axis-aligned bounding box `[min, max]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BBox {
    pub min: Point,
    pub max: Point,
}

impl BBox {
    #[inline]
    pub fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// The narrower of the two extents.
    #[inline]
    pub fn min_extent(&self) -> f64 {
        self.width().min(self.height())
    }

    /// True if a disc of radius `buffer` cannot fit: `2 * buffer > min(width, height)`.
    #[inline]
    pub fn too_small_for(&self, buffer: f64) -> bool {
        2.0 * buffer > self.min_extent()
    }

    #[inline]
    pub fn center(&self) -> Point {
        (self.min + self.max) * 0.5
    }

    /// Smallest box containing both.
    #[inline]
    pub fn union(&self, other: &BBox) -> BBox {
        BBox::new(
            Point::new(self.min.x.min(other.min.x), self.min.y.min(other.min.y)),
            Point::new(self.max.x.max(other.max.x), self.max.y.max(other.max.y)),
        )
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.min.x.is_finite()
            && self.min.y.is_finite()
            && self.max.x.is_finite()
            && self.max.y.is_finite()
    }
}

/// Polygon reduced to its exterior ring; holes are not supported.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polygon {
    pub exterior: Vec<Point>,
}

impl Polygon {
    pub fn new(exterior: Vec<Point>) -> Self {
        Self { exterior }
    }

    /// Build from GeoJSON-style rings: the first ring is the exterior, the rest are dropped.
    pub fn from_rings(rings: Vec<Vec<Point>>) -> Self {
        Self::new(rings.into_iter().next().unwrap_or_default())
    }
}

/// Orientation of an ordered point triple.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Collinear,
    Clockwise,
    Counterclockwise,
}

/// Intersection of two infinite lines.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LineIntersection {
    Point(Point),
    /// Parallel and distinct.
    Parallel,
    /// Both lines are the same line.
    Coincident,
}

impl LineIntersection {
    #[inline]
    pub fn point(self) -> Option<Point> {
        if let LineIntersection::Point(p) = self {
            Some(p)
        } else {
            None
        }
    }
}
