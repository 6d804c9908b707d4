//! Label placement: single polygons and multi-polygons.
//!
//! Purpose
//! - `find_point_in_polygon`: fast reject, trivial accept, then a grid search.
//! - `find_point_in_multi_polygon`: rank the member rings by a compass
//!   attractor and place into the first ring that admits a point.
//!
//! Outcomes are `Result<Option<Point>, GeomError>`: `Ok(None)` is a legitimate
//! "no room", `Err` is malformed input.

use crate::geom2::{BBox, Point};
use crate::search::{SearchLine, UnknownName};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

mod multi;
mod polygon;

pub use multi::{find_point_in_multi_polygon, find_point_in_multi_polygon_cfg};
pub use polygon::{find_point_in_polygon, find_point_in_polygon_cfg};

/// Compass anchor on a shape's bounding box (`y` down: "top" is `min_y`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Attractor {
    Top,
    TopRight,
    Right,
    BottomRight,
    Bottom,
    BottomLeft,
    Left,
    TopLeft,
}

/// Axis that wins ranking ties for diagonal attractors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Axis {
    #[default]
    X,
    Y,
}

/// Bounding-box extreme used to rank rings; `Min*` ascending, `Max*` descending.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Extreme {
    MinX,
    MaxX,
    MinY,
    MaxY,
}

impl Extreme {
    fn cmp(self, a: &BBox, b: &BBox) -> Ordering {
        match self {
            Extreme::MinX => a.min.x.total_cmp(&b.min.x),
            Extreme::MaxX => b.max.x.total_cmp(&a.max.x),
            Extreme::MinY => a.min.y.total_cmp(&b.min.y),
            Extreme::MaxY => b.max.y.total_cmp(&a.max.y),
        }
    }
}

impl Attractor {
    pub const ALL: [Attractor; 8] = [
        Attractor::Top,
        Attractor::TopRight,
        Attractor::Right,
        Attractor::BottomRight,
        Attractor::Bottom,
        Attractor::BottomLeft,
        Attractor::Left,
        Attractor::TopLeft,
    ];

    /// Concrete start point on `bbox`: edge midpoint for cardinals, corner for diagonals.
    pub fn anchor(self, bbox: &BBox) -> Point {
        let c = bbox.center();
        let (min, max) = (bbox.min, bbox.max);
        match self {
            Attractor::Top => Point::new(c.x, min.y),
            Attractor::TopRight => Point::new(max.x, min.y),
            Attractor::Right => Point::new(max.x, c.y),
            Attractor::BottomRight => max,
            Attractor::Bottom => Point::new(c.x, max.y),
            Attractor::BottomLeft => Point::new(min.x, max.y),
            Attractor::Left => Point::new(min.x, c.y),
            Attractor::TopLeft => min,
        }
    }

    /// Line the search sweeps along when starting from `anchor`.
    pub fn search_line(self) -> SearchLine {
        match self {
            Attractor::Top | Attractor::Bottom => SearchLine::Vertical,
            Attractor::Left | Attractor::Right => SearchLine::Horizontal,
            Attractor::TopLeft | Attractor::BottomRight => SearchLine::MainDiagonal,
            Attractor::TopRight | Attractor::BottomLeft => SearchLine::AntiDiagonal,
        }
    }

    /// Primary then secondary extreme; cardinals repeat their single extreme.
    fn extremes(self, axis: Axis) -> (Extreme, Extreme) {
        let pair = |x: Extreme, y: Extreme| match axis {
            Axis::X => (x, y),
            Axis::Y => (y, x),
        };
        match self {
            Attractor::Top => (Extreme::MinY, Extreme::MinY),
            Attractor::TopRight => pair(Extreme::MaxX, Extreme::MinY),
            Attractor::Right => (Extreme::MaxX, Extreme::MaxX),
            Attractor::BottomRight => pair(Extreme::MaxX, Extreme::MaxY),
            Attractor::Bottom => (Extreme::MaxY, Extreme::MaxY),
            Attractor::BottomLeft => pair(Extreme::MinX, Extreme::MaxY),
            Attractor::Left => (Extreme::MinX, Extreme::MinX),
            Attractor::TopLeft => pair(Extreme::MinX, Extreme::MinY),
        }
    }

    /// Order two ring boxes by how well they match this attractor.
    pub fn rank(self, axis: Axis, a: &BBox, b: &BBox) -> Ordering {
        let (first, second) = self.extremes(axis);
        first.cmp(a, b).then_with(|| second.cmp(a, b))
    }

    fn name(self) -> &'static str {
        match self {
            Attractor::Top => "top",
            Attractor::TopRight => "top-right",
            Attractor::Right => "right",
            Attractor::BottomRight => "bottom-right",
            Attractor::Bottom => "bottom",
            Attractor::BottomLeft => "bottom-left",
            Attractor::Left => "left",
            Attractor::TopLeft => "top-left",
        }
    }
}

impl fmt::Display for Attractor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Attractor {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Attractor::ALL
            .into_iter()
            .find(|a| a.name() == s)
            .ok_or_else(|| UnknownName::new("attractor", s))
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Axis::X => "x",
            Axis::Y => "y",
        })
    }
}

impl FromStr for Axis {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "x" => Ok(Axis::X),
            "y" => Ok(Axis::Y),
            _ => Err(UnknownName::new("axis", s)),
        }
    }
}

#[cfg(test)]
mod tests;
