//! Directional grid search for a buffered interior point.
//!
//! Purpose
//! - Scan a ring's integer bounding box band by band along one of four search
//!   lines and return the point of the first successful band that lies inside
//!   the ring, at least `buffer` from its boundary, and closest to the attractor.
//!
//! Model
//! - A band is the set of grid points sharing one *level*: `y` (vertical),
//!   `x` (horizontal), `x + y` (main diagonal) or `x - y` (anti-diagonal).
//! - `Plus` walks levels upwards from the attractor's level, `Minus` downwards,
//!   `Both` runs the two walks and keeps the closer result.
//! - The first band with a qualifying point ends the walk: this is a bounded
//!   heuristic, not a global optimum.
//!
//! References
//! - Screen-space label placement; "top" is `min_y`.

use std::fmt;
use std::str::FromStr;

mod sweep;

pub use sweep::{search, search_cfg, search_direction};

/// Axis or diagonal along which the search sweeps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SearchLine {
    Vertical,
    Horizontal,
    /// `[min_x, min_y] -> [max_x, max_y]`.
    MainDiagonal,
    /// `[min_x, max_y] -> [max_x, min_y]`.
    AntiDiagonal,
}

impl SearchLine {
    pub const ALL: [SearchLine; 4] = [
        SearchLine::Vertical,
        SearchLine::Horizontal,
        SearchLine::MainDiagonal,
        SearchLine::AntiDiagonal,
    ];

    /// Unit grid step of the `Plus` direction.
    #[inline]
    pub fn plus_step(self) -> (i64, i64) {
        match self {
            SearchLine::Vertical => (0, 1),
            SearchLine::Horizontal => (1, 0),
            SearchLine::MainDiagonal => (1, 1),
            SearchLine::AntiDiagonal => (1, -1),
        }
    }

    #[inline]
    pub fn is_diagonal(self) -> bool {
        matches!(self, SearchLine::MainDiagonal | SearchLine::AntiDiagonal)
    }

    fn name(self) -> &'static str {
        match self {
            SearchLine::Vertical => "vertical",
            SearchLine::Horizontal => "horizontal",
            SearchLine::MainDiagonal => "main-diagonal",
            SearchLine::AntiDiagonal => "anti-diagonal",
        }
    }
}

impl fmt::Display for SearchLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for SearchLine {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SearchLine::ALL
            .into_iter()
            .find(|l| l.name() == s)
            .ok_or_else(|| UnknownName::new("search line", s))
    }
}

/// Which way along the search line the bands are walked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchDirection {
    /// Increasing level.
    Plus,
    /// Decreasing level.
    Minus,
    Both,
}

/// A name that does not match any variant of a parsed enum.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownName {
    kind: &'static str,
    got: String,
}

impl UnknownName {
    pub(crate) fn new(kind: &'static str, got: &str) -> Self {
        Self {
            kind,
            got: got.to_owned(),
        }
    }
}

impl fmt::Display for UnknownName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {}: {:?}", self.kind, self.got)
    }
}

impl std::error::Error for UnknownName {}
