use super::{SearchDirection, SearchLine};
use crate::geom2::{
    closest_point_on_ring, distance_point_ring, point_in_polygon_eps, polyline_bbox,
    squared_distance, BBox, GeomCfg, GeomError, Point,
};
use std::f64::consts::FRAC_1_SQRT_2;

type Cell = (i64, i64);

/// Largest coordinate magnitude on the grid (2^52). Sums and differences of
/// two grid coordinates, plus a nudge, stay far inside `i64`.
const GRID_LIMIT: f64 = 4_503_599_627_370_496.0;

/// Integer lattice over a bounding box (`floor` for min, `ceil` for max).
#[derive(Clone, Copy, Debug)]
struct Grid {
    min: Cell,
    max: Cell,
    step: Cell,
}

impl Grid {
    fn new(bbox: &BBox, max_steps: i64) -> Result<Self, GeomError> {
        let (lo, hi) = (bbox.min.map(f64::floor), bbox.max.map(f64::ceil));
        let in_range = |v: f64| (-GRID_LIMIT..=GRID_LIMIT).contains(&v);
        if ![lo.x, lo.y, hi.x, hi.y].into_iter().all(in_range) {
            return Err(GeomError::OutOfGridRange);
        }
        let min = (lo.x as i64, lo.y as i64);
        let max = (hi.x as i64, hi.y as i64);
        let cap = max_steps.max(1);
        let step = (
            ((max.0 - min.0) / cap).max(1),
            ((max.1 - min.1) / cap).max(1),
        );
        Ok(Self { min, max, step })
    }
}

/// Nearest grid cell, with far-away points pulled in to `GRID_LIMIT`.
#[inline]
fn cell_of(p: Point) -> Cell {
    let snap = |v: f64| v.round().clamp(-GRID_LIMIT, GRID_LIMIT) as i64;
    (snap(p.x), snap(p.y))
}

#[inline]
fn point_of(c: Cell) -> Point {
    Point::new(c.0 as f64, c.1 as f64)
}

impl SearchLine {
    #[inline]
    fn level(self, c: Cell) -> i64 {
        match self {
            SearchLine::Vertical => c.1,
            SearchLine::Horizontal => c.0,
            SearchLine::MainDiagonal => c.0 + c.1,
            SearchLine::AntiDiagonal => c.0 - c.1,
        }
    }

    /// Inclusive range of levels that touch the grid.
    fn level_range(self, g: &Grid) -> (i64, i64) {
        match self {
            SearchLine::Vertical => (g.min.1, g.max.1),
            SearchLine::Horizontal => (g.min.0, g.max.0),
            SearchLine::MainDiagonal => (g.min.0 + g.min.1, g.max.0 + g.max.1),
            SearchLine::AntiDiagonal => (g.min.0 - g.max.1, g.max.0 - g.min.1),
        }
    }

    /// `(between bands, within a band)`. Diagonals share one step on both axes.
    fn steps(self, g: &Grid) -> (i64, i64) {
        match self {
            SearchLine::Vertical => (g.step.1, g.step.0),
            SearchLine::Horizontal => (g.step.0, g.step.1),
            SearchLine::MainDiagonal | SearchLine::AntiDiagonal => {
                let s = g.step.0.min(g.step.1);
                (s, s)
            }
        }
    }

    /// Inclusive range of the free coordinate `t` along band `level`.
    fn band_span(self, g: &Grid, level: i64) -> (i64, i64) {
        match self {
            SearchLine::Vertical => (g.min.0, g.max.0),
            SearchLine::Horizontal => (g.min.1, g.max.1),
            SearchLine::MainDiagonal => {
                (g.min.0.max(level - g.max.1), g.max.0.min(level - g.min.1))
            }
            SearchLine::AntiDiagonal => {
                (g.min.0.max(level + g.min.1), g.max.0.min(level + g.max.1))
            }
        }
    }

    #[inline]
    fn band_cell(self, level: i64, t: i64) -> Cell {
        match self {
            SearchLine::Vertical => (t, level),
            SearchLine::Horizontal => (level, t),
            SearchLine::MainDiagonal => (t, level - t),
            SearchLine::AntiDiagonal => (t, t - level),
        }
    }
}

/// Walk direction for a start point relative to a bounding box.
///
/// `Plus` when the start is within `buffer` of the box's low end on every axis
/// the line moves along, `Minus` for the high end, `Both` otherwise.
pub fn search_direction(
    line: SearchLine,
    start: Point,
    bbox: &BBox,
    buffer: f64,
) -> Result<SearchDirection, GeomError> {
    Ok(direction(line, cell_of(start), &Grid::new(bbox, 1)?, buffer))
}

fn direction(line: SearchLine, s: Cell, g: &Grid, buffer: f64) -> SearchDirection {
    let (dx, dy) = line.plus_step();
    let near_start_of = |sign: i64| {
        [(dx, s.0, g.min.0, g.max.0), (dy, s.1, g.min.1, g.max.1)]
            .into_iter()
            .all(|(d, v, lo, hi)| match (d * sign).signum() {
                1 => v as f64 <= lo as f64 + buffer,
                -1 => v as f64 >= hi as f64 - buffer,
                _ => true,
            })
    };
    // Axis lines test the high end first, diagonals the low end; they only
    // disagree when the box is exactly `2 * buffer` across.
    if line.is_diagonal() {
        if near_start_of(1) {
            SearchDirection::Plus
        } else if near_start_of(-1) {
            SearchDirection::Minus
        } else {
            SearchDirection::Both
        }
    } else if near_start_of(-1) {
        SearchDirection::Minus
    } else if near_start_of(1) {
        SearchDirection::Plus
    } else {
        SearchDirection::Both
    }
}

/// Move a start cell lying outside the ring along the diagonal towards it by
/// the 45° share of its boundary distance.
///
/// With `Both`, each axis moves towards the nearest boundary point; the walk is
/// narrowed to one direction when that point is still strictly ahead on both axes.
fn nudge_into_ring(
    line: SearchLine,
    start: Cell,
    dir: SearchDirection,
    ring: &[Point],
    eps: f64,
) -> Result<(Cell, SearchDirection), GeomError> {
    let p = point_of(start);
    if point_in_polygon_eps(p, ring, eps) {
        return Ok((start, dir));
    }
    let delta = (distance_point_ring(p, ring)? * FRAC_1_SQRT_2).floor() as i64;
    let (dx, dy) = line.plus_step();
    match dir {
        SearchDirection::Plus => Ok(((start.0 + delta * dx, start.1 + delta * dy), dir)),
        SearchDirection::Minus => Ok(((start.0 - delta * dx, start.1 - delta * dy), dir)),
        SearchDirection::Both => {
            let c = closest_point_on_ring(p, ring)?;
            let toward = |from: i64, to: f64| if to > from as f64 { 1 } else { -1 };
            let moved = (
                start.0 + delta * toward(start.0, c.x),
                start.1 + delta * toward(start.1, c.y),
            );
            let ahead = |from: i64, to: f64| {
                let d = to - from as f64;
                if d > 0.0 {
                    1
                } else if d < 0.0 {
                    -1
                } else {
                    0
                }
            };
            let rest = (ahead(moved.0, c.x), ahead(moved.1, c.y));
            let dir = if rest == (dx, dy) {
                SearchDirection::Plus
            } else if rest == (-dx, -dy) {
                SearchDirection::Minus
            } else {
                SearchDirection::Both
            };
            Ok((moved, dir))
        }
    }
}

struct Sweep<'a> {
    ring: &'a [Point],
    attractor: Point,
    buffer: f64,
    line: SearchLine,
    grid: Grid,
    eps: f64,
    start_level: i64,
}

impl Sweep<'_> {
    /// Walk bands from the start level; `sign` is `1` for `Plus`, `-1` for `Minus`.
    fn walk(&self, sign: i64) -> Result<Option<Point>, GeomError> {
        let (lo, hi) = self.line.level_range(&self.grid);
        let (level_step, sample_step) = self.line.steps(&self.grid);
        let mut level = self.start_level;
        while (lo..=hi).contains(&level) {
            if let Some(p) = self.best_in_band(level, sample_step)? {
                return Ok(Some(p));
            }
            level += sign * level_step;
        }
        Ok(None)
    }

    fn best_in_band(&self, level: i64, step: i64) -> Result<Option<Point>, GeomError> {
        let (t_lo, t_hi) = self.line.band_span(&self.grid, level);
        let mut best: Option<(f64, Point)> = None;
        let mut t = t_lo;
        while t <= t_hi {
            let p = point_of(self.line.band_cell(level, t));
            if self.qualifies(p)? {
                let d2 = squared_distance(p, self.attractor);
                if best.map_or(true, |(bd, _)| d2 < bd) {
                    best = Some((d2, p));
                }
            }
            t += step;
        }
        Ok(best.map(|(_, p)| p))
    }

    #[inline]
    fn qualifies(&self, p: Point) -> Result<bool, GeomError> {
        Ok(point_in_polygon_eps(p, self.ring, self.eps)
            && distance_point_ring(p, self.ring)? >= self.buffer)
    }
}

/// Grid search with default configuration.
#[inline]
pub fn search(
    ring: &[Point],
    attractor: Point,
    buffer: f64,
    line: SearchLine,
) -> Result<Option<Point>, GeomError> {
    search_cfg(ring, attractor, buffer, line, &GeomCfg::default())
}

/// Grid search along `line` for a point inside `ring` with boundary distance
/// `>= buffer`, closest (squared distance, strict `<`) to `attractor`.
///
/// Returns `Ok(None)` when no band yields a qualifying point. Candidates are
/// ranked against the caller's `attractor`, not the rounded or nudged start.
pub fn search_cfg(
    ring: &[Point],
    attractor: Point,
    buffer: f64,
    line: SearchLine,
    cfg: &GeomCfg,
) -> Result<Option<Point>, GeomError> {
    let grid = Grid::new(&polyline_bbox(ring)?, cfg.max_steps)?;
    let mut start = cell_of(attractor);
    let mut dir = direction(line, start, &grid, buffer);
    if line.is_diagonal() {
        (start, dir) = nudge_into_ring(line, start, dir, ring, cfg.vertex_eps)?;
    }

    let (lo, hi) = line.level_range(&grid);
    let sweep = Sweep {
        ring,
        attractor,
        buffer,
        line,
        grid,
        eps: cfg.vertex_eps,
        start_level: line.level(start).clamp(lo, hi),
    };

    let found = match dir {
        SearchDirection::Plus => sweep.walk(1)?,
        SearchDirection::Minus => sweep.walk(-1)?,
        SearchDirection::Both => match (sweep.walk(1)?, sweep.walk(-1)?) {
            (Some(p1), Some(p2)) => {
                if squared_distance(p1, attractor) < squared_distance(p2, attractor) {
                    Some(p1)
                } else {
                    Some(p2)
                }
            }
            (p1, p2) => p1.or(p2),
        },
    };
    tracing::debug!(
        %line,
        ?dir,
        start_level = sweep.start_level,
        found = found.is_some(),
        "grid search"
    );
    Ok(found)
}

#[cfg(test)]
pub(super) fn nudge_for_test(
    line: SearchLine,
    attractor: Point,
    ring: &[Point],
    buffer: f64,
) -> Result<(Point, SearchDirection), GeomError> {
    let grid = Grid::new(&polyline_bbox(ring)?, GeomCfg::default().max_steps)?;
    let start = cell_of(attractor);
    let dir = direction(line, start, &grid, buffer);
    let (c, d) = nudge_into_ring(line, start, dir, ring, GeomCfg::default().vertex_eps)?;
    Ok((point_of(c), d))
}
