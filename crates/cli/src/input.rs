//! JSON geometry input.
//!
//! Accepts bare coordinates or any object with a `coordinates` field (a GeoJSON
//! geometry). Nesting depth decides the kind: ring, polygon, or multi-polygon.

use anyhow::{bail, Context, Result};
use pinpoint::geom2::{Point, Polygon};
use serde::Deserialize;
use std::path::Path;

type RawRing = Vec<[f64; 2]>;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Coordinates {
    Ring(RawRing),
    Polygon(Vec<RawRing>),
    MultiPolygon(Vec<Vec<RawRing>>),
}

// `Bare` goes first: serde also accepts a one-element array as `Wrapped`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Document {
    Bare(Coordinates),
    Wrapped { coordinates: Coordinates },
}

/// Parsed input geometry. Interior rings are dropped on parse.
#[derive(Clone, Debug, PartialEq)]
pub enum Geometry {
    Polygon(Polygon),
    MultiPolygon(Vec<Polygon>),
}

fn ring(raw: RawRing) -> Vec<Point> {
    raw.into_iter().map(|[x, y]| Point::new(x, y)).collect()
}

fn polygon(raw: Vec<RawRing>) -> Polygon {
    Polygon::from_rings(raw.into_iter().map(ring).collect())
}

impl Geometry {
    pub fn parse(text: &str) -> Result<Self> {
        let doc: Document = serde_json::from_str(text).context("parsing geometry JSON")?;
        let coords = match doc {
            Document::Bare(coordinates) | Document::Wrapped { coordinates } => coordinates,
        };
        let geom = match coords {
            Coordinates::Ring(r) => Geometry::Polygon(Polygon::new(ring(r))),
            Coordinates::Polygon(rings) if rings.is_empty() => bail!("polygon has no rings"),
            Coordinates::Polygon(rings) => Geometry::Polygon(polygon(rings)),
            Coordinates::MultiPolygon(polys) => {
                Geometry::MultiPolygon(polys.into_iter().map(polygon).collect())
            }
        };
        Ok(geom)
    }

    pub fn read(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("in {}", path.display()))
    }

    /// Member polygons, a single polygon counting as a one-element list.
    pub fn polygons(&self) -> &[Polygon] {
        match self {
            Geometry::Polygon(p) => std::slice::from_ref(p),
            Geometry::MultiPolygon(ps) => ps,
        }
    }
}

/// Parse `"x,y"` into a point.
pub fn parse_xy(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `x,y`, got {s:?}"))?;
    let num = |v: &str| {
        v.trim()
            .parse::<f64>()
            .map_err(|e| format!("{v:?}: {e}"))
            .and_then(|f| if f.is_finite() { Ok(f) } else { Err(format!("{v:?} is not finite")) })
    };
    Ok(Point::new(num(x)?, num(y)?))
}
