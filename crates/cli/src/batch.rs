//! CSV batch placement: one attractor per row, one ring for the whole batch.

use anyhow::{bail, Context, Result};
use pinpoint::geom2::{GeomCfg, Point};
use pinpoint::place::find_point_in_polygon_cfg;
use pinpoint::search::SearchLine;
use polars::prelude::*;
use std::fs::File;
use std::path::Path;

/// Attractor columns `x`, `y` of `path`, cast to `f64`.
pub fn read_points(path: &Path) -> Result<Vec<Point>> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", path.display()))?
        .select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("reading x,y columns of {}", path.display()))?;
    tracing::info!(rows = df.height(), "points_csv_shape");

    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    let mut points = Vec::with_capacity(df.height());
    for (row, (x, y)) in xs.into_iter().zip(ys.into_iter()).enumerate() {
        match (x, y) {
            (Some(x), Some(y)) if x.is_finite() && y.is_finite() => points.push(Point::new(x, y)),
            _ => bail!("row {row}: missing or non-finite coordinate"),
        }
    }
    Ok(points)
}

/// Place a point for every attractor; unplaced rows get `found = false` and null `px`, `py`.
pub fn place_all(
    ring: &[Point],
    attractors: &[Point],
    buffer: f64,
    line: SearchLine,
    cfg: &GeomCfg,
) -> Result<DataFrame> {
    let n = attractors.len();
    let (mut xs, mut ys) = (Vec::with_capacity(n), Vec::with_capacity(n));
    let mut found = Vec::with_capacity(n);
    let (mut px, mut py) = (Vec::with_capacity(n), Vec::with_capacity(n));
    for a in attractors {
        let p = find_point_in_polygon_cfg(ring, *a, buffer, line, cfg)?;
        xs.push(a.x);
        ys.push(a.y);
        found.push(p.is_some());
        px.push(p.map(|p| p.x));
        py.push(p.map(|p| p.y));
    }
    let df = df!(
        "x" => xs,
        "y" => ys,
        "found" => found,
        "px" => px,
        "py" => py,
    )?;
    Ok(df)
}

pub fn write_csv(df: &mut DataFrame, out: &Path) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let mut file = File::create(out).with_context(|| format!("creating {}", out.display()))?;
    CsvWriter::new(&mut file).include_header(true).finish(df)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn square() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ]
    }

    #[test]
    fn integer_columns_are_read_as_floats() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("points.csv");
        fs::write(&path, "id,x,y\n1,5,5\n2,0.5,-3\n").unwrap();
        let pts = read_points(&path).unwrap();
        assert_eq!(pts, vec![Point::new(5.0, 5.0), Point::new(0.5, -3.0)]);
    }

    #[test]
    fn missing_coordinate_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("points.csv");
        fs::write(&path, "x,y\n1,\n").unwrap();
        assert!(read_points(&path).is_err());
    }

    #[test]
    fn batch_places_and_marks_misses() {
        let attractors = [Point::new(5.0, 5.0), Point::new(0.0, 0.0)];
        let cfg = GeomCfg::default();
        let df = place_all(&square(), &attractors, 1.0, SearchLine::MainDiagonal, &cfg).unwrap();
        assert_eq!(df.shape(), (2, 5));
        let found = df.column("found").unwrap().bool().unwrap();
        let found: Vec<Option<bool>> = found.into_iter().collect();
        assert_eq!(found, vec![Some(true), Some(true)]);
        let px: Vec<Option<f64>> = df.column("px").unwrap().f64().unwrap().into_iter().collect();
        assert_eq!(px, vec![Some(5.0), Some(1.0)]);

        let none = place_all(&square(), &attractors, 6.0, SearchLine::Vertical, &cfg).unwrap();
        assert_eq!(none.column("px").unwrap().null_count(), 2);
    }

    #[test]
    fn csv_round_trip_through_disk() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("nested/placed.csv");
        let attractors = [Point::new(5.0, 5.0)];
        let cfg = GeomCfg::default();
        let mut df = place_all(&square(), &attractors, 1.0, SearchLine::Vertical, &cfg).unwrap();
        write_csv(&mut df, &out).unwrap();
        let text = fs::read_to_string(&out).unwrap();
        assert!(text.starts_with("x,y,found,px,py"));
        assert_eq!(read_points(&out).unwrap(), vec![Point::new(5.0, 5.0)]);
    }
}
