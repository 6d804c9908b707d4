use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use pinpoint::geom2::rand::{draw_ring_radial, RadialCfg, ReplayToken, VertexCount};
use pinpoint::geom2::{polyline_bbox, GeomCfg, Point, Segment};
use pinpoint::place::{find_point_in_multi_polygon_cfg, find_point_in_polygon_cfg, Attractor, Axis};
use pinpoint::search::SearchLine;
use pinpoint::vertical::vertical_distance_between_segment_and_multi_polygon_cfg;
use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod batch;
mod input;
mod provenance;

use input::{parse_xy, Geometry};
use provenance::Payload;

#[derive(Parser)]
#[command(name = "pinpoint")]
#[command(about = "Label placement inside polygons")]
struct Cmd {
    /// Cap on grid steps per bounding-box axis
    #[arg(long, global = true, default_value_t = 1000)]
    max_steps: i64,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Place one point in a polygon or multi-polygon (JSON)
    Place {
        #[arg(long)]
        input: PathBuf,
        #[arg(long, default_value_t = 0.0)]
        buffer: f64,
        /// Explicit attractor `x,y`; preferred coordinates for multi-polygons
        #[arg(long, value_parser = parse_xy)]
        at: Option<Point>,
        #[arg(long, default_value_t = Attractor::Top)]
        attractor: Attractor,
        /// Defaults to the attractor's own line; ignored for multi-polygons
        #[arg(long)]
        line: Option<SearchLine>,
        /// Ranking tie-break axis for multi-polygons
        #[arg(long, default_value_t = Axis::X)]
        axis: Axis,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Place one point per row of a CSV with `x`, `y` columns
    Batch {
        #[arg(long)]
        ring: PathBuf,
        #[arg(long)]
        points: PathBuf,
        #[arg(long, default_value_t = 0.0)]
        buffer: f64,
        #[arg(long, default_value_t = SearchLine::Vertical)]
        line: SearchLine,
        #[arg(long)]
        out: PathBuf,
    },
    /// Write a reproducible random ring as JSON
    Sample {
        #[arg(long)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long)]
        vertices: Option<usize>,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Vertical distance from a segment to a polygon or multi-polygon
    Vdist {
        #[arg(long)]
        input: PathBuf,
        #[arg(long, value_parser = parse_xy)]
        from: Point,
        #[arg(long, value_parser = parse_xy)]
        to: Point,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    if cmd.max_steps < 1 {
        bail!("--max-steps must be positive, got {}", cmd.max_steps);
    }
    let cfg = GeomCfg {
        max_steps: cmd.max_steps,
        ..GeomCfg::default()
    };
    match cmd.action {
        Action::Place {
            input,
            buffer,
            at,
            attractor,
            line,
            axis,
            out,
        } => place(&input, buffer, at, attractor, line, axis, out.as_deref(), &cfg),
        Action::Batch {
            ring,
            points,
            buffer,
            line,
            out,
        } => batch(&ring, &points, buffer, line, &out, &cfg),
        Action::Sample {
            seed,
            index,
            vertices,
            out,
        } => sample(seed, index, vertices, out.as_deref()),
        Action::Vdist { input, from, to } => vdist(&input, from, to, &cfg),
        Action::Report => report(),
    }
}

fn point_json(p: Option<Point>) -> Value {
    match p {
        Some(p) => json!([p.x, p.y]),
        None => Value::Null,
    }
}

fn write_json(out: &Path, value: &Value) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(out, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", out.display()))
}

#[allow(clippy::too_many_arguments)]
fn place(
    input: &Path,
    buffer: f64,
    at: Option<Point>,
    attractor: Attractor,
    line: Option<SearchLine>,
    axis: Axis,
    out: Option<&Path>,
    cfg: &GeomCfg,
) -> Result<()> {
    tracing::info!(input = %input.display(), buffer, %attractor, %axis, "place");
    let found = match Geometry::read(input)? {
        Geometry::Polygon(poly) => {
            let ring = &poly.exterior;
            let start = match at {
                Some(p) => p,
                None => attractor.anchor(&polyline_bbox(ring)?),
            };
            let line = line.unwrap_or_else(|| attractor.search_line());
            find_point_in_polygon_cfg(ring, start, buffer, line, cfg)?
        }
        Geometry::MultiPolygon(polys) => {
            find_point_in_multi_polygon_cfg(&polys, at, attractor, buffer, axis, cfg)?
        }
    };
    tracing::info!(found = found.is_some(), "placed");

    let result = json!({ "point": point_json(found) });
    println!("{result}");
    if let Some(out) = out {
        write_json(out, &result)?;
        let params = json!({
            "input": input.to_string_lossy(),
            "buffer": buffer,
            "at": at.map(|p| [p.x, p.y]),
            "attractor": attractor.to_string(),
            "line": line.map(|l| l.to_string()),
            "axis": axis.to_string(),
            "max_steps": cfg.max_steps,
        });
        provenance::write_sidecar(out, Payload::new("place", params))?;
    }
    Ok(())
}

fn batch(
    ring_path: &Path,
    points: &Path,
    buffer: f64,
    line: SearchLine,
    out: &Path,
    cfg: &GeomCfg,
) -> Result<()> {
    tracing::info!(ring = %ring_path.display(), points = %points.display(), buffer, %line, "batch");
    let poly = match Geometry::read(ring_path)? {
        Geometry::Polygon(poly) => poly,
        Geometry::MultiPolygon(_) => bail!("batch expects a single ring, got a multi-polygon"),
    };
    let attractors = batch::read_points(points)?;
    let mut df = batch::place_all(&poly.exterior, &attractors, buffer, line, cfg)?;
    batch::write_csv(&mut df, out)?;
    tracing::info!(rows = df.height(), out = %out.display(), "batch_written");

    let params = json!({
        "ring": ring_path.to_string_lossy(),
        "points": points.to_string_lossy(),
        "buffer": buffer,
        "line": line.to_string(),
        "max_steps": cfg.max_steps,
    });
    provenance::write_sidecar(out, Payload::new("batch", params))?;
    Ok(())
}

fn sample(seed: u64, index: u64, vertices: Option<usize>, out: Option<&Path>) -> Result<()> {
    tracing::info!(seed, index, vertices = ?vertices, "sample");
    let mut radial = RadialCfg {
        snap_to_grid: true,
        ..RadialCfg::default()
    };
    if let Some(n) = vertices {
        radial.vertex_count = VertexCount::Fixed(n);
    }
    let ring = draw_ring_radial(radial, ReplayToken { seed, index });
    let coords: Vec<[f64; 2]> = ring.iter().map(|p| [p.x, p.y]).collect();
    let doc = json!(coords);
    match out {
        Some(out) => {
            write_json(out, &doc)?;
            let params = json!({ "seed": seed, "index": index, "vertices": ring.len() });
            provenance::write_sidecar(out, Payload::new("sample", params))?;
        }
        None => println!("{doc}"),
    }
    Ok(())
}

fn vdist(input: &Path, from: Point, to: Point, cfg: &GeomCfg) -> Result<()> {
    tracing::info!(input = %input.display(), "vdist");
    let geometry = Geometry::read(input)?;
    let d = vertical_distance_between_segment_and_multi_polygon_cfg(
        Segment::new(from, to),
        geometry.polygons(),
        cfg,
    )?;
    println!("{}", json!({ "distance": d }));
    Ok(())
}

fn report() -> Result<()> {
    let doc = provenance::document(&Payload::new("report", json!({})), &[]);
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}
