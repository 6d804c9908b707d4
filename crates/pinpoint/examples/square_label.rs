//! Place labels in a square and in a two-part multi-polygon.
//!
//! Usage:
//!   cargo run -p pinpoint --example square_label
//!   cargo run -p pinpoint --example square_label -- 2.5
//!
//! The optional argument is the buffer (default 1).

use pinpoint::prelude::*;

fn main() {
    let buffer: f64 = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(1.0);

    let square = vec![
        Point::new(0.0, 0.0),
        Point::new(10.0, 0.0),
        Point::new(10.0, 10.0),
        Point::new(0.0, 10.0),
    ];
    for line in SearchLine::ALL {
        match find_point_in_polygon(&square, Point::new(0.0, 0.0), buffer, line) {
            Ok(Some(p)) => println!("{line:>13}: ({}, {})", p.x, p.y),
            Ok(None) => println!("{line:>13}: no room"),
            Err(err) => println!("{line:>13}: error: {err}"),
        }
    }

    let multi = vec![
        Polygon::new(square.clone()),
        Polygon::new(square.iter().map(|p| p + Point::new(20.0, 0.0)).collect()),
    ];
    for attractor in Attractor::ALL {
        let res = find_point_in_multi_polygon(&multi, None, attractor, buffer, Axis::X);
        println!("{attractor:>12}: {res:?}");
    }
}
