use super::*;
use crate::geom2::{GeomError, Polygon};
use nalgebra::vector;

fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> Vec<Point> {
    vec![vector![x0, y0], vector![x1, y0], vector![x1, y1], vector![x0, y1]]
}

fn two_squares() -> Vec<Polygon> {
    vec![
        Polygon::new(rect(0.0, 0.0, 10.0, 10.0)),
        Polygon::new(rect(20.0, 0.0, 30.0, 10.0)),
    ]
}

#[test]
fn attractor_inside_with_room_is_returned_unchanged() {
    let sq = rect(0.0, 0.0, 10.0, 10.0);
    let p = find_point_in_polygon(&sq, vector![5.0, 5.0], 1.0, SearchLine::Vertical).unwrap();
    assert_eq!(p, Some(vector![5.0, 5.0]));
    // Off-grid attractors survive the trivial accept as-is.
    let p = find_point_in_polygon(&sq, vector![5.4, 5.4], 1.0, SearchLine::Horizontal).unwrap();
    assert_eq!(p, Some(vector![5.4, 5.4]));
}

#[test]
fn attractor_too_close_to_boundary_falls_back_to_search() {
    let sq = rect(0.0, 0.0, 10.0, 10.0);
    let p = find_point_in_polygon(&sq, vector![0.5, 5.4], 1.0, SearchLine::Vertical).unwrap();
    assert_eq!(p, Some(vector![1.0, 5.0]));
}

#[test]
fn corner_attractor_on_main_diagonal() {
    let sq = rect(0.0, 0.0, 10.0, 10.0);
    let p = find_point_in_polygon(&sq, vector![0.0, 0.0], 1.0, SearchLine::MainDiagonal)
        .unwrap()
        .unwrap();
    assert!((1.0..=9.0).contains(&p.x) && (1.0..=9.0).contains(&p.y));
    assert_eq!(p, vector![1.0, 1.0]);
}

#[test]
fn degenerate_ring_is_malformed_input() {
    let two = vec![vector![0.0, 0.0], vector![10.0, 0.0]];
    let r = find_point_in_polygon(&two, vector![5.0, 0.0], 1.0, SearchLine::Vertical);
    assert_eq!(r, Err(GeomError::TooFewVertices { needed: 3, got: 2 }));
    let nan = vec![vector![0.0, 0.0], vector![f64::NAN, 0.0], vector![0.0, 5.0]];
    let r = find_point_in_polygon(&nan, vector![1.0, 1.0], 1.0, SearchLine::Vertical);
    assert_eq!(r, Err(GeomError::NonFiniteBounds));
}

#[test]
fn fast_reject_is_strict() {
    let sq = rect(0.0, 0.0, 10.0, 10.0);
    for line in SearchLine::ALL {
        let p = find_point_in_polygon(&sq, vector![5.0, 5.0], 5.01, line).unwrap();
        assert_eq!(p, None);
    }
    // 2 * 5 == 10 is not rejected; the centre is the only qualifying grid point.
    let p = find_point_in_polygon(&sq, vector![5.0, 5.0], 5.0, SearchLine::Vertical).unwrap();
    assert_eq!(p, Some(vector![5.0, 5.0]));
}

#[test]
fn multi_returns_preferred_coordinates_when_they_fit() {
    let multi = two_squares();
    for attractor in Attractor::ALL {
        for axis in [Axis::X, Axis::Y] {
            let preferred = Some(vector![25.0, 5.0]);
            let p = find_point_in_multi_polygon(&multi, preferred, attractor, 1.0, axis).unwrap();
            assert_eq!(p, Some(vector![25.0, 5.0]));
        }
    }
}

#[test]
fn multi_ranks_rings_by_attractor() {
    let multi = two_squares();
    let right = find_point_in_multi_polygon(&multi, None, Attractor::Right, 1.0, Axis::X).unwrap();
    assert_eq!(right, Some(vector![29.0, 5.0]));
    let left = find_point_in_multi_polygon(&multi, None, Attractor::Left, 1.0, Axis::X).unwrap();
    assert_eq!(left, Some(vector![1.0, 5.0]));
}

#[test]
fn ring_containing_preferred_coordinates_goes_first() {
    let multi = two_squares();
    // Too close to the edge to accept, but it pulls the second ring ahead of `Left`.
    let preferred = Some(vector![20.5, 5.0]);
    let p =
        find_point_in_multi_polygon(&multi, preferred, Attractor::Left, 1.0, Axis::X).unwrap();
    assert_eq!(p, Some(vector![21.0, 5.0]));
}

#[test]
fn multi_skips_small_and_malformed_rings() {
    let multi = vec![
        Polygon::new(vec![vector![100.0, 100.0]]),
        Polygon::new(rect(40.0, 0.0, 41.0, 1.0)),
        Polygon::new(rect(0.0, 0.0, 10.0, 10.0)),
    ];
    let p = find_point_in_multi_polygon(&multi, None, Attractor::Right, 1.0, Axis::X).unwrap();
    assert_eq!(p, Some(vector![9.0, 5.0]));
}

#[test]
fn multi_fast_reject_and_empty_input() {
    let multi = two_squares();
    let p = find_point_in_multi_polygon(&multi, None, Attractor::Top, 6.0, Axis::X).unwrap();
    assert_eq!(p, None);
    assert_eq!(
        find_point_in_multi_polygon(&[], None, Attractor::Top, 1.0, Axis::X),
        Err(GeomError::NonFiniteBounds)
    );
}

#[test]
fn anchors_and_lines() {
    let b = BBox::new(vector![0.0, 0.0], vector![10.0, 4.0]);
    assert_eq!(Attractor::Top.anchor(&b), vector![5.0, 0.0]);
    assert_eq!(Attractor::BottomLeft.anchor(&b), vector![0.0, 4.0]);
    assert_eq!(Attractor::Right.anchor(&b), vector![10.0, 2.0]);
    assert_eq!(Attractor::TopLeft.anchor(&b), vector![0.0, 0.0]);
    assert_eq!(Attractor::TopRight.search_line(), SearchLine::AntiDiagonal);
    assert_eq!(Attractor::BottomRight.search_line(), SearchLine::MainDiagonal);
    assert_eq!(Attractor::Bottom.search_line(), SearchLine::Vertical);
    assert_eq!(Attractor::Left.search_line(), SearchLine::Horizontal);
}

#[test]
fn diagonal_rank_follows_preferred_axis() {
    let a = BBox::new(vector![0.0, 0.0], vector![10.0, 10.0]);
    let b = BBox::new(vector![5.0, -5.0], vector![8.0, 3.0]);
    assert_eq!(Attractor::TopRight.rank(Axis::X, &a, &b), Ordering::Less);
    assert_eq!(Attractor::TopRight.rank(Axis::Y, &a, &b), Ordering::Greater);
    // Equal primary extreme falls through to the secondary one.
    let c = BBox::new(vector![0.0, -5.0], vector![4.0, 1.0]);
    assert_eq!(Attractor::TopLeft.rank(Axis::X, &a, &c), Ordering::Greater);
    assert_eq!(Attractor::Left.rank(Axis::X, &a, &c), Ordering::Equal);
}

#[test]
fn names_round_trip() {
    for a in Attractor::ALL {
        assert_eq!(a.to_string().parse::<Attractor>(), Ok(a));
    }
    assert_eq!("y".parse::<Axis>(), Ok(Axis::Y));
    assert!("z".parse::<Axis>().is_err());
    assert!("north".parse::<Attractor>().is_err());
}

#[test]
fn rings_beyond_the_grid_range() {
    let huge = rect(0.0, 0.0, 6e18, 6e18);
    for line in SearchLine::ALL {
        assert_eq!(
            find_point_in_polygon(&huge, vector![-1.0, -1.0], 1.0, line),
            Err(GeomError::OutOfGridRange)
        );
    }
    // Trivial accept never touches the grid.
    let inside = vector![3e18, 3e18];
    assert_eq!(
        find_point_in_polygon(&huge, inside, 1.0, SearchLine::Vertical),
        Ok(Some(inside))
    );

    // In a multi-polygon the huge ring ranks first for `Right` and is skipped.
    let multi = vec![Polygon::new(huge), Polygon::new(rect(0.0, 0.0, 10.0, 10.0))];
    let p = find_point_in_multi_polygon(&multi, None, Attractor::Right, 1.0, Axis::X).unwrap();
    assert_eq!(p, Some(vector![9.0, 5.0]));
}
