//! Calculator behavior tests for gridcanvas
//!
//! Boundary invariants, gap arithmetic, update/recalculation semantics,
//! and the error taxonomy for out-of-range and out-of-order queries.
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]

use gridcanvas::{Axis, ErrorKind, GridCalculator, GridError};
use test_case::test_case;

fn all_width_points(grid: &GridCalculator) -> Vec<u32> {
    let (width, _) = grid.size();
    (0..=width).map(|p| grid.left_point(p).unwrap()).collect()
}

fn all_height_points(grid: &GridCalculator) -> Vec<u32> {
    let (_, height) = grid.size();
    (0..=height).map(|p| grid.top_point(p).unwrap()).collect()
}

#[test_case(0, 0 ; "top edge")]
#[test_case(1, 20 ; "first line")]
#[test_case(2, 40 ; "second line")]
#[test_case(3, 60 ; "third line")]
#[test_case(4, 80 ; "fourth line")]
#[test_case(5, 100 ; "bottom edge")]
fn top_points_on_even_grid(point: u32, expected: u32) {
    let grid = GridCalculator::new(100, 100, 5, 5).unwrap();
    assert_eq!(grid.top_point(point).unwrap(), expected);
}

#[test]
fn narrow_grid_scenario() {
    let grid = GridCalculator::new(10, 20, 5, 10).unwrap();
    assert_eq!(grid.left_point(3).unwrap(), 6);
    assert_eq!(grid.top_point(7).unwrap(), 14);
}

#[test]
fn edges_match_pixel_range() {
    let grid = GridCalculator::new(640, 480, 7, 3).unwrap();
    assert_eq!(grid.left_point(0).unwrap(), 0);
    assert_eq!(grid.left_point(7).unwrap(), 640);
    assert_eq!(grid.top_point(0).unwrap(), 0);
    assert_eq!(grid.top_point(3).unwrap(), 480);

    let grid = GridCalculator::with_origin(800, 600, 10, 10, 50, 75).unwrap();
    assert_eq!(grid.left_point(0).unwrap(), 50);
    assert_eq!(grid.left_point(10).unwrap(), 800);
    assert_eq!(grid.top_point(0).unwrap(), 75);
    assert_eq!(grid.top_point(10).unwrap(), 600);
}

#[test]
fn points_are_monotonic() {
    // Spans chosen so cells don't divide evenly.
    let grid = GridCalculator::new(641, 479, 7, 13).unwrap();
    for pair in all_width_points(&grid).windows(2) {
        assert!(pair[0] <= pair[1]);
    }
    for pair in all_height_points(&grid).windows(2) {
        assert!(pair[0] <= pair[1]);
    }
}

#[test]
fn gaps_are_additive() {
    let grid = GridCalculator::new(103, 103, 7, 7).unwrap();
    for a in 0..=7 {
        for b in a..=7 {
            for c in b..=7 {
                let ab = grid.width_gap(a, b).unwrap();
                let bc = grid.width_gap(b, c).unwrap();
                let ac = grid.width_gap(a, c).unwrap();
                assert_eq!(ab + bc, ac, "width gaps {a}-{b}-{c}");
            }
        }
    }
}

#[test]
fn position_combines_both_axes() {
    let grid = GridCalculator::new(100, 100, 5, 5).unwrap();
    assert_eq!(grid.position(1, 3).unwrap(), (20, 60));
    assert_eq!(grid.position(0, 5).unwrap(), (0, 100));
}

#[test]
fn square_scenario() {
    let grid = GridCalculator::new(100, 100, 5, 5).unwrap();
    assert_eq!(grid.square(0, 0, 2, 2).unwrap(), (40, 40));
    assert_eq!(grid.square(1, 2, 4, 5).unwrap(), (60, 60));
}

#[test]
fn size_and_pixel_size() {
    let grid = GridCalculator::with_origin(110, 60, 5, 4, 10, 10).unwrap();
    assert_eq!(grid.size(), (5, 4));
    assert_eq!(grid.pixel_size(), (100, 50));
}

#[test]
fn border_relative_points_mirror_edges() {
    let grid = GridCalculator::new(100, 100, 5, 5).unwrap();
    // "0 from the right" is the right edge; "all 5" reaches the left edge.
    assert_eq!(
        grid.points_from_right(0).unwrap(),
        grid.left_point(5).unwrap()
    );
    assert_eq!(
        grid.points_from_right(5).unwrap(),
        grid.left_point(0).unwrap()
    );
    assert_eq!(
        grid.points_from_bottom(0).unwrap(),
        grid.top_point(5).unwrap()
    );
    assert_eq!(
        grid.points_from_bottom(5).unwrap(),
        grid.top_point(0).unwrap()
    );
    assert_eq!(grid.points_from_right(2).unwrap(), 60);
    assert_eq!(grid.points_from_left(2).unwrap(), grid.left_point(2).unwrap());
}

#[test]
fn border_relative_points_out_of_range() {
    let grid = GridCalculator::new(100, 100, 5, 5).unwrap();
    let err = grid.points_from_right(6).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Range);
    let err = grid.points_from_bottom(6).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Range);
}

#[test]
fn noop_grid_update_reproduces_points() {
    let mut grid = GridCalculator::new(641, 479, 7, 13).unwrap();
    let widths = all_width_points(&grid);
    let heights = all_height_points(&grid);

    grid.update_grid(7, 13).unwrap();
    assert_eq!(all_width_points(&grid), widths);
    assert_eq!(all_height_points(&grid), heights);
}

#[test]
fn queries_are_idempotent() {
    let grid = GridCalculator::new(103, 59, 7, 3).unwrap();
    assert_eq!(grid.left_point(4).unwrap(), grid.left_point(4).unwrap());
    assert_eq!(grid.width_gap(1, 6).unwrap(), grid.width_gap(1, 6).unwrap());
    assert_eq!(
        grid.square(0, 0, 7, 3).unwrap(),
        grid.square(0, 0, 7, 3).unwrap()
    );
}

#[test]
fn boundary_indices_never_fail() {
    let grid = GridCalculator::new(100, 100, 5, 5).unwrap();
    assert!(grid.left_point(0).is_ok());
    assert!(grid.left_point(5).is_ok());
    assert!(grid.top_point(0).is_ok());
    assert!(grid.top_point(5).is_ok());
    // One past the edge always fails. Negative indices don't exist:
    // grid points are u32, so -1 is unrepresentable at the API boundary.
    let err = grid.left_point(6).unwrap_err();
    assert_eq!(
        err,
        GridError::OutOfRange {
            axis: Axis::Horizontal,
            point: 6,
            max: 5
        }
    );
    assert_eq!(
        err.to_string(),
        "the left point provided (6) isn't in the grid (0 - 5)"
    );
}

#[test]
fn oversized_grid_is_a_configuration_error() {
    let err = GridCalculator::new(100, 100, 200, 10).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Configuration);
    assert_eq!(
        err,
        GridError::GridExceedsPixels {
            axis: Axis::Horizontal,
            grid: 200,
            pixels: 100
        }
    );
}

#[test_case(0, 100, 5, 5 ; "zero end left")]
#[test_case(100, 0, 5, 5 ; "zero end top")]
#[test_case(100, 100, 0, 5 ; "zero grid width")]
#[test_case(100, 100, 5, 0 ; "zero grid height")]
#[test_case(4, 100, 5, 5 ; "width does not fit")]
#[test_case(100, 4, 5, 5 ; "height does not fit")]
fn invalid_construction(end_left: u32, end_top: u32, grid_width: u32, grid_height: u32) {
    let err = GridCalculator::new(end_left, end_top, grid_width, grid_height).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Configuration);
}

#[test]
fn reversed_gap_is_an_order_error() {
    let grid = GridCalculator::new(100, 100, 5, 5).unwrap();
    let err = grid.width_gap(4, 3).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Order);
    assert_eq!(
        err,
        GridError::OutOfOrder {
            axis: Axis::Horizontal,
            start: 4,
            end: 3
        }
    );
    let err = grid.height_gap(2, 1).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Order);
}

#[test]
fn square_checks_ranges_before_order() {
    let grid = GridCalculator::new(100, 100, 5, 5).unwrap();
    // Both violations present: the range failure on the left end index is
    // reported, not the top-pair order failure.
    let err = grid.square(0, 4, 6, 2).unwrap_err();
    assert_eq!(
        err,
        GridError::OutOfRange {
            axis: Axis::Horizontal,
            point: 6,
            max: 5
        }
    );
    // Ranges valid: the left pair's order is checked before the top pair's.
    let err = grid.square(3, 4, 1, 2).unwrap_err();
    assert_eq!(
        err,
        GridError::OutOfOrder {
            axis: Axis::Horizontal,
            start: 3,
            end: 1
        }
    );
}

#[test]
fn update_grid_remaps_existing_pixels() {
    let mut grid = GridCalculator::new(100, 100, 5, 5).unwrap();
    grid.update_grid(10, 4).unwrap();
    assert_eq!(grid.size(), (10, 4));
    assert_eq!(grid.left_point(1).unwrap(), 10);
    assert_eq!(grid.top_point(1).unwrap(), 25);
}

#[test]
fn update_pixel_range_keeps_grid() {
    let mut grid = GridCalculator::new(100, 100, 5, 5).unwrap();
    grid.update_pixel_range(200, 100, 100, 0).unwrap();
    assert_eq!(grid.size(), (5, 5));
    assert_eq!(grid.left_point(0).unwrap(), 100);
    assert_eq!(grid.left_point(5).unwrap(), 200);
    assert_eq!(grid.pixel_size(), (100, 100));
}

#[test]
fn failed_updates_are_atomic() {
    let mut grid = GridCalculator::new(100, 100, 5, 5).unwrap();
    let before_widths = all_width_points(&grid);

    assert_eq!(
        grid.update_grid(200, 10).unwrap_err().kind(),
        ErrorKind::Configuration
    );
    assert_eq!(
        grid.update_pixel_range(3, 3, 0, 0).unwrap_err().kind(),
        ErrorKind::Configuration
    );

    assert_eq!(grid.size(), (5, 5));
    assert_eq!(all_width_points(&grid), before_widths);
}

#[test]
fn nested_grid_from_parent_points() {
    // Caller-level composition: a sub-grid over the center cell region.
    let parent = GridCalculator::new(100, 100, 5, 5).unwrap();
    let child = GridCalculator::with_origin(
        parent.left_point(4).unwrap(),
        parent.top_point(4).unwrap(),
        2,
        2,
        parent.left_point(1).unwrap(),
        parent.top_point(1).unwrap(),
    )
    .unwrap();
    assert_eq!(child.left_point(0).unwrap(), 20);
    assert_eq!(child.left_point(1).unwrap(), 50);
    assert_eq!(child.left_point(2).unwrap(), 80);
}
