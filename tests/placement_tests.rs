//! Placement validator tests - soundness of the legality predicates

use block_blitz::core::{can_place, can_place_any, can_place_anywhere, BlockShape, Grid, TEMPLATES};
use block_blitz::types::{BlockColor, GRID_SIZE};

fn block(template_index: usize) -> BlockShape {
    BlockShape::new(1, &TEMPLATES[template_index], BlockColor::Green)
}

/// Reference predicate: true iff every occupied relative cell maps to an
/// in-bounds, unfilled absolute cell. Widened arithmetic keeps it total
/// over the whole i8 anchor domain.
fn can_place_reference(grid: &Grid, shape: &BlockShape, anchor_row: i8, anchor_col: i8) -> bool {
    shape.offsets().iter().all(|&(dr, dc)| {
        let row = anchor_row as i32 + dr as i32;
        let col = anchor_col as i32 + dc as i32;
        row >= 0
            && row < GRID_SIZE as i32
            && col >= 0
            && col < GRID_SIZE as i32
            && grid.get(row as i8, col as i8) == Some(None)
    })
}

#[test]
fn test_validator_matches_reference_on_scattered_grid() {
    let mut grid = Grid::new();
    // A scattered fill pattern touching edges, corners and the middle.
    for &(row, col) in &[(0, 0), (0, 8), (8, 0), (8, 8), (4, 4), (4, 5), (5, 4), (2, 7), (7, 2)] {
        grid.set(row, col, Some(BlockColor::Red));
    }

    for template_index in 0..TEMPLATES.len() {
        let shape = block(template_index);
        for row in -2..(GRID_SIZE as i8 + 2) {
            for col in -2..(GRID_SIZE as i8 + 2) {
                assert_eq!(
                    can_place(&grid, &shape, row, col),
                    can_place_reference(&grid, &shape, row, col),
                    "template {} at ({}, {})",
                    TEMPLATES[template_index].name,
                    row,
                    col
                );
            }
        }
    }
}

#[test]
fn test_every_template_fits_an_empty_grid() {
    let grid = Grid::new();
    for template_index in 0..TEMPLATES.len() {
        let shape = block(template_index);
        assert!(
            can_place_anywhere(&grid, &shape),
            "{} should fit an empty grid",
            TEMPLATES[template_index].name
        );
        assert!(can_place(&grid, &shape, 0, 0));
    }
}

#[test]
fn test_nothing_fits_a_full_grid() {
    let mut grid = Grid::new();
    for row in 0..GRID_SIZE as i8 {
        for col in 0..GRID_SIZE as i8 {
            grid.set(row, col, Some(BlockColor::Blue));
        }
    }

    let shapes: Vec<BlockShape> = (0..TEMPLATES.len()).map(block).collect();
    for shape in &shapes {
        assert!(!can_place_anywhere(&grid, shape));
    }
    assert!(!can_place_any(&grid, &shapes));
}

#[test]
fn test_anchor_is_top_left_of_bounding_box() {
    let grid = Grid::new();
    // ell_rev occupies nothing at (0, 0) of its box; the anchor still
    // refers to the box corner, so anchoring at the right edge such that
    // the box overflows must fail even though (0, 0) itself is unused.
    let ell_rev = block(8);
    assert!(can_place(&grid, &ell_rev, 0, 7)); // box cols 7..8, in bounds
    assert!(!can_place(&grid, &ell_rev, 0, 8)); // box col 9 out of bounds
    assert!(!can_place(&grid, &ell_rev, 7, 0)); // box rows 7..9 out of bounds
}

#[test]
fn test_validator_total_over_extreme_anchors() {
    let grid = Grid::new();
    for template_index in 0..TEMPLATES.len() {
        let shape = block(template_index);
        for &(row, col) in &[
            (i8::MAX, 0),
            (0, i8::MAX),
            (i8::MAX, i8::MAX),
            (i8::MIN, 0),
            (i8::MIN, i8::MIN),
        ] {
            assert!(
                !can_place(&grid, &shape, row, col),
                "{} accepted at extreme anchor ({}, {})",
                TEMPLATES[template_index].name,
                row,
                col
            );
        }
    }
}

#[test]
fn test_can_place_any_empty_set() {
    let grid = Grid::new();
    assert!(!can_place_any(&grid, &[]));
}
