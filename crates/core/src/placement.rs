//! Placement module - geometric legality predicates
//!
//! Pure functions with no side effects. Anchors denote the top-left corner
//! of a block's bounding box; presentation layers recenter around a cursor
//! before calling. Signed anchors allow off-grid probes without wrapping.

use block_blitz_types::GRID_SIZE;

use crate::grid::Grid;
use crate::shapes::BlockShape;

/// Check whether `block` can legally be placed with its bounding-box corner
/// at `(anchor_row, anchor_col)`: every occupied offset must map to an
/// in-bounds, unfilled cell. Total over the full anchor domain; offsets are
/// added in `i32` so extreme anchors cannot wrap.
pub fn can_place(grid: &Grid, block: &BlockShape, anchor_row: i8, anchor_col: i8) -> bool {
    block.offsets().iter().all(|&(dr, dc)| {
        let row = anchor_row as i32 + dr as i32;
        let col = anchor_col as i32 + dc as i32;
        (0..GRID_SIZE as i32).contains(&row)
            && (0..GRID_SIZE as i32).contains(&col)
            && grid.is_empty_at(row as i8, col as i8)
    })
}

/// Check whether any of the 81 anchor positions accepts `block`.
pub fn can_place_anywhere(grid: &Grid, block: &BlockShape) -> bool {
    for row in 0..GRID_SIZE as i8 {
        for col in 0..GRID_SIZE as i8 {
            if can_place(grid, block, row, col) {
                return true;
            }
        }
    }
    false
}

/// Check whether any block in the option set has a legal anchor. Used by
/// the generator's playability guarantee and the post-placement
/// stuck-set refresh.
pub fn can_place_any(grid: &Grid, options: &[BlockShape]) -> bool {
    options.iter().any(|block| can_place_anywhere(grid, block))
}
