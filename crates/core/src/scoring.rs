//! Scoring module - placement and line-clear points
//!
//! One formula: every placed cell is worth a flat amount, and clearing
//! `n` lines in a single placement awards a quadratic bonus. The quadratic
//! term makes one double clear worth more than two singles, rewarding
//! multi-line setups.

use block_blitz_types::{CELL_POINTS, LINE_BONUS};

/// Points for placing a block with `cell_count` occupied cells that cleared
/// `lines_cleared` full rows plus columns.
pub fn placement_score(cell_count: u32, lines_cleared: u32) -> u32 {
    let placement = cell_count.saturating_mul(CELL_POINTS);
    let bonus = lines_cleared
        .saturating_mul(lines_cleared)
        .saturating_mul(LINE_BONUS);
    placement.saturating_add(bonus)
}
