//! Placement flow - typed failure codes around the core placement op
//!
//! The core engine reports rejection as a bare `PlacementResult::Rejected`;
//! protocol surfaces want to tell the caller why. This module pre-checks
//! the request and maps each failure to a stable code before handing the
//! grid mutation to the core.

use block_blitz_core::{can_place, GameState};
use block_blitz_types::{GamePhase, PlacementResult, GRID_SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceError {
    /// Game is not in the playing phase
    NotPlayable,
    /// Option index out of range (or already consumed)
    NoSuchBlock,
    /// Some occupied cell of the block would land off the grid
    OutOfBounds,
    /// Some occupied cell of the block would land on a filled cell
    Occupied,
    /// The session driving the engine has shut down
    SessionClosed,
}

impl PlaceError {
    pub fn code(self) -> &'static str {
        match self {
            PlaceError::NotPlayable => "not_playable",
            PlaceError::NoSuchBlock | PlaceError::OutOfBounds | PlaceError::Occupied => {
                "invalid_place"
            }
            PlaceError::SessionClosed => "session_closed",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            PlaceError::NotPlayable => "game is not playable",
            PlaceError::NoSuchBlock => "no offered block at that index",
            PlaceError::OutOfBounds => "block would extend beyond the grid",
            PlaceError::Occupied => "block would overlap a filled cell",
            PlaceError::SessionClosed => "session has shut down",
        }
    }
}

/// Receipt for an accepted placement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacementReceipt {
    pub score_delta: u32,
    pub lines_cleared: u8,
    /// Row indices cleared by this placement
    pub cleared_rows: Vec<u8>,
    /// Column indices cleared by this placement
    pub cleared_cols: Vec<u8>,
}

/// Apply a placement intent with precise failure reporting.
///
/// Delegates the actual mutation to [`GameState::place`]; on rejection the
/// state is untouched and the returned error says which check failed.
pub fn apply_place(
    state: &mut GameState,
    index: usize,
    anchor_row: i8,
    anchor_col: i8,
) -> Result<PlacementReceipt, PlaceError> {
    if state.phase() != GamePhase::Playing {
        return Err(PlaceError::NotPlayable);
    }

    let Some(block) = state.options().get(index).copied() else {
        return Err(PlaceError::NoSuchBlock);
    };

    // Bounding-box check in i32: an extreme anchor must report out of
    // bounds rather than wrap.
    let (rows, cols) = (block.template.rows as i32, block.template.cols as i32);
    if anchor_row < 0
        || anchor_col < 0
        || anchor_row as i32 + rows > GRID_SIZE as i32
        || anchor_col as i32 + cols > GRID_SIZE as i32
    {
        return Err(PlaceError::OutOfBounds);
    }

    if !can_place(state.grid(), &block, anchor_row, anchor_col) {
        return Err(PlaceError::Occupied);
    }

    match state.place(index, anchor_row, anchor_col) {
        PlacementResult::Accepted {
            score_delta,
            lines_cleared,
        } => {
            let (cleared_rows, cleared_cols) = match state.last_clear() {
                Some(event) => (
                    event.cleared.rows.to_vec(),
                    event.cleared.cols.to_vec(),
                ),
                None => (Vec::new(), Vec::new()),
            };
            Ok(PlacementReceipt {
                score_delta,
                lines_cleared,
                cleared_rows,
                cleared_cols,
            })
        }
        // Unreachable after the pre-checks, but keep the mapping total.
        PlacementResult::Rejected => Err(PlaceError::Occupied),
    }
}
