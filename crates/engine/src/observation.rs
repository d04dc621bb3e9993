//! Observation messages - JSON read-model for presentation collaborators
//!
//! Serializes a [`GameSnapshot`] into a line-delimited JSON message an
//! external view layer can consume without linking the core crate.
//! Envelope fields (`type`, `seq`, `ts`) follow the usual tagged-message
//! convention.

use serde::{Deserialize, Serialize};

use block_blitz_core::{BlockSnapshot, GameSnapshot};
use block_blitz_types::{GRID_SIZE, OPTION_COUNT};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ObservationType {
    #[serde(rename = "observation")]
    #[default]
    Observation,
}

/// One offered block, flattened for the wire
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BlockMessage {
    pub id: u32,
    pub color: String,
    pub rows: u8,
    pub cols: u8,
    /// Row-major mask, `rows` entries of `cols` booleans
    pub cells: Vec<Vec<bool>>,
}

impl From<&BlockSnapshot> for BlockMessage {
    fn from(value: &BlockSnapshot) -> Self {
        let cells = (0..value.rows as usize)
            .map(|row| (0..value.cols as usize).map(|col| value.cells[row][col]).collect())
            .collect();
        Self {
            id: value.id,
            color: value.color.as_str().to_string(),
            rows: value.rows,
            cols: value.cols,
            cells,
        }
    }
}

/// Full game observation message
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ObservationMessage {
    #[serde(rename = "type")]
    #[serde(default)]
    pub msg_type: ObservationType,
    pub seq: u64,
    pub ts: u64,
    pub phase: String,
    /// 0 = empty, color index + 1 = filled
    pub grid: [[u8; GRID_SIZE as usize]; GRID_SIZE as usize],
    pub options: Vec<BlockMessage>,
    pub hearts: u8,
    pub score: u32,
    pub high_score: u32,
    pub time_left: u32,
    /// Just-cleared line indices, for blast animation only
    pub cleared_rows: Vec<u8>,
    pub cleared_cols: Vec<u8>,
    pub episode_id: u32,
    pub seed: u32,
}

impl ObservationMessage {
    /// Build an observation from a snapshot with the given envelope
    pub fn from_snapshot(snapshot: &GameSnapshot, seq: u64, ts: u64) -> Self {
        let options = snapshot
            .options
            .iter()
            .take(OPTION_COUNT)
            .flatten()
            .map(BlockMessage::from)
            .collect();

        let cleared_rows = (0..GRID_SIZE)
            .filter(|&row| snapshot.cleared_rows[row as usize])
            .collect();
        let cleared_cols = (0..GRID_SIZE)
            .filter(|&col| snapshot.cleared_cols[col as usize])
            .collect();

        Self {
            msg_type: ObservationType::Observation,
            seq,
            ts,
            phase: snapshot.phase.as_str().to_string(),
            grid: snapshot.grid,
            options,
            hearts: snapshot.hearts,
            score: snapshot.score,
            high_score: snapshot.high_score,
            time_left: snapshot.time_left,
            cleared_rows,
            cleared_cols,
            episode_id: snapshot.episode_id,
            seed: snapshot.seed,
        }
    }
}
