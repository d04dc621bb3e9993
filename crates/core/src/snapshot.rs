//! Snapshot module - flat read-model for presentation collaborators
//!
//! A copyable value the UI can hold without touching the live state.
//! Grid cells are encoded as `u8` (0 = empty, color index + 1 = filled);
//! option shapes fit a fixed 4x4 mask since no template exceeds 4 in
//! either dimension.

use block_blitz_types::{BlockColor, GamePhase, GRID_SIZE, OPTION_COUNT, TIMER_DURATION};

use crate::game_state::GameState;
use crate::shapes::BlockShape;

/// Largest template dimension (the 4-long bars)
pub const MAX_SHAPE_DIM: usize = 4;

/// One offered block, flattened for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockSnapshot {
    pub id: u32,
    pub color: BlockColor,
    pub rows: u8,
    pub cols: u8,
    pub cells: [[bool; MAX_SHAPE_DIM]; MAX_SHAPE_DIM],
}

impl From<BlockShape> for BlockSnapshot {
    fn from(value: BlockShape) -> Self {
        let mut cells = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for &(dr, dc) in value.offsets() {
            cells[dr as usize][dc as usize] = true;
        }
        Self {
            id: value.id,
            color: value.color,
            rows: value.template.rows,
            cols: value.template.cols,
            cells,
        }
    }
}

/// Full game snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSnapshot {
    /// 0 = empty, color index + 1 = filled
    pub grid: [[u8; GRID_SIZE as usize]; GRID_SIZE as usize],
    pub phase: GamePhase,
    pub options: [Option<BlockSnapshot>; OPTION_COUNT],
    pub hearts: u8,
    pub score: u32,
    pub high_score: u32,
    pub time_left: u32,
    /// Rows cleared by the most recent placement (blast animation hook)
    pub cleared_rows: [bool; GRID_SIZE as usize],
    /// Columns cleared by the most recent placement
    pub cleared_cols: [bool; GRID_SIZE as usize],
    pub episode_id: u32,
    pub seed: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.grid = [[0u8; GRID_SIZE as usize]; GRID_SIZE as usize];
        self.phase = GamePhase::Menu;
        self.options = [None; OPTION_COUNT];
        self.hearts = 0;
        self.score = 0;
        self.high_score = 0;
        self.time_left = TIMER_DURATION;
        self.cleared_rows = [false; GRID_SIZE as usize];
        self.cleared_cols = [false; GRID_SIZE as usize];
        self.episode_id = 0;
        self.seed = 0;
    }

    pub fn playable(&self) -> bool {
        self.phase == GamePhase::Playing
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let mut snapshot = Self {
            grid: [[0u8; GRID_SIZE as usize]; GRID_SIZE as usize],
            phase: GamePhase::Menu,
            options: [None; OPTION_COUNT],
            hearts: 0,
            score: 0,
            high_score: 0,
            time_left: TIMER_DURATION,
            cleared_rows: [false; GRID_SIZE as usize],
            cleared_cols: [false; GRID_SIZE as usize],
            episode_id: 0,
            seed: 0,
        };
        snapshot.clear();
        snapshot
    }
}

impl GameState {
    /// Fill a caller-owned snapshot buffer without allocating
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.grid().write_u8_grid(&mut out.grid);

        out.phase = self.phase();
        out.options = [None; OPTION_COUNT];
        for (slot, block) in out.options.iter_mut().zip(self.options().iter()) {
            *slot = Some(BlockSnapshot::from(*block));
        }
        out.hearts = self.hearts();
        out.score = self.score();
        out.high_score = self.high_score();
        out.time_left = self.time_left();

        out.cleared_rows = [false; GRID_SIZE as usize];
        out.cleared_cols = [false; GRID_SIZE as usize];
        if let Some(event) = self.last_clear() {
            for &row in &event.cleared.rows {
                out.cleared_rows[row as usize] = true;
            }
            for &col in &event.cleared.cols {
                out.cleared_cols[col as usize] = true;
            }
        }

        out.episode_id = self.episode_id();
        out.seed = self.seed();
    }

    /// Convenience form of [`snapshot_into`](Self::snapshot_into)
    pub fn snapshot(&self) -> GameSnapshot {
        let mut snapshot = GameSnapshot::default();
        self.snapshot_into(&mut snapshot);
        snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::TEMPLATES;

    #[test]
    fn test_block_snapshot_mask() {
        let bar4 = BlockShape::new(7, &TEMPLATES[12], BlockColor::Orange);
        let snap = BlockSnapshot::from(bar4);
        assert_eq!((snap.rows, snap.cols), (1, 4));
        assert_eq!(snap.cells[0], [true, true, true, true]);
        assert_eq!(snap.cells[1], [false; 4]);
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let mut state = GameState::new(42);
        let menu_snap = state.snapshot();
        assert_eq!(menu_snap.phase, GamePhase::Menu);
        assert!(menu_snap.options.iter().all(|slot| slot.is_none()));

        state.start();
        let snap = state.snapshot();
        assert_eq!(snap.phase, GamePhase::Playing);
        assert_eq!(snap.hearts, state.hearts());
        assert_eq!(snap.time_left, state.time_left());
        assert!(snap.options.iter().all(|slot| slot.is_some()));
        assert!(snap.grid.iter().flatten().all(|&cell| cell == 0));
    }

    #[test]
    fn test_snapshot_grid_encoding() {
        let mut state = GameState::new(42);
        state.start();
        state.grid_mut().set(2, 3, Some(BlockColor::Red));

        let snap = state.snapshot();
        assert_eq!(snap.grid[2][3], BlockColor::Red.index() + 1);
        assert_eq!(snap.grid[0][0], 0);
    }

    #[test]
    fn test_snapshot_into_reuses_buffer() {
        let mut state = GameState::new(42);
        state.start();

        let mut buffer = GameSnapshot::default();
        state.snapshot_into(&mut buffer);
        assert_eq!(buffer, state.snapshot());
    }
}
