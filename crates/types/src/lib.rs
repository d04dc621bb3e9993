//! Shared types module - constants and plain data enums
//!
//! This crate defines the fundamental types used throughout the engine.
//! All types are pure data structures with no external dependencies, making
//! them usable in any context (core logic, presentation, session protocol).
//!
//! # Grid Dimensions
//!
//! The playfield is a fixed 9x9 square, indexed `(row, col)` with row 0 at
//! the top. Blocks are anchored by the top-left corner of their bounding box.
//!
//! # Game Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `GRID_SIZE` | 9 | Rows and columns of the playfield |
//! | `TIMER_DURATION` | 30 | Seconds per round timer |
//! | `MAX_HEARTS` | 3 | Lives at the start of a run |
//! | `OPTION_COUNT` | 3 | Blocks offered per fresh option set |
//! | `GENERATOR_MAX_ATTEMPTS` | 50 | Redraws before the 1x1 fallback |
//! | `CELL_POINTS` | 10 | Points per placed cell |
//! | `LINE_BONUS` | 100 | Multiplier for the squared line-clear bonus |

/// Rows and columns of the square playfield.
pub const GRID_SIZE: u8 = 9;

/// Round timer duration in seconds. The timer resets to this value whenever
/// a fresh option set is generated.
pub const TIMER_DURATION: u32 = 30;

/// Lives at the start of a run. Lives are lost only on timer expiry.
pub const MAX_HEARTS: u8 = 3;

/// Number of blocks offered per freshly generated option set.
pub const OPTION_COUNT: usize = 3;

/// Maximum generator redraw attempts before falling back to a 1x1 block.
pub const GENERATOR_MAX_ATTEMPTS: u32 = 50;

/// Points awarded per occupied cell of a placed block.
pub const CELL_POINTS: u32 = 10;

/// Base of the quadratic line-clear bonus (`lines^2 * LINE_BONUS`).
pub const LINE_BONUS: u32 = 100;

/// Block colors - the 8-color palette blocks are drawn in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockColor {
    Green,
    Blue,
    Amber,
    Red,
    Pink,
    Violet,
    Cyan,
    Orange,
}

impl BlockColor {
    /// All palette colors, in draw-table order.
    pub const ALL: [BlockColor; 8] = [
        BlockColor::Green,
        BlockColor::Blue,
        BlockColor::Amber,
        BlockColor::Red,
        BlockColor::Pink,
        BlockColor::Violet,
        BlockColor::Cyan,
        BlockColor::Orange,
    ];

    /// Stable palette index (0-7). Snapshot cell encoding is `index + 1`.
    pub fn index(self) -> u8 {
        match self {
            BlockColor::Green => 0,
            BlockColor::Blue => 1,
            BlockColor::Amber => 2,
            BlockColor::Red => 3,
            BlockColor::Pink => 4,
            BlockColor::Violet => 5,
            BlockColor::Cyan => 6,
            BlockColor::Orange => 7,
        }
    }

    /// Color for a palette index, if in range.
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    /// CSS hex value used by presentation layers.
    pub fn hex(self) -> &'static str {
        match self {
            BlockColor::Green => "#22c55e",
            BlockColor::Blue => "#3b82f6",
            BlockColor::Amber => "#f59e0b",
            BlockColor::Red => "#ef4444",
            BlockColor::Pink => "#ec4899",
            BlockColor::Violet => "#8b5cf6",
            BlockColor::Cyan => "#06b6d4",
            BlockColor::Orange => "#f97316",
        }
    }

    /// Convert to lowercase string
    pub fn as_str(self) -> &'static str {
        match self {
            BlockColor::Green => "green",
            BlockColor::Blue => "blue",
            BlockColor::Amber => "amber",
            BlockColor::Red => "red",
            BlockColor::Pink => "pink",
            BlockColor::Violet => "violet",
            BlockColor::Cyan => "cyan",
            BlockColor::Orange => "orange",
        }
    }

    /// Parse from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "green" => Some(BlockColor::Green),
            "blue" => Some(BlockColor::Blue),
            "amber" => Some(BlockColor::Amber),
            "red" => Some(BlockColor::Red),
            "pink" => Some(BlockColor::Pink),
            "violet" => Some(BlockColor::Violet),
            "cyan" => Some(BlockColor::Cyan),
            "orange" => Some(BlockColor::Orange),
            _ => None,
        }
    }
}

/// Cell of the grid (None = empty, Some = filled with a block color)
pub type Cell = Option<BlockColor>;

/// Game phase - a closed state machine
///
/// Transitions:
/// - `Menu --start--> Playing`
/// - `Playing --pause--> Paused`, `Paused --resume--> Playing`
/// - `Playing --timer and lives exhausted--> GameOver`
/// - `Paused | GameOver --restart--> Playing`
/// - any phase `--return to menu--> Menu`
///
/// Events inconsistent with the current phase are ignored, never errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GamePhase {
    Menu,
    Playing,
    Paused,
    GameOver,
}

impl GamePhase {
    /// Convert to lowercase string
    pub fn as_str(self) -> &'static str {
        match self {
            GamePhase::Menu => "menu",
            GamePhase::Playing => "playing",
            GamePhase::Paused => "paused",
            GamePhase::GameOver => "gameover",
        }
    }

    /// Parse from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "menu" => Some(GamePhase::Menu),
            "playing" => Some(GamePhase::Playing),
            "paused" => Some(GamePhase::Paused),
            "gameover" | "game_over" => Some(GamePhase::GameOver),
            _ => None,
        }
    }
}

/// Outcome of a placement attempt
///
/// A `Rejected` placement leaves the whole game state untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementResult {
    Rejected,
    Accepted {
        /// Points awarded: `cells * CELL_POINTS + lines^2 * LINE_BONUS`.
        score_delta: u32,
        /// Full rows plus full columns cleared by this placement.
        lines_cleared: u8,
    },
}

impl PlacementResult {
    pub fn is_accepted(self) -> bool {
        matches!(self, PlacementResult::Accepted { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_index_roundtrip() {
        for color in BlockColor::ALL {
            assert_eq!(BlockColor::from_index(color.index()), Some(color));
        }
        assert_eq!(BlockColor::from_index(8), None);
    }

    #[test]
    fn test_color_string_roundtrip() {
        for color in BlockColor::ALL {
            assert_eq!(BlockColor::from_str(color.as_str()), Some(color));
        }
        assert_eq!(BlockColor::from_str("mauve"), None);
    }

    #[test]
    fn test_phase_string_roundtrip() {
        for phase in [
            GamePhase::Menu,
            GamePhase::Playing,
            GamePhase::Paused,
            GamePhase::GameOver,
        ] {
            assert_eq!(GamePhase::from_str(phase.as_str()), Some(phase));
        }
        assert_eq!(GamePhase::from_str("game_over"), Some(GamePhase::GameOver));
    }

    #[test]
    fn test_placement_result_accepted() {
        assert!(!PlacementResult::Rejected.is_accepted());
        assert!(PlacementResult::Accepted {
            score_delta: 40,
            lines_cleared: 0
        }
        .is_accepted());
    }
}
