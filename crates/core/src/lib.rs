//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains all the game rules, state management, and
//! resolution logic for the timed 9x9 block-placement puzzle. It has
//! **zero dependencies** on UI, networking, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical option sequences
//! - **Testable**: Every rule covered by unit tests
//! - **Portable**: Can run in any environment (terminal, web view, headless)
//! - **Fast**: Flat-array grid and zero-allocation option sets
//!
//! # Module Structure
//!
//! - [`grid`]: 9x9 playfield with full-line detection and one-pass clearing
//! - [`shapes`]: the 16-template block library and generated block options
//! - [`generator`]: playable option-set generation with retry and fallback
//! - [`placement`]: pure geometric legality predicates
//! - [`scoring`]: cell points plus the quadratic multi-line bonus
//! - [`timer`]: the round countdown with explicit start/stop/reset
//! - [`game_state`]: the phase machine owning all of the above
//! - [`snapshot`]: flat read-model for presentation collaborators
//! - [`rng`]: seeded LCG behind the generator
//!
//! # Game Rules
//!
//! - The grid never changes size; cleared lines empty in place (no gravity).
//! - Each round offers 3 blocks; consuming all 3, or being left with only
//!   unplayable ones, yields a fresh playable set and a timer reset.
//! - A full row and a full column flagged in the same pass both count, and
//!   their intersection cell is cleared exactly once.
//! - The 30-second timer is the only way to lose a heart; the third expiry
//!   ends the run.
//!
//! # Example
//!
//! ```
//! use block_blitz_core::GameState;
//! use block_blitz_types::GamePhase;
//!
//! let mut game = GameState::new(12345);
//! game.start();
//! assert_eq!(game.phase(), GamePhase::Playing);
//! assert_eq!(game.options().len(), 3);
//!
//! // One second of wall clock.
//! game.tick_second();
//! assert_eq!(game.time_left(), 29);
//! ```

pub mod game_state;
pub mod generator;
pub mod grid;
pub mod placement;
pub mod rng;
pub mod scoring;
pub mod shapes;
pub mod snapshot;
pub mod timer;

// Re-export commonly used types
pub use game_state::{GameState, LineClearEvent};
pub use generator::{BlockOptions, OptionsGenerator};
pub use grid::{FullLines, Grid};
pub use placement::{can_place, can_place_any, can_place_anywhere};
pub use scoring::placement_score;
pub use shapes::{BlockShape, ShapeTemplate, TEMPLATES};
pub use snapshot::{BlockSnapshot, GameSnapshot};
pub use timer::RoundTimer;
