//! Game state module - the single owner of all gameplay state
//!
//! Ties together the grid, the option generator, the placement validator,
//! the line-clear resolver, and the round timer behind one phase machine.
//! All operations are total: events inconsistent with the current phase are
//! ignored or rejected without touching any field, and a rejected placement
//! leaves the state bit-for-bit unchanged.
//!
//! The state is driven by two external stimuli - a 1 Hz tick and discrete
//! user intents - which callers must serialize (see the engine crate's
//! session actor).

use block_blitz_types::{GamePhase, PlacementResult, MAX_HEARTS};

use crate::generator::{BlockOptions, OptionsGenerator};
use crate::grid::{FullLines, Grid};
use crate::placement::{can_place, can_place_any};
use crate::scoring::placement_score;
use crate::timer::RoundTimer;

/// Transient notification of which lines a placement just cleared.
///
/// Consumed by observers via [`GameState::take_last_clear`]; presentation
/// uses it for blast animation and discards it after its display delay.
/// Carries no gameplay state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineClearEvent {
    pub cleared: FullLines,
    pub lines_cleared: u8,
    pub score_delta: u32,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    phase: GamePhase,
    grid: Grid,
    options: BlockOptions,
    generator: OptionsGenerator,
    hearts: u8,
    score: u32,
    /// Monotone across runs; committed on every GameOver entry.
    high_score: u32,
    timer: RoundTimer,
    /// Last line clear (consumed by observers).
    last_clear: Option<LineClearEvent>,
    /// Monotonic run id (increments on every fresh run).
    episode_id: u32,
}

impl GameState {
    /// Create a new engine in the menu phase with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self {
            phase: GamePhase::Menu,
            grid: Grid::new(),
            options: BlockOptions::new(),
            generator: OptionsGenerator::new(seed),
            hearts: MAX_HEARTS,
            score: 0,
            high_score: 0,
            timer: RoundTimer::new(),
            last_clear: None,
            episode_id: 0,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn options(&self) -> &[crate::shapes::BlockShape] {
        &self.options
    }

    pub fn hearts(&self) -> u8 {
        self.hearts
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    /// Seconds left on the round timer
    pub fn time_left(&self) -> u32 {
        self.timer.remaining_secs()
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    /// Current generator RNG state
    pub fn seed(&self) -> u32 {
        self.generator.seed()
    }

    /// Seed the persisted best score at session startup. Never lowers the
    /// current value.
    pub fn set_high_score(&mut self, best: u32) {
        self.high_score = self.high_score.max(best);
    }

    /// Peek at the last line clear without consuming it
    pub fn last_clear(&self) -> Option<&LineClearEvent> {
        self.last_clear.as_ref()
    }

    /// Take and clear the last line-clear notification
    pub fn take_last_clear(&mut self) -> Option<LineClearEvent> {
        self.last_clear.take()
    }

    #[cfg(test)]
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    #[cfg(test)]
    pub fn options_mut(&mut self) -> &mut BlockOptions {
        &mut self.options
    }

    /// Begin a run: empty grid, full hearts, zero score, fresh playable
    /// options, full running timer.
    fn begin_run(&mut self) {
        self.grid.clear();
        self.hearts = MAX_HEARTS;
        self.score = 0;
        self.last_clear = None;
        self.options = self.generator.generate(&self.grid);
        self.timer.reset();
        self.timer.start();
        self.episode_id = self.episode_id.wrapping_add(1);
        self.phase = GamePhase::Playing;
    }

    /// `Menu -> Playing`. Ignored in any other phase.
    pub fn start(&mut self) {
        match self.phase {
            GamePhase::Menu => self.begin_run(),
            GamePhase::Playing | GamePhase::Paused | GamePhase::GameOver => {}
        }
    }

    /// `Paused | GameOver -> Playing`, identical effect to starting from
    /// the menu. Ignored elsewhere.
    pub fn restart(&mut self) {
        match self.phase {
            GamePhase::Paused | GamePhase::GameOver => self.begin_run(),
            GamePhase::Menu | GamePhase::Playing => {}
        }
    }

    /// `Playing <-> Paused`. Pausing freezes the timer; resuming continues
    /// from the frozen value without a reset. Ignored elsewhere.
    pub fn toggle_pause(&mut self) {
        match self.phase {
            GamePhase::Playing => {
                self.timer.stop();
                self.phase = GamePhase::Paused;
            }
            GamePhase::Paused => {
                self.timer.start();
                self.phase = GamePhase::Playing;
            }
            GamePhase::Menu | GamePhase::GameOver => {}
        }
    }

    /// Abandon the current run and return to the menu from any phase.
    /// The high score keeps whatever GameOver already committed.
    pub fn return_to_menu(&mut self) {
        self.grid.clear();
        self.options.clear();
        self.hearts = MAX_HEARTS;
        self.score = 0;
        self.last_clear = None;
        self.timer = RoundTimer::new();
        self.phase = GamePhase::Menu;
    }

    /// Attempt to place the option at `index` with its bounding-box corner
    /// at `(anchor_row, anchor_col)`.
    ///
    /// Atomic from the caller's perspective: on rejection (wrong phase, bad
    /// index, illegal geometry) nothing changes. On acceptance the block is
    /// stamped, consumed from the option set, full rows and columns from a
    /// single post-placement scan are cleared once each, the score delta is
    /// applied, and the option set refreshes (with a timer reset) when it
    /// is empty or has no legal placement left.
    pub fn place(&mut self, index: usize, anchor_row: i8, anchor_col: i8) -> PlacementResult {
        if self.phase != GamePhase::Playing {
            return PlacementResult::Rejected;
        }

        let Some(block) = self.options.get(index).copied() else {
            return PlacementResult::Rejected;
        };

        if !can_place(&self.grid, &block, anchor_row, anchor_col) {
            return PlacementResult::Rejected;
        }

        self.grid
            .stamp(block.offsets(), anchor_row, anchor_col, block.color);
        self.options.remove(index);

        // Single-pass resolution: full lines are detected once from the
        // post-placement snapshot, no cascading re-scan after clearing.
        let full = self.grid.full_lines();
        let lines_cleared = full.lines();
        self.grid.clear_lines(&full);

        let score_delta = placement_score(block.cell_count() as u32, lines_cleared as u32);
        self.score = self.score.saturating_add(score_delta);

        self.last_clear = if lines_cleared > 0 {
            Some(LineClearEvent {
                cleared: full,
                lines_cleared,
                score_delta,
            })
        } else {
            None
        };

        // Refresh policy: a consumed-out set always refreshes; a stuck
        // remaining set is discarded for a fresh playable one (generosity
        // policy, timer reset included).
        if self.options.is_empty() || !can_place_any(&self.grid, &self.options) {
            self.options = self.generator.generate(&self.grid);
            self.timer.reset();
        }

        PlacementResult::Accepted {
            score_delta,
            lines_cleared,
        }
    }

    /// Apply one wall-clock second while playing. Returns true when this
    /// tick expired the round timer.
    ///
    /// On expiry with more than one heart: lose a heart, regenerate
    /// playable options, reset the timer and keep playing. With the last
    /// heart: hearts drop to zero and the run ends. This is the only way
    /// lives are lost.
    pub fn tick_second(&mut self) -> bool {
        if self.phase != GamePhase::Playing {
            return false;
        }

        if !self.timer.tick() {
            return false;
        }

        if self.hearts <= 1 {
            self.hearts = 0;
            self.enter_game_over();
        } else {
            self.hearts -= 1;
            self.options = self.generator.generate(&self.grid);
            self.timer.reset();
        }
        true
    }

    fn enter_game_over(&mut self) {
        self.timer.stop();
        self.high_score = self.high_score.max(self.score);
        self.phase = GamePhase::GameOver;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
