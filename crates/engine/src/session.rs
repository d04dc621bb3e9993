//! Session actor - the single serialized dispatch point
//!
//! One tokio task owns the [`GameState`]. Discrete user intents arrive on
//! an mpsc channel, a 1 Hz interval drives the round timer, and a watch
//! channel publishes a fresh snapshot after every handled event. Ticks and
//! intents are applied by the same task, so a placement and a timer expiry
//! can never interleave mid-mutation, and once a pause is acknowledged no
//! later tick can touch the frozen timer.
//!
//! The best score is persisted whenever a run ends with a new record.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tokio::sync::{mpsc, oneshot, watch};
use tokio::time::{self, Duration, MissedTickBehavior};

use block_blitz_core::{GameSnapshot, GameState};
use block_blitz_types::GamePhase;

use crate::highscore::HighScoreStore;
use crate::place::{apply_place, PlaceError, PlacementReceipt};

/// How many queued intents the session accepts before applying backpressure
const COMMAND_QUEUE_DEPTH: usize = 32;

/// Session construction parameters
#[derive(Debug, Clone, Default)]
pub struct SessionConfig {
    /// RNG seed for the option generator
    pub seed: u32,
    /// Where to persist the best score; `None` disables persistence
    pub high_score_path: Option<PathBuf>,
}

/// Command delivered to the session task.
///
/// Every phase intent carries an ack so callers can await the transition
/// being applied (not merely queued) before trusting a snapshot.
#[derive(Debug)]
enum Command {
    Start(oneshot::Sender<()>),
    TogglePause(oneshot::Sender<()>),
    Restart(oneshot::Sender<()>),
    ReturnToMenu(oneshot::Sender<()>),
    Place {
        index: usize,
        anchor_row: i8,
        anchor_col: i8,
        reply: oneshot::Sender<Result<PlacementReceipt, PlaceError>>,
    },
    Shutdown(oneshot::Sender<()>),
}

/// Handle to a running session
#[derive(Debug, Clone)]
pub struct Session {
    cmd_tx: mpsc::Sender<Command>,
    snapshot_rx: watch::Receiver<GameSnapshot>,
}

impl Session {
    /// Spawn the session task on the current tokio runtime.
    ///
    /// Loads the persisted best score (if a path is configured) before the
    /// first snapshot is published.
    pub fn spawn(config: SessionConfig) -> Result<Self> {
        let mut state = GameState::new(config.seed);

        let store = config.high_score_path.map(HighScoreStore::new);
        if let Some(store) = &store {
            let best = store.load().context("load persisted high score")?;
            state.set_high_score(best);
        }

        let (cmd_tx, cmd_rx) = mpsc::channel(COMMAND_QUEUE_DEPTH);
        let (snapshot_tx, snapshot_rx) = watch::channel(state.snapshot());

        tokio::spawn(run(state, store, cmd_rx, snapshot_tx));

        Ok(Self {
            cmd_tx,
            snapshot_rx,
        })
    }

    async fn send_acked(
        &self,
        make: impl FnOnce(oneshot::Sender<()>) -> Command,
    ) -> Result<(), PlaceError> {
        let (ack_tx, ack_rx) = oneshot::channel();
        self.cmd_tx
            .send(make(ack_tx))
            .await
            .map_err(|_| PlaceError::SessionClosed)?;
        ack_rx.await.map_err(|_| PlaceError::SessionClosed)
    }

    /// `Menu -> Playing`
    pub async fn start(&self) -> Result<(), PlaceError> {
        self.send_acked(Command::Start).await
    }

    /// `Playing <-> Paused`. Once this returns, no further tick can
    /// decrement the frozen timer.
    pub async fn toggle_pause(&self) -> Result<(), PlaceError> {
        self.send_acked(Command::TogglePause).await
    }

    /// `Paused | GameOver -> Playing`
    pub async fn restart(&self) -> Result<(), PlaceError> {
        self.send_acked(Command::Restart).await
    }

    /// Any phase -> `Menu`
    pub async fn return_to_menu(&self) -> Result<(), PlaceError> {
        self.send_acked(Command::ReturnToMenu).await
    }

    /// Attempt a placement and await its receipt
    pub async fn place(
        &self,
        index: usize,
        anchor_row: i8,
        anchor_col: i8,
    ) -> Result<PlacementReceipt, PlaceError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.cmd_tx
            .send(Command::Place {
                index,
                anchor_row,
                anchor_col,
                reply: reply_tx,
            })
            .await
            .map_err(|_| PlaceError::SessionClosed)?;
        reply_rx.await.map_err(|_| PlaceError::SessionClosed)?
    }

    /// Latest published snapshot
    pub fn snapshot(&self) -> GameSnapshot {
        *self.snapshot_rx.borrow()
    }

    /// Subscribe to snapshot updates
    pub fn watch(&self) -> watch::Receiver<GameSnapshot> {
        self.snapshot_rx.clone()
    }

    /// Stop the session task. Queued commands ahead of the shutdown are
    /// still applied; everything after is dropped.
    pub async fn shutdown(&self) -> Result<(), PlaceError> {
        self.send_acked(Command::Shutdown).await
    }
}

async fn run(
    mut state: GameState,
    store: Option<HighScoreStore>,
    mut cmd_rx: mpsc::Receiver<Command>,
    snapshot_tx: watch::Sender<GameSnapshot>,
) {
    let mut interval = time::interval(Duration::from_secs(1));
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let mut persisted_best = state.high_score();

    loop {
        tokio::select! {
            command = cmd_rx.recv() => {
                let Some(command) = command else {
                    // All handles dropped.
                    break;
                };
                match command {
                    Command::Start(ack) => {
                        state.start();
                        let _ = ack.send(());
                    }
                    Command::TogglePause(ack) => {
                        state.toggle_pause();
                        let _ = ack.send(());
                    }
                    Command::Restart(ack) => {
                        state.restart();
                        let _ = ack.send(());
                    }
                    Command::ReturnToMenu(ack) => {
                        state.return_to_menu();
                        let _ = ack.send(());
                    }
                    Command::Place { index, anchor_row, anchor_col, reply } => {
                        let result = apply_place(&mut state, index, anchor_row, anchor_col);
                        let _ = reply.send(result);
                    }
                    Command::Shutdown(ack) => {
                        let _ = ack.send(());
                        break;
                    }
                }
            }
            _ = interval.tick() => {
                // Phase-checked inside; a tick outside Playing is a no-op.
                state.tick_second();
            }
        }

        if state.phase() == GamePhase::GameOver && state.high_score() > persisted_best {
            persisted_best = state.high_score();
            if let Some(store) = &store {
                // Best-effort: a failed write never disturbs gameplay.
                let _ = store.save(persisted_best);
            }
        }

        if snapshot_tx.send(state.snapshot()).is_err() {
            // No observers left.
            break;
        }
    }
}
