//! Engine session layer - serialized dispatch around the pure core
//!
//! Everything that touches the outside world lives here, keeping the core
//! crate free of I/O and async:
//!
//! - [`place`]: the placement flow with typed failure codes
//! - [`session`]: the tokio actor that serializes ticks and user intents
//! - [`highscore`]: the persisted best-score scalar
//! - [`observation`]: JSON observation messages for presentation layers

pub mod highscore;
pub mod observation;
pub mod place;
pub mod session;

pub use highscore::HighScoreStore;
pub use observation::{BlockMessage, ObservationMessage};
pub use place::{apply_place, PlaceError, PlacementReceipt};
pub use session::{Session, SessionConfig};
