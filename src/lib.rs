//! Block Blitz (workspace facade crate).
//!
//! This package keeps a stable `block_blitz::{core,engine,types}` public
//! API while the implementation lives in dedicated crates under `crates/`.

pub use block_blitz_core as core;
pub use block_blitz_engine as engine;
pub use block_blitz_types as types;
