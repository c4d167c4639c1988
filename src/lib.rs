//! Tilt Tetris (workspace facade crate).
//!
//! Re-exports the member crates as `tilt_tetris::{core,input,term,types}` so
//! the runner, integration tests and benches share one import path.

pub use tilt_tetris_core as core;
pub use tilt_tetris_input as input;
pub use tilt_tetris_term as term;
pub use tilt_tetris_types as types;
