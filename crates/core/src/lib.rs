//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the rules and the per-tick state machine of a
//! falling-block game steered by tilting the device. It has **no
//! dependencies** on a display, a sensor driver or a clock:
//!
//! - **Deterministic**: the same seed and the same samples at the same
//!   timestamps replay the same game
//! - **Testable**: time is injected as milliseconds, so nothing sleeps
//! - **Portable**: collaborators plug in through the traits in [`io`]
//!
//! # Module Structure
//!
//! - [`pieces`]: the seven-kind catalog and its rotation states
//! - [`piece`]: the live piece (kind, rotation index, anchor)
//! - [`board`]: W x H grid with collision, locking, line detection, compaction
//! - [`mapper`]: tilt samples to rate-limited moves, rotations and fall speed
//! - [`scoring`]: cleared-line counter with a two-digit readout
//! - [`preview`]: the upcoming piece
//! - [`game_state`]: [`GameController`], the state machine tying it together
//! - [`frames`]: line-clear and game-over animation descriptions
//! - [`paint`]: drawing a snapshot onto a [`io::DisplaySurface`]
//!
//! # Rules
//!
//! - Pieces spawn centred on the top row; a blocked spawn ends the game
//! - Rotation has no kicks: a colliding rotation is simply refused
//! - A piece locks when the fall timer fires and it cannot descend
//! - Any filled cell in the top row after a lock ends the game
//! - Each cleared line scores one point
//!
//! # Example
//!
//! ```
//! use tilt_tetris_core::{GameConfig, GameController};
//! use tilt_tetris_core::types::TiltSample;
//!
//! let mut game = GameController::new(GameConfig::default(), 12345).unwrap();
//!
//! // Tilt right hard enough for a two-column step.
//! let outcome = game.tick(0, TiltSample::new(3.0, 0.0, 0.0));
//! assert!(outcome.shifted > 0);
//!
//! // A second later the fall timer moves the piece down.
//! game.tick(1000, TiltSample::level());
//! assert_eq!(game.active().unwrap().y, 1);
//! ```

pub mod board;
pub mod config;
pub mod frames;
pub mod game_state;
pub mod io;
pub mod mapper;
pub mod paint;
pub mod piece;
pub mod pieces;
pub mod preview;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use tilt_tetris_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, FullRows};
pub use config::{ConfigError, GameConfig};
pub use frames::AnimationFrame;
pub use game_state::{GameController, StepResult, TickOutcome};
pub use io::{DisplaySurface, ScriptedSensor, SensorSource};
pub use mapper::{InputMapper, RateLimiter, TiltIntent};
pub use paint::{paint_frame, paint_playfield, Origin};
pub use piece::Piece;
pub use pieces::{bounding_height, bounding_width, get_shape, next_rotation, rotation_states};
pub use preview::NextPiecePreview;
pub use rng::{PieceRandomizer, SimpleRng};
pub use scoring::ScoreTracker;
pub use snapshot::{ActiveSnapshot, GameSnapshot};
