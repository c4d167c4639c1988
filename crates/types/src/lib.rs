//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no behaviour beyond parsing and small helpers,
//! making them usable from the core state machine, the tilt mapper and any
//! renderer alike.
//!
//! # Board Dimensions
//!
//! The reference device is a 32x32 pixel matrix with a 10x20 playfield in the
//! middle of it. Dimensions are construction-time parameters; the constants
//! below are only the defaults.
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BASE_FALL_MS` | 1000 | Fall interval when the device is level |
//! | `TILT_FALL_COEFFICIENT_MS` | 100 | Interval shaved off per unit of tilt |
//! | `MIN_FALL_MS` | 100 | Floor for the fall interval |
//! | `MOVE_RATE_LIMIT_MS` | 20 | Minimum gap between horizontal moves |
//! | `ROTATE_RATE_LIMIT_MS` | 500 | Minimum gap between rotations |
//! | `LINE_FLASH_MS` | 250 | Hold time of one line-clear flash frame |
//! | `WIPE_ROW_MS` | 100 | Hold time of one game-over wipe frame |
//!
//! # Examples
//!
//! ```
//! use tilt_tetris_types::{PieceKind, TiltSample, BOARD_WIDTH, BOARD_HEIGHT};
//!
//! let parsed = PieceKind::from_str("t").unwrap();
//! assert_eq!(parsed, PieceKind::T);
//!
//! let level = TiltSample::level();
//! assert_eq!(level.x, 0.0);
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Default playfield width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Default playfield height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Largest width or height accepted for a playfield
pub const MAX_BOARD_DIMENSION: u8 = 64;

/// Fall interval when the device is held level (1 row per second)
pub const BASE_FALL_MS: u32 = 1000;

/// Milliseconds removed from the fall interval per unit of forward tilt
pub const TILT_FALL_COEFFICIENT_MS: f32 = 100.0;

/// The fall interval never drops below this
pub const MIN_FALL_MS: u32 = 100;

/// Tilt magnitude on the y axis below which fall speed is not modulated
pub const FALL_TILT_DEAD_ZONE: f32 = 5.0;

/// Minimum interval between accepted horizontal moves
pub const MOVE_RATE_LIMIT_MS: u32 = 20;

/// Minimum interval between accepted rotations
pub const ROTATE_RATE_LIMIT_MS: u32 = 500;

/// |x| must exceed this before a horizontal move is considered
pub const MOVE_TILT_THRESHOLD: f32 = 1.5;

/// y must fall below this (tilt away from the player) to rotate
pub const ROTATE_TILT_THRESHOLD: f32 = -3.0;

/// Hold time of one line-clear flash frame
pub const LINE_FLASH_MS: u32 = 250;

/// Hold time of one row of the game-over wipe
pub const WIPE_ROW_MS: u32 = 100;

/// Palette index: background
pub const COLOR_BACKGROUND: u8 = 0;

/// Palette index: bezel around the playfield, also the line-clear flash
pub const COLOR_BEZEL: u8 = 1;

/// Palette index: falling piece and next-piece preview
pub const COLOR_ACTIVE: u8 = 2;

/// Palette index: locked cells
pub const COLOR_LOCKED: u8 = 3;


/// The seven tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// Every kind, in catalog order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tilt_tetris_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::J => "j",
            PieceKind::L => "l",
        }
    }

    /// Position in [`PieceKind::ALL`]
    pub fn index(&self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::O => 1,
            PieceKind::T => 2,
            PieceKind::S => 3,
            PieceKind::Z => 4,
            PieceKind::J => 5,
            PieceKind::L => 6,
        }
    }
}

/// A cell on the playfield
///
/// The falling piece is never written into the grid; a cell becomes
/// `Filled` only when a piece locks over it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Filled,
}

impl Cell {
    pub fn is_filled(&self) -> bool {
        matches!(self, Cell::Filled)
    }
}

/// One accelerometer reading.
///
/// No units are asserted beyond sign and relative magnitude. On the reference
/// device `x` is left/right tilt and `y` is toward/away from the player
/// (negative means the top edge dips away).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TiltSample {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl TiltSample {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Device lying flat.
    pub const fn level() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }
}

/// Discrete actions proposed by the tilt mapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TiltAction {
    /// Shift horizontally by this many columns (negative is left)
    Shift(i16),
    /// Advance to the next rotation state
    Rotate,
}

/// Phase of the per-tick state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GamePhase {
    /// A new piece is being placed at the top of the playfield
    Spawning,
    /// The live piece responds to tilt and the fall timer
    Falling,
    /// The live piece is being written into the grid
    Locking,
    /// Full rows are being flashed and compacted
    Clearing,
    /// Terminal; the session takes no further input
    GameOver,
}

impl GamePhase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, GamePhase::GameOver)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::Spawning => "spawning",
            GamePhase::Falling => "falling",
            GamePhase::Locking => "locking",
            GamePhase::Clearing => "clearing",
            GamePhase::GameOver => "game_over",
        }
    }
}
