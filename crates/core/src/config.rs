//! Session configuration record and its construction-time validation.
//!
//! Everything the state machine and the tilt mapper need is fixed here when a
//! session starts. A bad record is rejected once, before any tick runs.

use std::fmt;

use crate::pieces::{MAX_PIECE_HEIGHT, MAX_PIECE_WIDTH};
use crate::types::{
    BASE_FALL_MS, BOARD_HEIGHT, BOARD_WIDTH, FALL_TILT_DEAD_ZONE, LINE_FLASH_MS,
    MAX_BOARD_DIMENSION, MIN_FALL_MS, MOVE_RATE_LIMIT_MS, MOVE_TILT_THRESHOLD,
    ROTATE_RATE_LIMIT_MS, ROTATE_TILT_THRESHOLD, TILT_FALL_COEFFICIENT_MS, WIPE_ROW_MS,
};

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Playfield columns
    pub width: u8,
    /// Playfield rows
    pub height: u8,
    /// Fall interval with the device level
    pub base_fall_ms: u32,
    /// Interval removed per unit of forward tilt
    pub tilt_fall_coefficient_ms: f32,
    /// Floor for the tilt-shortened fall interval
    pub min_fall_ms: u32,
    /// Forward tilt must exceed this before fall speed changes
    pub fall_tilt_dead_zone: f32,
    pub move_rate_limit_ms: u32,
    pub rotate_rate_limit_ms: u32,
    /// |x| must exceed this for a horizontal move
    pub move_tilt_threshold: f32,
    /// y must fall below this (negative) for a rotation
    pub rotate_tilt_threshold: f32,
    /// Hold time of each line-clear flash frame
    pub line_flash_ms: u32,
    /// Hold time of each game-over wipe frame
    pub wipe_row_ms: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            base_fall_ms: BASE_FALL_MS,
            tilt_fall_coefficient_ms: TILT_FALL_COEFFICIENT_MS,
            min_fall_ms: MIN_FALL_MS,
            fall_tilt_dead_zone: FALL_TILT_DEAD_ZONE,
            move_rate_limit_ms: MOVE_RATE_LIMIT_MS,
            rotate_rate_limit_ms: ROTATE_RATE_LIMIT_MS,
            move_tilt_threshold: MOVE_TILT_THRESHOLD,
            rotate_tilt_threshold: ROTATE_TILT_THRESHOLD,
            line_flash_ms: LINE_FLASH_MS,
            wipe_row_ms: WIPE_ROW_MS,
        }
    }
}

impl GameConfig {
    /// Same defaults on a different playfield
    pub fn with_board(width: u8, height: u8) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Check every precondition the controller relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyBoard {
                width: self.width,
                height: self.height,
            });
        }
        if self.width > MAX_BOARD_DIMENSION || self.height > MAX_BOARD_DIMENSION {
            return Err(ConfigError::BoardTooLarge {
                width: self.width,
                height: self.height,
            });
        }
        if self.width < MAX_PIECE_WIDTH {
            return Err(ConfigError::BoardTooNarrow { width: self.width });
        }
        if self.height < MAX_PIECE_HEIGHT {
            return Err(ConfigError::BoardTooShort {
                height: self.height,
            });
        }
        if self.base_fall_ms == 0 {
            return Err(ConfigError::ZeroFallInterval);
        }
        if self.min_fall_ms > self.base_fall_ms {
            return Err(ConfigError::FallFloorAboveBase {
                min_fall_ms: self.min_fall_ms,
                base_fall_ms: self.base_fall_ms,
            });
        }
        for (name, value) in [
            ("tilt_fall_coefficient_ms", self.tilt_fall_coefficient_ms),
            ("fall_tilt_dead_zone", self.fall_tilt_dead_zone),
            ("move_tilt_threshold", self.move_tilt_threshold),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::BadTuning { name, value });
            }
        }
        if !self.rotate_tilt_threshold.is_finite() || self.rotate_tilt_threshold >= 0.0 {
            return Err(ConfigError::BadTuning {
                name: "rotate_tilt_threshold",
                value: self.rotate_tilt_threshold,
            });
        }
        Ok(())
    }
}

/// Reasons a configuration record is refused
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    EmptyBoard { width: u8, height: u8 },
    BoardTooLarge { width: u8, height: u8 },
    /// Narrower than the widest piece, so spawn cannot be centred
    BoardTooNarrow { width: u8 },
    BoardTooShort { height: u8 },
    ZeroFallInterval,
    FallFloorAboveBase { min_fall_ms: u32, base_fall_ms: u32 },
    BadTuning { name: &'static str, value: f32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyBoard { width, height } => {
                write!(f, "board must be non-empty, got {}x{}", width, height)
            }
            ConfigError::BoardTooLarge { width, height } => write!(
                f,
                "board {}x{} exceeds the {} cell limit",
                width, height, MAX_BOARD_DIMENSION
            ),
            ConfigError::BoardTooNarrow { width } => write!(
                f,
                "board width {} cannot fit a {}-wide piece",
                width, MAX_PIECE_WIDTH
            ),
            ConfigError::BoardTooShort { height } => write!(
                f,
                "board height {} cannot fit a {}-tall piece",
                height, MAX_PIECE_HEIGHT
            ),
            ConfigError::ZeroFallInterval => write!(f, "base_fall_ms must be positive"),
            ConfigError::FallFloorAboveBase {
                min_fall_ms,
                base_fall_ms,
            } => write!(
                f,
                "min_fall_ms {} is above base_fall_ms {}",
                min_fall_ms, base_fall_ms
            ),
            ConfigError::BadTuning { name, value } => {
                write!(f, "{} has an unusable value {}", name, value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
