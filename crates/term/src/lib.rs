//! Terminal display module.
//!
//! The game draws onto a small indexed-colour pixel matrix, the same way it
//! would drive an LED panel. This crate owns that matrix, lays the game out
//! on it, and flushes it to a terminal with crossterm.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep layout pure so it can be checked pixel by pixel
//! - Two terminal columns per pixel to keep pixels roughly square

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tilt_tetris_core as core;
pub use tilt_tetris_types as types;

pub use fb::{Palette, PixelMatrix, Rgb, MATRIX_SIZE};
pub use game_view::GameView;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
