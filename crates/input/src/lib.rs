//! Terminal input module (sensor-facing).
//!
//! The game only understands tilt. On a desktop there is no accelerometer, so
//! this crate maps `crossterm` key events onto a simulated device attitude and
//! exposes it through the core's [`tilt_tetris_core::SensorSource`] seam. The
//! tilt mapper then treats it exactly like a real sensor.

pub mod map;
pub mod sim;

pub use tilt_tetris_types as types;

pub use map::{handle_key_event, should_quit, TiltNudge};
pub use sim::TiltSimulator;
