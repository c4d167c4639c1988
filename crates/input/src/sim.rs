//! Keyboard-driven stand-in for the accelerometer.
//!
//! Each key press tips the simulated device a little further; once keys stop
//! arriving the device eases back to level. Terminals that never emit key
//! release events are handled the same way, by a timeout after the last key.

use crossterm::event::KeyCode;

use crate::map::{map_key_code, TiltNudge};
use crate::types::TiltSample;
use tilt_tetris_core::SensorSource;

/// Tilt added per horizontal key press
const DEFAULT_STEP: f32 = 1.0;

/// Magnitude a held horizontal key starts from, so the first press already
/// crosses the move threshold
const DEFAULT_HORIZONTAL_KICK: f32 = 2.0;

/// Tilt set by a single press of the rotate key
const DEFAULT_AWAY_TILT: f32 = -4.0;

/// Largest tilt either axis can reach (one g on the reference sensor)
const MAX_TILT: f32 = 9.8;

/// Quiet time after the last key before easing back to level
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 150;

/// Tilt units removed per second while easing back
const DEFAULT_SETTLE_PER_SEC: f32 = 40.0;

#[derive(Debug, Clone)]
pub struct TiltSimulator {
    x: f32,
    y: f32,
    step: f32,
    horizontal_kick: f32,
    away_tilt: f32,
    settle_per_sec: f32,
    key_release_timeout_ms: u32,
    since_last_key_ms: u32,
}

impl TiltSimulator {
    pub fn new() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            step: DEFAULT_STEP,
            horizontal_kick: DEFAULT_HORIZONTAL_KICK,
            away_tilt: DEFAULT_AWAY_TILT,
            settle_per_sec: DEFAULT_SETTLE_PER_SEC,
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
            since_last_key_ms: 0,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    pub fn with_settle_per_sec(mut self, settle_per_sec: f32) -> Self {
        self.settle_per_sec = settle_per_sec;
        self
    }

    pub fn key_release_timeout_ms(&self) -> u32 {
        self.key_release_timeout_ms
    }

    /// Apply a key press. Returns the nudge if the key is a tilt key.
    pub fn handle_key_press(&mut self, code: KeyCode) -> Option<TiltNudge> {
        let nudge = map_key_code(code)?;
        self.apply(nudge);
        Some(nudge)
    }

    /// Key release events (where the terminal has them) start easing back at
    /// once.
    pub fn handle_key_release(&mut self, code: KeyCode) {
        if map_key_code(code).is_some() {
            self.since_last_key_ms = self.key_release_timeout_ms;
        }
    }

    pub fn apply(&mut self, nudge: TiltNudge) {
        self.since_last_key_ms = 0;
        match nudge {
            TiltNudge::Left => self.x = push(self.x, -1.0, self.step, self.horizontal_kick),
            TiltNudge::Right => self.x = push(self.x, 1.0, self.step, self.horizontal_kick),
            TiltNudge::Toward => self.y = push(self.y, 1.0, self.step, 0.0),
            TiltNudge::Away => self.y = self.away_tilt,
            TiltNudge::Level => {
                self.x = 0.0;
                self.y = 0.0;
            }
        }
    }

    /// Advance simulated time; eases back to level once keys go quiet.
    pub fn update(&mut self, elapsed_ms: u32) {
        self.since_last_key_ms = self.since_last_key_ms.saturating_add(elapsed_ms);
        if self.since_last_key_ms <= self.key_release_timeout_ms {
            return;
        }
        let settle = self.settle_per_sec * elapsed_ms as f32 / 1000.0;
        self.x = toward_zero(self.x, settle);
        self.y = toward_zero(self.y, settle);
    }

    pub fn sample(&self) -> TiltSample {
        TiltSample::new(self.x, self.y, 0.0)
    }
}

impl Default for TiltSimulator {
    fn default() -> Self {
        Self::new()
    }
}

impl SensorSource for TiltSimulator {
    fn read_tilt(&mut self) -> TiltSample {
        self.sample()
    }
}

/// Push `value` one `step` further in `dir`. Reversing direction restarts
/// from `kick` on the new side.
fn push(value: f32, dir: f32, step: f32, kick: f32) -> f32 {
    let next = if value * dir <= 0.0 {
        dir * kick.max(step)
    } else {
        value + dir * step
    };
    next.clamp(-MAX_TILT, MAX_TILT)
}

fn toward_zero(value: f32, amount: f32) -> f32 {
    if value.abs() <= amount {
        0.0
    } else {
        value - amount * value.signum()
    }
}
