//! Tilt mapper - continuous samples in, discrete actions out.
//!
//! Two independent rate limiters gate horizontal moves and rotations. All
//! time is passed in as milliseconds, so the mapper holds no clock of its
//! own and replays deterministically.
//!
//! Response curves, for a sample `(x, y, _)`:
//! - move: when `|x| > move_tilt_threshold`, step `sign(x) * floor((|x| / 2)^2)`
//!   columns. Bigger tilt means a bigger step, never a faster cadence.
//! - rotate: when `y < rotate_tilt_threshold`.
//! - fall interval: `max(min_fall, base - k * |y|)` once `y` exceeds the dead
//!   zone toward the player, `base` otherwise.

use arrayvec::ArrayVec;

use crate::config::GameConfig;
use crate::types::{TiltAction, TiltSample};

/// Minimum-interval gate for one action class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimiter {
    interval_ms: u32,
    last_ms: Option<u64>,
}

impl RateLimiter {
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms,
            last_ms: None,
        }
    }

    /// Would an action at `now_ms` be accepted? Does not consume the slot.
    pub fn ready(&self, now_ms: u64) -> bool {
        match self.last_ms {
            None => true,
            Some(last) => now_ms.saturating_sub(last) >= self.interval_ms as u64,
        }
    }

    /// Accept and record an action at `now_ms` if the interval has elapsed
    pub fn try_fire(&mut self, now_ms: u64) -> bool {
        if !self.ready(now_ms) {
            return false;
        }
        self.last_ms = Some(now_ms);
        true
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    pub fn last_ms(&self) -> Option<u64> {
        self.last_ms
    }
}

/// What one sample asks of the current tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TiltIntent {
    /// At most one shift and one rotation
    pub actions: ArrayVec<TiltAction, 2>,
    /// Interval the fall timer should use this tick
    pub fall_interval_ms: u32,
}

#[derive(Debug, Clone)]
pub struct InputMapper {
    move_limiter: RateLimiter,
    rotate_limiter: RateLimiter,
    move_threshold: f32,
    rotate_threshold: f32,
    fall_dead_zone: f32,
    fall_coefficient_ms: f32,
    base_fall_ms: u32,
    min_fall_ms: u32,
}

impl InputMapper {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            move_limiter: RateLimiter::new(config.move_rate_limit_ms),
            rotate_limiter: RateLimiter::new(config.rotate_rate_limit_ms),
            move_threshold: config.move_tilt_threshold,
            rotate_threshold: config.rotate_tilt_threshold,
            fall_dead_zone: config.fall_tilt_dead_zone,
            fall_coefficient_ms: config.tilt_fall_coefficient_ms,
            base_fall_ms: config.base_fall_ms,
            min_fall_ms: config.min_fall_ms,
        }
    }

    /// Map one sample taken at `now_ms`. A rotation, if any, comes first.
    pub fn map(&mut self, sample: TiltSample, now_ms: u64) -> TiltIntent {
        let mut actions = ArrayVec::new();
        if self.map_rotate(sample.y, now_ms) {
            actions.push(TiltAction::Rotate);
        }
        if let Some(step) = self.map_shift(sample.x, now_ms) {
            actions.push(TiltAction::Shift(step));
        }
        TiltIntent {
            actions,
            fall_interval_ms: self.fall_interval_ms(sample.y),
        }
    }

    /// Horizontal step for `x`, if one is due.
    ///
    /// A sample whose curve rounds to zero proposes nothing and leaves the
    /// limiter untouched.
    pub fn map_shift(&mut self, x: f32, now_ms: u64) -> Option<i16> {
        let step = shift_step(x, self.move_threshold);
        if step == 0 || !self.move_limiter.try_fire(now_ms) {
            return None;
        }
        Some(step)
    }

    /// Whether `y` triggers a rotation that the limiter lets through
    pub fn map_rotate(&mut self, y: f32, now_ms: u64) -> bool {
        y < self.rotate_threshold && self.rotate_limiter.try_fire(now_ms)
    }

    /// Fall interval for forward tilt `y`. Pure.
    pub fn fall_interval_ms(&self, y: f32) -> u32 {
        if y.is_nan() || y <= self.fall_dead_zone {
            return self.base_fall_ms;
        }
        let shortened = self.base_fall_ms as f32 - self.fall_coefficient_ms * y.abs();
        if shortened <= self.min_fall_ms as f32 {
            self.min_fall_ms
        } else {
            shortened as u32
        }
    }

    pub fn move_limiter(&self) -> &RateLimiter {
        &self.move_limiter
    }

    pub fn rotate_limiter(&self) -> &RateLimiter {
        &self.rotate_limiter
    }
}

/// `sign(x) * floor((|x| / 2)^2)` past the threshold, 0 inside it.
///
/// Non-finite samples map to 0 and the result saturates at the `i16` range.
pub fn shift_step(x: f32, threshold: f32) -> i16 {
    if !x.is_finite() || x.abs() <= threshold {
        return 0;
    }
    let half = x.abs() / 2.0;
    let magnitude = (half * half).floor().min(i16::MAX as f32) as i16;
    if x > 0.0 {
        magnitude
    } else {
        -magnitude
    }
}
