//! Collaborator seams: where samples come from and where pixels go.
//!
//! The desktop runner plugs in a keyboard tilt simulator and a terminal pixel
//! matrix; device firmware would plug in an accelerometer driver and an LED
//! panel. The only source shipped here replays a recorded script.

use crate::types::TiltSample;

/// Source of continuous tilt readings, polled once per tick
pub trait SensorSource {
    fn read_tilt(&mut self) -> TiltSample;
}

/// Indexed-colour pixel surface
pub trait DisplaySurface {
    type Error;

    /// Paint one pixel; coordinates outside the surface are ignored
    fn set_cell(&mut self, x: u16, y: u16, color: u8);

    /// Present everything painted since the last refresh
    fn refresh(&mut self) -> Result<(), Self::Error>;
}

/// Replays a fixed list of samples, then holds the last one (level if empty).
///
/// Used for replays and deterministic tests.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSensor {
    samples: Vec<TiltSample>,
    cursor: usize,
}

impl ScriptedSensor {
    pub fn new(samples: Vec<TiltSample>) -> Self {
        Self { samples, cursor: 0 }
    }
}

impl SensorSource for ScriptedSensor {
    fn read_tilt(&mut self) -> TiltSample {
        let Some(last) = self.samples.len().checked_sub(1) else {
            return TiltSample::level();
        };
        let sample = self.samples[self.cursor.min(last)];
        self.cursor = self.cursor.saturating_add(1);
        sample
    }
}
