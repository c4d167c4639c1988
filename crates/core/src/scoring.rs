//! Scoring module - cleared-line counter
//!
//! The device shows two digits, so a presentation value wraps modulo 100.
//! The counter itself is unbounded.

/// Presentation range of the score readout
pub const DISPLAY_MODULUS: u64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreTracker {
    lines: u64,
}

impl ScoreTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the lines cleared by one lock event
    pub fn add_lines(&mut self, n: u32) {
        self.lines = self.lines.saturating_add(n as u64);
    }

    /// Total lines cleared this session
    pub fn value(&self) -> u64 {
        self.lines
    }

    /// Two-digit readout, `value() % 100`
    pub fn display_value(&self) -> u8 {
        (self.lines % DISPLAY_MODULUS) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_lines_without_wrapping() {
        let mut score = ScoreTracker::new();
        score.add_lines(4);
        score.add_lines(0);
        score.add_lines(97);
        assert_eq!(score.value(), 101);
        assert_eq!(score.display_value(), 1);
    }
}
