//! Virtual Clock Module

// == Virtual Clock ==
/// Simulated "now" in seconds. Starts at 0 and never reads wall-clock time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VirtualClock {
    now: i64,
}

impl VirtualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual instant.
    pub fn now(&self) -> i64 {
        self.now
    }

    /// Moves the clock by `seconds`; negative values move it backward.
    pub fn advance(&mut self, seconds: i64) {
        self.now = self.now.saturating_add(seconds);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_starts_at_zero() {
        assert_eq!(VirtualClock::new().now(), 0);
    }

    #[test]
    fn test_clock_advances_both_ways() {
        let mut clock = VirtualClock::new();
        clock.advance(30);
        clock.advance(-5);
        assert_eq!(clock.now(), 25);
    }
}
