//! Wall-clock frame timing.

use std::time::Instant;

/// Source of per-frame elapsed time.
///
/// [`delta`](Self::delta) returns the seconds since the previous call (or
/// since construction for the first call), which is exactly the `dt` the
/// solver expects: one reading per animation tick.
pub struct FrameClock {
    previous: Instant,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            previous: Instant::now(),
        }
    }

    /// Seconds elapsed since the previous call.
    pub fn delta(&mut self) -> f64 {
        let now = Instant::now();
        let dt = now.duration_since(self.previous).as_secs_f64();
        self.previous = now;
        dt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delta_is_non_negative_and_resets() {
        let mut clock = FrameClock::new();
        let first = clock.delta();
        let second = clock.delta();
        assert!(first >= 0.0);
        // The second reading measures only the gap between calls.
        assert!(second >= 0.0 && second < 1.0);
    }

    #[test]
    fn delta_tracks_sleep() {
        let mut clock = FrameClock::new();
        std::thread::sleep(std::time::Duration::from_millis(20));
        assert!(clock.delta() >= 0.02);
    }
}
