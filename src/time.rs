//! Fixed-timestep frame clock using an accumulator.
//!
//! `draw_web()` fires at ~60fps with a variable delta. FrameClock folds that
//! into a fixed number of discrete ticks per second so the loading-spinner
//! animation advances at a stable rate and stays testable without wall time.

pub struct FrameClock {
    /// Milliseconds per tick (e.g. 125ms = 8 ticks/sec).
    ms_per_tick: f64,
    /// Accumulated milliseconds not yet consumed as ticks.
    accumulator: f64,
    /// Timestamp of the last update (ms), None on the first frame.
    last_timestamp: Option<f64>,
}

impl FrameClock {
    pub fn new(ticks_per_sec: u32) -> Self {
        Self {
            ms_per_tick: 1000.0 / ticks_per_sec as f64,
            accumulator: 0.0,
            last_timestamp: None,
        }
    }

    /// Feed a wall-clock timestamp (from `performance.now()`); returns how
    /// many discrete ticks elapsed since the previous call.
    ///
    /// Deltas are clamped to 500ms so a backgrounded tab does not dump a
    /// burst of ticks on return.
    pub fn advance(&mut self, now_ms: f64) -> u32 {
        let delta = match self.last_timestamp {
            Some(prev) => (now_ms - prev).clamp(0.0, 500.0),
            None => 0.0,
        };
        self.last_timestamp = Some(now_ms);

        self.accumulator += delta;
        let ticks = (self.accumulator / self.ms_per_tick) as u32;
        self.accumulator -= ticks as f64 * self.ms_per_tick;
        ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_frame_yields_no_ticks() {
        let mut clock = FrameClock::new(8);
        assert_eq!(clock.advance(1234.5), 0);
    }

    #[test]
    fn one_tick_per_period() {
        let mut clock = FrameClock::new(8); // 125ms per tick
        clock.advance(0.0);
        assert_eq!(clock.advance(125.0), 1);
    }

    #[test]
    fn remainder_carries_between_frames() {
        let mut clock = FrameClock::new(8);
        clock.advance(0.0);
        assert_eq!(clock.advance(100.0), 0); // 100ms < 125ms
        assert_eq!(clock.advance(150.0), 1); // 100 + 50 = 150ms → 1 tick, 25ms left
        assert_eq!(clock.advance(250.0), 1); // 25 + 100 = 125ms → 1 tick
    }

    #[test]
    fn backgrounded_tab_delta_clamped() {
        let mut clock = FrameClock::new(8);
        clock.advance(0.0);
        // 30 seconds away → clamped to 500ms = 4 ticks
        assert_eq!(clock.advance(30_000.0), 4);
    }

    #[test]
    fn sixty_fps_approximates_tick_rate() {
        let mut clock = FrameClock::new(8);
        clock.advance(0.0);
        let mut total = 0;
        for frame in 1..=60 {
            total += clock.advance(frame as f64 * 16.667);
        }
        // One second of frames at 8 ticks/sec
        assert!((7..=9).contains(&total), "expected ~8 ticks, got {total}");
    }

    #[test]
    fn non_monotonic_timestamp_ignored() {
        let mut clock = FrameClock::new(8);
        clock.advance(1000.0);
        // Clock went backwards; clamp floor is 0ms, not a panic
        assert_eq!(clock.advance(800.0), 0);
    }
}
