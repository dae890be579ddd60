//! Time management utilities

use std::time::{Duration, Instant};

/// Fixed-rate render scheduler
///
/// Accumulates wall-clock time and reports how many whole ticks are due.
/// Ticks drive re-rendering only; nothing in the collision pipeline runs here.
#[derive(Debug, Clone)]
pub struct FrameTicker {
    tick_interval: Duration,
    accumulator: Duration,
    tick_count: u64,
    max_ticks_per_advance: u32,
}

impl FrameTicker {
    /// Create a ticker for the given rate (ticks per second, at least 1)
    pub fn new(ticks_per_second: u32) -> Self {
        let rate = ticks_per_second.max(1);
        Self {
            tick_interval: Duration::from_secs(1) / rate,
            accumulator: Duration::ZERO,
            tick_count: 0,
            max_ticks_per_advance: 8,
        }
    }

    /// Advance by `elapsed` and return the number of ticks now due
    ///
    /// Backlog beyond a few ticks is dropped so a stalled host does not
    /// trigger a burst of redundant renders.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        self.accumulator += elapsed;
        let mut due = 0;
        while self.accumulator >= self.tick_interval {
            self.accumulator -= self.tick_interval;
            due += 1;
            if due == self.max_ticks_per_advance {
                self.accumulator = Duration::ZERO;
                break;
            }
        }
        self.tick_count += u64::from(due);
        due
    }

    /// Interval between two ticks
    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    /// Total ticks produced so far
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }
}

/// Simple stopwatch for measuring elapsed time
pub struct Stopwatch {
    last: Instant,
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::new()
    }
}

impl Stopwatch {
    /// Create a stopwatch started now
    pub fn new() -> Self {
        Self { last: Instant::now() }
    }

    /// Time since the previous lap (or creation), restarting the lap
    pub fn lap(&mut self) -> Duration {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last);
        self.last = now;
        elapsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticker_accumulates_partial_frames() {
        let mut ticker = FrameTicker::new(10);
        assert_eq!(ticker.advance(Duration::from_millis(50)), 0);
        assert_eq!(ticker.advance(Duration::from_millis(50)), 1);
        assert_eq!(ticker.advance(Duration::from_millis(250)), 2);
        assert_eq!(ticker.tick_count(), 3);
    }

    #[test]
    fn test_ticker_drops_large_backlog() {
        let mut ticker = FrameTicker::new(60);
        assert_eq!(ticker.advance(Duration::from_secs(5)), 8);
        assert_eq!(ticker.advance(Duration::ZERO), 0);
    }

    #[test]
    fn test_zero_rate_is_clamped() {
        let ticker = FrameTicker::new(0);
        assert_eq!(ticker.tick_interval(), Duration::from_secs(1));
    }
}
