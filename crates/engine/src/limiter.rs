//! Fixed-rate frame pacing.

use std::time::{Duration, Instant};

/// Sleeps off whatever is left of the frame interval.
///
/// A frame that overran its budget starts the next one immediately; the
/// limiter never tries to catch up on lost time.
#[derive(Debug, Clone)]
pub struct FrameLimiter {
    interval: Duration,
    frame_start: Instant,
}

impl FrameLimiter {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            frame_start: Instant::now(),
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Time left in the current frame.
    pub fn remaining(&self) -> Duration {
        self.interval.saturating_sub(self.frame_start.elapsed())
    }

    /// Block until the current frame interval is over, then start a new one.
    pub fn wait(&mut self) {
        let remaining = self.remaining();
        if !remaining.is_zero() {
            std::thread::sleep(remaining);
        }
        self.frame_start = Instant::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_interval_never_sleeps() {
        let mut limiter = FrameLimiter::new(Duration::ZERO);
        let start = Instant::now();
        for _ in 0..1000 {
            limiter.wait();
        }
        assert!(start.elapsed() < Duration::from_secs(1));
    }

    #[test]
    fn wait_covers_the_interval() {
        let start = Instant::now();
        let mut limiter = FrameLimiter::new(Duration::from_millis(5));
        limiter.wait();
        limiter.wait();
        assert!(start.elapsed() >= Duration::from_millis(10));
    }

    #[test]
    fn overrun_frame_has_nothing_remaining() {
        let mut limiter = FrameLimiter::new(Duration::from_millis(1));
        limiter.frame_start = Instant::now() - Duration::from_millis(50);
        assert_eq!(limiter.remaining(), Duration::ZERO);
    }
}
