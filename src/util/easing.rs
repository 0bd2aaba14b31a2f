// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Animated scrolling between page sections.

use std::time::{Duration, Instant};

/// Exponential ease-out, clamped to 1.0.
pub fn ease_out_expo(t: f32) -> f32 {
    (1.001 - 2f32.powf(-10.0 * t)).min(1.0)
}

#[derive(Debug, Clone, Copy)]
pub struct ScrollAnimation {
    from: f32,
    to: f32,
    started: Instant,
    duration: Duration,
}

impl ScrollAnimation {
    pub fn new(from: f32, to: f32, started: Instant, duration: Duration) -> Self {
        Self {
            from,
            to,
            started,
            duration,
        }
    }

    /// Scroll offset to show at `now`.
    pub fn offset(&self, now: Instant) -> f32 {
        if self.is_finished(now) {
            return self.to;
        }
        let t = now.saturating_duration_since(self.started).as_secs_f32() / self.duration.as_secs_f32();
        self.from + (self.to - self.from) * ease_out_expo(t)
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_endpoints() {
        assert!(ease_out_expo(0.0).abs() < 0.01);
        assert_eq!(ease_out_expo(1.0), 1.0);
        assert!(ease_out_expo(0.5) > 0.9);
    }

    #[test]
    fn test_animation_reaches_target() {
        let start = Instant::now();
        let anim = ScrollAnimation::new(0.0, 1000.0, start, Duration::from_millis(1500));

        assert!(anim.offset(start) < 10.0);
        let mid = anim.offset(start + Duration::from_millis(300));
        assert!(mid > 500.0 && mid < 1000.0);
        assert!(!anim.is_finished(start + Duration::from_millis(300)));

        let end = start + Duration::from_millis(1500);
        assert!(anim.is_finished(end));
        assert_eq!(anim.offset(end), 1000.0);
    }

    #[test]
    fn test_zero_duration_jumps() {
        let start = Instant::now();
        let anim = ScrollAnimation::new(400.0, 0.0, start, Duration::ZERO);
        assert_eq!(anim.offset(start), 0.0);
    }
}
