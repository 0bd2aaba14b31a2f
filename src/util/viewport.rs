// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Compact/wide layout detection.
//!
//! Window widths are observed every frame, but the layout only flips once a
//! resize has been quiet for the settle period.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct ViewportWatcher {
    breakpoint: f32,
    settle: Duration,
    width: Option<f32>,
    pending_since: Option<Instant>,
    is_mobile: bool,
}

impl ViewportWatcher {
    pub fn new(breakpoint: f32, settle: Duration) -> Self {
        Self {
            breakpoint,
            settle,
            width: None,
            pending_since: None,
            // Matches the original first render, before any measurement.
            is_mobile: true,
        }
    }

    pub fn is_mobile(&self) -> bool {
        self.is_mobile
    }

    /// Feed the current width. Returns the new layout when it flips.
    pub fn observe(&mut self, width: f32, now: Instant) -> Option<bool> {
        match self.width {
            None => {
                self.width = Some(width);
                return self.apply(width);
            }
            Some(previous) if (previous - width).abs() > f32::EPSILON => {
                self.width = Some(width);
                self.pending_since = Some(now);
                return None;
            }
            Some(_) => {}
        }

        let since = self.pending_since?;
        if now.saturating_duration_since(since) < self.settle {
            return None;
        }
        self.pending_since = None;
        self.apply(width)
    }

    /// Whether a resize is still waiting to settle.
    pub fn is_settling(&self) -> bool {
        self.pending_since.is_some()
    }

    fn apply(&mut self, width: f32) -> Option<bool> {
        let is_mobile = width < self.breakpoint;
        if is_mobile == self.is_mobile {
            return None;
        }
        log::info!(
            "Layout switched to {} ({:.0}pt wide)",
            if is_mobile { "compact" } else { "wide" },
            width
        );
        self.is_mobile = is_mobile;
        Some(is_mobile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SETTLE: Duration = Duration::from_millis(150);

    #[test]
    fn test_first_observation_applies_immediately() {
        let mut watcher = ViewportWatcher::new(768.0, SETTLE);
        assert_eq!(watcher.observe(1280.0, Instant::now()), Some(false));
        assert!(!watcher.is_mobile());
    }

    #[test]
    fn test_resize_waits_for_settle() {
        let start = Instant::now();
        let mut watcher = ViewportWatcher::new(768.0, SETTLE);
        watcher.observe(1280.0, start);

        assert_eq!(watcher.observe(700.0, start), None);
        assert_eq!(watcher.observe(600.0, start + Duration::from_millis(100)), None);
        assert_eq!(watcher.observe(600.0, start + Duration::from_millis(200)), None);
        assert!(watcher.is_settling());
        assert_eq!(watcher.observe(600.0, start + Duration::from_millis(260)), Some(true));
        assert!(watcher.is_mobile());
        assert!(!watcher.is_settling());
    }

    #[test]
    fn test_settled_resize_across_same_side_reports_nothing() {
        let start = Instant::now();
        let mut watcher = ViewportWatcher::new(768.0, SETTLE);
        watcher.observe(1280.0, start);
        watcher.observe(1000.0, start);
        assert_eq!(watcher.observe(1000.0, start + Duration::from_secs(1)), None);
    }
}
