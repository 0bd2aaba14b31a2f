// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Tunable presentation constants.
//!
//! These are read from the `settings` block of a content file. Any field
//! left out keeps its default.

use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Distance below the scroll offset at which a section counts as reached.
    pub lookahead_offset: f32,
    /// Viewport width below which the compact layout is used.
    pub mobile_breakpoint: f32,
    /// Quiet period after the last resize before layout is recomputed.
    pub resize_settle_ms: u64,
    /// Length of an animated jump to a section, in seconds.
    pub scroll_duration: f32,
    /// Added to a section's top when jumping to it.
    pub scroll_offset: f32,
    /// How long the contact form shows its confirmation.
    pub contact_reset_secs: u64,
    pub lightbox_fade_secs: f32,
    /// Fade-in of a tour slide after moving to it.
    pub tour_fade_secs: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            lookahead_offset: 200.0,
            mobile_breakpoint: 768.0,
            resize_settle_ms: 150,
            scroll_duration: 1.5,
            scroll_offset: -100.0,
            contact_reset_secs: 3,
            lightbox_fade_secs: 0.4,
            tour_fade_secs: 1.2,
        }
    }
}

impl Settings {
    pub fn resize_settle(&self) -> Duration {
        Duration::from_millis(self.resize_settle_ms)
    }

    pub fn contact_reset(&self) -> Duration {
        Duration::from_secs(self.contact_reset_secs)
    }

    pub fn scroll_duration(&self) -> Duration {
        seconds(self.scroll_duration, Self::default().scroll_duration)
    }

    pub fn lightbox_fade(&self) -> Duration {
        seconds(self.lightbox_fade_secs, Self::default().lightbox_fade_secs)
    }

    pub fn tour_fade(&self) -> Duration {
        seconds(self.tour_fade_secs, Self::default().tour_fade_secs)
    }
}

/// Negative, NaN or overflowing values fall back to `default`.
fn seconds(value: f32, default: f32) -> Duration {
    Duration::try_from_secs_f32(value).unwrap_or_else(|_| {
        log::warn!("Ignoring invalid duration {} s, using {} s", value, default);
        Duration::from_secs_f32(default)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_settings_keep_defaults() {
        let settings: Settings = serde_yaml::from_str("lookahead_offset: 120.0\n").unwrap();
        assert_eq!(settings.lookahead_offset, 120.0);
        assert_eq!(settings.mobile_breakpoint, 768.0);
        assert_eq!(settings.contact_reset(), Duration::from_secs(3));
        assert_eq!(settings.tour_fade(), Duration::from_secs_f32(1.2));
    }

    #[test]
    fn test_unusable_durations_fall_back_to_defaults() {
        let yaml = "scroll_duration: .inf\nlightbox_fade_secs: 1.0e30\ntour_fade_secs: -2.0\n";
        let settings: Settings = serde_yaml::from_str(yaml).unwrap();
        let defaults = Settings::default();

        assert_eq!(settings.scroll_duration(), defaults.scroll_duration());
        assert_eq!(settings.lightbox_fade(), defaults.lightbox_fade());
        assert_eq!(settings.tour_fade(), defaults.tour_fade());

        let nan = Settings {
            scroll_duration: f32::NAN,
            ..Settings::default()
        };
        assert_eq!(nan.scroll_duration(), Duration::from_secs_f32(1.5));
    }

    #[test]
    fn test_zero_duration_is_kept() {
        let settings = Settings {
            lightbox_fade_secs: 0.0,
            ..Settings::default()
        };
        assert_eq!(settings.lightbox_fade(), Duration::ZERO);
    }
}
