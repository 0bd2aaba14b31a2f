// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Active-section tracking for navigation highlighting.
//!
//! Each frame the page reports where its sections were laid out and how far
//! it is scrolled; the tracker picks the section under the lookahead point.

/// Page sections in document order, as `(id, menu label)`.
pub const NAV_SECTIONS: [(&str, &str); 8] = [
    ("intro", "Intro"),
    ("music", "Music"),
    ("gallery", "Gallery"),
    ("tour", "Tour"),
    ("sets", "Sets"),
    ("journal", "Journal"),
    ("connect", "Connect"),
    ("contact", "Contact"),
];

/// Vertical extent of one section, relative to the top of the page.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub name: String,
    pub top: f32,
    pub height: f32,
}

impl SectionBounds {
    pub fn new(name: impl Into<String>, top: f32, height: f32) -> Self {
        Self {
            name: name.into(),
            top,
            height,
        }
    }

    fn contains(&self, position: f32) -> bool {
        position >= self.top && position < self.top + self.height
    }
}

#[derive(Debug, Clone)]
pub struct SectionTracker {
    sections: Vec<SectionBounds>,
    lookahead: f32,
    active: String,
    last_frame: Option<u64>,
}

impl SectionTracker {
    pub fn new(initial: impl Into<String>, lookahead: f32) -> Self {
        Self {
            sections: Vec::new(),
            lookahead,
            active: initial.into(),
            last_frame: None,
        }
    }

    /// Replace the measured layout. Order must follow the document.
    pub fn set_layout(&mut self, sections: Vec<SectionBounds>) {
        self.sections = sections;
    }

    pub fn active(&self) -> &str {
        &self.active
    }

    pub fn is_active(&self, name: &str) -> bool {
        self.active == name
    }

    pub fn top_of(&self, name: &str) -> Option<f32> {
        self.sections
            .iter()
            .find(|section| section.name == name)
            .map(|section| section.top)
    }

    /// Recompute the active section for a scroll `offset`.
    ///
    /// Only the first sample of each `frame` is evaluated. Returns true when
    /// the active section changed.
    pub fn sample(&mut self, frame: u64, offset: f32) -> bool {
        if self.last_frame == Some(frame) {
            return false;
        }
        self.last_frame = Some(frame);
        self.update(offset)
    }

    fn update(&mut self, offset: f32) -> bool {
        let position = offset + self.lookahead;
        // Overlapping sections resolve to the first listed.
        let Some(found) = self.sections.iter().find(|s| s.contains(position)) else {
            return false;
        };
        if found.name == self.active {
            return false;
        }
        log::debug!("Active section: {} -> {}", self.active, found.name);
        self.active = found.name.clone();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_sections() -> SectionTracker {
        let mut tracker = SectionTracker::new("intro", 0.0);
        tracker.set_layout(vec![
            SectionBounds::new("intro", 0.0, 500.0),
            SectionBounds::new("music", 500.0, 800.0),
            SectionBounds::new("gallery", 1300.0, 600.0),
        ]);
        tracker
    }

    #[test]
    fn test_position_inside_second_section() {
        let mut tracker = three_sections();
        assert!(tracker.sample(1, 500.0 + 5.0));
        assert_eq!(tracker.active(), "music");
    }

    #[test]
    fn test_lookahead_marks_section_early() {
        let mut tracker = SectionTracker::new("intro", 200.0);
        tracker.set_layout(three_sections().sections);
        tracker.sample(1, 310.0);
        assert_eq!(tracker.active(), "music");
    }

    #[test]
    fn test_range_is_half_open() {
        let mut tracker = three_sections();
        tracker.sample(1, 1300.0);
        assert_eq!(tracker.active(), "gallery");
        tracker.sample(2, 1299.5);
        assert_eq!(tracker.active(), "music");
    }

    #[test]
    fn test_no_match_retains_previous() {
        let mut tracker = three_sections();
        tracker.sample(1, 1400.0);
        assert!(!tracker.sample(2, 5000.0));
        assert_eq!(tracker.active(), "gallery");
        assert!(!tracker.sample(3, -50.0));
        assert_eq!(tracker.active(), "gallery");
    }

    #[test]
    fn test_one_sample_per_frame() {
        let mut tracker = three_sections();
        tracker.sample(7, 10.0);
        assert!(!tracker.sample(7, 600.0));
        assert_eq!(tracker.active(), "intro");
        assert!(tracker.sample(8, 600.0));
        assert_eq!(tracker.active(), "music");
    }

    #[test]
    fn test_overlap_prefers_first_listed() {
        let mut tracker = SectionTracker::new("a", 0.0);
        tracker.set_layout(vec![
            SectionBounds::new("a", 0.0, 100.0),
            SectionBounds::new("b", 50.0, 100.0),
        ]);
        tracker.sample(1, 75.0);
        assert_eq!(tracker.active(), "a");
    }

    #[test]
    fn test_top_of() {
        let tracker = three_sections();
        assert_eq!(tracker.top_of("gallery"), Some(1300.0));
        assert_eq!(tracker.top_of("tour"), None);
    }
}
