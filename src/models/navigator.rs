// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Index-based carousel state.
//!
//! A [`Navigator`] tracks which item of an ordered list is currently shown,
//! with wrap-around stepping. The gallery lightbox and the tour slider both
//! use it. Invalid calls (empty list, out-of-range index, stepping while
//! closed) leave the state untouched.

use std::time::{Duration, Instant};

/// Keyboard inputs understood by a navigator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Escape,
    ArrowLeft,
    ArrowRight,
}

#[derive(Debug, Clone, PartialEq)]
enum NavState<T> {
    Closed,
    Open { items: Vec<T>, index: usize },
}

/// Snapshot of a navigator's generation, taken when a visual transition starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Clone, PartialEq)]
pub struct Navigator<T> {
    state: NavState<T>,
    generation: u64,
}

impl<T> Default for Navigator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Navigator<T> {
    /// Create a closed navigator.
    pub fn new() -> Self {
        Self {
            state: NavState::Closed,
            generation: 0,
        }
    }

    /// Bind `items` and show the one at `index`.
    pub fn open(&mut self, items: Vec<T>, index: usize) {
        if items.is_empty() {
            log::debug!("Ignoring open on an empty list");
            return;
        }
        if index >= items.len() {
            log::debug!("Ignoring open at {} for {} items", index, items.len());
            return;
        }
        self.state = NavState::Open { items, index };
        self.generation += 1;
    }

    /// Close and release the bound list. Closing twice is harmless.
    pub fn close(&mut self) {
        if matches!(self.state, NavState::Open { .. }) {
            self.state = NavState::Closed;
            self.generation += 1;
        }
    }

    pub fn next(&mut self) {
        self.step(|index, len| (index + 1) % len);
    }

    pub fn previous(&mut self) {
        self.step(|index, len| (index + len - 1) % len);
    }

    /// Jump directly to `target`. Out-of-range targets are ignored.
    pub fn go_to(&mut self, target: usize) {
        match &mut self.state {
            NavState::Open { items, index } if target < items.len() => {
                if *index != target {
                    *index = target;
                    self.generation += 1;
                }
            }
            NavState::Open { items, .. } => {
                log::debug!("Ignoring go_to({}) for {} items", target, items.len());
            }
            NavState::Closed => {}
        }
    }

    /// Apply a keyboard input.
    pub fn handle(&mut self, key: NavKey) {
        match key {
            NavKey::Escape => self.close(),
            NavKey::ArrowLeft => self.previous(),
            NavKey::ArrowRight => self.next(),
        }
    }

    fn step(&mut self, advance: impl Fn(usize, usize) -> usize) {
        if let NavState::Open { items, index } = &mut self.state {
            let len = items.len();
            if len > 1 {
                *index = advance(*index, len);
                self.generation += 1;
            }
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, NavState::Open { .. })
    }

    pub fn index(&self) -> Option<usize> {
        match &self.state {
            NavState::Open { index, .. } => Some(*index),
            NavState::Closed => None,
        }
    }

    pub fn current(&self) -> Option<&T> {
        match &self.state {
            NavState::Open { items, index } => items.get(*index),
            NavState::Closed => None,
        }
    }

    /// The bound list; empty while closed.
    pub fn items(&self) -> &[T] {
        match &self.state {
            NavState::Open { items, .. } => items,
            NavState::Closed => &[],
        }
    }

    pub fn len(&self) -> usize {
        self.items().len()
    }

    pub fn ticket(&self) -> Ticket {
        Ticket(self.generation)
    }

    /// Whether nothing has changed since `ticket` was taken.
    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.generation == ticket.0
    }
}

/// A timed visual transition bound to one navigator state.
///
/// Once the navigator moves on, the transition reports no progress, so a
/// fade started for an old image can never be applied to a newer state.
#[derive(Debug, Clone, Copy)]
pub struct Transition {
    ticket: Ticket,
    started: Instant,
    duration: Duration,
}

impl Transition {
    pub fn start<T>(navigator: &Navigator<T>, now: Instant, duration: Duration) -> Self {
        Self {
            ticket: navigator.ticket(),
            started: now,
            duration,
        }
    }

    /// Completion in `0.0..=1.0`, or `None` if the navigator has moved on.
    pub fn progress<T>(&self, navigator: &Navigator<T>, now: Instant) -> Option<f32> {
        if !navigator.is_current(self.ticket) {
            return None;
        }
        if self.duration.is_zero() {
            return Some(1.0);
        }
        let elapsed = now.saturating_duration_since(self.started).as_secs_f32();
        Some((elapsed / self.duration.as_secs_f32()).min(1.0))
    }

    pub fn is_stale<T>(&self, navigator: &Navigator<T>) -> bool {
        !navigator.is_current(self.ticket)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opened(len: usize, index: usize) -> Navigator<usize> {
        let mut nav = Navigator::new();
        nav.open((0..len).collect(), index);
        nav
    }

    #[test]
    fn test_next_cycles_back_to_start() {
        for len in 1..6 {
            for start in 0..len {
                let mut nav = opened(len, start);
                for _ in 0..len {
                    nav.next();
                }
                assert_eq!(nav.index(), Some(start));
            }
        }
    }

    #[test]
    fn test_previous_undoes_next() {
        for start in 0..5 {
            let mut nav = opened(5, start);
            nav.next();
            nav.previous();
            assert_eq!(nav.index(), Some(start));
        }
    }

    #[test]
    fn test_lightbox_wraps_both_ways() {
        let mut nav = opened(4, 0);
        nav.previous();
        assert_eq!(nav.index(), Some(3));
        nav.next();
        assert_eq!(nav.index(), Some(0));
    }

    #[test]
    fn test_close_after_navigation() {
        let mut nav = opened(4, 1);
        nav.next();
        nav.next();
        nav.previous();
        nav.close();
        assert!(!nav.is_open());
        assert_eq!(nav.index(), None);
        assert!(nav.items().is_empty());

        nav.close();
        assert!(!nav.is_open());
    }

    #[test]
    fn test_go_to_out_of_range_is_ignored() {
        let mut nav = opened(3, 1);
        nav.go_to(3);
        assert_eq!(nav.index(), Some(1));
        nav.go_to(usize::MAX);
        assert_eq!(nav.index(), Some(1));
        nav.go_to(2);
        assert_eq!(nav.index(), Some(2));
    }

    #[test]
    fn test_open_rejects_invalid_input() {
        let mut nav: Navigator<u8> = Navigator::new();
        nav.open(Vec::new(), 0);
        assert!(!nav.is_open());

        nav.open(vec![1, 2], 2);
        assert!(!nav.is_open());
        assert_eq!(nav.current(), None);
    }

    #[test]
    fn test_single_item_stepping_is_noop() {
        let mut nav = opened(1, 0);
        let ticket = nav.ticket();
        nav.next();
        nav.previous();
        assert_eq!(nav.index(), Some(0));
        assert!(nav.is_current(ticket));
    }

    #[test]
    fn test_stepping_while_closed_is_noop() {
        let mut nav: Navigator<u8> = Navigator::new();
        nav.next();
        nav.previous();
        nav.go_to(0);
        assert_eq!(nav.index(), None);
    }

    #[test]
    fn test_keys_map_to_operations() {
        let mut nav = opened(3, 0);
        nav.handle(NavKey::ArrowLeft);
        assert_eq!(nav.current(), Some(&2));
        nav.handle(NavKey::ArrowRight);
        assert_eq!(nav.current(), Some(&0));
        nav.handle(NavKey::Escape);
        assert!(!nav.is_open());
    }

    #[test]
    fn test_transition_goes_stale_on_close() {
        let mut nav = opened(3, 0);
        let now = Instant::now();
        let fade = Transition::start(&nav, now, Duration::from_millis(400));

        assert_eq!(fade.progress(&nav, now), Some(0.0));
        assert_eq!(fade.progress(&nav, now + Duration::from_secs(1)), Some(1.0));

        nav.close();
        assert!(fade.is_stale(&nav));
        assert_eq!(fade.progress(&nav, now + Duration::from_millis(200)), None);
    }

    #[test]
    fn test_transition_goes_stale_on_step() {
        let mut nav = opened(3, 0);
        let now = Instant::now();
        let fade = Transition::start(&nav, now, Duration::from_millis(400));
        nav.next();
        assert!(fade.is_stale(&nav));
    }
}
