// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Single "currently active" item shared between views.
//!
//! The app owns one [`SelectionStore`] for the music player and hands it by
//! reference to the track list and the player drawer. Listeners are called
//! synchronously inside `select`/`clear`, so no view can observe a stale
//! selection after the call returns.

use super::content::Item;

/// Handle returned by [`SelectionStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(u64);

type Listener<T> = Box<dyn FnMut(Option<&T>)>;

pub struct SelectionStore<T> {
    selected: Option<T>,
    listeners: Vec<(SubscriptionId, Listener<T>)>,
    next_id: u64,
}

impl<T> Default for SelectionStore<T> {
    fn default() -> Self {
        Self {
            selected: None,
            listeners: Vec::new(),
            next_id: 0,
        }
    }
}

impl<T: Item> SelectionStore<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `item` the active one, replacing any previous selection.
    pub fn select(&mut self, item: T) {
        self.selected = Some(item);
        self.notify();
    }

    /// Drop the selection.
    pub fn clear(&mut self) {
        if self.selected.take().is_some() {
            self.notify();
        }
    }

    pub fn selected(&self) -> Option<&T> {
        self.selected.as_ref()
    }

    /// True while something is selected; drives the player drawer.
    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    pub fn is_active(&self, item: &T) -> bool {
        self.selected
            .as_ref()
            .is_some_and(|selected| selected.key() == item.key())
    }

    /// Register a listener called with the new selection after every change.
    pub fn subscribe(&mut self, listener: impl FnMut(Option<&T>) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
    }

    fn notify(&mut self) {
        let selected = self.selected.as_ref();
        for (_, listener) in &mut self.listeners {
            listener(selected);
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for SelectionStore<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectionStore")
            .field("selected", &self.selected)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::content::{Content, Track};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn tracks() -> Vec<Track> {
        Content::default().tracks
    }

    #[test]
    fn test_last_select_wins() {
        let tracks = tracks();
        let mut store = SelectionStore::new();
        store.select(tracks[0].clone());
        store.select(tracks[1].clone());

        assert!(!store.is_active(&tracks[0]));
        assert!(store.is_active(&tracks[1]));
    }

    #[test]
    fn test_drawer_follows_selection() {
        let tracks = tracks();
        let mut store = SelectionStore::new();
        assert!(!store.is_open());
        assert!(tracks.iter().all(|t| !store.is_active(t)));

        store.select(tracks[2].clone());
        assert!(store.is_open());

        store.clear();
        assert!(!store.is_open());
        assert!(store.selected().is_none());
    }

    #[test]
    fn test_listeners_see_changes_synchronously() {
        let tracks = tracks();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut store = SelectionStore::new();

        let log = Rc::clone(&seen);
        store.subscribe(move |track: Option<&Track>| {
            log.borrow_mut().push(track.map(|t| t.title.clone()));
        });

        store.select(tracks[0].clone());
        assert_eq!(seen.borrow().len(), 1);
        store.clear();
        store.clear();

        assert_eq!(
            *seen.borrow(),
            vec![Some("Track Title 1".to_string()), None]
        );
    }

    #[test]
    fn test_listeners_run_in_subscription_order() {
        let order = Rc::new(RefCell::new(Vec::new()));
        let mut store = SelectionStore::new();
        for n in 0..3 {
            let order = Rc::clone(&order);
            store.subscribe(move |_: Option<&Track>| order.borrow_mut().push(n));
        }

        store.select(tracks()[0].clone());
        assert_eq!(*order.borrow(), vec![0, 1, 2]);
    }

    #[test]
    fn test_unsubscribe_stops_delivery() {
        let count = Rc::new(RefCell::new(0));
        let mut store = SelectionStore::new();
        let counter = Rc::clone(&count);
        let id = store.subscribe(move |_: Option<&Track>| *counter.borrow_mut() += 1);

        store.select(tracks()[0].clone());
        store.unsubscribe(id);
        store.select(tracks()[1].clone());

        assert_eq!(*count.borrow(), 1);
    }
}
