// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Listener store for plain publish/subscribe
//!
//! `Listeners` keeps an ordered list of callbacks per event type. It has no
//! notion of permissions; the `Hub` layers assertions on top of one shared
//! store.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Event payload carried to listeners
pub type Event = serde_json::Value;

type Callback = dyn Fn(&Event) + Send + Sync;

/// A callback with identity
///
/// Clones compare equal to each other; two listeners built from separate
/// `Listener::new` calls never do, even for identical closures.
#[derive(Clone)]
pub struct Listener(Arc<Callback>);

impl Listener {
    pub fn new(f: impl Fn(&Event) + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    pub fn call(&self, event: &Event) {
        (self.0)(event)
    }
}

impl PartialEq for Listener {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::addr_eq(Arc::as_ptr(&self.0), Arc::as_ptr(&other.0))
    }
}

impl Eq for Listener {}

impl fmt::Debug for Listener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Listener({:p})", Arc::as_ptr(&self.0) as *const ())
    }
}

/// Ordered listeners per event type
#[derive(Default, Debug)]
pub struct Listeners {
    by_type: HashMap<String, Vec<Listener>>,
}

impl Listeners {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a listener for an event type
    pub fn on(&mut self, event_type: &str, listener: Listener) {
        self.by_type
            .entry(event_type.to_string())
            .or_default()
            .push(listener);
    }

    /// Remove the first occurrence of a listener for an event type
    ///
    /// Returns whether a listener was removed.
    pub fn off(&mut self, event_type: &str, listener: &Listener) -> bool {
        let Some(list) = self.by_type.get_mut(event_type) else {
            return false;
        };
        remove_first(list, listener)
    }

    /// Remove the first occurrence of a listener under every event type
    ///
    /// Returns how many event types lost an entry.
    pub fn off_all(&mut self, listener: &Listener) -> usize {
        let mut removed = 0;
        for list in self.by_type.values_mut() {
            if remove_first(list, listener) {
                removed += 1;
            }
        }
        removed
    }

    /// The listener at a position in an event type's list
    pub fn get(&self, event_type: &str, index: usize) -> Option<Listener> {
        self.by_type.get(event_type)?.get(index).cloned()
    }

    /// Call every listener for an event type
    ///
    /// Returns how many listeners were called.
    pub fn update_view(&self, event_type: &str, event: &Event) -> usize {
        let Some(listeners) = self.by_type.get(event_type) else {
            return 0;
        };
        for listener in listeners {
            listener.call(event);
        }
        listeners.len()
    }

    /// Number of listeners for an event type
    pub fn len(&self, event_type: &str) -> usize {
        self.by_type.get(event_type).map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.by_type.values().all(Vec::is_empty)
    }
}

fn remove_first(list: &mut Vec<Listener>, listener: &Listener) -> bool {
    match list.iter().position(|l| l == listener) {
        Some(index) => {
            list.remove(index);
            true
        }
        None => false,
    }
}

#[cfg(test)]
#[path = "listener_tests.rs"]
mod tests;
