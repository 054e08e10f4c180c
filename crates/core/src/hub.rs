// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The shared hub behind every asserted object
//!
//! A `Hub` owns one listener store and one contract registry. Objects created
//! from it dispatch through the same store, so a listener registered by one
//! object hears the events sent by any other. Direct access to the store
//! (`on`, `off`, `update_view`) lives here and is not available on objects.

use crate::asserted::{Asserted, ObjectId};
use crate::assertion::{AssertionType, Direction, EventType};
use crate::error::Error;
use crate::listener::{Event, Listener, Listeners};
use crate::registry::{Registration, Registry};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock, Weak};

#[derive(Default)]
struct HubInner {
    listeners: RwLock<Listeners>,
    registry: RwLock<Registry>,
    next_id: AtomicU64,
}

/// Shared bus and registry; cloning shares state
#[derive(Clone, Default)]
pub struct Hub {
    inner: Arc<HubInner>,
}

/// Non-owning handle to a hub, for callbacks stored inside it
#[derive(Clone)]
pub(crate) struct WeakHub(Weak<HubInner>);

impl WeakHub {
    pub(crate) fn upgrade(&self) -> Option<Hub> {
        self.0.upgrade().map(|inner| Hub { inner })
    }
}

impl Hub {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn downgrade(&self) -> WeakHub {
        WeakHub(Arc::downgrade(&self.inner))
    }

    /// Create an asserted object with no asserted prototypes
    pub fn create(&self, name: impl Into<String>) -> Asserted {
        Asserted::new(self.clone(), self.next_id(), name.into(), Vec::new())
    }

    pub(crate) fn next_id(&self) -> ObjectId {
        ObjectId(self.inner.next_id.fetch_add(1, Ordering::Relaxed) + 1)
    }

    /// Whether the object was created by this hub (or a clone of it)
    pub fn owns(&self, object: &Asserted) -> bool {
        Arc::ptr_eq(&self.inner, &object.hub().inner)
    }

    /// Register assertions in order
    ///
    /// Each entry is validated before it is recorded. On failure, entries
    /// before the failing one stay registered.
    pub fn register<'e, 'o, I>(&self, entries: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = (&'e str, &'o Asserted, AssertionType)>,
    {
        for (event_type, object, assertion) in entries {
            let event_type = EventType::parse(event_type)?;
            if !self.owns(object) {
                return Err(Error::ForeignObject {
                    object: object.id(),
                    name: object.name().to_string(),
                });
            }

            self.inner
                .registry
                .write()
                .unwrap_or_else(|e| e.into_inner())
                .insert(event_type.clone(), object.id(), object.name(), assertion)?;

            tracing::debug!(
                event_type = %event_type,
                object = object.name(),
                assertion = %assertion,
                "registered"
            );
        }
        Ok(())
    }

    /// The assertion an object made for an event type, ignoring prototypes
    pub fn assertion_type(&self, event_type: &str, object: &Asserted) -> Option<AssertionType> {
        self.inner
            .registry
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .assertion_type(event_type, object.id())
    }

    pub fn is_registered(&self, event_type: &str, object: &Asserted) -> bool {
        self.assertion_type(event_type, object).is_some()
    }

    /// Snapshot of every registration
    pub fn entries(&self) -> Vec<Registration> {
        self.inner
            .registry
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .entries()
    }

    /// Whether the object, or one of its asserted prototypes, may access the event type
    pub(crate) fn permits(
        &self,
        object: &Asserted,
        event_type: &str,
        direction: Direction,
    ) -> bool {
        let registry = self.inner.registry.read().unwrap_or_else(|e| e.into_inner());

        std::iter::once(object.id())
            .chain(object.prototypes().iter().copied())
            .any(|id| {
                registry
                    .assertion_type(event_type, id)
                    .is_some_and(|assertion| assertion.grants(direction))
            })
    }

    /// Add a listener to the shared store
    pub fn on(&self, event_type: &str, listener: Listener) {
        self.inner
            .listeners
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .on(event_type, listener);
    }

    /// Remove the first occurrence of a listener for an event type
    pub fn off(&self, event_type: &str, listener: &Listener) -> bool {
        self.inner
            .listeners
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .off(event_type, listener)
    }

    /// Remove the first occurrence of a listener under every event type
    pub fn off_all(&self, listener: &Listener) -> usize {
        self.inner
            .listeners
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .off_all(listener)
    }

    /// Deliver an event to every listener for its type
    ///
    /// The list is walked by position against the live store, and no lock is
    /// held while a listener runs. A listener added during dispatch runs in
    /// the same dispatch; removing an earlier entry shifts later ones down.
    pub fn update_view(&self, event_type: &str, event: &Event) -> usize {
        let mut index = 0;
        loop {
            let next = self
                .inner
                .listeners
                .read()
                .unwrap_or_else(|e| e.into_inner())
                .get(event_type, index);
            let Some(listener) = next else {
                break;
            };
            listener.call(event);
            index += 1;
        }

        tracing::trace!(event_type, listeners = index, "dispatched");
        index
    }

    /// Number of listeners for an event type
    pub fn subscriber_count(&self, event_type: &str) -> usize {
        self.inner
            .listeners
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .len(event_type)
    }
}

#[cfg(test)]
#[path = "hub_tests.rs"]
mod tests;
