// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Asserted objects
//!
//! An `Asserted` may only send event types it asserted `sends` (or `io`) for,
//! and may only receive or disconnect from event types it asserted
//! `receives` (or `io`) for. Assertions made for any of its asserted
//! prototypes count as its own.

use crate::assertion::Direction;
use crate::error::Error;
use crate::hub::{Hub, WeakHub};
use crate::listener::{Event, Listener};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Identifier of an asserted object within its hub
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub u64);

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Handle to an object whose event traffic is governed by the hub's registry
#[derive(Clone)]
pub struct Asserted {
    id: ObjectId,
    name: Arc<str>,
    /// Asserted ancestors, nearest first
    prototypes: Arc<[ObjectId]>,
    hub: Hub,
}

impl Asserted {
    pub(crate) fn new(hub: Hub, id: ObjectId, name: String, prototypes: Vec<ObjectId>) -> Self {
        Self {
            id,
            name: name.into(),
            prototypes: prototypes.into(),
            hub,
        }
    }

    /// Create an object that uses this one as its prototype
    ///
    /// The new object inherits every assertion made for this object and for
    /// this object's own prototypes.
    pub fn derive(&self, name: impl Into<String>) -> Asserted {
        let mut prototypes = Vec::with_capacity(self.prototypes.len() + 1);
        prototypes.push(self.id);
        prototypes.extend(self.prototypes.iter().copied());
        Asserted::new(self.hub.clone(), self.hub.next_id(), name.into(), prototypes)
    }

    pub fn id(&self) -> ObjectId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn prototypes(&self) -> &[ObjectId] {
        &self.prototypes
    }

    /// A handle that does not keep the hub alive
    pub(crate) fn downgrade(&self) -> WeakAsserted {
        WeakAsserted {
            id: self.id,
            name: Arc::clone(&self.name),
            prototypes: Arc::clone(&self.prototypes),
            hub: self.hub.downgrade(),
        }
    }

    pub fn hub(&self) -> &Hub {
        &self.hub
    }

    /// Whether `prototype` is among this object's asserted prototypes
    pub fn is_derived_from(&self, prototype: &Asserted) -> bool {
        self.hub.owns(prototype) && self.prototypes.contains(&prototype.id)
    }

    /// Verify this object may access an event type in the given direction
    pub fn check(&self, event_type: &str, direction: Direction) -> Result<(), Error> {
        if self.hub.permits(self, event_type, direction) {
            return Ok(());
        }
        tracing::debug!(event_type, object = self.name(), %direction, "denied");
        Err(Error::AssertionNotRegistered {
            event_type: event_type.to_string(),
            name: self.name.to_string(),
            direction,
        })
    }

    pub fn may(&self, event_type: &str, direction: Direction) -> bool {
        self.check(event_type, direction).is_ok()
    }

    /// Send an event to every listener for its type
    pub fn send(&self, event_type: &str, event: Event) -> Result<(), Error> {
        self.send_inner(event_type, event, None)
    }

    /// Send an event after a delay
    ///
    /// Permission is checked now; delivery happens on the tokio runtime.
    pub fn send_after(
        &self,
        event_type: &str,
        event: Event,
        delay: Duration,
    ) -> Result<(), Error> {
        self.send_inner(event_type, event, Some(delay))
    }

    /// Listen for an event type
    pub fn receive(&self, event_type: &str, listener: Listener) -> Result<(), Error> {
        self.receive_inner(event_type, listener, None)
    }

    /// Start listening for an event type after a delay
    pub fn receive_after(
        &self,
        event_type: &str,
        listener: Listener,
        delay: Duration,
    ) -> Result<(), Error> {
        self.receive_inner(event_type, listener, Some(delay))
    }

    /// Stop a listener from hearing an event type
    pub fn disconnect(&self, event_type: &str, listener: &Listener) -> Result<(), Error> {
        self.disconnect_inner(event_type, listener.clone(), None)
    }

    /// Stop a listener from hearing an event type after a delay
    pub fn disconnect_after(
        &self,
        event_type: &str,
        listener: &Listener,
        delay: Duration,
    ) -> Result<(), Error> {
        self.disconnect_inner(event_type, listener.clone(), Some(delay))
    }

    fn send_inner(
        &self,
        event_type: &str,
        event: Event,
        delay: Option<Duration>,
    ) -> Result<(), Error> {
        self.check(event_type, Direction::Sends)?;
        let hub = self.hub.clone();
        let event_type = event_type.to_string();
        schedule(delay, move || {
            hub.update_view(&event_type, &event);
        })
    }

    fn receive_inner(
        &self,
        event_type: &str,
        listener: Listener,
        delay: Option<Duration>,
    ) -> Result<(), Error> {
        self.check(event_type, Direction::Receives)?;
        let hub = self.hub.clone();
        let event_type = event_type.to_string();
        schedule(delay, move || hub.on(&event_type, listener))
    }

    fn disconnect_inner(
        &self,
        event_type: &str,
        listener: Listener,
        delay: Option<Duration>,
    ) -> Result<(), Error> {
        self.check(event_type, Direction::Receives)?;
        let hub = self.hub.clone();
        let event_type = event_type.to_string();
        schedule(delay, move || {
            hub.off(&event_type, &listener);
        })
    }
}

/// An asserted object whose hub may already be gone
#[derive(Clone)]
pub(crate) struct WeakAsserted {
    id: ObjectId,
    name: Arc<str>,
    prototypes: Arc<[ObjectId]>,
    hub: WeakHub,
}

impl WeakAsserted {
    pub(crate) fn upgrade(&self) -> Option<Asserted> {
        Some(Asserted {
            id: self.id,
            name: Arc::clone(&self.name),
            prototypes: Arc::clone(&self.prototypes),
            hub: self.hub.upgrade()?,
        })
    }
}

impl fmt::Debug for Asserted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Asserted")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("prototypes", &self.prototypes)
            .finish()
    }
}

impl fmt::Display for Asserted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

/// Run an operation now, or after a delay on the current tokio runtime
///
/// A zero delay still defers the operation.
fn schedule(delay: Option<Duration>, op: impl FnOnce() + Send + 'static) -> Result<(), Error> {
    let Some(delay) = delay else {
        op();
        return Ok(());
    };

    let handle = tokio::runtime::Handle::try_current().map_err(|_| Error::NoRuntime)?;
    tracing::trace!(delay_ms = delay.as_millis() as u64, "scheduled");
    handle.spawn(async move {
        tokio::time::sleep(delay).await;
        op();
    });
    Ok(())
}

#[cfg(test)]
#[path = "asserted_tests.rs"]
mod tests;
