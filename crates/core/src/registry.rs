// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Registry of event contracts
//!
//! Maps each event type to the objects that asserted something about it.
//! Entries are only ever added; there is no unregister.

use crate::asserted::ObjectId;
use crate::assertion::{AssertionType, EventType};
use crate::error::Error;
use std::collections::HashMap;

#[derive(Clone, Debug)]
struct Entry {
    object: ObjectId,
    name: String,
    assertion: AssertionType,
}

/// One registered assertion, as reported by `Registry::entries`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Registration {
    pub event_type: EventType,
    pub object: ObjectId,
    pub name: String,
    pub assertion: AssertionType,
}

/// Event type -> ordered assertions
#[derive(Default, Debug)]
pub struct Registry {
    by_event: HashMap<EventType, Vec<Entry>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an assertion for an object
    ///
    /// Fails if the object already asserted anything for this event type.
    pub fn insert(
        &mut self,
        event_type: EventType,
        object: ObjectId,
        name: &str,
        assertion: AssertionType,
    ) -> Result<(), Error> {
        if let Some(existing) = self.assertion_type(event_type.as_str(), object) {
            return Err(Error::AlreadyRegistered {
                event_type: event_type.to_string(),
                name: name.to_string(),
                existing,
            });
        }

        self.by_event.entry(event_type).or_default().push(Entry {
            object,
            name: name.to_string(),
            assertion,
        });
        Ok(())
    }

    /// The assertion an object made for an event type, if any
    pub fn assertion_type(&self, event_type: &str, object: ObjectId) -> Option<AssertionType> {
        self.by_event
            .get(event_type)?
            .iter()
            .find(|entry| entry.object == object)
            .map(|entry| entry.assertion)
    }

    pub fn is_registered(&self, event_type: &str, object: ObjectId) -> bool {
        self.assertion_type(event_type, object).is_some()
    }

    /// Every registration, sorted by event type then registration order
    pub fn entries(&self) -> Vec<Registration> {
        let mut groups: Vec<(&EventType, &Vec<Entry>)> = self.by_event.iter().collect();
        groups.sort_by(|a, b| a.0.cmp(b.0));

        groups
            .into_iter()
            .flat_map(|(event_type, entries)| {
                entries.iter().map(move |entry| Registration {
                    event_type: event_type.clone(),
                    object: entry.object,
                    name: entry.name.clone(),
                    assertion: entry.assertion,
                })
            })
            .collect()
    }

    /// Total number of registrations
    pub fn len(&self) -> usize {
        self.by_event.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_event.is_empty()
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
