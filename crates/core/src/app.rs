// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Application container

use crate::asserted::Asserted;

/// Asserted object that keeps the objects making up an application
#[derive(Debug, Clone)]
pub struct App {
    object: Asserted,
    objects: Vec<Asserted>,
}

impl App {
    pub fn new(object: Asserted) -> Self {
        Self {
            object,
            objects: Vec::new(),
        }
    }

    pub fn asserted(&self) -> &Asserted {
        &self.object
    }

    /// Add an object to the application
    pub fn add(&mut self, object: Asserted) {
        tracing::debug!(app = self.object.name(), object = object.name(), "added");
        self.objects.push(object);
    }

    /// Objects in the order they were added
    pub fn objects(&self) -> &[Asserted] {
        &self.objects
    }

    /// Find an added object by name
    pub fn get(&self, name: &str) -> Option<&Asserted> {
        self.objects.iter().find(|o| o.name() == name)
    }
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
