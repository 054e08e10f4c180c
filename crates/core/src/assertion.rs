// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event type names and assertion types
//!
//! An assertion states what an object may do with an event type:
//! - `sends` - the object may emit the event
//! - `receives` - the object may listen for (and disconnect from) the event
//! - `io` - both

use crate::error::Error;
use regex::Regex;
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

// Lower-case words of letters and digits joined by single dashes
#[allow(clippy::expect_used)]
static EVENT_TYPE_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z](-?[a-z0-9]+)*$").expect("constant regex pattern is valid")
});

/// A validated event type name such as `item-added`
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EventType(String);

impl EventType {
    /// Validate an event type name
    ///
    /// Upper-case letters are reported separately from other naming errors.
    pub fn parse(name: &str) -> Result<Self, Error> {
        if name.chars().any(|c| c.is_ascii_uppercase()) {
            return Err(Error::UpperCaseEventType(name.to_string()));
        }
        if !EVENT_TYPE_NAME.is_match(name) {
            return Err(Error::InvalidEventTypeName(name.to_string()));
        }
        Ok(Self(name.to_string()))
    }

    /// Name of the companion event a relay sends on failure
    pub fn error_companion(&self) -> String {
        format!("{}-error", self.0)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for EventType {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl FromStr for EventType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// What an object asserted about an event type
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AssertionType {
    Sends,
    Receives,
    Io,
}

impl AssertionType {
    /// Whether this assertion permits the requested access
    pub fn grants(self, direction: Direction) -> bool {
        matches!(
            (self, direction),
            (AssertionType::Io, _)
                | (AssertionType::Sends, Direction::Sends)
                | (AssertionType::Receives, Direction::Receives)
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AssertionType::Sends => "sends",
            AssertionType::Receives => "receives",
            AssertionType::Io => "io",
        }
    }
}

impl fmt::Display for AssertionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssertionType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sends" => Ok(AssertionType::Sends),
            "receives" => Ok(AssertionType::Receives),
            "io" => Ok(AssertionType::Io),
            other => Err(Error::InvalidAssertionType(other.to_string())),
        }
    }
}

/// Access requested at dispatch time
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Sends,
    Receives,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Sends => f.write_str("sends"),
            Direction::Receives => f.write_str("receives"),
        }
    }
}

#[cfg(test)]
#[path = "assertion_tests.rs"]
mod tests;
