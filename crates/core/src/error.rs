// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for registration and dispatch

use crate::asserted::ObjectId;
use crate::assertion::{AssertionType, Direction};
use crate::transport::TransportError;
use thiserror::Error;

/// Errors raised by the registry, asserted objects and the relay
#[derive(Debug, Error)]
pub enum Error {
    #[error("upper case letters not allowed in event type names: '{0}'")]
    UpperCaseEventType(String),
    #[error(
        "invalid event type name '{0}': only a-z, 0-9 or dash (-) allowed, \
         must start with a letter, not end with a dash and only one dash between words"
    )]
    InvalidEventTypeName(String),
    #[error("invalid assertion type '{0}': expected 'sends', 'receives' or 'io'")]
    InvalidAssertionType(String),
    #[error("object '{name}' ({object}) was not created by this hub")]
    ForeignObject { object: ObjectId, name: String },
    #[error(
        "duplicated registration: event type '{event_type}' is already registered \
         as '{existing}' for object '{name}'"
    )]
    AlreadyRegistered {
        event_type: String,
        name: String,
        existing: AssertionType,
    },
    #[error(
        "assertion not registered: assertion type '{direction}' or 'io' not registered \
         for event type '{event_type}' and object '{name}'"
    )]
    AssertionNotRegistered {
        event_type: String,
        name: String,
        direction: Direction,
    },
    #[error("delayed delivery requires a tokio runtime")]
    NoRuntime,
    #[error("server URI for AJAX calls missing")]
    MissingUri,
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),
}
