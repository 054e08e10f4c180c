// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Enable coverage(off) attribute for excluding test infrastructure
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! pj-core: event contracts for prototype-style UI objects
//!
//! This crate provides:
//! - `Listeners` - a plain publish/subscribe listener store
//! - `Hub` - the shared bus plus the registry of event contracts
//! - `Asserted` - objects that may only send or receive what they asserted
//! - `Server` and `App` - relay and container objects built on `Asserted`
//! - `Contract` - TOML declarations of objects and their assertions

pub mod app;
pub mod assertion;
pub mod asserted;
pub mod contract;
pub mod error;
pub mod hub;
pub mod listener;
pub mod registry;
pub mod server;
pub mod transport;

pub use app::App;
pub use asserted::{Asserted, ObjectId};
pub use assertion::{AssertionType, Direction, EventType};
pub use contract::{
    parse_contract, AssertionDecl, Contract, ContractError, Instance, ObjectDecl, ObjectKind,
};
pub use error::Error;
pub use hub::Hub;
pub use listener::{Event, Listener, Listeners};
pub use registry::{Registration, Registry};
pub use server::Server;
pub use transport::{HttpResponse, Transport, TransportError, FORM_CONTENT_TYPE};

#[cfg(any(test, feature = "test-support"))]
pub use transport::{FakeTransport, TransportCall};
