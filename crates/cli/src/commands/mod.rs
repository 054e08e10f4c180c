// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod check;
pub mod post;
pub mod query;

use crate::error::PjError;
use pj_core::{Contract, Hub, Instance};
use std::path::Path;

/// Load a contract file and instantiate it on a fresh hub
pub(crate) fn load(path: &Path) -> Result<(Hub, Instance), PjError> {
    let contract = Contract::load(path).map_err(|e| PjError::contract(path, e))?;
    let hub = Hub::new();
    let instance = contract
        .instantiate(&hub)
        .map_err(|e| PjError::contract(path, e))?;
    tracing::debug!(path = %path.display(), objects = contract.objects.len(), "contract loaded");
    Ok((hub, instance))
}
