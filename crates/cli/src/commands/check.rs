// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `pj check <file>` - validate a contract and list its registrations

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Args)]
pub struct CheckArgs {
    /// Contract file (TOML)
    pub file: PathBuf,
}

pub fn check(args: CheckArgs) -> Result<()> {
    let (hub, _) = super::load(&args.file)?;

    for registration in hub.entries() {
        println!(
            "{}\t{}\t{}",
            registration.event_type, registration.name, registration.assertion
        );
    }
    Ok(())
}
