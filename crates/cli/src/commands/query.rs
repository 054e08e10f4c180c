// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `pj query <file> <object> <event>` - ask whether an object may act on an event

use crate::error::PjError;
use anyhow::Result;
use clap::{ArgGroup, Args};
use pj_core::{Direction, Error, EventType};
use std::path::PathBuf;
use std::process::ExitCode;

/// Exit code when the contract denies the action (clap uses 2 for usage errors)
const DENIED: u8 = 3;

#[derive(Args)]
#[command(
    after_help = "Exit status: 0 allowed, 3 denied, 1 on errors, 2 on usage errors."
)]
#[command(group(ArgGroup::new("direction").required(true).args(["sends", "receives"])))]
pub struct QueryArgs {
    /// Contract file (TOML)
    pub file: PathBuf,

    /// Object name
    pub object: String,

    /// Event type
    pub event: String,

    /// Ask whether the object may send
    #[arg(long)]
    pub sends: bool,

    /// Ask whether the object may receive
    #[arg(long)]
    pub receives: bool,
}

pub fn query(args: QueryArgs) -> Result<ExitCode> {
    // A malformed name can never be registered; report it as such
    EventType::parse(&args.event)?;

    let (_, instance) = super::load(&args.file)?;
    let object = instance
        .get(&args.object)
        .ok_or_else(|| PjError::unknown_object(&args.object, &args.file))?;

    let direction = if args.sends {
        Direction::Sends
    } else {
        Direction::Receives
    };

    match object.check(&args.event, direction) {
        Ok(()) => {
            println!("allowed");
            Ok(ExitCode::SUCCESS)
        }
        Err(e @ Error::AssertionNotRegistered { .. }) => {
            println!("{e}");
            Ok(ExitCode::from(DENIED))
        }
        Err(e) => Err(e.into()),
    }
}
