// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `pj post <file> <server> <event>` - relay one event over HTTP

use crate::error::PjError;
use anyhow::{Context, Result};
use clap::Args;
use pj_adapters::{TracedTransport, UreqTransport};
use std::path::PathBuf;

#[derive(Args)]
pub struct PostArgs {
    /// Contract file (TOML)
    pub file: PathBuf,

    /// Server object name
    pub server: String,

    /// Event type
    pub event: String,

    /// Event payload as JSON
    #[arg(long, default_value = "null")]
    pub value: String,
}

pub async fn post(args: PostArgs) -> Result<()> {
    let value: serde_json::Value =
        serde_json::from_str(&args.value).context("--value is not valid JSON")?;

    let (_, instance) = super::load(&args.file)?;
    if instance.get(&args.server).is_none() {
        return Err(PjError::unknown_object(&args.server, &args.file).into());
    }
    let server = instance
        .server(&args.server, TracedTransport::new(UreqTransport::new()))
        .ok_or_else(|| PjError::not_a_server(&args.server))?;
    if server.uri().is_none() {
        return Err(PjError::missing_uri(&args.server).into());
    }

    let (reply_type, payload) = server.ajax(&args.event, &value).await?;
    println!("{reply_type}\t{payload}");
    Ok(())
}
