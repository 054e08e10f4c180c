// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! pj - event contract checker

mod commands;
mod error;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{check, post, query};
use error::PjError;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "pj",
    version,
    about = "Check and exercise event contracts between objects"
)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Instantiate a contract and list its registrations
    Check(check::CheckArgs),
    /// Ask whether an object may send or receive an event type
    Query(query::QueryArgs),
    /// Relay one event through a declared server
    Post(post::PostArgs),
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match run(cli.command).await {
        Ok(code) => code,
        Err(err) => {
            match err.downcast_ref::<PjError>() {
                Some(e) => eprint!("{e}"),
                None => eprintln!("error: {err:#}"),
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Commands) -> Result<ExitCode> {
    match command {
        Commands::Check(args) => check::check(args).map(|()| ExitCode::SUCCESS),
        Commands::Query(args) => query::query(args),
        Commands::Post(args) => post::post(args).await.map(|()| ExitCode::SUCCESS),
    }
}

fn setup_logging(verbose: u8) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
