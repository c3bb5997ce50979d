// Copyright (c) 2026 flatland developers
//
// Licensed under the Apache License, Version 2.0
// <LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0> or the MIT
// license <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. All files in the project carrying such notice may not be copied,
// modified, or distributed except according to those terms.

//! `flatland` tracing subscriber setup, driven by the CLI's verbose/quiet
//! counters (see `aoc2-bin/src/tracing/mod.rs` for the pattern this
//! follows; simplified here since there is no per-run config file).

use anyhow::Result;
use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt::time::UtcTime};

/// Initializes the global `tracing` subscriber at a level derived from
/// `verbose`/`quiet` (mutually exclusive on the command line, enforced by
/// `clap`), defaulting to `INFO`.
pub(crate) fn initialize(verbose: u8, quiet: u8) -> Result<()> {
    let filter = EnvFilter::builder()
        .with_default_directive(level_for(verbose, quiet).into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_timer(UtcTime::rfc_3339())
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
}

fn level_for(verbose: u8, quiet: u8) -> Level {
    match i16::from(verbose) - i16::from(quiet) {
        i if i <= -2 => Level::ERROR,
        -1 => Level::WARN,
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    }
}
