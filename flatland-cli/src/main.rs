// Copyright (c) 2026 flatland developers
//
// Licensed under the Apache License, Version 2.0
// <LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0> or the MIT
// license <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. All files in the project carrying such notice may not be copied,
// modified, or distributed except according to those terms.

//! `flatland` - run a named Flatland Defence scenario to completion.

mod cli;
mod error;
mod logging;
mod scenario;

use anyhow::Result;
use cli::{Args, Command};
use clap::Parser;
use error::{clap_or_error, success};
use std::process;
use tracing::{debug, info};

fn main() {
    process::exit(run().map_or_else(clap_or_error, success));
}

fn run() -> Result<()> {
    let args = Args::try_parse()?;
    logging::initialize(*args.verbose(), *args.quiet())?;
    debug!(?args, "parsed command line");

    match args.command() {
        Command::List => {
            for scenario in cli::Scenario::ALL {
                println!("{}", scenario.name());
            }
        }
        Command::Run { scenario } => {
            let (mut cluster, scanner) = scenario::build(*scenario)?;
            flatland_core::flatland_protect(&mut cluster, &scanner)?;
            if cluster.impact() {
                info!(scenario = scenario.name(), "asteroid impacted flatland");
            } else {
                info!(scenario = scenario.name(), "cluster cleared");
            }
        }
    }

    Ok(())
}
