// Copyright (c) 2026 flatland developers
//
// Licensed under the Apache License, Version 2.0
// <LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0> or the MIT
// license <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. All files in the project carrying such notice may not be copied,
// modified, or distributed except according to those terms.

//! `flatland` command line interface

use clap::{ArgAction::Count, Parser, Subcommand, ValueEnum};
use getset::Getters;

#[derive(Clone, Debug, Getters, Parser)]
#[command(author, version, about = "Run Flatland Defence scenarios", long_about = None)]
#[getset(get = "pub(crate)")]
pub(crate) struct Args {
    /// Set logging verbosity. More v's, more verbose.
    #[clap(
        short,
        long,
        action = Count,
        help = "Turn up logging verbosity (multiple will turn it up more)",
        conflicts_with = "quiet",
    )]
    verbose: u8,
    /// Set logging quietness. More q's, more quiet.
    #[clap(
        short,
        long,
        action = Count,
        help = "Turn down logging verbosity (multiple will turn it down more)",
        conflicts_with = "verbose",
    )]
    quiet: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Debug, Subcommand)]
pub(crate) enum Command {
    /// Build a named scenario and run the defence controller until it
    /// clears, impacts, or hits its iteration cap.
    Run {
        #[arg(value_enum)]
        scenario: Scenario,
    },
    /// Print the available scenario names.
    List,
}

/// One of the end-to-end scenarios described in spec.md §8.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub(crate) enum Scenario {
    /// A single stationary asteroid.
    Static,
    /// A single asteroid on a linear descent.
    Linear,
    /// A single asteroid that impacts before it can be intercepted.
    Impact,
    /// Two asteroids on independent quadratic trajectories.
    TwoAsteroids,
    /// Six asteroids sharing a scanner array too sparse to see them all at once.
    Swarm,
}

impl Scenario {
    pub(crate) const ALL: [Self; 5] = [
        Self::Static,
        Self::Linear,
        Self::Impact,
        Self::TwoAsteroids,
        Self::Swarm,
    ];

    pub(crate) fn name(self) -> &'static str {
        match self {
            Self::Static => "static",
            Self::Linear => "linear",
            Self::Impact => "impact",
            Self::TwoAsteroids => "two-asteroids",
            Self::Swarm => "swarm",
        }
    }
}
