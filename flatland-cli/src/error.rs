// Copyright (c) 2026 flatland developers
//
// Licensed under the Apache License, Version 2.0
// <LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0> or the MIT
// license <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. All files in the project carrying such notice may not be copied,
// modified, or distributed except according to those terms.

//! `flatland` error-to-exit-code conversion.

use clap::error::ErrorKind;

/// Converts the top-level `anyhow::Error` into a process exit code.
///
/// `clap`'s own `--help`/`--version` paths arrive here as errors (clap
/// reports them through the same `Result`); they print their message and
/// exit 0. Every other error - a malformed scenario, a [`FlatlandError`]
/// surfaced as [`FlatlandError::UnableToClear`] - prints its debug form
/// to stderr and exits 1.
///
/// [`FlatlandError`]: flatland_core::FlatlandError
#[allow(clippy::needless_pass_by_value)]
pub(crate) fn clap_or_error(err: anyhow::Error) -> i32 {
    let disp_err = || {
        eprint!("{err:?}");
        1
    };
    match err.downcast_ref::<clap::Error>() {
        Some(e) => match e.kind() {
            ErrorKind::DisplayHelp => {
                eprint!("{e}");
                0
            }
            ErrorKind::DisplayVersion => 0,
            _ => disp_err(),
        },
        None => disp_err(),
    }
}

/// The exit code for a scenario that ran to completion without error,
/// whether it cleared the cluster or stopped cleanly on impact.
pub(crate) fn success((): ()) -> i32 {
    0
}
