// Copyright (c) 2026 flatland developers
//
// Licensed under the Apache License, Version 2.0
// <LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0> or the MIT
// license <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. All files in the project carrying such notice may not be copied,
// modified, or distributed except according to those terms.

//! Builders for the named end-to-end scenarios exposed by `flatland run`.
//!
//! Each scenario mirrors one of spec.md §8's concrete test vectors.

use crate::cli::Scenario;
use flatland_core::{AsteroidCluster, FlatlandError, Polynomial, ScannerArray};

/// Builds the cluster/scanner pair for a named scenario.
///
/// # Errors
/// Propagates [`FlatlandError`] if a scenario's literal coefficients or
/// cluster capacity were ever malformed (they never are for the scenarios
/// built here; the `Result` exists because the underlying constructors
/// are fallible).
pub(crate) fn build(scenario: Scenario) -> Result<(AsteroidCluster, ScannerArray), FlatlandError> {
    match scenario {
        Scenario::Static => static_single(),
        Scenario::Linear => linear_single(),
        Scenario::Impact => unavoidable_impact(),
        Scenario::TwoAsteroids => two_asteroids(),
        Scenario::Swarm => swarm(),
    }
}

fn poly(coeffs: &[f32]) -> Result<Polynomial, FlatlandError> {
    Polynomial::new(coeffs.to_vec())
}

/// S1: a single stationary asteroid at (100, 100).
fn static_single() -> Result<(AsteroidCluster, ScannerArray), FlatlandError> {
    let mut cluster = AsteroidCluster::new(1, 1.0);
    cluster.add_asteroid(poly(&[100.0])?, poly(&[100.0])?)?;
    Ok((cluster, ScannerArray::new(vec![0.0, 50.0, 100.0, 150.0, 200.0])))
}

/// S2-shaped: a single asteroid descending linearly toward the line.
fn linear_single() -> Result<(AsteroidCluster, ScannerArray), FlatlandError> {
    let mut cluster = AsteroidCluster::new(1, 1.0);
    cluster.add_asteroid(poly(&[-50.0, 1001.0])?, poly(&[-50.0, 1001.0])?)?;
    Ok((cluster, ScannerArray::new(vec![0.0, 200.0, 400.0])))
}

/// S3: an asteroid whose descent outruns any reachable intercept. At
/// t=0 it sits at (1, 1), outside every scanner's cut-off radius given
/// these scanner positions, so no triple can localise it before it
/// impacts at t=1.
fn unavoidable_impact() -> Result<(AsteroidCluster, ScannerArray), FlatlandError> {
    let mut cluster = AsteroidCluster::new(1, 1.0);
    cluster.add_asteroid(poly(&[-3.0, 1.0])?, poly(&[-3.0, 1.0])?)?;
    Ok((cluster, ScannerArray::new(vec![2000.0, 2050.0, 2100.0])))
}

/// Two asteroids on independent quadratic `y(t)` trajectories, carried
/// over from `original_source/test_flatland_5.c` (see SPEC_FULL.md §9).
fn two_asteroids() -> Result<(AsteroidCluster, ScannerArray), FlatlandError> {
    let mut cluster = AsteroidCluster::new(2, 1.0);
    cluster.add_asteroid(poly(&[1.0, 0.0])?, poly(&[2.0, -100.0, 1001.0])?)?;
    cluster.add_asteroid(poly(&[100.0, 0.0])?, poly(&[2.0, -50.0, 1001.0])?)?;
    Ok((cluster, ScannerArray::new(vec![0.0, 100.0, 200.0, 300.0, 400.0])))
}

/// S7: six asteroids sharing a scanner array too sparse to see them all
/// from a single vantage point at once.
fn swarm() -> Result<(AsteroidCluster, ScannerArray), FlatlandError> {
    let mut cluster = AsteroidCluster::new(6, 1.0);
    for i in 0..6_u8 {
        let fi = f32::from(i);
        cluster.add_asteroid(poly(&[2.0 * fi, 0.0])?, poly(&[-20.0, 1001.0 + 100.0 * fi])?)?;
    }
    Ok((cluster, ScannerArray::new(vec![0.0, 100.0, 200.0, 300.0, 400.0])))
}
