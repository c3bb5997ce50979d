// Copyright (c) 2026 flatland developers
//
// Licensed under the Apache License, Version 2.0
// <LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0> or the MIT
// license <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. All files in the project carrying such notice may not be copied,
// modified, or distributed except according to those terms.

//! The defence controller: `flatland_protect` drives a cluster/scanner
//! pair until the cluster is cleared, an asteroid impacts, or the
//! bounded-iteration guard trips.

use crate::{cluster::AsteroidCluster, error::FlatlandError, math::flatland_sqrt, scanner::ScannerArray};
use tracing::{info, trace};

/// Iterations allowed per asteroid of cluster capacity before the
/// controller gives up and reports [`FlatlandError::UnableToClear`].
/// Generous relative to any trajectory tested against this simulation.
const ITERATIONS_PER_ASTEROID: usize = 4096;

/// Repeatedly scans, localises a single asteroid, fires an intercept,
/// and advances the clock, until the cluster is cleared or an asteroid
/// impacts.
///
/// # Errors
/// Returns [`FlatlandError::UnableToClear`] if the iteration cap
/// (`cluster.capacity() * 4096`, minimum 4096) is exceeded without the
/// cluster reaching `cleared` or `impact`.
pub fn flatland_protect(cluster: &mut AsteroidCluster, scanner: &ScannerArray) -> Result<(), FlatlandError> {
    let cap = cluster.capacity().max(1) * ITERATIONS_PER_ASTEROID;

    for iteration in 0..cap {
        if cluster.cleared() {
            info!(iteration, "cluster cleared");
            return Ok(());
        }

        let readings = scanner.scan(cluster);
        if readings.iter().any(|d| d.is_nan()) {
            info!(iteration, "impact detected, stopping");
            return Ok(());
        }

        if let Some((x, y)) = localise(scanner.positions(), &readings, cluster.tolerance()) {
            trace!(iteration, x, y, "intercepting localised target");
            cluster.intercept(x, y);
        } else {
            trace!(iteration, "no scanner has an alive asteroid in range, skipping intercept");
        }
        cluster.update();
    }

    if cluster.cleared() || cluster.impact() {
        return Ok(());
    }

    Err(FlatlandError::UnableToClear { cap })
}

/// Solves for `(x, y)` from two scanners' positions/distances, assuming
/// a single asteroid at `y > 0`. Returns `None` when the two scanner
/// positions coincide (no unique solution) or the implied `y^2` is
/// negative (no real solution).
fn solve_pair(s_a: f32, s_b: f32, d_a: f32, d_b: f32) -> Option<(f32, f32)> {
    let denom = 2.0 * (s_b - s_a);
    if denom.abs() < f32::EPSILON {
        return None;
    }
    let x = ((d_a * d_a - d_b * d_b) + (s_b * s_b - s_a * s_a)) / denom;
    let under = d_a * d_a - (x - s_a) * (x - s_a);
    if under < 0.0 {
        return None;
    }
    Some((x, flatland_sqrt(under)))
}

/// Picks a single target `(x, y)` from a parallel array of scanner
/// positions and distance readings (already confirmed finite and
/// non-NaN by the caller).
///
/// Enumerates contiguous triples `(a, b, c)`, rejects any triple
/// touching an out-of-range (`+inf`) reading, solves from `(a, b)` and
/// cross-checks against `c`; the first triple whose cross-check is
/// within `tolerance` wins. If no triple passes, falls back to firing
/// directly overhead of the scanner reporting the smallest distance.
fn localise(positions: &[f32], readings: &[f32], tolerance: f32) -> Option<(f32, f32)> {
    let n = positions.len();
    for i in 0..n.saturating_sub(2) {
        let (a, b, c) = (i, i + 1, i + 2);
        if !readings[a].is_finite() || !readings[b].is_finite() || !readings[c].is_finite() {
            continue;
        }
        let Some((x, y)) = solve_pair(positions[a], positions[b], readings[a], readings[b]) else {
            continue;
        };
        let cross = flatland_sqrt((x - positions[c]).powi(2) + y * y);
        if (cross - readings[c]).abs() <= tolerance {
            return Some((x, y));
        }
    }

    nearest_scanner_fallback(positions, readings)
}

/// Fires directly overhead of whichever scanner currently reports the
/// smallest finite distance. `None` if every scanner is out of range.
fn nearest_scanner_fallback(positions: &[f32], readings: &[f32]) -> Option<(f32, f32)> {
    let (idx, &d_min) = readings
        .iter()
        .enumerate()
        .filter(|(_, d)| d.is_finite())
        .min_by(|a, b| a.1.partial_cmp(b.1).expect("readings are never NaN here"))?;
    Some((positions[idx], d_min))
}
