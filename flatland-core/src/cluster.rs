// Copyright (c) 2026 flatland developers
//
// Licensed under the Apache License, Version 2.0
// <LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0> or the MIT
// license <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. All files in the project carrying such notice may not be copied,
// modified, or distributed except according to those terms.

//! The bounded collection of asteroids a scanner array observes and a
//! defence controller clears.

use crate::{asteroid::Asteroid, error::FlatlandError, polynomial::Polynomial};
use getset::Getters;
use tracing::debug;

/// Cut-off radius beyond which a scanner reports [`Reading::OutOfRange`].
pub const SCAN_RADIUS: f32 = 1000.0;

/// The three-way result of a scan, kept distinct from a bare `f32` so
/// the sentinel values (`+inf`, `NaN`) can never be mixed into arithmetic
/// by accident. `scan` (the public, `f32`-returning API) converts this
/// into the sentinel-laden scalar spec.md describes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Reading {
    /// Distance to the nearest alive asteroid.
    Finite(f32),
    /// No alive asteroid is within [`SCAN_RADIUS`].
    OutOfRange,
    /// At least one asteroid has impacted.
    Impacted,
}

impl From<Reading> for f32 {
    fn from(reading: Reading) -> Self {
        match reading {
            Reading::Finite(d) => d,
            Reading::OutOfRange => f32::INFINITY,
            Reading::Impacted => f32::NAN,
        }
    }
}

/// A fixed-capacity collection of asteroids sharing one interception
/// tolerance and one global clock.
#[derive(Debug, Getters)]
pub struct AsteroidCluster {
    #[getset(get = "pub")]
    capacity: usize,
    #[getset(get = "pub")]
    tolerance: f32,
    asteroids: Vec<Asteroid>,
    clock: u32,
    impact: bool,
}

impl AsteroidCluster {
    /// Creates an empty cluster with room for `capacity` asteroids, all
    /// sharing `tolerance` as their interception radius.
    #[must_use]
    pub fn new(capacity: usize, tolerance: f32) -> Self {
        Self {
            capacity,
            tolerance,
            asteroids: Vec::with_capacity(capacity),
            clock: 0,
            impact: false,
        }
    }

    /// Appends a new alive asteroid, at the cluster's current clock, made
    /// from owned copies of `poly_x`/`poly_y` (callers routinely reuse
    /// one polynomial buffer across many asteroids, so the cluster must
    /// not alias it).
    ///
    /// # Errors
    /// Returns [`FlatlandError::CapacityExceeded`] if the cluster already
    /// holds `capacity` asteroids.
    pub fn add_asteroid(&mut self, poly_x: Polynomial, poly_y: Polynomial) -> Result<(), FlatlandError> {
        if self.asteroids.len() >= self.capacity {
            return Err(FlatlandError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        self.asteroids
            .push(Asteroid::new(poly_x, poly_y, self.tolerance, self.clock));
        debug!(count = self.asteroids.len(), capacity = self.capacity, "asteroid added to cluster");
        Ok(())
    }

    /// Advances every alive asteroid's local clock by one step, then
    /// latches the impact flag if any alive asteroid now sits at `y <= 0`.
    /// The flag never clears once set.
    pub fn update(&mut self) {
        self.clock += 1;
        for asteroid in &mut self.asteroids {
            asteroid.update();
        }
        if self.asteroids.iter().any(|a| a.alive() && a.impacted()) {
            self.impact = true;
        }
    }

    /// True once no alive asteroid remains (vacuously true for an empty
    /// cluster).
    #[must_use]
    pub fn cleared(&self) -> bool {
        self.asteroids.iter().all(|a| !a.alive())
    }

    /// The sticky impact flag.
    #[must_use]
    pub fn impact(&self) -> bool {
        self.impact
    }

    fn scan_reading(&self, x: f32, y: f32) -> Reading {
        if self.impact {
            return Reading::Impacted;
        }
        let nearest = self
            .asteroids
            .iter()
            .filter(|a| a.alive())
            .map(|a| a.distance(x, y))
            .fold(f32::INFINITY, f32::min);
        if nearest <= SCAN_RADIUS {
            Reading::Finite(nearest)
        } else {
            Reading::OutOfRange
        }
    }

    /// A pure observation of the minimum Euclidean distance from `(x, y)`
    /// to any alive asteroid: `NaN` if the cluster has latched impact,
    /// `+inf` if no alive asteroid is within [`SCAN_RADIUS`], otherwise
    /// the minimum distance. Never mutates clock or positions.
    #[must_use]
    pub fn scan(&self, x: f32, y: f32) -> f32 {
        self.scan_reading(x, y).into()
    }

    /// Attempts to intercept at `(x, y)`: the first alive asteroid (in
    /// insertion order) within `tolerance` is marked not alive. At most
    /// one asteroid dies per call.
    pub fn intercept(&mut self, x: f32, y: f32) {
        for asteroid in &mut self.asteroids {
            if asteroid.intercept(x, y) {
                return;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::AsteroidCluster;
    use crate::{error::FlatlandError, polynomial::Polynomial};
    use approx::assert_relative_eq;

    fn poly(coeffs: &[f32]) -> Polynomial {
        Polynomial::new(coeffs.to_vec()).unwrap()
    }

    #[test]
    fn static_single_asteroid_scenario() {
        let mut cluster = AsteroidCluster::new(1, 1.0);
        cluster.add_asteroid(poly(&[100.0]), poly(&[100.0])).unwrap();
        assert!(!cluster.cleared());

        assert_relative_eq!(cluster.scan(0.0, 100.0), 100.0, epsilon = 1.0);
        cluster.update();
        cluster.update();
        assert_relative_eq!(cluster.scan(0.0, 100.0), 100.0, epsilon = 1.0);

        cluster.intercept(100.0, 100.0);
        assert!(cluster.cleared());
    }

    #[test]
    fn linear_single_asteroid_scenario() {
        let mut cluster = AsteroidCluster::new(1, 1.0);
        cluster.add_asteroid(poly(&[-3.0, 100.0]), poly(&[-3.0, 100.0])).unwrap();

        cluster.update();
        assert_relative_eq!(cluster.scan(0.0, 97.0), 97.0, epsilon = 1.0);

        cluster.update();
        // asteroid now at (94, 94); a guess of (97, 97) misses
        cluster.intercept(97.0, 97.0);
        assert!(!cluster.cleared());

        cluster.update();
        // asteroid now at (91, 91), exactly the guess: hits
        cluster.intercept(91.0, 91.0);
        assert!(cluster.cleared());
    }

    #[test]
    fn linear_asteroid_impacts_immediately() {
        let mut cluster = AsteroidCluster::new(1, 1.0);
        cluster.add_asteroid(poly(&[-3.0, 1.0]), poly(&[-3.0, 1.0])).unwrap();
        cluster.update();
        assert!(!cluster.cleared());
        assert!(cluster.impact());
    }

    #[test]
    fn capacity_is_enforced() {
        let mut cluster = AsteroidCluster::new(1, 1.0);
        cluster.add_asteroid(poly(&[1.0]), poly(&[1.0])).unwrap();
        let err = cluster.add_asteroid(poly(&[2.0]), poly(&[2.0])).unwrap_err();
        assert_eq!(err, FlatlandError::CapacityExceeded { capacity: 1 });
    }

    #[test]
    fn capacity_of_1025_accepts_all_inserts() {
        let mut cluster = AsteroidCluster::new(1025, 1.0);
        for _ in 0..1025 {
            cluster.add_asteroid(poly(&[-3.0, 1.0]), poly(&[-3.0, 1.0])).unwrap();
        }
        assert!(!cluster.cleared());
        cluster.update();
        assert!(cluster.impact());
    }

    #[test]
    fn scan_sentinels_follow_spec_rules() {
        let mut cluster = AsteroidCluster::new(1, 1.0);
        cluster.add_asteroid(poly(&[2000.0]), poly(&[2000.0])).unwrap();
        assert!(cluster.scan(0.0, 0.0).is_infinite());

        cluster.intercept(2000.0, 2000.0);
        assert!(cluster.cleared());
        assert!(cluster.scan(0.0, 0.0).is_infinite());
    }

    #[test]
    fn impact_latches_and_propagates_to_scan() {
        let mut cluster = AsteroidCluster::new(1, 1.0);
        // y(0) = -1: impacted from the very first observation
        cluster.add_asteroid(poly(&[100.0]), poly(&[-1.0])).unwrap();
        cluster.update();
        assert!(cluster.impact());
        assert!(cluster.scan(0.0, 0.0).is_nan());
        cluster.update();
        assert!(cluster.impact());
    }

    #[test]
    fn scan_is_pure_and_repeatable() {
        let mut cluster = AsteroidCluster::new(1, 1.0);
        cluster.add_asteroid(poly(&[100.0]), poly(&[100.0])).unwrap();
        let first = cluster.scan(0.0, 0.0);
        let second = cluster.scan(0.0, 0.0);
        assert_relative_eq!(first, second, epsilon = 1e-6);
    }

    #[test]
    fn intercept_clears_at_most_one_asteroid_per_call() {
        let mut cluster = AsteroidCluster::new(2, 1.0);
        cluster.add_asteroid(poly(&[0.0]), poly(&[10.0])).unwrap();
        cluster.add_asteroid(poly(&[0.0]), poly(&[10.0])).unwrap();

        cluster.intercept(0.0, 10.0);
        assert!(!cluster.cleared(), "one asteroid should still be alive");

        cluster.intercept(0.0, 10.0);
        assert!(cluster.cleared(), "the second hit clears the last asteroid");
    }
}
