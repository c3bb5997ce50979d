// Copyright (c) 2026 flatland developers
//
// Licensed under the Apache License, Version 2.0
// <LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0> or the MIT
// license <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. All files in the project carrying such notice may not be copied,
// modified, or distributed except according to those terms.

//! A fixed array of ground scanners sitting on `y = 0`.

use crate::cluster::AsteroidCluster;
use getset::Getters;

/// An immutable, ordered array of scanner x-positions along `y = 0`.
#[derive(Debug, Clone, Getters)]
pub struct ScannerArray {
    #[getset(get = "pub")]
    positions: Vec<f32>,
}

impl ScannerArray {
    /// Stores a copy of `positions` in the caller-supplied order.
    /// Positions need not be unique or sorted.
    #[must_use]
    pub fn new(positions: Vec<f32>) -> Self {
        Self { positions }
    }

    /// Number of scanners in this array.
    #[must_use]
    pub fn num_scanners(&self) -> usize {
        self.positions.len()
    }

    /// Scans `cluster` from every position, in order. If the cluster
    /// reports impact, every entry in the returned vector is `NaN`.
    #[must_use]
    pub fn scan(&self, cluster: &AsteroidCluster) -> Vec<f32> {
        self.positions.iter().map(|&x| cluster.scan(x, 0.0)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::ScannerArray;
    use crate::{cluster::AsteroidCluster, polynomial::Polynomial};
    use approx::assert_relative_eq;

    fn poly(coeffs: &[f32]) -> Polynomial {
        Polynomial::new(coeffs.to_vec()).unwrap()
    }

    #[test]
    fn constructor_round_trips_positions() {
        let positions: Vec<f32> = (0..100).map(|i| (i * i) as f32).collect();
        let scanner = ScannerArray::new(positions.clone());
        assert_eq!(scanner.num_scanners(), 100);
        assert_eq!(scanner.positions(), &positions[..]);
    }

    #[test]
    fn large_scanner_array_is_supported() {
        let positions: Vec<f32> = (0..16_384).map(|i| (i * i) as f32).collect();
        let scanner = ScannerArray::new(positions.clone());
        assert_eq!(scanner.num_scanners(), 16_384);
        assert_eq!(scanner.positions(), &positions[..]);
    }

    #[test]
    fn scan_reports_distance_per_scanner() {
        let mut cluster = AsteroidCluster::new(1, 1.0);
        cluster.add_asteroid(poly(&[100.0]), poly(&[100.0])).unwrap();
        let scanner = ScannerArray::new(vec![0.0, 50.0, 100.0, 150.0, 200.0]);

        let readings = scanner.scan(&cluster);
        let expected = [141.0, 111.0, 100.0, 111.0, 141.0];
        for (got, want) in readings.iter().zip(expected.iter()) {
            assert_relative_eq!(got, want, epsilon = 1.0);
        }
    }

    #[test]
    fn impact_propagates_nan_to_every_scanner() {
        let mut cluster = AsteroidCluster::new(1, 1.0);
        cluster.add_asteroid(poly(&[100.0]), poly(&[-1.0])).unwrap();
        cluster.update();
        let scanner = ScannerArray::new(vec![0.0, 50.0, 100.0, 150.0, 200.0]);
        let readings = scanner.scan(&cluster);
        assert!(readings.iter().all(|d| d.is_nan()));
    }
}
