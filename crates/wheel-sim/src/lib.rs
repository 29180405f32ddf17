//! # wheel-sim — Batch spin simulator
//!
//! Validates that a wheel configuration's empirical outcome distribution
//! matches its angular shares: samples the selector directly (no animation),
//! worker-parallel, with deterministic per-worker RNG streams so the same
//! seed always produces the same report.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use wheel_core::CategoryKey;
use wheel_engine::{SectorLayout, WheelConfig, WheelConfigError, select};

/// Simulation parameters
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SimConfig {
    /// Total spins to simulate
    pub spins: u64,
    /// Master seed; worker streams derive from it
    pub seed: u64,
    /// Worker count (0 = rayon default)
    pub workers: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            spins: 100_000,
            seed: 0x5EED_u64,
            workers: 0,
        }
    }
}

/// Per-sector frequency statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectorStat {
    /// Index in the configured sector list
    pub sector_index: usize,
    /// Outcome category of the sector
    pub key: CategoryKey,
    /// Angular share (angle / 360)
    pub expected_share: f64,
    /// Observed hit share
    pub observed_share: f64,
    /// Raw hit count
    pub hits: u64,
}

/// Simulation report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimReport {
    /// Spins simulated
    pub spins: u64,
    /// Per-sector statistics, in sector order
    pub sectors: Vec<SectorStat>,
    /// Chi-square goodness-of-fit statistic against the angular shares
    pub chi_square: f64,
}

impl SimReport {
    /// Largest absolute deviation between observed and expected share
    pub fn max_deviation(&self) -> f64 {
        self.sectors
            .iter()
            .map(|s| (s.observed_share - s.expected_share).abs())
            .fold(0.0, f64::max)
    }

    /// Export as pretty JSON
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

/// Simulation errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum SimError {
    #[error("Simulation needs at least one spin")]
    NoSpins,

    #[error(transparent)]
    Config(#[from] WheelConfigError),
}

/// Run a batch simulation over a wheel configuration
pub fn run(sim: &SimConfig, wheel: &WheelConfig) -> Result<SimReport, SimError> {
    if sim.spins == 0 {
        return Err(SimError::NoSpins);
    }
    wheel.validate()?;

    let layout = SectorLayout::build(&wheel.sectors, wheel.anchor_degrees);
    let sector_count = wheel.sectors.len();

    let workers = if sim.workers == 0 {
        rayon::current_num_threads().max(1)
    } else {
        sim.workers
    };
    let workers = workers.min(sim.spins as usize).max(1);

    log::debug!("simulating {} spins across {} worker(s)", sim.spins, workers);

    // Split spins across workers; the first workers take the remainder
    let base = sim.spins / workers as u64;
    let remainder = sim.spins % workers as u64;

    let hits: Vec<u64> = (0..workers)
        .into_par_iter()
        .map(|worker| {
            let spins = base + u64::from((worker as u64) < remainder);
            // Independent deterministic stream per worker
            let mut rng = ChaCha8Rng::seed_from_u64(sim.seed);
            rng.set_stream(worker as u64);

            let mut counts = vec![0u64; sector_count];
            for _ in 0..spins {
                let r: f64 = rng.random_range(0.0..360.0);
                counts[select(r, layout.ranges())] += 1;
            }
            counts
        })
        .reduce(
            || vec![0u64; sector_count],
            |mut a, b| {
                for (x, y) in a.iter_mut().zip(b) {
                    *x += y;
                }
                a
            },
        );

    let total = sim.spins as f64;
    let mut chi_square = 0.0;
    let sectors = wheel
        .sectors
        .iter()
        .enumerate()
        .map(|(sector_index, sector)| {
            let expected_share = sector.angle_degrees / 360.0;
            let expected_hits = expected_share * total;
            let observed = hits[sector_index] as f64;
            chi_square += (observed - expected_hits).powi(2) / expected_hits;

            SectorStat {
                sector_index,
                key: sector.key.clone(),
                expected_share,
                observed_share: observed / total,
                hits: hits[sector_index],
            }
        })
        .collect();

    Ok(SimReport {
        spins: sim.spins,
        sectors,
        chi_square,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn init_logs() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn test_frequencies_track_angular_shares() {
        init_logs();
        let report = run(&SimConfig::default(), &WheelConfig::stoplight()).unwrap();

        assert_eq!(report.spins, 100_000);
        assert_eq!(report.sectors.len(), 6);
        assert!(
            report.max_deviation() < 0.01,
            "max deviation {:.4} too large",
            report.max_deviation()
        );
        // Chi-square with 5 degrees of freedom: well under the far tail
        assert!(
            report.chi_square < 25.0,
            "chi-square {:.2} too large",
            report.chi_square
        );
    }

    #[test]
    fn test_same_seed_same_report() {
        init_logs();
        let sim = SimConfig {
            spins: 20_000,
            seed: 99,
            workers: 4,
        };
        let wheel = WheelConfig::stoplight();

        let a = run(&sim, &wheel).unwrap();
        let b = run(&sim, &wheel).unwrap();

        for (x, y) in a.sectors.iter().zip(b.sectors.iter()) {
            assert_eq!(x.hits, y.hits);
        }
    }

    #[test]
    fn test_rejects_zero_spins() {
        let sim = SimConfig {
            spins: 0,
            ..SimConfig::default()
        };
        assert!(matches!(
            run(&sim, &WheelConfig::stoplight()),
            Err(SimError::NoSpins)
        ));
    }

    #[test]
    fn test_rejects_invalid_wheel() {
        let mut wheel = WheelConfig::stoplight();
        wheel.sectors[0].angle_degrees = 10.0;

        assert!(matches!(
            run(&SimConfig::default(), &wheel),
            Err(SimError::Config(_))
        ));
    }

    #[test]
    fn test_hits_sum_to_spins() {
        let sim = SimConfig {
            spins: 12_345,
            seed: 7,
            workers: 3,
        };
        let report = run(&sim, &WheelConfig::stoplight()).unwrap();

        let total: u64 = report.sectors.iter().map(|s| s.hits).sum();
        assert_eq!(total, sim.spins);
    }
}
