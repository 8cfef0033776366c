//! Random instance generation.
//!
//! Produces valid job sets and price tables for benchmarks and
//! property tests. Every generated job fits an empty run of the target
//! printer, so the generated instances never fail with
//! `CapacityExceeded`.

use rand::Rng;

use crate::models::{PriceTable, PrintJob, PrinterCapacity};

/// Configuration for random instance generation.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::SmallRng;
/// use u_batch::generate::{random_jobs, GeneratorConfig};
/// use u_batch::models::PrinterCapacity;
///
/// let config = GeneratorConfig::default()
///     .with_job_count(20)
///     .with_priority_levels(3);
/// let mut rng = SmallRng::seed_from_u64(7);
/// let jobs = random_jobs(&config, &PrinterCapacity::new(300.0, 4), &mut rng);
/// assert_eq!(jobs.len(), 20);
/// assert!(jobs.iter().all(|j| (1..=3).contains(&j.priority)));
/// ```
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Number of jobs to generate.
    pub job_count: usize,
    /// Priorities are drawn from `1..=priority_levels`.
    pub priority_levels: u32,
    /// Smallest job volume as a fraction of `max_volume`, in (0, 1].
    pub min_volume_fraction: f64,
    /// Largest job volume as a fraction of `max_volume`, in (0, 1].
    pub max_volume_fraction: f64,
    /// Print times are drawn from `1..=max_print_time`.
    pub max_print_time: i64,
    /// Prices are drawn from `0..=max_price`.
    pub max_price: i64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            job_count: 10,
            priority_levels: 3,
            min_volume_fraction: 0.05,
            max_volume_fraction: 1.0,
            max_print_time: 240,
            max_price: 50,
        }
    }
}

impl GeneratorConfig {
    pub fn with_job_count(mut self, n: usize) -> Self {
        self.job_count = n;
        self
    }

    pub fn with_priority_levels(mut self, levels: u32) -> Self {
        self.priority_levels = levels.max(1);
        self
    }

    pub fn with_volume_fractions(mut self, min: f64, max: f64) -> Self {
        self.min_volume_fraction = min.clamp(f64::MIN_POSITIVE, 1.0);
        self.max_volume_fraction = max.clamp(self.min_volume_fraction, 1.0);
        self
    }

    pub fn with_max_print_time(mut self, t: i64) -> Self {
        self.max_print_time = t.max(1);
        self
    }

    pub fn with_max_price(mut self, price: i64) -> Self {
        self.max_price = price.max(0);
        self
    }
}

/// Generates `config.job_count` jobs that each fit an empty run.
///
/// Job IDs are `J0`, `J1`, ... in input order.
pub fn random_jobs<R: Rng>(
    config: &GeneratorConfig,
    capacity: &PrinterCapacity,
    rng: &mut R,
) -> Vec<PrintJob> {
    let levels = config.priority_levels.max(1);
    let max_time = config.max_print_time.max(1);

    (0..config.job_count)
        .map(|i| {
            let fraction =
                rng.random_range(config.min_volume_fraction..=config.max_volume_fraction);
            PrintJob::new(
                format!("J{i}"),
                fraction * capacity.max_volume,
                rng.random_range(1..=levels),
                rng.random_range(1..=max_time),
            )
        })
        .collect()
}

/// Generates a price table with `len` entries.
pub fn random_prices<R: Rng>(config: &GeneratorConfig, len: usize, rng: &mut R) -> PriceTable {
    let max_price = config.max_price.max(0);
    (0..len).map(|_| rng.random_range(0..=max_price)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{validate_jobs, validate_rod};
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_jobs_valid() {
        let cap = PrinterCapacity::new(300.0, 3);
        let config = GeneratorConfig::default().with_job_count(50);
        let mut rng = SmallRng::seed_from_u64(42);

        let jobs = random_jobs(&config, &cap, &mut rng);
        assert_eq!(jobs.len(), 50);
        assert!(validate_jobs(&jobs, &cap).is_ok());
        assert!(jobs.iter().all(|j| j.fits_volume(cap.max_volume)));
        assert!(jobs.iter().all(|j| (1..=240).contains(&j.print_time)));
    }

    #[test]
    fn test_random_jobs_deterministic() {
        let cap = PrinterCapacity::new(100.0, 2);
        let config = GeneratorConfig::default();
        let a = random_jobs(&config, &cap, &mut SmallRng::seed_from_u64(9));
        let b = random_jobs(&config, &cap, &mut SmallRng::seed_from_u64(9));
        assert_eq!(a, b);
    }

    #[test]
    fn test_random_prices_valid() {
        let config = GeneratorConfig::default().with_max_price(10);
        let mut rng = SmallRng::seed_from_u64(1);
        let prices = random_prices(&config, 12, &mut rng);
        assert_eq!(prices.len(), 12);
        assert!(prices.as_slice().iter().all(|&p| (0..=10).contains(&p)));
        assert!(validate_rod(30, &prices).is_ok());
    }

    #[test]
    fn test_builder_clamps() {
        let config = GeneratorConfig::default()
            .with_priority_levels(0)
            .with_volume_fractions(0.8, 0.2)
            .with_max_print_time(-5)
            .with_max_price(-1);
        assert_eq!(config.priority_levels, 1);
        assert!((config.min_volume_fraction - 0.8).abs() < 1e-10);
        assert!((config.max_volume_fraction - 0.8).abs() < 1e-10);
        assert_eq!(config.max_print_time, 1);
        assert_eq!(config.max_price, 0);
    }
}
