//! Simulated-annealing drivers: a single-threaded reference implementation
//! and a multi-threaded variant that resamples worker chains by Boltzmann
//! weight at each temperature level.

pub mod parallel;
pub mod sequenced;

/// Summary statistics returned by either driver once it terminates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Report {
    pub best_energy: f64,
    pub final_temperature: f64,
    pub num_simulations: u64,
    pub num_restarts: u64,
}

/// Metropolis acceptance: accept if `delta <= 0`, else with probability `exp(-delta/temp)`.
///
/// Grounded on the teacher's `accept_metropolis` (partition/algorithm/anneal.rs),
/// adapted to a minimization objective (`delta = e_new - e_curr`).
pub(crate) fn accept_metropolis<R: rand::Rng + ?Sized>(delta: f64, temp: f64, rng: &mut R) -> bool {
    delta <= 0.0 || rng.random::<f64>() < (-delta / temp).exp()
}

/// Sample mean and (n-1)-denominator sample standard deviation.
pub(crate) fn mean_stddev(values: &[f64]) -> (f64, f64) {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0);
    (mean, variance.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accept_metropolis_always_accepts_non_positive_delta() {
        use rand::rngs::SmallRng;
        use rand::SeedableRng;
        let mut rng = SmallRng::seed_from_u64(0);
        assert!(accept_metropolis(-1.0, 1.0, &mut rng));
        assert!(accept_metropolis(0.0, 1.0, &mut rng));
    }

    #[test]
    fn mean_stddev_of_constant_values_is_zero() {
        let (mean, stddev) = mean_stddev(&[3.0, 3.0, 3.0, 3.0]);
        assert_eq!(mean, 3.0);
        assert_eq!(stddev, 0.0);
    }
}
