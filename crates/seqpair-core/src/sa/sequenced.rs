use rand::Rng;

use crate::energy::EnergyFunction;
use crate::eval::Method;
use crate::layout::Layout;
use crate::move_gen::{MoveGenerator, UniformChangeDistribution};
use crate::net::Net;
use crate::options::Options;
use crate::sa::{accept_metropolis, mean_stddev, Report};
use crate::scratch::Scratch;

const STARTUP_TRIALS: usize = 64;

/// Run simulated annealing single-threaded, overwriting `layout` with the
/// best placement found and returning summary statistics.
pub fn run<E: EnergyFunction, R: Rng + ?Sized>(
    layout: &mut Layout,
    nets: &[Net],
    energy_fn: &E,
    options: &Options,
    method: Method,
    rng: &mut R,
    verbose_level: u8,
) -> Report {
    let n = layout.len();
    let mut generator = MoveGenerator::construct(layout.widths(), layout.heights(), rng);
    generator.shuffle(rng);
    let mut scratch = Scratch::new(n);
    let mut dist = UniformChangeDistribution;
    let mut num_simulations: u64 = 0;

    let mut best_energy = f64::INFINITY;
    let mut best_generator = generator.clone();
    let mut best_layout = layout.clone();

    let mut startup_energies = Vec::with_capacity(STARTUP_TRIALS);
    let mut current_energy = 0.0;
    for _ in 0..STARTUP_TRIALS {
        let (w, h) = generator.evaluate(layout, rng, &mut scratch, &mut dist, method);
        current_energy = energy_fn.energy(layout, nets, w, h);
        num_simulations += 1;
        if current_energy < best_energy {
            best_energy = current_energy;
            best_generator = generator.clone();
            best_layout = layout.clone();
        }
        startup_energies.push(current_energy);
        generator.shuffle(rng);
    }
    let (_, sigma) = mean_stddev(&startup_energies);
    let mut temperature = (sigma + f64::EPSILON) / (1.0 / options.initial_accept_prob()).ln();

    if verbose_level >= 1 {
        println!(
            "sequenced sa: startup sigma={sigma:.6} T0={temperature:.6} min_E={best_energy:.6}"
        );
    }

    let mut num_restarts: u64 = 0;
    loop {
        let mut acceptances: u32 = 0;
        let mut sum_energy = 0.0f64;

        for _ in 0..options.sims_per_temperature() {
            let (w, h) = generator.evaluate(layout, rng, &mut scratch, &mut dist, method);
            let new_energy = energy_fn.energy(layout, nets, w, h);
            num_simulations += 1;
            sum_energy += new_energy;

            if accept_metropolis(new_energy - current_energy, temperature, rng) {
                acceptances += 1;
                current_energy = new_energy;
                if current_energy < best_energy {
                    best_energy = current_energy;
                    best_generator = generator.clone();
                    best_layout = layout.clone();
                }
            } else {
                generator.rollback();
            }
        }

        let average_energy = sum_energy / options.sims_per_temperature() as f64;
        if verbose_level >= 2 {
            println!(
                "  T={temperature:.6} avg_E={average_energy:.6} accept_rate={:.3}",
                acceptances as f64 / options.sims_per_temperature() as f64
            );
        }

        if (acceptances as f64) < options.stopping_accept_prob() * options.sims_per_temperature() as f64
            || temperature < 1.0
        {
            break;
        }

        if average_energy > options.restart_ratio() * best_energy {
            generator = best_generator.clone();
            current_energy = best_energy;
            num_restarts += 1;
        }

        temperature *= options.decreasing_ratio();
    }

    *layout = best_layout;

    if verbose_level >= 1 {
        println!(
            "sequenced sa: final T={temperature:.6} best_E={best_energy:.6} sims={num_simulations} restarts={num_restarts}"
        );
    }

    Report { best_energy, final_temperature: temperature, num_simulations, num_restarts }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::energy::AlphaEnergy;
    use crate::net::Net;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn six_rect_layout() -> Layout {
        let mut layout = Layout::new();
        for (w, h) in [(4, 6), (3, 7), (3, 3), (2, 3), (4, 3), (6, 4)] {
            layout.push(w, h);
        }
        layout
    }

    #[test]
    fn run_improves_or_matches_a_single_shuffle() {
        let mut layout = six_rect_layout();
        let nets = [Net::new(0, 1), Net::new(2, 3), Net::new(4, 5)];
        let energy_fn = AlphaEnergy::new(0.5);
        let options = Options::new(0.8, 40, 0.9, 2.0, 0.02).unwrap();
        let mut rng = SmallRng::seed_from_u64(123);

        let report = run(&mut layout, &nets, &energy_fn, &options, Method::Lcs, &mut rng, 0);

        let (w, h) = layout.bounding_box();
        let recomputed = energy_fn.energy(&layout, &nets, w, h);
        assert!((recomputed - report.best_energy).abs() < 1e-9);
        assert!(report.num_simulations > 0);
    }

    #[test]
    fn single_rectangle_terminates_immediately() {
        let mut layout = Layout::new();
        layout.push(5, 5);
        let energy_fn = AlphaEnergy::new(1.0);
        let options = Options::new(0.8, 10, 0.9, 2.0, 0.02).unwrap();
        let mut rng = SmallRng::seed_from_u64(1);
        let report = run(&mut layout, &[], &energy_fn, &options, Method::Dag, &mut rng, 0);
        assert_eq!(layout.bounding_box(), (5, 5));
        assert_eq!(report.best_energy, 25.0);
    }
}
