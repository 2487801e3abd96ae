use std::sync::{Mutex, Barrier};
use std::sync::atomic::{AtomicBool, Ordering};

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::energy::EnergyFunction;
use crate::eval::Method;
use crate::layout::Layout;
use crate::move_gen::{MoveGenerator, UniformChangeDistribution};
use crate::net::Net;
use crate::options::Options;
use crate::sa::{accept_metropolis, sequenced, Report};
use crate::scratch::Scratch;

/// Per-worker state visible to the coordinator between temperature levels.
struct WorkerSlot<E> {
    generator: MoveGenerator,
    layout: Layout,
    energy_fn: E,
    current_energy: f64,
    average_energy: f64,
    acceptances: u32,
}

/// Run simulated annealing with `num_threads` OS threads: `num_threads - 1`
/// workers plus a coordinator (the calling thread) that resamples worker
/// chains by Boltzmann weight at each temperature level.
///
/// Delegates to [`sequenced::run`] when `num_threads < 2`.
#[allow(clippy::too_many_arguments)]
pub fn run<E: EnergyFunction, R: Rng + ?Sized>(
    layout: &mut Layout,
    nets: &[Net],
    energy_fn: &E,
    options: &Options,
    method: Method,
    num_threads: usize,
    rng: &mut R,
    verbose_level: u8,
) -> Report {
    if num_threads < 2 {
        return sequenced::run(layout, nets, energy_fn, options, method, rng, verbose_level);
    }

    let n = layout.len();
    let num_workers = num_threads - 1;
    let quota = options.sims_per_temperature().div_ceil(num_workers as u32) as usize;
    let total_trials = quota * num_workers;

    let mut initial_generator = MoveGenerator::construct(layout.widths(), layout.heights(), rng);
    initial_generator.shuffle(rng);
    let mut scratch = Scratch::new(n);
    let mut dist = UniformChangeDistribution;

    let mut best_energy = f64::INFINITY;
    let mut best_generator = initial_generator.clone();
    let mut best_layout = layout.clone();

    let mut startup_energies = Vec::with_capacity(64);
    let mut initial_energy = 0.0;
    for _ in 0..64 {
        let (w, h) = initial_generator.evaluate(layout, rng, &mut scratch, &mut dist, method);
        initial_energy = energy_fn.energy(layout, nets, w, h);
        if initial_energy < best_energy {
            best_energy = initial_energy;
            best_generator = initial_generator.clone();
            best_layout = layout.clone();
        }
        startup_energies.push(initial_energy);
        initial_generator.shuffle(rng);
    }
    let (_, sigma) = super::mean_stddev(&startup_energies);
    let initial_temperature = (sigma + f64::EPSILON) / (1.0 / options.initial_accept_prob()).ln();

    let slots: Vec<Mutex<WorkerSlot<E>>> = (0..num_workers)
        .map(|_| {
            Mutex::new(WorkerSlot {
                generator: initial_generator.clone(),
                layout: layout.clone(),
                energy_fn: energy_fn.clone(),
                current_energy: initial_energy,
                average_energy: initial_energy,
                acceptances: 0,
            })
        })
        .collect();

    let best = Mutex::new((best_energy, best_layout, best_generator));
    let temperature = Mutex::new(initial_temperature);
    let stop = AtomicBool::new(false);
    let barrier = Barrier::new(num_threads);
    let num_simulations = std::sync::atomic::AtomicU64::new(64);
    let num_restarts = std::sync::atomic::AtomicU64::new(0);

    std::thread::scope(|scope| {
        for worker_index in 0..num_workers {
            let slots = &slots;
            let best = &best;
            let temperature = &temperature;
            let stop = &stop;
            let barrier = &barrier;
            let num_simulations = &num_simulations;
            let seed: u64 = rng.random();

            scope.spawn(move || {
                let mut worker_rng = SmallRng::seed_from_u64(seed.wrapping_add(worker_index as u64));
                let mut worker_scratch = Scratch::new(n);
                let mut worker_dist = UniformChangeDistribution;

                loop {
                    barrier.wait();
                    if stop.load(Ordering::Acquire) {
                        break;
                    }

                    let t = *temperature.lock().unwrap();
                    let mut slot_guard = slots[worker_index].lock().unwrap();
                    let slot = &mut *slot_guard;
                    let mut acceptances = 0u32;
                    let mut sum_energy = 0.0f64;

                    for _ in 0..quota {
                        let (w, h) = slot.generator.evaluate(&mut slot.layout, &mut worker_rng, &mut worker_scratch, &mut worker_dist, method);
                        let new_energy = slot.energy_fn.energy(&slot.layout, nets, w, h);
                        sum_energy += new_energy;
                        num_simulations.fetch_add(1, Ordering::Relaxed);

                        if accept_metropolis(new_energy - slot.current_energy, t, &mut worker_rng) {
                            acceptances += 1;
                            slot.current_energy = new_energy;

                            let mut best_guard = best.lock().unwrap();
                            if slot.current_energy < best_guard.0 {
                                *best_guard = (slot.current_energy, slot.layout.clone(), slot.generator.clone());
                            }
                        } else {
                            slot.generator.rollback();
                        }
                    }

                    slot.average_energy = sum_energy / quota as f64;
                    slot.acceptances = acceptances;
                    drop(slot_guard);

                    barrier.wait();
                }
            });
        }

        // Coordinator: the calling thread, running the same round protocol
        // without a worker quota of its own.
        loop {
            barrier.wait();
            if stop.load(Ordering::Acquire) {
                break;
            }
            barrier.wait();

            let total_acceptances: u32 = slots.iter().map(|s| s.lock().unwrap().acceptances).sum();
            let t = *temperature.lock().unwrap();

            if verbose_level >= 2 {
                let avg: f64 = slots.iter().map(|s| s.lock().unwrap().average_energy).sum::<f64>() / num_workers as f64;
                println!(
                    "  T={t:.6} avg_E={avg:.6} accept_rate={:.3}",
                    total_acceptances as f64 / total_trials as f64
                );
            }

            if (total_acceptances as f64) < options.stopping_accept_prob() * total_trials as f64 || t < 1.0 {
                stop.store(true, Ordering::Release);
                continue;
            }

            resample(&slots, &best, options, t, &num_restarts, rng, verbose_level);
            *temperature.lock().unwrap() = t * options.decreasing_ratio();
        }
    });

    let (best_energy, best_layout, _) = best.into_inner().unwrap();
    *layout = best_layout;

    if verbose_level >= 1 {
        println!(
            "parallel sa ({num_threads} threads): best_E={best_energy:.6} sims={} restarts={}",
            num_simulations.load(Ordering::Relaxed),
            num_restarts.load(Ordering::Relaxed)
        );
    }

    Report {
        best_energy,
        final_temperature: *temperature.lock().unwrap(),
        num_simulations: num_simulations.load(Ordering::Relaxed),
        num_restarts: num_restarts.load(Ordering::Relaxed),
    }
}

/// Boltzmann-weighted resampling of worker chains (spec §4.6 step 3): each
/// of the `num_workers` slots independently draws a source worker weighted
/// by `exp(-(E_k - mean(E))/T)`, subtracting the mean first to keep the
/// exponent in a numerically safe range.
#[allow(clippy::too_many_arguments)]
fn resample<E: EnergyFunction, R: Rng + ?Sized>(
    slots: &[Mutex<WorkerSlot<E>>],
    best: &Mutex<(f64, Layout, MoveGenerator)>,
    options: &Options,
    temperature: f64,
    num_restarts: &std::sync::atomic::AtomicU64,
    rng: &mut R,
    verbose_level: u8,
) {
    let energies: Vec<f64> = slots.iter().map(|s| s.lock().unwrap().current_energy).collect();
    let mean = energies.iter().sum::<f64>() / energies.len() as f64;

    let weights: Vec<f64> = energies.iter().map(|&e| (-(e - mean) / temperature).exp()).collect();
    let total: f64 = weights.iter().sum();
    let mut cdf = Vec::with_capacity(weights.len());
    let mut running = 0.0;
    for w in &weights {
        running += w / total;
        cdf.push(running);
    }

    let (best_energy, best_layout, best_generator) = {
        let guard = best.lock().unwrap();
        (guard.0, guard.1.clone(), guard.2.clone())
    };

    let mut replacements = Vec::with_capacity(slots.len());
    for slot_index in 0..slots.len() {
        let u: f64 = rng.random();
        let k = cdf.partition_point(|&c| c < u).min(slots.len() - 1);
        let source = slots[k].lock().unwrap();
        let restart = source.current_energy > options.restart_ratio() * best_energy;
        if verbose_level >= 3 {
            println!(
                "    resample: slot {slot_index} <- {}",
                if restart { "best (restart)".to_string() } else { format!("slot {k}") }
            );
        }
        if restart {
            replacements.push((best_generator.clone(), best_layout.clone(), best_energy, true));
        } else {
            replacements.push((source.generator.clone(), source.layout.clone(), source.current_energy, false));
        }
    }

    for (slot, (generator, layout, energy, restarted)) in slots.iter().zip(replacements) {
        let mut slot = slot.lock().unwrap();
        slot.generator = generator;
        slot.layout = layout;
        slot.current_energy = energy;
        if restarted {
            num_restarts.fetch_add(1, Ordering::Relaxed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::energy::AlphaEnergy;
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
    fn single_thread_delegates_to_sequenced() {
        let mut layout = six_rect_layout();
        let nets = [Net::new(0, 1)];
        let energy_fn = AlphaEnergy::new(0.5);
        let options = Options::new(0.8, 20, 0.9, 2.0, 0.02).unwrap();
        let mut rng = SmallRng::seed_from_u64(7);
        let report = run(&mut layout, &nets, &energy_fn, &options, Method::Lcs, 1, &mut rng, 0);
        assert!(report.num_simulations > 0);
    }

    #[test]
    fn two_workers_terminate_and_report_a_valid_layout() {
        let mut layout = six_rect_layout();
        let nets = [Net::new(0, 1), Net::new(2, 3)];
        let energy_fn = AlphaEnergy::new(0.5);
        let options = Options::new(0.8, 30, 0.9, 2.0, 0.02).unwrap();
        let mut rng = SmallRng::seed_from_u64(11);
        let report = run(&mut layout, &nets, &energy_fn, &options, Method::Lcs, 3, &mut rng, 0);

        let (w, h) = layout.bounding_box();
        let recomputed = energy_fn.energy(&layout, &nets, w, h);
        assert!((recomputed - report.best_energy).abs() < 1e-9);
    }
}
