use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use seqpair_core::{net, AlphaEnergy, Method, Options};
use seqpair_io::verify;

/// Pack rectangles onto a floorplan by simulated annealing.
#[derive(Parser, Debug)]
#[command(name = "run_packer", version, about)]
struct Args {
    /// Rect file: one rectangle per line, `x_lb y_lb x_rt y_rt`
    rect_file: PathBuf,

    /// Net file: one `i j` index pair per line, 0-based into the rect file
    net_file: PathBuf,

    /// Area/wirelength trade-off in [0, 1]: 1.0 minimizes area only
    alpha: f64,

    /// Evaluator to use: "lcs" or "dag" (case-insensitive)
    method: String,

    /// Where the final placement is written, `x_lb y_lb x_rt y_rt` per line
    result_file: PathBuf,

    /// Number of OS threads to run the annealer on
    #[arg(default_value_t = 1)]
    num_threads: usize,

    /// 0 silent, 1 summary, 2 per-temperature statistics, 3 per-resample decisions
    #[arg(default_value_t = 1)]
    verbose_level: u8,

    /// Options file overriding the default SA schedule
    options_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let method: Method = args.method.parse().context("invalid method")?;
    if !(0.0..=1.0).contains(&args.alpha) {
        bail!("alpha must be in [0, 1], got {}", args.alpha);
    }

    println!("[run_packer] reading rectangles from {}", args.rect_file.display());
    let mut layout = seqpair_io::read_rects(&args.rect_file)
        .with_context(|| format!("reading rect file {}", args.rect_file.display()))?;

    println!("[run_packer] reading nets from {}", args.net_file.display());
    let nets = seqpair_io::read_nets(&args.net_file, layout.len())
        .with_context(|| format!("reading net file {}", args.net_file.display()))?;

    let options = match &args.options_file {
        Some(path) => {
            println!("[run_packer] reading options from {}", path.display());
            seqpair_io::read_options(path).with_context(|| format!("reading options file {}", path.display()))?
        }
        None => default_options(args.num_threads, layout.len())?,
    };

    let energy_fn = AlphaEnergy::new(args.alpha);
    let mut rng = SmallRng::from_os_rng();

    println!(
        "[run_packer] annealing {} rectangles, {} nets, method={:?}, threads={}",
        layout.len(),
        nets.len(),
        method,
        args.num_threads,
    );
    let start = std::time::Instant::now();
    let report = seqpair_core::parallel::run(
        &mut layout,
        &nets,
        &energy_fn,
        &options,
        method,
        args.num_threads,
        &mut rng,
        args.verbose_level,
    );
    let runtime = start.elapsed();

    println!("[run_packer] writing result to {}", args.result_file.display());
    seqpair_io::write_rects(&args.result_file, &layout)
        .with_context(|| format!("writing result file {}", args.result_file.display()))?;

    if args.verbose_level >= 1 {
        println!(
            "[run_packer] best_energy={:.6} final_temperature={:.6} simulations={} restarts={}",
            report.best_energy, report.final_temperature, report.num_simulations, report.num_restarts,
        );

        let sum_rect_areas = layout.sum_component_areas();
        let (w, h) = layout.bounding_box();
        let area = w * h;
        let wirelength = net::sum_manhattan_distances(&layout, &nets);
        println!("Runtime: {}ms", runtime.as_millis());
        println!("Sum of rectangle areas: {sum_rect_areas}");
        println!("Area: {area} ({w} {h})");
        println!("Utilization: {}", sum_rect_areas as f64 / area as f64);
        println!("Wirelength: {wirelength}");
        println!("Cost: {:.6}", report.best_energy);
    }

    run_acceptance_check(&layout, &nets, &energy_fn, report.best_energy);

    Ok(())
}

/// Base `sims_per_temperature` is `max(30 * num_rects, 1024)`, matching the
/// original CLI's default. `num_threads >= 2` scales that base by
/// `ceil((num_threads+1)/2)` and sets `restart_ratio` to 2.3.
fn default_options(num_threads: usize, num_rects: usize) -> Result<Options> {
    let base = (30 * num_rects as u32).max(1024);
    if num_threads >= 2 {
        let multiplier = (num_threads as u32 + 1).div_ceil(2);
        Ok(Options::new(0.9, base * multiplier, 0.95, 2.3, 0.01)?)
    } else {
        Ok(Options::new(0.9, base, 0.95, 2.0, 0.01)?)
    }
}

/// Recompute the reported cost and check for overlaps; diagnostic only,
/// never affects the exit code.
fn run_acceptance_check(layout: &seqpair_core::Layout, nets: &[seqpair_core::Net], energy_fn: &AlphaEnergy, reported_cost: f64) {
    if verify::check_cost(layout, nets, energy_fn, reported_cost) {
        println!("[run_packer] acceptance check: cost matches recomputation");
    } else {
        println!("[run_packer] acceptance check: WRONG ANSWER — cost does not match recomputation");
    }
    match verify::first_overlap(layout) {
        None => println!("[run_packer] acceptance check: no overlapping rectangles"),
        Some((i, j)) => println!("[run_packer] acceptance check: WRONG ANSWER — rectangles {i} and {j} overlap"),
    }
}
