use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Generate a random rect/net instance for the packer.
#[derive(Parser, Debug)]
#[command(name = "generate_testcase", version, about)]
struct Args {
    /// Number of rectangles to generate
    num_rects: usize,

    /// Number of distinct nets to scatter over the rectangles
    num_lines: usize,

    /// Minimum rectangle width/height
    min_len: i64,

    /// Maximum rectangle width/height
    max_len: i64,

    /// Rect file to write
    rect_file: PathBuf,

    /// Net file to write
    net_file: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut rng = SmallRng::from_os_rng();
    let (layout, nets) = seqpair_io::testgen::generate(args.num_rects, args.num_lines, args.min_len, args.max_len, &mut rng)
        .context("generating test case")?;

    println!("[generate_testcase] writing {} rectangles to {}", layout.len(), args.rect_file.display());
    seqpair_io::write_rects(&args.rect_file, &layout)
        .with_context(|| format!("writing rect file {}", args.rect_file.display()))?;

    println!("[generate_testcase] writing {} nets to {}", nets.len(), args.net_file.display());
    seqpair_io::write_nets(&args.net_file, &nets)
        .with_context(|| format!("writing net file {}", args.net_file.display()))?;

    Ok(())
}
