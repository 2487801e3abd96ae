use rand::Rng;
use std::collections::HashSet;

use seqpair_core::layout::Layout;
use seqpair_core::net::Net;

use crate::error::{Error, Result};

/// Generate a random instance: `num_rects` rectangles with width/height
/// drawn uniformly from `min_len..=max_len`, plus `num_lines` distinct nets
/// scattered uniformly over the rectangle indices (no self-loops, no
/// duplicate unordered pairs).
pub fn generate<R: Rng + ?Sized>(
    num_rects: usize,
    num_lines: usize,
    min_len: i64,
    max_len: i64,
    rng: &mut R,
) -> Result<(Layout, Vec<Net>)> {
    if min_len < 1 || max_len < min_len {
        return Err(Error::InvalidTestCaseParams {
            detail: format!("dimension range [{min_len}, {max_len}] is not a valid positive range"),
        });
    }
    let max_distinct_pairs = num_rects * num_rects.saturating_sub(1) / 2;
    if num_lines > max_distinct_pairs {
        return Err(Error::InvalidTestCaseParams {
            detail: format!("requested {num_lines} nets but only {max_distinct_pairs} distinct pairs exist among {num_rects} rectangles"),
        });
    }
    if num_rects < 2 * num_lines {
        return Err(Error::InvalidTestCaseParams {
            detail: format!("num_rects ({num_rects}) should be at least 2x num_lines ({num_lines}) to keep generation fast"),
        });
    }

    let mut layout = Layout::new();
    for _ in 0..num_rects {
        layout.push(rng.random_range(min_len..=max_len), rng.random_range(min_len..=max_len));
    }

    let mut seen: HashSet<(usize, usize)> = HashSet::with_capacity(num_lines);
    let mut nets = Vec::with_capacity(num_lines);
    while nets.len() < num_lines {
        let a = rng.random_range(0..num_rects);
        let mut b = rng.random_range(0..num_rects);
        if b == a {
            b = (b + 1) % num_rects;
        }
        let key = (a.min(b), a.max(b));
        if seen.insert(key) {
            nets.push(Net::new(key.0, key.1));
        }
    }

    Ok((layout, nets))
}
