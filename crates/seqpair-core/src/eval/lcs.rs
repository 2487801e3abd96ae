//! The ordered-map longest-common-subsequence evaluator (§4.2 of the design).

use crate::scratch::Scratch;
use crate::seqpair::SequencePair;

/// Compute (W, H) from a sequence pair, writing x/y into `scratch.xs`/`scratch.ys`.
///
/// O(N log N) amortized (see [`crate::scratch::OrderedMap`] for why this is
/// log N rather than the textbook log log N).
pub fn evaluate(sp: &SequencePair, widths: &[i64], heights: &[i64], scratch: &mut Scratch) -> (i64, i64) {
    let w = run_pass(sp.gamma_plus().iter().copied(), sp, widths, &mut scratch.map, &mut scratch.xs);
    let h = run_pass(sp.gamma_plus().iter().rev().copied(), sp, heights, &mut scratch.map, &mut scratch.ys);
    (w, h)
}

/// One directional pass: visit rectangles in `order`, chaining through the
/// rectangles that precede each one in Γ⁻ *and* in the given traversal order.
fn run_pass(
    order: impl Iterator<Item = usize>,
    sp: &SequencePair,
    sizes: &[i64],
    map: &mut crate::scratch::OrderedMap,
    out: &mut [i64],
) -> i64 {
    map.clear();
    let mut max_extent = 0i64;
    for a in order {
        let key = sp.pos_minus(a);
        let (offset, extent) = map.step(key, sizes[a]);
        out[a] = offset;
        max_extent = max_extent.max(extent);
    }
    max_extent
}
