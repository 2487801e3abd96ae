//! The O(N²) constraint-graph evaluator, used to cross-check the LCS
//! evaluator and as the default for small instances where its simplicity
//! outweighs the asymptotic cost.

use crate::scratch::Scratch;
use crate::seqpair::SequencePair;

/// Compute (W, H) from a sequence pair, writing x/y into `scratch.xs`/`scratch.ys`.
///
/// Walks Γ⁺ (and its reverse) as a topological order of the horizontal
/// (resp. vertical) constraint DAG, scanning every already-visited
/// predecessor at each step.
pub fn evaluate(sp: &SequencePair, widths: &[i64], heights: &[i64], scratch: &mut Scratch) -> (i64, i64) {
    let n = sp.len();
    let order = sp.gamma_plus();

    let mut w_max = 0i64;
    for idx in 0..n {
        let a = order[idx];
        let mut best = 0i64;
        for &b in &order[..idx] {
            if sp.pos_minus(b) < sp.pos_minus(a) {
                best = best.max(scratch.dist[b] + widths[b]);
            }
        }
        scratch.dist[a] = best;
        scratch.xs[a] = best;
        w_max = w_max.max(best + widths[a]);
    }

    let mut h_max = 0i64;
    for idx in 0..n {
        let a = order[n - 1 - idx];
        let mut best = 0i64;
        for &b in order[n - idx..].iter().rev() {
            if sp.pos_minus(b) < sp.pos_minus(a) {
                best = best.max(scratch.dist[b] + heights[b]);
            }
        }
        scratch.dist[a] = best;
        scratch.ys[a] = best;
        h_max = h_max.max(best + heights[a]);
    }

    (w_max, h_max)
}
