use rand::Rng;

use crate::eval::{self, Method};
use crate::layout::Layout;
use crate::scratch::Scratch;
use crate::seqpair::SequencePair;

/// A record of the last mutation applied to a [`MoveGenerator`], sufficient
/// to reverse it exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    SwapX(usize, usize),
    SwapY(usize, usize),
    SwapBoth(usize, usize),
    None,
}

/// Picks the next move kind and the pair of positions it acts on.
///
/// Kept as a trait (rather than hard-coding uniform sampling into
/// [`MoveGenerator::evaluate`]) so callers can bias the search without
/// touching the generator itself.
pub trait ChangeDistribution {
    fn sample<R: Rng + ?Sized>(&mut self, n: usize, rng: &mut R) -> (MoveKind, usize, usize);
}

/// A move kind without its operand positions, as returned by a [`ChangeDistribution`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    SwapX,
    SwapY,
    SwapBoth,
}

/// Uniform over {SwapX, SwapY, SwapBoth}, with i ≠ j chosen uniformly.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformChangeDistribution;

impl ChangeDistribution for UniformChangeDistribution {
    fn sample<R: Rng + ?Sized>(&mut self, n: usize, rng: &mut R) -> (MoveKind, usize, usize) {
        assert!(n >= 2, "need at least two rectangles to propose a swap");
        let kind = match rng.random_range(0..3) {
            0 => MoveKind::SwapX,
            1 => MoveKind::SwapY,
            _ => MoveKind::SwapBoth,
        };
        let i = rng.random_range(0..n);
        let mut j = rng.random_range(0..n - 1);
        if j >= i {
            j += 1;
        }
        (kind, i, j)
    }
}

/// Owns a sequence pair plus the record of its last (possibly uncommitted)
/// move, and drives it through an evaluator.
#[derive(Debug, Clone)]
pub struct MoveGenerator {
    sp: SequencePair,
    last_move: Move,
}

impl MoveGenerator {
    /// Initialize Γ⁺ and Γ⁻ to identity permutations over the rectangles
    /// implied by `widths`/`heights`. A subsequent [`Self::shuffle`] call
    /// produces a random initial pair.
    pub fn construct<R: Rng + ?Sized>(widths: &[i64], heights: &[i64], _rng: &mut R) -> Self {
        assert_eq!(widths.len(), heights.len(), "widths and heights must have equal length");
        Self { sp: SequencePair::identity(widths.len()), last_move: Move::None }
    }

    #[inline]
    pub fn sequence_pair(&self) -> &SequencePair {
        &self.sp
    }

    #[inline]
    pub fn last_move(&self) -> Move {
        self.last_move
    }

    /// Independently shuffle both sequences; resets the last-move record.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.sp.shuffle(rng);
        self.last_move = Move::None;
    }

    /// Propose a move, apply it, record it, then run `method` to write
    /// positions into `layout` and return (W, H).
    pub fn evaluate<R: Rng + ?Sized, C: ChangeDistribution>(
        &mut self,
        layout: &mut Layout,
        rng: &mut R,
        scratch: &mut Scratch,
        change_distribution: &mut C,
        method: Method,
    ) -> (i64, i64) {
        let n = self.sp.len();
        // Fewer than two rectangles: no swap is possible, so the proposal is None.
        self.last_move = if n < 2 {
            Move::None
        } else {
            let (kind, i, j) = change_distribution.sample(n, rng);
            match kind {
                MoveKind::SwapX => { self.sp.swap_plus(i, j); Move::SwapX(i, j) }
                MoveKind::SwapY => { self.sp.swap_minus(i, j); Move::SwapY(i, j) }
                MoveKind::SwapBoth => { self.sp.swap_both(i, j); Move::SwapBoth(i, j) }
            }
        };
        eval::evaluate(method, &self.sp, layout, scratch)
    }

    /// Undo the last move exactly, if any. Returns whether a move was undone.
    pub fn rollback(&mut self) -> bool {
        match self.last_move {
            Move::SwapX(i, j) => { self.sp.swap_plus(i, j); self.last_move = Move::None; true }
            Move::SwapY(i, j) => { self.sp.swap_minus(i, j); self.last_move = Move::None; true }
            Move::SwapBoth(i, j) => { self.sp.swap_both(i, j); self.last_move = Move::None; true }
            Move::None => false,
        }
    }
}
