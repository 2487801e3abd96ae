use rand::seq::SliceRandom;
use rand::Rng;

/// Two permutations (Γ⁺, Γ⁻) of rectangle indices 0..N that jointly encode
/// a non-overlapping placement up to compaction.
///
/// `gamma_plus[k]` / `gamma_minus[k]` is the rectangle index at position `k`;
/// `pos_plus`/`pos_minus` are the corresponding inverse permutations, kept in
/// sync on every mutation so `left_of`/`below` are O(1).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequencePair {
    gamma_plus: Vec<usize>,
    gamma_minus: Vec<usize>,
    pos_plus: Vec<usize>,
    pos_minus: Vec<usize>,
}

impl SequencePair {
    /// Build the identity sequence pair over `0..n`.
    pub fn identity(n: usize) -> Self {
        let ident: Vec<usize> = (0..n).collect();
        Self {
            gamma_plus: ident.clone(),
            gamma_minus: ident.clone(),
            pos_plus: ident.clone(),
            pos_minus: ident,
        }
    }

    #[inline] pub fn len(&self) -> usize { self.gamma_plus.len() }
    #[inline] pub fn is_empty(&self) -> bool { self.gamma_plus.is_empty() }

    #[inline] pub fn gamma_plus(&self) -> &[usize] { &self.gamma_plus }
    #[inline] pub fn gamma_minus(&self) -> &[usize] { &self.gamma_minus }
    #[inline] pub fn pos_plus(&self, rect: usize) -> usize { self.pos_plus[rect] }
    #[inline] pub fn pos_minus(&self, rect: usize) -> usize { self.pos_minus[rect] }

    /// `a` is left-of `b`: precedes it in both Γ⁺ and Γ⁻.
    #[inline]
    pub fn left_of(&self, a: usize, b: usize) -> bool {
        self.pos_plus[a] < self.pos_plus[b] && self.pos_minus[a] < self.pos_minus[b]
    }

    /// `a` is below `b`: follows it in Γ⁺ but precedes it in Γ⁻.
    #[inline]
    pub fn below(&self, a: usize, b: usize) -> bool {
        self.pos_plus[a] > self.pos_plus[b] && self.pos_minus[a] < self.pos_minus[b]
    }

    /// Swap the rectangles at positions `i`, `j` in Γ⁺.
    pub fn swap_plus(&mut self, i: usize, j: usize) {
        if i == j { return }
        self.gamma_plus.swap(i, j);
        self.pos_plus[self.gamma_plus[i]] = i;
        self.pos_plus[self.gamma_plus[j]] = j;
    }

    /// Swap the rectangles at positions `i`, `j` in Γ⁻.
    pub fn swap_minus(&mut self, i: usize, j: usize) {
        if i == j { return }
        self.gamma_minus.swap(i, j);
        self.pos_minus[self.gamma_minus[i]] = i;
        self.pos_minus[self.gamma_minus[j]] = j;
    }

    /// Swap positions `i`, `j` in both Γ⁺ and Γ⁻.
    pub fn swap_both(&mut self, i: usize, j: usize) {
        self.swap_plus(i, j);
        self.swap_minus(i, j);
    }

    /// Independently shuffle Γ⁺ and Γ⁻ in place.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.gamma_plus.shuffle(rng);
        self.gamma_minus.shuffle(rng);
        rebuild_inverse(&self.gamma_plus, &mut self.pos_plus);
        rebuild_inverse(&self.gamma_minus, &mut self.pos_minus);
    }
}

fn rebuild_inverse(perm: &[usize], inv: &mut [usize]) {
    for (position, &rect) in perm.iter().enumerate() {
        inv[rect] = position;
    }
}

/// Given permutations `x`, `y` of `0..x.len()`, compute `p` with
/// `x[i] == y[p[i]]` for every `i` — the position, in `y`'s order, of each
/// element of `x`.
pub fn match_permutation(x: &[usize], y: &[usize]) -> Vec<usize> {
    debug_assert_eq!(x.len(), y.len());
    let mut inv_y = vec![0usize; y.len()];
    rebuild_inverse(y, &mut inv_y);
    x.iter().map(|&v| inv_y[v]).collect()
}
