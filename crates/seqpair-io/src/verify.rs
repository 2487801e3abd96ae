use seqpair_core::energy::EnergyFunction;
use seqpair_core::layout::Layout;
use seqpair_core::net::Net;

/// Tolerance for the cost-recomputation acceptance check: 16 machine-epsilons.
pub const ACCEPTANCE_TOLERANCE: f64 = 16.0 * f64::EPSILON;

/// The first pair of rectangle indices found to overlap, if any.
///
/// O(N²); two rectangles overlap iff their projections on both axes overlap.
pub fn first_overlap(layout: &Layout) -> Option<(usize, usize)> {
    let (x, y, w, h) = (layout.x(), layout.y(), layout.widths(), layout.heights());
    for i in 0..layout.len() {
        for j in (i + 1)..layout.len() {
            let x_overlap = x[i] < x[j] + w[j] && x[j] < x[i] + w[i];
            let y_overlap = y[i] < y[j] + h[j] && y[j] < y[i] + h[i];
            if x_overlap && y_overlap {
                return Some((i, j));
            }
        }
    }
    None
}

/// Recompute `energy_fn`'s cost on `layout` and compare it against
/// `reported_cost` within [`ACCEPTANCE_TOLERANCE`].
pub fn check_cost<E: EnergyFunction>(layout: &Layout, nets: &[Net], energy_fn: &E, reported_cost: f64) -> bool {
    let (w, h) = layout.bounding_box();
    let recomputed = energy_fn.energy(layout, nets, w, h);
    (recomputed - reported_cost).abs() <= ACCEPTANCE_TOLERANCE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_a_deliberately_overlapping_layout() {
        let mut layout = Layout::new();
        layout.push(4, 4);
        layout.push(4, 4);
        layout.set_positions(&[0, 2], &[0, 2]);
        assert_eq!(first_overlap(&layout), Some((0, 1)));
    }

    #[test]
    fn accepts_a_non_overlapping_layout() {
        let mut layout = Layout::new();
        layout.push(4, 4);
        layout.push(4, 4);
        layout.set_positions(&[0, 4], &[0, 0]);
        assert_eq!(first_overlap(&layout), None);
    }
}
