use std::fmt;

/// Output policy for [`Layout::format`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatPolicy {
    /// `(x, y) - (x+w, y+h)` per rectangle, for diagnostics.
    Delim,
    /// `x y (x+w) (y+h)` per rectangle, matching the rect file format.
    NoDelim,
}

/// N axis-aligned rectangles with fixed dimensions and mutable positions.
///
/// Widths and heights are set once, at `push` time; `x`/`y` are overwritten
/// atomically by an evaluator call (see [`crate::eval`]).
#[derive(Debug, Clone, Default)]
pub struct Layout {
    widths: Vec<i64>,
    heights: Vec<i64>,
    x: Vec<i64>,
    y: Vec<i64>,
}

impl Layout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rectangle with the given dimensions, at an unspecified
    /// initial position (0, 0) until an evaluator runs.
    pub fn push(&mut self, width: i64, height: i64) {
        assert!(width >= 1 && height >= 1, "rectangle dimensions must be positive");
        self.widths.push(width);
        self.heights.push(height);
        self.x.push(0);
        self.y.push(0);
    }

    #[inline] pub fn len(&self) -> usize { self.widths.len() }
    #[inline] pub fn is_empty(&self) -> bool { self.widths.is_empty() }

    #[inline] pub fn widths(&self) -> &[i64] { &self.widths }
    #[inline] pub fn heights(&self) -> &[i64] { &self.heights }
    #[inline] pub fn x(&self) -> &[i64] { &self.x }
    #[inline] pub fn y(&self) -> &[i64] { &self.y }

    /// Write a fresh set of positions, replacing the current ones.
    ///
    /// Called by the evaluators after compaction; also used directly by
    /// callers (e.g. overlap-verification tests) that need a specific placement.
    pub fn set_positions(&mut self, xs: &[i64], ys: &[i64]) {
        debug_assert_eq!(xs.len(), self.len());
        debug_assert_eq!(ys.len(), self.len());
        self.x.copy_from_slice(xs);
        self.y.copy_from_slice(ys);
    }

    /// The bounding box (W, H) of all placed rectangles.
    pub fn bounding_box(&self) -> (i64, i64) {
        let w = (0..self.len()).map(|i| self.x[i] + self.widths[i]).max().unwrap_or(0);
        let h = (0..self.len()).map(|i| self.y[i] + self.heights[i]).max().unwrap_or(0);
        (w, h)
    }

    /// Σ w_i·h_i over all rectangles, independent of placement.
    pub fn sum_component_areas(&self) -> i64 {
        self.widths.iter().zip(&self.heights).map(|(&w, &h)| w * h).sum()
    }

    /// Center of rectangle `i`, as (2x, 2y) to keep Manhattan distances exact integers.
    #[inline]
    pub fn doubled_center(&self, i: usize) -> (i64, i64) {
        (2 * self.x[i] + self.widths[i], 2 * self.y[i] + self.heights[i])
    }

    /// Render this layout for external I/O.
    pub fn format(&self, policy: FormatPolicy) -> String {
        let mut out = String::new();
        for i in 0..self.len() {
            let (left, bottom) = (self.x[i], self.y[i]);
            let (right, top) = (left + self.widths[i], bottom + self.heights[i]);
            match policy {
                FormatPolicy::Delim => {
                    out.push_str(&format!("({left}, {bottom}) - ({right}, {top})\n"));
                }
                FormatPolicy::NoDelim => {
                    out.push_str(&format!("{left} {bottom} {right} {top}\n"));
                }
            }
        }
        out
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format(FormatPolicy::Delim))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounding_box_of_empty_layout_is_zero() {
        let layout = Layout::new();
        assert_eq!(layout.bounding_box(), (0, 0));
        assert_eq!(layout.sum_component_areas(), 0);
    }

    #[test]
    fn bounding_box_tracks_max_extent() {
        let mut layout = Layout::new();
        layout.push(4, 6);
        layout.push(3, 7);
        layout.set_positions(&[0, 4], &[0, 0]);
        assert_eq!(layout.bounding_box(), (7, 7));
        assert_eq!(layout.sum_component_areas(), 4 * 6 + 3 * 7);
    }

    #[test]
    fn format_no_delim_round_trips_corners() {
        let mut layout = Layout::new();
        layout.push(2, 3);
        layout.set_positions(&[5], &[1]);
        assert_eq!(layout.format(FormatPolicy::NoDelim), "5 1 7 4\n");
    }
}
