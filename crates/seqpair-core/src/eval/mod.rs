//! Bounding-box evaluators: given a sequence pair and rectangle sizes,
//! compute the compacted positions and the resulting (W, H).
//!
//! Both evaluators below must agree bit-for-bit; [`dag::evaluate`] exists
//! primarily to cross-check [`lcs::evaluate`] in tests and to serve small
//! instances where an O(N²) scan beats the bookkeeping of the ordered map.

pub mod dag;
pub mod lcs;

use std::str::FromStr;

use crate::error::{Error, Result};
use crate::layout::Layout;
use crate::scratch::Scratch;
use crate::seqpair::SequencePair;

/// Which evaluator to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Lcs,
    Dag,
}

impl FromStr for Method {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "lcs" => Ok(Method::Lcs),
            "dag" => Ok(Method::Dag),
            other => Err(Error::InvalidOption { field: "method", value: other.to_string() }),
        }
    }
}

/// Evaluate `sp` against `layout`'s rectangle sizes, writing the compacted
/// positions into `layout` and returning (W, H).
pub fn evaluate(method: Method, sp: &SequencePair, layout: &mut Layout, scratch: &mut Scratch) -> (i64, i64) {
    let (w, h) = match method {
        Method::Lcs => lcs::evaluate(sp, layout.widths(), layout.heights(), scratch),
        Method::Dag => dag::evaluate(sp, layout.widths(), layout.heights(), scratch),
    };
    layout.set_positions(&scratch.xs, &scratch.ys);
    (w, h)
}
