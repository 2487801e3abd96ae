use std::fs;
use std::path::Path;

use seqpair_core::options::Options;

use crate::error::{Error, Result};

/// Read an options file: five whitespace-separated numbers, in order
/// `initial_accept_prob sims_per_temperature decreasing_ratio restart_ratio stopping_accept_prob`.
///
/// Values are routed through [`Options::new`], so anything outside its
/// documented domain surfaces as the same validation error.
pub fn read_options(path: impl AsRef<Path>) -> Result<Options> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| Error::Io { path: path.to_path_buf(), source })?;
    let malformed = |detail: String| Error::Malformed { path: path.to_path_buf(), line: 1, detail };

    let tokens: Vec<&str> = text.split_whitespace().collect();
    let [initial_accept_prob, sims_per_temperature, decreasing_ratio, restart_ratio, stopping_accept_prob] =
        tokens.as_slice()
    else {
        return Err(malformed(format!("expected 5 numbers, found {}", tokens.len())));
    };

    let parse_f64 = |s: &str| s.parse::<f64>().map_err(|_| malformed(format!("'{s}' is not a number")));
    let parse_u32 = |s: &str| s.parse::<u32>().map_err(|_| malformed(format!("'{s}' is not a non-negative integer")));

    Ok(Options::new(
        parse_f64(initial_accept_prob)?,
        parse_u32(sims_per_temperature)?,
        parse_f64(decreasing_ratio)?,
        parse_f64(restart_ratio)?,
        parse_f64(stopping_accept_prob)?,
    )?)
}
