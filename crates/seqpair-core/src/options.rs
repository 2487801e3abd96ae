use crate::error::{Error, Result};

/// Validated simulated-annealing configuration.
///
/// Every field is checked against its documented domain at construction, so
/// a driver holding an `Options` never has to re-validate it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Options {
    initial_accept_prob: f64,
    sims_per_temperature: u32,
    decreasing_ratio: f64,
    restart_ratio: f64,
    stopping_accept_prob: f64,
}

impl Options {
    pub fn new(
        initial_accept_prob: f64,
        sims_per_temperature: u32,
        decreasing_ratio: f64,
        restart_ratio: f64,
        stopping_accept_prob: f64,
    ) -> Result<Self> {
        if !(0.0 < initial_accept_prob && initial_accept_prob < 1.0) {
            return Err(Error::InvalidOption { field: "initial_accept_prob", value: initial_accept_prob.to_string() });
        }
        if sims_per_temperature < 1 {
            return Err(Error::InvalidOption { field: "sims_per_temperature", value: sims_per_temperature.to_string() });
        }
        if !(0.0 < decreasing_ratio && decreasing_ratio < 1.0) {
            return Err(Error::InvalidOption { field: "decreasing_ratio", value: decreasing_ratio.to_string() });
        }
        if restart_ratio <= 1.0 {
            return Err(Error::InvalidOption { field: "restart_ratio", value: restart_ratio.to_string() });
        }
        if !(0.0 < stopping_accept_prob && stopping_accept_prob <= 1.0) {
            return Err(Error::InvalidOption { field: "stopping_accept_prob", value: stopping_accept_prob.to_string() });
        }
        Ok(Self { initial_accept_prob, sims_per_temperature, decreasing_ratio, restart_ratio, stopping_accept_prob })
    }

    #[inline] pub fn initial_accept_prob(&self) -> f64 { self.initial_accept_prob }
    #[inline] pub fn sims_per_temperature(&self) -> u32 { self.sims_per_temperature }
    #[inline] pub fn decreasing_ratio(&self) -> f64 { self.decreasing_ratio }
    #[inline] pub fn restart_ratio(&self) -> f64 { self.restart_ratio }
    #[inline] pub fn stopping_accept_prob(&self) -> f64 { self.stopping_accept_prob }
}
