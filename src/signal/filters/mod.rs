//! Streaming filters over a fixed window of recent samples

use crate::error::{ConfigError, FilterError, Result};
use nalgebra::DVector;
use std::collections::HashMap;
use std::fmt::Debug;

pub mod fir;
pub mod moving_average;

pub use fir::FirFilter;
pub use moving_average::MovingAverageFilter;

/// Shared contract of the lockable streaming filters
pub trait Filter: Debug + Send {
    /// Feed the next sample and get the new output.
    ///
    /// A locked filter ignores the sample and returns its cached value.
    fn process(&mut self, sample: f64) -> f64;

    /// Last computed output
    fn value(&self) -> f64;

    /// Whether `process` is currently frozen
    fn is_locked(&self) -> bool;

    /// Freeze or resume the filter
    fn set_locked(&mut self, locked: bool);

    /// Get the name of this filter
    fn name(&self) -> &str;

    fn lock(&mut self) {
        self.set_locked(true);
    }

    fn unlock(&mut self) {
        self.set_locked(false);
    }

    /// Configure runtime flags from a parameter map.
    ///
    /// Only `locked` (0 or 1) is recognised; the window itself is fixed at
    /// construction.
    fn configure(&mut self, params: &HashMap<String, f64>) -> Result<()> {
        if let Some(locked) = flag_param(params, "locked")? {
            self.set_locked(locked);
        }
        Ok(())
    }
}

/// Ring buffer of the last N samples, read most-recent-first
#[derive(Debug, Clone)]
pub(crate) struct History {
    samples: DVector<f64>,
    newest: usize,
}

impl History {
    /// Create a history holding `len` copies of `value`
    pub(crate) fn filled(len: usize, value: f64) -> Result<Self> {
        if len == 0 {
            return Err(FilterError::EmptyWindow);
        }
        Ok(History {
            samples: DVector::from_element(len, value),
            newest: 0,
        })
    }

    /// Overwrite the oldest slot with `sample`
    pub(crate) fn push(&mut self, sample: f64) {
        self.newest = (self.newest + 1) % self.len();
        self.samples[self.newest] = sample;
    }

    pub(crate) fn len(&self) -> usize {
        self.samples.len()
    }

    /// Sample `age` steps back, 0 being the newest
    pub(crate) fn get(&self, age: usize) -> f64 {
        let len = self.len();
        self.samples[(self.newest + len - age % len) % len]
    }

    pub(crate) fn recent(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.len()).map(move |age| self.get(age))
    }

    pub(crate) fn mean(&self) -> f64 {
        self.samples.mean()
    }

    /// Copy of the window ordered most-recent-first
    pub(crate) fn to_vector(&self) -> DVector<f64> {
        DVector::from_iterator(self.len(), self.recent())
    }
}

pub(crate) fn initial_value_param(params: &HashMap<String, f64>) -> Result<f64> {
    match params.get("initial_value") {
        Some(&value) if !value.is_finite() => Err(ConfigError::Invalid {
            key: "initial_value",
            value,
            reason: "must be finite",
        }
        .into()),
        Some(&value) => Ok(value),
        None => Ok(0.0),
    }
}

/// Largest window accepted from a parameter map
pub const MAX_WINDOW_SIZE: usize = 1 << 20;

pub(crate) fn window_size_param(params: &HashMap<String, f64>) -> Result<usize> {
    let value = *params
        .get("window_size")
        .ok_or(ConfigError::Missing("window_size"))?;
    if value < 1.0 || value.fract() != 0.0 || !value.is_finite() {
        return Err(ConfigError::Invalid {
            key: "window_size",
            value,
            reason: "must be a positive integer",
        }
        .into());
    }
    if value > MAX_WINDOW_SIZE as f64 {
        return Err(ConfigError::Invalid {
            key: "window_size",
            value,
            reason: "exceeds the maximum window size",
        }
        .into());
    }
    Ok(value as usize)
}

fn flag_param(params: &HashMap<String, f64>, key: &'static str) -> Result<Option<bool>> {
    match params.get(key) {
        None => Ok(None),
        Some(&value) if value == 0.0 => Ok(Some(false)),
        Some(&value) if value == 1.0 => Ok(Some(true)),
        Some(&value) => Err(ConfigError::Invalid {
            key,
            value,
            reason: "must be 0 or 1",
        }
        .into()),
    }
}
