//! Simple moving average filter

use super::{initial_value_param, window_size_param, Filter, History};
use crate::error::Result;
use nalgebra::DVector;
use std::collections::HashMap;
use tracing::{debug, trace};

/// Arithmetic mean of the last `window_size` samples
#[derive(Debug, Clone)]
pub struct MovingAverageFilter {
    history: History,
    value: f64,
    locked: bool,
}

impl MovingAverageFilter {
    /// Create a new moving average filter.
    ///
    /// Every slot of the window starts out as `initial_value`, so the first
    /// outputs are pulled towards it until the window has been refilled.
    pub fn new(window_size: usize, initial_value: f64) -> Result<Self> {
        let history = History::filled(window_size, initial_value)?;
        debug!(window_size, initial_value, "created moving average filter");
        Ok(MovingAverageFilter {
            history,
            value: initial_value,
            locked: false,
        })
    }

    /// Create a filter from `window_size` and optional `initial_value`
    pub fn from_params(params: &HashMap<String, f64>) -> Result<Self> {
        let window_size = window_size_param(params)?;
        let initial_value = initial_value_param(params)?;
        let mut filter = Self::new(window_size, initial_value)?;
        filter.configure(params)?;
        Ok(filter)
    }

    pub fn window_size(&self) -> usize {
        self.history.len()
    }

    /// The window, newest sample first
    pub fn history(&self) -> DVector<f64> {
        self.history.to_vector()
    }
}

impl Filter for MovingAverageFilter {
    fn process(&mut self, sample: f64) -> f64 {
        if self.locked {
            return self.value;
        }
        self.history.push(sample);
        self.value = self.history.mean();
        trace!(sample, value = self.value, "moving average step");
        self.value
    }

    fn value(&self) -> f64 {
        self.value
    }

    fn is_locked(&self) -> bool {
        self.locked
    }

    fn set_locked(&mut self, locked: bool) {
        if self.locked != locked {
            debug!(locked, value = self.value, "moving average lock changed");
        }
        self.locked = locked;
    }

    fn name(&self) -> &str {
        "MovingAverageFilter"
    }
}
