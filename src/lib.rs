pub mod common;
pub mod error;
pub mod math;
pub mod signal;

use crate::signal::Filter;
use tracing::debug;

pub use crate::error::{FilterError, Result};

/// A chain of streaming filters fed one after another
#[derive(Debug, Default)]
pub struct FilterBank {
    stages: Vec<Box<dyn Filter>>,
}

impl FilterBank {
    /// Create a new, empty filter bank
    pub fn new() -> Self {
        FilterBank { stages: Vec::new() }
    }

    /// Append a stage to the end of the chain
    pub fn register<T: Filter + 'static>(&mut self, stage: T) {
        debug!(stage = stage.name(), position = self.stages.len(), "registered filter stage");
        self.stages.push(Box::new(stage));
    }

    /// Feed `sample` through every stage and return the last output.
    ///
    /// An empty bank passes the sample through unchanged.
    pub fn process(&mut self, sample: f64) -> f64 {
        self.stages
            .iter_mut()
            .fold(sample, |value, stage| stage.process(value))
    }

    /// Replay a sequence of samples, collecting one output per sample
    pub fn process_all(&mut self, samples: &[f64]) -> Vec<f64> {
        samples.iter().map(|&sample| self.process(sample)).collect()
    }

    pub fn lock_all(&mut self) {
        for stage in &mut self.stages {
            stage.lock();
        }
    }

    pub fn unlock_all(&mut self) {
        for stage in &mut self.stages {
            stage.unlock();
        }
    }

    /// Names of the registered stages, in processing order
    pub fn stage_names(&self) -> Vec<&str> {
        self.stages.iter().map(|stage| stage.name()).collect()
    }

    /// Current output of each stage, in processing order
    pub fn values(&self) -> Vec<f64> {
        self.stages.iter().map(|stage| stage.value()).collect()
    }

    pub fn stage_mut(&mut self, index: usize) -> Option<&mut dyn Filter> {
        self.stages
            .get_mut(index)
            .map(|stage| &mut **stage as &mut dyn Filter)
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}
