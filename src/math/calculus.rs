//! Running numerical integral and derivative of a sampled signal

use crate::error::CalculusError;

/// Discrete integration using the trapezoid rule
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Integrator {
    sum: f64,
    last: f64,
}

impl Integrator {
    /// Create an integrator whose running sum and previous sample are `init`
    pub fn new(init: f64) -> Self {
        Integrator {
            sum: init,
            last: init,
        }
    }

    /// Add the trapezoid between the previous sample and `y`, `dx` wide
    pub fn next(&mut self, y: f64, dx: f64) -> f64 {
        self.sum += dx * (self.last + y) / 2.0;
        self.last = y;
        self.sum
    }

    pub fn value(&self) -> f64 {
        self.sum
    }
}

impl Default for Integrator {
    fn default() -> Self {
        Self::new(0.0)
    }
}

/// Discrete differentiation using a backward finite difference
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Derivator {
    last: f64,
    saved: f64,
}

impl Derivator {
    pub fn new(init: f64) -> Self {
        Derivator {
            last: init,
            saved: 0.0,
        }
    }

    /// Slope from the previous sample to `y` over a step of `dx`
    pub fn next(&mut self, y: f64, dx: f64) -> Result<f64, CalculusError> {
        if dx == 0.0 {
            return Err(CalculusError::ZeroStep);
        }
        self.saved = (y - self.last) / dx;
        self.last = y;
        Ok(self.saved)
    }

    pub fn value(&self) -> f64 {
        self.saved
    }
}

impl Default for Derivator {
    fn default() -> Self {
        Self::new(0.0)
    }
}
