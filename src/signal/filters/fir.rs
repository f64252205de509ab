//! Finite impulse response filter

use super::{initial_value_param, Filter, History};
use crate::error::{FilterError, Result};
use nalgebra::DVector;
use std::collections::HashMap;
use tracing::{debug, trace};

/// FIR filter with a ring-buffer delay line.
///
/// Implements `y[n] = sum(w[k] * x[n-k])` for `k` in `0..N`, so weight 0
/// multiplies the newest sample.
#[derive(Debug, Clone)]
pub struct FirFilter {
    weights: DVector<f64>,
    history: History,
    value: f64,
    locked: bool,
}

impl FirFilter {
    /// Create a new FIR filter with the given tap weights.
    ///
    /// The delay line holds one slot per weight, each starting at
    /// `initial_value`.
    pub fn new(weights: DVector<f64>, initial_value: f64) -> Result<Self> {
        let history = History::filled(weights.len(), initial_value)?;
        debug!(taps = weights.len(), initial_value, "created FIR filter");
        Ok(FirFilter {
            weights,
            history,
            value: initial_value,
            locked: false,
        })
    }

    pub fn from_slice(weights: &[f64], initial_value: f64) -> Result<Self> {
        Self::new(DVector::from_column_slice(weights), initial_value)
    }

    /// Create a filter from flat weight data with an explicit shape.
    ///
    /// The shape must have exactly one axis covering all of `data`. Any
    /// second axis is a shape error, even a unit one such as `[3, 1]`; the
    /// data is never flattened.
    pub fn from_shape(data: &[f64], shape: &[usize], initial_value: f64) -> Result<Self> {
        match shape {
            [len] if *len == data.len() => Self::from_slice(data, initial_value),
            _ => Err(FilterError::shape(
                format!("shape [{}]", data.len()),
                format!("shape {:?}", shape),
            )),
        }
    }

    /// Create a filter from weights and an optional `initial_value` parameter
    pub fn from_params(weights: DVector<f64>, params: &HashMap<String, f64>) -> Result<Self> {
        let initial_value = initial_value_param(params)?;
        let mut filter = Self::new(weights, initial_value)?;
        filter.configure(params)?;
        Ok(filter)
    }

    /// Create a moving average as an FIR filter with equal weights
    pub fn moving_average(window_size: usize, initial_value: f64) -> Result<Self> {
        if window_size == 0 {
            return Err(FilterError::EmptyWindow);
        }
        let weight = 1.0 / window_size as f64;
        Self::new(DVector::from_element(window_size, weight), initial_value)
    }

    /// Returns a reference to the filter weights
    pub fn weights(&self) -> &DVector<f64> {
        &self.weights
    }

    pub fn taps(&self) -> usize {
        self.weights.len()
    }

    /// The delay line, newest sample first
    pub fn history(&self) -> DVector<f64> {
        self.history.to_vector()
    }
}

impl Filter for FirFilter {
    fn process(&mut self, sample: f64) -> f64 {
        if self.locked {
            return self.value;
        }
        self.history.push(sample);
        self.value = self
            .history
            .recent()
            .zip(self.weights.iter())
            .map(|(x, w)| x * w)
            .sum();
        trace!(sample, value = self.value, "FIR step");
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
            debug!(locked, value = self.value, "FIR lock changed");
        }
        self.locked = locked;
    }

    fn name(&self) -> &str {
        "FirFilter"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::filters::MovingAverageFilter;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-12,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_fir_weighted_sequence() {
        let weights = DVector::from_vec(vec![1.0, 2.0, 3.0]) / 3.0;
        let mut filter = FirFilter::new(weights, 0.0).unwrap();

        let inputs = [2.0, 0.0, 0.0, 3.0, 3.0, 3.0, 0.0, 0.0, 0.0];
        let expected = [
            2.0 / 3.0,
            4.0 / 3.0,
            2.0,
            1.0,
            3.0,
            6.0,
            5.0,
            3.0,
            0.0,
        ];
        for (input, expected) in inputs.iter().zip(expected.iter()) {
            assert_close(filter.process(*input), *expected);
        }
    }

    #[test]
    fn test_fir_impulse_response() {
        let mut filter = FirFilter::from_slice(&[1.0, 2.0, 3.0, 2.0, 1.0], 0.0).unwrap();

        assert_eq!(filter.process(1.0), 1.0);
        assert_eq!(filter.process(0.0), 2.0);
        assert_eq!(filter.process(0.0), 3.0);
        assert_eq!(filter.process(0.0), 2.0);
        assert_eq!(filter.process(0.0), 1.0);
        assert_eq!(filter.process(0.0), 0.0);
    }

    #[test]
    fn test_fir_matches_moving_average() {
        let mut fir = FirFilter::from_slice(&[1.0 / 3.0; 3], 7.0).unwrap();
        let mut sma = MovingAverageFilter::new(3, 7.0).unwrap();

        for sample in [3.0, 3.0, 3.0, 2.0, 5.0, 0.0, 0.0, 0.0] {
            assert_close(fir.process(sample), sma.process(sample));
        }
    }

    #[test]
    fn test_fir_unit_gain_converges() {
        let mut filter = FirFilter::from_slice(&[0.5, 0.25, 0.25], 10.0).unwrap();
        for _ in 0..3 {
            filter.process(-1.0);
        }
        assert_close(filter.value(), -1.0);
        assert_close(filter.process(-1.0), -1.0);
    }

    #[test]
    fn test_fir_single_tap_is_gain() {
        let mut filter = FirFilter::from_slice(&[2.0], 0.0).unwrap();
        assert_eq!(filter.process(1.0), 2.0);
        assert_eq!(filter.process(3.0), 6.0);
    }

    #[test]
    fn test_fir_lock_and_resume() {
        let mut filter = FirFilter::from_slice(&[1.0, 10.0], 0.0).unwrap();
        assert_eq!(filter.process(1.0), 1.0);

        filter.set_locked(true);
        assert_eq!(filter.process(5.0), 1.0);
        assert_eq!(filter.process(6.0), 1.0);
        assert_eq!(filter.history(), DVector::from_vec(vec![1.0, 0.0]));

        filter.set_locked(false);
        assert_eq!(filter.process(2.0), 12.0);
    }

    #[test]
    fn test_fir_rejects_two_dimensional_weights() {
        let data = [1.0, 2.0, 3.0];
        for shape in [&[3, 1][..], &[1, 3][..]] {
            let err = FirFilter::from_shape(&data, shape, 0.0).unwrap_err();
            assert!(matches!(err, FilterError::Shape { .. }), "shape {:?}", shape);
        }
        assert!(matches!(
            FirFilter::from_shape(&[0.25; 4], &[2, 2], 0.0),
            Err(FilterError::Shape { .. })
        ));
        assert!(matches!(
            FirFilter::from_shape(&data, &[], 0.0),
            Err(FilterError::Shape { .. })
        ));
    }

    #[test]
    fn test_fir_from_shape() {
        let data = [0.5, 0.5, 0.5, 0.5];
        assert!(FirFilter::from_shape(&data, &[4], 0.0).is_ok());
        assert!(matches!(
            FirFilter::from_shape(&data, &[2, 2], 0.0),
            Err(FilterError::Shape { .. })
        ));
        assert!(matches!(
            FirFilter::from_shape(&data, &[3], 0.0),
            Err(FilterError::Shape { .. })
        ));
    }

    #[test]
    fn test_fir_rejects_empty_weights() {
        assert_eq!(
            FirFilter::from_slice(&[], 0.0).unwrap_err(),
            FilterError::EmptyWindow
        );
        assert_eq!(
            FirFilter::moving_average(0, 0.0).unwrap_err(),
            FilterError::EmptyWindow
        );
    }

    #[test]
    fn test_fir_from_params() {
        let params = HashMap::from([("initial_value".to_string(), 4.0)]);
        let filter = FirFilter::from_params(DVector::from_element(2, 0.5), &params).unwrap();
        assert_eq!(filter.value(), 4.0);
        assert_eq!(filter.history(), DVector::from_element(2, 4.0));
        assert_eq!(filter.weights(), &DVector::from_element(2, 0.5));
    }
}
