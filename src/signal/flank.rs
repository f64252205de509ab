//! Rising and falling edge detection over discrete levels

use crate::error::{FilterError, Result};
use tracing::debug;

/// Binary logical level of a classified value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Level {
    #[default]
    Low,
    High,
}

/// Edge reported by [`FlankDetector::rising_or_falling`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Rising,
    Falling,
    None,
}

/// How to treat a value that is in neither level set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strictness {
    /// Fail with [`FilterError::InvalidLevel`]
    #[default]
    Strict,
    /// Skip the value and keep the previous level
    Lenient,
}

/// Values that count as one logical level, compared by equality
#[derive(Debug, Clone, PartialEq)]
pub struct LevelSet<T> {
    values: Vec<T>,
}

impl<T: PartialEq> LevelSet<T> {
    /// A set holding exactly one value
    pub fn one(value: T) -> Self {
        LevelSet {
            values: vec![value],
        }
    }

    pub fn contains(&self, value: &T) -> bool {
        self.values.iter().any(|v| v == value)
    }
}

impl<T> FromIterator<T> for LevelSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        LevelSet {
            values: iter.into_iter().collect(),
        }
    }
}

impl<T> From<Vec<T>> for LevelSet<T> {
    fn from(values: Vec<T>) -> Self {
        LevelSet { values }
    }
}

impl<T, const N: usize> From<[T; N]> for LevelSet<T> {
    fn from(values: [T; N]) -> Self {
        LevelSet {
            values: values.into(),
        }
    }
}

/// Turns a stream of raw values into levels and reports level changes.
///
/// The detector starts out [`Level::Low`], so the first high value is a
/// rising edge.
///
/// # Example
/// ```
/// # use araceae::signal::flank::{FlankDetector, Strictness};
/// let mut detector = FlankDetector::new([1, 3, 5], [2, 4, 6]);
/// assert!(detector.is_rising(&4, Strictness::Strict).unwrap());
/// assert!(detector.is_falling(&1, Strictness::Strict).unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct FlankDetector<T> {
    lows: LevelSet<T>,
    highs: LevelSet<T>,
    last: Level,
}

impl<T: PartialEq> FlankDetector<T> {
    /// Create a detector from its low and high level sets
    pub fn new(lows: impl Into<LevelSet<T>>, highs: impl Into<LevelSet<T>>) -> Self {
        let lows = lows.into();
        let highs = highs.into();
        debug!(
            lows = lows.values.len(),
            highs = highs.values.len(),
            "created flank detector"
        );
        FlankDetector {
            lows,
            highs,
            last: Level::Low,
        }
    }

    /// Create a detector with a single low and a single high value
    pub fn binary(low: T, high: T) -> Self {
        Self::new(LevelSet::one(low), LevelSet::one(high))
    }

    /// Level recorded by the last successful classification
    pub fn last_level(&self) -> Level {
        self.last
    }

    /// Classify `value` and record its level.
    ///
    /// Low membership wins when a value is in both sets. A value in neither
    /// set is an error when strict; when lenient it yields `None` and leaves
    /// the recorded level alone.
    pub fn classify(&mut self, value: &T, strictness: Strictness) -> Result<Option<Level>> {
        let level = if self.lows.contains(value) {
            Level::Low
        } else if self.highs.contains(value) {
            Level::High
        } else {
            return match strictness {
                Strictness::Strict => Err(FilterError::InvalidLevel),
                Strictness::Lenient => Ok(None),
            };
        };
        self.last = level;
        Ok(Some(level))
    }

    /// True when the previous level was low and `value` is high.
    ///
    /// `value` is always classified, even when the previous level already
    /// rules out a rising edge.
    pub fn is_rising(&mut self, value: &T, strictness: Strictness) -> Result<bool> {
        let was = self.last;
        let now = self.classify(value, strictness)?;
        Ok(was == Level::Low && now == Some(Level::High))
    }

    /// True when the previous level was high and `value` is low.
    pub fn is_falling(&mut self, value: &T, strictness: Strictness) -> Result<bool> {
        let was = self.last;
        let now = self.classify(value, strictness)?;
        Ok(was == Level::High && now == Some(Level::Low))
    }

    pub fn rising_or_falling(&mut self, value: &T, strictness: Strictness) -> Result<Transition> {
        let was = self.last;
        let transition = match (was, self.classify(value, strictness)?) {
            (Level::Low, Some(Level::High)) => Transition::Rising,
            (Level::High, Some(Level::Low)) => Transition::Falling,
            _ => Transition::None,
        };
        Ok(transition)
    }
}
