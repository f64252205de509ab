//! Auto-incrementing counter

/// Hands out `start`, `start + step`, `start + 2 * step`, ...
///
/// # Example
/// ```
/// # use araceae::common::Counter;
/// let mut ids = Counter::new(100, 10);
/// assert_eq!(ids.next(), Some(100));
/// assert_eq!(ids.next(), Some(110));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Counter {
    next: i64,
    step: i64,
}

impl Counter {
    pub fn new(start: i64, step: i64) -> Self {
        Counter { next: start, step }
    }

    /// The value the next call will return
    pub fn peek(&self) -> i64 {
        self.next
    }
}

impl Default for Counter {
    fn default() -> Self {
        Self::new(0, 1)
    }
}

impl Iterator for Counter {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        let current = self.next;
        self.next = current.checked_add(self.step)?;
        Some(current)
    }
}
