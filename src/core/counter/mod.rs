pub mod error;

use std::fmt;

use serde::Serialize;
use tracing::instrument;

pub use error::CounterError;

/// A signed integer counter that only moves forward, one step at a time.
///
/// `value` always equals `start` plus the number of successful increments.
/// Incrementing past `i64::MAX` fails and leaves the counter untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Counter {
    start: i64,
    value: i64,
}

impl Counter {
    pub fn new(start: i64) -> Self {
        tracing::info!("Creating a new counter with initial value: {}", start);
        Self { start, value: start }
    }

    /// Pre-increments the counter and returns the new value.
    #[instrument(name = "increment_counter", level = "debug", skip(self), fields(previous = self.value))]
    pub fn increment(&mut self) -> Result<i64, CounterError> {
        let Some(next) = self.value.checked_add(1) else {
            tracing::warn!("Counter at {} cannot be incremented further", self.value);
            return Err(CounterError::Overflow { value: self.value });
        };
        self.value = next;
        tracing::info!("Counter incremented to: {}", self.value);
        Ok(self.value)
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn start(&self) -> i64 {
        self.start
    }

    /// Number of successful increments so far.
    pub fn increments(&self) -> u64 {
        // value never drops below start
        self.value.abs_diff(self.start)
    }
}

impl fmt::Display for Counter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
