//! Timestamped Sample Type

use serde::{Deserialize, Serialize};

/// Maximum timestamp length in bytes, sized for a ctime-style stamp
/// ("Thu Feb 14 10:32:05 2019")
pub const TIMESTAMP_CAPACITY: usize = 24;

/// A single measurement: a numeric value plus the time it was taken
///
/// Immutable once constructed; moved or cloned by value into and out of
/// the buffer, never shared.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sample {
    value: u16,
    timestamp: String,
}

impl Sample {
    /// Create a sample, truncating the timestamp to [`TIMESTAMP_CAPACITY`] bytes
    ///
    /// Truncation never splits a UTF-8 character; over-long input loses its
    /// tail rather than overrunning storage.
    pub fn new(value: u16, timestamp: &str) -> Self {
        let mut end = timestamp.len().min(TIMESTAMP_CAPACITY);
        while !timestamp.is_char_boundary(end) {
            end -= 1;
        }
        Self {
            value,
            timestamp: timestamp[..end].to_string(),
        }
    }

    /// Measured value
    pub fn value(&self) -> u16 {
        self.value
    }

    /// Timestamp text, at most [`TIMESTAMP_CAPACITY`] bytes
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }
}
