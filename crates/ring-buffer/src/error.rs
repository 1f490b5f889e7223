//! Ring Buffer Error Types

use thiserror::Error;

/// Flow-control conditions reported by the ring buffer
///
/// Both are expected, recoverable and leave the buffer untouched; the
/// caller decides whether to retry, drop or escalate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BufferError {
    /// Write attempted against a slot the consumer has not freed yet
    #[error("Buffer overflow: slot {slot} still holds an unread sample")]
    Overflow { slot: usize },

    /// Read attempted against a slot the producer has not filled yet
    #[error("Buffer underflow: slot {slot} has no sample to read")]
    Underflow { slot: usize },
}
