//! Fixed-Capacity Ring Buffer
//!
//! Provides a bounded SPSC ring buffer for timestamped sample storage with
//! explicit overflow/underflow signaling instead of blocking.

mod buffer;
mod error;
mod sample;

pub use buffer::{RingBuffer, DEFAULT_CAPACITY};
pub use error::BufferError;
pub use sample::{Sample, TIMESTAMP_CAPACITY};
