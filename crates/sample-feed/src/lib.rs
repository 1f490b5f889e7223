//! Sample Feed
//!
//! Producer and consumer collaborators around the ring buffer: sources that
//! construct timestamped samples and sinks that receive drained ones.

mod sink;
mod source;

pub use sink::{CollectingSink, ConsoleSink, SampleSink};
pub use source::{ClockSource, SampleSource};
