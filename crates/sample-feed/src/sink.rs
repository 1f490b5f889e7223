//! Sample Sinks

use ring_buffer::Sample;
use tracing::info;

/// Consumer side of the pipeline: receives samples drained from the buffer
pub trait SampleSink {
    /// Take ownership of one drained sample
    fn consume(&mut self, sample: Sample);
}

/// Sink reporting every sample through the tracing pipeline
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl SampleSink for ConsoleSink {
    fn consume(&mut self, sample: Sample) {
        info!("Consumed sample {} @ {}", sample.value(), sample.timestamp());
    }
}

/// Sink keeping every sample, for assertions in tests and dry runs
#[derive(Debug, Default)]
pub struct CollectingSink {
    samples: Vec<Sample>,
}

impl CollectingSink {
    /// Create an empty collecting sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Samples received so far, in consumption order
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Number of samples received
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Check if nothing has been consumed yet
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

impl SampleSink for CollectingSink {
    fn consume(&mut self, sample: Sample) {
        self.samples.push(sample);
    }
}
