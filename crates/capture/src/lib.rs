//! Sample Capture Pipeline
//!
//! Drives a sample source through the ring buffer into a sink, treating
//! overflow as backpressure rather than an error.

use config::{Config, ConfigError, Environment, File};
use ring_buffer::RingBuffer;
use sample_feed::{ClockSource, ConsoleSink, SampleSink, SampleSource};
use serde::{Deserialize, Serialize};
use std::thread;
use std::time::Duration;
use tracing::{debug, info, warn, Level};
use tracing_subscriber::FmtSubscriber;

fn default_capacity() -> usize {
    ring_buffer::DEFAULT_CAPACITY
}

fn default_tick_ms() -> u64 {
    250
}

fn default_samples() -> u64 {
    10
}

/// Pipeline configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineSettings {
    /// Ring buffer capacity in slots
    #[serde(default = "default_capacity")]
    pub capacity: usize,
    /// Milliseconds between produced samples
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
    /// Number of samples to produce before the final drain
    #[serde(default = "default_samples")]
    pub samples: u64,
    /// Drain one sample to the sink right after every write
    #[serde(default)]
    pub drain_between_writes: bool,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
            tick_ms: default_tick_ms(),
            samples: default_samples(),
            drain_between_writes: false,
        }
    }
}

impl PipelineSettings {
    /// Load settings from an optional `pipeline.toml` plus `PIPELINE_*`
    /// environment overrides; missing keys fall back to the defaults
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("pipeline").required(false))
            .add_source(Environment::with_prefix("PIPELINE"))
            .build()?
            .try_deserialize()
    }
}

/// Outcome counters for one pipeline run
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    /// Samples pulled from the source
    pub produced: u64,
    /// Samples delivered to the sink
    pub consumed: u64,
    /// Samples lost to overflow after the backpressure drain
    pub dropped: u64,
    /// Samples still buffered when production ended, before the final drain
    pub residual: usize,
}

/// Initialize the tracing subscriber
pub fn init_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");
}

/// Drive `settings.samples` production ticks through a fresh buffer
///
/// Overflow is treated as backpressure: the oldest sample is drained to the
/// sink and the write retried once. A write that still fails is dropped and
/// counted in the summary. After the production run the buffer is drained
/// completely.
pub fn run_with<S, K>(settings: &PipelineSettings, source: &mut S, sink: &mut K) -> RunSummary
where
    S: SampleSource,
    K: SampleSink,
{
    let mut buffer = RingBuffer::new(settings.capacity);
    let mut summary = RunSummary {
        produced: 0,
        consumed: 0,
        dropped: 0,
        residual: 0,
    };

    for _ in 0..settings.samples {
        let sample = source.next_sample();
        summary.produced += 1;

        if let Err(err) = buffer.try_write(sample.clone()) {
            warn!("{}; draining one sample to make room", err);
            if let Ok(oldest) = buffer.try_read() {
                sink.consume(oldest);
                summary.consumed += 1;
            }
            if buffer.try_write(sample).is_err() {
                summary.dropped += 1;
            }
        }

        if let Some(last) = buffer.last_written() {
            debug!("Last committed sample: {} @ {}", last.value(), last.timestamp());
        }

        if settings.drain_between_writes {
            if let Ok(out) = buffer.try_read() {
                sink.consume(out);
                summary.consumed += 1;
            }
        }

        if settings.tick_ms > 0 {
            thread::sleep(Duration::from_millis(settings.tick_ms));
        }
    }

    info!(
        "Production finished: {} samples buffered of {} written in total",
        buffer.len(),
        buffer.total_written()
    );

    summary.residual = buffer.len();
    while let Ok(out) = buffer.try_read() {
        sink.consume(out);
        summary.consumed += 1;
    }

    summary
}

/// Run the capture pipeline with the wall-clock source and console sink
pub fn run_pipeline(settings: &PipelineSettings) -> Result<RunSummary, Box<dyn std::error::Error>> {
    info!(
        "Starting capture pipeline: capacity={} tick={}ms samples={}",
        settings.capacity, settings.tick_ms, settings.samples
    );

    let mut source = ClockSource::new();
    let mut sink = ConsoleSink;
    let summary = run_with(settings, &mut source, &mut sink);

    info!("Run summary: {}", serde_json::to_string(&summary)?);
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sample_feed::CollectingSink;

    fn quick_settings(capacity: usize, samples: u64) -> PipelineSettings {
        PipelineSettings {
            capacity,
            tick_ms: 0,
            samples,
            drain_between_writes: false,
        }
    }

    #[test]
    fn test_settings_defaults() {
        let settings = PipelineSettings::default();
        assert_eq!(settings.capacity, 10);
        assert_eq!(settings.tick_ms, 250);
        assert_eq!(settings.samples, 10);
        assert!(!settings.drain_between_writes);
    }

    #[test]
    fn test_run_drains_every_sample_when_buffer_fits() {
        let settings = quick_settings(10, 10);
        let mut source = ClockSource::new();
        let mut sink = CollectingSink::new();

        let summary = run_with(&settings, &mut source, &mut sink);

        assert_eq!(summary.produced, 10);
        assert_eq!(summary.consumed, 10);
        assert_eq!(summary.dropped, 0);
        assert_eq!(summary.residual, 10);

        let values: Vec<u16> = sink.samples().iter().map(|s| s.value()).collect();
        assert_eq!(values, (0..10).collect::<Vec<u16>>());
    }

    #[test]
    fn test_overflow_backpressure_keeps_every_sample() {
        // Capacity 3 with 10 samples forces repeated overflows; the
        // drain-one-retry policy must still deliver all of them in order.
        let settings = quick_settings(3, 10);
        let mut source = ClockSource::new();
        let mut sink = CollectingSink::new();

        let summary = run_with(&settings, &mut source, &mut sink);

        assert_eq!(summary.produced, 10);
        assert_eq!(summary.consumed, 10);
        assert_eq!(summary.dropped, 0);
        assert_eq!(summary.residual, 3);

        let values: Vec<u16> = sink.samples().iter().map(|s| s.value()).collect();
        assert_eq!(values, (0..10).collect::<Vec<u16>>());
    }

    #[test]
    fn test_drain_between_writes_keeps_buffer_shallow() {
        let settings = PipelineSettings {
            drain_between_writes: true,
            ..quick_settings(3, 10)
        };
        let mut source = ClockSource::new();
        let mut sink = CollectingSink::new();

        let summary = run_with(&settings, &mut source, &mut sink);

        assert_eq!(summary.consumed, 10);
        assert_eq!(summary.dropped, 0);
        assert_eq!(summary.residual, 0);
    }
}
