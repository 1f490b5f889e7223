//! Sample Sources

use chrono::Local;
use ring_buffer::Sample;

/// ctime-style stamp ("Thu Feb 14 10:32:05 2019"), 24 characters
const TIMESTAMP_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

/// Producer side of the pipeline: hands out the next sample to store
pub trait SampleSource {
    /// Construct the next sample
    fn next_sample(&mut self) -> Sample;
}

/// Source producing a wrapping counter value stamped with local wall-clock time
#[derive(Debug, Default)]
pub struct ClockSource {
    counter: u16,
}

impl ClockSource {
    /// Create a source counting up from zero
    pub fn new() -> Self {
        Self { counter: 0 }
    }

    /// Create a source counting up from an arbitrary value
    pub fn starting_at(counter: u16) -> Self {
        Self { counter }
    }
}

impl SampleSource for ClockSource {
    fn next_sample(&mut self) -> Sample {
        let stamp = Local::now().format(TIMESTAMP_FORMAT).to_string();
        let sample = Sample::new(self.counter, &stamp);
        self.counter = self.counter.wrapping_add(1);
        sample
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ring_buffer::TIMESTAMP_CAPACITY;

    #[test]
    fn test_counter_increments() {
        let mut source = ClockSource::new();
        assert_eq!(source.next_sample().value(), 0);
        assert_eq!(source.next_sample().value(), 1);
        assert_eq!(source.next_sample().value(), 2);
    }

    #[test]
    fn test_counter_wraps() {
        let mut source = ClockSource::starting_at(u16::MAX);
        assert_eq!(source.next_sample().value(), u16::MAX);
        assert_eq!(source.next_sample().value(), 0);
    }

    #[test]
    fn test_timestamp_fits_capacity() {
        let mut source = ClockSource::new();
        let sample = source.next_sample();
        assert_eq!(sample.timestamp().len(), TIMESTAMP_CAPACITY);
    }
}
