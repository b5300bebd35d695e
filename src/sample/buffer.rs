use std::borrow::Cow;

use crate::foundation::error::{WavelineError, WavelineResult};
use crate::sample::format::SampleFormat;

/// Immutable view over decoded, interleaved audio samples.
///
/// Frame `f`, channel `c` lives at byte offset
/// `f * channels * sample_size + c * sample_size`. Trailing bytes that do not form a full frame
/// are ignored.
#[derive(Clone, Debug)]
pub struct SampleBuffer<'a> {
    bytes: Cow<'a, [u8]>,
    format: SampleFormat,
    channels: u16,
    sample_rate: Option<u32>,
}

impl<'a> SampleBuffer<'a> {
    pub fn new(
        bytes: impl Into<Cow<'a, [u8]>>,
        format: SampleFormat,
        channels: u16,
    ) -> WavelineResult<Self> {
        if channels == 0 {
            return Err(WavelineError::validation("channel count must be >= 1"));
        }
        Ok(Self {
            bytes: bytes.into(),
            format,
            channels,
            sample_rate: None,
        })
    }

    /// Attach a sample rate. Only used for diagnostics.
    pub fn with_sample_rate(mut self, sample_rate: u32) -> Self {
        self.sample_rate = (sample_rate > 0).then_some(sample_rate);
        self
    }

    pub fn format(&self) -> SampleFormat {
        self.format
    }

    pub fn channels(&self) -> u16 {
        self.channels
    }

    pub fn sample_rate(&self) -> Option<u32> {
        self.sample_rate
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Bytes occupied by one frame (one sample per channel).
    pub fn frame_stride(&self) -> usize {
        self.format.sample_size() * usize::from(self.channels)
    }

    pub fn frame_count(&self) -> usize {
        self.bytes.len() / self.frame_stride()
    }

    pub fn is_empty(&self) -> bool {
        self.frame_count() == 0
    }

    pub fn duration_secs(&self) -> Option<f64> {
        self.sample_rate.map(|sr| self.frame_count() as f64 / f64::from(sr))
    }

    pub fn into_owned(self) -> SampleBuffer<'static> {
        SampleBuffer {
            bytes: Cow::Owned(self.bytes.into_owned()),
            format: self.format,
            channels: self.channels,
            sample_rate: self.sample_rate,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sample/buffer.rs"]
mod tests;
