use std::io::Read;
use std::path::Path;

use crate::foundation::error::{WavelineError, WavelineResult};
use crate::sample::buffer::SampleBuffer;
use crate::sample::format::SampleFormat;

/// Headerless interleaved PCM layout, supplied by the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawPcmSpec {
    pub format: SampleFormat,
    pub channels: u16,
    pub sample_rate: Option<u32>,
}

/// Load a headerless little-endian PCM file.
///
/// A trailing partial frame is kept in the buffer and ignored by readers.
#[tracing::instrument(skip(spec), fields(format = %spec.format, channels = spec.channels))]
pub fn read_raw_pcm(path: &Path, spec: RawPcmSpec) -> WavelineResult<SampleBuffer<'static>> {
    let bytes = std::fs::read(path).map_err(|e| {
        WavelineError::decode(format!("read raw pcm '{}': {e}", path.display()))
    })?;
    tracing::debug!(bytes = bytes.len(), "loaded raw pcm");
    into_buffer(bytes, spec)
}

/// Load headerless PCM from any reader, e.g. stdin.
pub fn read_raw_pcm_from(
    mut r: impl Read,
    spec: RawPcmSpec,
) -> WavelineResult<SampleBuffer<'static>> {
    let mut bytes = Vec::new();
    r.read_to_end(&mut bytes)
        .map_err(|e| WavelineError::decode(format!("read raw pcm: {e}")))?;
    into_buffer(bytes, spec)
}

fn into_buffer(bytes: Vec<u8>, spec: RawPcmSpec) -> WavelineResult<SampleBuffer<'static>> {
    let buffer = SampleBuffer::new(bytes, spec.format, spec.channels)?;
    Ok(match spec.sample_rate {
        Some(sr) => buffer.with_sample_rate(sr),
        None => buffer,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/decode/raw.rs"]
mod tests;
