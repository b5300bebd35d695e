//! Per-format sample readers.
//!
//! Each [`SampleFormat`] gets a zero-sized [`SampleAccessor`] implementation. Callers pick the
//! implementation once with [`dispatch`] and run a loop that is monomorphized for it, so the hot
//! downsampling path never branches on the format per sample.

use crate::sample::buffer::SampleBuffer;
use crate::sample::format::SampleFormat;

/// Decodes one little-endian sample of a fixed format into the normalized `f64` domain.
pub trait SampleAccessor {
    const FORMAT: SampleFormat;
    const SIZE: usize = Self::FORMAT.sample_size();

    /// `raw.len()` is exactly [`Self::SIZE`].
    fn decode(raw: &[u8]) -> f64;

    /// Read frame `frame`, channel `channel` out of an interleaved byte buffer.
    #[inline]
    fn read(bytes: &[u8], channels: usize, frame: usize, channel: usize) -> f64 {
        debug_assert!(channel < channels, "channel {channel} out of range");
        let off = (frame * channels + channel) * Self::SIZE;
        Self::decode(&bytes[off..off + Self::SIZE])
    }
}

pub struct U8Accessor;
pub struct I16Accessor;
pub struct I32Accessor;
pub struct F32Accessor;
pub struct F64Accessor;

impl SampleAccessor for U8Accessor {
    const FORMAT: SampleFormat = SampleFormat::U8;

    #[inline]
    fn decode(raw: &[u8]) -> f64 {
        f64::from(raw[0])
    }
}

impl SampleAccessor for I16Accessor {
    const FORMAT: SampleFormat = SampleFormat::I16;

    #[inline]
    fn decode(raw: &[u8]) -> f64 {
        f64::from(i16::from_le_bytes([raw[0], raw[1]]))
    }
}

impl SampleAccessor for I32Accessor {
    const FORMAT: SampleFormat = SampleFormat::I32;

    #[inline]
    fn decode(raw: &[u8]) -> f64 {
        f64::from(i32::from_le_bytes([raw[0], raw[1], raw[2], raw[3]]))
    }
}

impl SampleAccessor for F32Accessor {
    const FORMAT: SampleFormat = SampleFormat::F32;

    #[inline]
    fn decode(raw: &[u8]) -> f64 {
        clamp_unit(f64::from(f32::from_le_bytes([raw[0], raw[1], raw[2], raw[3]])))
    }
}

impl SampleAccessor for F64Accessor {
    const FORMAT: SampleFormat = SampleFormat::F64;

    #[inline]
    fn decode(raw: &[u8]) -> f64 {
        let mut b = [0u8; 8];
        b.copy_from_slice(raw);
        clamp_unit(f64::from_le_bytes(b))
    }
}

// Decoders may emit floats marginally outside [-1, 1]. NaN maps to silence.
#[inline]
fn clamp_unit(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.clamp(-1.0, 1.0) }
}

/// Work that is generic over the sample accessor, run via [`dispatch`].
pub trait AccessorVisitor {
    type Output;

    fn visit<A: SampleAccessor>(self) -> Self::Output;
}

/// Select the accessor for `format` once and run `visitor` with it.
pub fn dispatch<V: AccessorVisitor>(format: SampleFormat, visitor: V) -> V::Output {
    match format {
        SampleFormat::U8 => visitor.visit::<U8Accessor>(),
        SampleFormat::I16 => visitor.visit::<I16Accessor>(),
        SampleFormat::I32 => visitor.visit::<I32Accessor>(),
        SampleFormat::F32 => visitor.visit::<F32Accessor>(),
        SampleFormat::F64 => visitor.visit::<F64Accessor>(),
    }
}

/// Read a single normalized sample.
///
/// Convenience entry point that dispatches per call; loops should go through [`dispatch`].
pub fn read_sample(buffer: &SampleBuffer<'_>, frame: usize, channel: usize) -> f64 {
    debug_assert!(frame < buffer.frame_count(), "frame {frame} out of range");

    struct ReadOne<'b> {
        bytes: &'b [u8],
        channels: usize,
        frame: usize,
        channel: usize,
    }

    impl AccessorVisitor for ReadOne<'_> {
        type Output = f64;

        fn visit<A: SampleAccessor>(self) -> f64 {
            A::read(self.bytes, self.channels, self.frame, self.channel)
        }
    }

    dispatch(
        buffer.format(),
        ReadOne {
            bytes: buffer.bytes(),
            channels: usize::from(buffer.channels()),
            frame,
            channel,
        },
    )
}

#[cfg(test)]
#[path = "../../tests/unit/sample/accessor.rs"]
mod tests;
