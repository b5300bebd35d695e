use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::foundation::error::{WavelineError, WavelineResult};

/// The five canonical interleaved sample formats the engine understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SampleFormat {
    /// Unsigned 8-bit integer.
    U8,
    /// Signed 16-bit little-endian integer.
    I16,
    /// Signed 32-bit little-endian integer.
    I32,
    /// 32-bit little-endian IEEE float.
    F32,
    /// 64-bit little-endian IEEE float.
    F64,
}

/// Nominal numeric range of a sample format.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SampleRange {
    pub min: f64,
    pub max: f64,
}

impl SampleRange {
    /// `max - min`. Never zero for any [`SampleFormat`].
    pub fn span(self) -> f64 {
        self.max - self.min
    }
}

impl SampleFormat {
    pub const ALL: [Self; 5] = [Self::U8, Self::I16, Self::I32, Self::F32, Self::F64];

    /// Bytes per sample.
    pub const fn sample_size(self) -> usize {
        match self {
            Self::U8 => 1,
            Self::I16 => 2,
            Self::I32 | Self::F32 => 4,
            Self::F64 => 8,
        }
    }

    pub const fn range(self) -> SampleRange {
        match self {
            Self::U8 => SampleRange {
                min: 0.0,
                max: 255.0,
            },
            Self::I16 => SampleRange {
                min: i16::MIN as f64,
                max: i16::MAX as f64,
            },
            Self::I32 => SampleRange {
                min: i32::MIN as f64,
                max: i32::MAX as f64,
            },
            Self::F32 | Self::F64 => SampleRange {
                min: -1.0,
                max: 1.0,
            },
        }
    }

    /// Resolve a sample format name.
    ///
    /// Accepts ffmpeg names (packed and planar variants map to the same format, since the engine
    /// only reads interleaved bytes) and a few readable aliases.
    pub fn from_name(name: &str) -> WavelineResult<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "u8" | "u8p" | "uint8" => Ok(Self::U8),
            "s16" | "s16p" | "s16le" | "i16" | "int16" => Ok(Self::I16),
            "s32" | "s32p" | "s32le" | "i32" | "int32" => Ok(Self::I32),
            "flt" | "fltp" | "f32le" | "f32" | "float" => Ok(Self::F32),
            "dbl" | "dblp" | "f64le" | "f64" | "double" => Ok(Self::F64),
            _ => Err(WavelineError::unsupported_format(name.trim().to_owned())),
        }
    }

    /// Raw PCM muxer/codec name ffmpeg uses for this format's interleaved output.
    pub const fn raw_codec_name(self) -> &'static str {
        match self {
            Self::U8 => "u8",
            Self::I16 => "s16le",
            Self::I32 => "s32le",
            Self::F32 => "f32le",
            Self::F64 => "f64le",
        }
    }
}

impl fmt::Display for SampleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::U8 => "u8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::F32 => "f32",
            Self::F64 => "f64",
        };
        f.write_str(name)
    }
}

impl FromStr for SampleFormat {
    type Err = WavelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sample/format.rs"]
mod tests;
