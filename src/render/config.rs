use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::foundation::core::Rgba8;
use crate::foundation::error::{WavelineError, WavelineResult};

/// Default image width in pixels.
pub const DEFAULT_WIDTH: u32 = 256;
/// Default track height in pixels, per channel when stacking.
pub const DEFAULT_TRACK_HEIGHT: u32 = 64;
/// Default fraction of the image height spent on padding gaps.
pub const DEFAULT_PADDING_FRACTION: f64 = 0.05;

/// How the output image height is determined.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeightMode {
    /// The image is exactly this tall, whatever the channel count.
    Fixed(u32),
    /// Each stacked channel gets a track this tall; a combined render is one track.
    PerChannel(u32),
}

impl Default for HeightMode {
    fn default() -> Self {
        Self::PerChannel(DEFAULT_TRACK_HEIGHT)
    }
}

/// Column-parallelism controls for the downsampling pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderThreading {
    /// Compute column statistics on a dedicated rayon pool when `true`.
    pub parallel: bool,
    /// Optional explicit worker thread count (parallel mode only).
    pub threads: Option<usize>,
}

/// Everything a render needs besides the samples.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Image width; also the number of column windows.
    pub width: u32,
    pub height: HeightMode,
    /// Average all channels into one track instead of stacking them.
    pub combine_channels: bool,
    pub background: Rgba8,
    /// Waveform color at the vertical center of a track.
    pub waveform_center: Rgba8,
    /// Waveform color at the top/bottom edges of a track.
    pub waveform_outer: Rgba8,
    /// Fraction of the image height used for the gaps around bands, in `[0, 1)`.
    pub padding_fraction: f64,
    pub threading: RenderThreading,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: HeightMode::default(),
            combine_channels: false,
            background: Rgba8::BLACK,
            waveform_center: Rgba8::WHITE,
            waveform_outer: Rgba8::WHITE,
            padding_fraction: DEFAULT_PADDING_FRACTION,
            threading: RenderThreading::default(),
        }
    }
}

impl RenderConfig {
    /// Load a config from a JSON file. Missing fields take their defaults.
    pub fn from_path(path: impl AsRef<Path>) -> WavelineResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            WavelineError::validation(format!("open render config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    pub fn from_reader(r: impl Read) -> WavelineResult<Self> {
        let cfg: Self = serde_json::from_reader(r)
            .map_err(|e| WavelineError::serde(format!("render config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_json_str(s: &str) -> WavelineResult<Self> {
        Self::from_reader(s.as_bytes())
    }

    /// Waveform color flat across the track.
    pub fn with_flat_color(mut self, color: Rgba8) -> Self {
        self.waveform_center = color;
        self.waveform_outer = color;
        self
    }

    /// Check everything that does not depend on the sample buffer.
    pub fn validate(&self) -> WavelineResult<()> {
        if self.width == 0 {
            return Err(WavelineError::validation("image width must be > 0"));
        }
        match self.height {
            HeightMode::Fixed(0) => {
                return Err(WavelineError::validation("image height must be > 0"));
            }
            HeightMode::PerChannel(0) => {
                return Err(WavelineError::validation("track height must be > 0"));
            }
            _ => {}
        }
        if !self.padding_fraction.is_finite() || !(0.0..1.0).contains(&self.padding_fraction) {
            return Err(WavelineError::validation(format!(
                "padding fraction must be in [0, 1), got {}",
                self.padding_fraction
            )));
        }
        if let Some(n) = self.threading.threads
            && n == 0
        {
            return Err(WavelineError::validation(
                "render 'threads' must be >= 1 when set",
            ));
        }
        Ok(())
    }

    /// Output image height for a buffer with `channels` channels.
    pub fn image_height(&self, channels: u16) -> WavelineResult<u32> {
        match self.height {
            HeightMode::Fixed(h) => Ok(h),
            HeightMode::PerChannel(track) if self.combine_channels => Ok(track),
            HeightMode::PerChannel(track) => {
                track.checked_mul(u32::from(channels)).ok_or_else(|| {
                    WavelineError::validation(format!(
                        "{channels} channels of {track}px tracks overflow the image height"
                    ))
                })
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/config.rs"]
mod tests;
