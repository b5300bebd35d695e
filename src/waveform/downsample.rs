use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::foundation::error::{WavelineError, WavelineResult};
use crate::sample::accessor::{AccessorVisitor, SampleAccessor, dispatch};
use crate::sample::buffer::SampleBuffer;
use crate::sample::format::SampleRange;

/// Which sample stream a column statistic summarizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelSelector {
    /// A single channel of the interleaved buffer.
    Channel(u16),
    /// The per-frame average across all channels.
    Combined,
}

/// Envelope of one window of frames, in normalized sample space.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColumnStat {
    pub column: u32,
    pub channel: ChannelSelector,
    pub min: f64,
    pub max: f64,
    /// Mean value over the window. Informational only; never drives pixel placement.
    pub average: f64,
}

impl ColumnStat {
    /// True when the window visited no frames and still holds the seed values
    /// (`min` = format max, `max` = format min).
    pub fn is_degenerate(&self) -> bool {
        self.min > self.max
    }
}

/// Frames per column window. Frames past `width * samples_per_window` are not visited.
pub fn samples_per_window(frame_count: usize, width: u32) -> usize {
    if width == 0 {
        0
    } else {
        frame_count / width as usize
    }
}

/// Reduce the buffer to exactly `width` column statistics for `selector`.
pub fn downsample(
    buffer: &SampleBuffer<'_>,
    width: u32,
    selector: ChannelSelector,
) -> WavelineResult<Vec<ColumnStat>> {
    downsample_in(buffer, width, selector, None)
}

/// Like [`downsample`], computing columns in parallel on `pool`.
///
/// Columns are independent (each reads only its own window), so the result is identical to the
/// sequential one.
pub fn downsample_par(
    buffer: &SampleBuffer<'_>,
    width: u32,
    selector: ChannelSelector,
    pool: &rayon::ThreadPool,
) -> WavelineResult<Vec<ColumnStat>> {
    downsample_in(buffer, width, selector, Some(pool))
}

fn downsample_in(
    buffer: &SampleBuffer<'_>,
    width: u32,
    selector: ChannelSelector,
    pool: Option<&rayon::ThreadPool>,
) -> WavelineResult<Vec<ColumnStat>> {
    if width == 0 {
        return Err(WavelineError::validation("image width must be > 0"));
    }
    if buffer.is_empty() {
        return Err(WavelineError::insufficient_data(
            "sample buffer contains no complete frames",
        ));
    }
    if let ChannelSelector::Channel(c) = selector
        && c >= buffer.channels()
    {
        return Err(WavelineError::validation(format!(
            "channel {c} out of range for {} channel(s)",
            buffer.channels()
        )));
    }

    let job = Columns {
        bytes: buffer.bytes(),
        channels: usize::from(buffer.channels()),
        spw: samples_per_window(buffer.frame_count(), width),
        width,
        selector,
        range: buffer.format().range(),
        pool,
    };
    Ok(dispatch(buffer.format(), job))
}

struct Columns<'b> {
    bytes: &'b [u8],
    channels: usize,
    spw: usize,
    width: u32,
    selector: ChannelSelector,
    range: SampleRange,
    pool: Option<&'b rayon::ThreadPool>,
}

impl AccessorVisitor for Columns<'_> {
    type Output = Vec<ColumnStat>;

    fn visit<A: SampleAccessor>(self) -> Vec<ColumnStat> {
        let stat = |x: u32| column_stat::<A>(&self, x);
        match self.pool {
            Some(pool) => pool.install(|| (0..self.width).into_par_iter().map(stat).collect()),
            None => (0..self.width).map(stat).collect(),
        }
    }
}

fn column_stat<A: SampleAccessor>(job: &Columns<'_>, x: u32) -> ColumnStat {
    let mut min = job.range.max;
    let mut max = job.range.min;
    let mut sum = 0.0;

    let start = x as usize * job.spw;
    let frames = start..start + job.spw;

    let mut track = |v: f64| {
        if v < min {
            min = v;
        }
        if v > max {
            max = v;
        }
        sum += v;
    };

    match job.selector {
        ChannelSelector::Channel(c) => {
            let c = usize::from(c);
            for f in frames {
                track(A::read(job.bytes, job.channels, f, c));
            }
        }
        ChannelSelector::Combined => {
            let channel_average_multiplier = 1.0 / job.channels as f64;
            for f in frames {
                let mut value = 0.0;
                for c in 0..job.channels {
                    value += A::read(job.bytes, job.channels, f, c);
                }
                track(value * channel_average_multiplier);
            }
        }
    }

    let average = if job.spw == 0 {
        0.0
    } else {
        sum / job.spw as f64
    };

    ColumnStat {
        column: x,
        channel: job.selector,
        min,
        max,
        average,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/waveform/downsample.rs"]
mod tests;
