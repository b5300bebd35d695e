use serde::{Deserialize, Serialize};

use crate::foundation::error::{WavelineError, WavelineResult};

/// Accumulated fractional rows at or above this count as a whole row.
const ROW_EPSILON: f64 = 1e-9;

/// Vertical slice of the image owned by one channel.
///
/// `start_row..=end_row` is the full slice (bands partition the image). The waveform track is
/// `band_height` rows starting at `track_start`; the rest of the slice is padding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelBand {
    pub channel_index: u16,
    pub start_row: u32,
    pub end_row: u32,
    pub track_start: u32,
    pub band_height: u32,
}

impl ChannelBand {
    /// Rows owned by the band, padding included.
    pub fn row_count(&self) -> u32 {
        self.end_row - self.start_row + 1
    }

    pub fn padding_rows(&self) -> u32 {
        self.row_count() - self.band_height
    }

    /// Last track row. Only meaningful when `band_height > 0`.
    pub fn track_end(&self) -> u32 {
        self.track_start + self.band_height.saturating_sub(1)
    }
}

/// Split `height` rows into one band per channel, with `channel_count + 1` padding gaps.
///
/// Band heights are `floor((height - padding) / channel_count)`; the fractional remainder
/// accumulates across channels and each whole row it produces goes to the channel where it
/// completes. The last band always ends at `height - 1`, absorbing the trailing gap and any
/// leftover rounding.
pub fn plan_bands(
    height: u32,
    channel_count: u16,
    padding_fraction: f64,
) -> WavelineResult<Vec<ChannelBand>> {
    if height == 0 {
        return Err(WavelineError::validation("image height must be > 0"));
    }
    if channel_count == 0 {
        return Err(WavelineError::validation("channel count must be >= 1"));
    }
    if height < u32::from(channel_count) {
        return Err(WavelineError::validation(format!(
            "image height {height} cannot hold {channel_count} channel bands"
        )));
    }
    if !padding_fraction.is_finite() || !(0.0..1.0).contains(&padding_fraction) {
        return Err(WavelineError::validation(format!(
            "padding fraction must be in [0, 1), got {padding_fraction}"
        )));
    }

    let n = f64::from(channel_count);
    let total_padding = f64::from(height) * padding_fraction;
    let gap_rows = (total_padding / (n + 1.0)).floor() as u32;
    let raw_band_height = (f64::from(height) - total_padding) / n;
    let base_band_height = raw_band_height.floor();
    let fraction = raw_band_height - base_band_height;
    let base_band_height = base_band_height as u32;

    let mut bands = Vec::with_capacity(usize::from(channel_count));
    let mut cursor = 0u32;
    let mut carry = 0.0f64;

    for channel_index in 0..channel_count {
        let mut band_height = base_band_height;
        carry += fraction;
        if carry >= 1.0 - ROW_EPSILON {
            band_height += 1;
            carry -= 1.0;
        }

        let start_row = cursor;
        let track_start = start_row + gap_rows;
        let next = track_start + band_height;
        let end_row = if channel_index + 1 == channel_count {
            height - 1
        } else {
            next.saturating_sub(1).max(start_row)
        };

        let track_start = track_start.min(end_row + 1);
        bands.push(ChannelBand {
            channel_index,
            start_row,
            end_row,
            track_start,
            band_height: band_height.min(end_row + 1 - track_start),
        });
        cursor = end_row + 1;
    }

    tracing::debug!(
        height,
        channel_count,
        padding_fraction,
        gap_rows,
        base_band_height,
        "planned channel bands"
    );
    Ok(bands)
}

#[cfg(test)]
#[path = "../../tests/unit/waveform/layout.rs"]
mod tests;
