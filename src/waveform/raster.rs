use crate::foundation::core::Rgba8;
use crate::foundation::error::{WavelineError, WavelineResult};
use crate::sample::format::SampleRange;
use crate::waveform::downsample::ColumnStat;
use crate::waveform::layout::ChannelBand;

/// Row-major RGBA8 pixels, tightly packed, straight alpha.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelGrid {
    /// Allocate a zeroed (transparent) grid.
    pub fn new(width: u32, height: u32) -> WavelineResult<Self> {
        if width == 0 || height == 0 {
            return Err(WavelineError::validation(format!(
                "image dimensions must be > 0, got {width}x{height}"
            )));
        }
        let too_large =
            || WavelineError::validation(format!("image {width}x{height} is too large"));
        let len = (width as usize)
            .checked_mul(height as usize)
            .and_then(|px| px.checked_mul(4))
            .filter(|&len| len <= isize::MAX as usize)
            .ok_or_else(too_large)?;

        let mut data = Vec::new();
        data.try_reserve_exact(len).map_err(|_| too_large())?;
        data.resize(len, 0);
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    pub fn pixel(&self, x: u32, y: u32) -> Rgba8 {
        let i = self.offset(x, y);
        Rgba8::rgba(
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        )
    }

    #[inline]
    fn put(&mut self, x: u32, y: u32, c: Rgba8) {
        let i = self.offset(x, y);
        self.data[i..i + 4].copy_from_slice(&c.to_array());
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        debug_assert!(x < self.width && y < self.height);
        (y as usize * self.width as usize + x as usize) * 4
    }
}

/// Row counts painted by [`paint_column`]. Their sum equals the band's row count.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ColumnRuns {
    pub background_rows: u32,
    pub waveform_rows: u32,
}

impl ColumnRuns {
    pub fn total(self) -> u32 {
        self.background_rows + self.waveform_rows
    }
}

/// Track-relative row offset (0 = bottom) of `value` in a track of `band_height` rows.
///
/// Rounds up, so the top-down row `track_end - offset` is the truncation of the exact row.
fn row_offset(value: f64, band_height: u32, range: SampleRange) -> u32 {
    let last = band_height.saturating_sub(1);
    let offset = ((value - range.min) * f64::from(last) / range.span()).ceil();
    offset.clamp(0.0, f64::from(last)) as u32
}

/// Paint one column of one band, top to bottom.
///
/// Padding rows and rows outside the `[min, max]` envelope get `background`; envelope rows get
/// `colors[row - band.track_start]`. Positive amplitudes land toward the top of the track.
/// Every row of the band is written exactly once and the grid is never read.
pub fn paint_column(
    grid: &mut PixelGrid,
    column: u32,
    band: &ChannelBand,
    stat: &ColumnStat,
    colors: &[Rgba8],
    background: Rgba8,
    range: SampleRange,
) -> ColumnRuns {
    debug_assert_eq!(colors.len(), band.band_height as usize);

    let mut runs = ColumnRuns::default();
    let fill = |grid: &mut PixelGrid, rows: std::ops::Range<u32>, runs: &mut ColumnRuns| {
        for y in rows {
            grid.put(column, y, background);
            runs.background_rows += 1;
        }
    };

    fill(grid, band.start_row..band.track_start, &mut runs);

    if band.band_height == 0 {
        fill(grid, band.track_start..band.end_row + 1, &mut runs);
        return runs;
    }

    let track_end = band.track_end();
    let upper = track_end - row_offset(stat.max, band.band_height, range);
    let lower = track_end - row_offset(stat.min, band.band_height, range);

    if !stat.is_degenerate() && upper <= lower {
        fill(grid, band.track_start..upper, &mut runs);
        for y in upper..=lower {
            grid.put(column, y, colors[(y - band.track_start) as usize]);
            runs.waveform_rows += 1;
        }
    } else {
        // Degenerate window: nothing visited, zero-height waveform.
        fill(grid, band.track_start..lower + 1, &mut runs);
    }

    fill(grid, lower + 1..band.end_row + 1, &mut runs);
    runs
}

#[cfg(test)]
#[path = "../../tests/unit/waveform/raster.rs"]
mod tests;
