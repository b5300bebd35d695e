use crate::foundation::error::{WavelineError, WavelineResult};
use crate::render::config::{RenderConfig, RenderThreading};
use crate::sample::buffer::SampleBuffer;
use crate::waveform::downsample::{
    ChannelSelector, ColumnStat, downsample, downsample_par, samples_per_window,
};
use crate::waveform::gradient::color_table;
use crate::waveform::layout::plan_bands;
use crate::waveform::raster::{PixelGrid, paint_column};

/// Render a waveform image from `buffer`.
///
/// Pipeline:
/// 1. validate config and buffer
/// 2. [`plan_bands`] for the stacked channels, or one band when combining
/// 3. allocate the grid, rejecting images too large to address
/// 4. downsample every track to `width` column statistics
/// 5. [`color_table`] per band and [`paint_column`] for every column of every band
///
/// Returns a fully painted, straight-alpha RGBA8 [`PixelGrid`].
#[tracing::instrument(
    skip(buffer, config),
    fields(format = %buffer.format(), channels = buffer.channels())
)]
pub fn render_waveform(
    buffer: &SampleBuffer<'_>,
    config: &RenderConfig,
) -> WavelineResult<PixelGrid> {
    config.validate()?;
    ensure_frames(buffer)?;

    let height = config.image_height(buffer.channels())?;
    let tracks = if config.combine_channels {
        1
    } else {
        buffer.channels()
    };
    let bands = plan_bands(height, tracks, config.padding_fraction)?;
    let mut grid = PixelGrid::new(config.width, height)?;
    let stats = column_stats(buffer, config)?;
    let range = buffer.format().range();

    for (band, track) in bands.iter().zip(&stats) {
        let colors = color_table(
            band.band_height,
            config.waveform_center,
            config.waveform_outer,
        );
        for stat in track {
            paint_column(
                &mut grid,
                stat.column,
                band,
                stat,
                &colors,
                config.background,
                range,
            );
        }
    }

    tracing::debug!(
        width = grid.width(),
        height = grid.height(),
        bands = bands.len(),
        "rendered waveform"
    );
    Ok(grid)
}

/// Column statistics for every track of a render: one row per channel, or a single combined row.
pub fn column_stats(
    buffer: &SampleBuffer<'_>,
    config: &RenderConfig,
) -> WavelineResult<Vec<Vec<ColumnStat>>> {
    ensure_frames(buffer)?;

    let selectors = if config.combine_channels {
        vec![ChannelSelector::Combined]
    } else {
        (0..buffer.channels())
            .map(ChannelSelector::Channel)
            .collect()
    };

    tracing::debug!(
        frames = buffer.frame_count(),
        samples_per_window = samples_per_window(buffer.frame_count(), config.width),
        duration_secs = buffer.duration_secs(),
        tracks = selectors.len(),
        parallel = config.threading.parallel,
        "downsampling"
    );

    if !config.threading.parallel {
        return selectors
            .into_iter()
            .map(|sel| downsample(buffer, config.width, sel))
            .collect();
    }

    let pool = build_thread_pool(&config.threading)?;
    selectors
        .into_iter()
        .map(|sel| downsample_par(buffer, config.width, sel, &pool))
        .collect()
}

fn ensure_frames(buffer: &SampleBuffer<'_>) -> WavelineResult<()> {
    if buffer.is_empty() {
        return Err(WavelineError::insufficient_data(format!(
            "no complete frames in {} byte(s) of {} audio with {} channel(s)",
            buffer.bytes().len(),
            buffer.format(),
            buffer.channels()
        )));
    }
    Ok(())
}

fn build_thread_pool(threading: &RenderThreading) -> WavelineResult<rayon::ThreadPool> {
    if let Some(n) = threading.threads
        && n == 0
    {
        return Err(WavelineError::validation(
            "render 'threads' must be >= 1 when set",
        ));
    }
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threading.threads {
        builder = builder.num_threads(n);
    }
    builder.build().map_err(|e| {
        WavelineError::Other(anyhow::anyhow!("failed to build rayon thread pool: {e}"))
    })
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
