use std::path::Path;

use image::ImageEncoder;

use crate::foundation::error::{WavelineError, WavelineResult};
use crate::waveform::raster::PixelGrid;

/// Write `grid` to `path` as an RGBA8 PNG, creating parent directories as needed.
#[tracing::instrument(skip(grid), fields(width = grid.width(), height = grid.height()))]
pub fn write_png(grid: &PixelGrid, path: &Path) -> WavelineResult<()> {
    ensure_parent_dir(path)?;
    image::save_buffer_with_format(
        path,
        grid.as_raw(),
        grid.width(),
        grid.height(),
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .map_err(|e| WavelineError::encode(format!("write png '{}': {e}", path.display())))
}

/// Encode `grid` as an in-memory RGBA8 PNG.
pub fn encode_png(grid: &PixelGrid) -> WavelineResult<Vec<u8>> {
    let mut out = Vec::new();
    image::codecs::png::PngEncoder::new(&mut out)
        .write_image(
            grid.as_raw(),
            grid.width(),
            grid.height(),
            image::ExtendedColorType::Rgba8,
        )
        .map_err(|e| WavelineError::encode(format!("encode png: {e}")))?;
    Ok(out)
}

fn ensure_parent_dir(path: &Path) -> WavelineResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| {
            WavelineError::encode(format!(
                "create output directory '{}': {e}",
                parent.display()
            ))
        })?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png.rs"]
mod tests;
