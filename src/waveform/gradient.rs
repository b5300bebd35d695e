use crate::foundation::core::Rgba8;

/// Per-row waveform colors for a track of `band_height` rows.
///
/// Row `r` blends from `center` (at `band_height / 2`) to `outer` (at the track edges) by
/// `|r - center_row| / center_row`. Passing equal colors yields a flat fill.
pub fn color_table(band_height: u32, center: Rgba8, outer: Rgba8) -> Vec<Rgba8> {
    let center_row = band_height / 2;
    (0..band_height)
        .map(|r| {
            let t = if center_row == 0 {
                0.0
            } else {
                (f64::from(r.abs_diff(center_row)) / f64::from(center_row)).clamp(0.0, 1.0)
            };
            lerp(center, outer, t)
        })
        .collect()
}

fn lerp(a: Rgba8, b: Rgba8, t: f64) -> Rgba8 {
    fn ch(a: u8, b: u8, t: f64) -> u8 {
        // Truncation, not rounding.
        (f64::from(a) * (1.0 - t) + f64::from(b) * t).clamp(0.0, 255.0) as u8
    }
    Rgba8::rgba(
        ch(a.r, b.r, t),
        ch(a.g, b.g, t),
        ch(a.b, b.b, t),
        ch(a.a, b.a, t),
    )
}

#[cfg(test)]
#[path = "../../tests/unit/waveform/gradient.rs"]
mod tests;
