use std::path::{Path, PathBuf};

use crate::foundation::error::{WavelineError, WavelineResult};
use crate::sample::buffer::SampleBuffer;
use crate::sample::format::SampleFormat;

#[derive(Clone, Debug)]
/// Basic metadata about the best audio stream of a media file.
pub struct AudioSourceInfo {
    /// Source path used for probing/decoding.
    pub source_path: PathBuf,
    /// Native sample format, planar or packed.
    pub format: SampleFormat,
    /// Channel count.
    pub channels: u16,
    /// Sample rate in Hz, when reported.
    pub sample_rate: Option<u32>,
    /// Stream duration in seconds, when reported.
    pub duration_secs: Option<f64>,
}

/// Parse `ffprobe -print_format json -show_streams` output.
pub(crate) fn parse_probe_json(source_path: &Path, json: &[u8]) -> WavelineResult<AudioSourceInfo> {
    #[derive(serde::Deserialize)]
    struct ProbeStream {
        codec_type: Option<String>,
        sample_fmt: Option<String>,
        channels: Option<u16>,
        sample_rate: Option<String>,
        duration: Option<String>,
    }
    #[derive(serde::Deserialize)]
    struct ProbeOut {
        #[serde(default)]
        streams: Vec<ProbeStream>,
    }

    let parsed: ProbeOut = serde_json::from_slice(json)
        .map_err(|e| WavelineError::decode(format!("ffprobe json parse failed: {e}")))?;
    let stream = parsed
        .streams
        .into_iter()
        .find(|s| s.codec_type.as_deref() == Some("audio"))
        .ok_or_else(|| {
            WavelineError::insufficient_data(format!(
                "no audio stream found in '{}'",
                source_path.display()
            ))
        })?;

    let sample_fmt = stream
        .sample_fmt
        .ok_or_else(|| WavelineError::decode("missing sample_fmt from ffprobe"))?;
    let format = SampleFormat::from_name(&sample_fmt)?;
    let channels = stream
        .channels
        .filter(|&c| c > 0)
        .ok_or_else(|| WavelineError::decode("missing channel count from ffprobe"))?;

    Ok(AudioSourceInfo {
        source_path: source_path.to_path_buf(),
        format,
        channels,
        sample_rate: stream.sample_rate.and_then(|s| s.parse().ok()),
        duration_secs: stream.duration.and_then(|s| s.parse().ok()),
    })
}

/// Command line arguments that make `ffmpeg` write the first audio stream as interleaved raw PCM
/// in `format`, keeping the native channel count.
pub(crate) fn raw_pcm_args(format: SampleFormat) -> Vec<String> {
    let raw = format.raw_codec_name();
    vec![
        "-vn".to_string(),
        "-map".to_string(),
        "0:a:0".to_string(),
        "-f".to_string(),
        raw.to_string(),
        "-acodec".to_string(),
        format!("pcm_{raw}"),
        "pipe:1".to_string(),
    ]
}

/// Probe the best audio stream through `ffprobe`.
#[cfg(feature = "media-ffmpeg")]
pub fn probe_audio(source_path: &Path) -> WavelineResult<AudioSourceInfo> {
    let out = std::process::Command::new("ffprobe")
        .args([
            "-v",
            "error",
            "-select_streams",
            "a:0",
            "-print_format",
            "json",
            "-show_streams",
        ])
        .arg(source_path)
        .output()
        .map_err(|e| WavelineError::decode(format!("failed to run ffprobe: {e}")))?;
    if !out.status.success() {
        return Err(WavelineError::decode(format!(
            "ffprobe failed for '{}': {}",
            source_path.display(),
            String::from_utf8_lossy(&out.stderr).trim()
        )));
    }
    parse_probe_json(source_path, &out.stdout)
}

#[cfg(not(feature = "media-ffmpeg"))]
/// Probe the best audio stream through `ffprobe`.
///
/// Returns an error when `media-ffmpeg` feature is disabled.
pub fn probe_audio(_source_path: &Path) -> WavelineResult<AudioSourceInfo> {
    Err(WavelineError::decode(
        "decoding media files requires the 'media-ffmpeg' feature",
    ))
}

/// Decode the best audio stream of a media file into an interleaved [`SampleBuffer`] in its
/// native sample format.
#[cfg(feature = "media-ffmpeg")]
#[tracing::instrument]
pub fn decode_audio(path: &Path) -> WavelineResult<SampleBuffer<'static>> {
    let info = probe_audio(path)?;
    tracing::debug!(
        format = %info.format,
        channels = info.channels,
        sample_rate = info.sample_rate,
        duration_secs = info.duration_secs,
        "probed audio stream"
    );

    let out = std::process::Command::new("ffmpeg")
        .args(["-v", "error", "-i"])
        .arg(path)
        .args(raw_pcm_args(info.format))
        .output()
        .map_err(|e| WavelineError::decode(format!("failed to run ffmpeg for audio decode: {e}")))?;

    if !out.status.success() {
        return Err(WavelineError::decode(format!(
            "ffmpeg audio decode failed for '{}': {}",
            path.display(),
            String::from_utf8_lossy(&out.stderr).trim()
        )));
    }
    if out.stdout.is_empty() {
        return Err(WavelineError::insufficient_data(format!(
            "did not read any audio data from '{}'",
            path.display()
        )));
    }

    let buffer = SampleBuffer::new(out.stdout, info.format, info.channels)?;
    Ok(match info.sample_rate {
        Some(sr) => buffer.with_sample_rate(sr),
        None => buffer,
    })
}

#[cfg(not(feature = "media-ffmpeg"))]
/// Decode the best audio stream of a media file.
///
/// Returns an error when `media-ffmpeg` feature is disabled.
pub fn decode_audio(_path: &Path) -> WavelineResult<SampleBuffer<'static>> {
    Err(WavelineError::decode(
        "decoding media files requires the 'media-ffmpeg' feature",
    ))
}

/// Return `true` when `ffmpeg` can be invoked from `PATH`.
pub fn is_ffmpeg_on_path() -> bool {
    std::process::Command::new("ffmpeg")
        .arg("-version")
        .stdout(std::process::Stdio::null())
        .stderr(std::process::Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

#[cfg(test)]
#[path = "../../tests/unit/decode/ffmpeg.rs"]
mod tests;
