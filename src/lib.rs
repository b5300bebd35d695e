//! Waveline renders audio sample buffers into waveform images.
//!
//! The engine is format-agnostic: interleaved PCM in any of the supported [`SampleFormat`]s is
//! reduced to per-column min/max/average statistics, laid out as stacked channel bands (or one
//! combined track) and painted into an RGBA8 [`PixelGrid`].
//!
//! - Wrap raw bytes in a [`SampleBuffer`] (or decode a media file with [`decode_audio`])
//! - Describe the image with a [`RenderConfig`]
//! - Call [`render_waveform`] and write the result with [`write_png`] / [`encode_png`]
#![forbid(unsafe_code)]

mod foundation;

/// Sample decoding adapters: raw PCM files and ffmpeg.
pub mod decode;
/// Image encoding adapters.
pub mod encode;
/// Render configuration and the end-to-end pipeline.
pub mod render;
/// Sample formats, buffers and per-format accessors.
pub mod sample;
/// Downsampling, band layout, gradients and column rasterization.
pub mod waveform;

pub use crate::foundation::core::Rgba8;
pub use crate::foundation::error::{WavelineError, WavelineResult};

pub use crate::decode::ffmpeg::{AudioSourceInfo, decode_audio, is_ffmpeg_on_path, probe_audio};
pub use crate::decode::raw::{RawPcmSpec, read_raw_pcm, read_raw_pcm_from};
pub use crate::encode::png::{encode_png, write_png};
pub use crate::render::config::{HeightMode, RenderConfig, RenderThreading};
pub use crate::render::pipeline::{column_stats, render_waveform};
pub use crate::sample::accessor::{
    AccessorVisitor, F32Accessor, F64Accessor, I16Accessor, I32Accessor, SampleAccessor,
    U8Accessor, dispatch, read_sample,
};
pub use crate::sample::buffer::SampleBuffer;
pub use crate::sample::format::{SampleFormat, SampleRange};
pub use crate::waveform::downsample::{
    ChannelSelector, ColumnStat, downsample, downsample_par, samples_per_window,
};
pub use crate::waveform::gradient::color_table;
pub use crate::waveform::layout::{ChannelBand, plan_bands};
pub use crate::waveform::raster::{ColumnRuns, PixelGrid, paint_column};
