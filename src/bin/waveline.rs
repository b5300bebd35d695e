use std::io::Write as _;
use std::path::PathBuf;

use anyhow::Context as _;
use clap::{ArgAction, Parser};
use waveline::{HeightMode, RawPcmSpec, RenderConfig, Rgba8, SampleBuffer, SampleFormat};

/// Render an audio file into a waveform PNG.
#[derive(Parser, Debug)]
#[command(name = "waveline", version, disable_help_flag = true)]
struct Cli {
    /// Print help.
    #[arg(long, action = ArgAction::Help)]
    help: Option<bool>,

    /// Input audio file. With `--raw-format`, `-` reads raw PCM from stdin.
    #[arg(short = 'i', long = "input")]
    input: PathBuf,

    /// Output PNG path. Writes to stdout when omitted.
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// Image width in pixels.
    #[arg(short = 'w', long)]
    width: Option<u32>,

    /// Total image height in pixels.
    #[arg(short = 'h', long, conflicts_with = "track_height")]
    height: Option<u32>,

    /// Height of each channel track in pixels.
    #[arg(short = 't', long = "track-height")]
    track_height: Option<u32>,

    /// Combine all channels into a single track.
    #[arg(short = 'm', long = "combine", default_value_t = false)]
    combine: bool,

    /// Background color (#rrggbb or #rrggbbaa).
    #[arg(long)]
    background: Option<Rgba8>,

    /// Waveform color at the center of a track.
    #[arg(long)]
    center: Option<Rgba8>,

    /// Waveform color at the edges of a track.
    #[arg(long)]
    outer: Option<Rgba8>,

    /// Fraction of the image height used for padding, in [0, 1).
    #[arg(long)]
    padding: Option<f64>,

    /// JSON render config; command line options override its fields.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Treat the input as headerless interleaved PCM in this format.
    #[arg(long = "raw-format", requires = "channels")]
    raw_format: Option<SampleFormat>,

    /// Channel count of raw PCM input.
    #[arg(long, requires = "raw_format")]
    channels: Option<u16>,

    /// Sample rate of raw PCM input, in Hz.
    #[arg(long = "sample-rate", requires = "raw_format")]
    sample_rate: Option<u32>,

    /// Downsample columns in parallel.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,

    /// Log pipeline diagnostics to stderr.
    #[arg(short = 'v', long, default_value_t = false)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        })
        .init();

    let config = build_config(&cli)?;
    let buffer = load_samples(&cli)?;
    let grid = waveline::render_waveform(&buffer, &config).with_context(|| {
        format!("render waveform for '{}'", cli.input.display())
    })?;

    match &cli.output {
        Some(out) => {
            waveline::write_png(&grid, out)?;
            eprintln!("wrote {}", out.display());
        }
        None => {
            let png = waveline::encode_png(&grid)?;
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(&png)
                .and_then(|()| stdout.flush())
                .context("write png to stdout")?;
        }
    }
    Ok(())
}

fn build_config(cli: &Cli) -> anyhow::Result<RenderConfig> {
    let mut cfg = match &cli.config {
        Some(path) => RenderConfig::from_path(path)
            .with_context(|| format!("load render config '{}'", path.display()))?,
        None => RenderConfig::default(),
    };

    if let Some(w) = cli.width {
        cfg.width = w;
    }
    if let Some(h) = cli.height {
        cfg.height = HeightMode::Fixed(h);
    }
    if let Some(t) = cli.track_height {
        cfg.height = HeightMode::PerChannel(t);
    }
    if cli.combine {
        cfg.combine_channels = true;
    }
    if let Some(c) = cli.background {
        cfg.background = c;
    }
    if let Some(c) = cli.center {
        cfg.waveform_center = c;
    }
    if let Some(c) = cli.outer {
        cfg.waveform_outer = c;
    }
    if let Some(p) = cli.padding {
        cfg.padding_fraction = p;
    }
    if cli.parallel {
        cfg.threading.parallel = true;
    }
    if cli.threads.is_some() {
        cfg.threading.threads = cli.threads;
    }

    cfg.validate().context("invalid render options")?;
    Ok(cfg)
}

fn load_samples(cli: &Cli) -> anyhow::Result<SampleBuffer<'static>> {
    let Some(format) = cli.raw_format else {
        return waveline::decode_audio(&cli.input)
            .with_context(|| format!("decode audio '{}'", cli.input.display()));
    };

    let spec = RawPcmSpec {
        format,
        channels: cli.channels.context("--channels is required with --raw-format")?,
        sample_rate: cli.sample_rate,
    };
    if cli.input.as_os_str() == "-" {
        return waveline::read_raw_pcm_from(std::io::stdin().lock(), spec)
            .context("read raw pcm from stdin");
    }
    waveline::read_raw_pcm(&cli.input, spec)
        .with_context(|| format!("read raw pcm '{}'", cli.input.display()))
}
