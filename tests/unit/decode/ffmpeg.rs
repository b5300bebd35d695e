use super::*;

const STEREO_FLTP: &str = r#"{
    "streams": [
        { "index": 0, "codec_type": "video", "codec_name": "h264" },
        {
            "index": 1,
            "codec_type": "audio",
            "codec_name": "aac",
            "sample_fmt": "fltp",
            "sample_rate": "44100",
            "channels": 2,
            "duration": "1.500000"
        }
    ]
}"#;

#[test]
fn probe_json_selects_audio_stream() {
    let info = parse_probe_json(Path::new("in.mp4"), STEREO_FLTP.as_bytes()).unwrap();
    assert_eq!(info.format, SampleFormat::F32);
    assert_eq!(info.channels, 2);
    assert_eq!(info.sample_rate, Some(44_100));
    assert_eq!(info.duration_secs, Some(1.5));
    assert_eq!(info.source_path, PathBuf::from("in.mp4"));
}

#[test]
fn probe_json_without_audio_is_insufficient_data() {
    let json = r#"{ "streams": [ { "codec_type": "video" } ] }"#;
    assert!(matches!(
        parse_probe_json(Path::new("v.mp4"), json.as_bytes()),
        Err(WavelineError::InsufficientData(_))
    ));
    assert!(matches!(
        parse_probe_json(Path::new("v.mp4"), b"{}"),
        Err(WavelineError::InsufficientData(_))
    ));
}

#[test]
fn probe_json_rejects_unsupported_sample_format() {
    let json =
        r#"{ "streams": [ { "codec_type": "audio", "sample_fmt": "s64", "channels": 1 } ] }"#;
    assert!(matches!(
        parse_probe_json(Path::new("a.wav"), json.as_bytes()),
        Err(WavelineError::UnsupportedFormat(_))
    ));
}

#[test]
fn probe_json_requires_channels() {
    let json =
        r#"{ "streams": [ { "codec_type": "audio", "sample_fmt": "s16", "channels": 0 } ] }"#;
    assert!(matches!(
        parse_probe_json(Path::new("a.wav"), json.as_bytes()),
        Err(WavelineError::Decode(_))
    ));
    assert!(matches!(
        parse_probe_json(Path::new("a.wav"), b"not json"),
        Err(WavelineError::Decode(_))
    ));
}

#[test]
fn raw_pcm_args_use_matching_muxer_and_codec() {
    let args = raw_pcm_args(SampleFormat::U8);
    let f = args.iter().position(|a| a == "-f").unwrap();
    assert_eq!(args[f + 1], "u8");
    let c = args.iter().position(|a| a == "-acodec").unwrap();
    assert_eq!(args[c + 1], "pcm_u8");

    let args = raw_pcm_args(SampleFormat::I16);
    assert!(args.iter().any(|a| a == "pcm_s16le"));
    assert_eq!(args.last().map(String::as_str), Some("pipe:1"));
}
