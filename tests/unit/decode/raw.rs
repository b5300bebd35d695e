use super::*;

fn spec(format: SampleFormat, channels: u16) -> RawPcmSpec {
    RawPcmSpec {
        format,
        channels,
        sample_rate: Some(8_000),
    }
}

#[test]
fn reads_interleaved_frames_from_reader() {
    let mut bytes = Vec::new();
    for v in [1i16, -1, 2, -2, 3] {
        bytes.extend_from_slice(&v.to_le_bytes());
    }
    let buf = read_raw_pcm_from(bytes.as_slice(), spec(SampleFormat::I16, 2)).unwrap();
    assert_eq!(buf.channels(), 2);
    // The odd trailing sample is not a complete frame.
    assert_eq!(buf.frame_count(), 2);
    assert_eq!(buf.sample_rate(), Some(8_000));
}

#[test]
fn reads_file_from_disk() {
    let dir = std::env::temp_dir().join(format!("waveline_raw_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("tone.f32");
    let samples: Vec<u8> = [0.5f32, -0.5, 0.25]
        .iter()
        .flat_map(|v| v.to_le_bytes())
        .collect();
    std::fs::write(&path, &samples).unwrap();

    let buf = read_raw_pcm(&path, spec(SampleFormat::F32, 1)).unwrap();
    assert_eq!(buf.frame_count(), 3);
    assert_eq!(buf.bytes(), samples.as_slice());

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn missing_file_is_decode_error() {
    let err = read_raw_pcm(
        Path::new("/definitely/not/here.pcm"),
        spec(SampleFormat::U8, 1),
    )
    .unwrap_err();
    assert!(matches!(err, WavelineError::Decode(_)));
}

#[test]
fn zero_channels_is_rejected() {
    let err = read_raw_pcm_from(&[0u8; 4][..], spec(SampleFormat::U8, 0)).unwrap_err();
    assert!(matches!(err, WavelineError::Validation(_)));
}
