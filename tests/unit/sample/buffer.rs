use super::*;

#[test]
fn frame_count_drops_trailing_partial_frame() {
    // 2 channels of i16 = 4 bytes per frame; 10 bytes -> 2 full frames.
    let bytes = vec![0u8; 10];
    let buf = SampleBuffer::new(bytes, SampleFormat::I16, 2).unwrap();
    assert_eq!(buf.frame_stride(), 4);
    assert_eq!(buf.frame_count(), 2);
    assert!(!buf.is_empty());
}

#[test]
fn zero_channels_is_rejected() {
    let err = SampleBuffer::new(&[0u8; 4][..], SampleFormat::U8, 0).unwrap_err();
    assert!(matches!(err, WavelineError::Validation(_)));
}

#[test]
fn short_buffer_is_empty() {
    let buf = SampleBuffer::new(&[0u8; 7][..], SampleFormat::F64, 1).unwrap();
    assert_eq!(buf.frame_count(), 0);
    assert!(buf.is_empty());
}

#[test]
fn duration_needs_sample_rate() {
    let buf = SampleBuffer::new(vec![0u8; 48_000 * 2], SampleFormat::I16, 1).unwrap();
    assert_eq!(buf.duration_secs(), None);
    let buf = buf.with_sample_rate(48_000);
    assert_eq!(buf.sample_rate(), Some(48_000));
    assert!((buf.duration_secs().unwrap() - 1.0).abs() < 1e-12);
}

#[test]
fn borrowed_buffer_can_be_made_owned() {
    let data = [1u8, 2, 3, 4];
    let owned = SampleBuffer::new(&data[..], SampleFormat::U8, 2)
        .unwrap()
        .into_owned();
    assert_eq!(owned.bytes(), &data);
    assert_eq!(owned.frame_count(), 2);
}
