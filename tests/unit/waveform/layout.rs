use super::*;

#[test]
fn two_channels_without_padding_split_evenly() {
    let bands = plan_bands(128, 2, 0.0).unwrap();
    assert_eq!(
        bands,
        vec![
            ChannelBand {
                channel_index: 0,
                start_row: 0,
                end_row: 63,
                track_start: 0,
                band_height: 64,
            },
            ChannelBand {
                channel_index: 1,
                start_row: 64,
                end_row: 127,
                track_start: 64,
                band_height: 64,
            },
        ]
    );
}

#[test]
fn fractional_rows_go_to_later_channels() {
    let bands = plan_bands(10, 3, 0.0).unwrap();
    let heights = bands.iter().map(|b| b.band_height).collect::<Vec<_>>();
    assert_eq!(heights, vec![3, 3, 4]);
    assert_eq!(bands[2].end_row, 9);
}

#[test]
fn padding_gaps_precede_each_band_and_tail_absorbs_rest() {
    let bands = plan_bands(192, 3, 0.05).unwrap();
    let heights = bands.iter().map(|b| b.band_height).collect::<Vec<_>>();
    assert_eq!(heights, vec![60, 61, 61]);

    assert_eq!((bands[0].start_row, bands[0].track_start), (0, 2));
    assert_eq!(bands[0].end_row, 61);
    assert_eq!((bands[1].start_row, bands[1].track_start), (62, 64));
    assert_eq!(bands[1].end_row, 124);
    assert_eq!((bands[2].start_row, bands[2].track_start), (125, 127));
    assert_eq!(bands[2].track_end(), 187);
    assert_eq!(bands[2].end_row, 191);
    assert_eq!(bands[2].padding_rows(), 6);
}

#[test]
fn bands_partition_image_for_many_geometries() {
    for channels in 1u16..=8 {
        for height in u32::from(channels)..=200 {
            for padding in [0.0, 0.05, 0.1, 0.33, 0.9] {
                let bands = plan_bands(height, channels, padding).unwrap();
                assert_eq!(bands.len(), usize::from(channels));

                let mut expected_start = 0;
                let mut track_rows = 0;
                let mut padding_rows = 0;
                for (i, band) in bands.iter().enumerate() {
                    assert_eq!(band.channel_index as usize, i);
                    assert_eq!(band.start_row, expected_start, "h={height} n={channels}");
                    assert!(band.end_row >= band.start_row);
                    assert!(band.track_start >= band.start_row);
                    if band.band_height > 0 {
                        assert!(band.track_end() <= band.end_row);
                    }
                    track_rows += band.band_height;
                    padding_rows += band.padding_rows();
                    expected_start = band.end_row + 1;
                }
                assert_eq!(bands.last().unwrap().end_row, height - 1);
                assert_eq!(track_rows + padding_rows, height);

                let min = bands.iter().map(|b| b.band_height).min().unwrap();
                let max = bands.iter().map(|b| b.band_height).max().unwrap();
                assert!(max - min <= 1, "h={height} n={channels} p={padding}");
            }
        }
    }
}

#[test]
fn rejects_degenerate_geometry() {
    assert!(matches!(
        plan_bands(0, 1, 0.0),
        Err(WavelineError::Validation(_))
    ));
    assert!(matches!(
        plan_bands(64, 0, 0.0),
        Err(WavelineError::Validation(_))
    ));
    assert!(matches!(
        plan_bands(3, 4, 0.0),
        Err(WavelineError::Validation(_))
    ));
    assert!(plan_bands(64, 1, 1.0).is_err());
    assert!(plan_bands(64, 1, -0.1).is_err());
    assert!(plan_bands(64, 1, f64::NAN).is_err());
}
