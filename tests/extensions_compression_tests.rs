use chart_nav::NavError;
use chart_nav::core::{PixelSpan, SeriesPoint};
use chart_nav::extensions::{CompressionLevel, compress_series};

fn wave(count: usize) -> Vec<SeriesPoint> {
    (0..count)
        .map(|i| {
            let x = i as f64;
            SeriesPoint::new(x, (x * 0.01).sin() * 50.0)
        })
        .collect()
}

#[test]
fn level_none_passes_points_through_sorted() {
    let points = vec![
        SeriesPoint::new(3.0, 1.0),
        SeriesPoint::new(1.0, 2.0),
        SeriesPoint::new(2.0, 3.0),
    ];

    let output = compress_series(&points, PixelSpan::new(100), CompressionLevel::None)
        .expect("compress");
    assert_eq!(output.len(), 3);
    assert!(output.windows(2).all(|pair| pair[0].x <= pair[1].x));
    assert_eq!(output[0].x, 1.0);
    assert_eq!(output[2].x, 3.0);
}

#[test]
fn small_series_pass_through_every_level() {
    let points = wave(50);
    for level in [
        CompressionLevel::Low,
        CompressionLevel::Medium,
        CompressionLevel::High,
        CompressionLevel::Extreme,
    ] {
        let output = compress_series(&points, PixelSpan::new(500), level).expect("compress");
        assert_eq!(output.len(), 50);
    }
}

#[test]
fn levels_map_to_their_pixel_budgets() {
    let points = wave(10_000);
    let span = PixelSpan::new(100);

    let low = compress_series(&points, span, CompressionLevel::Low).expect("low");
    assert_eq!(low.len(), 400);
    let medium = compress_series(&points, span, CompressionLevel::Medium).expect("medium");
    assert_eq!(medium.len(), 200);
    let high = compress_series(&points, span, CompressionLevel::High).expect("high");
    assert_eq!(high.len(), 100);
    let extreme = compress_series(&points, span, CompressionLevel::Extreme).expect("extreme");
    assert_eq!(extreme.len(), 50);
}

#[test]
fn first_and_last_points_are_always_retained() {
    let points = wave(5_000);
    let output = compress_series(&points, PixelSpan::new(100), CompressionLevel::High)
        .expect("compress");

    assert_eq!(output.first().map(|p| p.x), Some(0.0));
    assert_eq!(output.last().map(|p| p.x), Some(4_999.0));
    assert!(output.windows(2).all(|pair| pair[0].x <= pair[1].x));
}

#[test]
fn spikes_survive_compression() {
    let mut points = wave(10_000);
    points[4_321] = SeriesPoint::new(4_321.0, 10_000.0);

    let output = compress_series(&points, PixelSpan::new(200), CompressionLevel::High)
        .expect("compress");
    assert!(output.iter().any(|p| p.y == 10_000.0));
}

#[test]
fn auto_level_scales_with_series_density() {
    let span = PixelSpan::new(100);

    // Sparse input is left alone.
    let sparse = compress_series(&wave(150), span, CompressionLevel::Auto).expect("sparse");
    assert_eq!(sparse.len(), 150);

    // Dense input is thinned hard.
    let dense = compress_series(&wave(50_000), span, CompressionLevel::Auto).expect("dense");
    assert_eq!(dense.len(), 50);
}

#[test]
fn invalid_inputs_are_rejected() {
    let points = vec![SeriesPoint::new(0.0, f64::NAN)];
    assert!(matches!(
        compress_series(&points, PixelSpan::new(100), CompressionLevel::Medium),
        Err(NavError::InvalidData(_))
    ));
    assert!(matches!(
        compress_series(&wave(10), PixelSpan::new(0), CompressionLevel::Medium),
        Err(NavError::InvalidPixelSpan { length: 0 })
    ));
}

// Bucket averaging may run on rayon behind the parallel-compression
// feature; selection must stay deterministic either way.
#[test]
fn compression_output_is_deterministic() {
    let points = wave(20_000);
    let first = compress_series(&points, PixelSpan::new(300), CompressionLevel::High)
        .expect("first run");
    let second = compress_series(&points, PixelSpan::new(300), CompressionLevel::High)
        .expect("second run");
    assert_eq!(first, second);
}

#[test]
fn empty_series_compress_to_empty() {
    let output = compress_series(&[], PixelSpan::new(100), CompressionLevel::High)
        .expect("compress");
    assert!(output.is_empty());
}
