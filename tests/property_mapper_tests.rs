use chart_nav::core::{CoordinateMapper, PixelSpan, Range, ScaleMode};
use proptest::prelude::*;

proptest! {
    #[test]
    fn linear_round_trip_property(
        lower in -1_000_000.0f64..1_000_000.0,
        width in 0.001f64..1_000_000.0,
        value_factor in 0.0f64..1.0,
        reversed in any::<bool>()
    ) {
        let upper = lower + width;
        let value = lower + value_factor * width;

        let mapper = CoordinateMapper::new(
            Range::new(lower, upper).expect("valid range"),
            PixelSpan::new(2048),
            ScaleMode::Linear,
            reversed,
        )
        .expect("valid mapper");

        let px = mapper.to_pixel(value).expect("to pixel");
        let recovered = mapper.to_data(px).expect("from pixel");

        prop_assert!((recovered - value).abs() <= 1e-7 * (1.0 + value.abs()));
    }

    #[test]
    fn log_round_trip_property(
        lower_exp in -3.0f64..3.0,
        decades in 0.01f64..9.0,
        value_factor in 0.0f64..1.0,
        reversed in any::<bool>()
    ) {
        let lower = 10f64.powf(lower_exp);
        let upper = 10f64.powf(lower_exp + decades);
        let value = 10f64.powf(lower_exp + value_factor * decades);

        let mapper = CoordinateMapper::new(
            Range::new(lower, upper).expect("valid range"),
            PixelSpan::new(2048),
            ScaleMode::log10(),
            reversed,
        )
        .expect("valid mapper");

        let px = mapper.to_pixel(value).expect("to pixel");
        let recovered = mapper.to_data(px).expect("from pixel");

        prop_assert!((recovered - value).abs() <= 1e-7 * value);
    }

    #[test]
    fn pixels_inside_the_span_map_inside_the_range(
        lower in -1_000.0f64..1_000.0,
        width in 0.001f64..1_000.0,
        pixel_factor in 0.0f64..1.0
    ) {
        let range = Range::new(lower, lower + width).expect("valid range");
        let span = PixelSpan::new(800);
        let mapper = CoordinateMapper::new(range, span, ScaleMode::Linear, false)
            .expect("valid mapper");

        let pixel = pixel_factor * span.as_f64();
        let value = mapper.to_data(pixel).expect("to data");

        let slack = 1e-9 * (1.0 + value.abs());
        prop_assert!(value >= range.lower() - slack);
        prop_assert!(value <= range.upper() + slack);
    }

    #[test]
    fn reversed_mapping_mirrors_the_forward_mapping(
        lower in -1_000.0f64..1_000.0,
        width in 0.001f64..1_000.0,
        value_factor in 0.0f64..1.0
    ) {
        let range = Range::new(lower, lower + width).expect("valid range");
        let span = PixelSpan::new(1000);
        let value = lower + value_factor * width;

        let forward = CoordinateMapper::new(range, span, ScaleMode::Linear, false)
            .expect("valid mapper");
        let mirrored = CoordinateMapper::new(range, span, ScaleMode::Linear, true)
            .expect("valid mapper");

        let px = forward.to_pixel(value).expect("forward");
        let mirrored_px = mirrored.to_pixel(value).expect("mirrored");
        prop_assert!((px + mirrored_px - span.as_f64()).abs() <= 1e-6);
    }
}
