use chart_nav::NavError;
use chart_nav::core::{ScaleMode, from_scale_domain, to_scale_domain};

#[test]
fn logarithmic_mode_rejects_invalid_bases() {
    assert!(matches!(
        ScaleMode::logarithmic(1.0),
        Err(NavError::Config(_))
    ));
    assert!(matches!(
        ScaleMode::logarithmic(0.0),
        Err(NavError::Config(_))
    ));
    assert!(matches!(
        ScaleMode::logarithmic(-2.0),
        Err(NavError::Config(_))
    ));
    assert!(matches!(
        ScaleMode::logarithmic(f64::NAN),
        Err(NavError::Config(_))
    ));
    assert!(matches!(
        ScaleMode::logarithmic(f64::INFINITY),
        Err(NavError::Config(_))
    ));
}

#[test]
fn logarithmic_mode_accepts_fractional_and_large_bases() {
    assert!(ScaleMode::logarithmic(0.5).expect("base 0.5").is_logarithmic());
    assert!(ScaleMode::logarithmic(2.0).expect("base 2").is_logarithmic());
    assert!(ScaleMode::log10().is_logarithmic());
    assert!(!ScaleMode::Linear.is_logarithmic());
}

#[test]
fn linear_scale_domain_is_identity() {
    let value = 123.456;
    assert_eq!(
        to_scale_domain(value, ScaleMode::Linear).expect("to scale"),
        value
    );
    assert_eq!(
        from_scale_domain(value, ScaleMode::Linear).expect("from scale"),
        value
    );
}

#[test]
fn log_scale_domain_round_trips_positive_values() {
    let mode = ScaleMode::log10();
    for value in [1e-6, 0.5, 1.0, 42.0, 1e9] {
        let scaled = to_scale_domain(value, mode).expect("to scale");
        let recovered = from_scale_domain(scaled, mode).expect("from scale");
        assert!((recovered - value).abs() <= 1e-9 * value.max(1.0));
    }
}

#[test]
fn log_scale_rejects_non_positive_values_with_domain_error() {
    let mode = ScaleMode::log10();
    assert!(matches!(
        to_scale_domain(0.0, mode),
        Err(NavError::Domain(_))
    ));
    assert!(matches!(
        to_scale_domain(-5.0, mode),
        Err(NavError::Domain(_))
    ));
}

#[test]
fn scale_domain_rejects_non_finite_inputs() {
    assert!(matches!(
        to_scale_domain(f64::NAN, ScaleMode::Linear),
        Err(NavError::InvalidData(_))
    ));
    assert!(matches!(
        from_scale_domain(f64::INFINITY, ScaleMode::log10()),
        Err(NavError::InvalidData(_))
    ));
}

#[test]
fn log_base_below_one_inverts_the_scale_direction() {
    let mode = ScaleMode::logarithmic(0.5).expect("base 0.5");
    let at_two = to_scale_domain(2.0, mode).expect("to scale");
    let at_four = to_scale_domain(4.0, mode).expect("to scale");
    // Larger data values map to smaller scale-domain values.
    assert!(at_four < at_two);
}
