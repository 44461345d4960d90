use approx::assert_relative_eq;
use chart_nav::NavError;
use chart_nav::core::{Orientation, PixelSpan, Range};
use chart_nav::extensions::AxisTarget;
use chart_nav::interaction::{GestureEvent, ModifierMask};
use chart_nav::{ChartNavigator, NavigatorConfig};

fn navigator() -> ChartNavigator {
    let config = NavigatorConfig::new(
        Range::new(0.0, 100.0).expect("valid x range"),
        Range::new(-1.0, 1.0).expect("valid y range"),
        PixelSpan::new(500),
        PixelSpan::new(400),
    );
    ChartNavigator::new(config).expect("valid navigator")
}

#[test]
fn secondary_axes_register_with_unique_names_per_orientation() {
    let mut nav = navigator();
    let range = Range::new(0.0, 10.0).expect("valid range");

    nav.add_secondary_axis(Orientation::Vertical, "volume", range)
        .expect("register volume");
    nav.add_secondary_axis(Orientation::Vertical, "percent", range)
        .expect("register percent");
    // The same name is free on the other orientation.
    nav.add_secondary_axis(Orientation::Horizontal, "volume", range)
        .expect("register horizontal volume");

    assert_eq!(nav.secondary_axis_count(Orientation::Vertical), 2);
    assert_eq!(nav.secondary_axis_count(Orientation::Horizontal), 1);
    assert_eq!(
        nav.secondary_axis_names(Orientation::Vertical),
        vec!["volume", "percent"]
    );
    assert!(nav.has_secondary_axis(Orientation::Vertical, "volume"));

    assert!(matches!(
        nav.add_secondary_axis(Orientation::Vertical, "volume", range),
        Err(NavError::InvalidData(_))
    ));
    assert!(matches!(
        nav.add_secondary_axis(Orientation::Vertical, "", range),
        Err(NavError::InvalidData(_))
    ));
}

#[test]
fn secondary_axes_inherit_the_primary_span_and_tuning() {
    let mut nav = navigator();
    nav.add_secondary_axis(
        Orientation::Vertical,
        "volume",
        Range::new(0.0, 1_000.0).expect("valid range"),
    )
    .expect("register");

    let axis = nav
        .secondary_axis(Orientation::Vertical, "volume")
        .expect("registered axis");
    assert_eq!(axis.pixel_span(), PixelSpan::new(400));
    assert_eq!(axis.tuning(), nav.y_axis().tuning());
}

#[test]
fn gestures_fan_out_to_every_axis_of_the_orientation() {
    let mut nav = navigator();
    nav.add_secondary_axis(
        Orientation::Horizontal,
        "overlay",
        Range::new(0.0, 10.0).expect("valid range"),
    )
    .expect("register");

    let scroll = GestureEvent::wheel(
        1.0,
        ModifierMask::NONE,
        Orientation::Horizontal,
        250.0,
        200.0,
    );
    let outcome = nav.dispatch(&scroll).expect("dispatch");

    assert_eq!(outcome.results().len(), 2);
    assert_eq!(outcome.results()[0].0, AxisTarget::x());
    assert_eq!(
        outcome.results()[1].0,
        AxisTarget::secondary(Orientation::Horizontal, "overlay")
    );
    assert_relative_eq!(nav.x_range().lower(), 10.0, epsilon = 1e-9);
    let overlay = nav
        .secondary_axis(Orientation::Horizontal, "overlay")
        .expect("registered axis");
    assert_relative_eq!(overlay.range().lower(), 1.0, epsilon = 1e-9);
}

#[test]
fn anchored_zoom_resolves_the_cursor_through_each_axis_mapping() {
    let mut nav = navigator();
    nav.add_secondary_axis(
        Orientation::Horizontal,
        "overlay",
        Range::new(0.0, 10.0).expect("valid range"),
    )
    .expect("register");

    // Pixel 100 of 500 is data 20 on the primary and 2 on the overlay.
    let zoom = GestureEvent::wheel(
        1.0,
        ModifierMask::CTRL,
        Orientation::Horizontal,
        100.0,
        200.0,
    );
    nav.dispatch(&zoom).expect("dispatch");

    assert_relative_eq!(nav.x_range().relative_position(20.0), 0.2, epsilon = 1e-9);
    let overlay = nav
        .secondary_axis(Orientation::Horizontal, "overlay")
        .expect("registered axis");
    assert_relative_eq!(overlay.range().relative_position(2.0), 0.2, epsilon = 1e-9);
}

#[test]
fn removal_keeps_the_registration_order_of_the_rest() {
    let mut nav = navigator();
    let range = Range::new(0.0, 10.0).expect("valid range");
    for name in ["a", "b", "c"] {
        nav.add_secondary_axis(Orientation::Vertical, name, range)
            .expect("register");
    }

    assert!(nav.remove_secondary_axis(Orientation::Vertical, "b"));
    assert!(!nav.remove_secondary_axis(Orientation::Vertical, "b"));
    assert_eq!(
        nav.secondary_axis_names(Orientation::Vertical),
        vec!["a", "c"]
    );
}

#[test]
fn resize_propagates_to_secondary_axes() {
    let mut nav = navigator();
    nav.add_secondary_axis(
        Orientation::Horizontal,
        "overlay",
        Range::new(0.0, 10.0).expect("valid range"),
    )
    .expect("register");

    nav.resize(PixelSpan::new(1024), PixelSpan::new(768))
        .expect("resize");
    let overlay = nav
        .secondary_axis(Orientation::Horizontal, "overlay")
        .expect("registered axis");
    assert_eq!(overlay.pixel_span(), PixelSpan::new(1024));
}
