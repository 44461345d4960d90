use chart_nav::NavError;
use chart_nav::core::{Orientation, ScrollDirection, ZoomDirection};
use chart_nav::interaction::{
    GestureBindings, GestureEvent, GestureRouter, ModifierMask, NavCommand,
};

fn wheel(delta: f64, modifiers: ModifierMask, orientation: Orientation) -> GestureEvent {
    GestureEvent::wheel(delta, modifiers, orientation, 200.0, 150.0)
}

#[test]
fn bare_wheel_scrolls_along_the_event_orientation() {
    let router = GestureRouter::default();

    let up = router.route(&wheel(1.0, ModifierMask::NONE, Orientation::Horizontal));
    assert_eq!(
        up,
        NavCommand::ScrollStep {
            orientation: Orientation::Horizontal,
            direction: ScrollDirection::Forward,
        }
    );

    let down = router.route(&wheel(-3.0, ModifierMask::NONE, Orientation::Vertical));
    assert_eq!(
        down,
        NavCommand::ScrollStep {
            orientation: Orientation::Vertical,
            direction: ScrollDirection::Backward,
        }
    );
}

#[test]
fn zoom_modifier_routes_to_anchored_zoom_at_the_cursor() {
    let router = GestureRouter::default();

    let command = router.route(&wheel(1.0, ModifierMask::CTRL, Orientation::Horizontal));
    assert_eq!(
        command,
        NavCommand::AnchoredZoom {
            orientation: Orientation::Horizontal,
            direction: ZoomDirection::In,
            position_px: 200.0,
        }
    );

    let vertical = router.route(&wheel(-1.0, ModifierMask::CTRL, Orientation::Vertical));
    assert_eq!(
        vertical,
        NavCommand::AnchoredZoom {
            orientation: Orientation::Vertical,
            direction: ZoomDirection::Out,
            position_px: 150.0,
        }
    );
}

#[test]
fn slide_combos_override_the_zoom_modifier() {
    let router = GestureRouter::default();

    let horizontal = router.route(&wheel(
        1.0,
        ModifierMask::CTRL.with_shift(),
        Orientation::Vertical,
    ));
    assert_eq!(
        horizontal,
        NavCommand::Slide {
            orientation: Orientation::Horizontal,
            direction: ScrollDirection::Forward,
        }
    );

    let vertical = router.route(&wheel(
        -1.0,
        ModifierMask::CTRL.with_alt(),
        Orientation::Horizontal,
    ));
    assert_eq!(
        vertical,
        NavCommand::Slide {
            orientation: Orientation::Vertical,
            direction: ScrollDirection::Backward,
        }
    );
}

#[test]
fn unbound_modifiers_are_ignored() {
    let router = GestureRouter::default();

    assert!(
        router
            .route(&wheel(1.0, ModifierMask::SHIFT, Orientation::Horizontal))
            .is_ignored()
    );
    assert!(
        router
            .route(&wheel(1.0, ModifierMask::ALT, Orientation::Horizontal))
            .is_ignored()
    );
}

#[test]
fn zero_and_non_finite_deltas_are_ignored() {
    let router = GestureRouter::default();

    assert!(
        router
            .route(&wheel(0.0, ModifierMask::CTRL, Orientation::Horizontal))
            .is_ignored()
    );
    assert!(
        router
            .route(&wheel(f64::NAN, ModifierMask::NONE, Orientation::Horizontal))
            .is_ignored()
    );
    assert!(
        router
            .route(&GestureEvent::drag(f64::INFINITY, 0.0, ModifierMask::NONE, 0.0, 0.0))
            .is_ignored()
    );
    assert!(
        router
            .route(&GestureEvent::drag(0.0, 0.0, ModifierMask::NONE, 0.0, 0.0))
            .is_ignored()
    );
}

#[test]
fn drags_route_to_pan_regardless_of_modifiers() {
    let router = GestureRouter::default();

    let command = router.route(&GestureEvent::drag(
        12.0,
        -7.5,
        ModifierMask::CTRL,
        400.0,
        300.0,
    ));
    assert_eq!(
        command,
        NavCommand::Pan {
            delta_x_px: 12.0,
            delta_y_px: -7.5,
        }
    );
}

#[test]
fn custom_bindings_rebind_the_wheel_table() {
    let bindings = GestureBindings::new(
        ModifierMask::SHIFT,
        ModifierMask::ALT,
        ModifierMask::ALT.with_shift(),
    )
    .expect("valid bindings");
    let router = GestureRouter::new(bindings);

    let zoom = router.route(&wheel(1.0, ModifierMask::SHIFT, Orientation::Horizontal));
    assert!(matches!(zoom, NavCommand::AnchoredZoom { .. }));

    // The two-modifier combo wins over its one-modifier subset.
    let slide = router.route(&wheel(
        1.0,
        ModifierMask::ALT.with_shift(),
        Orientation::Horizontal,
    ));
    assert_eq!(
        slide,
        NavCommand::Slide {
            orientation: Orientation::Vertical,
            direction: ScrollDirection::Forward,
        }
    );

    // The old default zoom modifier is no longer bound.
    assert!(
        router
            .route(&wheel(1.0, ModifierMask::CTRL, Orientation::Horizontal))
            .is_ignored()
    );
}

#[test]
fn equally_specific_slide_masks_resolve_vertical_first() {
    let bindings = GestureBindings::new(
        ModifierMask::CTRL,
        ModifierMask::CTRL.with_shift(),
        ModifierMask::SHIFT.with_alt(),
    )
    .expect("valid bindings");
    let router = GestureRouter::new(bindings);

    // Ctrl+Shift+Alt satisfies both two-modifier slide masks; the vertical
    // slide wins the tie, as documented on the bindings.
    let command = router.route(&wheel(
        1.0,
        ModifierMask::CTRL.with_shift().with_alt(),
        Orientation::Horizontal,
    ));
    assert_eq!(
        command,
        NavCommand::Slide {
            orientation: Orientation::Vertical,
            direction: ScrollDirection::Forward,
        }
    );
}

#[test]
fn bindings_reject_empty_masks_and_collisions() {
    assert!(matches!(
        GestureBindings::new(
            ModifierMask::NONE,
            ModifierMask::SHIFT,
            ModifierMask::ALT
        ),
        Err(NavError::Config(_))
    ));
    assert!(matches!(
        GestureBindings::new(ModifierMask::CTRL, ModifierMask::CTRL, ModifierMask::ALT),
        Err(NavError::Config(_))
    ));
    assert!(matches!(
        GestureBindings::default().with_zoom_mask(ModifierMask::CTRL.with_shift()),
        Err(NavError::Config(_))
    ));
}

#[test]
fn modifier_mask_subset_test_matches_partial_masks() {
    let all = ModifierMask::CTRL.with_shift().with_alt();
    assert!(all.contains(ModifierMask::CTRL));
    assert!(all.contains(ModifierMask::CTRL.with_shift()));
    assert!(!ModifierMask::CTRL.contains(ModifierMask::CTRL.with_shift()));
    assert!(ModifierMask::NONE.is_empty());
    assert_eq!(all.modifier_count(), 3);
}
