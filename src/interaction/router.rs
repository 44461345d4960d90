use serde::{Deserialize, Serialize};

use crate::core::{Orientation, ScrollDirection, ZoomDirection};
use crate::error::{NavError, NavResult};

use super::{GestureEvent, GestureKind, ModifierMask, NavCommand};

/// Modifier masks bound to the wheel gesture family.
///
/// The bare wheel (no modifiers) is always a scroll step and is not
/// configurable; the three masks here select zoom and the two slide
/// directions. Masks are validated once at assignment: none may be empty
/// (that would shadow the bare scroll) and no two may be equal.
///
/// Resolution prefers the mask with the most modifiers. When an event
/// satisfies two distinct masks of equal size, the vertical slide wins over
/// the horizontal slide, and either slide wins over zoom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GestureBindings {
    zoom_mask: ModifierMask,
    horizontal_slide_mask: ModifierMask,
    vertical_slide_mask: ModifierMask,
}

impl Default for GestureBindings {
    fn default() -> Self {
        Self {
            zoom_mask: ModifierMask::CTRL,
            horizontal_slide_mask: ModifierMask::CTRL.with_shift(),
            vertical_slide_mask: ModifierMask::CTRL.with_alt(),
        }
    }
}

impl GestureBindings {
    pub fn new(
        zoom_mask: ModifierMask,
        horizontal_slide_mask: ModifierMask,
        vertical_slide_mask: ModifierMask,
    ) -> NavResult<Self> {
        Self {
            zoom_mask,
            horizontal_slide_mask,
            vertical_slide_mask,
        }
        .validate()
    }

    #[must_use]
    pub fn zoom_mask(self) -> ModifierMask {
        self.zoom_mask
    }

    #[must_use]
    pub fn horizontal_slide_mask(self) -> ModifierMask {
        self.horizontal_slide_mask
    }

    #[must_use]
    pub fn vertical_slide_mask(self) -> ModifierMask {
        self.vertical_slide_mask
    }

    pub fn with_zoom_mask(mut self, mask: ModifierMask) -> NavResult<Self> {
        self.zoom_mask = mask;
        self.validate()
    }

    pub fn with_horizontal_slide_mask(mut self, mask: ModifierMask) -> NavResult<Self> {
        self.horizontal_slide_mask = mask;
        self.validate()
    }

    pub fn with_vertical_slide_mask(mut self, mask: ModifierMask) -> NavResult<Self> {
        self.vertical_slide_mask = mask;
        self.validate()
    }

    fn validate(self) -> NavResult<Self> {
        let masks = [
            ("zoom", self.zoom_mask),
            ("horizontal slide", self.horizontal_slide_mask),
            ("vertical slide", self.vertical_slide_mask),
        ];

        for (name, mask) in masks {
            if mask.is_empty() {
                return Err(NavError::Config(format!(
                    "{name} binding must include at least one modifier"
                )));
            }
        }
        for (index, (name, mask)) in masks.iter().enumerate() {
            for (other_name, other_mask) in masks.iter().skip(index + 1) {
                if mask == other_mask {
                    return Err(NavError::Config(format!(
                        "{name} and {other_name} bindings collide on the same modifier mask"
                    )));
                }
            }
        }
        Ok(self)
    }
}

/// Stateless gesture dispatch table.
///
/// Every event is resolved independently against the bindings; the router
/// holds no per-gesture state. Matching is a subset test on the modifier
/// mask, evaluated most specific binding first, so `Ctrl+Shift` reaches the
/// slide binding even though it also contains the default zoom modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GestureRouter {
    bindings: GestureBindings,
}

#[derive(Clone, Copy)]
enum WheelBinding {
    Zoom,
    HorizontalSlide,
    VerticalSlide,
}

impl GestureRouter {
    #[must_use]
    pub fn new(bindings: GestureBindings) -> Self {
        Self { bindings }
    }

    #[must_use]
    pub fn bindings(self) -> GestureBindings {
        self.bindings
    }

    /// Resolves a gesture to a navigation command.
    ///
    /// Never fails: unmatched modifier combinations, zero deltas and
    /// non-finite deltas all resolve to [`NavCommand::Ignored`].
    #[must_use]
    pub fn route(self, event: &GestureEvent) -> NavCommand {
        match event.kind {
            GestureKind::Drag {
                delta_x_px,
                delta_y_px,
            } => {
                if !delta_x_px.is_finite() || !delta_y_px.is_finite() {
                    return NavCommand::Ignored;
                }
                if delta_x_px == 0.0 && delta_y_px == 0.0 {
                    return NavCommand::Ignored;
                }
                NavCommand::Pan {
                    delta_x_px,
                    delta_y_px,
                }
            }
            GestureKind::Wheel { delta } => self.route_wheel(event, delta),
        }
    }

    fn route_wheel(self, event: &GestureEvent, delta: f64) -> NavCommand {
        if !delta.is_finite() || delta == 0.0 {
            return NavCommand::Ignored;
        }

        let scroll_direction = if delta > 0.0 {
            ScrollDirection::Forward
        } else {
            ScrollDirection::Backward
        };

        if event.modifiers.is_empty() {
            return NavCommand::ScrollStep {
                orientation: event.orientation,
                direction: scroll_direction,
            };
        }

        let mut candidates = [
            (self.bindings.vertical_slide_mask, WheelBinding::VerticalSlide),
            (
                self.bindings.horizontal_slide_mask,
                WheelBinding::HorizontalSlide,
            ),
            (self.bindings.zoom_mask, WheelBinding::Zoom),
        ];
        candidates.sort_by(|(left, _), (right, _)| {
            right.modifier_count().cmp(&left.modifier_count())
        });

        for (mask, binding) in candidates {
            if !event.modifiers.contains(mask) {
                continue;
            }
            return match binding {
                WheelBinding::Zoom => NavCommand::AnchoredZoom {
                    orientation: event.orientation,
                    direction: if delta > 0.0 {
                        ZoomDirection::In
                    } else {
                        ZoomDirection::Out
                    },
                    position_px: event.position_along(event.orientation),
                },
                WheelBinding::HorizontalSlide => NavCommand::Slide {
                    orientation: Orientation::Horizontal,
                    direction: scroll_direction,
                },
                WheelBinding::VerticalSlide => NavCommand::Slide {
                    orientation: Orientation::Vertical,
                    direction: scroll_direction,
                },
            };
        }

        NavCommand::Ignored
    }
}
