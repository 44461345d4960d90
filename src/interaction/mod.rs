pub mod router;

use serde::{Deserialize, Serialize};

use crate::core::{Orientation, ScrollDirection, ZoomDirection};

pub use router::{GestureBindings, GestureRouter};

/// Keyboard modifier state captured with an input event.
///
/// Plain named flags instead of a raw bitmask keep host translation obvious;
/// `contains` gives the subset test used during gesture resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ModifierMask {
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
}

impl ModifierMask {
    pub const NONE: Self = Self {
        ctrl: false,
        shift: false,
        alt: false,
    };

    pub const CTRL: Self = Self {
        ctrl: true,
        shift: false,
        alt: false,
    };

    pub const SHIFT: Self = Self {
        ctrl: false,
        shift: true,
        alt: false,
    };

    pub const ALT: Self = Self {
        ctrl: false,
        shift: false,
        alt: true,
    };

    #[must_use]
    pub const fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    #[must_use]
    pub const fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }

    #[must_use]
    pub const fn with_alt(mut self) -> Self {
        self.alt = true;
        self
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        !self.ctrl && !self.shift && !self.alt
    }

    /// True when every modifier set in `other` is also set here.
    #[must_use]
    pub fn contains(self, other: Self) -> bool {
        (!other.ctrl || self.ctrl) && (!other.shift || self.shift) && (!other.alt || self.alt)
    }

    #[must_use]
    pub fn modifier_count(self) -> u32 {
        u32::from(self.ctrl) + u32::from(self.shift) + u32::from(self.alt)
    }
}

/// Raw input payload of a gesture.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GestureKind {
    /// Wheel notch; positive `delta` is wheel-up (zoom in, scroll forward).
    Wheel { delta: f64 },
    /// Pointer drag with pressed button, in pixel deltas since the last event.
    Drag { delta_x_px: f64, delta_y_px: f64 },
}

/// Read-only input snapshot handed to dispatch, one per host callback.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GestureEvent {
    pub kind: GestureKind,
    pub modifiers: ModifierMask,
    /// Axis family a wheel gesture applies to. Drags pan both orientations
    /// and ignore this field.
    pub orientation: Orientation,
    pub position_x_px: f64,
    pub position_y_px: f64,
}

impl GestureEvent {
    #[must_use]
    pub fn wheel(
        delta: f64,
        modifiers: ModifierMask,
        orientation: Orientation,
        position_x_px: f64,
        position_y_px: f64,
    ) -> Self {
        Self {
            kind: GestureKind::Wheel { delta },
            modifiers,
            orientation,
            position_x_px,
            position_y_px,
        }
    }

    #[must_use]
    pub fn drag(
        delta_x_px: f64,
        delta_y_px: f64,
        modifiers: ModifierMask,
        position_x_px: f64,
        position_y_px: f64,
    ) -> Self {
        Self {
            kind: GestureKind::Drag {
                delta_x_px,
                delta_y_px,
            },
            modifiers,
            orientation: Orientation::Horizontal,
            position_x_px,
            position_y_px,
        }
    }

    /// Cursor position along the given axis direction.
    #[must_use]
    pub fn position_along(self, orientation: Orientation) -> f64 {
        match orientation {
            Orientation::Horizontal => self.position_x_px,
            Orientation::Vertical => self.position_y_px,
        }
    }
}

/// Navigation operation resolved from a gesture.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum NavCommand {
    /// One scroll step on all axes of the orientation.
    ScrollStep {
        orientation: Orientation,
        direction: ScrollDirection,
    },
    /// Zoom on all axes of the orientation, anchored at the cursor.
    AnchoredZoom {
        orientation: Orientation,
        direction: ZoomDirection,
        position_px: f64,
    },
    /// One slide step on all axes of the orientation.
    Slide {
        orientation: Orientation,
        direction: ScrollDirection,
    },
    /// Continuous pan of both orientations by drag deltas.
    Pan { delta_x_px: f64, delta_y_px: f64 },
    /// The gesture matched no binding; nothing to do.
    Ignored,
}

impl NavCommand {
    #[must_use]
    pub fn is_ignored(self) -> bool {
        matches!(self, Self::Ignored)
    }
}
