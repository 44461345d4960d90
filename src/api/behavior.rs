use serde::{Deserialize, Serialize};

use crate::core::Orientation;

fn default_true() -> bool {
    true
}

/// Host-configurable gesture gates for the navigation facade.
///
/// Every gate defaults to enabled. Hosts that reserve a gesture family for
/// their own widgets (an embedding toolkit that owns drag selection, for
/// example) switch the matching gate off and the facade reports those events
/// as ignored instead of mutating axis ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationBehavior {
    /// Master enable for wheel-driven scroll and slide steps.
    pub handle_scroll: bool,
    /// Master enable for wheel-driven anchored zoom.
    pub handle_zoom: bool,
    /// Master enable for drag panning.
    pub handle_drag_pan: bool,
    /// Applies horizontal axis limits to zoom results.
    ///
    /// When disabled, zoom on the horizontal family runs unclamped while
    /// scroll, slide, and pan stay constrained.
    #[serde(default = "default_true")]
    pub restrict_zoom_x: bool,
    /// Applies vertical axis limits to zoom results.
    #[serde(default = "default_true")]
    pub restrict_zoom_y: bool,
}

impl Default for NavigationBehavior {
    fn default() -> Self {
        Self {
            handle_scroll: true,
            handle_zoom: true,
            handle_drag_pan: true,
            restrict_zoom_x: true,
            restrict_zoom_y: true,
        }
    }
}

impl NavigationBehavior {
    #[must_use]
    pub(crate) fn allows_wheel_scroll(self) -> bool {
        self.handle_scroll
    }

    #[must_use]
    pub(crate) fn allows_wheel_zoom(self) -> bool {
        self.handle_zoom
    }

    #[must_use]
    pub(crate) fn allows_drag_pan(self) -> bool {
        self.handle_drag_pan
    }

    #[must_use]
    pub(crate) fn restricts_zoom(self, orientation: Orientation) -> bool {
        match orientation {
            Orientation::Horizontal => self.restrict_zoom_x,
            Orientation::Vertical => self.restrict_zoom_y,
        }
    }
}
