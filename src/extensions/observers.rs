use serde::{Deserialize, Serialize};

use crate::core::{BoundarySignal, Orientation, Range, ScaleMode};

/// Stable address of one axis inside a navigator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AxisTarget {
    Primary(Orientation),
    Secondary {
        orientation: Orientation,
        name: String,
    },
}

impl AxisTarget {
    /// The primary horizontal axis.
    #[must_use]
    pub const fn x() -> Self {
        Self::Primary(Orientation::Horizontal)
    }

    /// The primary vertical axis.
    #[must_use]
    pub const fn y() -> Self {
        Self::Primary(Orientation::Vertical)
    }

    #[must_use]
    pub fn secondary(orientation: Orientation, name: impl Into<String>) -> Self {
        Self::Secondary {
            orientation,
            name: name.into(),
        }
    }

    #[must_use]
    pub fn orientation(&self) -> Orientation {
        match self {
            Self::Primary(orientation) => *orientation,
            Self::Secondary { orientation, .. } => *orientation,
        }
    }
}

/// Navigation event stream exposed to observers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NavEvent {
    /// The visible range of an axis changed, by gesture or assignment.
    RangeChanged {
        axis: AxisTarget,
        previous: Range,
        current: Range,
    },
    /// The mapping mode of an axis changed.
    ScaleModeChanged { axis: AxisTarget, mode: ScaleMode },
    /// A gesture step was dropped at a boundary; the range was retained.
    /// Hosts typically surface this as transient status feedback.
    GestureRejected {
        axis: AxisTarget,
        signal: BoundarySignal,
    },
    /// An axis was fitted to its data extent.
    DataAdjusted { axis: AxisTarget, range: Range },
}

/// Hook interface for bounded host logic around navigation changes.
///
/// Observers can watch the event stream without reaching into navigator
/// internals; typical uses are repaint scheduling and status messages.
pub trait NavObserver {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: &NavEvent);
}
