use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{AxisLimits, AxisState, NavTuning, Orientation, PixelSpan, Range, ScaleMode};
use crate::interaction::GestureBindings;

use super::{ChartNavigator, NavigationBehavior};

/// Serializable per-axis state, one entry per axis in a navigator snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisSnapshot {
    pub orientation: Orientation,
    pub range: Range,
    pub mode: ScaleMode,
    pub limits: Option<AxisLimits>,
    pub reversed: bool,
    pub pixel_span: PixelSpan,
    pub tuning: NavTuning,
}

impl From<&AxisState> for AxisSnapshot {
    fn from(axis: &AxisState) -> Self {
        Self {
            orientation: axis.orientation(),
            range: axis.range(),
            mode: axis.mode(),
            limits: axis.limits(),
            reversed: axis.is_reversed(),
            pixel_span: axis.pixel_span(),
            tuning: axis.tuning(),
        }
    }
}

/// Serializable deterministic state snapshot used by regression tests and
/// session persistence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigatorSnapshot {
    pub x_axis: AxisSnapshot,
    pub y_axis: AxisSnapshot,
    pub secondary_x: IndexMap<String, AxisSnapshot>,
    pub secondary_y: IndexMap<String, AxisSnapshot>,
    pub behavior: NavigationBehavior,
    pub bindings: GestureBindings,
    pub metadata: IndexMap<String, String>,
}

impl ChartNavigator {
    /// Captures the full navigation state, secondary axes in registration
    /// order.
    #[must_use]
    pub fn snapshot(&self) -> NavigatorSnapshot {
        NavigatorSnapshot {
            x_axis: AxisSnapshot::from(&self.x_axis),
            y_axis: AxisSnapshot::from(&self.y_axis),
            secondary_x: self
                .secondary_x
                .iter()
                .map(|(name, axis)| (name.clone(), AxisSnapshot::from(axis)))
                .collect(),
            secondary_y: self
                .secondary_y
                .iter()
                .map(|(name, axis)| (name.clone(), AxisSnapshot::from(axis)))
                .collect(),
            behavior: self.behavior,
            bindings: self.router.bindings(),
            metadata: self.metadata.clone(),
        }
    }
}
