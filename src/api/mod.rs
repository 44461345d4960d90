use indexmap::IndexMap;

use crate::core::{AxisState, NavTuning, Orientation, PixelSpan, Range};
use crate::error::NavResult;
use crate::extensions::NavObserver;
use crate::interaction::{GestureBindings, GestureRouter};

mod axis_controller;
pub mod behavior;
mod dispatch;
mod json_contract;
mod observer_registry;
mod secondary_axes;
mod snapshot;

pub use behavior::NavigationBehavior;
pub use dispatch::{AxisOutcomes, DispatchOutcome};
pub use json_contract::{NAVIGATOR_SNAPSHOT_JSON_SCHEMA_V1, NavigatorSnapshotJsonContractV1};
pub use snapshot::{AxisSnapshot, NavigatorSnapshot};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavigatorConfig {
    pub x_range: Range,
    pub y_range: Range,
    pub x_span: PixelSpan,
    pub y_span: PixelSpan,
    pub tuning: NavTuning,
    pub bindings: GestureBindings,
    pub behavior: NavigationBehavior,
}

impl NavigatorConfig {
    #[must_use]
    pub fn new(x_range: Range, y_range: Range, x_span: PixelSpan, y_span: PixelSpan) -> Self {
        Self {
            x_range,
            y_range,
            x_span,
            y_span,
            tuning: NavTuning::default(),
            bindings: GestureBindings::default(),
            behavior: NavigationBehavior::default(),
        }
    }

    #[must_use]
    pub fn with_tuning(mut self, tuning: NavTuning) -> Self {
        self.tuning = tuning;
        self
    }

    #[must_use]
    pub fn with_bindings(mut self, bindings: GestureBindings) -> Self {
        self.bindings = bindings;
        self
    }

    #[must_use]
    pub fn with_behavior(mut self, behavior: NavigationBehavior) -> Self {
        self.behavior = behavior;
        self
    }
}

/// Main navigation facade consumed by host applications.
///
/// `ChartNavigator` owns one axis pair plus optional named secondary axes,
/// routes host gesture events into range mutations, and notifies registered
/// observers about every applied or rejected change. It holds no widget or
/// rendering state; hosts feed it pixel-space input and read mapped ranges
/// back out.
pub struct ChartNavigator {
    x_axis: AxisState,
    y_axis: AxisState,
    secondary_x: IndexMap<String, AxisState>,
    secondary_y: IndexMap<String, AxisState>,
    router: GestureRouter,
    behavior: NavigationBehavior,
    observers: Vec<Box<dyn NavObserver>>,
    metadata: IndexMap<String, String>,
}

impl ChartNavigator {
    pub fn new(config: NavigatorConfig) -> NavResult<Self> {
        let tuning = config.tuning.validate()?;

        let mut x_axis = AxisState::new(Orientation::Horizontal, config.x_range, config.x_span)?;
        x_axis.set_tuning(tuning)?;
        let mut y_axis = AxisState::new(Orientation::Vertical, config.y_range, config.y_span)?;
        y_axis.set_tuning(tuning)?;

        Ok(Self {
            x_axis,
            y_axis,
            secondary_x: IndexMap::new(),
            secondary_y: IndexMap::new(),
            router: GestureRouter::new(config.bindings),
            behavior: config.behavior,
            observers: Vec::new(),
            metadata: IndexMap::new(),
        })
    }

    #[must_use]
    pub fn x_axis(&self) -> &AxisState {
        &self.x_axis
    }

    #[must_use]
    pub fn y_axis(&self) -> &AxisState {
        &self.y_axis
    }

    #[must_use]
    pub fn x_range(&self) -> Range {
        self.x_axis.range()
    }

    #[must_use]
    pub fn y_range(&self) -> Range {
        self.y_axis.range()
    }

    #[must_use]
    pub fn behavior(&self) -> NavigationBehavior {
        self.behavior
    }

    pub fn set_behavior(&mut self, behavior: NavigationBehavior) {
        self.behavior = behavior;
    }

    #[must_use]
    pub fn bindings(&self) -> GestureBindings {
        self.router.bindings()
    }

    pub fn set_bindings(&mut self, bindings: GestureBindings) {
        self.router = GestureRouter::new(bindings);
    }

    #[must_use]
    pub fn metadata(&self) -> &IndexMap<String, String> {
        &self.metadata
    }

    pub fn set_metadata(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.metadata.insert(key.into(), value.into());
    }
}
