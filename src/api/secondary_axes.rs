use indexmap::IndexMap;
use tracing::debug;

use crate::core::{AxisState, Orientation, Range};
use crate::error::{NavError, NavResult};

use super::ChartNavigator;

impl ChartNavigator {
    /// Registers a secondary axis with a unique name per orientation.
    ///
    /// The axis starts linear and unreversed, shares the primary's pixel span
    /// and tuning, and shows the supplied range. Gestures fan out to it
    /// alongside the primary of the same orientation.
    pub fn add_secondary_axis(
        &mut self,
        orientation: Orientation,
        name: &str,
        range: Range,
    ) -> NavResult<()> {
        if name.is_empty() {
            return Err(NavError::InvalidData(
                "secondary axis name must not be empty".to_owned(),
            ));
        }
        let primary = self.primary_axis(orientation);
        let span = primary.pixel_span();
        let tuning = primary.tuning();
        if self.secondary_registry(orientation).contains_key(name) {
            return Err(NavError::InvalidData(format!(
                "secondary axis with name `{name}` is already registered"
            )));
        }

        let mut axis = AxisState::new(orientation, range, span)?;
        axis.set_tuning(tuning)?;
        self.secondary_registry_mut(orientation)
            .insert(name.to_owned(), axis);
        debug!(orientation = ?orientation, name = %name, "secondary axis registered");
        Ok(())
    }

    /// Removes a secondary axis by name. Returns `true` when removed.
    ///
    /// Remaining axes keep their registration order.
    pub fn remove_secondary_axis(&mut self, orientation: Orientation, name: &str) -> bool {
        self.secondary_registry_mut(orientation)
            .shift_remove(name)
            .is_some()
    }

    #[must_use]
    pub fn secondary_axis(&self, orientation: Orientation, name: &str) -> Option<&AxisState> {
        self.secondary_registry(orientation).get(name)
    }

    #[must_use]
    pub fn has_secondary_axis(&self, orientation: Orientation, name: &str) -> bool {
        self.secondary_registry(orientation).contains_key(name)
    }

    #[must_use]
    pub fn secondary_axis_count(&self, orientation: Orientation) -> usize {
        self.secondary_registry(orientation).len()
    }

    /// Registered secondary axis names in registration order.
    #[must_use]
    pub fn secondary_axis_names(&self, orientation: Orientation) -> Vec<&str> {
        self.secondary_registry(orientation)
            .keys()
            .map(String::as_str)
            .collect()
    }

    fn primary_axis(&self, orientation: Orientation) -> &AxisState {
        match orientation {
            Orientation::Horizontal => &self.x_axis,
            Orientation::Vertical => &self.y_axis,
        }
    }

    pub(super) fn secondary_registry(
        &self,
        orientation: Orientation,
    ) -> &IndexMap<String, AxisState> {
        match orientation {
            Orientation::Horizontal => &self.secondary_x,
            Orientation::Vertical => &self.secondary_y,
        }
    }

    pub(super) fn secondary_registry_mut(
        &mut self,
        orientation: Orientation,
    ) -> &mut IndexMap<String, AxisState> {
        match orientation {
            Orientation::Horizontal => &mut self.secondary_x,
            Orientation::Vertical => &mut self.secondary_y,
        }
    }
}
