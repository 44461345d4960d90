use tracing::debug;

use crate::core::{
    AxisLimits, AxisState, CoordinateMapper, NavTuning, Orientation, PixelSpan, Range, ScaleMode,
    SeriesExtent,
};
use crate::error::{NavError, NavResult};
use crate::extensions::{AxisTarget, NavEvent};

use super::ChartNavigator;

impl ChartNavigator {
    /// Resolves an axis target to its state, `None` for an unregistered
    /// secondary name.
    #[must_use]
    pub fn axis(&self, target: &AxisTarget) -> Option<&AxisState> {
        match target {
            AxisTarget::Primary(Orientation::Horizontal) => Some(&self.x_axis),
            AxisTarget::Primary(Orientation::Vertical) => Some(&self.y_axis),
            AxisTarget::Secondary {
                orientation: Orientation::Horizontal,
                name,
            } => self.secondary_x.get(name),
            AxisTarget::Secondary {
                orientation: Orientation::Vertical,
                name,
            } => self.secondary_y.get(name),
        }
    }

    pub(super) fn axis_state_mut(&mut self, target: &AxisTarget) -> Option<&mut AxisState> {
        match target {
            AxisTarget::Primary(Orientation::Horizontal) => Some(&mut self.x_axis),
            AxisTarget::Primary(Orientation::Vertical) => Some(&mut self.y_axis),
            AxisTarget::Secondary {
                orientation: Orientation::Horizontal,
                name,
            } => self.secondary_x.get_mut(name),
            AxisTarget::Secondary {
                orientation: Orientation::Vertical,
                name,
            } => self.secondary_y.get_mut(name),
        }
    }

    fn require_axis(&self, target: &AxisTarget) -> NavResult<&AxisState> {
        self.axis(target).ok_or_else(|| missing_axis_error(target))
    }

    pub(super) fn require_axis_mut(&mut self, target: &AxisTarget) -> NavResult<&mut AxisState> {
        self.axis_state_mut(target)
            .ok_or_else(|| missing_axis_error(target))
    }

    /// Replaces the visible range of one axis, bypassing its limits.
    pub fn set_range(&mut self, target: &AxisTarget, range: Range) -> NavResult<()> {
        let axis = self.require_axis_mut(target)?;
        let previous = axis.range();
        axis.set_range(range)?;
        if previous != range {
            self.emit(NavEvent::RangeChanged {
                axis: target.clone(),
                previous,
                current: range,
            });
        }
        Ok(())
    }

    /// Switches an axis between linear and logarithmic mapping.
    ///
    /// Passing the current data extent lets a non-positive visible range be
    /// repaired instead of rejected when entering logarithmic mode. The range
    /// repair is reported as a separate range-change notification.
    pub fn set_scale_mode(
        &mut self,
        target: &AxisTarget,
        mode: ScaleMode,
        data_extent: Option<SeriesExtent>,
    ) -> NavResult<()> {
        let axis = self.require_axis_mut(target)?;
        let previous_range = axis.range();
        axis.set_scale_mode(mode, data_extent)?;
        let current_range = axis.range();

        debug!(axis = ?target, mode = ?mode, "axis scale mode changed");
        self.emit(NavEvent::ScaleModeChanged {
            axis: target.clone(),
            mode,
        });
        if previous_range != current_range {
            self.emit(NavEvent::RangeChanged {
                axis: target.clone(),
                previous: previous_range,
                current: current_range,
            });
        }
        Ok(())
    }

    pub fn set_limits(&mut self, target: &AxisTarget, limits: Option<AxisLimits>) -> NavResult<()> {
        self.require_axis_mut(target)?.set_limits(limits);
        Ok(())
    }

    pub fn set_reversed(&mut self, target: &AxisTarget, reversed: bool) -> NavResult<()> {
        self.require_axis_mut(target)?.set_reversed(reversed);
        Ok(())
    }

    pub fn set_tuning(&mut self, target: &AxisTarget, tuning: NavTuning) -> NavResult<()> {
        self.require_axis_mut(target)?.set_tuning(tuning)
    }

    /// Propagates a new plot size to every axis of each orientation.
    ///
    /// Both spans are validated before any axis is touched so a failed resize
    /// never leaves the two orientations disagreeing about the viewport.
    pub fn resize(&mut self, x_span: PixelSpan, y_span: PixelSpan) -> NavResult<()> {
        let x_span = x_span.ensure_valid()?;
        let y_span = y_span.ensure_valid()?;

        self.x_axis.set_pixel_span(x_span)?;
        for axis in self.secondary_x.values_mut() {
            axis.set_pixel_span(x_span)?;
        }
        self.y_axis.set_pixel_span(y_span)?;
        for axis in self.secondary_y.values_mut() {
            axis.set_pixel_span(y_span)?;
        }

        debug!(
            x_px = x_span.length,
            y_px = y_span.length,
            "navigator resized"
        );
        Ok(())
    }

    pub fn mapper(&self, target: &AxisTarget) -> NavResult<CoordinateMapper> {
        self.require_axis(target)?.mapper()
    }
}

fn missing_axis_error(target: &AxisTarget) -> NavError {
    match target {
        AxisTarget::Primary(orientation) => {
            NavError::InvalidData(format!("missing primary axis: {orientation:?}"))
        }
        AxisTarget::Secondary { name, .. } => {
            NavError::InvalidData(format!("unknown secondary axis: {name}"))
        }
    }
}
