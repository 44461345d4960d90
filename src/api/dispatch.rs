use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::core::{
    AxisState, Orientation, Range, RangeOutcome, SeriesExtent, ZoomDirection, ZoomScrollEngine,
};
use crate::error::{NavError, NavResult};
use crate::extensions::{AxisTarget, NavEvent};
use crate::interaction::{GestureEvent, NavCommand};

use super::ChartNavigator;

/// Per-axis results of one dispatched gesture, primary axis first.
pub type AxisOutcomes = SmallVec<[(AxisTarget, RangeOutcome); 4]>;

type FamilyOutcomes = SmallVec<[(AxisTarget, Range, RangeOutcome); 4]>;

/// What one gesture event turned into.
///
/// Hosts inspect the resolved command for routing decisions (cursor shape,
/// event swallowing) and the per-axis outcomes for redraw scheduling.
#[derive(Debug, Clone, PartialEq)]
pub struct DispatchOutcome {
    command: NavCommand,
    results: AxisOutcomes,
}

impl DispatchOutcome {
    fn new(command: NavCommand, results: AxisOutcomes) -> Self {
        Self { command, results }
    }

    fn ignored() -> Self {
        Self {
            command: NavCommand::Ignored,
            results: AxisOutcomes::new(),
        }
    }

    #[must_use]
    pub fn command(&self) -> NavCommand {
        self.command
    }

    #[must_use]
    pub fn is_ignored(&self) -> bool {
        self.command.is_ignored()
    }

    #[must_use]
    pub fn results(&self) -> &[(AxisTarget, RangeOutcome)] {
        &self.results
    }

    /// `true` when at least one axis range actually moved.
    #[must_use]
    pub fn any_applied(&self) -> bool {
        self.results
            .iter()
            .any(|(_, outcome)| outcome.is_applied())
    }
}

impl ChartNavigator {
    /// Routes one host gesture event and applies the resolved command to
    /// every axis it addresses.
    ///
    /// Behavior gates turn disabled gesture families into ignored outcomes.
    /// Boundary stops (axis at its limit, width at its floor) are reported in
    /// the per-axis outcomes, never as errors; `Err` here means the event
    /// itself was malformed.
    pub fn dispatch(&mut self, event: &GestureEvent) -> NavResult<DispatchOutcome> {
        let command = self.router.route(event);
        trace!(event = ?event, command = ?command, "gesture routed");

        match command {
            NavCommand::Ignored => Ok(DispatchOutcome::ignored()),
            NavCommand::ScrollStep {
                orientation,
                direction,
            } => {
                if !self.behavior.allows_wheel_scroll() {
                    debug!("wheel scroll disabled by behavior");
                    return Ok(DispatchOutcome::ignored());
                }
                let entries =
                    self.apply_to_family(orientation, |axis| axis.scroll(direction))?;
                let results = self.settle(entries);
                Ok(DispatchOutcome::new(command, results))
            }
            NavCommand::Slide {
                orientation,
                direction,
            } => {
                if !self.behavior.allows_wheel_scroll() {
                    debug!("wheel slide disabled by behavior");
                    return Ok(DispatchOutcome::ignored());
                }
                let entries = self.apply_to_family(orientation, |axis| axis.slide(direction))?;
                let results = self.settle(entries);
                Ok(DispatchOutcome::new(command, results))
            }
            NavCommand::AnchoredZoom {
                orientation,
                direction,
                position_px,
            } => {
                if !self.behavior.allows_wheel_zoom() {
                    debug!("wheel zoom disabled by behavior");
                    return Ok(DispatchOutcome::ignored());
                }
                if !position_px.is_finite() {
                    return Err(NavError::InvalidData(
                        "zoom anchor position must be finite".to_owned(),
                    ));
                }
                let entries = self.zoom_family(orientation, direction, position_px)?;
                let results = self.settle(entries);
                Ok(DispatchOutcome::new(command, results))
            }
            NavCommand::Pan {
                delta_x_px,
                delta_y_px,
            } => {
                if !self.behavior.allows_drag_pan() {
                    debug!("drag pan disabled by behavior");
                    return Ok(DispatchOutcome::ignored());
                }
                let mut entries = FamilyOutcomes::new();
                if delta_x_px != 0.0 {
                    entries.extend(self.apply_to_family(Orientation::Horizontal, |axis| {
                        axis.pan_by_pixels(delta_x_px)
                    })?);
                }
                if delta_y_px != 0.0 {
                    entries.extend(self.apply_to_family(Orientation::Vertical, |axis| {
                        axis.pan_by_pixels(delta_y_px)
                    })?);
                }
                let results = self.settle(entries);
                Ok(DispatchOutcome::new(command, results))
            }
        }
    }

    /// Re-fits one axis around a data extent, with the axis padding applied.
    pub fn adjust_to_data(
        &mut self,
        target: &AxisTarget,
        extent: SeriesExtent,
    ) -> NavResult<RangeOutcome> {
        let axis = self.require_axis_mut(target)?;
        let previous = axis.range();
        let outcome = axis.adjust_to_data(extent)?;
        if let RangeOutcome::Applied(current) = outcome {
            if current != previous {
                self.emit(NavEvent::DataAdjusted {
                    axis: target.clone(),
                    range: current,
                });
            }
        }
        Ok(outcome)
    }

    /// Re-fits every axis of both orientations around the given extents.
    pub fn adjust_all_to_data(
        &mut self,
        x_extent: SeriesExtent,
        y_extent: SeriesExtent,
    ) -> NavResult<AxisOutcomes> {
        let mut entries =
            self.apply_to_family(Orientation::Horizontal, |axis| axis.adjust_to_data(x_extent))?;
        entries.extend(
            self.apply_to_family(Orientation::Vertical, |axis| axis.adjust_to_data(y_extent))?,
        );

        let mut results = AxisOutcomes::new();
        for (target, previous, outcome) in entries {
            if let RangeOutcome::Applied(current) = outcome {
                if current != previous {
                    self.emit(NavEvent::DataAdjusted {
                        axis: target.clone(),
                        range: current,
                    });
                }
            }
            results.push((target, outcome));
        }
        Ok(results)
    }

    /// Applies one range operation to the primary axis of `orientation` and
    /// then to each secondary axis in registration order.
    fn apply_to_family<F>(&mut self, orientation: Orientation, mut op: F) -> NavResult<FamilyOutcomes>
    where
        F: FnMut(&mut AxisState) -> NavResult<RangeOutcome>,
    {
        let (primary, registry) = match orientation {
            Orientation::Horizontal => (&mut self.x_axis, &mut self.secondary_x),
            Orientation::Vertical => (&mut self.y_axis, &mut self.secondary_y),
        };

        let mut entries = FamilyOutcomes::new();
        let previous = primary.range();
        let outcome = op(primary)?;
        entries.push((AxisTarget::Primary(orientation), previous, outcome));

        for (name, axis) in registry.iter_mut() {
            let previous = axis.range();
            let outcome = op(axis)?;
            entries.push((
                AxisTarget::Secondary {
                    orientation,
                    name: name.clone(),
                },
                previous,
                outcome,
            ));
        }
        Ok(entries)
    }

    fn zoom_family(
        &mut self,
        orientation: Orientation,
        direction: ZoomDirection,
        position_px: f64,
    ) -> NavResult<FamilyOutcomes> {
        let restricted = self.behavior.restricts_zoom(orientation);
        self.apply_to_family(orientation, |axis| {
            // Each axis resolves the shared cursor position through its own
            // mapping, so reversed or differently-ranged secondaries zoom
            // around the same on-screen spot.
            let anchor = axis.mapper()?.to_data(position_px)?;
            if restricted {
                return match direction {
                    ZoomDirection::In => axis.zoom_in(Some(anchor)),
                    ZoomDirection::Out => axis.zoom_out(Some(anchor)),
                };
            }
            let engine = ZoomScrollEngine::new(axis.mode(), None, axis.tuning())?;
            let outcome = match direction {
                ZoomDirection::In => engine.zoom_in(axis.range(), Some(anchor))?,
                ZoomDirection::Out => engine.zoom_out(axis.range(), Some(anchor))?,
            };
            Ok(axis.install_outcome(outcome))
        })
    }

    /// Converts raw family outcomes into the public result list, notifying
    /// observers about every applied change and boundary stop.
    fn settle(&mut self, entries: FamilyOutcomes) -> AxisOutcomes {
        let mut results = AxisOutcomes::new();
        for (target, previous, outcome) in entries {
            match outcome {
                RangeOutcome::Applied(current) => {
                    if current != previous {
                        self.emit(NavEvent::RangeChanged {
                            axis: target.clone(),
                            previous,
                            current,
                        });
                    }
                }
                RangeOutcome::Rejected(signal) => {
                    debug!(axis = ?target, signal = ?signal, "gesture stopped at boundary");
                    self.emit(NavEvent::GestureRejected {
                        axis: target.clone(),
                        signal,
                    });
                }
            }
            results.push((target, outcome));
        }
        results
    }
}
