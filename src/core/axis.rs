use serde::{Deserialize, Serialize};

use crate::core::limits::AxisLimits;
use crate::core::mapper::CoordinateMapper;
use crate::core::range::Range;
use crate::core::scale::{ScaleMode, from_scale_domain, to_scale_domain};
use crate::core::types::{Orientation, PixelSpan, ScrollDirection, SeriesExtent};
use crate::core::zoom::{NavTuning, RangeOutcome, ZoomScrollEngine};
use crate::error::{NavError, NavResult};

/// Complete navigation state of one axis.
///
/// Owned by a single chart instance and mutated only from the host's event
/// thread; nothing here is shared or locked. Dynamic operations (zoom,
/// scroll, slide, pan, adjust-to-data) run through [`ZoomScrollEngine`] and
/// install the result only when it was applied; a rejected outcome leaves the
/// current range untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisState {
    orientation: Orientation,
    range: Range,
    mode: ScaleMode,
    limits: Option<AxisLimits>,
    reversed: bool,
    pixel_span: PixelSpan,
    tuning: NavTuning,
}

impl AxisState {
    pub fn new(orientation: Orientation, range: Range, pixel_span: PixelSpan) -> NavResult<Self> {
        pixel_span.ensure_valid()?;
        Ok(Self {
            orientation,
            range,
            mode: ScaleMode::Linear,
            limits: None,
            reversed: false,
            pixel_span,
            tuning: NavTuning::default(),
        })
    }

    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    #[must_use]
    pub fn range(&self) -> Range {
        self.range
    }

    /// Assigns the visible range directly.
    ///
    /// Manual assignment bypasses the axis limits: only gesture-driven range
    /// changes are clamped. Under a logarithmic mode the new range must stay
    /// strictly positive.
    pub fn set_range(&mut self, range: Range) -> NavResult<()> {
        if self.mode.is_logarithmic() && !range.is_strictly_positive() {
            return Err(NavError::Domain(
                "logarithmic axis requires a strictly positive range".to_owned(),
            ));
        }
        self.range = range;
        Ok(())
    }

    #[must_use]
    pub fn mode(&self) -> ScaleMode {
        self.mode
    }

    /// Switches the mapping mode, validating logarithmic eligibility.
    ///
    /// Enabling a logarithmic mode fails with a domain error when the
    /// supplied data minimum is not strictly positive, and the current mode
    /// stays unchanged. When the current range reaches into non-positive
    /// territory its lower bound is pulled up to the data minimum, which
    /// requires an extent to be supplied.
    pub fn set_scale_mode(
        &mut self,
        mode: ScaleMode,
        data_extent: Option<SeriesExtent>,
    ) -> NavResult<()> {
        if mode.is_logarithmic() {
            if let Some(extent) = data_extent {
                if extent.min() <= 0.0 {
                    return Err(NavError::Domain(format!(
                        "cannot enable logarithmic scale with data minimum {}",
                        extent.min()
                    )));
                }
            }
            if !self.range.is_strictly_positive() {
                let Some(extent) = data_extent else {
                    return Err(NavError::Domain(
                        "cannot enable logarithmic scale on a non-positive range without a data extent".to_owned(),
                    ));
                };
                self.range = if extent.min() < self.range.upper() {
                    Range::from_ordered(extent.min(), self.range.upper())
                } else if extent.is_degenerate() {
                    half_unit_window(extent.min(), mode)?
                } else {
                    Range::from_ordered(extent.min(), extent.max())
                };
            }
        }
        self.mode = mode;
        Ok(())
    }

    #[must_use]
    pub fn limits(&self) -> Option<AxisLimits> {
        self.limits
    }

    pub fn set_limits(&mut self, limits: Option<AxisLimits>) {
        self.limits = limits;
    }

    #[must_use]
    pub fn is_reversed(&self) -> bool {
        self.reversed
    }

    pub fn set_reversed(&mut self, reversed: bool) {
        self.reversed = reversed;
    }

    #[must_use]
    pub fn pixel_span(&self) -> PixelSpan {
        self.pixel_span
    }

    /// Updates the plot-area length after a host resize.
    pub fn set_pixel_span(&mut self, pixel_span: PixelSpan) -> NavResult<()> {
        pixel_span.ensure_valid()?;
        self.pixel_span = pixel_span;
        Ok(())
    }

    #[must_use]
    pub fn tuning(&self) -> NavTuning {
        self.tuning
    }

    pub fn set_tuning(&mut self, tuning: NavTuning) -> NavResult<()> {
        self.tuning = tuning.validate()?;
        Ok(())
    }

    /// Builds the pixel mapper for the current axis state.
    pub fn mapper(&self) -> NavResult<CoordinateMapper> {
        CoordinateMapper::new(self.range, self.pixel_span, self.mode, self.reversed)
    }

    /// Builds a mapper against an explicit override range, keeping the axis
    /// span, mode and direction. Useful for hit-testing candidate windows
    /// without installing them.
    pub fn mapper_for_range(&self, range: Range) -> NavResult<CoordinateMapper> {
        CoordinateMapper::new(range, self.pixel_span, self.mode, self.reversed)
    }

    /// Builds the navigation engine for the current axis context.
    pub fn engine(&self) -> NavResult<ZoomScrollEngine> {
        ZoomScrollEngine::new(self.mode, self.limits, self.tuning)
    }

    /// Zooms in by the configured factor, anchored when given.
    pub fn zoom_in(&mut self, anchor: Option<f64>) -> NavResult<RangeOutcome> {
        let outcome = self.engine()?.zoom_in(self.range, anchor)?;
        Ok(self.install_outcome(outcome))
    }

    /// Zooms out by the configured factor, anchored when given.
    pub fn zoom_out(&mut self, anchor: Option<f64>) -> NavResult<RangeOutcome> {
        let outcome = self.engine()?.zoom_out(self.range, anchor)?;
        Ok(self.install_outcome(outcome))
    }

    /// Shifts the window by one scroll step.
    pub fn scroll(&mut self, direction: ScrollDirection) -> NavResult<RangeOutcome> {
        let outcome = self.engine()?.scroll(self.range, direction)?;
        Ok(self.install_outcome(outcome))
    }

    /// Shifts the window by one slide step.
    pub fn slide(&mut self, direction: ScrollDirection) -> NavResult<RangeOutcome> {
        let outcome = self.engine()?.slide(self.range, direction)?;
        Ok(self.install_outcome(outcome))
    }

    /// Pans so the content follows a drag by `drag_delta_px` along the axis.
    ///
    /// A positive delta is a drag toward increasing pixel offsets; the
    /// reversed flag is taken into account, so content follows the cursor in
    /// either direction.
    pub fn pan_by_pixels(&mut self, drag_delta_px: f64) -> NavResult<RangeOutcome> {
        if !drag_delta_px.is_finite() {
            return Err(NavError::InvalidData(
                "drag delta must be finite".to_owned(),
            ));
        }
        let span = self.pixel_span.ensure_valid()?;
        let toward_data = if self.reversed {
            drag_delta_px
        } else {
            -drag_delta_px
        };
        let fraction = toward_data / span.as_f64();
        let outcome = self.engine()?.translate_by_fraction(self.range, fraction)?;
        Ok(self.install_outcome(outcome))
    }

    /// Fits the window to the supplied data extent with padding.
    pub fn adjust_to_data(&mut self, extent: SeriesExtent) -> NavResult<RangeOutcome> {
        let outcome = self.engine()?.adjust_to_data(self.range, extent)?;
        Ok(self.install_outcome(outcome))
    }

    /// Installs an applied outcome; rejected outcomes retain the current
    /// range. Callers are responsible for having produced the outcome from a
    /// context consistent with this axis.
    pub(crate) fn install_outcome(&mut self, outcome: RangeOutcome) -> RangeOutcome {
        if let RangeOutcome::Applied(range) = outcome {
            self.range = range;
        }
        outcome
    }
}

/// Minimum renderable window around a single data value, half a unit on each
/// side in the scale domain. The same policy adjust-to-data applies to flat
/// series.
fn half_unit_window(value: f64, mode: ScaleMode) -> NavResult<Range> {
    let scaled = to_scale_domain(value, mode)?;
    let a = from_scale_domain(scaled - 0.5, mode)?;
    let b = from_scale_domain(scaled + 0.5, mode)?;
    Ok(Range::from_ordered(a.min(b), a.max(b)))
}
