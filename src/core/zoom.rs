use serde::{Deserialize, Serialize};

use crate::core::limits::AxisLimits;
use crate::core::range::Range;
use crate::core::scale::{ScaleMode, from_scale_domain, to_scale_domain};
use crate::core::types::{ScrollDirection, SeriesExtent};
use crate::error::{NavError, NavResult};

/// Tuning controls for dynamic range navigation on one axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NavTuning {
    /// Width multiplier applied per zoom-in step, in `(0, 1)`.
    pub zoom_factor: f64,
    /// Window shift per wheel scroll step, as a fraction of the current width.
    pub scroll_step_fraction: f64,
    /// Window shift per slide gesture, as a fraction of the current width.
    pub slide_step_fraction: f64,
    /// Whitespace added on each side by adjust-to-data, as a fraction of the
    /// data extent.
    pub adjust_padding_fraction: f64,
    /// Smallest representable window width relative to bound magnitude;
    /// candidates below it are rejected as degenerate.
    pub min_relative_width: f64,
}

impl Default for NavTuning {
    fn default() -> Self {
        Self {
            zoom_factor: 0.8,
            scroll_step_fraction: 0.1,
            slide_step_fraction: 0.1,
            adjust_padding_fraction: 0.05,
            min_relative_width: 1e-12,
        }
    }
}

impl NavTuning {
    pub fn validate(self) -> NavResult<Self> {
        validate_zoom_factor(self.zoom_factor)?;
        if !self.scroll_step_fraction.is_finite() || self.scroll_step_fraction <= 0.0 {
            return Err(NavError::Config(
                "scroll step fraction must be finite and > 0".to_owned(),
            ));
        }
        if !self.slide_step_fraction.is_finite() || self.slide_step_fraction <= 0.0 {
            return Err(NavError::Config(
                "slide step fraction must be finite and > 0".to_owned(),
            ));
        }
        if !self.adjust_padding_fraction.is_finite() || self.adjust_padding_fraction < 0.0 {
            return Err(NavError::Config(
                "adjust padding fraction must be finite and >= 0".to_owned(),
            ));
        }
        if !self.min_relative_width.is_finite() || self.min_relative_width <= 0.0 {
            return Err(NavError::Config(
                "minimum relative width must be finite and > 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Non-fatal reason a navigation step was dropped.
///
/// A rejected step is a no-op: the previous range stays installed and the
/// signal is surfaced so hosts can show status feedback. Rejections are
/// ordinary outcomes, never errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoundarySignal {
    /// The candidate width collapsed below the minimum representable width
    /// or degenerated to a non-finite or inverted window.
    DegenerateWidth,
    /// The axis is already flush against its limits and the step asked to
    /// move further past them.
    AtLimit,
}

/// Result of one dynamic range operation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum RangeOutcome {
    Applied(Range),
    Rejected(BoundarySignal),
}

impl RangeOutcome {
    #[must_use]
    pub fn is_applied(self) -> bool {
        matches!(self, Self::Applied(_))
    }

    #[must_use]
    pub fn applied(self) -> Option<Range> {
        match self {
            Self::Applied(range) => Some(range),
            Self::Rejected(_) => None,
        }
    }

    #[must_use]
    pub fn signal(self) -> Option<BoundarySignal> {
        match self {
            Self::Applied(_) => None,
            Self::Rejected(signal) => Some(signal),
        }
    }

    /// The applied range, or `fallback` (the retained previous range) when
    /// the operation was rejected.
    #[must_use]
    pub fn range_or(self, fallback: Range) -> Range {
        self.applied().unwrap_or(fallback)
    }
}

/// Pure navigation math over one axis context.
///
/// The engine is a copyable snapshot of `{scale mode, limits, tuning}`; it
/// produces candidate ranges, passes every candidate through the limits, and
/// reports the result as a [`RangeOutcome`]. It never stores or installs
/// ranges itself.
///
/// On logarithmic axes every operation runs in log space: bounds are
/// transformed with the axis base, the linear formula is applied, and the
/// results are transformed back. This keeps zoom anchors visually fixed and
/// makes scroll steps move by ratio rather than by difference.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomScrollEngine {
    mode: ScaleMode,
    limits: Option<AxisLimits>,
    tuning: NavTuning,
}

impl ZoomScrollEngine {
    pub fn new(mode: ScaleMode, limits: Option<AxisLimits>, tuning: NavTuning) -> NavResult<Self> {
        Ok(Self {
            mode,
            limits,
            tuning: tuning.validate()?,
        })
    }

    #[must_use]
    pub fn mode(self) -> ScaleMode {
        self.mode
    }

    #[must_use]
    pub fn limits(self) -> Option<AxisLimits> {
        self.limits
    }

    #[must_use]
    pub fn tuning(self) -> NavTuning {
        self.tuning
    }

    /// Shrinks the window width by the configured zoom factor.
    ///
    /// With an anchor (a data coordinate, typically under the cursor) both
    /// bounds move toward it and the anchor's relative position inside the
    /// window is preserved exactly. Without one the zoom is centered.
    pub fn zoom_in(self, current: Range, anchor: Option<f64>) -> NavResult<RangeOutcome> {
        self.zoom_in_with_factor(current, self.tuning.zoom_factor, anchor)
    }

    /// Grows the window width by the inverse of the configured zoom factor.
    pub fn zoom_out(self, current: Range, anchor: Option<f64>) -> NavResult<RangeOutcome> {
        self.zoom_out_with_factor(current, self.tuning.zoom_factor, anchor)
    }

    pub fn zoom_in_with_factor(
        self,
        current: Range,
        factor: f64,
        anchor: Option<f64>,
    ) -> NavResult<RangeOutcome> {
        let factor = validate_zoom_factor(factor)?;
        self.apply_zoom(current, factor, anchor)
    }

    pub fn zoom_out_with_factor(
        self,
        current: Range,
        factor: f64,
        anchor: Option<f64>,
    ) -> NavResult<RangeOutcome> {
        let factor = validate_zoom_factor(factor)?;
        self.apply_zoom(current, 1.0 / factor, anchor)
    }

    /// Shifts the window by one scroll step, width unchanged.
    pub fn scroll(self, current: Range, direction: ScrollDirection) -> NavResult<RangeOutcome> {
        self.translate_by_fraction(current, direction.signum() * self.tuning.scroll_step_fraction)
    }

    /// Shifts the window by one slide step, the scroll variant bound to the
    /// modifier-combo wheel gestures.
    pub fn slide(self, current: Range, direction: ScrollDirection) -> NavResult<RangeOutcome> {
        self.translate_by_fraction(current, direction.signum() * self.tuning.slide_step_fraction)
    }

    /// Shifts the window by `fraction` of its own width, width unchanged.
    ///
    /// Positive fractions move toward larger data values. This is the shared
    /// building block behind scroll, slide and drag panning.
    pub fn translate_by_fraction(self, current: Range, fraction: f64) -> NavResult<RangeOutcome> {
        if !fraction.is_finite() {
            return Err(NavError::InvalidData(
                "translate fraction must be finite".to_owned(),
            ));
        }

        let (scaled_lower, scaled_upper) = self.scaled_bounds(current)?;
        let shift = fraction * (scaled_upper - scaled_lower);
        Ok(self.resolve_scaled(current, scaled_lower + shift, scaled_upper + shift))
    }

    /// Fits the window to a data extent with whitespace padding on each side.
    ///
    /// A degenerate extent (`min == max`) falls back to a half-unit margin
    /// around the value instead of failing, so single-point series stay
    /// renderable.
    pub fn adjust_to_data(self, current: Range, extent: SeriesExtent) -> NavResult<RangeOutcome> {
        let scaled_min = to_scale_domain(extent.min(), self.mode)?;
        let scaled_max = to_scale_domain(extent.max(), self.mode)?;

        let (lower, upper) = if scaled_min == scaled_max {
            let half = 0.5 * self.scale_direction();
            (scaled_min - half, scaled_max + half)
        } else {
            let padding = self.tuning.adjust_padding_fraction * (scaled_max - scaled_min);
            (scaled_min - padding, scaled_max + padding)
        };

        Ok(self.resolve_scaled(current, lower, upper))
    }

    fn apply_zoom(
        self,
        current: Range,
        effective_factor: f64,
        anchor: Option<f64>,
    ) -> NavResult<RangeOutcome> {
        let (scaled_lower, scaled_upper) = self.scaled_bounds(current)?;
        let scaled_anchor = match anchor {
            Some(anchor) => to_scale_domain(anchor, self.mode)?,
            None => scaled_lower + (scaled_upper - scaled_lower) / 2.0,
        };

        let lower = scaled_anchor + (scaled_lower - scaled_anchor) * effective_factor;
        let upper = scaled_anchor + (scaled_upper - scaled_anchor) * effective_factor;
        Ok(self.resolve_scaled(current, lower, upper))
    }

    /// Turns scale-domain candidate bounds into an outcome: degenerate
    /// candidates are rejected, surviving ones are clamped through the
    /// limits, and a clamp that cannot move the window at all is reported as
    /// `AtLimit`.
    fn resolve_scaled(
        self,
        current: Range,
        scaled_lower: f64,
        scaled_upper: f64,
    ) -> RangeOutcome {
        // Overflow during back-transform (extreme zoom-out on a log axis)
        // surfaces as an error value; treat it as degeneracy, not failure.
        let (Ok(lower), Ok(upper)) = (
            from_scale_domain(scaled_lower, self.mode),
            from_scale_domain(scaled_upper, self.mode),
        ) else {
            return RangeOutcome::Rejected(BoundarySignal::DegenerateWidth);
        };
        if !lower.is_finite() || !upper.is_finite() || lower >= upper {
            return RangeOutcome::Rejected(BoundarySignal::DegenerateWidth);
        }
        if self.below_minimum_width(lower, upper) {
            return RangeOutcome::Rejected(BoundarySignal::DegenerateWidth);
        }

        let candidate = Range::from_ordered(lower, upper);
        let Some(limits) = self.limits else {
            return RangeOutcome::Applied(candidate);
        };

        let clamped = limits.clamp(candidate);
        // Limits live in raw data space and may reach below zero; a log axis
        // must never install a window the scale cannot map.
        if self.mode.is_logarithmic() && !clamped.is_strictly_positive() {
            return RangeOutcome::Rejected(BoundarySignal::AtLimit);
        }
        if self.below_minimum_width(clamped.lower(), clamped.upper()) {
            return RangeOutcome::Rejected(BoundarySignal::DegenerateWidth);
        }
        if clamped == current && candidate != current {
            return RangeOutcome::Rejected(BoundarySignal::AtLimit);
        }
        RangeOutcome::Applied(clamped)
    }

    fn scaled_bounds(self, range: Range) -> NavResult<(f64, f64)> {
        Ok((
            to_scale_domain(range.lower(), self.mode)?,
            to_scale_domain(range.upper(), self.mode)?,
        ))
    }

    fn below_minimum_width(self, lower: f64, upper: f64) -> bool {
        let magnitude = lower.abs().max(upper.abs()).max(1.0);
        (upper - lower) <= magnitude * self.tuning.min_relative_width
    }

    /// Sign of the scale transform: log bases below 1 map increasing data
    /// values to decreasing scale-domain values.
    fn scale_direction(self) -> f64 {
        match self.mode {
            ScaleMode::Linear => 1.0,
            ScaleMode::Logarithmic { base } => {
                if base > 1.0 {
                    1.0
                } else {
                    -1.0
                }
            }
        }
    }
}

fn validate_zoom_factor(factor: f64) -> NavResult<f64> {
    if !factor.is_finite() || factor <= 0.0 || factor >= 1.0 {
        return Err(NavError::Config(format!(
            "zoom factor must be in (0, 1), got {factor}"
        )));
    }
    Ok(factor)
}
