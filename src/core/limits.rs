use serde::{Deserialize, Serialize};

use crate::core::range::Range;
use crate::error::{NavError, NavResult};

/// Hard bounds for dynamic range changes on one axis.
///
/// Limits constrain zoom, scroll, slide, pan and adjust-to-data results.
/// A manually assigned `Range` bypasses them on purpose: explicit host
/// assignments are trusted, only gesture-driven motion is fenced in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisLimits {
    min_bound: f64,
    max_bound: f64,
}

impl AxisLimits {
    /// Validates once at assignment; `clamp` never re-checks.
    pub fn new(min_bound: f64, max_bound: f64) -> NavResult<Self> {
        if !min_bound.is_finite() || !max_bound.is_finite() || min_bound >= max_bound {
            return Err(NavError::Config(
                "axis limits must be finite with min < max".to_owned(),
            ));
        }
        Ok(Self {
            min_bound,
            max_bound,
        })
    }

    #[must_use]
    pub fn min_bound(self) -> f64 {
        self.min_bound
    }

    #[must_use]
    pub fn max_bound(self) -> f64 {
        self.max_bound
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.max_bound - self.min_bound
    }

    /// Shifts `proposed` into `[min_bound, max_bound]` preserving its width.
    ///
    /// When the proposed width exceeds the limit span, the full limit span is
    /// returned instead.
    #[must_use]
    pub fn clamp(self, proposed: Range) -> Range {
        let width = proposed.width();
        if width >= self.span() {
            return Range::from_ordered(self.min_bound, self.max_bound);
        }

        if proposed.lower() < self.min_bound {
            return Range::from_ordered(self.min_bound, self.min_bound + width);
        }
        if proposed.upper() > self.max_bound {
            return Range::from_ordered(self.max_bound - width, self.max_bound);
        }
        proposed
    }

    /// True when `range` already lies fully inside the limits.
    #[must_use]
    pub fn contains(self, range: Range) -> bool {
        range.lower() >= self.min_bound && range.upper() <= self.max_bound
    }
}
