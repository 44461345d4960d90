use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::types::datetime_to_unix_seconds;
use crate::error::{NavError, NavResult};

/// Visible axis window `[lower, upper]` in data coordinates.
///
/// Immutable value type: every navigation operation produces a new `Range`
/// and the previous one is dropped, never mutated in place. Bounds are
/// guaranteed finite with `lower < upper` strictly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    lower: f64,
    upper: f64,
}

impl Range {
    pub fn new(lower: f64, upper: f64) -> NavResult<Self> {
        if !lower.is_finite() || !upper.is_finite() || lower >= upper {
            return Err(NavError::InvalidData(
                "range bounds must be finite with lower < upper".to_owned(),
            ));
        }
        Ok(Self { lower, upper })
    }

    /// Builds a time window from UTC instants expressed in unix seconds.
    pub fn from_utc_instants(start: DateTime<Utc>, end: DateTime<Utc>) -> NavResult<Self> {
        Self::new(
            datetime_to_unix_seconds(start),
            datetime_to_unix_seconds(end),
        )
    }

    /// Callers guarantee `lower < upper` and finite bounds.
    pub(crate) fn from_ordered(lower: f64, upper: f64) -> Self {
        debug_assert!(lower.is_finite() && upper.is_finite() && lower < upper);
        Self { lower, upper }
    }

    #[must_use]
    pub fn lower(self) -> f64 {
        self.lower
    }

    #[must_use]
    pub fn upper(self) -> f64 {
        self.upper
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.upper - self.lower
    }

    #[must_use]
    pub fn center(self) -> f64 {
        self.lower + (self.upper - self.lower) / 2.0
    }

    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }

    /// Position of `value` relative to the window: `0.0` at `lower`,
    /// `1.0` at `upper`, outside `[0, 1]` when the value lies outside.
    #[must_use]
    pub fn relative_position(self, value: f64) -> f64 {
        (value - self.lower) / self.width()
    }

    #[must_use]
    pub fn is_strictly_positive(self) -> bool {
        self.lower > 0.0
    }
}
