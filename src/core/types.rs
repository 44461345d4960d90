use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{NavError, NavResult};

/// Axis direction inside the plot area.
///
/// The crate never assumes a screen coordinate system: a vertical axis with
/// `reversed = false` maps its lower bound to pixel `0` at the start of the
/// span, wherever the host puts that start. Hosts whose pixel origin is the
/// top-left corner typically mark vertical axes as reversed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Scroll direction in data terms: `Forward` moves the window toward larger
/// data values regardless of axis reversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScrollDirection {
    Forward,
    Backward,
}

impl ScrollDirection {
    #[must_use]
    pub fn signum(self) -> f64 {
        match self {
            Self::Forward => 1.0,
            Self::Backward => -1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZoomDirection {
    In,
    Out,
}

/// Plot-area length in pixels along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelSpan {
    pub length: u32,
}

impl PixelSpan {
    #[must_use]
    pub fn new(length: u32) -> Self {
        Self { length }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.length > 0
    }

    #[must_use]
    pub fn as_f64(self) -> f64 {
        f64::from(self.length)
    }

    pub(crate) fn ensure_valid(self) -> NavResult<Self> {
        if !self.is_valid() {
            return Err(NavError::InvalidPixelSpan {
                length: self.length,
            });
        }
        Ok(self)
    }
}

/// XY sample in data coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub x: f64,
    pub y: f64,
}

impl SeriesPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Builds a sample whose x coordinate is a UTC instant in unix seconds.
    #[must_use]
    pub fn from_utc_time(time: DateTime<Utc>, y: f64) -> Self {
        Self {
            x: datetime_to_unix_seconds(time),
            y,
        }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Data envelope of a series along one axis, supplied by the host for
/// adjust-to-data and for logarithmic-mode validation.
///
/// `min == max` is allowed; the degenerate case is resolved by the
/// adjust-to-data policy, not here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesExtent {
    min: f64,
    max: f64,
}

impl SeriesExtent {
    pub fn new(min: f64, max: f64) -> NavResult<Self> {
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(NavError::InvalidData(
                "series extent must be finite with min <= max".to_owned(),
            ));
        }
        Ok(Self { min, max })
    }

    /// Computes the envelope of raw sample values.
    pub fn from_values(values: &[f64]) -> NavResult<Self> {
        if values.is_empty() {
            return Err(NavError::InvalidData(
                "series extent cannot be built from empty data".to_owned(),
            ));
        }

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for value in values {
            if !value.is_finite() {
                return Err(NavError::InvalidData(
                    "series values must be finite".to_owned(),
                ));
            }
            min = min.min(*value);
            max = max.max(*value);
        }

        Self::new(min, max)
    }

    /// Computes the envelope of XY samples along the given axis direction.
    pub fn from_points(points: &[SeriesPoint], orientation: Orientation) -> NavResult<Self> {
        if points.is_empty() {
            return Err(NavError::InvalidData(
                "series extent cannot be built from empty data".to_owned(),
            ));
        }

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for point in points {
            if !point.is_finite() {
                return Err(NavError::InvalidData(
                    "series points must be finite".to_owned(),
                ));
            }
            let value = match orientation {
                Orientation::Horizontal => point.x,
                Orientation::Vertical => point.y,
            };
            min = min.min(value);
            max = max.max(value);
        }

        Self::new(min, max)
    }

    #[must_use]
    pub fn min(self) -> f64 {
        self.min
    }

    #[must_use]
    pub fn max(self) -> f64 {
        self.max
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.max - self.min
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.min == self.max
    }
}

#[must_use]
pub fn datetime_to_unix_seconds(value: DateTime<Utc>) -> f64 {
    value.timestamp_millis() as f64 / 1_000.0
}
