use serde::{Deserialize, Serialize};

use crate::core::range::Range;
use crate::core::scale::{ScaleMode, from_scale_domain, to_scale_domain};
use crate::core::types::PixelSpan;
use crate::error::{NavError, NavResult};

/// Pure bidirectional mapping between data coordinates and pixel offsets
/// along one axis.
///
/// A mapper is a cheap copyable snapshot of `{range, pixel span, scale mode,
/// reversed}`; it is rebuilt whenever any of those change rather than kept in
/// sync. Pixels outside `[0, span]` map linearly past the range bounds, which
/// lets hosts hit-test slightly outside the plot area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoordinateMapper {
    range: Range,
    pixel_span: PixelSpan,
    mode: ScaleMode,
    reversed: bool,
}

impl CoordinateMapper {
    pub fn new(
        range: Range,
        pixel_span: PixelSpan,
        mode: ScaleMode,
        reversed: bool,
    ) -> NavResult<Self> {
        pixel_span.ensure_valid()?;
        if mode.is_logarithmic() && !range.is_strictly_positive() {
            return Err(NavError::Domain(
                "logarithmic mapping requires a strictly positive range".to_owned(),
            ));
        }
        Ok(Self {
            range,
            pixel_span,
            mode,
            reversed,
        })
    }

    #[must_use]
    pub fn range(self) -> Range {
        self.range
    }

    #[must_use]
    pub fn pixel_span(self) -> PixelSpan {
        self.pixel_span
    }

    #[must_use]
    pub fn mode(self) -> ScaleMode {
        self.mode
    }

    #[must_use]
    pub fn is_reversed(self) -> bool {
        self.reversed
    }

    /// Maps a data coordinate to a pixel offset along the axis.
    pub fn to_pixel(self, value: f64) -> NavResult<f64> {
        if !value.is_finite() {
            return Err(NavError::InvalidData("value must be finite".to_owned()));
        }

        let (scaled_lower, scaled_upper) = self.scaled_bounds()?;
        let scaled_value = to_scale_domain(value, self.mode)?;
        let normalized = (scaled_value - scaled_lower) / (scaled_upper - scaled_lower);
        let pixel = normalized * self.pixel_span.as_f64();
        if self.reversed {
            Ok(self.pixel_span.as_f64() - pixel)
        } else {
            Ok(pixel)
        }
    }

    /// Maps a pixel offset back to a data coordinate.
    pub fn to_data(self, pixel: f64) -> NavResult<f64> {
        if !pixel.is_finite() {
            return Err(NavError::InvalidData("pixel must be finite".to_owned()));
        }

        let forward = if self.reversed {
            self.pixel_span.as_f64() - pixel
        } else {
            pixel
        };
        let (scaled_lower, scaled_upper) = self.scaled_bounds()?;
        let normalized = forward / self.pixel_span.as_f64();
        let scaled_value = scaled_lower + normalized * (scaled_upper - scaled_lower);
        from_scale_domain(scaled_value, self.mode)
    }

    fn scaled_bounds(self) -> NavResult<(f64, f64)> {
        Ok((
            to_scale_domain(self.range.lower(), self.mode)?,
            to_scale_domain(self.range.upper(), self.mode)?,
        ))
    }
}
