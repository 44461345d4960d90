use serde::{Deserialize, Serialize};

use crate::error::{NavError, NavResult};

/// Mapping mode used by an axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub enum ScaleMode {
    /// Uniform spacing in raw data units.
    #[default]
    Linear,
    /// Uniform spacing in `log(base)` units (all values must be > 0).
    Logarithmic { base: f64 },
}

impl ScaleMode {
    /// Builds a logarithmic mode with a validated base.
    pub fn logarithmic(base: f64) -> NavResult<Self> {
        if !base.is_finite() || base <= 0.0 || base == 1.0 {
            return Err(NavError::Config(format!(
                "log base must be finite, > 0 and != 1, got {base}"
            )));
        }
        Ok(Self::Logarithmic { base })
    }

    /// Base-10 logarithmic mode, the conventional default for log axes.
    #[must_use]
    pub const fn log10() -> Self {
        Self::Logarithmic { base: 10.0 }
    }

    #[must_use]
    pub fn is_logarithmic(self) -> bool {
        matches!(self, Self::Logarithmic { .. })
    }
}

/// Maps a raw data value into the internal scale domain selected by `mode`.
pub fn to_scale_domain(value: f64, mode: ScaleMode) -> NavResult<f64> {
    if !value.is_finite() {
        return Err(NavError::InvalidData("value must be finite".to_owned()));
    }

    match mode {
        ScaleMode::Linear => Ok(value),
        ScaleMode::Logarithmic { base } => {
            if value <= 0.0 {
                return Err(NavError::Domain(format!(
                    "logarithmic scale requires values > 0, got {value}"
                )));
            }
            Ok(value.log(base))
        }
    }
}

/// Maps an internal scale-domain value back into a raw data value.
pub fn from_scale_domain(value: f64, mode: ScaleMode) -> NavResult<f64> {
    if !value.is_finite() {
        return Err(NavError::InvalidData(
            "mapped scale value must be finite".to_owned(),
        ));
    }

    match mode {
        ScaleMode::Linear => Ok(value),
        ScaleMode::Logarithmic { base } => {
            let raw = base.powf(value);
            if !raw.is_finite() || raw <= 0.0 {
                return Err(NavError::InvalidData(
                    "mapped log value must be finite and > 0".to_owned(),
                ));
            }
            Ok(raw)
        }
    }
}
