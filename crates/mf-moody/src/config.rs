//! Moody diagram configuration (YAML).

use crate::error::{MoodyError, MoodyResult};
use crate::sweep::LogSweep;
use mf_friction::{LAMINAR_LIMIT, TURBULENT_LIMIT};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Relative roughness values of the classic Moody chart, smooth to very rough.
pub const ROUGHNESS_TABLE: [f64; 20] = [
    0.0, 1e-6, 5e-6, 1e-5, 5e-5, 1e-4, 2e-4, 4e-4, 6e-4, 8e-4, 1e-3, 2e-3, 4e-3, 6e-3, 8e-3,
    1.5e-2, 2e-2, 3e-2, 4e-2, 5e-2,
];

/// Reynolds sweeps and roughness values for a Moody diagram.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MoodyConfig {
    /// Laminar curve, must stay at or below Re = 2000
    pub laminar: LogSweep,
    /// Transition band, drawn with the laminar law
    pub transition: LogSweep,
    /// Turbulent curves, must start at or above Re = 4000
    pub turbulent: LogSweep,
    /// One turbulent curve per value, strictly increasing
    pub relative_roughness: Vec<f64>,
}

impl Default for MoodyConfig {
    fn default() -> Self {
        Self {
            laminar: LogSweep::new(600.0, LAMINAR_LIMIT, 20),
            transition: LogSweep::new(LAMINAR_LIMIT, TURBULENT_LIMIT, 20),
            turbulent: LogSweep::new(TURBULENT_LIMIT, 1e8, 200),
            relative_roughness: ROUGHNESS_TABLE.to_vec(),
        }
    }
}

impl MoodyConfig {
    pub fn from_yaml_str(text: &str) -> MoodyResult<Self> {
        Ok(serde_yaml::from_str(text)?)
    }

    pub fn to_yaml_string(&self) -> MoodyResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Read and validate a YAML config file.
    pub fn load(path: &Path) -> MoodyResult<Self> {
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_yaml_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> MoodyResult<()> {
        self.laminar.validate("laminar")?;
        self.transition.validate("transition")?;
        self.turbulent.validate("turbulent")?;

        if self.laminar.start.max(self.laminar.end) > LAMINAR_LIMIT {
            return Err(MoodyError::InvalidSweep {
                which: "laminar",
                reason: format!("Reynolds numbers must not exceed {}", LAMINAR_LIMIT),
            });
        }
        if self.turbulent.start.min(self.turbulent.end) < TURBULENT_LIMIT {
            return Err(MoodyError::InvalidSweep {
                which: "turbulent",
                reason: format!("Reynolds numbers must be at least {}", TURBULENT_LIMIT),
            });
        }

        validate_roughness(&self.relative_roughness)
    }
}

/// Roughness values must be finite, non-negative, and strictly increasing.
///
/// An out-of-order entry is reported rather than silently drawn, since a
/// misplaced exponent (8e-8 for 8e-3) otherwise yields a plausible curve in
/// the wrong place.
pub fn validate_roughness(values: &[f64]) -> MoodyResult<()> {
    for (index, &value) in values.iter().enumerate() {
        if !(value.is_finite() && value >= 0.0) {
            return Err(MoodyError::InvalidRoughness { index, value });
        }
        if index > 0 {
            let previous = values[index - 1];
            if value <= previous {
                return Err(MoodyError::RoughnessNotIncreasing {
                    index,
                    value,
                    previous,
                });
            }
        }
    }
    Ok(())
}
