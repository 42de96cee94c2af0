//! Moody diagram generation errors.

use mf_core::MfError;
use thiserror::Error;

/// Result type for Moody diagram operations.
pub type MoodyResult<T> = Result<T, MoodyError>;

/// Errors that can occur while configuring or exporting a Moody diagram.
#[derive(Error, Debug)]
pub enum MoodyError {
    /// Sweep bounds or point count are unusable.
    #[error("Invalid {which} sweep: {reason}")]
    InvalidSweep { which: &'static str, reason: String },

    /// Roughness values must be finite and non-negative.
    #[error("Invalid relative roughness {value} at index {index}")]
    InvalidRoughness { index: usize, value: f64 },

    /// Roughness table is out of order, usually a data-entry slip.
    #[error(
        "Relative roughness table not increasing at index {index}: {value:e} follows {previous:e}"
    )]
    RoughnessNotIncreasing {
        index: usize,
        value: f64,
        previous: f64,
    },

    #[error("Config parse error: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<MoodyError> for MfError {
    fn from(err: MoodyError) -> Self {
        match err {
            MoodyError::InvalidSweep { which, reason: _ } => MfError::InvalidArg { what: which },
            MoodyError::InvalidRoughness { .. } | MoodyError::RoughnessNotIncreasing { .. } => {
                MfError::InvalidArg {
                    what: "relative roughness table",
                }
            }
            MoodyError::Config(_) => MfError::InvalidArg {
                what: "moody config",
            },
            MoodyError::Io(_) | MoodyError::Json(_) => MfError::Invariant {
                what: "moody export",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = MoodyError::RoughnessNotIncreasing {
            index: 14,
            value: 8e-8,
            previous: 6e-3,
        };
        let msg = err.to_string();
        assert!(msg.contains("index 14"));
        assert!(msg.contains("8e-8"));
    }

    #[test]
    fn error_to_mf_error() {
        let err = MoodyError::InvalidSweep {
            which: "laminar",
            reason: "too few points".into(),
        };
        let mf: MfError = err.into();
        assert!(matches!(mf, MfError::InvalidArg { what: "laminar" }));
    }
}
