//! Error types for head-loss calculations.

use mf_core::error::MfError;
use thiserror::Error;

/// Errors that can occur during head-loss calculations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PipeError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Non-physical value: {what}")]
    NonPhysical { what: &'static str },
}

pub type PipeResult<T> = Result<T, PipeError>;

impl From<MfError> for PipeError {
    fn from(e: MfError) -> Self {
        match e {
            MfError::NonFinite { what, value: _ } => PipeError::NonPhysical { what },
            MfError::InvalidArg { what } => PipeError::InvalidArg { what },
            MfError::Invariant { what } => PipeError::NonPhysical { what },
        }
    }
}

impl From<PipeError> for MfError {
    fn from(e: PipeError) -> Self {
        match e {
            PipeError::InvalidArg { what } => MfError::InvalidArg { what },
            PipeError::NonPhysical { what } => MfError::Invariant { what },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = PipeError::NonPhysical { what: "velocity" };
        assert!(err.to_string().contains("velocity"));
    }

    #[test]
    fn error_conversion() {
        let pipe_err: PipeError = MfError::NonFinite {
            what: "Reynolds number",
            value: f64::INFINITY,
        }
        .into();
        assert_eq!(
            pipe_err,
            PipeError::NonPhysical {
                what: "Reynolds number"
            }
        );

        let mf_err: MfError = PipeError::InvalidArg { what: "diameter" }.into();
        assert!(matches!(mf_err, MfError::InvalidArg { what: "diameter" }));
    }
}
