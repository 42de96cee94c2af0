//! Error types for friction factor operations.

use mf_core::error::MfError;
use thiserror::Error;

/// Errors raised by the root finder or by checked input construction.
///
/// The public friction factor operations never return these; solver errors
/// are absorbed into [`crate::SolveOutcome::FellBack`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FrictionError {
    #[error("Convergence failed: {what}")]
    ConvergenceFailed { what: String },

    #[error("Numeric error: {what}")]
    Numeric { what: String },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}

pub type FrictionResult<T> = Result<T, FrictionError>;

impl From<FrictionError> for MfError {
    fn from(e: FrictionError) -> Self {
        match e {
            FrictionError::ConvergenceFailed { what: _ } => MfError::Invariant {
                what: "friction factor convergence",
            },
            FrictionError::Numeric { what: _ } => MfError::Invariant {
                what: "friction factor numeric",
            },
            FrictionError::InvalidArg { what } => MfError::InvalidArg { what },
        }
    }
}

impl From<MfError> for FrictionError {
    fn from(e: MfError) -> Self {
        match e {
            MfError::NonFinite { what, value: _ } => FrictionError::InvalidArg { what },
            MfError::InvalidArg { what } => FrictionError::InvalidArg { what },
            MfError::Invariant { what } => FrictionError::Numeric {
                what: what.to_string(),
            },
        }
    }
}
