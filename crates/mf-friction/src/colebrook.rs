//! Darcy friction factor: laminar law and Colebrook-White solve.
//!
//! The turbulent branch solves the implicit Colebrook equation
//!
//! ```text
//! 1/sqrt(f) = -2 log10( rr/3.7 + 2.51/(Re sqrt(f)) )
//! ```
//!
//! with a secant iteration seeded by the Swamee-Jain approximation. When the
//! iteration fails for any reason the Swamee-Jain value is returned instead,
//! so a finite friction factor is always produced for positive inputs.

use crate::error::FrictionError;
use crate::secant::{SecantConfig, secant_solve};
use tracing::debug;

/// Residual returned for candidates outside the physical domain.
pub const RESIDUAL_SENTINEL: f64 = 1.0e6;

/// Largest residual magnitude accepted from a converged iteration.
const ACCEPT_RESIDUAL: f64 = 1.0e-6;

/// How the turbulent friction factor was obtained.
#[derive(Clone, Debug, PartialEq)]
pub enum SolveOutcome {
    /// The Colebrook iteration converged.
    Converged { value: f64, iterations: usize },
    /// The iteration failed; `value` is the Swamee-Jain approximation.
    FellBack { value: f64, reason: FrictionError },
}

impl SolveOutcome {
    /// Friction factor regardless of how it was obtained.
    pub fn value(&self) -> f64 {
        match self {
            Self::Converged { value, .. } | Self::FellBack { value, .. } => *value,
        }
    }

    pub fn converged(&self) -> bool {
        matches!(self, Self::Converged { .. })
    }
}

/// Laminar (Hagen-Poiseuille) friction factor, `64 / Re`.
#[inline]
pub fn laminar_friction_factor(re: f64) -> f64 {
    64.0 / re
}

/// Swamee-Jain explicit approximation to the Colebrook equation.
#[inline]
pub fn swamee_jain(re: f64, rr: f64) -> f64 {
    let a = rr / 3.7;
    let b = 5.74 / re.powf(0.9);
    0.25 / (a + b).log10().powi(2)
}

/// Colebrook residual `1/sqrt(f) + 2 log10(rr/3.7 + 2.51/(Re sqrt(f)))`.
///
/// Returns [`RESIDUAL_SENTINEL`] when `f <= 0`, `re <= 0`, or the logarithm
/// argument is not a positive finite number.
pub fn colebrook_residual(f: f64, re: f64, rr: f64) -> f64 {
    if f <= 0.0 || re <= 0.0 {
        return RESIDUAL_SENTINEL;
    }
    let sqrt_f = f.sqrt();
    let arg = rr / 3.7 + 2.51 / (re * sqrt_f);
    if !(arg > 0.0 && arg.is_finite()) {
        return RESIDUAL_SENTINEL;
    }
    1.0 / sqrt_f + 2.0 * arg.log10()
}

/// Solve the Colebrook equation, reporting whether the fallback was used.
pub fn friction_factor_outcome(re: f64, rr: f64, config: &SecantConfig) -> SolveOutcome {
    let guess = swamee_jain(re, rr);

    let reason = match secant_solve(guess, |f| colebrook_residual(f, re, rr), config) {
        Ok(result) if result.residual.abs() <= ACCEPT_RESIDUAL => {
            return SolveOutcome::Converged {
                value: result.x,
                iterations: result.iterations,
            };
        }
        Ok(result) => FrictionError::ConvergenceFailed {
            what: format!(
                "Step converged with residual {} at f = {}",
                result.residual, result.x
            ),
        },
        Err(e) => e,
    };

    debug!(re, rr, error = %reason, "Colebrook solve fell back to Swamee-Jain");
    SolveOutcome::FellBack {
        value: guess,
        reason,
    }
}

/// Darcy friction factor.
///
/// With `use_implicit_equation == false` this is the laminar law `64 / Re`;
/// otherwise the Colebrook equation is solved (with the Swamee-Jain fallback).
/// Inputs are not validated: `re` must be positive and `rr` non-negative.
pub fn friction_factor(re: f64, rr: f64, use_implicit_equation: bool) -> f64 {
    if use_implicit_equation {
        friction_factor_outcome(re, rr, &SecantConfig::default()).value()
    } else {
        laminar_friction_factor(re)
    }
}
