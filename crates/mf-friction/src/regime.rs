//! Flow regime classification and point evaluation.
//!
//! Laminar and turbulent points use the closed-form and Colebrook laws. The
//! transitional band has no governing law, so a point there is drawn from a
//! normal distribution whose mean is interpolated between the two boundary
//! friction factors.

use crate::colebrook::friction_factor;
use crate::error::FrictionResult;
use mf_core::numeric::{ensure_non_negative, ensure_positive};
use rand::Rng;
use rand_distr::{Distribution, Normal};
use std::fmt;
use tracing::warn;

/// Highest Reynolds number treated as laminar.
pub const LAMINAR_LIMIT: f64 = 2000.0;
/// Lowest Reynolds number treated as turbulent.
pub const TURBULENT_LIMIT: f64 = 4000.0;
/// Standard deviation of transitional samples as a fraction of the mean.
pub const TRANSITIONAL_SPREAD: f64 = 0.2;

/// Flow regime, a function of Reynolds number only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlowRegime {
    Laminar,
    Transitional,
    Turbulent,
}

impl FlowRegime {
    pub fn classify(re: f64) -> Self {
        if re >= TURBULENT_LIMIT {
            Self::Turbulent
        } else if re <= LAMINAR_LIMIT {
            Self::Laminar
        } else {
            Self::Transitional
        }
    }
}

impl fmt::Display for FlowRegime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Laminar => write!(f, "laminar"),
            Self::Transitional => write!(f, "transitional"),
            Self::Turbulent => write!(f, "turbulent"),
        }
    }
}

/// One evaluation point on the Moody chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowSample {
    pub reynolds: f64,
    pub relative_roughness: f64,
}

impl FlowSample {
    /// Checked constructor: `reynolds > 0`, `relative_roughness >= 0`, both finite.
    pub fn new(reynolds: f64, relative_roughness: f64) -> FrictionResult<Self> {
        let reynolds = ensure_positive(reynolds, "Reynolds number")?;
        let relative_roughness = ensure_non_negative(relative_roughness, "relative roughness")?;
        Ok(Self {
            reynolds,
            relative_roughness,
        })
    }

    pub fn regime(&self) -> FlowRegime {
        FlowRegime::classify(self.reynolds)
    }

    pub fn evaluate<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        evaluate_at_point(self.reynolds, self.relative_roughness, rng)
    }
}

/// Mean transitional friction factor, linear in Re between the laminar value
/// at Re = 2000 and the turbulent value at Re = 4000.
pub fn transitional_mean(re: f64, rr: f64) -> f64 {
    let f_turb = friction_factor(TURBULENT_LIMIT, rr, true);
    let f_lam = friction_factor(LAMINAR_LIMIT, rr, false);
    f_lam + (f_turb - f_lam) * (re - LAMINAR_LIMIT) / (TURBULENT_LIMIT - LAMINAR_LIMIT)
}

/// Friction factor at `(re, rr)` for whichever regime `re` falls in.
///
/// Deterministic in the laminar and turbulent regimes, where `rng` is not
/// touched. In the transitional band one normal draw is taken from `rng`.
pub fn evaluate_at_point<R: Rng + ?Sized>(re: f64, rr: f64, rng: &mut R) -> f64 {
    match FlowRegime::classify(re) {
        FlowRegime::Turbulent => friction_factor(re, rr, true),
        FlowRegime::Laminar => friction_factor(re, rr, false),
        FlowRegime::Transitional => {
            let mean = transitional_mean(re, rr);
            let sigma = TRANSITIONAL_SPREAD * mean;
            match Normal::new(mean, sigma) {
                Ok(dist) => dist.sample(rng),
                Err(e) => {
                    warn!(re, rr, mean, error = %e, "Cannot sample transitional friction factor");
                    mean
                }
            }
        }
    }
}

/// [`evaluate_at_point`] with the calling thread's generator.
pub fn evaluate_at_point_thread_rng(re: f64, rr: f64) -> f64 {
    evaluate_at_point(re, rr, &mut rand::thread_rng())
}
