//! mf-friction: Darcy friction factor engine for moodyflow.
//!
//! Provides:
//! - Laminar law and Colebrook-White solve with Swamee-Jain fallback
//! - Bounded secant root finder used by the Colebrook solve
//! - Regime classification (laminar / transitional / turbulent) and
//!   point evaluation, including stochastic sampling in the transitional band
//!
//! # Example
//!
//! ```
//! use mf_friction::{FlowRegime, evaluate_at_point, friction_factor};
//! use rand::SeedableRng;
//!
//! let f = friction_factor(1e6, 0.0, true);
//! assert!((f - 0.0116).abs() < 2e-4);
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(1);
//! let f_lam = evaluate_at_point(500.0, 0.01, &mut rng);
//! assert_eq!(f_lam, 64.0 / 500.0);
//! assert_eq!(FlowRegime::classify(3000.0), FlowRegime::Transitional);
//! ```

pub mod colebrook;
pub mod error;
pub mod regime;
pub mod secant;

// Re-exports
pub use colebrook::{
    RESIDUAL_SENTINEL, SolveOutcome, colebrook_residual, friction_factor,
    friction_factor_outcome, laminar_friction_factor, swamee_jain,
};
pub use error::{FrictionError, FrictionResult};
pub use regime::{
    FlowRegime, FlowSample, LAMINAR_LIMIT, TRANSITIONAL_SPREAD, TURBULENT_LIMIT,
    evaluate_at_point, evaluate_at_point_thread_rng, transitional_mean,
};
pub use secant::{SecantConfig, SecantResult, secant_solve};
