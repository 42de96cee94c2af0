//! Secant root finder with a positivity constraint.

use crate::error::{FrictionError, FrictionResult};

/// Secant solver configuration.
#[derive(Clone, Debug)]
pub struct SecantConfig {
    /// Maximum iterations
    pub max_iterations: usize,
    /// Absolute tolerance on the residual
    pub abs_tol: f64,
    /// Relative tolerance on the step size
    pub rel_step_tol: f64,
    /// Relative offset of the second starting point
    pub perturbation: f64,
}

impl Default for SecantConfig {
    fn default() -> Self {
        Self {
            max_iterations: 50,
            abs_tol: 1e-12,
            rel_step_tol: 1e-12,
            perturbation: 1e-4,
        }
    }
}

/// Secant iteration result.
#[derive(Clone, Debug, PartialEq)]
pub struct SecantResult {
    /// Root estimate
    pub x: f64,
    /// Residual at the root estimate
    pub residual: f64,
    /// Number of iterations
    pub iterations: usize,
}

/// Find a root of `residual_fn` in `x > 0` starting from `x0`.
///
/// Steps that would leave the positive half-line are replaced by halving the
/// current iterate. A non-finite residual is an error rather than a probe
/// result, so callers should return a large finite value for candidates
/// outside their domain.
pub fn secant_solve<F>(
    x0: f64,
    residual_fn: F,
    config: &SecantConfig,
) -> FrictionResult<SecantResult>
where
    F: Fn(f64) -> f64,
{
    if !(x0.is_finite() && x0 > 0.0) {
        return Err(FrictionError::Numeric {
            what: format!("Initial guess must be finite and positive, got {}", x0),
        });
    }

    let mut x_prev = x0;
    let mut r_prev = finite_residual(&residual_fn, x_prev)?;
    let mut x = x0 * (1.0 + config.perturbation);
    let mut r = finite_residual(&residual_fn, x)?;

    for iter in 0..config.max_iterations {
        // Check convergence
        if r.abs() < config.abs_tol {
            return Ok(SecantResult {
                x,
                residual: r,
                iterations: iter,
            });
        }

        let denom = r - r_prev;
        if denom == 0.0 {
            return Err(FrictionError::ConvergenceFailed {
                what: format!("Secant slope vanished at iteration {}", iter),
            });
        }

        let mut x_new = x - r * (x - x_prev) / denom;
        if !x_new.is_finite() {
            return Err(FrictionError::Numeric {
                what: format!("Non-finite secant step at iteration {}", iter),
            });
        }

        // Keep the iterate in the positive domain
        if x_new <= 0.0 {
            x_new = 0.5 * x;
        }

        let r_new = finite_residual(&residual_fn, x_new)?;
        let step = (x_new - x).abs();

        x_prev = x;
        r_prev = r;
        x = x_new;
        r = r_new;

        if step <= config.rel_step_tol * x.abs() {
            return Ok(SecantResult {
                x,
                residual: r,
                iterations: iter + 1,
            });
        }
    }

    Err(FrictionError::ConvergenceFailed {
        what: format!(
            "Maximum iterations {} reached, residual = {}",
            config.max_iterations, r
        ),
    })
}

fn finite_residual<F>(residual_fn: &F, x: f64) -> FrictionResult<f64>
where
    F: Fn(f64) -> f64,
{
    let r = residual_fn(x);
    if r.is_finite() {
        Ok(r)
    } else {
        Err(FrictionError::Numeric {
            what: format!("Residual is {} at x = {}", r, x),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_quadratic() {
        // Solve x^2 - 4 = 0, x > 0
        let result = secant_solve(3.0, |x| x * x - 4.0, &SecantConfig::default()).unwrap();
        assert!((result.x - 2.0).abs() < 1e-10);
        assert!(result.iterations > 0);
    }

    #[test]
    fn negative_steps_are_pulled_back() {
        // From x0 = 1 the first secant step lands near x = -4.
        let root = (-5.0_f64).exp();
        let result = secant_solve(1.0, |x| x.ln() + 5.0, &SecantConfig::default()).unwrap();
        assert!(result.x > 0.0);
        assert!((result.x - root).abs() < 1e-9);
    }

    #[test]
    fn zero_iterations_never_converges() {
        let config = SecantConfig {
            max_iterations: 0,
            ..SecantConfig::default()
        };
        let err = secant_solve(3.0, |x| x * x - 4.0, &config).unwrap_err();
        assert!(matches!(err, FrictionError::ConvergenceFailed { .. }));
    }

    #[test]
    fn flat_residual_is_reported() {
        let err = secant_solve(1.0, |_| 1.0, &SecantConfig::default()).unwrap_err();
        assert!(matches!(err, FrictionError::ConvergenceFailed { .. }));
    }

    #[test]
    fn non_finite_residual_is_numeric_error() {
        let err = secant_solve(1.0, |_| f64::NAN, &SecantConfig::default()).unwrap_err();
        assert!(matches!(err, FrictionError::Numeric { .. }));
    }

    #[test]
    fn non_positive_guess_is_rejected() {
        assert!(secant_solve(0.0, |x| x - 1.0, &SecantConfig::default()).is_err());
        assert!(secant_solve(f64::NAN, |x| x - 1.0, &SecantConfig::default()).is_err());
    }
}
