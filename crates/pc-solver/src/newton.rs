//! Scalar Newton-Raphson root finding.

use pc_core::Real;

use crate::derivative::central_difference;
use crate::error::{SolverError, SolverResult};

/// Newton solver configuration.
#[derive(Debug, Clone, Copy)]
pub struct NewtonConfig {
    /// Maximum iterations
    pub max_iterations: usize,
    /// Absolute tolerance on the Newton step
    pub step_tol: Real,
    /// Residual magnitude accepted as an exact root
    pub residual_tol: Real,
    /// Relative step for the finite difference derivative
    pub fd_epsilon: Real,
    /// Step shrink factor while the trial residual is non-finite
    pub backtrack_factor: Real,
    /// Maximum step halvings per iteration
    pub max_backtracks: usize,
}

impl Default for NewtonConfig {
    fn default() -> Self {
        Self {
            max_iterations: 50,
            step_tol: 1.48e-8,
            residual_tol: 0.0,
            fd_epsilon: 1e-7,
            backtrack_factor: 0.5,
            max_backtracks: 20,
        }
    }
}

/// Newton iteration result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewtonResult {
    /// Root
    pub x: Real,
    /// Residual at the root
    pub residual: Real,
    /// Number of iterations
    pub iterations: usize,
}

/// Solve `f(x) = 0` from `x0`, differentiating `f` numerically.
pub fn newton_solve<F>(x0: Real, f: F, config: &NewtonConfig) -> SolverResult<NewtonResult>
where
    F: Fn(Real) -> Real,
{
    let eps = config.fd_epsilon;
    newton_solve_with_derivative(x0, &f, |x| central_difference(x, &f, eps), config)
}

/// Solve `f(x) = 0` from `x0` with a supplied derivative.
///
/// A full step that lands outside the residual's domain is shortened until the
/// residual is finite again.
pub fn newton_solve_with_derivative<F, D>(
    x0: Real,
    f: F,
    df: D,
    config: &NewtonConfig,
) -> SolverResult<NewtonResult>
where
    F: Fn(Real) -> Real,
    D: Fn(Real) -> Real,
{
    let mut x = x0;

    for iter in 0..config.max_iterations {
        let fx = f(x);
        if !fx.is_finite() {
            return Err(SolverError::NonFinite { what: "residual", x });
        }
        if fx.abs() <= config.residual_tol {
            return Ok(NewtonResult {
                x,
                residual: fx,
                iterations: iter,
            });
        }

        let dfx = df(x);
        if !dfx.is_finite() {
            return Err(SolverError::NonFinite {
                what: "derivative",
                x,
            });
        }
        if dfx == 0.0 {
            return Err(SolverError::ZeroDerivative { x });
        }

        let dx = -fx / dfx;
        let mut alpha = 1.0;
        let mut x_new = x + dx;
        let mut f_new = f(x_new);
        for _ in 0..config.max_backtracks {
            if f_new.is_finite() {
                break;
            }
            alpha *= config.backtrack_factor;
            x_new = x + alpha * dx;
            f_new = f(x_new);
        }
        if !f_new.is_finite() {
            return Err(SolverError::NonFinite {
                what: "residual",
                x: x_new,
            });
        }

        if (x_new - x).abs() <= config.step_tol {
            return Ok(NewtonResult {
                x: x_new,
                residual: f_new,
                iterations: iter + 1,
            });
        }
        x = x_new;
    }

    Err(SolverError::ConvergenceFailed {
        what: format!(
            "Maximum iterations {} reached, x = {}",
            config.max_iterations, x
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_quadratic() {
        // Solve x^2 - 4 = 0 from x0 = 3
        let result = newton_solve(3.0, |x| x * x - 4.0, &NewtonConfig::default()).unwrap();
        assert!((result.x - 2.0).abs() < 1e-9);
        assert!(result.iterations > 0);
    }

    #[test]
    fn analytic_derivative() {
        let result = newton_solve_with_derivative(
            3.0,
            |x| x * x - 4.0,
            |x| 2.0 * x,
            &NewtonConfig::default(),
        )
        .unwrap();
        assert!((result.x - 2.0).abs() < 1e-9);
    }

    #[test]
    fn linear_converges_in_two_steps() {
        let result = newton_solve(0.0, |x| 5.0 - x, &NewtonConfig::default()).unwrap();
        assert!((result.x - 5.0).abs() < 1e-9);
        assert!(result.iterations <= 2);
    }

    #[test]
    fn flat_residual_is_zero_derivative() {
        let err = newton_solve(1.0, |_| 1.0, &NewtonConfig::default()).unwrap_err();
        assert_eq!(err, SolverError::ZeroDerivative { x: 1.0 });
    }

    #[test]
    fn no_real_root_hits_iteration_cap() {
        // x^2 + 1 has no real root; Newton wanders without converging
        let config = NewtonConfig {
            max_iterations: 20,
            ..Default::default()
        };
        let err = newton_solve_with_derivative(0.5, |x| x * x + 1.0, |x| 2.0 * x, &config)
            .unwrap_err();
        assert!(matches!(
            err,
            SolverError::ConvergenceFailed { .. } | SolverError::ZeroDerivative { .. }
        ));
    }

    #[test]
    fn step_past_log_singularity_is_shortened() {
        // ln(10 - x) is undefined beyond 10; the first full step from 0 lands near 14
        let f = |x: Real| (10.0 - x).ln() + 2.0 - 0.2 * x;
        let result = newton_solve_with_derivative(
            0.0,
            f,
            |x| -1.0 / (10.0 - x) - 0.2,
            &NewtonConfig::default(),
        )
        .unwrap();
        assert!(result.x < 10.0);
        assert!(f(result.x).abs() < 1e-9);
    }

    #[test]
    fn no_finite_trial_point_is_reported() {
        let config = NewtonConfig {
            max_backtracks: 3,
            ..Default::default()
        };
        // Every trial point from 1 lies below 0.999, where the residual is NaN
        let err = newton_solve_with_derivative(
            1.0,
            |x: Real| if x < 0.999 { Real::NAN } else { x },
            |_| 1.0,
            &config,
        )
        .unwrap_err();
        assert!(matches!(err, SolverError::NonFinite { what: "residual", .. }));
    }

    #[test]
    fn nan_residual_is_reported() {
        let err = newton_solve(-1.0, |x: Real| x.sqrt(), &NewtonConfig::default()).unwrap_err();
        assert!(matches!(err, SolverError::NonFinite { what: "residual", .. }));
    }
}
