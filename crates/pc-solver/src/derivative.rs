//! Finite difference derivatives of scalar residuals.

use pc_core::Real;

/// Central finite difference with step h = epsilon·max(|x|, 1).
pub fn central_difference<F>(x: Real, f: F, epsilon: Real) -> Real
where
    F: Fn(Real) -> Real,
{
    let dx = epsilon * x.abs().max(1.0);
    (f(x + dx) - f(x - dx)) / (2.0 * dx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derivative_linear() {
        // f(x) = 2*x, f' = 2
        let d = central_difference(3.0, |x| 2.0 * x, 1e-7);
        assert!((d - 2.0).abs() < 1e-5);
    }

    #[test]
    fn derivative_quadratic() {
        // f(x) = x^2, f' = 2*x
        let d = central_difference(3.0, |x| x * x, 1e-7);
        assert!((d - 6.0).abs() < 1e-5);
    }

    #[test]
    fn step_scales_with_magnitude() {
        // f(x) = x^3 at x = 1000, f' = 3e6
        let d = central_difference(1000.0, |x| x * x * x, 1e-7);
        assert!((d - 3.0e6).abs() / 3.0e6 < 1e-6);
    }
}
