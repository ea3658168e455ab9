use crate::PcError;

/// Floating point type used throughout system
pub type Real = f64;

/// Number of decimal digits kept when a property store is finalized.
pub const FINAL_DECIMALS: u32 = 5;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, PcError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(PcError::NonFinite { what, value: v })
    }
}

/// Round to `digits` decimal places, correctly rounded from the exact binary
/// value (`round_to(2.675, 2) == 2.67`).
///
/// Non-finite values pass through unchanged.
pub fn round_to(v: Real, digits: u32) -> Real {
    if !v.is_finite() {
        return v;
    }
    format!("{:.*}", digits as usize, v).parse().unwrap_or(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearly_equal_basic() {
        let tol = Tolerances {
            abs: 1e-12,
            rel: 1e-9,
        };
        assert!(nearly_equal(1.0, 1.0 + 1e-12, tol));
        assert!(nearly_equal(0.0, 1e-13, tol));
        assert!(!nearly_equal(1.0, 1.0 + 1e-6, tol));
    }

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(Real::NAN, "test").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite"));
    }

    #[test]
    fn round_to_five_digits() {
        let tol = Tolerances::default();
        assert!(nearly_equal(round_to(175.0 / 28.97, 5), 6.04073, tol));
        assert!(nearly_equal(round_to(-0.123456, 5), -0.12346, tol));
        assert_eq!(round_to(42.0, 5), 42.0);
    }

    #[test]
    fn round_to_follows_binary_value_not_decimal_text() {
        // Both literals sit just below their decimal midpoint.
        assert_eq!(round_to(0.123455, 5), 0.12345);
        assert_eq!(round_to(2.675, 2), 2.67);
        assert_eq!(round_to(1.0e300, 5), 1.0e300);
    }

    #[test]
    fn round_to_keeps_non_finite() {
        assert!(round_to(Real::NAN, 5).is_nan());
        assert_eq!(round_to(Real::INFINITY, 5), Real::INFINITY);
    }
}
