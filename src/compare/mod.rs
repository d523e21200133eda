//! Tolerance-based equality for real numbers.
//!
//! Exact `==` is the wrong question to ask of values produced by rounding
//! arithmetic: `0.1 + 0.2 != 0.3`, and a square root computed by iteration will
//! often differ from the correctly rounded one in the last place. This module
//! provides the usual "close enough" predicate instead:
//!
//! ```text
//! |a - b| <= max(rel_tol * max(|a|, |b|), abs_tol)
//! ```
//!
//! # Example
//!
//! ```
//! use approx_sqrt::compare::{Tolerance, is_close};
//!
//! let tol = Tolerance::<f64>::default();
//! assert!(0.1 + 0.2 != 0.3);
//! assert!(is_close(0.1 + 0.2, 0.3, &tol));
//! ```

use std::cmp::Ordering;

use crate::common::Real;
use crate::sqrt::error::{SqrtError, SqrtResult};

/// Relative and absolute bounds for [`is_close`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance<T> {
    /// Maximum difference relative to the larger magnitude of the two operands
    pub rel_tol: T,
    /// Minimum absolute difference always considered close (useful near zero)
    pub abs_tol: T,
}

impl<T: Real> Default for Tolerance<T> {
    fn default() -> Self {
        Self {
            rel_tol: T::default_rel_tol(),
            abs_tol: T::zero(),
        }
    }
}

impl<T: Real> Tolerance<T> {
    /// Create a validated tolerance.
    ///
    /// # Errors
    /// * `InvalidParameter` if either bound is negative or NaN
    /// * `InvalidParameter` if `rel_tol >= 1`
    pub fn new(rel_tol: T, abs_tol: T) -> SqrtResult<Self> {
        let tol = Self { rel_tol, abs_tol };
        tol.validate()?;
        Ok(tol)
    }

    /// Purely relative tolerance (`abs_tol = 0`).
    pub fn relative(rel_tol: T) -> SqrtResult<Self> {
        Self::new(rel_tol, T::zero())
    }

    /// Check the bounds without constructing a new value.
    ///
    /// Struct literals bypass [`Tolerance::new`], so solvers call this before
    /// iterating.
    pub fn validate(&self) -> SqrtResult<()> {
        if !is_non_negative(self.rel_tol) {
            return Err(SqrtError::InvalidParameter {
                parameter: "rel_tol".to_string(),
                message: format!("must be non-negative, got {}", self.rel_tol),
            });
        }
        if self.rel_tol >= T::one() {
            return Err(SqrtError::InvalidParameter {
                parameter: "rel_tol".to_string(),
                message: format!("must be less than 1, got {}", self.rel_tol),
            });
        }
        if !is_non_negative(self.abs_tol) {
            return Err(SqrtError::InvalidParameter {
                parameter: "abs_tol".to_string(),
                message: format!("must be non-negative, got {}", self.abs_tol),
            });
        }
        Ok(())
    }
}

/// False for NaN.
fn is_non_negative<T: Real>(x: T) -> bool {
    matches!(
        x.partial_cmp(&T::zero()),
        Some(Ordering::Greater | Ordering::Equal)
    )
}

/// Whether `a` and `b` are within `tol` of each other.
///
/// Identical values are always close, including equal infinities. Otherwise a
/// NaN or infinite operand is never close to anything. The predicate is
/// symmetric in `a` and `b`.
pub fn is_close<T: Real>(a: T, b: T, tol: &Tolerance<T>) -> bool {
    if a == b {
        return true;
    }
    if !a.is_finite() || !b.is_finite() {
        return false;
    }

    // A difference too large to represent is certainly not within tolerance
    let Some(diff) = a.checked_difference(b) else {
        return false;
    };
    let diff = diff.abs();
    let (abs_a, abs_b) = (a.abs(), b.abs());
    let scale = if abs_a > abs_b { abs_a } else { abs_b };
    // rel_tol < 1, so the product never exceeds the operands' magnitude
    let rel_bound = tol.rel_tol * scale;
    let bound = if rel_bound > tol.abs_tol {
        rel_bound
    } else {
        tol.abs_tol
    };

    diff <= bound
}

/// [`is_close`] with the default tolerance for `T`.
pub fn is_close_default<T: Real>(a: T, b: T) -> bool {
    is_close(a, b, &Tolerance::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    #[test]
    fn test_float_sum_not_exact_but_close() {
        let tol = Tolerance::<f64>::default();
        assert_ne!(0.1 + 0.2, 0.3);
        assert!(is_close(0.1 + 0.2, 0.3, &tol));
    }

    #[test]
    fn test_decimal_sum_exact() {
        // Decimal arithmetic does not need the predicate for this case
        assert_eq!(dec!(0.1) + dec!(0.2), dec!(0.3));
        assert!(is_close_default(dec!(0.1) + dec!(0.2), dec!(0.3)));
    }

    #[test]
    fn test_relative_bound() {
        let tol = Tolerance::relative(1e-9).expect("valid tolerance");
        assert!(is_close(1e10, 1e10 + 1.0, &tol));
        assert!(!is_close(1.0, 1.0 + 1e-8, &tol));
    }

    #[test]
    fn test_zero_only_close_to_zero_without_abs_tol() {
        let tol = Tolerance::<f64>::default();
        assert!(is_close(0.0, 0.0, &tol));
        assert!(is_close(0.0, -0.0, &tol));
        assert!(!is_close(0.0, 1e-300, &tol));
    }

    #[test]
    fn test_abs_tol_near_zero() {
        let tol = Tolerance::new(1e-9, 1e-12).expect("valid tolerance");
        assert!(is_close(0.0, 1e-13, &tol));
        assert!(!is_close(0.0, 1e-11, &tol));
    }

    #[test]
    fn test_non_finite() {
        let tol = Tolerance::<f64>::default();
        assert!(is_close(f64::INFINITY, f64::INFINITY, &tol));
        assert!(!is_close(f64::INFINITY, f64::NEG_INFINITY, &tol));
        assert!(!is_close(f64::INFINITY, f64::MAX, &tol));
        assert!(!is_close(f64::NAN, f64::NAN, &tol));
        assert!(!is_close(f64::NAN, 1.0, &tol));
    }

    #[test]
    fn test_f32_default_tolerance() {
        let tol = Tolerance::<f32>::default();
        let next_up = f32::from_bits(1.0_f32.to_bits() + 1);
        assert!(is_close(1.0_f32, next_up, &tol));
        assert!(!is_close(1.0_f32, 1.001, &tol));
    }

    #[test]
    fn test_decimal_relative_bound() {
        let tol = Tolerance::<Decimal>::default();
        assert!(is_close(dec!(3.1622776601), dec!(3.16227766016838), &tol));
        assert!(!is_close(dec!(3.16), dec!(3.17), &tol));
    }

    #[test]
    fn test_decimal_extremes_are_not_close() {
        assert!(!is_close_default(Decimal::MAX, Decimal::MIN));
        assert!(!is_close_default(Decimal::MIN, Decimal::MAX));
        assert!(is_close_default(Decimal::MAX, Decimal::MAX));

        let tol = Tolerance::new(dec!(0.5), Decimal::MAX).expect("valid tolerance");
        assert!(!is_close(Decimal::MAX, Decimal::MIN, &tol));
    }

    #[test]
    fn test_float_extremes_are_not_close() {
        assert!(!is_close_default(f64::MAX, f64::MIN));
        let tol = Tolerance::new(0.5, f64::MAX).expect("valid tolerance");
        assert!(!is_close(f64::MAX, f64::MIN, &tol));
    }

    #[test]
    fn test_invalid_tolerances() {
        let result = Tolerance::new(-1e-9, 0.0);
        assert!(matches!(result, Err(SqrtError::InvalidParameter { .. })));

        let result = Tolerance::new(1.0, 0.0);
        assert!(matches!(result, Err(SqrtError::InvalidParameter { .. })));

        let result = Tolerance::new(f64::NAN, 0.0);
        assert!(matches!(result, Err(SqrtError::InvalidParameter { .. })));

        let result = Tolerance::new(1e-9, -1.0);
        assert!(matches!(
            result,
            Err(SqrtError::InvalidParameter { ref parameter, .. }) if parameter == "abs_tol"
        ));

        let result = Tolerance::new(dec!(-0.1), Decimal::ZERO);
        assert!(matches!(result, Err(SqrtError::InvalidParameter { .. })));
    }

    proptest! {
        #[test]
        fn is_close_is_reflexive(a in proptest::num::f64::NORMAL | proptest::num::f64::ZERO) {
            prop_assert!(is_close_default(a, a));
        }

        #[test]
        fn is_close_is_symmetric(
            a in -1e6f64..1e6,
            b in -1e6f64..1e6,
            rel in 0.0f64..0.5,
            abs in 0.0f64..1.0,
        ) {
            let tol = Tolerance::new(rel, abs).unwrap();
            prop_assert_eq!(is_close(a, b, &tol), is_close(b, a, &tol));
        }

        #[test]
        fn is_close_accepts_one_ulp_apart(a in 1e-100f64..1e100) {
            let next = f64::from_bits(a.to_bits() + 1);
            prop_assert!(is_close_default(a, next));
        }
    }
}
