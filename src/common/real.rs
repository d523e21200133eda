//! Scalar value types the solver can iterate over.
//!
//! Binary floats and [`Decimal`] share the `num_traits` arithmetic surface but
//! differ in how they fail: floats produce infinities and NaN, decimals panic
//! on division by zero. [`Real`] papers over that difference so the Newton
//! loop is written once.

use std::fmt::{Debug, Display};

use num_traits::{Float, Num, Signed, ToPrimitive};
use rust_decimal::Decimal;

/// Relative tolerance used when the caller does not pick one.
pub const DEFAULT_REL_TOL: f64 = 1e-9;

/// A real number type the square root solver can work in.
pub trait Real: Num + Signed + ToPrimitive + Copy + PartialOrd + Debug + Display {
    /// Whether the value is neither infinite nor NaN.
    fn is_finite(self) -> bool;

    /// `self / rhs`, or `None` when the quotient is undefined or unrepresentable.
    fn checked_quotient(self, rhs: Self) -> Option<Self>;

    /// `self - rhs`, or `None` when the difference is unrepresentable.
    ///
    /// Floats never fail here; an overflowing difference becomes infinite.
    fn checked_difference(self, rhs: Self) -> Option<Self>;

    /// Default relative tolerance for this type.
    ///
    /// `1e-9`, raised to four units in the last place for types whose
    /// precision cannot resolve it.
    fn default_rel_tol() -> Self;

    fn two() -> Self {
        Self::one() + Self::one()
    }

    /// Lossy conversion for diagnostics. NaN when the value has no `f64` form.
    fn as_f64(self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN)
    }
}

macro_rules! impl_real_for_float {
    ($($t:ty),*) => {$(
        impl Real for $t {
            #[inline]
            fn is_finite(self) -> bool {
                Float::is_finite(self)
            }

            #[inline]
            fn checked_quotient(self, rhs: Self) -> Option<Self> {
                if rhs == 0.0 {
                    return None;
                }
                let q = self / rhs;
                Float::is_finite(q).then_some(q)
            }

            #[inline]
            fn checked_difference(self, rhs: Self) -> Option<Self> {
                Some(self - rhs)
            }

            fn default_rel_tol() -> Self {
                Float::max(DEFAULT_REL_TOL as $t, 4.0 * <$t as Float>::epsilon())
            }
        }
    )*};
}

impl_real_for_float!(f32, f64);

impl Real for Decimal {
    #[inline]
    fn is_finite(self) -> bool {
        true
    }

    #[inline]
    fn checked_quotient(self, rhs: Self) -> Option<Self> {
        self.checked_div(rhs)
    }

    #[inline]
    fn checked_difference(self, rhs: Self) -> Option<Self> {
        self.checked_sub(rhs)
    }

    fn default_rel_tol() -> Self {
        // 1 * 10^-9
        Decimal::new(1, 9)
    }

    fn two() -> Self {
        Decimal::TWO
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_default_rel_tol_f64_is_one_e_minus_nine() {
        assert_eq!(f64::default_rel_tol(), 1e-9);
    }

    #[test]
    fn test_default_rel_tol_f32_floors_at_four_ulps() {
        assert_eq!(f32::default_rel_tol(), 4.0 * f32::EPSILON);
        assert!(f32::default_rel_tol() > 1e-9);
    }

    #[test]
    fn test_default_rel_tol_decimal() {
        assert_eq!(Decimal::default_rel_tol(), dec!(0.000000001));
    }

    #[test]
    fn test_checked_quotient_float() {
        assert_eq!(6.0_f64.checked_quotient(3.0), Some(2.0));
        assert_eq!(1.0_f64.checked_quotient(0.0), None);
        assert_eq!(1.0_f64.checked_quotient(-0.0), None);
        // Overflow to infinity is not a usable quotient either
        assert_eq!(f64::MAX.checked_quotient(0.5), None);
    }

    #[test]
    fn test_checked_quotient_decimal() {
        assert_eq!(dec!(1).checked_quotient(dec!(4)), Some(dec!(0.25)));
        assert_eq!(dec!(1).checked_quotient(Decimal::ZERO), None);
    }

    #[test]
    fn test_checked_difference() {
        assert_eq!(3.0_f64.checked_difference(1.0), Some(2.0));
        assert_eq!(f64::MAX.checked_difference(f64::MIN), Some(f64::INFINITY));
        assert_eq!(dec!(3).checked_difference(dec!(1)), Some(dec!(2)));
        assert_eq!(Decimal::MAX.checked_difference(Decimal::MIN), None);
    }

    #[test]
    fn test_is_finite() {
        assert!(Real::is_finite(1.0_f64));
        assert!(!Real::is_finite(f64::INFINITY));
        assert!(!Real::is_finite(f32::NAN));
        assert!(Real::is_finite(Decimal::MAX));
    }

    #[test]
    fn test_two() {
        assert_eq!(f64::two(), 2.0);
        assert_eq!(f32::two(), 2.0);
        assert_eq!(Decimal::two(), dec!(2));
    }
}
