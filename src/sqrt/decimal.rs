//! The same solver in base-10 arithmetic.
//!
//! [`Decimal`] represents values like `0.1` exactly and carries 28 significant
//! digits, so the iteration can be pushed far past what `f64` resolves.
//! Division still rounds, which means the closeness test is still needed to
//! end the iteration.

use rust_decimal::Decimal;

use crate::compare::Tolerance;
use crate::sqrt::error::{SqrtError, SqrtResult};
use crate::sqrt::newton::{RootResult, SqrtOptions, iterate};
use crate::sqrt::trace::{Control, GuessStep};

/// Significant digits a [`Decimal`] can carry.
pub const MAX_DIGITS: u32 = 28;

/// Approximate `sqrt(n)` in decimal arithmetic.
///
/// # Errors
/// Same as [`newton_sqrt`](crate::sqrt::newton_sqrt), except that a decimal is
/// never non-finite. `DivisionByZero` is reported when a guess rounds to zero
/// at the smallest representable scale.
pub fn decimal_sqrt(n: Decimal, options: &SqrtOptions<Decimal>) -> SqrtResult<RootResult<Decimal>> {
    iterate(n, options, |_| Control::Continue, "decimal_sqrt")
}

/// [`decimal_sqrt`] with an observer called once per iteration.
pub fn decimal_sqrt_cb<C>(
    n: Decimal,
    options: &SqrtOptions<Decimal>,
    callback: C,
) -> SqrtResult<RootResult<Decimal>>
where
    C: FnMut(&GuessStep<Decimal>) -> Control,
{
    iterate(n, options, callback, "decimal_sqrt")
}

/// Options that iterate until successive decimal guesses agree to `digits`
/// significant digits.
///
/// # Errors
/// * `InvalidParameter` if `digits` is zero or above 28
pub fn precise_options(digits: u32) -> SqrtResult<SqrtOptions<Decimal>> {
    if digits == 0 || digits > MAX_DIGITS {
        return Err(SqrtError::InvalidParameter {
            parameter: "digits".to_string(),
            message: format!("must be in 1..={}, got {}", MAX_DIGITS, digits),
        });
    }
    let tolerance = Tolerance::relative(Decimal::new(1, digits))?;
    Ok(SqrtOptions::default().with_tolerance(tolerance))
}
