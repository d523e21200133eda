//! Square roots by Newton's method (Heron's successive averaging).
//!
//! Starting from `n / 2`, each iteration replaces the guess with the mean of the
//! guess and `n / guess`. Iteration stops once two successive guesses are
//! [close](crate::compare::is_close); the later one is returned.

use tracing::{debug, trace, warn};

use crate::common::Real;
use crate::compare::{Tolerance, is_close};
use crate::sqrt::error::{SqrtError, SqrtResult};
use crate::sqrt::trace::{Control, GuessStep};

/// Iteration bound used when the caller does not pick one.
///
/// Convergence is quadratic near the root, but for radicands far from 1 the
/// starting guess `n / 2` is off by many binades and the early iterations only
/// halve (or double) it. The extremes of `f64` need a little over 540 steps.
pub const DEFAULT_MAX_ITER: usize = 1000;

/// Options for the square root solver.
#[derive(Debug, Clone, PartialEq)]
pub struct SqrtOptions<T> {
    /// Maximum number of iterations
    pub max_iter: usize,
    /// Closeness test applied to successive guesses
    pub tolerance: Tolerance<T>,
    /// Keep every guess in [`RootResult::guesses`]
    pub record_trace: bool,
}

impl<T: Real> Default for SqrtOptions<T> {
    fn default() -> Self {
        Self {
            max_iter: DEFAULT_MAX_ITER,
            tolerance: Tolerance::default(),
            record_trace: false,
        }
    }
}

impl<T: Real> SqrtOptions<T> {
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    pub fn with_tolerance(mut self, tolerance: Tolerance<T>) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn with_trace(mut self, record_trace: bool) -> Self {
        self.record_trace = record_trace;
        self
    }

    /// # Errors
    /// * `InvalidParameter` if `max_iter` is zero or the tolerance is invalid
    pub fn validate(&self) -> SqrtResult<()> {
        if self.max_iter == 0 {
            return Err(SqrtError::InvalidParameter {
                parameter: "max_iter".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        self.tolerance.validate()
    }
}

/// Result from the square root solver.
#[derive(Debug, Clone, PartialEq)]
pub struct RootResult<T> {
    /// The approximated square root
    pub root: T,
    /// Number of iterations used (zero for a zero radicand)
    pub iterations: usize,
    /// Successive guesses, first to last, if tracing was requested.
    /// The returned `root` is not repeated here.
    pub guesses: Vec<T>,
}

/// Approximate `sqrt(n)` by Newton's method.
///
/// # Arguments
/// * `n` - Radicand
/// * `options` - Solver options
///
/// # Returns
/// A root `r` with `r * r` close to `n`
///
/// # Errors
/// * `InvalidParameter` if `options` fail validation
/// * `NonFiniteInput` if `n` is NaN or infinite
/// * `NegativeInput` if `n < 0`
/// * `DivisionByZero` if a guess underflows to zero
/// * `DidNotConverge` if iterations exceed `max_iter`
///
/// # Note
/// A zero radicand returns itself (sign included) without iterating.
pub fn newton_sqrt<T: Real>(n: T, options: &SqrtOptions<T>) -> SqrtResult<RootResult<T>> {
    iterate(n, options, |_| Control::Continue, "newton_sqrt")
}

/// [`newton_sqrt`] with an observer called once per iteration.
///
/// The callback receives every guess in order, before the solver moves on to
/// its successor. Returning [`Control::Stop`] from a non-final step ends the
/// iteration with `SqrtError::Stopped`.
pub fn newton_sqrt_cb<T, C>(n: T, options: &SqrtOptions<T>, callback: C) -> SqrtResult<RootResult<T>>
where
    T: Real,
    C: FnMut(&GuessStep<T>) -> Control,
{
    iterate(n, options, callback, "newton_sqrt")
}

/// `sqrt(n)` with default options.
pub fn sqrt(n: f64) -> SqrtResult<f64> {
    newton_sqrt(n, &SqrtOptions::default()).map(|r| r.root)
}

/// `sqrt(n)` with default options and the guess trace recorded.
pub fn sqrt_verbose(n: f64) -> SqrtResult<RootResult<f64>> {
    newton_sqrt(n, &SqrtOptions::default().with_trace(true))
}

pub(crate) fn iterate<T, C>(
    n: T,
    options: &SqrtOptions<T>,
    mut callback: C,
    context: &str,
) -> SqrtResult<RootResult<T>>
where
    T: Real,
    C: FnMut(&GuessStep<T>) -> Control,
{
    options.validate()?;

    if !n.is_finite() {
        return Err(SqrtError::NonFiniteInput {
            value: n.as_f64(),
            context: context.to_string(),
        });
    }
    if n.is_zero() {
        return Ok(RootResult {
            root: n,
            iterations: 0,
            guesses: Vec::new(),
        });
    }
    if n.is_negative() {
        return Err(SqrtError::NegativeInput {
            value: n.as_f64(),
            context: context.to_string(),
        });
    }

    let two = T::two();
    let mut guess = n / two;
    let mut guesses = Vec::new();

    for iter in 0..options.max_iter {
        // A failed division still reports the guess that entered it
        let better_guess = n.checked_quotient(guess).map(|q| (guess + q) / two);
        let converged =
            better_guess.is_some_and(|better| is_close(guess, better, &options.tolerance));

        trace!(iteration = iter, %guess, ?better_guess, converged, "{}", context);

        if options.record_trace {
            guesses.push(guess);
        }

        let control = callback(&GuessStep {
            iteration: iter,
            guess,
            better_guess,
            converged,
        });

        let Some(better_guess) = better_guess else {
            return Err(SqrtError::DivisionByZero {
                iteration: iter,
                guess: guess.as_f64(),
                context: context.to_string(),
            });
        };

        if converged {
            debug!(iterations = iter + 1, root = %better_guess, "{}: converged", context);
            return Ok(RootResult {
                root: better_guess,
                iterations: iter + 1,
                guesses,
            });
        }

        if control == Control::Stop {
            return Err(SqrtError::Stopped {
                iterations: iter + 1,
                last_guess: better_guess.as_f64(),
                context: context.to_string(),
            });
        }

        guess = better_guess;
    }

    warn!(
        max_iter = options.max_iter,
        last_guess = %guess,
        "{}: iteration bound reached",
        context
    );

    Err(SqrtError::DidNotConverge {
        iterations: options.max_iter,
        tolerance: options.tolerance.rel_tol.as_f64(),
        last_guess: guess.as_f64(),
        context: context.to_string(),
    })
}
