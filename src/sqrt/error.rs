//! Error types for square root approximation.

use std::fmt;

/// Result type for square root operations.
pub type SqrtResult<T> = Result<T, SqrtError>;

/// Errors that can occur while approximating a square root.
///
/// Offending values are carried as `f64` regardless of the type the solver ran
/// in; they are for diagnostics only.
#[derive(Debug, Clone, PartialEq)]
pub enum SqrtError {
    /// The radicand is negative.
    NegativeInput { value: f64, context: String },

    /// The radicand is NaN or infinite.
    NonFiniteInput { value: f64, context: String },

    /// A guess reached zero (or the quotient overflowed) before `n / guess`.
    DivisionByZero {
        iteration: usize,
        guess: f64,
        context: String,
    },

    /// Successive guesses never became close within the iteration bound.
    DidNotConverge {
        iterations: usize,
        tolerance: f64,
        last_guess: f64,
        context: String,
    },

    /// The observer callback asked the solver to stop.
    Stopped {
        iterations: usize,
        last_guess: f64,
        context: String,
    },

    /// Invalid parameter value.
    InvalidParameter { parameter: String, message: String },
}

impl SqrtError {
    /// Whether the error comes from the input being outside the solver's domain,
    /// as opposed to the iteration itself going wrong.
    pub fn is_domain_error(&self) -> bool {
        matches!(
            self,
            Self::NegativeInput { .. } | Self::NonFiniteInput { .. }
        )
    }
}

impl fmt::Display for SqrtError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeInput { value, context } => {
                write!(
                    f,
                    "{}: math domain error, cannot take the square root of negative value {}",
                    context, value
                )
            }
            Self::NonFiniteInput { value, context } => {
                write!(
                    f,
                    "{}: math domain error, input {} is not finite",
                    context, value
                )
            }
            Self::DivisionByZero {
                iteration,
                guess,
                context,
            } => {
                write!(
                    f,
                    "{}: division by zero at iteration {} (guess: {})",
                    context, iteration, guess
                )
            }
            Self::DidNotConverge {
                iterations,
                tolerance,
                last_guess,
                context,
            } => {
                write!(
                    f,
                    "{}: did not converge after {} iterations (tolerance: {:.2e}, last guess: {})",
                    context, iterations, tolerance, last_guess
                )
            }
            Self::Stopped {
                iterations,
                last_guess,
                context,
            } => {
                write!(
                    f,
                    "{}: stopped by callback after {} iterations (last guess: {})",
                    context, iterations, last_guess
                )
            }
            Self::InvalidParameter { parameter, message } => {
                write!(f, "Invalid parameter '{}': {}", parameter, message)
            }
        }
    }
}

impl std::error::Error for SqrtError {}
