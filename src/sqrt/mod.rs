//! Square root approximation by successive averaging.
//!
//! # Modules
//!
//! - [`newton`] - Newton's method over any [`Real`](crate::common::Real) type
//! - [`decimal`] - The same iteration in 28-digit decimal arithmetic
//! - [`trace`] - Observer callbacks for the sequence of guesses
//! - [`error`] - Error and result types
//!
//! # Example
//!
//! ```
//! use approx_sqrt::sqrt::{SqrtOptions, newton_sqrt};
//!
//! let result = newton_sqrt(100.0, &SqrtOptions::default().with_trace(true))?;
//! assert_eq!(result.root, 10.0);
//! assert_eq!(result.guesses[0], 50.0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod decimal;
pub mod error;
pub mod newton;
pub mod trace;

pub use decimal::{decimal_sqrt, decimal_sqrt_cb, precise_options};
pub use error::{SqrtError, SqrtResult};
pub use newton::{
    DEFAULT_MAX_ITER, RootResult, SqrtOptions, newton_sqrt, newton_sqrt_cb, sqrt, sqrt_verbose,
};
pub use trace::{Control, GuessStep, emit_guesses};
