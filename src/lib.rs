//! Newton's-method square roots and tolerance-based comparison of reals.
//!
//! Floating-point results are rarely bit-exact, so the square root solver here
//! decides convergence with a closeness predicate instead of `==`. The solver
//! runs over `f32`, `f64` or [`rust_decimal::Decimal`].
//!
//! - [`compare`] - The closeness predicate and its [`Tolerance`]
//! - [`sqrt`] - The iterative solver, its options, trace hooks and errors
//! - [`common`] - The [`Real`] abstraction shared by both
//!
//! ```
//! use approx_sqrt::{is_close_default, sqrt};
//!
//! let root = sqrt(10.0)?;
//! assert_ne!(root, 10.0_f64.sqrt());
//! assert!(is_close_default(root, 10.0_f64.sqrt()));
//! # Ok::<(), approx_sqrt::SqrtError>(())
//! ```

pub mod common;
pub mod compare;
pub mod sqrt;

pub use common::Real;
pub use compare::{Tolerance, is_close, is_close_default};
pub use sqrt::{
    Control, GuessStep, RootResult, SqrtError, SqrtOptions, SqrtResult, decimal_sqrt,
    newton_sqrt, newton_sqrt_cb, sqrt, sqrt_verbose,
};
