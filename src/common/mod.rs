//! Common utilities shared across approx-sqrt modules.
//!
//! This module contains the numeric abstraction used by both the closeness
//! predicate ([`crate::compare`]) and the solver ([`crate::sqrt`]).

pub mod real;

pub use real::{DEFAULT_REL_TOL, Real};
