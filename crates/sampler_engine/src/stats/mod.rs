//! Goodness-of-fit statistics.
//!
//! Currently holds the Anderson-Darling statistic against the standard
//! normal distribution.

pub mod anderson_darling;

pub use anderson_darling::AndersonDarling;
