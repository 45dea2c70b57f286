//! Mathematical building blocks.
//!
//! Currently holds the standard normal distribution functions used by the
//! goodness-of-fit statistics.

pub mod distributions;
