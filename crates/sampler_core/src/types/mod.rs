//! Core value types shared across the toolkit.
//!
//! This module provides:
//! - [`Sequence`]: an ordered list of fixed-dimension sample vectors
//! - [`SamplerError`]: structured errors for every failure mode in the toolkit

pub mod error;
pub mod sequence;

pub use error::SamplerError;
pub use sequence::Sequence;
