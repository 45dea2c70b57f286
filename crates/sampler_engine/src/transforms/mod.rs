//! Uniform-to-normal transforms.
//!
//! Two methods turn a uniform sequence from any [`SequenceSource`] into an
//! approximately standard-normal one:
//! - [`box_muller`]: polar reparametrisation of uniform pairs
//! - [`moro`]: Beasley-Springer-Moro rational approximation to the inverse
//!   normal CDF, applied per coordinate
//!
//! [`SequenceSource`]: crate::sequences::SequenceSource

pub mod box_muller;
pub mod moro;
