//! # sampler_engine: Sequence Generation and Validation Engine
//!
//! ## Layer 2 (Engine) Role
//!
//! sampler_engine builds on `sampler_core` to provide:
//! - Sequence generators (`sequences`): pseudorandom, Halton
//!   low-discrepancy, and stratified-lattice sampling of the unit
//!   hypercube
//! - Normal transforms (`transforms`): Box-Muller and
//!   Beasley-Springer-Moro, turning uniform sequences into approximately
//!   standard-normal ones
//! - Goodness-of-fit statistics (`stats`): the Anderson-Darling statistic
//!   against the normal distribution
//!
//! Data flows one way: a sequence source, then an optional transform, then
//! an optional validator. Every operation is synchronous and pure given its
//! inputs and the injected random stream.
//!
//! ## Usage Example
//!
//! ```rust
//! use sampler_core::rng::SamplerRng;
//! use sampler_engine::sequences::{SequenceSource, UniformSampler};
//! use sampler_engine::transforms::box_muller;
//! use sampler_engine::stats::anderson_darling;
//!
//! let mut rng = SamplerRng::from_seed(42);
//! let normals = box_muller::transform_sequence(&UniformSampler, 1, 500, &mut rng).unwrap();
//! let fit = anderson_darling::compute(&normals.column(0), None).unwrap();
//! assert!(fit.statistic.is_finite());
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod sequences;
pub mod stats;
pub mod transforms;

pub use sequences::{HaltonSampler, LatticeSampler, Layout, SequenceSource, UniformSampler};
