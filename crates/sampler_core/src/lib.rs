//! # sampler_core: Foundation for the Sampling Toolkit
//!
//! ## Layer 1 (Foundation) Role
//!
//! sampler_core serves as the bottom layer of the 3-layer architecture,
//! providing:
//! - Sequence container for multi-dimensional samples (`types::sequence`)
//! - Error types: `SamplerError` (`types::error`)
//! - Seeded random number stream: `SamplerRng` (`rng`)
//! - Prime table resource loader: `PrimeTable` (`primes`)
//! - Standard normal distribution functions (`math::distributions`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other sampler_* crates, with minimal
//! external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - rand / rand_distr: Uniform and normal variate generation
//! - thiserror: Structured error types
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use sampler_core::primes::PrimeTable;
//! use sampler_core::rng::SamplerRng;
//! use sampler_core::math::distributions::norm_cdf;
//!
//! // Load the bundled prime table
//! let table = PrimeTable::bundled().unwrap();
//! assert_eq!(table.get(0), Some(2));
//!
//! // Seeded uniform stream
//! let mut rng = SamplerRng::from_seed(42);
//! let u = rng.gen_uniform();
//! assert!((0.0..1.0).contains(&u));
//!
//! // Distribution functions
//! assert!((norm_cdf(0.0_f64) - 0.5).abs() < 1e-7);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `Sequence`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod primes;
pub mod rng;
pub mod types;

pub use primes::PrimeTable;
pub use rng::SamplerRng;
pub use types::{SamplerError, Sequence};
