//! # Random Number Stream
//!
//! This module provides the uniform random stream consumed by every
//! generator in the toolkit.
//!
//! ## Design Rationale
//!
//! - **Injectable**: generators take `&mut SamplerRng` rather than reading
//!   ambient global state, so tests can supply a deterministic stream.
//! - **Reproducibility**: the same seed produces the same downstream
//!   sequences for every generator.
//! - **Static dispatch**: no `Box<dyn Trait>` in generation paths.
//!
//! ## Usage Example
//!
//! ```rust
//! use sampler_core::rng::SamplerRng;
//!
//! // Seeded stream for reproducible generation
//! let mut rng = SamplerRng::from_seed(12345);
//! let u = rng.gen_uniform();
//! assert!((0.0..1.0).contains(&u));
//!
//! // Batch generation into a pre-allocated buffer
//! let mut buffer = vec![0.0; 100];
//! rng.fill_uniform(&mut buffer);
//! ```

mod prng;

pub use prng::SamplerRng;
