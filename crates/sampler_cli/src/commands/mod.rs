//! CLI command implementations.

pub mod check;
pub mod fit;
pub mod generate;
