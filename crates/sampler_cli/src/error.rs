//! CLI error type.

use sampler_core::types::SamplerError;
use thiserror::Error;

/// Errors surfaced by CLI commands.
#[derive(Error, Debug)]
pub enum CliError {
    /// A toolkit operation failed.
    #[error("sampler error: {0}")]
    Sampler(#[from] SamplerError),

    /// Reading an input file failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// An argument value could not be interpreted.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Convenience result alias for CLI commands.
pub type Result<T> = std::result::Result<T, CliError>;
