//! Sampler CLI - Command Line Operations for the Sampling Toolkit
//!
//! This is the operational entry point for the sampling toolkit.
//!
//! # Commands
//!
//! - `sampler generate` - Generate a sample sequence, optionally
//!   transformed to standard normal, printed as CSV
//! - `sampler fit --input <file>` - Compute the Anderson-Darling statistic
//!   of a one-dimensional sample
//! - `sampler check` - Verify that the bundled prime table loads
//!
//! # Architecture
//!
//! As the service layer of the 3-layer architecture, this crate
//! orchestrates `sampler_core` and `sampler_engine` behind a thin driver;
//! all algorithmic content lives in the lower layers.

use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod error;

pub use error::{CliError, Result};

/// Sampling Toolkit CLI
#[derive(Parser)]
#[command(name = "sampler")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Which sequence source drives generation.
#[derive(Copy, Clone, Debug, ValueEnum)]
enum SamplerKind {
    /// Independent pseudorandom draws
    Uniform,
    /// Halton low-discrepancy sequence
    Halton,
    /// Stratified jittered lattice
    Lattice,
}

/// Optional uniform-to-normal transform.
#[derive(Copy, Clone, Debug, ValueEnum)]
enum TransformKind {
    /// Emit raw uniform coordinates
    None,
    /// Box-Muller polar transform
    BoxMuller,
    /// Beasley-Springer-Moro inverse CDF
    Moro,
}

/// Lattice partition layout.
#[derive(Copy, Clone, Debug, ValueEnum)]
enum LayoutKind {
    /// Mixed bin widths approximating the requested count tightly
    Hyperrectangle,
    /// Equal bin counts in every dimension
    Hypercube,
    /// Let the sampler pick a layout
    Auto,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a sample sequence and print it as CSV rows
    Generate {
        /// Sequence source
        #[arg(short = 'g', long, value_enum, default_value = "uniform")]
        sampler: SamplerKind,

        /// Dimension of each vector
        #[arg(short = 'd', long, default_value = "2")]
        dimension: usize,

        /// Number of vectors
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// Seed for reproducible output; omitted means OS entropy
        #[arg(short, long)]
        seed: Option<u64>,

        /// Transform applied to the uniform sequence
        #[arg(short, long, value_enum, default_value = "none")]
        transform: TransformKind,

        /// Disable the Halton Cranley-Patterson rotation
        #[arg(long)]
        no_shift: bool,

        /// Lattice partition layout
        #[arg(long, value_enum, default_value = "hyperrectangle")]
        layout: LayoutKind,
    },

    /// Compute the Anderson-Darling normality statistic of a sample file
    Fit {
        /// Path to a file of whitespace-separated numbers
        #[arg(short, long)]
        input: String,

        /// Known mean; sample mean is used when omitted
        #[arg(short, long)]
        mean: Option<f64>,
    },

    /// Check that the bundled prime table loads
    Check,
}

fn main() -> Result<()> {
    // Initialise tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Generate {
            sampler,
            dimension,
            count,
            seed,
            transform,
            no_shift,
            layout,
        } => commands::generate::run(sampler, dimension, count, seed, transform, no_shift, layout),
        Commands::Fit { input, mean } => commands::fit::run(&input, mean),
        Commands::Check => commands::check::run(),
    }
}
