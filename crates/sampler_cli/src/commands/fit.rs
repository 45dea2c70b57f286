//! `sampler fit` - Anderson-Darling normality check on a sample file.

use std::fs;

use tracing::info;

use sampler_engine::stats::anderson_darling;

use crate::{CliError, Result};

/// Conventional critical values printed for context: (significance %,
/// critical value). Interpretation is left to the user; the statistic
/// itself enforces nothing.
const CRITICAL_VALUES: [(f64, f64); 4] = [
    (10.0, 1.760),
    (5.0, 2.323),
    (2.5, 2.904),
    (1.0, 3.690),
];

/// Runs the fit command: parse the sample file, compute the statistic,
/// print it with reference critical values.
pub fn run(input: &str, mean: Option<f64>) -> Result<()> {
    let text = fs::read_to_string(input)?;

    let mut sample = Vec::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        for token in line.split(|c: char| c.is_whitespace() || c == ',') {
            if token.is_empty() {
                continue;
            }
            let value: f64 = token.parse().map_err(|_| {
                CliError::InvalidArgument(format!("'{}' in {} is not a number", token, input))
            })?;
            sample.push(value);
        }
    }

    info!(observations = sample.len(), ?mean, "computing fit statistic");
    let fit = anderson_darling::compute(&sample, mean)?;

    println!("Anderson-Darling A = {:.6} (N = {})", fit.statistic, fit.sample_size);
    println!("Reference critical values (significance: value):");
    for (significance, critical) in CRITICAL_VALUES {
        println!("  {:>4}%: {:.3}", significance, critical);
    }

    Ok(())
}
