//! `sampler generate` - sequence generation to CSV.

use std::io::{BufWriter, Write};

use tracing::info;

use sampler_core::primes::PrimeTable;
use sampler_core::rng::SamplerRng;
use sampler_core::types::Sequence;
use sampler_engine::sequences::{
    HaltonSampler, LatticeSampler, Layout, SequenceSource, UniformSampler,
};
use sampler_engine::transforms::{box_muller, moro};

use crate::{LayoutKind, Result, SamplerKind, TransformKind};

/// Runs the generate command and prints the sequence as CSV rows.
pub fn run(
    sampler: SamplerKind,
    dimension: usize,
    count: usize,
    seed: Option<u64>,
    transform: TransformKind,
    no_shift: bool,
    layout: LayoutKind,
) -> Result<()> {
    let mut rng = match seed {
        Some(seed) => SamplerRng::from_seed(seed),
        None => SamplerRng::from_entropy(),
    };

    let source: Box<dyn SequenceSource> = match sampler {
        SamplerKind::Uniform => Box::new(UniformSampler),
        SamplerKind::Halton => {
            let table = PrimeTable::bundled()?;
            Box::new(HaltonSampler::new(table).with_shift(!no_shift))
        }
        SamplerKind::Lattice => {
            let layout = match layout {
                LayoutKind::Hyperrectangle => Layout::Hyperrectangle,
                LayoutKind::Hypercube => Layout::Hypercube,
                LayoutKind::Auto => Layout::Auto,
            };
            Box::new(LatticeSampler::new().with_layout(layout))
        }
    };

    info!(
        ?seed,
        dimension, count, "generating {:?} sequence with {:?} transform", sampler, transform
    );

    let sequence: Sequence = match transform {
        TransformKind::None => source.generate(dimension, count, &mut rng)?,
        TransformKind::BoxMuller => {
            box_muller::transform_sequence(source.as_ref(), dimension, count, &mut rng)?
        }
        TransformKind::Moro => {
            moro::transform_sequence(source.as_ref(), dimension, count, &mut rng)?
        }
    };

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for point in &sequence {
        let row: Vec<String> = point.iter().map(|c| format!("{:.17}", c)).collect();
        writeln!(out, "{}", row.join(","))?;
    }
    out.flush()?;

    Ok(())
}
