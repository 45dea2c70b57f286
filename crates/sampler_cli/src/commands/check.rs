//! `sampler check` - verify the bundled prime table resource.

use sampler_core::primes::PrimeTable;

use crate::Result;

/// Loads the bundled prime table and reports its size and range.
pub fn run() -> Result<()> {
    let table = PrimeTable::bundled()?;
    let last = table.get(table.len() - 1).unwrap_or(0);

    println!("prime table: {} entries", table.len());
    println!("first: {:?}", table.first(5)?);
    println!("last: {}", last);
    println!("ok");

    Ok(())
}
