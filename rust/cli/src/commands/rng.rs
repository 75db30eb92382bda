//! RNG determinism check.
//!
//! Prints a short sample from the seeded ChaCha20 generator so two runs
//! with the same seed can be compared by eye or by diff.

use crate::error::CliError;
use rand::{RngCore, SeedableRng};
use std::io::Write;

pub fn handle_rng_command(seed: Option<u64>, out: &mut dyn Write) -> Result<(), CliError> {
    let s = seed.unwrap_or_else(rand::random);
    let mut rng = rand_chacha::ChaCha20Rng::seed_from_u64(s);
    let mut vals = vec![];
    for _ in 0..5 {
        vals.push(rng.next_u64());
    }
    writeln!(out, "RNG sample (seed {}): {:?}", s, vals)?;
    Ok(())
}
