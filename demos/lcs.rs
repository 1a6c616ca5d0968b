//! Example: score a pair with both scorers and dump the matrices.
//!
//! Run with:
//! `cargo run --example lcs`

use plcs::debug::{MatrixDump, OccurrenceDump};
use plcs::{Alphabet, LcsScorer, OccurrenceTable, ParallelScorer, SequentialScorer};

fn main() -> plcs::Result<()> {
    let a = b"ABCBDAB";
    let b = b"BDCABA";

    let scorer = ParallelScorer::builder().threads(2).build()?;
    let (reference, other) = scorer.reference_choice().resolve(a, b);

    let alphabet = Alphabet::from_pair(a, b)?;
    let table = OccurrenceTable::build(reference, &alphabet)?;
    println!("{}", OccurrenceDump::new(&table, &alphabet, reference));

    let parallel = scorer.fill(a, b)?;
    println!("{}", MatrixDump::new(&parallel, reference, other));

    let sequential = SequentialScorer.score(a, b)?;
    println!("LCS length: {} (sequential: {sequential})", parallel.terminal());
    Ok(())
}
