//! Row-parallel LCS scoring.
//!
//! The textbook recurrence needs `dp[i][j - 1]` when the symbols differ,
//! which serialises every row. With the last-occurrence table over the
//! column ("reference") sequence the mismatch case becomes
//!
//! ```text
//! dp[i][j] = dp[i-1][j]                               if x never occurs in ref[..j]
//! dp[i][j] = max(dp[i-1][j], dp[i-1][p-1] + 1)        if x last occurs at p <= j
//! ```
//!
//! where `x` is the row symbol. Every term lives in row `i - 1`, so all cells
//! of row `i` are evaluated concurrently; the join at the end of each row is
//! the only synchronisation.

use std::sync::Arc;

use rayon::prelude::*;
use rayon::ThreadPool;

use crate::alphabet::Alphabet;
use crate::builder::ParallelScorerBuilder;
use crate::error::{Phase, Result};
use crate::matrix::{DpMatrix, Score, ScoreMatrix};
use crate::occurrence::{Occurrence, OccurrenceTable};
use crate::scoring::check_lengths;
use crate::traits::LcsScorer;
use crate::utils::default_min_row_chunk;

/// Which input supplies the occurrence table (and the matrix columns).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReferenceChoice {
    /// The shorter input; ties go to the first. Gives the smallest table.
    #[default]
    Shorter,
    First,
    Second,
}

impl ReferenceChoice {
    /// Split `(a, b)` into `(reference, other)`.
    pub fn resolve<'s>(self, a: &'s [u8], b: &'s [u8]) -> (&'s [u8], &'s [u8]) {
        match self {
            ReferenceChoice::First => (a, b),
            ReferenceChoice::Second => (b, a),
            ReferenceChoice::Shorter if b.len() < a.len() => (b, a),
            ReferenceChoice::Shorter => (a, b),
        }
    }
}

impl std::str::FromStr for ReferenceChoice {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "shorter" => Ok(Self::Shorter),
            "first" | "a" => Ok(Self::First),
            "second" | "b" => Ok(Self::Second),
            other => Err(format!("unknown reference choice '{other}'")),
        }
    }
}

/// Row-parallel scorer.
///
/// The filled matrix has the reference sequence along the columns and the
/// other sequence along the rows; with [`ReferenceChoice::First`] this is the
/// same orientation as [`SequentialScorer`](crate::SequentialScorer).
#[derive(Clone, Default)]
pub struct ParallelScorer {
    pool: Option<Arc<ThreadPool>>,
    reference: ReferenceChoice,
    min_row_chunk: Option<usize>,
}

impl ParallelScorer {
    /// Scorer on the global rayon pool with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> ParallelScorerBuilder {
        ParallelScorerBuilder::new()
    }

    pub(crate) fn from_parts(
        pool: Option<Arc<ThreadPool>>,
        reference: ReferenceChoice,
        min_row_chunk: Option<usize>,
    ) -> Self {
        Self {
            pool,
            reference,
            min_row_chunk,
        }
    }

    /// Number of workers rows are spread over.
    pub fn threads(&self) -> usize {
        match &self.pool {
            Some(pool) => pool.current_num_threads(),
            None => rayon::current_num_threads(),
        }
    }

    pub fn reference_choice(&self) -> ReferenceChoice {
        self.reference
    }

    fn install<R, F>(&self, op: F) -> R
    where
        F: FnOnce() -> R + Send,
        R: Send,
    {
        match &self.pool {
            Some(pool) => pool.install(op),
            None => op(),
        }
    }
}

impl std::fmt::Debug for ParallelScorer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParallelScorer")
            .field("threads", &self.threads())
            .field("reference", &self.reference)
            .field("min_row_chunk", &self.min_row_chunk)
            .finish()
    }
}

impl LcsScorer for ParallelScorer {
    fn name(&self) -> &'static str {
        "parallel"
    }

    fn fill(&self, a: &[u8], b: &[u8]) -> Result<ScoreMatrix> {
        check_lengths(a, b)?;
        let (reference, other) = self.reference.resolve(a, b);
        let threads = self.threads();
        let min_chunk = self
            .min_row_chunk
            .unwrap_or_else(|| default_min_row_chunk(reference.len(), threads));

        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "lcs_parallel",
            scorer = self.name(),
            rows = other.len(),
            cols = reference.len(),
            threads,
            min_chunk
        )
        .entered();

        let dp = self.install(|| fill_rows(a, b, reference, other, min_chunk))?;

        #[cfg(feature = "tracing")]
        tracing::debug!(score = dp.terminal(), "parallel fill done");
        Ok(dp)
    }
}

/// Fill the `(|other| + 1) x (|reference| + 1)` matrix on the current pool.
fn fill_rows(
    a: &[u8],
    b: &[u8],
    reference: &[u8],
    other: &[u8],
    min_chunk: usize,
) -> Result<ScoreMatrix> {
    let mut dp: ScoreMatrix =
        DpMatrix::try_zeroed(other.len() + 1, reference.len() + 1, Phase::Scoring)?;
    if reference.is_empty() || other.is_empty() {
        return Ok(dp);
    }

    let alphabet = Alphabet::from_pair(a, b)?;
    let table = OccurrenceTable::build(reference, &alphabet)?;

    for i in 1..=other.len() {
        let x = other[i - 1];
        let last_seen = table.row(alphabet.require(x)?);
        let (prev, cur) = dp.split_rows(i);
        cur[1..]
            .par_iter_mut()
            .enumerate()
            .with_min_len(min_chunk)
            .for_each(|(k, cell)| {
                let j = k + 1;
                *cell = cell_value(prev, last_seen, reference[j - 1] == x, j);
            });

        #[cfg(feature = "tracing")]
        tracing::trace!(row = i, value = cur[reference.len()], "row done");
    }
    Ok(dp)
}

/// Value of cell `j` in the current row, from the previous row only.
#[inline]
fn cell_value(prev: &[Score], last_seen: &[u32], is_match: bool, j: usize) -> Score {
    if is_match {
        return prev[j - 1] + 1;
    }
    match Occurrence::from_raw(last_seen[j]) {
        Occurrence::Never => prev[j],
        Occurrence::At(p) => prev[j].max(prev[p - 1] + 1),
    }
}
