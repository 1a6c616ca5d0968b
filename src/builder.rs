use std::sync::Arc;

use rayon::ThreadPoolBuilder;

use crate::error::{LcsError, Phase, Result};
use crate::scoring::parallel::{ParallelScorer, ReferenceChoice};

/// Configures a [`ParallelScorer`].
///
/// ```
/// use plcs::{LcsScorer, ParallelScorer, ReferenceChoice};
///
/// let scorer = ParallelScorer::builder()
///     .threads(2)
///     .reference(ReferenceChoice::First)
///     .build()
///     .unwrap();
/// assert_eq!(scorer.score(b"AGCAT", b"GAC").unwrap(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ParallelScorerBuilder {
    threads: Option<usize>,
    reference: ReferenceChoice,
    min_row_chunk: Option<usize>,
}

impl ParallelScorerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run on a dedicated pool of `threads` workers instead of the global
    /// rayon pool.
    pub fn threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    pub fn reference(mut self, reference: ReferenceChoice) -> Self {
        self.reference = reference;
        self
    }

    /// Minimum number of cells of one row handed to a single task.
    pub fn min_row_chunk(mut self, cells: usize) -> Self {
        self.min_row_chunk = Some(cells);
        self
    }

    pub fn build(self) -> Result<ParallelScorer> {
        if self.min_row_chunk == Some(0) {
            return Err(LcsError::invalid(
                Phase::Input,
                "min_row_chunk must be positive",
            ));
        }
        let pool = match self.threads {
            Some(0) => {
                return Err(LcsError::invalid(
                    Phase::Input,
                    "thread count must be positive",
                ))
            }
            Some(n) => Some(Arc::new(
                ThreadPoolBuilder::new()
                    .num_threads(n)
                    .thread_name(|i| format!("plcs-row-{i}"))
                    .build()?,
            )),
            None => None,
        };
        Ok(ParallelScorer::from_parts(
            pool,
            self.reference,
            self.min_row_chunk,
        ))
    }
}
