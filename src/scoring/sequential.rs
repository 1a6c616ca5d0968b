//! Sequential LCS scoring.
//!
//! Each cell depends on its upper, left and upper-left neighbours, so the
//! matrix is filled strictly row-major. This scorer is the reference the
//! row-parallel one is validated against.

use crate::error::{Phase, Result};
use crate::matrix::{DpMatrix, ScoreMatrix};
use crate::scoring::check_lengths;
use crate::traits::LcsScorer;

/// Full-table LCS with rows indexed by `b` and columns by `a`.
#[derive(Clone, Copy, Debug, Default)]
pub struct SequentialScorer;

impl SequentialScorer {
    pub fn new() -> Self {
        Self
    }
}

impl LcsScorer for SequentialScorer {
    fn name(&self) -> &'static str {
        "sequential"
    }

    fn fill(&self, a: &[u8], b: &[u8]) -> Result<ScoreMatrix> {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "lcs_sequential",
            scorer = self.name(),
            len_a = a.len(),
            len_b = b.len()
        )
        .entered();

        check_lengths(a, b)?;
        let m = a.len();
        let n = b.len();
        let mut dp: ScoreMatrix = DpMatrix::try_zeroed(n + 1, m + 1, Phase::Scoring)?;

        for i in 1..=n {
            let ch = b[i - 1];
            let (prev, cur) = dp.split_rows(i);
            for j in 1..=m {
                cur[j] = if a[j - 1] == ch {
                    prev[j - 1] + 1
                } else {
                    prev[j].max(cur[j - 1])
                };
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(score = dp.terminal(), "sequential fill done");
        Ok(dp)
    }
}
