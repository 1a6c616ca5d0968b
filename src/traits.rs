//! The scorer interface shared by the sequential and row-parallel engines.
//!
//! Both scorers fill a full score matrix and read the LCS length from its
//! terminal cell. Implementations differ in traversal order and in which
//! input is laid out along the columns; see each implementation for its
//! orientation.

use crate::error::Result;
use crate::matrix::{Score, ScoreMatrix};

/// An LCS length scorer over byte sequences.
///
/// Implementations must agree on [`score`](LcsScorer::score) for every input
/// pair, and must be symmetric: `score(a, b) == score(b, a)`.
pub trait LcsScorer {
    /// Short name, used in log spans and command-line output.
    fn name(&self) -> &'static str;

    /// Fill the complete score matrix for `a` and `b`.
    ///
    /// Cell `[i][j]` holds the LCS length of the length-`i` prefix of the row
    /// sequence and the length-`j` prefix of the column sequence.
    fn fill(&self, a: &[u8], b: &[u8]) -> Result<ScoreMatrix>;

    /// LCS length of `a` and `b`.
    fn score(&self, a: &[u8], b: &[u8]) -> Result<Score> {
        Ok(self.fill(a, b)?.terminal())
    }
}
