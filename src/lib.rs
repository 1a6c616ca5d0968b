//! Row-parallel Longest Common Subsequence (LCS) scoring.
//!
//! This crate computes the LCS length of two byte sequences with the classic
//! `O(|A|·|B|)` dynamic program, in two flavours:
//!
//! - [`SequentialScorer`]: the textbook row-major fill. Every cell needs its
//!   left neighbour, so a row is inherently serial.
//! - [`ParallelScorer`]: the same table, filled one row at a time with every
//!   cell of the row evaluated concurrently. A last-occurrence table
//!   ([`OccurrenceTable`], a.k.a. the P-matrix) over one input replaces the
//!   left-neighbour dependency with a lookup into the previous row.
//!
//! Both scorers implement [`LcsScorer`] and must agree on every input pair;
//! the sequential one doubles as the oracle in tests and in the `lcs_probe`
//! binary.
//!
//! ## Quick start
//! ```
//! use plcs::{LcsScorer, ParallelScorer, SequentialScorer};
//!
//! let a = b"ABCBDAB";
//! let b = b"BDCABA";
//! let parallel = ParallelScorer::builder().threads(2).build().unwrap();
//! assert_eq!(parallel.score(a, b).unwrap(), 4);
//! assert_eq!(SequentialScorer.score(a, b).unwrap(), 4);
//! ```
//!
//! ## Data flow
//! 1. [`Alphabet::from_pair`] assigns dense indices to the distinct symbols.
//! 2. [`OccurrenceTable::build`] records, per symbol and prefix length, the
//!    last 1-based position of the symbol in the reference sequence. Rows are
//!    built in parallel.
//! 3. [`ParallelScorer`] fills the score matrix row by row; the join at the
//!    end of each row is the barrier before the next.
//!
//! Which input acts as the reference is set with [`ReferenceChoice`]; the
//! shorter one keeps the table smallest and is the default.

pub mod alphabet;
pub mod builder;
pub mod debug;
pub mod error;
pub mod matrix;
pub mod occurrence;
pub mod scoring;
pub mod sequence;
pub mod traits;
pub mod utils;

pub use crate::alphabet::Alphabet;
pub use crate::builder::ParallelScorerBuilder;
pub use crate::error::{LcsError, Phase, Result};
pub use crate::matrix::{DpMatrix, Score, ScoreMatrix};
pub use crate::occurrence::{Occurrence, OccurrenceTable, NO_OCCURRENCE};
pub use crate::scoring::parallel::{ParallelScorer, ReferenceChoice};
pub use crate::scoring::sequential::SequentialScorer;
pub use crate::sequence::Sequence;
pub use crate::traits::LcsScorer;
