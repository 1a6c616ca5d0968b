//! Error taxonomy shared by every phase of a scoring run.
//!
//! All failures are terminal for the pair being scored: a caller either gets a
//! correct score or one of these values, never a partial result.

use std::fmt;
use std::path::PathBuf;

/// Phase of the computation that raised an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Reading or validating the input sequences and configuration.
    Input,
    /// Building the symbol alphabet.
    Alphabet,
    /// Building the last-occurrence (P-matrix) table.
    Table,
    /// Filling the score matrix.
    Scoring,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Input => "input",
            Phase::Alphabet => "alphabet",
            Phase::Table => "table",
            Phase::Scoring => "scoring",
        };
        f.write_str(name)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LcsError {
    /// Inputs or configuration that cannot be scored.
    #[error("invalid input ({phase}): {reason}")]
    InvalidInput { phase: Phase, reason: String },
    /// Backing storage for a matrix could not be obtained.
    #[error("allocation failure ({phase}): could not reserve {cells} cells")]
    AllocationFailure { phase: Phase, cells: usize },
    /// An internal guarantee was broken, e.g. a symbol missing from the alphabet.
    #[error("invariant violation ({phase}): {detail}")]
    InvariantViolation { phase: Phase, detail: String },
    /// The dedicated worker pool could not be started.
    #[error("worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
    #[error("io error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LcsError {
    pub(crate) fn invalid(phase: Phase, reason: impl Into<String>) -> Self {
        LcsError::InvalidInput {
            phase,
            reason: reason.into(),
        }
    }

    pub(crate) fn invariant(phase: Phase, detail: impl Into<String>) -> Self {
        LcsError::InvariantViolation {
            phase,
            detail: detail.into(),
        }
    }

    /// Phase that raised the error, when it is tied to one.
    pub fn phase(&self) -> Option<Phase> {
        match self {
            LcsError::InvalidInput { phase, .. }
            | LcsError::AllocationFailure { phase, .. }
            | LcsError::InvariantViolation { phase, .. } => Some(*phase),
            LcsError::Io { .. } => Some(Phase::Input),
            LcsError::ThreadPool(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, LcsError>;
