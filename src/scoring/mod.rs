//! LCS scorers.
//!
//! - [`sequential`]: textbook row-major recurrence, used as the oracle.
//! - [`parallel`]  : row-parallel recurrence driven by an occurrence table.

pub mod parallel;
pub mod sequential;

use crate::error::{LcsError, Phase, Result};
use crate::matrix::Score;

/// Reject pairs whose LCS could not be held in a [`Score`] cell.
pub(crate) fn check_lengths(a: &[u8], b: &[u8]) -> Result<()> {
    let bound = a.len().min(b.len());
    if Score::try_from(bound).is_err() {
        return Err(LcsError::invalid(
            Phase::Input,
            format!(
                "sequence lengths {} and {} exceed the score cell range",
                a.len(),
                b.len()
            ),
        ));
    }
    Ok(())
}
