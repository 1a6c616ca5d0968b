//! Last-occurrence table ("P-matrix") over a reference sequence.
//!
//! For alphabet symbol `s` and column `j` in `0..=n`, the table stores the
//! largest 1-based position `p <= j` with `reference[p - 1] == s`, or
//! [`NO_OCCURRENCE`] if the symbol does not appear in `reference[..j]`.
//! Positions are 1-based so that zero stays free for the sentinel.
//!
//! Rows are independent prefix scans and are filled in parallel; a single row
//! is always scanned left to right.

use rayon::prelude::*;

use crate::alphabet::Alphabet;
use crate::error::{LcsError, Phase, Result};
use crate::matrix::DpMatrix;

/// Raw cell value meaning "the symbol has not occurred yet".
pub const NO_OCCURRENCE: u32 = 0;

/// Decoded table cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Occurrence {
    Never,
    /// Last occurrence at this 1-based position of the reference.
    At(usize),
}

impl Occurrence {
    #[inline]
    pub fn from_raw(raw: u32) -> Self {
        if raw == NO_OCCURRENCE {
            Occurrence::Never
        } else {
            Occurrence::At(raw as usize)
        }
    }
}

#[derive(Clone, Debug)]
pub struct OccurrenceTable {
    cells: DpMatrix<u32>,
}

impl OccurrenceTable {
    /// Build the `|Σ| x (n + 1)` table for `reference`.
    ///
    /// Every symbol of `reference` must belong to `alphabet`. Runs on the
    /// current rayon pool.
    pub fn build(reference: &[u8], alphabet: &Alphabet) -> Result<Self> {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "occurrence_table",
            symbols = alphabet.len(),
            reference_len = reference.len()
        )
        .entered();

        if u32::try_from(reference.len()).is_err() {
            return Err(LcsError::invalid(
                Phase::Table,
                format!(
                    "reference of length {} does not fit a table cell",
                    reference.len()
                ),
            ));
        }
        if let Some(&stray) = reference.iter().find(|&&s| !alphabet.contains(s)) {
            return Err(LcsError::invariant(
                Phase::Table,
                format!("reference symbol {:?} is not in the alphabet", stray as char),
            ));
        }

        let width = reference.len() + 1;
        let mut cells: DpMatrix<u32> = DpMatrix::try_zeroed(alphabet.len(), width, Phase::Table)?;
        if !alphabet.is_empty() {
            cells
                .as_mut_slice()
                .par_chunks_mut(width)
                .zip(alphabet.symbols().par_iter())
                .for_each(|(row, &symbol)| scan_row(row, reference, symbol));
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(cells = alphabet.len() * width, "occurrence table built");
        Ok(Self { cells })
    }

    /// Number of symbol rows.
    pub fn symbols(&self) -> usize {
        self.cells.rows()
    }

    /// Number of columns, `n + 1`.
    pub fn width(&self) -> usize {
        self.cells.cols()
    }

    /// Raw row for one symbol index; zero entries are [`NO_OCCURRENCE`].
    #[inline]
    pub fn row(&self, symbol_index: usize) -> &[u32] {
        self.cells.row(symbol_index)
    }

    #[inline]
    pub fn lookup(&self, symbol_index: usize, column: usize) -> Occurrence {
        Occurrence::from_raw(self.cells.get(symbol_index, column))
    }
}

/// Prefix scan carrying the last seen position of `symbol` forward.
fn scan_row(row: &mut [u32], reference: &[u8], symbol: u8) {
    row[0] = NO_OCCURRENCE;
    for j in 1..row.len() {
        row[j] = if reference[j - 1] == symbol {
            j as u32
        } else {
            row[j - 1]
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_for(reference: &[u8], other: &[u8]) -> (Alphabet, OccurrenceTable) {
        let alphabet = Alphabet::from_pair(reference, other).unwrap();
        let table = OccurrenceTable::build(reference, &alphabet).unwrap();
        (alphabet, table)
    }

    #[test]
    fn running_max_of_positions() {
        let (alphabet, table) = table_for(b"BDCABA", b"ABCBDAB");
        let a = alphabet.index_of(b'A').unwrap();
        assert_eq!(table.row(a), &[0, 0, 0, 0, 4, 4, 6]);
        assert_eq!(table.lookup(a, 3), Occurrence::Never);
        assert_eq!(table.lookup(a, 5), Occurrence::At(4));

        let b = alphabet.index_of(b'B').unwrap();
        assert_eq!(table.row(b), &[0, 1, 1, 1, 1, 5, 5]);
    }

    #[test]
    fn symbol_only_in_other_sequence_never_occurs() {
        let (alphabet, table) = table_for(b"ABC", b"XYZ");
        let x = alphabet.index_of(b'X').unwrap();
        assert!(table.row(x).iter().all(|&v| v == NO_OCCURRENCE));
    }

    #[test]
    fn empty_reference_has_single_zero_column() {
        let (_alphabet, table) = table_for(b"", b"XYZ");
        assert_eq!(table.width(), 1);
        assert_eq!(table.symbols(), 3);
        for s in 0..3 {
            assert_eq!(table.row(s), &[NO_OCCURRENCE]);
        }
    }

    #[test]
    fn symbol_missing_from_alphabet_is_rejected() {
        let alphabet = Alphabet::from_pair(b"AB", b"").unwrap();
        let err = OccurrenceTable::build(b"ABC", &alphabet).unwrap_err();
        assert!(matches!(
            err,
            LcsError::InvariantViolation {
                phase: Phase::Table,
                ..
            }
        ));
    }
}
