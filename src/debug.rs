//! Human-readable dumps of score matrices and occurrence tables.
//!
//! Output is for inspection only; layout may change between versions.

use std::fmt;

use crate::alphabet::Alphabet;
use crate::matrix::ScoreMatrix;
use crate::occurrence::OccurrenceTable;

const RULE: &str = "========================================";

/// Renders a score matrix with the column sequence as header and the row
/// sequence as row labels.
pub struct MatrixDump<'a> {
    matrix: &'a ScoreMatrix,
    cols: &'a [u8],
    rows: &'a [u8],
    title: &'a str,
}

impl<'a> MatrixDump<'a> {
    /// `cols` and `rows` are the sequences along each axis; labels missing for
    /// a given index are left blank.
    pub fn new(matrix: &'a ScoreMatrix, cols: &'a [u8], rows: &'a [u8]) -> Self {
        Self {
            matrix,
            cols,
            rows,
            title: "Score Matrix",
        }
    }

    pub fn with_title(mut self, title: &'a str) -> Self {
        self.title = title;
        self
    }
}

fn label(seq: &[u8], idx: usize) -> char {
    seq.get(idx).map(|&b| b as char).unwrap_or(' ')
}

impl fmt::Display for MatrixDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}:", self.title)?;
        writeln!(f, "{RULE}")?;
        write!(f, "    {:>5}", ' ')?;
        for j in 1..self.matrix.cols() {
            write!(f, " {:>5}", label(self.cols, j - 1))?;
        }
        writeln!(f)?;
        for i in 0..self.matrix.rows() {
            let tag = if i == 0 { ' ' } else { label(self.rows, i - 1) };
            write!(f, "{tag:<4}")?;
            for &v in self.matrix.row(i) {
                write!(f, "{v:>5} ")?;
            }
            writeln!(f)?;
        }
        writeln!(f, "{RULE}")
    }
}

/// Renders an occurrence table, one row per alphabet symbol.
pub struct OccurrenceDump<'a> {
    table: &'a OccurrenceTable,
    alphabet: &'a Alphabet,
    reference: &'a [u8],
}

impl<'a> OccurrenceDump<'a> {
    pub fn new(table: &'a OccurrenceTable, alphabet: &'a Alphabet, reference: &'a [u8]) -> Self {
        Self {
            table,
            alphabet,
            reference,
        }
    }
}

impl fmt::Display for OccurrenceDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Occurrence Table:")?;
        writeln!(f, "{RULE}")?;
        write!(f, "    {:>5}", ' ')?;
        for j in 1..self.table.width() {
            write!(f, " {:>5}", label(self.reference, j - 1))?;
        }
        writeln!(f)?;
        for s in 0..self.table.symbols() {
            write!(f, "{:<4}", label(self.alphabet.symbols(), s))?;
            for &v in self.table.row(s) {
                write!(f, "{v:>5} ")?;
            }
            writeln!(f)?;
        }
        writeln!(f, "{RULE}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{LcsScorer, SequentialScorer};

    #[test]
    fn score_dump_labels_axes() {
        let dp = SequentialScorer.fill(b"AB", b"B").unwrap();
        let text = MatrixDump::new(&dp, b"AB", b"B").to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Score Matrix:");
        assert!(lines[2].contains('A') && lines[2].contains('B'));
        assert!(lines[4].starts_with('B'));
        assert!(lines[4].trim_end().ends_with('1'));
        assert_eq!(lines.len(), 6);
    }

    #[test]
    fn occurrence_dump_has_one_line_per_symbol() {
        let alphabet = Alphabet::from_pair(b"BDCABA", b"ABCBDAB").unwrap();
        let table = OccurrenceTable::build(b"BDCABA", &alphabet).unwrap();
        let text = OccurrenceDump::new(&table, &alphabet, b"BDCABA").to_string();
        assert_eq!(text.lines().count(), 3 + alphabet.len() + 1);
        assert!(text.lines().any(|l| l.starts_with('A') && l.trim_end().ends_with('6')));
    }

    #[test]
    fn short_labels_do_not_panic() {
        let dp = SequentialScorer.fill(b"ABC", b"AB").unwrap();
        let text = MatrixDump::new(&dp, b"", b"").with_title("X").to_string();
        assert!(text.starts_with("X:"));
    }
}
