//! Dense row-major matrices backed by a single buffer.
//!
//! Both the score matrix and the occurrence table are stored as one `Vec`
//! plus a stride; rows are borrowed as slices so that a DP row can be read
//! while the next one is being written.

use crate::error::{LcsError, Phase, Result};

/// Score cell type: an LCS length.
pub type Score = u32;

/// Score matrix: `(|rows| + 1) x (|cols| + 1)`, row 0 and column 0 are zero.
pub type ScoreMatrix = DpMatrix<Score>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DpMatrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T: Copy + Default> DpMatrix<T> {
    /// Allocate a `rows x cols` matrix filled with `T::default()`.
    ///
    /// Fails with [`LcsError::AllocationFailure`] if the cell count overflows
    /// or the allocator refuses the reservation; nothing is partially built.
    pub fn try_zeroed(rows: usize, cols: usize, phase: Phase) -> Result<Self> {
        let cells = rows
            .checked_mul(cols)
            .ok_or(LcsError::AllocationFailure {
                phase,
                cells: usize::MAX,
            })?;
        let mut data = Vec::new();
        data.try_reserve_exact(cells)
            .map_err(|_| LcsError::AllocationFailure { phase, cells })?;
        data.resize(cells, T::default());
        Ok(Self { data, rows, cols })
    }
}

impl<T: Copy> DpMatrix<T> {
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    fn index(&self, i: usize, j: usize) -> usize {
        debug_assert!(i < self.rows, "row {i} out of {}", self.rows);
        debug_assert!(j < self.cols, "col {j} out of {}", self.cols);
        i * self.cols + j
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> T {
        self.data[self.index(i, j)]
    }

    #[inline]
    pub fn set(&mut self, i: usize, j: usize, value: T) {
        let idx = self.index(i, j);
        self.data[idx] = value;
    }

    #[inline]
    pub fn row(&self, i: usize) -> &[T] {
        let start = i * self.cols;
        &self.data[start..start + self.cols]
    }

    #[inline]
    pub fn row_mut(&mut self, i: usize) -> &mut [T] {
        let start = i * self.cols;
        &mut self.data[start..start + self.cols]
    }

    /// Borrow row `i - 1` immutably and row `i` mutably at the same time.
    ///
    /// # Panics
    /// Panics if `i == 0` or `i >= rows`.
    pub fn split_rows(&mut self, i: usize) -> (&[T], &mut [T]) {
        assert!(i > 0 && i < self.rows, "split_rows({i}) on {} rows", self.rows);
        let (head, tail) = self.data.split_at_mut(i * self.cols);
        (&head[(i - 1) * self.cols..], &mut tail[..self.cols])
    }

    /// Raw row-major cells.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Bottom-right cell, if the matrix has any cells.
    pub fn last_cell(&self) -> Option<T> {
        self.data.last().copied()
    }

    /// Swap rows and columns.
    pub fn transposed(&self) -> Self {
        let mut data = Vec::with_capacity(self.data.len());
        for j in 0..self.cols {
            for i in 0..self.rows {
                data.push(self.get(i, j));
            }
        }
        Self {
            data,
            rows: self.cols,
            cols: self.rows,
        }
    }
}

impl DpMatrix<Score> {
    /// LCS length of the full inputs (the terminal cell).
    pub fn terminal(&self) -> Score {
        self.last_cell().unwrap_or(0)
    }
}
