//! Assorted helpers.

/// Smallest number of cells a worker takes from one DP row.
///
/// Below this the cost of splitting a row outweighs evaluating it.
pub const MIN_ROW_CHUNK: usize = 512;

/// Default per-task cell count when a row of `cols` cells is spread over
/// `threads` workers.
///
/// Aims for about four tasks per worker on wide rows, never dropping below
/// [`MIN_ROW_CHUNK`]. Used by [`crate::ParallelScorer`] unless overridden
/// through the builder.
#[inline]
pub fn default_min_row_chunk(cols: usize, threads: usize) -> usize {
    let tasks = threads.max(1) * 4;
    cols.div_ceil(tasks).max(MIN_ROW_CHUNK)
}
