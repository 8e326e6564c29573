use std::ops::Range;

use rayon::prelude::*;

use crate::foundation::core::Argb32;
use crate::foundation::error::{PxlError, PxlResult};

/// Work executed for one partition: the rows it owns and the matching output slice.
pub type RowBody<'a> = dyn Fn(Range<usize>, &mut [Argb32]) + Sync + 'a;

/// Executes a row body over disjoint, contiguous partitions of a row range.
///
/// `out` covers exactly `rows` (`rows.len() * width` pixels). Every row is handed to exactly one
/// call of `body`, and `run_rows` returns only after all calls have finished. A panicking body
/// propagates to the caller.
pub trait RowScheduler: Send + Sync {
    /// Run `body` over every row in `rows`.
    fn run_rows(&self, rows: Range<usize>, width: usize, out: &mut [Argb32], body: &RowBody<'_>);
}

/// Single partition, executed on the calling thread.
#[derive(Clone, Copy, Debug, Default)]
pub struct SequentialRows;

impl RowScheduler for SequentialRows {
    fn run_rows(
        &self,
        rows: Range<usize>,
        _width: usize,
        out: &mut [Argb32],
        body: &RowBody<'_>,
    ) {
        if rows.is_empty() {
            return;
        }
        body(rows, out);
    }
}

/// Fork-join partitions on a dedicated rayon thread pool.
pub struct ParallelRows {
    pool: rayon::ThreadPool,
    rows_per_chunk: Option<usize>,
}

impl std::fmt::Debug for ParallelRows {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParallelRows")
            .field("threads", &self.pool.current_num_threads())
            .field("rows_per_chunk", &self.rows_per_chunk)
            .finish()
    }
}

impl ParallelRows {
    /// Build a scheduler with its own pool. `threads` of `Some(0)` is rejected; `rows_per_chunk`
    /// of `None` splits the range evenly across the pool's threads.
    pub fn new(threads: Option<usize>, rows_per_chunk: Option<usize>) -> PxlResult<Self> {
        Ok(Self {
            pool: build_thread_pool(threads)?,
            rows_per_chunk,
        })
    }

    /// Number of worker threads in the pool.
    pub fn threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    fn chunk_rows(&self, total_rows: usize) -> usize {
        match self.rows_per_chunk {
            Some(n) => n.max(1),
            None => total_rows.div_ceil(self.pool.current_num_threads().max(1)).max(1),
        }
    }
}

impl RowScheduler for ParallelRows {
    fn run_rows(
        &self,
        rows: Range<usize>,
        width: usize,
        out: &mut [Argb32],
        body: &RowBody<'_>,
    ) {
        if rows.is_empty() || width == 0 {
            return;
        }
        let chunk_rows = self.chunk_rows(rows.len());
        let first = rows.start;
        let last = rows.end;

        self.pool.install(|| {
            out.par_chunks_mut(chunk_rows * width)
                .enumerate()
                .for_each(|(i, part)| {
                    let start = first + i * chunk_rows;
                    let end = (start + chunk_rows).min(last);
                    body(start..end, part);
                });
        });
    }
}

fn build_thread_pool(threads: Option<usize>) -> PxlResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(PxlError::validation(
            "row scheduler 'threads' must be >= 1 when set",
        ));
    }
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| PxlError::resource(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/render/scheduler.rs"]
mod tests;
