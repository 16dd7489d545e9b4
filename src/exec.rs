//! Fork-join execution over disjoint row bands, plus a timing helper.
//!
//! Every kernel in this crate is embarrassingly parallel: each output pixel
//! depends only on the immutable input image(s), never on another output
//! pixel. Any partition of the output grid is therefore correct, and the
//! result is byte-identical for any worker count.
//!
//! Partitioning is by rows: the row-major buffer splits into contiguous,
//! non-aliasing `&mut` bands, one per worker. Workers are spawned on a
//! per-invocation Rayon pool sized to the requested thread count and joined
//! before returning.
use crate::error::Error;
use crate::image::{Rgba, RgbaImage};
use log::debug;
use std::time::{Duration, Instant};

/// Rows assigned to each band when splitting `height` rows across `threads`.
fn rows_per_band(height: usize, threads: usize) -> usize {
    height.div_ceil(threads).max(1)
}

/// Fill `output` by invoking `body(y, row)` for every row, split across at
/// most `threads` contiguous row bands.
///
/// `threads` is clamped to `1..=height`; `threads == 1` runs sequentially on
/// the calling thread. `body` must fill the row it is handed completely.
pub fn run_rows<F>(output: &mut RgbaImage, threads: usize, body: F) -> Result<(), Error>
where
    F: Fn(usize, &mut [Rgba]) + Sync,
{
    let w = output.w;
    let h = output.h;
    if w == 0 || h == 0 {
        return Ok(());
    }

    let threads = threads.max(1).min(h);
    if threads == 1 {
        for y in 0..h {
            body(y, output.row_mut(y));
        }
        return Ok(());
    }

    let band_height = rows_per_band(h, threads);
    debug!("run_rows: {h} rows across {threads} workers, {band_height} rows per band");

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .map_err(|e| Error::WorkerPool(e.to_string()))?;

    let body = &body;
    let bands = output.data.chunks_mut(band_height * w);
    pool.scope(|scope| {
        for (band_index, band) in bands.enumerate() {
            scope.spawn(move |_| {
                let y0 = band_index * band_height;
                for (offset, row) in band.chunks_mut(w).enumerate() {
                    body(y0 + offset, row);
                }
            });
        }
    });
    Ok(())
}

/// Measure the wall-clock time of a single invocation of `op`.
pub fn time_execution<T>(op: impl FnOnce() -> T) -> (T, Duration) {
    let t0 = Instant::now();
    let value = op();
    (value, t0.elapsed())
}
