//! Batch sorting strategies for the benchmarking service.
//!
//! A batch is an ordered sequence of integer arrays. Both strategies produce
//! the same logical result — each output array is the ascending sort of the
//! input array at the same index — and differ only in how the work is
//! executed:
//!
//! - [`sort_sequential`] walks the batch in index order on the calling
//!   thread.
//! - [`sort_concurrent`] fans out one worker thread per array and fans the
//!   tagged results back in over a channel.
//!
//! # Fan-out / fan-in protocol
//!
//! Each worker receives an exclusively owned copy of its array together with
//! the array's original batch index. On completion it sends
//! `(index, sorted)` over an unbounded channel and exits, dropping its
//! sender. The coordinator drops its own sender up front, so the channel
//! disconnects exactly when all workers have reported; draining the receiver
//! until disconnect therefore collects exactly N results. Completion order
//! is unspecified — the output buffer is filled by tag, never by arrival
//! order, and only the coordinator thread writes to it.

use std::thread;

/// Sort every array in the batch in index order, one at a time.
///
/// The input is never mutated; each output array is a freshly sorted copy.
pub fn sort_sequential(batch: &[Vec<i64>]) -> Vec<Vec<i64>> {
    batch
        .iter()
        .map(|array| {
            let mut sorted = array.clone();
            sorted.sort_unstable();
            sorted
        })
        .collect()
}

/// Sort every array in the batch concurrently, one worker thread per array.
///
/// Spawns exactly `batch.len()` threads — fan-out is unbounded and scales
/// linearly with batch size. Returns only after every worker has completed;
/// there is no cancellation and no partial result. The output preserves the
/// input's index-to-array correspondence regardless of completion order.
pub fn sort_concurrent(batch: &[Vec<i64>]) -> Vec<Vec<i64>> {
    if batch.is_empty() {
        return Vec::new();
    }

    let (tx, rx) = crossbeam_channel::unbounded();

    for (index, array) in batch.iter().enumerate() {
        let tx = tx.clone();
        // Each worker owns a private copy; no worker can observe another's
        // data or the caller's original.
        let mut owned = array.clone();
        thread::spawn(move || {
            owned.sort_unstable();
            let _ = tx.send((index, owned));
        });
    }
    // The workers hold the only remaining senders; the channel disconnects
    // once every one of them has sent its result.
    drop(tx);

    let mut sorted = vec![Vec::new(); batch.len()];
    for (index, array) in rx {
        sorted[index] = array;
    }
    sorted
}
