//! Sort benchmarking service.
//!
//! Accepts a batch of integer arrays over HTTP, sorts each array, and
//! reports the wall-clock time taken. Two strategies are exposed so callers
//! can compare them: a sequential baseline and a concurrent fan-out/fan-in
//! sorter that dispatches one worker per array and reassembles the results
//! in original batch order.

pub mod server;
pub mod sorter;
