//! Strategy benchmarking for taskbench.
//!
//! The [`BenchmarkRunner`] runs the same batch workload under the unbounded
//! strategy and the bounded pool, sequentially, and reports comparative
//! wall-clock timings as a [`BenchmarkResult`].

mod result;
mod runner;

pub use result::BenchmarkResult;
pub use runner::BenchmarkRunner;
