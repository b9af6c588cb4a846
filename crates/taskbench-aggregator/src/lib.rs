//! Parallel fan-out aggregation for taskbench.
//!
//! This crate provides the [`ParallelAggregator`], which starts three
//! [`FetchSource`] fetches concurrently before awaiting any of them, then
//! combines their payloads into a single [`AggregatedResult`]. The policy is
//! all-or-nothing: any single failure collapses the whole aggregate into a
//! uniform error record.

mod aggregator;
mod error;
mod source;

pub use aggregator::{AggregatedResult, ParallelAggregator};
pub use error::FetchError;
pub use source::{FetchSource, SimulatedSource};
