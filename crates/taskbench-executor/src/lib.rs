//! Concurrent batch execution for taskbench.
//!
//! This crate provides the [`TaskExecutor`], which runs batches of identical
//! units of work under either an unbounded lightweight-task strategy or a
//! bounded worker pool, and collects one [`TaskResult`] per unit in
//! task-index order regardless of completion order.

mod error;
mod executor;
mod result;
mod strategy;

pub use error::ExecutionError;
pub use executor::{ExecutorConfig, TaskExecutor};
pub use result::TaskResult;
pub use strategy::ExecutionStrategy;
