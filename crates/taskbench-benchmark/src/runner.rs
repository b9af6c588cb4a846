//! Benchmark runner implementation.

use std::time::Instant;

use tokio_util::sync::CancellationToken;
use tracing::{info, instrument};

use taskbench_executor::{ExecutionError, ExecutionStrategy, TaskExecutor};

use crate::result::BenchmarkResult;

/// Measures the same batch workload under both execution strategies.
pub struct BenchmarkRunner {
  executor: TaskExecutor,
}

impl BenchmarkRunner {
  /// Create a runner around the executor whose strategies are compared.
  pub fn new(executor: TaskExecutor) -> Self {
    Self { executor }
  }

  /// Run `task_count` units under the unbounded strategy and then under the
  /// bounded pool, and compare wall-clock timings.
  ///
  /// The two runs are sequential with respect to each other so that each
  /// strategy's cost is measured in isolation. Executor errors propagate
  /// unwrapped.
  #[instrument(name = "benchmark", skip(self, cancel))]
  pub async fn run(
    &self,
    task_count: usize,
    cancel: CancellationToken,
  ) -> Result<BenchmarkResult, ExecutionError> {
    info!(task_count, "benchmarking unbounded vs bounded pool");

    let started = Instant::now();
    let unbounded = self
      .executor
      .execute_batch(task_count, ExecutionStrategy::Unbounded, cancel.clone())
      .await?;
    let unbounded_ms = started.elapsed().as_millis() as u64;

    let started = Instant::now();
    let bounded = self
      .executor
      .execute_batch(
        task_count,
        ExecutionStrategy::bounded_for(task_count),
        cancel,
      )
      .await?;
    let bounded_pool_ms = started.elapsed().as_millis() as u64;

    let result = BenchmarkResult {
      task_count,
      unbounded_ms,
      bounded_pool_ms,
      unbounded_completed: unbounded.len(),
      bounded_pool_completed: bounded.len(),
      speedup: BenchmarkResult::speedup_ratio(bounded_pool_ms, unbounded_ms),
    };

    info!(summary = %result.summary(), "benchmark completed");
    Ok(result)
  }
}
