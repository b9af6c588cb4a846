//! Integration tests for the benchmark runner.

use std::time::Duration;

use taskbench_benchmark::BenchmarkRunner;
use taskbench_executor::{ExecutionError, ExecutorConfig, TaskExecutor};
use tokio_util::sync::CancellationToken;

fn fast_runner() -> BenchmarkRunner {
  BenchmarkRunner::new(TaskExecutor::new(ExecutorConfig {
    task_delay: Duration::from_millis(5),
  }))
}

#[tokio::test]
async fn benchmark_completes_both_strategies() {
  let runner = fast_runner();

  let result = runner
    .run(100, CancellationToken::new())
    .await
    .expect("benchmark should succeed");

  assert_eq!(result.task_count, 100);
  assert_eq!(result.unbounded_completed, 100);
  assert_eq!(result.bounded_pool_completed, 100);
  assert!(result.unbounded_ms > 0);
  assert!(result.bounded_pool_ms > 0);
  assert!(result.speedup > 0.0);
}

#[tokio::test]
async fn benchmark_rejects_zero_tasks() {
  let runner = fast_runner();

  let err = runner
    .run(0, CancellationToken::new())
    .await
    .expect_err("zero tasks must be rejected");

  assert!(matches!(err, ExecutionError::InvalidTaskCount { count: 0 }));
}

#[tokio::test]
async fn repeated_runs_keep_completion_invariant() {
  // Timings vary between runs; the completed counts must not.
  let runner = fast_runner();

  for _ in 0..2 {
    let result = runner
      .run(50, CancellationToken::new())
      .await
      .expect("benchmark should succeed");

    assert_eq!(result.unbounded_completed, 50);
    assert_eq!(result.bounded_pool_completed, 50);
  }
}
