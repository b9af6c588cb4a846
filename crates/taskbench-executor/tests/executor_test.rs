//! Integration tests for the batch executor.

use std::time::Duration;

use taskbench_executor::{ExecutionError, ExecutionStrategy, ExecutorConfig, TaskExecutor};
use tokio_util::sync::CancellationToken;

fn fast_executor() -> TaskExecutor {
  TaskExecutor::new(ExecutorConfig {
    task_delay: Duration::from_millis(5),
  })
}

#[tokio::test]
async fn results_preserve_task_order() {
  let executor = fast_executor();

  for count in [1usize, 10, 1000] {
    let results = executor
      .execute_batch(count, ExecutionStrategy::Unbounded, CancellationToken::new())
      .await
      .expect("batch should succeed");

    assert_eq!(results.len(), count);
    for (i, result) in results.iter().enumerate() {
      assert_eq!(result.task_id, i);
    }
  }
}

#[tokio::test]
async fn all_tasks_succeed_without_interruption() {
  let executor = fast_executor();

  let results = executor
    .execute_batch(50, ExecutionStrategy::Unbounded, CancellationToken::new())
    .await
    .expect("batch should succeed");

  assert_eq!(results.len(), 50);
  assert!(results.iter().all(|r| r.succeeded));
  assert!(results.iter().all(|r| r.lightweight));
  assert!(results.iter().all(|r| !r.worker.is_empty()));
}

#[tokio::test]
async fn bounded_pool_completes_all_tasks() {
  let executor = fast_executor();

  let results = executor
    .execute_batch(
      500,
      ExecutionStrategy::bounded_for(500),
      CancellationToken::new(),
    )
    .await
    .expect("batch should succeed");

  assert_eq!(results.len(), 500);
  assert!(results.iter().all(|r| r.succeeded));
  assert!(results.iter().all(|r| !r.lightweight));
  for (i, result) in results.iter().enumerate() {
    assert_eq!(result.task_id, i);
  }
}

#[tokio::test]
async fn zero_task_count_is_rejected() {
  let executor = fast_executor();

  let err = executor
    .execute_batch(0, ExecutionStrategy::Unbounded, CancellationToken::new())
    .await
    .expect_err("zero tasks must be rejected");

  assert!(matches!(
    err,
    ExecutionError::InvalidTaskCount { count: 0 }
  ));
}

#[tokio::test]
async fn task_duration_respects_configured_delay() {
  let executor = TaskExecutor::new(ExecutorConfig {
    task_delay: Duration::from_millis(50),
  });

  let results = executor
    .execute_batch(5, ExecutionStrategy::Unbounded, CancellationToken::new())
    .await
    .expect("batch should succeed");

  for result in results {
    assert!(result.succeeded);
    assert!(result.duration_ms >= 50, "duration was {}", result.duration_ms);
  }
}

#[tokio::test]
async fn blocking_io_duration_has_delay_floor() {
  let executor = fast_executor();

  let result = executor
    .simulate_blocking_io(Duration::from_millis(50), CancellationToken::new())
    .await
    .expect("simulation should succeed");

  assert!(result.succeeded);
  assert!(result.lightweight);
  assert!(result.duration_ms >= 50, "duration was {}", result.duration_ms);
}

#[tokio::test]
async fn zero_delay_blocking_io_still_produces_a_result() {
  let executor = fast_executor();

  let result = executor
    .simulate_blocking_io(Duration::ZERO, CancellationToken::new())
    .await
    .expect("simulation should succeed");

  assert!(result.succeeded);
}

#[tokio::test]
async fn cancelled_units_surface_as_failed_results() {
  let executor = TaskExecutor::new(ExecutorConfig {
    task_delay: Duration::from_millis(500),
  });
  let cancel = CancellationToken::new();

  let (results, _) = tokio::join!(
    executor.execute_batch(10, ExecutionStrategy::Unbounded, cancel.clone()),
    async {
      tokio::time::sleep(Duration::from_millis(20)).await;
      cancel.cancel();
    }
  );

  // Interruption is per-unit data, not a batch error.
  let results = results.expect("cancellation must not fail the batch");
  assert_eq!(results.len(), 10);
  assert!(results.iter().all(|r| !r.succeeded));
  assert!(results.iter().all(|r| r.message.contains("interrupted")));
}

#[tokio::test]
async fn already_cancelled_token_fails_every_unit() {
  let executor = TaskExecutor::new(ExecutorConfig {
    task_delay: Duration::from_millis(200),
  });
  let cancel = CancellationToken::new();
  cancel.cancel();

  let results = executor
    .execute_batch(3, ExecutionStrategy::bounded_for(3), cancel)
    .await
    .expect("cancellation must not fail the batch");

  assert_eq!(results.len(), 3);
  assert!(results.iter().all(|r| !r.succeeded));
}
