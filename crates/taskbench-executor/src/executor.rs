//! Concurrent batch executor.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::sync::Semaphore;
use tokio_util::sync::CancellationToken;
use tracing::{info, instrument};

use crate::error::ExecutionError;
use crate::result::TaskResult;
use crate::strategy::ExecutionStrategy;

/// Configuration for the task executor.
#[derive(Debug, Clone)]
pub struct ExecutorConfig {
  /// Artificial delay each unit of work blocks for, standing in for real
  /// I/O. Tests shrink this; callers inject realistic values.
  pub task_delay: Duration,
}

impl Default for ExecutorConfig {
  fn default() -> Self {
    Self {
      task_delay: Duration::from_millis(100),
    }
  }
}

/// Runs batches of identical units of work under a chosen strategy.
///
/// Units are fully independent: no state is shared across them, and each
/// unit's timestamps and outcome are private until collected into the final
/// result list.
pub struct TaskExecutor {
  config: ExecutorConfig,
}

impl TaskExecutor {
  /// Create an executor with the given configuration.
  pub fn new(config: ExecutorConfig) -> Self {
    Self { config }
  }

  /// Execute `task_count` units concurrently and return their results in
  /// task-index order, regardless of completion order.
  ///
  /// A unit interrupted mid-delay produces a `succeeded == false` result
  /// without affecting its siblings. Only a failed join surfaces as an
  /// [`ExecutionError`].
  #[instrument(name = "execute_batch", skip(self, cancel))]
  pub async fn execute_batch(
    &self,
    task_count: usize,
    strategy: ExecutionStrategy,
    cancel: CancellationToken,
  ) -> Result<Vec<TaskResult>, ExecutionError> {
    if task_count == 0 {
      return Err(ExecutionError::InvalidTaskCount { count: task_count });
    }

    info!(task_count, "executing batch");

    let pool = match strategy {
      ExecutionStrategy::Unbounded => None,
      ExecutionStrategy::BoundedPool { size } => Some(Arc::new(Semaphore::new(size.max(1)))),
    };

    let delay = self.config.task_delay;
    let lightweight = strategy.is_lightweight();

    // Spawn every unit before awaiting any of them.
    let mut handles = Vec::with_capacity(task_count);
    for task_id in 0..task_count {
      let pool = pool.clone();
      let cancel = cancel.clone();
      handles.push(tokio::spawn(async move {
        let _permit = match pool {
          Some(pool) => match pool.acquire_owned().await {
            Ok(permit) => Some(permit),
            Err(_) => {
              // The pool is never closed while units are outstanding, but a
              // closed pool is an interruption like any other.
              let now = Utc::now();
              return TaskResult::failure(
                task_id,
                worker_identity(),
                lightweight,
                now,
                now,
                "worker pool closed".to_string(),
              );
            }
          },
          None => None,
        };
        run_unit(task_id, lightweight, delay, cancel).await
      }));
    }

    // Collect in spawn order so results come back keyed by task index.
    let mut results = Vec::with_capacity(task_count);
    for (task_id, handle) in handles.into_iter().enumerate() {
      let result = handle.await.map_err(|e| ExecutionError::Join {
        task_id,
        message: e.to_string(),
      })?;
      results.push(result);
    }

    info!(completed = results.len(), "batch completed");
    Ok(results)
  }

  /// Run a single unit with a caller-supplied delay, spawned as its own
  /// lightweight task, and return its result directly.
  #[instrument(name = "simulate_blocking_io", skip(self, cancel))]
  pub async fn simulate_blocking_io(
    &self,
    delay: Duration,
    cancel: CancellationToken,
  ) -> Result<TaskResult, ExecutionError> {
    info!(delay_ms = delay.as_millis() as u64, "simulating blocking i/o");

    tokio::spawn(run_unit(0, true, delay, cancel))
      .await
      .map_err(|e| ExecutionError::Join {
        task_id: 0,
        message: e.to_string(),
      })
  }
}

/// Run one unit of work: capture timestamps around the artificial delay and
/// build the result record. Interruption is converted into a failed result
/// here, never propagated.
async fn run_unit(
  task_id: usize,
  lightweight: bool,
  delay: Duration,
  cancel: CancellationToken,
) -> TaskResult {
  let started_at = Utc::now();
  let worker = worker_identity();

  tokio::select! {
    _ = tokio::time::sleep(delay) => {
      let completed_at = Utc::now();
      let message = format!("Task {} completed on {}", task_id, worker);
      TaskResult::success(task_id, worker, lightweight, started_at, completed_at, message)
    }
    _ = cancel.cancelled() => {
      let completed_at = Utc::now();
      TaskResult::failure(
        task_id,
        worker,
        lightweight,
        started_at,
        completed_at,
        "task interrupted during simulated work".to_string(),
      )
    }
  }
}

/// Identity of the thread currently driving this unit. Observability only.
fn worker_identity() -> String {
  let thread = std::thread::current();
  match thread.name() {
    Some(name) => format!("{}/{:?}", name, thread.id()),
    None => format!("{:?}", thread.id()),
  }
}
