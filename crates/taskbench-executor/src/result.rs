//! Task execution result.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outcome of a single unit of work.
///
/// Constructed exactly once, immediately after the unit finishes, and never
/// mutated afterward. A failed unit still produces a `TaskResult` (with
/// `succeeded == false`) so that one failure cannot hide its siblings'
/// results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskResult {
  /// Caller-assigned task index within the batch.
  pub task_id: usize,
  /// Identity of the worker that ran the unit. Observability only.
  pub worker: String,
  /// True when the unit ran under the unbounded lightweight strategy.
  pub lightweight: bool,
  /// When the unit started.
  pub started_at: DateTime<Utc>,
  /// When the unit finished, on either the success or the failure path.
  pub completed_at: DateTime<Utc>,
  /// Wall-clock duration in milliseconds, derived from the timestamps.
  pub duration_ms: u64,
  /// Human-readable outcome, or the failure description.
  pub message: String,
  /// Whether the unit's work completed without interruption.
  pub succeeded: bool,
}

impl TaskResult {
  /// Build a successful result from the unit's captured timestamps.
  pub fn success(
    task_id: usize,
    worker: String,
    lightweight: bool,
    started_at: DateTime<Utc>,
    completed_at: DateTime<Utc>,
    message: String,
  ) -> Self {
    Self {
      task_id,
      worker,
      lightweight,
      started_at,
      completed_at,
      duration_ms: duration_ms_between(started_at, completed_at),
      message,
      succeeded: true,
    }
  }

  /// Build a failed result carrying the failure description.
  pub fn failure(
    task_id: usize,
    worker: String,
    lightweight: bool,
    started_at: DateTime<Utc>,
    completed_at: DateTime<Utc>,
    error: String,
  ) -> Self {
    Self {
      task_id,
      worker,
      lightweight,
      started_at,
      completed_at,
      duration_ms: duration_ms_between(started_at, completed_at),
      message: error,
      succeeded: false,
    }
  }
}

/// Millisecond delta between the two timestamps, clamped at zero.
fn duration_ms_between(started_at: DateTime<Utc>, completed_at: DateTime<Utc>) -> u64 {
  (completed_at - started_at).num_milliseconds().max(0) as u64
}
