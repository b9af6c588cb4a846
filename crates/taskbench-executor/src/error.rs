//! Batch execution errors.

/// Errors raised by the batch coordinator.
///
/// Individual unit failures are not errors; they surface as
/// `succeeded == false` entries in the result list. Only the coordination
/// itself failing is reported through this type.
#[derive(Debug, thiserror::Error)]
pub enum ExecutionError {
  /// Task count must be positive.
  #[error("invalid task count: {count} (must be at least 1)")]
  InvalidTaskCount { count: usize },

  /// Joining a spawned unit failed.
  #[error("failed to join task {task_id}: {message}")]
  Join { task_id: usize, message: String },
}
