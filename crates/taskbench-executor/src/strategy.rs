//! Execution strategies for concurrent batches.

use serde::{Deserialize, Serialize};

/// How a batch of units is scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionStrategy {
  /// One independently scheduled lightweight task per unit, with no cap.
  Unbounded,
  /// Units queue behind a bounded pool of `size` workers.
  BoundedPool { size: usize },
}

impl ExecutionStrategy {
  /// Upper bound on the bounded pool size.
  pub const MAX_POOL_SIZE: usize = 200;

  /// Bounded pool sized for a batch of `task_count` units.
  pub fn bounded_for(task_count: usize) -> Self {
    Self::BoundedPool {
      size: task_count.min(Self::MAX_POOL_SIZE).max(1),
    }
  }

  /// True for the unbounded (lightweight-worker) strategy.
  pub fn is_lightweight(&self) -> bool {
    matches!(self, Self::Unbounded)
  }
}
