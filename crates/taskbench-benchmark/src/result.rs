//! Benchmark result.

use serde::{Deserialize, Serialize};

/// Comparative timing of the two execution strategies for one workload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkResult {
  /// Number of tasks in each run.
  pub task_count: usize,
  /// Wall-clock duration of the unbounded run, in milliseconds.
  pub unbounded_ms: u64,
  /// Wall-clock duration of the bounded-pool run, in milliseconds.
  pub bounded_pool_ms: u64,
  /// Results collected by the unbounded run.
  pub unbounded_completed: usize,
  /// Results collected by the bounded-pool run.
  pub bounded_pool_completed: usize,
  /// Bounded-pool duration divided by unbounded duration. Values above 1
  /// mean the unbounded strategy was faster.
  pub speedup: f64,
}

impl BenchmarkResult {
  /// One-line human-readable summary.
  pub fn summary(&self) -> String {
    format!(
      "Benchmark: {} tasks | unbounded: {}ms | bounded pool: {}ms | speedup: {:.2}x",
      self.task_count, self.unbounded_ms, self.bounded_pool_ms, self.speedup
    )
  }

  /// Speedup ratio, guarding against a zero-length unbounded run.
  pub(crate) fn speedup_ratio(bounded_pool_ms: u64, unbounded_ms: u64) -> f64 {
    if unbounded_ms == 0 {
      return 0.0;
    }
    bounded_pool_ms as f64 / unbounded_ms as f64
  }
}
