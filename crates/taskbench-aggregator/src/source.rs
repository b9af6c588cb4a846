//! Fetch sources.

use std::time::Duration;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::error::FetchError;

/// A named source of string data fetched concurrently by the aggregator.
#[async_trait]
pub trait FetchSource: Send + Sync + 'static {
  /// Source name used in logs and failure reporting.
  fn name(&self) -> &str;

  /// Fetch the source's payload.
  async fn fetch(&self, cancel: CancellationToken) -> Result<String, FetchError>;
}

/// A source that simulates I/O latency before returning a fixed payload.
pub struct SimulatedSource {
  name: String,
  payload: String,
  delay: Duration,
}

impl SimulatedSource {
  /// Create a simulated source with the given latency.
  pub fn new(name: impl Into<String>, payload: impl Into<String>, delay: Duration) -> Self {
    Self {
      name: name.into(),
      payload: payload.into(),
      delay,
    }
  }
}

#[async_trait]
impl FetchSource for SimulatedSource {
  fn name(&self) -> &str {
    &self.name
  }

  async fn fetch(&self, cancel: CancellationToken) -> Result<String, FetchError> {
    tokio::select! {
      _ = tokio::time::sleep(self.delay) => Ok(self.payload.clone()),
      _ = cancel.cancelled() => Err(FetchError::Cancelled {
        source_name: self.name.clone(),
      }),
    }
  }
}
