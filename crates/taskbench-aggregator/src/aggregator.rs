//! Parallel aggregator implementation.

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, instrument};

use crate::error::FetchError;
use crate::source::{FetchSource, SimulatedSource};

/// Combined output of the three-way fan-out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregatedResult {
  pub source1_data: String,
  pub source2_data: String,
  pub source3_data: String,
  /// "Success", or the description of the first observed failure.
  pub status: String,
}

impl AggregatedResult {
  /// Marker written into every payload field when any fetch fails.
  pub const ERROR_MARKER: &'static str = "Error";

  /// Status value of a fully successful aggregation.
  pub const SUCCESS: &'static str = "Success";

  /// True when all three fetches completed.
  pub fn is_success(&self) -> bool {
    self.status == Self::SUCCESS
  }

  fn success(source1_data: String, source2_data: String, source3_data: String) -> Self {
    Self {
      source1_data,
      source2_data,
      source3_data,
      status: Self::SUCCESS.to_string(),
    }
  }

  fn failure(error: &FetchError) -> Self {
    Self {
      source1_data: Self::ERROR_MARKER.to_string(),
      source2_data: Self::ERROR_MARKER.to_string(),
      source3_data: Self::ERROR_MARKER.to_string(),
      status: error.to_string(),
    }
  }
}

/// Runs three fetch sources concurrently and combines their outputs.
///
/// All three fetches are started before any result is awaited. Failure
/// handling is all-or-nothing: the first observed failure replaces every
/// payload with [`AggregatedResult::ERROR_MARKER`] and its description
/// becomes the aggregate status. Degraded aggregates are returned as data,
/// never as an error.
pub struct ParallelAggregator {
  sources: [Arc<dyn FetchSource>; 3],
}

impl ParallelAggregator {
  /// Create an aggregator over three sources.
  pub fn new(
    first: Arc<dyn FetchSource>,
    second: Arc<dyn FetchSource>,
    third: Arc<dyn FetchSource>,
  ) -> Self {
    Self {
      sources: [first, second, third],
    }
  }

  /// Aggregator over the three stock simulated sources with their reference
  /// latencies.
  pub fn with_stock_sources() -> Self {
    Self::new(
      Arc::new(SimulatedSource::new(
        "source-1",
        "Data from source 1",
        Duration::from_millis(100),
      )),
      Arc::new(SimulatedSource::new(
        "source-2",
        "Data from source 2",
        Duration::from_millis(150),
      )),
      Arc::new(SimulatedSource::new(
        "source-3",
        "Data from source 3",
        Duration::from_millis(120),
      )),
    )
  }

  /// Fan out to all three sources and combine their payloads.
  #[instrument(name = "fetch_parallel", skip(self, cancel))]
  pub async fn fetch_all(&self, cancel: CancellationToken) -> AggregatedResult {
    info!("fetching from {} sources in parallel", self.sources.len());

    let [first, second, third] = &self.sources;

    // Start every fetch before awaiting any of them.
    let h1 = spawn_fetch(first, &cancel);
    let h2 = spawn_fetch(second, &cancel);
    let h3 = spawn_fetch(third, &cancel);

    let outcome = async {
      let d1 = join_fetch(first.name(), h1).await?;
      let d2 = join_fetch(second.name(), h2).await?;
      let d3 = join_fetch(third.name(), h3).await?;
      Ok::<_, FetchError>((d1, d2, d3))
    }
    .await;

    match outcome {
      Ok((d1, d2, d3)) => {
        info!("all sources fetched");
        AggregatedResult::success(d1, d2, d3)
      }
      Err(e) => {
        error!(error = %e, "aggregation failed");
        AggregatedResult::failure(&e)
      }
    }
  }
}

fn spawn_fetch(
  source: &Arc<dyn FetchSource>,
  cancel: &CancellationToken,
) -> JoinHandle<Result<String, FetchError>> {
  let source = source.clone();
  let cancel = cancel.clone();
  tokio::spawn(async move { source.fetch(cancel).await })
}

async fn join_fetch(
  name: &str,
  handle: JoinHandle<Result<String, FetchError>>,
) -> Result<String, FetchError> {
  match handle.await {
    Ok(result) => result,
    Err(e) => Err(FetchError::SourceFailure {
      source_name: name.to_string(),
      message: e.to_string(),
    }),
  }
}
