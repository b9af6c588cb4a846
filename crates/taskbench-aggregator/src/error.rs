//! Fetch errors.

/// Errors raised by a single fetch source.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
  /// The fetch was cancelled before producing a payload.
  #[error("fetch from {source_name} was cancelled")]
  Cancelled { source_name: String },

  /// The source itself failed.
  #[error("fetch from {source_name} failed: {message}")]
  SourceFailure { source_name: String, message: String },
}
