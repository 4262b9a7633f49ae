use thiserror::Error;

/// Custom error type for listing cache operations.
/// A missing key is a miss, never an error; only scan-level failures of
/// the backing store surface here.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Cache backend error: {0}")]
    Backend(String),
}

/// Result type for cache operations
pub type Result<T> = std::result::Result<T, CacheError>;
