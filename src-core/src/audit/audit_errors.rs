use diesel::result::Error as DieselError;
use thiserror::Error;

/// Custom error type for audit sink operations
#[derive(Debug, Error)]
pub enum AuditError {
    #[error("Sink write failed: {0}")]
    Sink(String),
}

impl From<DieselError> for AuditError {
    fn from(err: DieselError) -> Self {
        AuditError::Sink(err.to_string())
    }
}

/// Result type for audit operations
pub type Result<T> = std::result::Result<T, AuditError>;
