use diesel::result::Error as DieselError;
use thiserror::Error;

/// Custom error type for good-related operations
#[derive(Debug, Error)]
pub enum GoodError {
    #[error("Database error: {0}")]
    DatabaseError(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("New priority {requested} exceeds the current maximum {max}")]
    MaxPriorityExceeded { requested: i32, max: i32 },
    #[error("New priority must differ from the current priority {0}")]
    PriorityUnchanged(i32),
    #[error("Operation timed out: {0}")]
    DeadlineExceeded(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl From<DieselError> for GoodError {
    fn from(err: DieselError) -> Self {
        match err {
            DieselError::NotFound => GoodError::NotFound("Record not found".to_string()),
            DieselError::DatabaseError(_, ref info) if info.message().contains("locked") => {
                GoodError::DeadlineExceeded(info.message().to_string())
            }
            _ => GoodError::DatabaseError(err.to_string()),
        }
    }
}

impl From<r2d2::Error> for GoodError {
    fn from(err: r2d2::Error) -> Self {
        GoodError::DatabaseError(err.to_string())
    }
}

/// Result type for good operations
pub type Result<T> = std::result::Result<T, GoodError>;
