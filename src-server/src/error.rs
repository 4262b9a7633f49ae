use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

use catalog_core::errors::Error as CoreError;
use catalog_core::goods::GoodError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Core(#[from] CoreError),
    #[error("Invalid query parameters: {0}")]
    QueryParam(String),
    #[error("{0}")]
    Validation(String),
}

impl From<GoodError> for ApiError {
    fn from(err: GoodError) -> Self {
        ApiError::Core(CoreError::Good(err))
    }
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
    error: &'static str,
    status: u16,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // NotFound gets its own machine-readable shape so clients can tell
        // "absent" from "broken".
        if let ApiError::Core(CoreError::Good(GoodError::NotFound(_))) = &self {
            let body = Json(json!({
                "message": "errors.good.notFound",
                "code": 3,
                "details": {},
            }));
            return (StatusCode::NOT_FOUND, body).into_response();
        }

        let (status, error, message) = match &self {
            ApiError::QueryParam(msg) => (StatusCode::BAD_REQUEST, "query_param", msg.clone()),
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, "validation", msg.clone()),
            ApiError::Core(CoreError::Good(e)) => match e {
                GoodError::MaxPriorityExceeded { .. } => {
                    (StatusCode::BAD_REQUEST, "max_priority_exceeded", e.to_string())
                }
                GoodError::PriorityUnchanged(_) => {
                    (StatusCode::BAD_REQUEST, "priority_unchanged", e.to_string())
                }
                GoodError::InvalidData(_) => {
                    (StatusCode::BAD_REQUEST, "validation", e.to_string())
                }
                GoodError::DeadlineExceeded(_) => (
                    StatusCode::GATEWAY_TIMEOUT,
                    "deadline_exceeded",
                    "operation timed out".to_string(),
                ),
                _ => {
                    tracing::error!("store failure: {}", e);
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "internal",
                        "internal error".to_string(),
                    )
                }
            },
            ApiError::Core(CoreError::Validation(e)) => {
                (StatusCode::BAD_REQUEST, "validation", e.to_string())
            }
            other => {
                tracing::error!("request failed: {}", other);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal",
                    "internal error".to_string(),
                )
            }
        };

        let body = Json(ErrorBody {
            message,
            error,
            status: status.as_u16(),
        });
        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
