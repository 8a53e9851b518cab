use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use capworks_core::error::{CoreError, LifecycleError};
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`]; storage failures arrive already mapped by the
/// [`ProjectStore`](capworks_core::store::ProjectStore) implementation.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `capworks_core`.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl From<LifecycleError> for AppError {
    fn from(err: LifecycleError) -> Self {
        AppError::Core(CoreError::Lifecycle(err))
    }
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let mut field = None;
        let AppError::Core(core) = &self;
        let (status, code, message) = match core {
            CoreError::NotFound { entity, id } => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                format!("{entity} with id {id} not found"),
            ),
            CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            CoreError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
            CoreError::Lifecycle(err) => {
                field = err.field();
                match err {
                    LifecycleError::IllegalTransition { .. } => {
                        (StatusCode::CONFLICT, "ILLEGAL_TRANSITION", err.to_string())
                    }
                    LifecycleError::MissingField { .. } => {
                        (StatusCode::BAD_REQUEST, "MISSING_FIELD", err.to_string())
                    }
                    LifecycleError::InvalidValue { .. } => {
                        (StatusCode::BAD_REQUEST, "INVALID_VALUE", err.to_string())
                    }
                }
            }
            CoreError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal core error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let mut body = json!({
            "error": message,
            "code": code,
        });
        if let Some(field) = field {
            body["field"] = json!(field);
        }

        (status, axum::Json(body)).into_response()
    }
}
