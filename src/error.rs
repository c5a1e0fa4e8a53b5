use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use listing::FetchError;
use serde_json::json;
use tracing::error;

#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    Upstream(FetchError),
    Internal(anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Upstream(FetchError::Malformed(err)) => {
                error!("Malformed CMS payload: {}", err);
                (
                    StatusCode::BAD_GATEWAY,
                    "CMS returned a malformed page".to_string(),
                )
            }
            AppError::Upstream(err) => {
                error!("CMS fetch failed: {}", err);
                (StatusCode::BAD_GATEWAY, "CMS unavailable".to_string())
            }
            AppError::Internal(err) => {
                error!("Internal error: {:#}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

impl From<FetchError> for AppError {
    fn from(err: FetchError) -> Self {
        match err {
            // The caller supplied the cursor, so a foreign one is their
            // error, not an upstream failure.
            FetchError::ForeignCursor(_) => {
                AppError::BadRequest("Cursor does not belong to the configured CMS".to_string())
            }
            err => AppError::Upstream(err),
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err)
    }
}
