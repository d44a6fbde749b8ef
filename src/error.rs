use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::warn;

use crate::store::StoreError;

/// Transport-level failures. Rendered as plain text, the way the
/// catalog's clients expect.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    NotFound(#[from] StoreError),

    #[error("{0}")]
    MalformedRequest(String),

    #[error("Method not allowed")]
    MethodNotAllowed,
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::MalformedRequest(_) => StatusCode::BAD_REQUEST,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::MalformedRequest(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        warn!(status = status.as_u16(), error = %self, "Request failed");
        (status, self.to_string()).into_response()
    }
}
