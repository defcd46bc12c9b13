use crate::messages::detail_for;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use domain::DomainError;
use serde_json::json;
use tracing::error;

/// A domain failure on its way out as `{"detail": ...}`.
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            DomainError::DuplicateEmail(_) | DomainError::DuplicatePhone(_) => StatusCode::BAD_REQUEST,
            DomainError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            DomainError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            DomainError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(error: DomainError) -> Self {
        Self(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("Request failed: {}", self.0);
        }
        (status, Json(json!({ "detail": detail_for(&self.0) }))).into_response()
    }
}
