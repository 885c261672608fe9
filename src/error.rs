//! Error type shared by state, services and handlers

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum FitError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("failed to lock {0} state")]
    StatePoisoned(&'static str),

    #[error("{0}")]
    Unavailable(String),
}

impl FitError {
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }

    pub fn bad_request(what: impl Into<String>) -> Self {
        Self::BadRequest(what.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::StatePoisoned(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl IntoResponse for FitError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}

pub type FitResult<T> = Result<T, FitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_variants_to_status_codes() {
        assert_eq!(FitError::not_found("Workout not found").status(), StatusCode::NOT_FOUND);
        assert_eq!(FitError::bad_request("empty").status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            FitError::StatePoisoned("session").status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            FitError::StatePoisoned("session").to_string(),
            "failed to lock session state"
        );
    }
}
