//! Mapping from store results to HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use docstore::error::DocumentStoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Data entry does not exist")]
    NotFound,
    #[error("Data entry already exists")]
    Conflict,
    #[error("Error reading request body: {0}")]
    Body(DocumentStoreError),
    #[error(transparent)]
    Store(#[from] DocumentStoreError),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Conflict => StatusCode::CONFLICT,
            ApiError::Body(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Store(DocumentStoreError::InvalidDocument(_)) => StatusCode::BAD_REQUEST,
            ApiError::Store(DocumentStoreError::ActorBusy(_)) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Store(DocumentStoreError::Timeout(_)) => StatusCode::GATEWAY_TIMEOUT,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        (status, self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn unaccepted_and_unanswered_requests_map_to_different_statuses() {
        let limit = Duration::from_millis(50);

        assert_eq!(
            ApiError::from(DocumentStoreError::ActorBusy(limit)).status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            ApiError::from(DocumentStoreError::Timeout(limit)).status(),
            StatusCode::GATEWAY_TIMEOUT
        );
    }
}
