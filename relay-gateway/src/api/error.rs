//! API Error Handling
//!
//! Unified error types and conversion for API responses.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use relay_client::PollError;

use crate::repository::history_repository::HistoryError;

/// API error type
#[derive(Debug)]
pub enum ApiError {
    Unauthorized(String),
    Validation(String),
    InvalidBody(JsonRejection),
    Upstream(PollError),
    HistoryError(HistoryError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Unauthorized(msg) => {
                let body = Json(serde_json::json!({ "detail": msg }));
                return (
                    StatusCode::UNAUTHORIZED,
                    [(header::WWW_AUTHENTICATE, "Bearer")],
                    body,
                )
                    .into_response();
            }
            ApiError::Validation(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::InvalidBody(rejection) => (rejection.status(), rejection.body_text()),
            ApiError::Upstream(err) => {
                let status =
                    StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::BAD_GATEWAY);
                if err.is_client_error() {
                    tracing::warn!("Upstream rejected request: {}", err);
                } else {
                    tracing::error!("Upstream error: {}", err);
                }
                (status, err.to_string())
            }
            ApiError::HistoryError(err) => {
                tracing::error!("History error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(serde_json::json!({ "detail": message }))).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidBody(rejection)
    }
}

impl From<PollError> for ApiError {
    fn from(err: PollError) -> Self {
        ApiError::Upstream(err)
    }
}

impl From<HistoryError> for ApiError {
    fn from(err: HistoryError) -> Self {
        ApiError::HistoryError(err)
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_unauthorized_sets_challenge_header() {
        let response = ApiError::Unauthorized("nope".into()).into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(response.headers()[header::WWW_AUTHENTICATE], "Bearer");
    }

    #[test]
    fn test_upstream_status_mapping() {
        let cases = [
            (PollError::Timeout(Duration::from_secs(1)), StatusCode::GATEWAY_TIMEOUT),
            (PollError::ConnectionFailure("x".into()), StatusCode::SERVICE_UNAVAILABLE),
            (PollError::Canceled, StatusCode::INTERNAL_SERVER_ERROR),
            (PollError::ProtocolError("x".into()), StatusCode::BAD_GATEWAY),
            (PollError::upstream_error(429, "slow down"), StatusCode::TOO_MANY_REQUESTS),
        ];

        for (err, expected) in cases {
            assert_eq!(ApiError::from(err).into_response().status(), expected);
        }
    }
}
