//! Authentication API Handlers
//!
//! Login endpoint and the bearer-token extractor used by protected routes.

use axum::{
    Json,
    extract::{FromRequestParts, State},
    http::{header, request::Parts},
};
use relay_core::dto::auth::{LoginRequest, LoginResponse};

use crate::api::AppState;
use crate::api::error::{ApiError, ApiResult};
use crate::api::json::ApiJson;

/// POST /login
/// Exchange username and password for a bearer token
pub async fn login(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let token = state
        .auth
        .authenticate(&req.username, &req.password)
        .ok_or_else(|| {
            tracing::info!("Rejected login for {}", req.username);
            ApiError::Unauthorized("Invalid username or password".to_string())
        })?;

    tracing::info!("User logged in: {}", req.username);

    Ok(Json(LoginResponse {
        token: token.to_string(),
        message: format!("Login successful. Welcome, {}!", req.username),
    }))
}

/// Caller identity resolved from `Authorization: Bearer <token>`
#[derive(Debug, Clone)]
pub struct AuthUser(pub String);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> ApiResult<Self> {
        let token = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(bearer_token)
            .ok_or_else(|| ApiError::Unauthorized("Not authenticated".to_string()))?;

        let username = state
            .auth
            .resolve(token)
            .ok_or_else(|| ApiError::Unauthorized("Invalid authentication token".to_string()))?;

        Ok(AuthUser(username.to_string()))
    }
}

fn bearer_token(value: &str) -> Option<&str> {
    let (scheme, token) = value.trim().split_once(' ')?;
    let token = token.trim();

    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_token() {
        assert_eq!(bearer_token("Bearer abc"), Some("abc"));
        assert_eq!(bearer_token("bearer  abc "), Some("abc"));
        assert_eq!(bearer_token("Basic dXNlcjpwYXNz"), None);
        assert_eq!(bearer_token("Bearer"), None);
        assert_eq!(bearer_token("Bearer   "), None);
    }
}
