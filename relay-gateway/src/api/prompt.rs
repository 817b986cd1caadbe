//! Prompt API Handlers

use axum::{Json, extract::State};
use relay_core::domain::history::timestamp_now;
use relay_core::dto::prompt::{PromptRequest, PromptResponse};

use crate::api::AppState;
use crate::api::auth::AuthUser;
use crate::api::error::{ApiError, ApiResult};
use crate::api::json::ApiJson;

/// POST /prompt
/// Run a prompt through the model and record it in the caller's history
pub async fn submit_prompt(
    State(state): State<AppState>,
    AuthUser(username): AuthUser,
    ApiJson(req): ApiJson<PromptRequest>,
) -> ApiResult<Json<PromptResponse>> {
    if req.prompt.is_empty() {
        return Err(ApiError::Validation("prompt must not be empty".to_string()));
    }

    tracing::info!(
        "Prompt from {} ({} chars)",
        username,
        req.prompt.chars().count()
    );

    let response = state.predictor.predict(&req.prompt).await?;

    // Store failures are logged; the response is still returned.
    let timestamp = match state.history.append(&username, &req.prompt, &response).await {
        Ok(entry) => entry.timestamp,
        Err(e) => {
            tracing::error!("Failed to record history for {}: {}", username, e);
            timestamp_now()
        }
    };

    Ok(Json(PromptResponse {
        prompt: req.prompt,
        response,
        timestamp,
    }))
}
