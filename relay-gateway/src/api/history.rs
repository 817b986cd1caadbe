//! History API Handlers

use axum::{Json, extract::State};
use relay_core::dto::history::{ClearHistoryResponse, HistoryResponse};

use crate::api::AppState;
use crate::api::auth::AuthUser;
use crate::api::error::ApiResult;

/// GET /history
/// The caller's prompt history in submission order
pub async fn get_history(
    State(state): State<AppState>,
    AuthUser(username): AuthUser,
) -> ApiResult<Json<HistoryResponse>> {
    tracing::debug!("Getting history for {}", username);

    let entries = state.history.list(&username).await?;

    Ok(Json(HistoryResponse::new(username, entries)))
}

/// DELETE /history
/// Remove all of the caller's history entries
pub async fn clear_history(
    State(state): State<AppState>,
    AuthUser(username): AuthUser,
) -> ApiResult<Json<ClearHistoryResponse>> {
    let cleared = state.history.clear(&username).await?;

    Ok(Json(ClearHistoryResponse { username, cleared }))
}
