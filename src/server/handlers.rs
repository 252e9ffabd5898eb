use axum::{
    Json,
    body::Bytes,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
};
use serde::Serialize;

use super::{AppState, error::ApiError};
use crate::core::SourceMode;
use crate::service::ProfileResponse;
use crate::window::ProfileParams;

/// GET|POST /api/github
///
/// Query parameters win over fields of an optional JSON body.
pub async fn github_profile(
    State(state): State<AppState>,
    query: Result<Query<ProfileParams>, QueryRejection>,
    body: Bytes,
) -> Result<Json<ProfileResponse>, ApiError> {
    let Query(query) = query.map_err(|e| {
        ApiError::new(
            StatusCode::BAD_REQUEST,
            "Invalid query parameters",
            Some(e.body_text().into()),
        )
    })?;

    let params = query.or(body_params(&body));
    let resp = state.service.handle(&params).await?;

    tracing::info!(
        cached = resp.cached,
        recent = resp.profile.recent.len(),
        contributions = resp.profile.contributions.len(),
        "served profile"
    );
    Ok(Json(resp))
}

/// An absent or unreadable body contributes nothing.
fn body_params(body: &[u8]) -> ProfileParams {
    if body.iter().all(u8::is_ascii_whitespace) {
        return ProfileParams::default();
    }
    serde_json::from_slice(body).unwrap_or_else(|e| {
        tracing::debug!(error = %e, "ignoring unparseable request body");
        ProfileParams::default()
    })
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub mode: &'static str,
}

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let mode = match state.service.mode() {
        SourceMode::Authenticated => "authenticated",
        SourceMode::PublicFallback => "public",
    };
    Json(HealthResponse { status: "ok", mode })
}

/// Any other path.
pub async fn not_found() -> ApiError {
    ApiError::not_found()
}
