//! Access check handlers
//!
//! Endpoints front ends call before starting playback or joining a live session.

use axum::{extract::State, Json};
use serde::Deserialize;

use coursegate_core::domain::ports::{ContentRepository, FactsProvider, RoleRepository};
use coursegate_core::{AccessCheck, ContentId, PreviewRole, UserId};

use crate::error::AppError;
use crate::AppState;

/// Request body for POST /check-live-access
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveAccessRequest {
    pub session_id: Option<String>,
    pub user_id: Option<String>,
    /// Evaluate as a simulated learner (admin preview)
    #[serde(default)]
    pub preview_role: Option<PreviewRole>,
}

/// Request body for POST /check-video-access
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoAccessRequest {
    pub video_id: Option<String>,
    pub user_id: Option<String>,
    #[serde(default)]
    pub preview_role: Option<PreviewRole>,
}

/// Parse a required identifier from the request body
pub(crate) fn parse_id<T: std::str::FromStr>(
    value: Option<&str>,
    label: &str,
) -> Result<T, AppError> {
    let raw = value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::BadRequest(format!("{} is required", label)))?;

    raw.parse()
        .map_err(|_| AppError::BadRequest(format!("Invalid {}: {}", label, raw)))
}

/// POST /check-live-access
///
/// Decide whether a user may join a live session.
pub async fn check_live_access<FP, RR, CR>(
    State(state): State<AppState<FP, RR, CR>>,
    Json(request): Json<LiveAccessRequest>,
) -> Result<Json<AccessCheck>, AppError>
where
    FP: FactsProvider + 'static,
    RR: RoleRepository + 'static,
    CR: ContentRepository + 'static,
{
    let session_id: ContentId = parse_id(request.session_id.as_deref(), "Session ID")?;
    let user_id: UserId = parse_id(request.user_id.as_deref(), "User ID")?;

    let check = state
        .access_service
        .check_live_session_access(&user_id, &session_id, request.preview_role)
        .await?;

    Ok(Json(check))
}

/// POST /check-video-access
///
/// Decide whether a user may play a video.
pub async fn check_video_access<FP, RR, CR>(
    State(state): State<AppState<FP, RR, CR>>,
    Json(request): Json<VideoAccessRequest>,
) -> Result<Json<AccessCheck>, AppError>
where
    FP: FactsProvider + 'static,
    RR: RoleRepository + 'static,
    CR: ContentRepository + 'static,
{
    let video_id: ContentId = parse_id(request.video_id.as_deref(), "Video ID")?;
    let user_id: UserId = parse_id(request.user_id.as_deref(), "User ID")?;

    let check = state
        .access_service
        .check_video_access(&user_id, &video_id, request.preview_role)
        .await?;

    Ok(Json(check))
}
