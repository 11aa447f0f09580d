//! Role handlers

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use coursegate_core::domain::ports::{ContentRepository, FactsProvider, RoleRepository};
use coursegate_core::UserId;

use super::access::parse_id;
use crate::error::AppError;
use crate::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CanManageResponse {
    pub can_manage: bool,
}

/// GET /users/:user_id/can-manage-live-sessions
pub async fn can_manage_live_sessions<FP, RR, CR>(
    State(state): State<AppState<FP, RR, CR>>,
    Path(user_id): Path<String>,
) -> Result<Json<CanManageResponse>, AppError>
where
    FP: FactsProvider + 'static,
    RR: RoleRepository + 'static,
    CR: ContentRepository + 'static,
{
    let user_id: UserId = parse_id(Some(user_id.as_str()), "User ID")?;
    let can_manage = state.access_service.can_manage_live_sessions(&user_id).await;

    Ok(Json(CanManageResponse { can_manage }))
}
