use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::{models::TeamModel, service::TeamService};
use crate::shared::{AppError, AppState};

/// HTTP handler for creating a team
///
/// POST /api/v1/teams
#[instrument(name = "create_team", skip(state))]
pub async fn create_team(
    State(state): State<AppState>,
    Json(team): Json<TeamModel>,
) -> Result<(StatusCode, Json<TeamModel>), AppError> {
    info!(team_id = %team.id, "Creating new team");

    let service = TeamService::new(Arc::clone(&state.team_repository));
    let team = service.create_team(team).await?;

    Ok((StatusCode::CREATED, Json(team)))
}

/// GET /api/v1/teams/:team_id
#[instrument(name = "get_team", skip(state))]
pub async fn get_team(
    State(state): State<AppState>,
    Path(team_id): Path<String>,
) -> Result<Json<TeamModel>, AppError> {
    let service = TeamService::new(Arc::clone(&state.team_repository));
    Ok(Json(service.get_team(&team_id).await?))
}
