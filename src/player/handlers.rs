use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::{models::PlayerModel, service::PlayerService, types::PlayerCreateRequest};
use crate::shared::{AppError, AppState};

/// HTTP handler for creating a player
///
/// POST /api/v1/players
#[instrument(name = "create_player", skip(state))]
pub async fn create_player(
    State(state): State<AppState>,
    Json(request): Json<PlayerCreateRequest>,
) -> Result<(StatusCode, Json<PlayerModel>), AppError> {
    info!(player_id = %request.id, "Creating new player");

    let service = PlayerService::new(Arc::clone(&state.player_repository));
    let player = service.create_player(request).await?;

    Ok((StatusCode::CREATED, Json(player)))
}

/// GET /api/v1/players/:player_id
#[instrument(name = "get_player", skip(state))]
pub async fn get_player(
    State(state): State<AppState>,
    Path(player_id): Path<String>,
) -> Result<Json<PlayerModel>, AppError> {
    let service = PlayerService::new(Arc::clone(&state.player_repository));
    let player = service.get_player(&player_id).await?;

    Ok(Json(player))
}
