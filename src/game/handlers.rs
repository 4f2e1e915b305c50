use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::{models::GameModel, service::GameService};
use crate::shared::{AppError, AppState};

/// HTTP handler for creating a game
///
/// POST /api/v1/games
#[instrument(name = "create_game", skip(state))]
pub async fn create_game(
    State(state): State<AppState>,
    Json(game): Json<GameModel>,
) -> Result<(StatusCode, Json<GameModel>), AppError> {
    info!(game_id = %game.id, "Creating new game");

    let service = GameService::new(Arc::clone(&state.game_repository));
    let game = service.create_game(game).await?;

    Ok((StatusCode::CREATED, Json(game)))
}

/// GET /api/v1/games/:game_id
#[instrument(name = "get_game", skip(state))]
pub async fn get_game(
    State(state): State<AppState>,
    Path(game_id): Path<String>,
) -> Result<Json<GameModel>, AppError> {
    let service = GameService::new(Arc::clone(&state.game_repository));
    Ok(Json(service.get_game(&game_id).await?))
}
