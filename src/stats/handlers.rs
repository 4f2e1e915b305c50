use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::{
    aggregation::AggregationService, service::StatsService, types::LogStatisticsResponse,
    AggregateStats, PlayerGameStatistic,
};
use crate::shared::{AppError, AppState};

/// HTTP handler for logging one player's statistics for a game
///
/// POST /api/v1/player-stats
#[instrument(name = "log_player_stats", skip(state, entry))]
pub async fn log_player_stats(
    State(state): State<AppState>,
    Json(entry): Json<PlayerGameStatistic>,
) -> Result<(StatusCode, Json<LogStatisticsResponse>), AppError> {
    info!(player_id = %entry.player_id, game_id = %entry.game_id, "Logging player stats");

    let service = StatsService::new(
        Arc::clone(&state.player_repository),
        Arc::clone(&state.game_repository),
        Arc::clone(&state.stats_repository),
    );
    let id = service.log_statistics(entry).await?;

    Ok((
        StatusCode::CREATED,
        Json(LogStatisticsResponse {
            id,
            message: "Player stats logged successfully".to_string(),
        }),
    ))
}

/// GET /api/v1/player-stats/player/:player_id
#[instrument(name = "get_player_aggregate", skip(state))]
pub async fn get_player_aggregate(
    State(state): State<AppState>,
    Path(player_id): Path<String>,
) -> Result<Json<AggregateStats>, AppError> {
    info!(player_id = %player_id, "Fetching player aggregate");

    let service = AggregationService::new(Arc::clone(&state.stats_repository));
    let aggregate = service.player_aggregate(&player_id).await?;

    Ok(Json(aggregate))
}

/// GET /api/v1/player-stats/team/:team_id
#[instrument(name = "get_team_aggregate", skip(state))]
pub async fn get_team_aggregate(
    State(state): State<AppState>,
    Path(team_id): Path<String>,
) -> Result<Json<AggregateStats>, AppError> {
    info!(team_id = %team_id, "Fetching team aggregate");

    let service = AggregationService::new(Arc::clone(&state.stats_repository));
    let aggregate = service.team_aggregate(&team_id).await?;

    Ok(Json(aggregate))
}
