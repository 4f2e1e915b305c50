use std::sync::Arc;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use super::{
    repository::StatisticStore, validation::validate_statistic, PlayerGameStatistic, StatsError,
};
use crate::game::repository::GameRepository;
use crate::player::repository::PlayerRepository;
use crate::shared::AppError;

/// Write path for player game statistics: validate, check references, append.
pub struct StatsService {
    players: Arc<dyn PlayerRepository + Send + Sync>,
    games: Arc<dyn GameRepository + Send + Sync>,
    store: Arc<dyn StatisticStore + Send + Sync>,
}

impl StatsService {
    pub fn new(
        players: Arc<dyn PlayerRepository + Send + Sync>,
        games: Arc<dyn GameRepository + Send + Sync>,
        store: Arc<dyn StatisticStore + Send + Sync>,
    ) -> Self {
        Self {
            players,
            games,
            store,
        }
    }

    /// Stores one entry and returns its record id.
    ///
    /// Nothing is written unless validation passes and both the player and
    /// the game exist. An entry without an id gets a fresh UUID.
    #[instrument(skip(self, entry), fields(player_id = %entry.player_id, game_id = %entry.game_id))]
    pub async fn log_statistics(
        &self,
        mut entry: PlayerGameStatistic,
    ) -> Result<String, StatsError> {
        validate_statistic(&entry).inspect_err(|e| {
            warn!(error = %e, "Rejected statistic entry");
        })?;

        let player = self
            .players
            .get_player(&entry.player_id)
            .await
            .map_err(lookup_failure)?;
        if player.is_none() {
            warn!("Referenced player does not exist");
            return Err(StatsError::Reference("player not found".to_string()));
        }

        let game = self
            .games
            .get_game(&entry.game_id)
            .await
            .map_err(lookup_failure)?;
        if game.is_none() {
            warn!("Referenced game does not exist");
            return Err(StatsError::Reference("game not found".to_string()));
        }

        if entry.id.trim().is_empty() {
            entry.id = Uuid::new_v4().to_string();
            debug!(record_id = %entry.id, "Assigned record id");
        }

        self.store.insert(&entry).await?;

        info!(record_id = %entry.id, points = entry.points, "Statistic entry logged");
        Ok(entry.id)
    }
}

fn lookup_failure(e: AppError) -> StatsError {
    StatsError::Storage(e.to_string())
}
