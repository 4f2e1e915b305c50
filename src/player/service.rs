use std::sync::Arc;
use tracing::{info, instrument};

use super::{models::PlayerModel, repository::PlayerRepository, types::PlayerCreateRequest};
use crate::shared::AppError;

/// Service for handling player business logic
pub struct PlayerService {
    repository: Arc<dyn PlayerRepository + Send + Sync>,
}

impl PlayerService {
    pub fn new(repository: Arc<dyn PlayerRepository + Send + Sync>) -> Self {
        Self { repository }
    }

    #[instrument(skip(self))]
    pub async fn create_player(&self, request: PlayerCreateRequest) -> Result<PlayerModel, AppError> {
        let player = PlayerModel::from(request);
        player.validate()?;

        self.repository.create_player(&player).await?;

        info!(player_id = %player.id, team_id = %player.team_id, "Player created");
        Ok(player)
    }

    #[instrument(skip(self))]
    pub async fn get_player(&self, player_id: &str) -> Result<PlayerModel, AppError> {
        if player_id.trim().is_empty() {
            return Err(AppError::Validation(
                "player ID cannot be empty".to_string(),
            ));
        }

        self.repository
            .get_player(player_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("player {} not found", player_id)))
    }
}
