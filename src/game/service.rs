use std::sync::Arc;
use tracing::{info, instrument};

use super::{models::GameModel, repository::GameRepository};
use crate::shared::AppError;

/// Service for handling game business logic
pub struct GameService {
    repository: Arc<dyn GameRepository + Send + Sync>,
}

impl GameService {
    pub fn new(repository: Arc<dyn GameRepository + Send + Sync>) -> Self {
        Self { repository }
    }

    #[instrument(skip(self))]
    pub async fn create_game(&self, game: GameModel) -> Result<GameModel, AppError> {
        game.validate()?;
        self.repository.create_game(&game).await?;

        info!(game_id = %game.id, date = %game.date, "Game created");
        Ok(game)
    }

    #[instrument(skip(self))]
    pub async fn get_game(&self, game_id: &str) -> Result<GameModel, AppError> {
        if game_id.trim().is_empty() {
            return Err(AppError::Validation("game ID cannot be empty".to_string()));
        }

        self.repository
            .get_game(game_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("game {} not found", game_id)))
    }
}
