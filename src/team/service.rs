use std::sync::Arc;
use tracing::{info, instrument};

use super::{models::TeamModel, repository::TeamRepository};
use crate::shared::AppError;

/// Service for handling team business logic
pub struct TeamService {
    repository: Arc<dyn TeamRepository + Send + Sync>,
}

impl TeamService {
    pub fn new(repository: Arc<dyn TeamRepository + Send + Sync>) -> Self {
        Self { repository }
    }

    #[instrument(skip(self))]
    pub async fn create_team(&self, team: TeamModel) -> Result<TeamModel, AppError> {
        team.validate()?;
        self.repository.create_team(&team).await?;

        info!(team_id = %team.id, "Team created");
        Ok(team)
    }

    #[instrument(skip(self))]
    pub async fn get_team(&self, team_id: &str) -> Result<TeamModel, AppError> {
        if team_id.trim().is_empty() {
            return Err(AppError::Validation("team ID cannot be empty".to_string()));
        }

        self.repository
            .get_team(team_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("team {} not found", team_id)))
    }
}
