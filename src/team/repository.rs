use async_trait::async_trait;
use sqlx::PgPool;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::{debug, instrument, warn};

use super::models::TeamModel;
use crate::shared::AppError;

/// Trait for team repository operations
#[async_trait]
pub trait TeamRepository {
    async fn create_team(&self, team: &TeamModel) -> Result<(), AppError>;
    async fn get_team(&self, team_id: &str) -> Result<Option<TeamModel>, AppError>;
}

/// In-memory implementation of TeamRepository for development and testing
pub struct InMemoryTeamRepository {
    teams: RwLock<HashMap<String, TeamModel>>,
}

impl Default for InMemoryTeamRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryTeamRepository {
    pub fn new() -> Self {
        Self {
            teams: RwLock::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl TeamRepository for InMemoryTeamRepository {
    #[instrument(skip(self, team))]
    async fn create_team(&self, team: &TeamModel) -> Result<(), AppError> {
        debug!(team_id = %team.id, name = %team.name, "Creating team in memory");

        let mut teams = self.teams.write().await;
        if teams.contains_key(&team.id) {
            warn!(team_id = %team.id, "Team already exists in memory");
            return Err(AppError::DatabaseError("Team already exists".to_string()));
        }
        teams.insert(team.id.clone(), team.clone());

        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_team(&self, team_id: &str) -> Result<Option<TeamModel>, AppError> {
        Ok(self.teams.read().await.get(team_id).cloned())
    }
}

/// PostgreSQL implementation of team repository
pub struct PostgresTeamRepository {
    pool: PgPool,
}

impl PostgresTeamRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TeamRepository for PostgresTeamRepository {
    #[instrument(skip(self, team))]
    async fn create_team(&self, team: &TeamModel) -> Result<(), AppError> {
        debug!(team_id = %team.id, "Creating team in database");

        sqlx::query("INSERT INTO teams (id, name) VALUES ($1, $2)")
            .bind(&team.id)
            .bind(&team.name)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                warn!(error = %e, "Failed to create team in database");
                AppError::DatabaseError(e.to_string())
            })?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_team(&self, team_id: &str) -> Result<Option<TeamModel>, AppError> {
        sqlx::query_as::<_, TeamModel>("SELECT id, name FROM teams WHERE id = $1")
            .bind(team_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                warn!(error = %e, team_id = %team_id, "Failed to fetch team from database");
                AppError::DatabaseError(e.to_string())
            })
    }
}
