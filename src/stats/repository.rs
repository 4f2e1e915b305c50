use async_trait::async_trait;
use sqlx::PgPool;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, instrument, warn};

use super::{PlayerGameStatistic, StatsError};
use crate::player::repository::PlayerRepository;

/// Append-only ledger of player game statistics.
///
/// The fetch operations return the raw contributing rows; grouping and
/// averaging happen in the aggregation engine.
#[async_trait]
pub trait StatisticStore {
    async fn insert(&self, stat: &PlayerGameStatistic) -> Result<(), StatsError>;
    async fn fetch_by_player(&self, player_id: &str)
        -> Result<Vec<PlayerGameStatistic>, StatsError>;

    /// Rows of every player whose team id matches.
    async fn fetch_by_team(&self, team_id: &str) -> Result<Vec<PlayerGameStatistic>, StatsError>;

    /// Checks the store is reachable.
    async fn ping(&self) -> Result<(), StatsError>;
}

/// In-memory implementation of StatisticStore for development and testing
///
/// Team membership is resolved through the player repository at read time,
/// the same join the database performs against the players table.
pub struct InMemoryStatisticStore {
    rows: RwLock<Vec<PlayerGameStatistic>>,
    players: Arc<dyn PlayerRepository + Send + Sync>,
}

impl InMemoryStatisticStore {
    pub fn new(players: Arc<dyn PlayerRepository + Send + Sync>) -> Self {
        Self {
            rows: RwLock::new(Vec::new()),
            players,
        }
    }

    /// Returns the number of stored rows
    pub async fn row_count(&self) -> usize {
        self.rows.read().await.len()
    }
}

#[async_trait]
impl StatisticStore for InMemoryStatisticStore {
    #[instrument(skip(self, stat))]
    async fn insert(&self, stat: &PlayerGameStatistic) -> Result<(), StatsError> {
        debug!(record_id = %stat.id, player_id = %stat.player_id, game_id = %stat.game_id, "Inserting statistic in memory");

        let mut rows = self.rows.write().await;
        if rows.iter().any(|row| row.id == stat.id) {
            warn!(record_id = %stat.id, "Statistic record already exists in memory");
            return Err(StatsError::Conflict(format!(
                "statistic record {} already exists",
                stat.id
            )));
        }
        rows.push(stat.clone());

        Ok(())
    }

    #[instrument(skip(self))]
    async fn fetch_by_player(
        &self,
        player_id: &str,
    ) -> Result<Vec<PlayerGameStatistic>, StatsError> {
        let rows = self.rows.read().await;
        let matching: Vec<PlayerGameStatistic> = rows
            .iter()
            .filter(|row| row.player_id == player_id)
            .cloned()
            .collect();

        debug!(player_id = %player_id, rows = matching.len(), "Fetched player statistics from memory");
        Ok(matching)
    }

    #[instrument(skip(self))]
    async fn fetch_by_team(&self, team_id: &str) -> Result<Vec<PlayerGameStatistic>, StatsError> {
        let roster: HashSet<String> = self
            .players
            .list_team_players(team_id)
            .await
            .map_err(|e| StatsError::Storage(e.to_string()))?
            .into_iter()
            .map(|player| player.id)
            .collect();

        let rows = self.rows.read().await;
        let matching: Vec<PlayerGameStatistic> = rows
            .iter()
            .filter(|row| roster.contains(&row.player_id))
            .cloned()
            .collect();

        debug!(team_id = %team_id, players = roster.len(), rows = matching.len(), "Fetched team statistics from memory");
        Ok(matching)
    }

    async fn ping(&self) -> Result<(), StatsError> {
        Ok(())
    }
}

/// PostgreSQL implementation of the statistic store
pub struct PostgresStatisticStore {
    pool: PgPool,
}

impl PostgresStatisticStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn storage_error(e: sqlx::Error) -> StatsError {
    warn!(error = %e, "Statistic store query failed");
    StatsError::Storage(e.to_string())
}

/// Primary key collisions are the caller's fault; everything else is storage.
fn insert_error(e: sqlx::Error, record_id: &str) -> StatsError {
    let duplicate = e
        .as_database_error()
        .is_some_and(|db| db.is_unique_violation());
    if duplicate {
        warn!(record_id = %record_id, "Statistic record already exists in database");
        return StatsError::Conflict(format!("statistic record {} already exists", record_id));
    }
    storage_error(e)
}

#[async_trait]
impl StatisticStore for PostgresStatisticStore {
    #[instrument(skip(self, stat))]
    async fn insert(&self, stat: &PlayerGameStatistic) -> Result<(), StatsError> {
        debug!(record_id = %stat.id, player_id = %stat.player_id, game_id = %stat.game_id, "Inserting statistic in database");

        sqlx::query(
            "INSERT INTO player_game_stats (id, player_id, game_id, points, rebounds, assists, steals, blocks, fouls, turnovers, minutes_played) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)",
        )
        .bind(&stat.id)
        .bind(&stat.player_id)
        .bind(&stat.game_id)
        .bind(stat.points)
        .bind(stat.rebounds)
        .bind(stat.assists)
        .bind(stat.steals)
        .bind(stat.blocks)
        .bind(stat.fouls)
        .bind(stat.turnovers)
        .bind(stat.minutes_played)
        .execute(&self.pool)
        .await
        .map_err(|e| insert_error(e, &stat.id))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn fetch_by_player(
        &self,
        player_id: &str,
    ) -> Result<Vec<PlayerGameStatistic>, StatsError> {
        let rows = sqlx::query_as::<_, PlayerGameStatistic>(
            "SELECT id, player_id, game_id, points, rebounds, assists, steals, blocks, fouls, turnovers, minutes_played \
             FROM player_game_stats WHERE player_id = $1",
        )
        .bind(player_id)
        .fetch_all(&self.pool)
        .await
        .map_err(storage_error)?;

        debug!(player_id = %player_id, rows = rows.len(), "Fetched player statistics from database");
        Ok(rows)
    }

    #[instrument(skip(self))]
    async fn fetch_by_team(&self, team_id: &str) -> Result<Vec<PlayerGameStatistic>, StatsError> {
        let rows = sqlx::query_as::<_, PlayerGameStatistic>(
            "SELECT ps.id, ps.player_id, ps.game_id, ps.points, ps.rebounds, ps.assists, ps.steals, ps.blocks, ps.fouls, ps.turnovers, ps.minutes_played \
             FROM player_game_stats ps \
             INNER JOIN players p ON ps.player_id = p.id \
             WHERE p.team_id = $1",
        )
        .bind(team_id)
        .fetch_all(&self.pool)
        .await
        .map_err(storage_error)?;

        debug!(team_id = %team_id, rows = rows.len(), "Fetched team statistics from database");
        Ok(rows)
    }

    async fn ping(&self) -> Result<(), StatsError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(storage_error)?;
        Ok(())
    }
}
