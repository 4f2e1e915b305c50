use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::shared::AppError;

/// Database model for games table
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct GameModel {
    pub id: String,
    pub date: DateTime<Utc>, // RFC 3339 on the wire
    pub home_team: String,
    pub away_team: String,
}

impl GameModel {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.id.trim().is_empty()
            || self.home_team.trim().is_empty()
            || self.away_team.trim().is_empty()
        {
            return Err(AppError::Validation(
                "game ID, home team, and away team cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}
