use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::shared::AppError;

/// Database model for players table
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct PlayerModel {
    pub id: String,
    pub name: String,
    pub team_id: String, // Membership used by team aggregates
}

impl PlayerModel {
    /// Checks that every field is filled in
    pub fn validate(&self) -> Result<(), AppError> {
        if self.id.trim().is_empty() || self.name.trim().is_empty() || self.team_id.trim().is_empty()
        {
            return Err(AppError::Validation(
                "player ID, name, and team ID cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}
