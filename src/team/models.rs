use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::shared::AppError;

/// Database model for teams table
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct TeamModel {
    pub id: String,
    pub name: String,
}

impl TeamModel {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.id.trim().is_empty() || self.name.trim().is_empty() {
            return Err(AppError::Validation(
                "team ID and name cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}
