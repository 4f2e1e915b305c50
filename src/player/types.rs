use serde::Deserialize;

use super::models::PlayerModel;

/// Request payload for creating a player
#[derive(Debug, Deserialize)]
pub struct PlayerCreateRequest {
    pub id: String,
    pub name: String,
    pub team_id: String,
}

impl From<PlayerCreateRequest> for PlayerModel {
    fn from(request: PlayerCreateRequest) -> Self {
        Self {
            id: request.id,
            name: request.name,
            team_id: request.team_id,
        }
    }
}
