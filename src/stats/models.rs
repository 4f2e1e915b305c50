use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One logged performance of a player in a game.
///
/// Rows are append-only. Missing JSON fields fall back to their zero value so
/// that an absent player or game id is reported by validation rather than by
/// the JSON extractor.
#[derive(Debug, Clone, Default, PartialEq, FromRow, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerGameStatistic {
    pub id: String, // Assigned by the write path when empty
    pub player_id: String,
    pub game_id: String,
    pub points: i32,
    pub rebounds: i32,
    pub assists: i32,
    pub steals: i32,
    pub blocks: i32,
    pub fouls: i32, // 0..=6
    pub turnovers: i32,
    pub minutes_played: f64, // 0.0..=48.0
}

/// What an aggregate was computed for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AggregateSubject {
    Player(String),
    Team(String),
}

impl AggregateSubject {
    pub fn id(&self) -> &str {
        match self {
            AggregateSubject::Player(id) | AggregateSubject::Team(id) => id,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            AggregateSubject::Player(_) => "player",
            AggregateSubject::Team(_) => "team",
        }
    }
}

/// Season totals and per-game averages, recomputed on every request.
///
/// Exactly one of `player_id` and `team_id` is set. `games_played` counts
/// distinct game ids, not statistic rows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AggregateStats {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_id: Option<String>,
    pub games_played: u32,
    pub total_points: i64,
    pub total_rebounds: i64,
    pub total_assists: i64,
    pub total_steals: i64,
    pub total_blocks: i64,
    pub total_fouls: i64,
    pub total_turnovers: i64,
    pub total_minutes: f64,
    pub avg_points: f64,
    pub avg_rebounds: f64,
    pub avg_assists: f64,
    pub avg_steals: f64,
    pub avg_blocks: f64,
    pub avg_fouls: f64,
    pub avg_turnovers: f64,
    pub avg_minutes: f64,
}

impl AggregateStats {
    /// An all-zero aggregate tagged with its subject.
    pub fn empty(subject: &AggregateSubject) -> Self {
        let mut stats = Self::default();
        match subject {
            AggregateSubject::Player(id) => stats.player_id = Some(id.clone()),
            AggregateSubject::Team(id) => stats.team_id = Some(id.clone()),
        }
        stats
    }
}
