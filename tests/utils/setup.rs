use axum::Router;
use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;

use hoopstats::{
    build_router,
    game::{
        models::GameModel,
        repository::{GameRepository, InMemoryGameRepository},
    },
    player::{
        models::PlayerModel,
        repository::{InMemoryPlayerRepository, PlayerRepository},
    },
    stats::{InMemoryStatisticStore, StatisticStore},
    team::{
        models::TeamModel,
        repository::{InMemoryTeamRepository, TeamRepository},
    },
    AppState,
};

// ============================================================================
// Test Setup Infrastructure
// ============================================================================

pub struct TestSetup {
    pub app: Router,
    pub store: Arc<InMemoryStatisticStore>,
}

pub struct TestSetupBuilder {
    teams: Vec<String>,
    players: Vec<(String, String)>,
    games: Vec<String>,
    custom_store: Option<Arc<dyn StatisticStore + Send + Sync>>,
    request_timeout: Duration,
}

#[allow(dead_code)]
impl TestSetupBuilder {
    pub fn new() -> Self {
        Self {
            teams: vec![],
            players: vec![],
            games: vec![],
            custom_store: None,
            request_timeout: Duration::from_secs(5),
        }
    }

    pub fn with_team(mut self, team_id: &str) -> Self {
        self.teams.push(team_id.to_string());
        self
    }

    pub fn with_player(mut self, player_id: &str, team_id: &str) -> Self {
        self.players
            .push((player_id.to_string(), team_id.to_string()));
        self
    }

    pub fn with_games(mut self, game_ids: &[&str]) -> Self {
        self.games.extend(game_ids.iter().map(|id| id.to_string()));
        self
    }

    /// Two teammates on team1 and one opponent on team2, plus games 1 to 3.
    pub fn with_two_teams(self) -> Self {
        self.with_team("team1")
            .with_team("team2")
            .with_player("alice", "team1")
            .with_player("bob", "team1")
            .with_player("carol", "team2")
            .with_games(&["game1", "game2", "game3"])
    }

    /// Serves every statistics call from `store` instead of the in-memory one.
    pub fn with_statistic_store(mut self, store: Arc<dyn StatisticStore + Send + Sync>) -> Self {
        self.custom_store = Some(store);
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub async fn build(self) -> TestSetup {
        let players = Arc::new(InMemoryPlayerRepository::new());
        let teams = Arc::new(InMemoryTeamRepository::new());
        let games = Arc::new(InMemoryGameRepository::new());

        for team_id in &self.teams {
            teams
                .create_team(&TeamModel {
                    id: team_id.clone(),
                    name: format!("Team {}", team_id),
                })
                .await
                .unwrap();
        }

        for (player_id, team_id) in &self.players {
            players
                .create_player(&PlayerModel {
                    id: player_id.clone(),
                    name: player_id.to_uppercase(),
                    team_id: team_id.clone(),
                })
                .await
                .unwrap();
        }

        for game_id in &self.games {
            games
                .create_game(&GameModel {
                    id: game_id.clone(),
                    date: Utc::now(),
                    home_team: "team1".to_string(),
                    away_team: "team2".to_string(),
                })
                .await
                .unwrap();
        }

        let store = Arc::new(InMemoryStatisticStore::new(players.clone()));
        let stats_repository: Arc<dyn StatisticStore + Send + Sync> = match self.custom_store {
            Some(custom) => custom,
            None => store.clone() as Arc<dyn StatisticStore + Send + Sync>,
        };

        let state = AppState::new(players, teams, games, stats_repository);
        let app = build_router(state, self.request_timeout);

        TestSetup { app, store }
    }
}
