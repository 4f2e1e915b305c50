// Library crate for the basketball statistics service
// This file exposes the public API for integration tests

pub mod config;
pub mod game;
pub mod health;
pub mod middleware;
pub mod player;
pub mod routes;
pub mod shared;
pub mod stats;
pub mod team;

// Re-export commonly used types for easier access in tests
pub use config::AppConfig;
pub use routes::build_router;
pub use shared::{AppError, AppState};
pub use stats::{AggregateStats, AggregationService, PlayerGameStatistic, StatsError, StatsService};
