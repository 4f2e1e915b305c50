// Public API - what other modules can use
pub use aggregation::{aggregate, AggregationService, StatTotals};
pub use errors::StatsError;
pub use handlers::{get_player_aggregate, get_team_aggregate, log_player_stats};
pub use models::*;
pub use repository::{InMemoryStatisticStore, PostgresStatisticStore, StatisticStore};
pub use service::StatsService;
pub use validation::validate_statistic;

// Internal modules
pub mod aggregation;
mod errors;
mod handlers;
pub mod models;
pub mod repository;
pub mod service;
pub mod types;
pub mod validation;
