use hoopstats::{
    build_router,
    game::repository::{InMemoryGameRepository, PostgresGameRepository},
    player::repository::{InMemoryPlayerRepository, PlayerRepository, PostgresPlayerRepository},
    stats::{InMemoryStatisticStore, PostgresStatisticStore},
    team::repository::{InMemoryTeamRepository, PostgresTeamRepository},
    AppConfig, AppState,
};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hoopstats=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting basketball statistics server");

    let config = AppConfig::from_env()?;

    // Create shared application state with dependency injection
    let app_state = match &config.database_url {
        Some(database_url) => {
            let pool = PgPoolOptions::new()
                .max_connections(config.max_connections)
                .max_lifetime(config.conn_max_lifetime)
                .connect(database_url)
                .await?;

            sqlx::migrate!("./migrations").run(&pool).await?;
            info!("Database migrations applied");

            AppState::new(
                Arc::new(PostgresPlayerRepository::new(pool.clone())),
                Arc::new(PostgresTeamRepository::new(pool.clone())),
                Arc::new(PostgresGameRepository::new(pool.clone())),
                Arc::new(PostgresStatisticStore::new(pool)),
            )
        }
        None => {
            warn!("DATABASE_URL not set, using in-memory repositories");

            let players: Arc<dyn PlayerRepository + Send + Sync> =
                Arc::new(InMemoryPlayerRepository::new());
            AppState::new(
                Arc::clone(&players),
                Arc::new(InMemoryTeamRepository::new()),
                Arc::new(InMemoryGameRepository::new()),
                Arc::new(InMemoryStatisticStore::new(players)),
            )
        }
    };

    let app = build_router(app_state, config.request_timeout);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    info!(port = config.port, "Server running");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
