use axum::{
    error_handling::HandleErrorLayer,
    extract::Request,
    middleware,
    routing::{get, post},
    BoxError, Router,
};
use std::time::Duration;
use tower::{
    timeout::{error::Elapsed, TimeoutLayer},
    ServiceBuilder,
};
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use tracing::{info_span, warn};

use crate::{
    game,
    health,
    middleware::require_authorization,
    player,
    shared::{AppError, AppState},
    stats,
    team,
};

/// Builds the full HTTP surface.
///
/// `/api/v1/*` requires an Authorization header; the health probes do not.
/// Every response carries the `x-request-id` assigned on the way in.
/// A request that outlives `request_timeout` is dropped, which cancels any
/// store call still in flight, and answered with a 408 JSON error.
pub fn build_router(state: AppState, request_timeout: Duration) -> Router {
    let api = Router::new()
        .route("/api/v1/player-stats", post(stats::log_player_stats))
        .route(
            "/api/v1/player-stats/player/:player_id",
            get(stats::get_player_aggregate),
        )
        .route(
            "/api/v1/player-stats/team/:team_id",
            get(stats::get_team_aggregate),
        )
        .route("/api/v1/players", post(player::create_player))
        .route("/api/v1/players/:player_id", get(player::get_player))
        .route("/api/v1/teams", post(team::create_team))
        .route("/api/v1/teams/:team_id", get(team::get_team))
        .route("/api/v1/games", post(game::create_game))
        .route("/api/v1/games/:game_id", get(game::get_game))
        .route_layer(middleware::from_fn(require_authorization));

    Router::new()
        .merge(api)
        .route("/health/live", get(health::liveness))
        .route("/health/ready", get(health::readiness))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(
                    TraceLayer::new_for_http().make_span_with(|request: &Request| {
                        let request_id = request
                            .headers()
                            .get("x-request-id")
                            .and_then(|value| value.to_str().ok())
                            .unwrap_or("-");
                        info_span!(
                            "http_request",
                            method = %request.method(),
                            uri = %request.uri(),
                            request_id = %request_id,
                        )
                    }),
                )
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(HandleErrorLayer::new(handle_middleware_error))
                .layer(TimeoutLayer::new(request_timeout))
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                ),
        )
        .with_state(state)
}

async fn handle_middleware_error(err: BoxError) -> AppError {
    if err.is::<Elapsed>() {
        warn!("Request timed out");
        AppError::Timeout
    } else {
        warn!(error = %err, "Unhandled middleware error");
        AppError::Internal(err.to_string())
    }
}
