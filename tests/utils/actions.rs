use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt; // for `oneshot`

// ============================================================================
// Request Helpers
// ============================================================================

const TOKEN: &str = "dummy-token";

pub async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .header("Authorization", TOKEN)
        .body(Body::from(body.to_string()))
        .unwrap();

    send(app, request).await
}

pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .header("Authorization", TOKEN)
        .body(Body::empty())
        .unwrap();

    send(app, request).await
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };
    (status, json)
}

/// Statistic entry payload with every counter at a plausible value.
#[allow(dead_code)]
pub fn stat_entry(player_id: &str, game_id: &str, points: i64) -> Value {
    json!({
        "player_id": player_id,
        "game_id": game_id,
        "points": points,
        "rebounds": 6,
        "assists": 4,
        "steals": 1,
        "blocks": 1,
        "fouls": 2,
        "turnovers": 3,
        "minutes_played": 30.0
    })
}
