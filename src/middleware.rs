use axum::{extract::Request, http::header::AUTHORIZATION, middleware::Next, response::Response};
use tracing::{debug, warn};

use crate::shared::AppError;

/// Rejects requests that carry no Authorization header.
///
/// Only the presence of the header is checked; the token itself is not
/// inspected.
/// Usage: .route_layer(middleware::from_fn(require_authorization))
pub async fn require_authorization(req: Request, next: Next) -> Result<Response, AppError> {
    let present = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| !value.trim().is_empty());

    if !present {
        warn!(uri = %req.uri(), "Missing Authorization header in request");
        return Err(AppError::Unauthorized("missing token".to_string()));
    }

    debug!(uri = %req.uri(), "Authorization header present");
    Ok(next.run(req).await)
}
