use thiserror::Error;

/// Failures raised by the statistics write path and the aggregation engine.
///
/// Callers can tell bad input, a missing referenced entity and an unavailable
/// store apart, and decide whether to correct the request, create the entity
/// first or retry later.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StatsError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Reference error: {0}")]
    Reference(String),

    /// No statistic rows contribute to the requested aggregate.
    #[error("Not found: {0}")]
    NotFound(String),

    /// A record with the same id is already stored.
    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Storage error: {0}")]
    Storage(String),
}
