use serde::{Deserialize, Serialize};

/// Response for a logged statistic entry
#[derive(Debug, Serialize, Deserialize)]
pub struct LogStatisticsResponse {
    pub id: String,
    pub message: String,
}
