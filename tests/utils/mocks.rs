use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use hoopstats::stats::{PlayerGameStatistic, StatisticStore, StatsError};

// ============================================================================
// Mock Infrastructure
// ============================================================================

/// Statistic store whose every call fails as if the database were down.
#[derive(Default)]
pub struct FailingStatisticStore {
    calls: AtomicUsize,
}

#[allow(dead_code)]
impl FailingStatisticStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn fail<T>(&self) -> Result<T, StatsError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(StatsError::Storage("connection refused".to_string()))
    }
}

#[async_trait]
impl StatisticStore for FailingStatisticStore {
    async fn insert(&self, _stat: &PlayerGameStatistic) -> Result<(), StatsError> {
        self.fail()
    }

    async fn fetch_by_player(
        &self,
        _player_id: &str,
    ) -> Result<Vec<PlayerGameStatistic>, StatsError> {
        self.fail()
    }

    async fn fetch_by_team(&self, _team_id: &str) -> Result<Vec<PlayerGameStatistic>, StatsError> {
        self.fail()
    }

    async fn ping(&self) -> Result<(), StatsError> {
        self.fail()
    }
}

/// Statistic store whose reads hang for `delay` before answering.
///
/// `completed_reads` only moves when a fetch runs to the end, so a request
/// dropped by the router timeout leaves it at zero.
pub struct SlowStatisticStore {
    delay: Duration,
    completed_reads: AtomicUsize,
}

#[allow(dead_code)]
impl SlowStatisticStore {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            completed_reads: AtomicUsize::new(0),
        }
    }

    pub fn completed_reads(&self) -> usize {
        self.completed_reads.load(Ordering::SeqCst)
    }

    async fn stall(&self) -> Result<Vec<PlayerGameStatistic>, StatsError> {
        tokio::time::sleep(self.delay).await;
        self.completed_reads.fetch_add(1, Ordering::SeqCst);
        Ok(vec![PlayerGameStatistic {
            id: "late".to_string(),
            player_id: "alice".to_string(),
            game_id: "game1".to_string(),
            points: 99,
            ..Default::default()
        }])
    }
}

#[async_trait]
impl StatisticStore for SlowStatisticStore {
    async fn insert(&self, _stat: &PlayerGameStatistic) -> Result<(), StatsError> {
        Ok(())
    }

    async fn fetch_by_player(
        &self,
        _player_id: &str,
    ) -> Result<Vec<PlayerGameStatistic>, StatsError> {
        self.stall().await
    }

    async fn fetch_by_team(&self, _team_id: &str) -> Result<Vec<PlayerGameStatistic>, StatsError> {
        self.stall().await
    }

    async fn ping(&self) -> Result<(), StatsError> {
        Ok(())
    }
}
