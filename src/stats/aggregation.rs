use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use super::{
    repository::StatisticStore, AggregateStats, AggregateSubject, PlayerGameStatistic, StatsError,
};

/// Running sums over a set of statistic rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatTotals {
    pub points: i64,
    pub rebounds: i64,
    pub assists: i64,
    pub steals: i64,
    pub blocks: i64,
    pub fouls: i64,
    pub turnovers: i64,
    pub minutes: f64,
}

impl StatTotals {
    pub fn add(&mut self, row: &PlayerGameStatistic) {
        self.points += i64::from(row.points);
        self.rebounds += i64::from(row.rebounds);
        self.assists += i64::from(row.assists);
        self.steals += i64::from(row.steals);
        self.blocks += i64::from(row.blocks);
        self.fouls += i64::from(row.fouls);
        self.turnovers += i64::from(row.turnovers);
        self.minutes += row.minutes_played;
    }
}

fn per_game(total: f64, games_played: u32) -> f64 {
    if games_played == 0 {
        return 0.0;
    }
    total / f64::from(games_played)
}

/// Folds rows into totals and averages for `subject`.
///
/// Every row contributes to the sums, but a game id shared by several rows
/// (two teammates, or repeated entries for one player) is counted once in
/// `games_played`. With no rows the result is all zeroes.
pub fn aggregate<'a, I>(subject: &AggregateSubject, rows: I) -> AggregateStats
where
    I: IntoIterator<Item = &'a PlayerGameStatistic>,
{
    let mut totals = StatTotals::default();
    let mut games: HashSet<&str> = HashSet::new();

    for row in rows {
        totals.add(row);
        games.insert(row.game_id.as_str());
    }

    let games_played = games.len() as u32;
    let avg = |total: i64| per_game(total as f64, games_played);

    AggregateStats {
        games_played,
        total_points: totals.points,
        total_rebounds: totals.rebounds,
        total_assists: totals.assists,
        total_steals: totals.steals,
        total_blocks: totals.blocks,
        total_fouls: totals.fouls,
        total_turnovers: totals.turnovers,
        total_minutes: totals.minutes,
        avg_points: avg(totals.points),
        avg_rebounds: avg(totals.rebounds),
        avg_assists: avg(totals.assists),
        avg_steals: avg(totals.steals),
        avg_blocks: avg(totals.blocks),
        avg_fouls: avg(totals.fouls),
        avg_turnovers: avg(totals.turnovers),
        avg_minutes: per_game(totals.minutes, games_played),
        ..AggregateStats::empty(subject)
    }
}

/// Computes player and team aggregates from the statistic store.
///
/// Nothing is cached: each call re-reads the contributing rows, so the result
/// reflects whatever inserts had committed when the read ran.
pub struct AggregationService {
    store: Arc<dyn StatisticStore + Send + Sync>,
}

impl AggregationService {
    pub fn new(store: Arc<dyn StatisticStore + Send + Sync>) -> Self {
        Self { store }
    }

    #[instrument(skip(self))]
    pub async fn player_aggregate(&self, player_id: &str) -> Result<AggregateStats, StatsError> {
        let subject = AggregateSubject::Player(require_id(player_id)?);
        let rows = self.store.fetch_by_player(subject.id()).await?;
        self.summarize(subject, rows)
    }

    #[instrument(skip(self))]
    pub async fn team_aggregate(&self, team_id: &str) -> Result<AggregateStats, StatsError> {
        let subject = AggregateSubject::Team(require_id(team_id)?);
        let rows = self.store.fetch_by_team(subject.id()).await?;
        self.summarize(subject, rows)
    }

    fn summarize(
        &self,
        subject: AggregateSubject,
        rows: Vec<PlayerGameStatistic>,
    ) -> Result<AggregateStats, StatsError> {
        // Zero contributing rows is reported as not found rather than as an
        // all-zero aggregate.
        if rows.is_empty() {
            warn!(kind = subject.kind(), id = %subject.id(), "No statistics to aggregate");
            return Err(StatsError::NotFound(format!(
                "no statistics recorded for {} {}",
                subject.kind(),
                subject.id()
            )));
        }

        debug!(kind = subject.kind(), id = %subject.id(), rows = rows.len(), "Folding statistic rows");
        let stats = aggregate(&subject, &rows);

        info!(
            kind = subject.kind(),
            id = %subject.id(),
            games_played = stats.games_played,
            total_points = stats.total_points,
            "Aggregate computed"
        );
        Ok(stats)
    }
}

fn require_id(id: &str) -> Result<String, StatsError> {
    if id.trim().is_empty() {
        return Err(StatsError::Validation("empty identifier".to_string()));
    }
    Ok(id.to_string())
}
