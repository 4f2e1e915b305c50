use super::{PlayerGameStatistic, StatsError};

pub const MAX_FOULS: i32 = 6;
pub const MAX_MINUTES_PLAYED: f64 = 48.0;

/// Checks an entry before it reaches the write path.
///
/// Only the identifiers, fouls and minutes are checked. Points, rebounds,
/// assists, steals, blocks and turnovers are accepted as given.
pub fn validate_statistic(entry: &PlayerGameStatistic) -> Result<(), StatsError> {
    if entry.player_id.trim().is_empty() {
        return Err(StatsError::Validation(
            "player ID cannot be empty".to_string(),
        ));
    }
    if entry.game_id.trim().is_empty() {
        return Err(StatsError::Validation("game ID cannot be empty".to_string()));
    }
    if !(0..=MAX_FOULS).contains(&entry.fouls) {
        return Err(StatsError::Validation(format!(
            "fouls must be between 0 and {}",
            MAX_FOULS
        )));
    }
    // A NaN fails the range check as well.
    if !(0.0..=MAX_MINUTES_PLAYED).contains(&entry.minutes_played) {
        return Err(StatsError::Validation(format!(
            "minutes played must be between 0 and {}",
            MAX_MINUTES_PLAYED
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn entry(fouls: i32, minutes_played: f64) -> PlayerGameStatistic {
        PlayerGameStatistic {
            player_id: "player1".to_string(),
            game_id: "game1".to_string(),
            points: 20,
            fouls,
            minutes_played,
            ..PlayerGameStatistic::default()
        }
    }

    #[rstest]
    #[case(0, 0.0)]
    #[case(6, 30.0)]
    #[case(3, 48.0)]
    #[case(2, 0.5)]
    fn test_accepts_values_inside_bounds(#[case] fouls: i32, #[case] minutes: f64) {
        assert_eq!(validate_statistic(&entry(fouls, minutes)), Ok(()));
    }

    #[rstest]
    #[case(7, 30.0)]
    #[case(-1, 30.0)]
    #[case(3, 48.1)]
    #[case(3, -0.001)]
    #[case(3, f64::NAN)]
    fn test_rejects_values_outside_bounds(#[case] fouls: i32, #[case] minutes: f64) {
        let result = validate_statistic(&entry(fouls, minutes));
        assert!(matches!(result, Err(StatsError::Validation(_))));
    }

    #[test]
    fn test_rejects_missing_player_id() {
        let mut stat = entry(1, 10.0);
        stat.player_id = String::new();

        let err = validate_statistic(&stat).unwrap_err();
        assert_eq!(
            err,
            StatsError::Validation("player ID cannot be empty".to_string())
        );
    }

    #[test]
    fn test_rejects_missing_game_id() {
        let mut stat = entry(1, 10.0);
        stat.game_id = "  ".to_string();

        let err = validate_statistic(&stat).unwrap_err();
        assert_eq!(
            err,
            StatsError::Validation("game ID cannot be empty".to_string())
        );
    }

    #[test]
    fn test_other_counters_are_not_range_checked() {
        let mut stat = entry(1, 10.0);
        stat.points = -5;
        stat.turnovers = -2;
        stat.rebounds = 1_000;

        assert_eq!(validate_statistic(&stat), Ok(()));
    }
}
