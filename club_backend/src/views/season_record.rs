use club_entities::prelude::*;
use sea_orm::{prelude::Uuid, ConnectionTrait};
use serde::{Serialize, Deserialize};
use tracing::debug;

use super::base::{DateWindow, MatchOutcome};


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonRecord {
    pub team_id: Uuid,
    pub total_matches: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub goals_scored: u32,
    pub goals_conceded: u32,
    /// Wins divided by played matches, 0 if nothing was played.
    pub win_rate: f64,
}

impl SeasonRecord {
    pub async fn load<C>(db: &C, team_id: Uuid, window: DateWindow) -> Result<Self, anyhow::Error> where C: ConnectionTrait {
        let matches = window.matches_of_team(db, team_id).await?;
        Ok(Self::from_matches(team_id, &matches))
    }

    /// Only finished matches the team played as owner or registered opponent count.
    pub fn from_matches<'a>(team_id: Uuid, matches: impl IntoIterator<Item=&'a Match>) -> Self {
        let mut record = SeasonRecord {
            team_id,
            total_matches: 0,
            wins: 0,
            draws: 0,
            losses: 0,
            goals_scored: 0,
            goals_conceded: 0,
            win_rate: 0.0,
        };

        for (own, opponent) in matches.into_iter().filter_map(|m| m.score_for(team_id)) {
            record.total_matches += 1;
            record.goals_scored += own;
            record.goals_conceded += opponent;
            match MatchOutcome::from_goals(own, opponent) {
                MatchOutcome::Win => record.wins += 1,
                MatchOutcome::Draw => record.draws += 1,
                MatchOutcome::Loss => record.losses += 1,
            }
        }

        if record.total_matches > 0 {
            record.win_rate = record.wins as f64 / record.total_matches as f64;
        }
        debug!("Season record of {}: {}-{}-{}", team_id, record.wins, record.draws, record.losses);

        record
    }
}

#[cfg(test)]
mod test {
    use club_entities::mock::{mock_date, mock_match};

    use super::*;

    fn finished(id: u128, team_id: Uuid, is_home: bool, opponent: Opponent, home: u32, away: u32) -> Match {
        Match {
            is_home,
            opponent,
            score: Some(MatchScore { home, away }),
            ..mock_match(Uuid::from_u128(id), team_id, mock_date(2024, 3, 4, 19))
        }
    }

    #[test]
    fn test_win_draw_loss() {
        let team = Uuid::from_u128(1);
        let guest = Opponent::Guest(Uuid::from_u128(9));
        let matches = vec![
            finished(100, team, true, guest, 2, 1),
            finished(101, team, true, guest, 0, 0),
            finished(102, team, false, guest, 3, 1),
        ];

        let record = SeasonRecord::from_matches(team, &matches);

        assert_eq!(record.wins, 1);
        assert_eq!(record.draws, 1);
        assert_eq!(record.losses, 1);
        assert_eq!(record.goals_scored, 3);
        assert_eq!(record.goals_conceded, 4);
        assert_eq!(record.total_matches, 3);
    }

    #[test]
    fn test_matches_as_registered_opponent_are_counted_from_own_side() {
        let team = Uuid::from_u128(2);
        let matches = vec![
            finished(100, Uuid::from_u128(1), true, Opponent::Registered(team), 0, 2),
        ];

        let record = SeasonRecord::from_matches(team, &matches);

        assert_eq!(record.wins, 1);
        assert_eq!(record.goals_scored, 2);
        assert_eq!(record.win_rate, 1.0);
    }

    #[test]
    fn test_unfinished_and_foreign_matches_are_ignored() {
        let team = Uuid::from_u128(1);
        let matches = vec![
            mock_match(Uuid::from_u128(100), team, mock_date(2024, 3, 4, 19)),
            finished(101, Uuid::from_u128(5), true, Opponent::Registered(Uuid::from_u128(6)), 1, 0),
        ];

        let record = SeasonRecord::from_matches(team, &matches);

        assert_eq!(record.total_matches, 0);
        assert_eq!(record.win_rate, 0.0);
    }
}
