use club_entities::prelude::*;
use sea_orm::{prelude::Uuid, ConnectionTrait};
use serde::{Serialize, Deserialize};

use super::base::{DateWindow, MatchOutcome};


/// Results of all finished matches between two registered teams, in either orientation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadToHead {
    pub team_a: Uuid,
    pub team_b: Uuid,
    pub total_played: u32,
    pub team_a_wins: u32,
    pub team_b_wins: u32,
    pub draws: u32,
    pub team_a_home_wins: u32,
    pub team_b_home_wins: u32,
    pub team_a_away_wins: u32,
    pub team_b_away_wins: u32,
}

impl HeadToHead {
    pub async fn load<C>(db: &C, team_a: Uuid, team_b: Uuid, window: DateWindow) -> Result<Self, anyhow::Error> where C: ConnectionTrait {
        let matches = window.matches_of_team(db, team_a).await?;
        Ok(Self::from_matches(team_a, team_b, &matches))
    }

    pub fn from_matches<'a>(team_a: Uuid, team_b: Uuid, matches: impl IntoIterator<Item=&'a Match>) -> Self {
        let mut h2h = HeadToHead {
            team_a,
            team_b,
            total_played: 0,
            team_a_wins: 0,
            team_b_wins: 0,
            draws: 0,
            team_a_home_wins: 0,
            team_b_home_wins: 0,
            team_a_away_wins: 0,
            team_b_away_wins: 0,
        };

        for m in matches {
            let (Some(side_a), Some(side_b)) = (m.side_of(team_a), m.side_of(team_b)) else {
                continue;
            };
            if side_a == side_b {
                continue;
            }
            let Some((goals_a, goals_b)) = m.score_for(team_a) else {
                continue;
            };

            match MatchOutcome::from_goals(goals_a, goals_b) {
                MatchOutcome::Win => {
                    h2h.team_a_wins += 1;
                    match side_a {
                        MatchSide::Home => h2h.team_a_home_wins += 1,
                        MatchSide::Away => h2h.team_a_away_wins += 1,
                    }
                },
                MatchOutcome::Loss => {
                    h2h.team_b_wins += 1;
                    match side_b {
                        MatchSide::Home => h2h.team_b_home_wins += 1,
                        MatchSide::Away => h2h.team_b_away_wins += 1,
                    }
                },
                MatchOutcome::Draw => h2h.draws += 1,
            }
        }

        h2h.total_played = h2h.team_a_wins + h2h.team_b_wins + h2h.draws;
        h2h
    }
}

#[cfg(test)]
mod test {
    use club_entities::mock::{mock_date, mock_match};

    use super::*;

    fn finished(id: u128, owner: u128, opponent: u128, is_home: bool, home: u32, away: u32) -> Match {
        Match {
            is_home,
            opponent: Opponent::Registered(Uuid::from_u128(opponent)),
            score: Some(MatchScore { home, away }),
            ..mock_match(Uuid::from_u128(id), Uuid::from_u128(owner), mock_date(2024, 3, id as u32 % 28 + 1, 19))
        }
    }

    fn matches() -> Vec<Match> {
        vec![
            // 1 at home beats 2
            finished(1, 1, 2, true, 3, 1),
            // 2 owns, plays away, wins at 1's ground
            finished(2, 2, 1, false, 0, 2),
            // 2 at home beats 1
            finished(3, 1, 2, false, 1, 0),
            finished(4, 2, 1, true, 2, 2),
            // Other pairing
            finished(5, 1, 3, true, 5, 0),
        ]
    }

    #[test]
    fn test_head_to_head_counts() {
        let h2h = HeadToHead::from_matches(Uuid::from_u128(1), Uuid::from_u128(2), &matches());

        assert_eq!(h2h.team_a_wins, 1);
        assert_eq!(h2h.team_b_wins, 2);
        assert_eq!(h2h.draws, 1);
        assert_eq!(h2h.total_played, 4);
        assert_eq!(h2h.team_a_home_wins, 1);
        assert_eq!(h2h.team_a_away_wins, 0);
        assert_eq!(h2h.team_b_home_wins, 1);
        assert_eq!(h2h.team_b_away_wins, 1);
    }

    #[test]
    fn test_swapping_teams_swaps_counts() {
        let ab = HeadToHead::from_matches(Uuid::from_u128(1), Uuid::from_u128(2), &matches());
        let ba = HeadToHead::from_matches(Uuid::from_u128(2), Uuid::from_u128(1), &matches());

        assert_eq!(ab.team_a_wins, ba.team_b_wins);
        assert_eq!(ab.team_b_wins, ba.team_a_wins);
        assert_eq!(ab.team_a_home_wins, ba.team_b_home_wins);
        assert_eq!(ab.team_b_home_wins, ba.team_a_home_wins);
        assert_eq!(ab.team_a_away_wins, ba.team_b_away_wins);
        assert_eq!(ab.draws, ba.draws);
        assert_eq!(ab.total_played, ba.total_played);
    }
}
