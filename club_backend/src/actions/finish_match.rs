use std::collections::HashMap;

use async_trait::async_trait;
use club_entities::prelude::*;
use sea_orm::{prelude::Uuid, ConnectionTrait};
use serde::{Serialize, Deserialize};
use tracing::{debug, info, warn};

use crate::actions::{ActionTrait, ActionError};


#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ScoreMode {
    /// Counts the entered goals of attending players for the side of their team.
    Computed,
    /// Final score entered by hand, used when guests or unregistered players scored.
    Manual { home: u32, away: u32 },
}

impl Default for ScoreMode {
    fn default() -> Self {
        ScoreMode::Computed
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalEntry {
    pub user_id: Uuid,
    #[serde(default)]
    pub goal_type: Option<GoalType>,
}

/// Enters the result of a match and locks it.
///
/// Every goal is one entry, so a player who scored twice appears twice. Goals, assists and
/// the man of the match are only accepted for players whose attendance is `attending`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinishMatchAction {
    pub match_id: Uuid,
    #[serde(default)]
    pub goals: Vec<GoalEntry>,
    #[serde(default)]
    pub assists: Vec<Uuid>,
    #[serde(default)]
    pub man_of_the_match: Option<Uuid>,
    #[serde(default)]
    pub score: ScoreMode,
}

/// Sums goals per side. Goals of teams that did not play on either side are not counted.
pub(crate) fn compute_score(m: &Match, goal_team_ids: impl IntoIterator<Item=Uuid>) -> MatchScore {
    let mut score = MatchScore::default();
    for team_id in goal_team_ids {
        match m.side_of(team_id) {
            Some(MatchSide::Home) => score.home += 1,
            Some(MatchSide::Away) => score.away += 1,
            None => debug!("Goal of team {} does not count for either side of match {}", team_id, m.uuid),
        }
    }
    score
}

#[async_trait]
impl ActionTrait for FinishMatchAction {
    async fn get_changes<C>(self, db: &C) -> Result<EntityGroup, anyhow::Error> where C: ConnectionTrait {
        let mut m = Match::get(db, self.match_id).await?.ok_or(ActionError::not_found("Match", self.match_id))?;
        if m.is_finished() {
            warn!("Match {} is already finished", self.match_id);
            return Err(ActionError::MatchAlreadyFinished { match_id: self.match_id }.into());
        }

        let attending: HashMap<Uuid, Uuid> = Attendance::get_all_for_match(db, self.match_id).await?
            .into_iter()
            .filter(|a| a.status == AttendanceStatus::Attending)
            .map(|a| (a.user_id, a.team_id))
            .collect();

        let team_of = |field: &'static str, user_id: Uuid| {
            attending.get(&user_id).copied().ok_or_else(
                || ActionError::validation(field, format!("Player {} is not attending the match", user_id))
            )
        };

        let mut g = EntityGroup::new();
        let mut goal_teams = vec![];

        for goal in self.goals.iter() {
            let team_id = team_of("goals", goal.user_id)?;
            goal_teams.push(team_id);
            g.add(Entity::Goal(Goal { match_id: self.match_id, user_id: goal.user_id, team_id, goal_type: goal.goal_type }));
        }
        for user_id in self.assists.iter() {
            let team_id = team_of("assists", *user_id)?;
            g.add(Entity::Assist(Assist { match_id: self.match_id, user_id: *user_id, team_id }));
        }
        if let Some(user_id) = self.man_of_the_match {
            let team_id = team_of("man_of_the_match", user_id)?;
            g.add(Entity::ManOfTheMatch(ManOfTheMatch { match_id: self.match_id, user_id, team_id }));
        }

        let score = match self.score {
            ScoreMode::Computed => compute_score(&m, goal_teams),
            ScoreMode::Manual { home, away } => MatchScore { home, away },
        };
        info!("Finishing match {} with score {}:{}", self.match_id, score.home, score.away);

        m.score = Some(score);
        g.add(Entity::Match(m));

        Ok(g)
    }
}

#[cfg(test)]
mod test {
    use club_entities::mock::{mock_date, mock_match};

    use super::*;

    #[test]
    fn test_goals_are_counted_for_the_side_of_their_team() {
        let m = Match {
            is_home: false,
            opponent: Opponent::Registered(Uuid::from_u128(2)),
            ..mock_match(Uuid::from_u128(100), Uuid::from_u128(1), mock_date(2024, 3, 4, 19))
        };
        let score = compute_score(&m, vec![Uuid::from_u128(1), Uuid::from_u128(2), Uuid::from_u128(1), Uuid::from_u128(3)]);
        assert_eq!(score, MatchScore { home: 1, away: 2 });
    }

    #[test]
    fn test_guest_side_goals_are_not_computed() {
        let m = Match {
            opponent: Opponent::Guest(Uuid::from_u128(9)),
            ..mock_match(Uuid::from_u128(100), Uuid::from_u128(1), mock_date(2024, 3, 4, 19))
        };
        let score = compute_score(&m, vec![Uuid::from_u128(1), Uuid::from_u128(9)]);
        assert_eq!(score, MatchScore { home: 1, away: 0 });
    }
}
