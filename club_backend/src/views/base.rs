use chrono::NaiveDateTime;
use club_entities::prelude::*;
use sea_orm::{prelude::Uuid, ConnectionTrait};
use serde::{Serialize, Deserialize};


/// Inclusive date window for statistics. Missing bounds are open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateWindow {
    #[serde(default)]
    pub start: Option<NaiveDateTime>,
    #[serde(default)]
    pub end: Option<NaiveDateTime>,
}

impl DateWindow {
    pub fn all_time() -> Self {
        Default::default()
    }

    pub fn between(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        DateWindow { start: Some(start), end: Some(end) }
    }

    pub(crate) async fn matches_of_team<C>(&self, db: &C, team_id: Uuid) -> Result<Vec<Match>, MatchParseError> where C: ConnectionTrait {
        Match::get_all_for_team(db, team_id, self.start, self.end).await
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchOutcome {
    Win,
    Draw,
    Loss,
}

impl MatchOutcome {
    pub fn from_goals(own: u32, opponent: u32) -> Self {
        match own.cmp(&opponent) {
            std::cmp::Ordering::Greater => MatchOutcome::Win,
            std::cmp::Ordering::Equal => MatchOutcome::Draw,
            std::cmp::Ordering::Less => MatchOutcome::Loss,
        }
    }
}
