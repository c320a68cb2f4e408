use chrono::NaiveDateTime;
use club_entities::prelude::*;
use club_entities::queries::{query_opponent_names, query_team_names};
use itertools::Itertools;
use sea_orm::{prelude::Uuid, ConnectionTrait};
use serde::{Serialize, Deserialize};

use super::base::{DateWindow, MatchOutcome};


#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchListEntry {
    pub uuid: Uuid,
    pub owning_team_id: Uuid,
    pub match_date: NaiveDateTime,
    pub registration_deadline: NaiveDateTime,
    pub venue: String,
    pub stadium_id: Option<Uuid>,
    pub competition_type: String,
    pub game_type: String,
    /// From the listed team's point of view.
    pub is_home: bool,
    /// The other side from the listed team's point of view. `None` for TBD opponents.
    pub opponent_name: Option<String>,
    pub is_tbd: bool,
    pub score: Option<MatchScore>,
    pub outcome: Option<MatchOutcome>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchListView {
    pub team_id: Uuid,
    pub matches: Vec<MatchListEntry>,
}

impl MatchListView {
    pub async fn load<C>(db: &C, team_id: Uuid, window: DateWindow) -> Result<Self, anyhow::Error> where C: ConnectionTrait {
        let matches = window.matches_of_team(db, team_id).await?;

        let opponent_names = query_opponent_names(db, &matches).await?;
        let owner_names = query_team_names(
            db,
            matches.iter().filter(|m| m.team_id != team_id).map(|m| m.team_id).unique().collect()
        ).await?;

        let matches = matches.into_iter().map(|m| {
            let owned = m.team_id == team_id;
            let opponent_name = if owned {
                opponent_names.get(&m.opponent).cloned()
            }
            else {
                owner_names.get(&m.team_id).cloned()
            };

            MatchListEntry {
                uuid: m.uuid,
                owning_team_id: m.team_id,
                is_home: m.side_of(team_id) == Some(MatchSide::Home),
                opponent_name,
                is_tbd: m.opponent == Opponent::Tbd,
                score: m.score,
                outcome: m.score_for(team_id).map(|(own, opp)| MatchOutcome::from_goals(own, opp)),
                match_date: m.match_date,
                registration_deadline: m.registration_deadline,
                venue: m.venue,
                stadium_id: m.stadium_id,
                competition_type: m.competition_type,
                game_type: m.game_type,
            }
        }).collect();

        Ok(MatchListView { team_id, matches })
    }
}
