use club_entities::prelude::*;
use club_entities::queries::{query_opponent_names, query_team_names};
use itertools::Itertools;
use sea_orm::{prelude::Uuid, ConnectionTrait};
use serde::{Serialize, Deserialize};

use crate::actions::ActionError;


#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerLine {
    pub user_id: Uuid,
    pub display_name: String,
    pub team_id: Uuid,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalLine {
    #[serde(flatten)]
    pub player: PlayerLine,
    pub goal_type: Option<GoalType>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchDetailView {
    #[serde(rename = "match")]
    pub details: Match,
    pub team_name: String,
    pub opponent_name: Option<String>,
    pub goals: Vec<GoalLine>,
    pub assists: Vec<PlayerLine>,
    pub man_of_the_match: Option<PlayerLine>,
}

impl MatchDetailView {
    pub async fn load<C>(db: &C, match_id: Uuid) -> Result<Self, anyhow::Error> where C: ConnectionTrait {
        let m = Match::get(db, match_id).await?.ok_or(ActionError::not_found("Match", match_id))?;

        let goals = Goal::get_all_for_matches(db, vec![match_id]).await?;
        let assists = Assist::get_all_for_matches(db, vec![match_id]).await?;
        let mom = ManOfTheMatch::get_all_for_matches(db, vec![match_id]).await?.into_iter().next();

        let names = Profile::get_display_names(
            db,
            goals.iter().map(|g| g.user_id)
                .chain(assists.iter().map(|a| a.user_id))
                .chain(mom.iter().map(|m| m.user_id))
                .unique()
                .collect()
        ).await?;
        let line = |user_id: Uuid, team_id: Uuid| PlayerLine {
            user_id,
            display_name: names.get(&user_id).cloned().unwrap_or_default(),
            team_id,
        };

        let team_name = query_team_names(db, vec![m.team_id]).await?.remove(&m.team_id).unwrap_or_default();
        let opponent_name = query_opponent_names(db, std::slice::from_ref(&m)).await?.remove(&m.opponent);

        Ok(MatchDetailView {
            team_name,
            opponent_name,
            goals: goals.into_iter().map(|g| GoalLine { player: line(g.user_id, g.team_id), goal_type: g.goal_type }).collect(),
            assists: assists.into_iter().map(|a| line(a.user_id, a.team_id)).collect(),
            man_of_the_match: mom.map(|m| line(m.user_id, m.team_id)),
            details: m,
        })
    }
}

