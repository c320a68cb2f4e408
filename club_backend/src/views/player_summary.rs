use club_entities::prelude::*;
use itertools::Itertools;
use sea_orm::{prelude::Uuid, ConnectionTrait};
use serde::{Serialize, Deserialize};

use crate::actions::ActionError;

use super::attendance_rates::attendance_rate;
use super::base::DateWindow;


/// One player's statistics for one team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSummary {
    pub user_id: Uuid,
    pub team_id: Uuid,
    pub display_name: String,
    pub goals: u32,
    pub assists: u32,
    pub man_of_the_match: u32,
    pub attending: u32,
    pub total_matches: u32,
    pub attendance_rate: u32,
}

impl PlayerSummary {
    pub async fn load<C>(db: &C, team_id: Uuid, user_id: Uuid, window: DateWindow) -> Result<Self, anyhow::Error> where C: ConnectionTrait {
        if TeamMember::get(db, team_id, user_id).await?.is_none() {
            return Err(ActionError::not_found("Member", user_id).into());
        }

        let match_ids = window.matches_of_team(db, team_id).await?.into_iter().map(|m| m.uuid).collect_vec();
        let total_matches = match_ids.len() as u32;

        let goals = Goal::get_all_for_matches(db, match_ids.clone()).await?
            .into_iter().filter(|g| g.user_id == user_id && g.team_id == team_id).count() as u32;
        let assists = Assist::get_all_for_matches(db, match_ids.clone()).await?
            .into_iter().filter(|a| a.user_id == user_id && a.team_id == team_id).count() as u32;
        let man_of_the_match = ManOfTheMatch::get_all_for_matches(db, match_ids.clone()).await?
            .into_iter().filter(|m| m.user_id == user_id && m.team_id == team_id).count() as u32;
        let attending = Attendance::get_all_for_matches(db, match_ids).await?
            .into_iter().filter(|a| a.user_id == user_id && a.team_id == team_id && a.status == AttendanceStatus::Attending).count() as u32;

        let display_name = Profile::get_display_names(db, vec![user_id]).await?.remove(&user_id).unwrap_or_default();

        Ok(PlayerSummary {
            user_id,
            team_id,
            display_name,
            goals,
            assists,
            man_of_the_match,
            attending,
            total_matches,
            attendance_rate: attendance_rate(attending, total_matches),
        })
    }
}
