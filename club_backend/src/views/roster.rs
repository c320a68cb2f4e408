use club_entities::prelude::*;
use sea_orm::{prelude::Uuid, ConnectionTrait};
use serde::{Serialize, Deserialize};

use crate::actions::ActionError;


#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub user_id: Uuid,
    pub display_name: String,
    pub role: MemberRole,
    pub status: MemberStatus,
}

/// A team with all of its memberships, pending and inactive ones included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamView {
    pub team: Team,
    pub members: Vec<RosterEntry>,
    pub active_members: u32,
}

impl TeamView {
    pub async fn load<C>(db: &C, team_id: Uuid) -> Result<Self, anyhow::Error> where C: ConnectionTrait {
        let team = Team::get(db, team_id).await?.ok_or(ActionError::not_found("Team", team_id))?;
        let members = TeamMember::get_all_in_team(db, team_id).await?;
        let names = Profile::get_display_names(db, members.iter().map(|m| m.user_id).collect()).await?;

        Ok(TeamView {
            team,
            active_members: members.iter().filter(|m| m.is_active()).count() as u32,
            members: members.into_iter().map(|m| RosterEntry {
                display_name: names.get(&m.user_id).cloned().unwrap_or_default(),
                user_id: m.user_id,
                role: m.role,
                status: m.status,
            }).collect(),
        })
    }
}
