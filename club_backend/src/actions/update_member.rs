use async_trait::async_trait;
use club_entities::prelude::*;
use sea_orm::{prelude::Uuid, ConnectionTrait};
use serde::{Serialize, Deserialize};
use tracing::warn;

use crate::actions::{ActionTrait, ActionError};


/// Approves, promotes or deactivates a member. The owner keeps their role and stays active,
/// and nobody else can become owner this way.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateMemberAction {
    pub team_id: Uuid,
    pub user_id: Uuid,
    #[serde(default)]
    pub role: Option<MemberRole>,
    #[serde(default)]
    pub status: Option<MemberStatus>,
}

#[async_trait]
impl ActionTrait for UpdateMemberAction {
    async fn get_changes<C>(self, db: &C) -> Result<EntityGroup, anyhow::Error> where C: ConnectionTrait {
        let mut member = TeamMember::get(db, self.team_id, self.user_id).await?
            .ok_or(ActionError::not_found("Member", self.user_id))?;

        if member.role == MemberRole::Owner {
            if self.role.map_or(false, |r| r != MemberRole::Owner) {
                warn!("Refusing to demote owner {} of team {}", self.user_id, self.team_id);
                return Err(ActionError::validation("role", "The team owner cannot be demoted").into());
            }
            if self.status.map_or(false, |s| s != MemberStatus::Active) {
                warn!("Refusing to deactivate owner {} of team {}", self.user_id, self.team_id);
                return Err(ActionError::validation("status", "The team owner must stay active").into());
            }
        }
        else if self.role == Some(MemberRole::Owner) {
            return Err(ActionError::validation("role", "A team has exactly one owner").into());
        }

        if let Some(role) = self.role {
            member.role = role;
        }
        if let Some(status) = self.status {
            member.status = status;
        }

        Ok(EntityGroup::new_with_entities(vec![Entity::TeamMember(member)]))
    }
}
