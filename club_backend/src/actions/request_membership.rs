use async_trait::async_trait;
use club_entities::prelude::*;
use sea_orm::{prelude::Uuid, ConnectionTrait};
use serde::{Serialize, Deserialize};

use crate::actions::{ActionTrait, ActionError};


#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestMembershipAction {
    pub team_id: Uuid,
    pub user_id: Uuid,
}

#[async_trait]
impl ActionTrait for RequestMembershipAction {
    async fn get_changes<C>(self, db: &C) -> Result<EntityGroup, anyhow::Error> where C: ConnectionTrait {
        if Team::get(db, self.team_id).await?.is_none() {
            return Err(ActionError::not_found("Team", self.team_id).into());
        }
        if TeamMember::get(db, self.team_id, self.user_id).await?.is_some() {
            return Err(ActionError::DuplicateMembership { team_id: self.team_id, user_id: self.user_id }.into());
        }

        Ok(EntityGroup::new_with_entities(vec![
            Entity::TeamMember(TeamMember {
                team_id: self.team_id,
                user_id: self.user_id,
                role: MemberRole::Member,
                status: MemberStatus::Pending,
            })
        ]))
    }
}
