use async_trait::async_trait;
use club_entities::prelude::*;
use sea_orm::{prelude::Uuid, ConnectionTrait};
use serde::{Serialize, Deserialize};

use crate::actions::{ActionTrait, ActionError};


#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTeamAction {
    #[serde(default = "Uuid::new_v4")]
    pub uuid: Uuid,
    pub name: String,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub gu: Option<String>,
    pub leader_id: Uuid,
}

#[async_trait]
impl ActionTrait for CreateTeamAction {
    async fn get_changes<C>(self, _db: &C) -> Result<EntityGroup, anyhow::Error> where C: ConnectionTrait {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ActionError::validation("name", "Team name must not be empty").into());
        }

        let mut g = EntityGroup::new();
        g.add(Entity::Team(Team {
            uuid: self.uuid,
            name: name.to_string(),
            city: self.city,
            gu: self.gu,
            leader_id: self.leader_id,
        }));
        g.add(Entity::TeamMember(TeamMember::new_active(self.uuid, self.leader_id, MemberRole::Owner)));

        Ok(g)
    }
}
