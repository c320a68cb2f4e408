use async_trait::async_trait;
use club_entities::prelude::*;
use sea_orm::{prelude::Uuid, ConnectionTrait};
use serde::{Serialize, Deserialize};

use crate::actions::{ActionTrait, ActionError};


/// Changes the fields that are present and leaves the others alone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateTeamAction {
    pub team_id: Uuid,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub gu: Option<String>,
}

#[async_trait]
impl ActionTrait for UpdateTeamAction {
    async fn get_changes<C>(self, db: &C) -> Result<EntityGroup, anyhow::Error> where C: ConnectionTrait {
        let mut team = Team::get(db, self.team_id).await?.ok_or(ActionError::not_found("Team", self.team_id))?;

        if let Some(name) = self.name {
            let name = name.trim();
            if name.is_empty() {
                return Err(ActionError::validation("name", "Team name must not be empty").into());
            }
            team.name = name.to_string();
        }
        if let Some(city) = self.city {
            team.city = Some(city);
        }
        if let Some(gu) = self.gu {
            team.gu = Some(gu);
        }

        Ok(EntityGroup::new_with_entities(vec![Entity::Team(team)]))
    }
}
