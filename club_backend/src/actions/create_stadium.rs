use async_trait::async_trait;
use club_entities::prelude::*;
use sea_orm::{prelude::Uuid, ConnectionTrait};
use serde::{Serialize, Deserialize};

use crate::actions::{ActionTrait, ActionError};


#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateStadiumAction {
    #[serde(default = "Uuid::new_v4")]
    pub uuid: Uuid,
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
}

#[async_trait]
impl ActionTrait for CreateStadiumAction {
    async fn get_changes<C>(self, _db: &C) -> Result<EntityGroup, anyhow::Error> where C: ConnectionTrait {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ActionError::validation("name", "Stadium name must not be empty").into());
        }
        let mut g = EntityGroup::new();
        g.add(Entity::Stadium(Stadium { uuid: self.uuid, name: name.to_string(), address: self.address }));
        Ok(g)
    }
}
