use async_trait::async_trait;
use club_entities::prelude::*;
use sea_orm::{prelude::Uuid, ConnectionTrait};
use serde::{Serialize, Deserialize};

use crate::actions::{ActionTrait, ActionError};


#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpsertProfileAction {
    pub user_id: Uuid,
    pub display_name: String,
}

#[async_trait]
impl ActionTrait for UpsertProfileAction {
    async fn get_changes<C>(self, _db: &C) -> Result<EntityGroup, anyhow::Error> where C: ConnectionTrait {
        let display_name = self.display_name.trim();
        if display_name.is_empty() {
            return Err(ActionError::validation("display_name", "Display name must not be empty").into());
        }
        Ok(EntityGroup::new_with_entities(vec![
            Entity::Profile(Profile { uuid: self.user_id, display_name: display_name.to_string() })
        ]))
    }
}
