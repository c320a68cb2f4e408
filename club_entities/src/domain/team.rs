use async_trait::async_trait;
use sea_orm::{prelude::*, ActiveValue};
use serde::{Serialize, Deserialize};

use crate::schema;
use crate::utilities::{existing_ids, ChangeSet};

use super::ClubEntity;


#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone, Default)]
pub struct Team {
    pub uuid: Uuid,
    pub name: String,
    pub city: Option<String>,
    pub gu: Option<String>,
    pub leader_id: Uuid,
}

impl Team {
    pub(crate) fn from_model(model: schema::teams::Model) -> Self {
        Team {
            uuid: model.id,
            name: model.name,
            city: model.city,
            gu: model.gu,
            leader_id: model.leader_id,
        }
    }

    pub async fn get<C>(db: &C, uuid: Uuid) -> Result<Option<Team>, DbErr> where C: ConnectionTrait {
        Ok(schema::teams::Entity::find_by_id(uuid).one(db).await?.map(Self::from_model))
    }
}

#[async_trait]
impl ClubEntity for Team {
    async fn save_many<C>(db: &C, guarantee_insert: bool, entities: &Vec<&Self>) -> Result<(), anyhow::Error> where C: ConnectionTrait {
        let existing = if guarantee_insert {
            Default::default()
        } else {
            existing_ids::<schema::teams::Entity, _>(db, schema::teams::Column::Id, entities.iter().map(|t| t.uuid).collect()).await?
        };

        let mut changes = ChangeSet::new();
        for team in entities {
            changes.push(schema::teams::ActiveModel {
                id: ActiveValue::Set(team.uuid),
                name: ActiveValue::Set(team.name.clone()),
                city: ActiveValue::Set(team.city.clone()),
                gu: ActiveValue::Set(team.gu.clone()),
                leader_id: ActiveValue::Set(team.leader_id),
            }, existing.contains(&team.uuid));
        }
        changes.exec(db).await?;
        Ok(())
    }
}
