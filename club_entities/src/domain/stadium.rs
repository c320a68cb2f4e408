use async_trait::async_trait;
use sea_orm::{prelude::*, ActiveValue, QueryOrder};
use serde::{Serialize, Deserialize};

use crate::schema;
use crate::utilities::{existing_ids, ChangeSet};

use super::ClubEntity;


#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone, Default)]
pub struct Stadium {
    pub uuid: Uuid,
    pub name: String,
    pub address: Option<String>,
}

impl Stadium {
    fn from_model(model: schema::stadiums::Model) -> Self {
        Stadium {
            uuid: model.id,
            name: model.name,
            address: model.address,
        }
    }

    pub async fn get<C>(db: &C, uuid: Uuid) -> Result<Option<Stadium>, DbErr> where C: ConnectionTrait {
        Ok(schema::stadiums::Entity::find_by_id(uuid).one(db).await?.map(Self::from_model))
    }

    pub async fn get_all<C>(db: &C) -> Result<Vec<Stadium>, DbErr> where C: ConnectionTrait {
        let rows = schema::stadiums::Entity::find().order_by_asc(schema::stadiums::Column::Name).all(db).await?;
        Ok(rows.into_iter().map(Self::from_model).collect())
    }
}

#[async_trait]
impl ClubEntity for Stadium {
    async fn save_many<C>(db: &C, guarantee_insert: bool, entities: &Vec<&Self>) -> Result<(), anyhow::Error> where C: ConnectionTrait {
        let existing = if guarantee_insert {
            Default::default()
        } else {
            existing_ids::<schema::stadiums::Entity, _>(db, schema::stadiums::Column::Id, entities.iter().map(|s| s.uuid).collect()).await?
        };

        let mut changes = ChangeSet::new();
        for stadium in entities {
            changes.push(schema::stadiums::ActiveModel {
                id: ActiveValue::Set(stadium.uuid),
                name: ActiveValue::Set(stadium.name.clone()),
                address: ActiveValue::Set(stadium.address.clone()),
            }, existing.contains(&stadium.uuid));
        }
        changes.exec(db).await?;
        Ok(())
    }
}
