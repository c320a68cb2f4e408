use std::collections::HashMap;

use async_trait::async_trait;
use sea_orm::{prelude::*, ActiveValue};
use sea_orm::sea_query::OnConflict;
use serde::{Serialize, Deserialize};

use crate::schema;
use crate::utilities::{find_by_ids, rows_per_statement};

use super::ClubEntity;


#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone)]
pub struct Profile {
    pub uuid: Uuid,
    pub display_name: String,
}

impl Profile {
    fn from_model(model: schema::profiles::Model) -> Self {
        Profile {
            uuid: model.id,
            display_name: model.display_name,
        }
    }

    /// Display names by user id. Users without a profile are absent from the map.
    pub async fn get_display_names<C>(db: &C, user_ids: Vec<Uuid>) -> Result<HashMap<Uuid, String>, DbErr> where C: ConnectionTrait {
        let profiles = find_by_ids::<schema::profiles::Entity, _>(db, schema::profiles::Column::Id, user_ids).await?;
        Ok(profiles.into_iter().map(Self::from_model).map(|p| (p.uuid, p.display_name)).collect())
    }
}

#[async_trait]
impl ClubEntity for Profile {
    async fn save_many<C>(db: &C, _guarantee_insert: bool, entities: &Vec<&Self>) -> Result<(), anyhow::Error> where C: ConnectionTrait {
        for chunk in entities.chunks(rows_per_statement(2)) {
            let models = chunk.iter().map(|p| schema::profiles::ActiveModel {
                id: ActiveValue::Set(p.uuid),
                display_name: ActiveValue::Set(p.display_name.clone()),
            }).collect::<Vec<_>>();

            schema::profiles::Entity::insert_many(models)
                .on_conflict(
                    OnConflict::column(schema::profiles::Column::Id)
                        .update_column(schema::profiles::Column::DisplayName)
                        .to_owned()
                )
                .exec_without_returning(db).await?;
        }
        Ok(())
    }
}
