use async_trait::async_trait;
use sea_orm::{prelude::*, ActiveValue, QueryOrder};
use sea_orm::sea_query::OnConflict;
use serde::{Serialize, Deserialize};

use crate::schema;
use crate::utilities::rows_per_statement;

use super::ClubEntity;


/// An opponent club without an account, scoped to the team that plays it.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone)]
pub struct GuestClub {
    pub uuid: Uuid,
    pub team_id: Uuid,
    pub name: String,
    pub description: Option<String>,
}

/// Key under which guest club names are compared: trimmed and lower-cased.
pub fn guest_club_name_key(name: &str) -> String {
    name.trim().to_lowercase()
}

impl GuestClub {
    fn from_model(model: schema::guest_clubs::Model) -> Self {
        GuestClub {
            uuid: model.id,
            team_id: model.team_id,
            name: model.name,
            description: model.description,
        }
    }

    pub async fn get<C>(db: &C, uuid: Uuid) -> Result<Option<GuestClub>, DbErr> where C: ConnectionTrait {
        Ok(schema::guest_clubs::Entity::find_by_id(uuid).one(db).await?.map(Self::from_model))
    }

    pub async fn find_by_name<C>(db: &C, team_id: Uuid, name: &str) -> Result<Option<GuestClub>, DbErr> where C: ConnectionTrait {
        let row = schema::guest_clubs::Entity::find()
            .filter(schema::guest_clubs::Column::TeamId.eq(team_id))
            .filter(schema::guest_clubs::Column::NameKey.eq(guest_club_name_key(name)))
            .one(db).await?;
        Ok(row.map(Self::from_model))
    }

    pub async fn get_all_in_team<C>(db: &C, team_id: Uuid) -> Result<Vec<GuestClub>, DbErr> where C: ConnectionTrait {
        let rows = schema::guest_clubs::Entity::find()
            .filter(schema::guest_clubs::Column::TeamId.eq(team_id))
            .order_by_asc(schema::guest_clubs::Column::Name)
            .all(db).await?;
        Ok(rows.into_iter().map(Self::from_model).collect())
    }

    /// Returns the id of the team's guest club with this name, creating the club if there is none.
    ///
    /// A concurrent insert of the same name is absorbed by the unique `(team_id, name_key)`
    /// index: the insert becomes a no-op and the row that won is read back.
    pub async fn resolve_or_create<C>(db: &C, team_id: Uuid, name: &str, description: Option<String>) -> Result<GuestClub, DbErr> where C: ConnectionTrait {
        if let Some(existing) = Self::find_by_name(db, team_id, name).await? {
            return Ok(existing);
        }

        let club = schema::guest_clubs::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            team_id: ActiveValue::Set(team_id),
            name: ActiveValue::Set(name.trim().to_string()),
            name_key: ActiveValue::Set(guest_club_name_key(name)),
            description: ActiveValue::Set(description),
        };

        let inserted = schema::guest_clubs::Entity::insert(club)
            .on_conflict(
                OnConflict::columns([schema::guest_clubs::Column::TeamId, schema::guest_clubs::Column::NameKey])
                    .do_nothing()
                    .to_owned()
            )
            .exec_without_returning(db).await?;

        if inserted == 0 {
            tracing::debug!("Guest club {:?} of team {} was created concurrently, reusing it", name, team_id);
        }

        Self::find_by_name(db, team_id, name).await?.ok_or(DbErr::RecordNotFound(format!("guest club {:?}", name)))
    }
}

#[async_trait]
impl ClubEntity for GuestClub {
    async fn save_many<C>(db: &C, _guarantee_insert: bool, entities: &Vec<&Self>) -> Result<(), anyhow::Error> where C: ConnectionTrait {
        for chunk in entities.chunks(rows_per_statement(5)) {
            let models = chunk.iter().map(|c| schema::guest_clubs::ActiveModel {
                id: ActiveValue::Set(c.uuid),
                team_id: ActiveValue::Set(c.team_id),
                name: ActiveValue::Set(c.name.clone()),
                name_key: ActiveValue::Set(guest_club_name_key(&c.name)),
                description: ActiveValue::Set(c.description.clone()),
            }).collect::<Vec<_>>();

            schema::guest_clubs::Entity::insert_many(models)
                .on_conflict(
                    OnConflict::column(schema::guest_clubs::Column::Id)
                        .update_columns([schema::guest_clubs::Column::Name, schema::guest_clubs::Column::NameKey, schema::guest_clubs::Column::Description])
                        .to_owned()
                )
                .exec_without_returning(db).await?;
        }
        Ok(())
    }
}
