use async_trait::async_trait;
use itertools::Itertools;
use sea_orm::{prelude::*, ActiveValue};
use sea_orm::sea_query::OnConflict;
use serde::{Serialize, Deserialize};

use crate::schema;
use crate::utilities::{find_by_ids, rows_per_statement};

use super::{AttendanceStatus, ClubEntity, UnknownValueError};


#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone)]
pub struct Attendance {
    pub match_id: Uuid,
    pub user_id: Uuid,
    /// The participating team the user was seeded for.
    pub team_id: Uuid,
    pub status: AttendanceStatus,
}

impl Attendance {
    pub fn placeholder(match_id: Uuid, user_id: Uuid, team_id: Uuid) -> Self {
        Attendance { match_id, user_id, team_id, status: AttendanceStatus::Maybe }
    }

    fn from_model(model: schema::match_attendance::Model) -> Result<Self, UnknownValueError> {
        Ok(Attendance {
            match_id: model.match_id,
            user_id: model.user_id,
            team_id: model.team_id,
            status: model.status.parse()?,
        })
    }

    pub async fn get<C>(db: &C, match_id: Uuid, user_id: Uuid) -> Result<Option<Attendance>, anyhow::Error> where C: ConnectionTrait {
        let model = schema::match_attendance::Entity::find_by_id((match_id, user_id)).one(db).await?;
        Ok(model.map(Self::from_model).transpose()?)
    }

    pub async fn get_all_for_match<C>(db: &C, match_id: Uuid) -> Result<Vec<Attendance>, anyhow::Error> where C: ConnectionTrait {
        Self::get_all_for_matches(db, vec![match_id]).await
    }

    pub async fn get_all_for_matches<C>(db: &C, match_ids: Vec<Uuid>) -> Result<Vec<Attendance>, anyhow::Error> where C: ConnectionTrait {
        let rows = find_by_ids::<schema::match_attendance::Entity, _>(db, schema::match_attendance::Column::MatchId, match_ids).await?;
        Ok(
            rows.into_iter()
                .sorted_by_key(|row| (row.match_id, row.user_id))
                .map(Self::from_model)
                .collect::<Result<Vec<_>, _>>()?
        )
    }
}

#[async_trait]
impl ClubEntity for Attendance {
    /// Upserts on `(match_id, user_id)`, so a row is never duplicated.
    /// Large batches are split into several statements on the same connection.
    async fn save_many<C>(db: &C, _guarantee_insert: bool, entities: &Vec<&Self>) -> Result<(), anyhow::Error> where C: ConnectionTrait {
        for chunk in entities.chunks(rows_per_statement(4)) {
            let models = chunk.iter().map(|a| schema::match_attendance::ActiveModel {
                match_id: ActiveValue::Set(a.match_id),
                user_id: ActiveValue::Set(a.user_id),
                team_id: ActiveValue::Set(a.team_id),
                status: ActiveValue::Set(a.status.as_str().to_string()),
            }).collect_vec();

            schema::match_attendance::Entity::insert_many(models)
                .on_conflict(
                    OnConflict::columns([schema::match_attendance::Column::MatchId, schema::match_attendance::Column::UserId])
                        .update_column(schema::match_attendance::Column::Status)
                        .to_owned()
                )
                .exec_without_returning(db).await?;
        }
        Ok(())
    }
}
