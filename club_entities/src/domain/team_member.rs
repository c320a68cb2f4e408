use async_trait::async_trait;
use itertools::Itertools;
use sea_orm::{prelude::*, ActiveValue, QueryOrder};
use sea_orm::sea_query::OnConflict;
use serde::{Serialize, Deserialize};

use crate::schema;
use crate::utilities::rows_per_statement;

use super::{ClubEntity, MemberRole, MemberStatus, UnknownValueError};


#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone)]
pub struct TeamMember {
    pub team_id: Uuid,
    pub user_id: Uuid,
    pub role: MemberRole,
    pub status: MemberStatus,
}

impl TeamMember {
    pub fn new_active(team_id: Uuid, user_id: Uuid, role: MemberRole) -> Self {
        TeamMember { team_id, user_id, role, status: MemberStatus::Active }
    }

    pub fn is_active(&self) -> bool {
        self.status == MemberStatus::Active
    }

    fn from_model(model: schema::team_members::Model) -> Result<Self, UnknownValueError> {
        Ok(TeamMember {
            team_id: model.team_id,
            user_id: model.user_id,
            role: model.role.parse()?,
            status: model.status.parse()?,
        })
    }

    pub async fn get<C>(db: &C, team_id: Uuid, user_id: Uuid) -> Result<Option<TeamMember>, anyhow::Error> where C: ConnectionTrait {
        let model = schema::team_members::Entity::find_by_id((team_id, user_id)).one(db).await?;
        Ok(model.map(Self::from_model).transpose()?)
    }

    pub async fn get_all_in_team<C>(db: &C, team_id: Uuid) -> Result<Vec<TeamMember>, anyhow::Error> where C: ConnectionTrait {
        let rows = schema::team_members::Entity::find()
            .filter(schema::team_members::Column::TeamId.eq(team_id))
            .order_by_asc(schema::team_members::Column::UserId)
            .all(db).await?;
        Ok(rows.into_iter().map(Self::from_model).collect::<Result<Vec<_>, _>>()?)
    }

    /// The roster: active members only.
    pub async fn get_roster<C>(db: &C, team_id: Uuid) -> Result<Vec<TeamMember>, anyhow::Error> where C: ConnectionTrait {
        let rows = schema::team_members::Entity::find()
            .filter(schema::team_members::Column::TeamId.eq(team_id))
            .filter(schema::team_members::Column::Status.eq(MemberStatus::Active.as_str()))
            .order_by_asc(schema::team_members::Column::UserId)
            .all(db).await?;
        Ok(rows.into_iter().map(Self::from_model).collect::<Result<Vec<_>, _>>()?)
    }

    pub async fn get_teams_of_user<C>(db: &C, user_id: Uuid) -> Result<Vec<TeamMember>, anyhow::Error> where C: ConnectionTrait {
        let rows = schema::team_members::Entity::find()
            .filter(schema::team_members::Column::UserId.eq(user_id))
            .all(db).await?;
        Ok(rows.into_iter().map(Self::from_model).collect::<Result<Vec<_>, _>>()?)
    }
}

#[async_trait]
impl ClubEntity for TeamMember {
    async fn save_many<C>(db: &C, _guarantee_insert: bool, entities: &Vec<&Self>) -> Result<(), anyhow::Error> where C: ConnectionTrait {
        for chunk in entities.chunks(rows_per_statement(4)) {
            let models = chunk.iter().map(|m| schema::team_members::ActiveModel {
                team_id: ActiveValue::Set(m.team_id),
                user_id: ActiveValue::Set(m.user_id),
                role: ActiveValue::Set(m.role.as_str().to_string()),
                status: ActiveValue::Set(m.status.as_str().to_string()),
            }).collect_vec();

            schema::team_members::Entity::insert_many(models)
                .on_conflict(
                    OnConflict::columns([schema::team_members::Column::TeamId, schema::team_members::Column::UserId])
                        .update_columns([schema::team_members::Column::Role, schema::team_members::Column::Status])
                        .to_owned()
                )
                .exec_without_returning(db).await?;
        }
        Ok(())
    }
}
