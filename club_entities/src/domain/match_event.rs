use async_trait::async_trait;
use itertools::Itertools;
use sea_orm::{prelude::*, ActiveValue};
use serde::{Serialize, Deserialize};

use crate::schema;
use crate::utilities::{find_by_ids, rows_per_statement};

use super::{ClubEntity, GoalType, UnknownValueError};


#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone)]
pub struct Goal {
    pub match_id: Uuid,
    pub user_id: Uuid,
    pub team_id: Uuid,
    pub goal_type: Option<GoalType>,
}

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone)]
pub struct Assist {
    pub match_id: Uuid,
    pub user_id: Uuid,
    pub team_id: Uuid,
}

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone)]
pub struct ManOfTheMatch {
    pub match_id: Uuid,
    pub user_id: Uuid,
    pub team_id: Uuid,
}

// Event rows are returned in insertion order. Leaderboards depend on this
// order to break ties.

impl Goal {
    pub async fn get_all_for_matches<C>(db: &C, match_ids: Vec<Uuid>) -> Result<Vec<Goal>, anyhow::Error> where C: ConnectionTrait {
        let rows = find_by_ids::<schema::match_goals::Entity, _>(db, schema::match_goals::Column::MatchId, match_ids).await?
            .into_iter()
            .sorted_by_key(|row| row.id);

        rows.map(|row| -> Result<Goal, UnknownValueError> {
            Ok(Goal {
                match_id: row.match_id,
                user_id: row.user_id,
                team_id: row.team_id,
                goal_type: row.goal_type.map(|t| t.parse()).transpose()?,
            })
        }).collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }
}

impl Assist {
    pub async fn get_all_for_matches<C>(db: &C, match_ids: Vec<Uuid>) -> Result<Vec<Assist>, DbErr> where C: ConnectionTrait {
        let rows = find_by_ids::<schema::match_assists::Entity, _>(db, schema::match_assists::Column::MatchId, match_ids).await?
            .into_iter()
            .sorted_by_key(|row| row.id);

        Ok(rows.map(|row| Assist { match_id: row.match_id, user_id: row.user_id, team_id: row.team_id }).collect())
    }
}

impl ManOfTheMatch {
    pub async fn get_all_for_matches<C>(db: &C, match_ids: Vec<Uuid>) -> Result<Vec<ManOfTheMatch>, DbErr> where C: ConnectionTrait {
        let rows = find_by_ids::<schema::match_mom::Entity, _>(db, schema::match_mom::Column::MatchId, match_ids).await?
            .into_iter()
            .sorted_by_key(|row| row.id);

        Ok(rows.map(|row| ManOfTheMatch { match_id: row.match_id, user_id: row.user_id, team_id: row.team_id }).collect())
    }
}

#[async_trait]
impl ClubEntity for Goal {
    async fn save_many<C>(db: &C, _guarantee_insert: bool, entities: &Vec<&Self>) -> Result<(), anyhow::Error> where C: ConnectionTrait {
        for chunk in entities.chunks(rows_per_statement(4)) {
            let models = chunk.iter().map(|g| schema::match_goals::ActiveModel {
                match_id: ActiveValue::Set(g.match_id),
                user_id: ActiveValue::Set(g.user_id),
                team_id: ActiveValue::Set(g.team_id),
                goal_type: ActiveValue::Set(g.goal_type.map(|t| t.as_str().to_string())),
                ..Default::default()
            }).collect_vec();
            schema::match_goals::Entity::insert_many(models).exec_without_returning(db).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl ClubEntity for Assist {
    async fn save_many<C>(db: &C, _guarantee_insert: bool, entities: &Vec<&Self>) -> Result<(), anyhow::Error> where C: ConnectionTrait {
        for chunk in entities.chunks(rows_per_statement(3)) {
            let models = chunk.iter().map(|a| schema::match_assists::ActiveModel {
                match_id: ActiveValue::Set(a.match_id),
                user_id: ActiveValue::Set(a.user_id),
                team_id: ActiveValue::Set(a.team_id),
                ..Default::default()
            }).collect_vec();
            schema::match_assists::Entity::insert_many(models).exec_without_returning(db).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl ClubEntity for ManOfTheMatch {
    async fn save_many<C>(db: &C, _guarantee_insert: bool, entities: &Vec<&Self>) -> Result<(), anyhow::Error> where C: ConnectionTrait {
        for chunk in entities.chunks(rows_per_statement(3)) {
            let models = chunk.iter().map(|m| schema::match_mom::ActiveModel {
                match_id: ActiveValue::Set(m.match_id),
                user_id: ActiveValue::Set(m.user_id),
                team_id: ActiveValue::Set(m.team_id),
                ..Default::default()
            }).collect_vec();
            schema::match_mom::Entity::insert_many(models).exec_without_returning(db).await?;
        }
        Ok(())
    }
}
