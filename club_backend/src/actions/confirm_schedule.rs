use async_trait::async_trait;
use club_entities::prelude::*;
use itertools::Itertools;
use sea_orm::{prelude::Uuid, ConnectionTrait};
use serde::{Serialize, Deserialize};
use tracing::info;

use crate::actions::{ActionTrait, ActionError};
use crate::schedule::{generate_schedule, ScheduleOptions, ScheduleRequest};

use super::attendance_seeding::seed_attendance;


/// Stores the drafts of a schedule request together with a `maybe` attendance row for every
/// active member of the team for every match.
///
/// Saving the returned group inside one transaction makes the whole schedule atomic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfirmScheduleAction {
    pub request: ScheduleRequest,
    #[serde(default)]
    pub options: ScheduleOptions,
}

#[async_trait]
impl ActionTrait for ConfirmScheduleAction {
    async fn get_changes<C>(self, db: &C) -> Result<EntityGroup, anyhow::Error> where C: ConnectionTrait {
        let team_id = self.request.team_id;
        if Team::get(db, team_id).await?.is_none() {
            return Err(ActionError::not_found("Team", team_id).into());
        }

        let drafts = generate_schedule(&self.request, &self.options)?;
        let matches = drafts.into_iter().map(|d| d.into_match(Uuid::new_v4())).collect_vec();
        let attendances = seed_attendance(db, &matches.iter().map(|m| m.uuid).collect_vec(), &[team_id]).await?;

        info!("Confirming schedule for team {} with {} matches and {} attendance rows", team_id, matches.len(), attendances.len());

        let mut g = EntityGroup::new();
        for m in matches {
            g.add(Entity::Match(m));
        }
        for a in attendances {
            g.add(Entity::Attendance(a));
        }
        Ok(g)
    }
}
