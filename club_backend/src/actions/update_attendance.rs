use async_trait::async_trait;
use club_entities::prelude::*;
use sea_orm::{prelude::Uuid, ConnectionTrait};
use serde::{Serialize, Deserialize};
use tracing::warn;

use crate::actions::{ActionTrait, ActionError};


/// Sets one player's attendance for an unfinished match.
///
/// Players without a row yet (e.g. members who joined after the match was created) get one
/// for whichever participating team they are an active member of.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateAttendanceAction {
    pub match_id: Uuid,
    pub user_id: Uuid,
    pub status: AttendanceStatus,
}

#[async_trait]
impl ActionTrait for UpdateAttendanceAction {
    async fn get_changes<C>(self, db: &C) -> Result<EntityGroup, anyhow::Error> where C: ConnectionTrait {
        let m = Match::get(db, self.match_id).await?.ok_or(ActionError::not_found("Match", self.match_id))?;
        if m.is_finished() {
            warn!("Refusing attendance change for finished match {}", self.match_id);
            return Err(ActionError::MatchFinished { match_id: self.match_id }.into());
        }

        let team_id = match Attendance::get(db, self.match_id, self.user_id).await? {
            Some(existing) => existing.team_id,
            None => {
                let mut team_id = None;
                for candidate in std::iter::once(m.team_id).chain(m.opponent.registered_team()) {
                    if TeamMember::get(db, candidate, self.user_id).await?.map_or(false, |member| member.is_active()) {
                        team_id = Some(candidate);
                        break;
                    }
                }
                team_id.ok_or(ActionError::validation("user_id", "User is not on the roster of a participating team"))?
            }
        };

        Ok(EntityGroup::new_with_entities(vec![
            Entity::Attendance(Attendance {
                match_id: self.match_id,
                user_id: self.user_id,
                team_id,
                status: self.status,
            })
        ]))
    }
}
