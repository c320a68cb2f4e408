use async_trait::async_trait;
use club_entities::prelude::*;
use sea_orm::{prelude::Uuid, ConnectionTrait};
use serde::{Serialize, Deserialize};
use tracing::warn;

use crate::actions::{ActionTrait, ActionError, OpponentSelection};


/// Sets the opponent of an unfinished match.
///
/// Attendance rows are left as they are: a newly assigned registered team does not get
/// placeholder rows for its roster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignOpponentAction {
    pub match_id: Uuid,
    pub opponent: OpponentSelection,
}

#[async_trait]
impl ActionTrait for AssignOpponentAction {
    async fn get_changes<C>(self, db: &C) -> Result<EntityGroup, anyhow::Error> where C: ConnectionTrait {
        self.opponent.choice()?;

        let mut m = Match::get(db, self.match_id).await?.ok_or(ActionError::not_found("Match", self.match_id))?;
        if m.is_finished() {
            warn!("Refusing to change the opponent of finished match {}", self.match_id);
            return Err(ActionError::MatchFinished { match_id: self.match_id }.into());
        }

        m.opponent = self.opponent.resolve(db, m.team_id).await?;

        Ok(EntityGroup::new_with_entities(vec![Entity::Match(m)]))
    }
}
