use async_trait::async_trait;
use chrono::NaiveDateTime;
use club_entities::prelude::*;
use sea_orm::{prelude::Uuid, ConnectionTrait};
use serde::{Serialize, Deserialize};

use crate::actions::{ActionTrait, ActionError, OpponentSelection};
use crate::schedule::ScheduleOptions;

use super::attendance_seeding::seed_attendance;


#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMatchAction {
    #[serde(default = "Uuid::new_v4")]
    pub uuid: Uuid,
    pub team_id: Uuid,
    pub match_date: NaiveDateTime,
    /// Defaults to `options.registration_deadline_hours` before the match.
    #[serde(default)]
    pub registration_deadline: Option<NaiveDateTime>,
    pub venue: String,
    #[serde(default)]
    pub stadium_id: Option<Uuid>,
    pub is_home: bool,
    pub opponent: OpponentSelection,
    pub competition_type: String,
    pub game_type: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub options: ScheduleOptions,
}

#[async_trait]
impl ActionTrait for CreateMatchAction {
    async fn get_changes<C>(self, db: &C) -> Result<EntityGroup, anyhow::Error> where C: ConnectionTrait {
        let registration_deadline = match self.registration_deadline {
            Some(deadline) => deadline,
            None => self.options.registration_deadline(self.match_date)?,
        };
        if registration_deadline > self.match_date {
            return Err(ActionError::validation("registration_deadline", "Registration must close before the match starts").into());
        }
        // Validate before touching the store, since resolving a guest opponent may insert a club.
        self.opponent.choice()?;

        if Team::get(db, self.team_id).await?.is_none() {
            return Err(ActionError::not_found("Team", self.team_id).into());
        }
        if let Some(stadium_id) = self.stadium_id {
            if Stadium::get(db, stadium_id).await?.is_none() {
                return Err(ActionError::not_found("Stadium", stadium_id).into());
            }
        }

        let opponent = self.opponent.resolve(db, self.team_id).await?;

        let seeded_teams: Vec<Uuid> = std::iter::once(self.team_id).chain(opponent.registered_team()).collect();
        let attendances = seed_attendance(db, &[self.uuid], &seeded_teams).await?;

        let mut g = EntityGroup::new();
        g.add(Entity::Match(Match {
            uuid: self.uuid,
            team_id: self.team_id,
            match_date: self.match_date,
            registration_deadline,
            venue: self.venue,
            stadium_id: self.stadium_id,
            is_home: self.is_home,
            opponent,
            score: None,
            competition_type: self.competition_type,
            game_type: self.game_type,
            description: self.description,
        }));
        for a in attendances {
            g.add(Entity::Attendance(a));
        }

        Ok(g)
    }
}
