use club_entities::prelude::*;

use serde::{Serialize, Deserialize};

mod base;
mod error;
mod attendance_seeding;
mod opponent_selection;
mod create_team;
mod update_team;
mod request_membership;
mod update_member;
mod upsert_profile;
mod create_stadium;
mod confirm_schedule;
mod create_match;
mod assign_opponent;
mod finish_match;
mod update_attendance;

pub use self::base::ActionTrait;
pub use self::error::ActionError;
pub use self::opponent_selection::OpponentSelection;
pub use self::create_team::CreateTeamAction;
pub use self::update_team::UpdateTeamAction;
pub use self::request_membership::RequestMembershipAction;
pub use self::update_member::UpdateMemberAction;
pub use self::upsert_profile::UpsertProfileAction;
pub use self::create_stadium::CreateStadiumAction;
pub use self::confirm_schedule::ConfirmScheduleAction;
pub use self::create_match::CreateMatchAction;
pub use self::assign_opponent::AssignOpponentAction;
pub use self::finish_match::{FinishMatchAction, GoalEntry, ScoreMode};
pub use self::update_attendance::UpdateAttendanceAction;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Action {
    CreateTeam { action: CreateTeamAction },
    UpdateTeam { action: UpdateTeamAction },
    RequestMembership { action: RequestMembershipAction },
    UpdateMember { action: UpdateMemberAction },
    UpsertProfile { action: UpsertProfileAction },
    CreateStadium { action: CreateStadiumAction },
    ConfirmSchedule { action: ConfirmScheduleAction },
    CreateMatch { action: CreateMatchAction },
    AssignOpponent { action: AssignOpponentAction },
    FinishMatch { action: FinishMatchAction },
    UpdateAttendance { action: UpdateAttendanceAction },
}

impl Action {
    pub async fn execute<C>(self, db: &C) -> Result<EntityGroup, anyhow::Error> where C: sea_orm::ConnectionTrait {
        match self {
            Action::CreateTeam { action } => action.get_changes(db).await,
            Action::UpdateTeam { action } => action.get_changes(db).await,
            Action::RequestMembership { action } => action.get_changes(db).await,
            Action::UpdateMember { action } => action.get_changes(db).await,
            Action::UpsertProfile { action } => action.get_changes(db).await,
            Action::CreateStadium { action } => action.get_changes(db).await,
            Action::ConfirmSchedule { action } => action.get_changes(db).await,
            Action::CreateMatch { action } => action.get_changes(db).await,
            Action::AssignOpponent { action } => action.get_changes(db).await,
            Action::FinishMatch { action } => action.get_changes(db).await,
            Action::UpdateAttendance { action } => action.get_changes(db).await,
        }
    }
}
