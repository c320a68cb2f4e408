use sea_orm::prelude::Uuid;
use thiserror::Error;


/// Reasons an action refuses to produce changes.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ActionError {
    #[error("Invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },
    #[error("{kind} {id} does not exist")]
    NotFound { kind: &'static str, id: Uuid },
    #[error("Match {match_id} is finished and can no longer be changed")]
    MatchFinished { match_id: Uuid },
    #[error("Match {match_id} has already been finished")]
    MatchAlreadyFinished { match_id: Uuid },
    #[error("User {user_id} already has a membership in team {team_id}")]
    DuplicateMembership { team_id: Uuid, user_id: Uuid },
}

impl ActionError {
    pub(crate) fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        ActionError::Validation { field, reason: reason.into() }
    }

    pub(crate) fn not_found(kind: &'static str, id: Uuid) -> Self {
        ActionError::NotFound { kind, id }
    }
}
