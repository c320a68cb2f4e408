use club_entities::prelude::*;
use sea_orm::{prelude::Uuid, ConnectionTrait};
use serde::{Serialize, Deserialize};

use crate::actions::ActionError;


/// The opponent as entered in a match form. Exactly one of the three choices must be made.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpponentSelection {
    #[serde(default)]
    pub opponent_team_id: Option<Uuid>,
    #[serde(default)]
    pub guest_club_name: Option<String>,
    #[serde(default)]
    pub is_tbd: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum OpponentChoice {
    Registered(Uuid),
    Guest(String),
    Tbd,
}

impl OpponentSelection {
    pub fn registered(team_id: Uuid) -> Self {
        OpponentSelection { opponent_team_id: Some(team_id), ..Default::default() }
    }

    pub fn guest(name: &str) -> Self {
        OpponentSelection { guest_club_name: Some(name.to_string()), ..Default::default() }
    }

    pub fn tbd() -> Self {
        OpponentSelection { is_tbd: true, ..Default::default() }
    }

    pub(crate) fn choice(&self) -> Result<OpponentChoice, ActionError> {
        let guest_name = self.guest_club_name.as_deref().map(str::trim);

        match (self.opponent_team_id, guest_name, self.is_tbd) {
            (Some(team_id), None, false) => Ok(OpponentChoice::Registered(team_id)),
            (None, Some(""), false) => Err(ActionError::validation("guest_club_name", "Guest club name must not be empty")),
            (None, Some(name), false) => Ok(OpponentChoice::Guest(name.to_string())),
            (None, None, true) => Ok(OpponentChoice::Tbd),
            (None, None, false) => Err(ActionError::validation("opponent", "No opponent selected")),
            _ => Err(ActionError::validation("opponent", "Select exactly one of registered team, guest club or TBD")),
        }
    }

    /// Validates the selection for a match owned by `team_id` and turns it into an [`Opponent`],
    /// creating the guest club if the team has none of that name yet.
    pub(crate) async fn resolve<C>(&self, db: &C, team_id: Uuid) -> Result<Opponent, anyhow::Error> where C: ConnectionTrait {
        Ok(match self.choice()? {
            OpponentChoice::Registered(opponent_id) => {
                if opponent_id == team_id {
                    return Err(ActionError::validation("opponent_team_id", "A team cannot play against itself").into());
                }
                if Team::get(db, opponent_id).await?.is_none() {
                    return Err(ActionError::not_found("Team", opponent_id).into());
                }
                Opponent::Registered(opponent_id)
            },
            OpponentChoice::Guest(name) => {
                let club = GuestClub::resolve_or_create(db, team_id, &name, None).await?;
                Opponent::Guest(club.uuid)
            },
            OpponentChoice::Tbd => Opponent::Tbd,
        })
    }
}
