use club_entities::prelude::*;
use sea_orm::{prelude::Uuid, ConnectionTrait};
use serde::{Serialize, Deserialize};


#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestClubListView {
    pub team_id: Uuid,
    pub clubs: Vec<GuestClub>,
}

impl GuestClubListView {
    pub async fn load<C>(db: &C, team_id: Uuid) -> Result<Self, anyhow::Error> where C: ConnectionTrait {
        Ok(GuestClubListView {
            team_id,
            clubs: GuestClub::get_all_in_team(db, team_id).await?,
        })
    }
}
