use std::collections::HashSet;

use club_entities::prelude::*;
use sea_orm::{prelude::Uuid, ConnectionTrait};
use tracing::warn;


/// Placeholder rows for every active member of the given teams, tagged with the team the member
/// was seeded for. A user on both rosters is seeded once, for the team listed first.
pub(crate) async fn seed_attendance<C>(db: &C, match_ids: &[Uuid], team_ids: &[Uuid]) -> Result<Vec<Attendance>, anyhow::Error> where C: ConnectionTrait {
    let mut roster = vec![];
    let mut seen = HashSet::new();

    for team_id in team_ids {
        for member in TeamMember::get_roster(db, *team_id).await? {
            if seen.insert(member.user_id) {
                roster.push(member);
            }
            else {
                warn!("User {} is on the roster of both teams, seeding attendance for the first one only", member.user_id);
            }
        }
    }

    Ok(
        match_ids.iter().flat_map(|match_id| {
            roster.iter().map(move |member| Attendance::placeholder(*match_id, member.user_id, member.team_id))
        }).collect()
    )
}
