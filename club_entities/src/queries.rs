use std::collections::{HashMap, HashSet};

use itertools::Itertools;
use sea_orm::prelude::*;

use crate::{schema, domain::matches::{Match, Opponent}, utilities::find_by_ids};


pub async fn query_team_names<C>(db: &C, team_ids: Vec<Uuid>) -> Result<HashMap<Uuid, String>, DbErr> where C: ConnectionTrait {
    let teams = find_by_ids::<schema::teams::Entity, _>(db, schema::teams::Column::Id, team_ids).await?;
    Ok(teams.into_iter().map(|t| (t.id, t.name)).collect())
}

pub async fn query_guest_club_names<C>(db: &C, club_ids: Vec<Uuid>) -> Result<HashMap<Uuid, String>, DbErr> where C: ConnectionTrait {
    let clubs = find_by_ids::<schema::guest_clubs::Entity, _>(db, schema::guest_clubs::Column::Id, club_ids).await?;
    Ok(clubs.into_iter().map(|c| (c.id, c.name)).collect())
}

/// Display names of the opponents of `matches`. TBD opponents have no entry.
pub async fn query_opponent_names<C>(db: &C, matches: &[Match]) -> Result<HashMap<Opponent, String>, DbErr> where C: ConnectionTrait {
    let team_ids = matches.iter().filter_map(|m| match m.opponent {
        Opponent::Registered(id) => Some(id),
        _ => None
    }).unique().collect_vec();
    let club_ids = matches.iter().filter_map(|m| match m.opponent {
        Opponent::Guest(id) => Some(id),
        _ => None
    }).unique().collect_vec();

    let team_names = query_team_names(db, team_ids).await?;
    let club_names = query_guest_club_names(db, club_ids).await?;

    Ok(
        team_names.into_iter().map(|(id, name)| (Opponent::Registered(id), name))
            .chain(club_names.into_iter().map(|(id, name)| (Opponent::Guest(id), name)))
            .collect()
    )
}

/// Ids of the teams `user_id` is an active member of.
pub async fn query_active_team_ids_of_user<C>(db: &C, user_id: Uuid) -> Result<HashSet<Uuid>, DbErr> where C: ConnectionTrait {
    let memberships = schema::team_members::Entity::find()
        .filter(schema::team_members::Column::UserId.eq(user_id))
        .filter(schema::team_members::Column::Status.eq(crate::domain::MemberStatus::Active.as_str()))
        .all(db).await?;
    Ok(memberships.into_iter().map(|m| m.team_id).collect())
}
