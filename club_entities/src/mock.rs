use chrono::{NaiveDate, NaiveDateTime};
use itertools::Itertools;
use sea_orm::prelude::Uuid;

use faker_rand::en_us::names::FullName;
use faker_rand::en_us::company::CompanyName;

use crate::prelude::*;


#[derive(Debug)]
pub struct MockOption {
    pub deterministic_uuids: bool,
    pub num_teams: u32,
    pub members_per_team: u32,
    pub pending_members_per_team: u32,
    pub use_random_names: bool,
}

impl Default for MockOption {
    fn default() -> Self {
        Self {
            deterministic_uuids: false,
            num_teams: 2,
            members_per_team: 3,
            pending_members_per_team: 0,
            use_random_names: false,
        }
    }
}

pub fn make_mock_club() -> EntityGroup {
    make_mock_club_with_options(Default::default())
}

/// Builds teams with rosters and profiles.
///
/// With deterministic uuids the ids are:
///   Stadium: 500
///   Teams: 1000 + team index
///   Users: 2000 + 10 * team index + member index (pending members follow active ones)
/// The first member of every team is its owner and leader.
pub fn make_mock_club_with_options(options: MockOption) -> EntityGroup {
    assert!(options.members_per_team >= 1);
    assert!(options.members_per_team + options.pending_members_per_team <= 10);

    let mut group = EntityGroup::new();

    let make_uuid = |value: u128| if options.deterministic_uuids { Uuid::from_u128(value) } else { Uuid::new_v4() };

    group.add(Entity::Stadium(Stadium {
        uuid: make_uuid(500),
        name: "Mock Stadium".into(),
        address: None,
    }));

    for team_idx in 0..options.num_teams {
        let team_uuid = make_uuid(1000 + team_idx as u128);

        let members = (0..options.members_per_team + options.pending_members_per_team).map(|i| {
            let user_id = make_uuid(2000 + 10 * team_idx as u128 + i as u128);
            let role = if i == 0 { MemberRole::Owner } else { MemberRole::Member };
            let status = if i < options.members_per_team { MemberStatus::Active } else { MemberStatus::Pending };
            TeamMember { team_id: team_uuid, user_id, role, status }
        }).collect_vec();

        let (name, city) = if options.use_random_names {
            (rand::random::<CompanyName>().to_string(), None)
        }
        else {
            (format!("Team {}", team_idx), None)
        };

        group.add(Entity::Team(Team {
            uuid: team_uuid,
            name,
            city,
            gu: None,
            leader_id: members[0].user_id,
        }));

        for member in members {
            let display_name = if options.use_random_names {
                rand::random::<FullName>().to_string()
            }
            else {
                format!("Player {}", member.user_id.as_u128())
            };
            group.add(Entity::Profile(Profile { uuid: member.user_id, display_name }));
            group.add(Entity::TeamMember(member));
        }
    }

    group
}

/// A TBD match of `team_id` that has not been played yet.
pub fn mock_match(uuid: Uuid, team_id: Uuid, match_date: NaiveDateTime) -> Match {
    Match {
        uuid,
        team_id,
        match_date,
        registration_deadline: match_date - chrono::Duration::hours(48),
        venue: "Mock Stadium".into(),
        stadium_id: None,
        is_home: true,
        opponent: Opponent::Tbd,
        score: None,
        competition_type: "friendly".into(),
        game_type: "11v11".into(),
        description: None,
    }
}

pub fn mock_date(year: i32, month: u32, day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(hour, 0, 0))
        .expect("Invalid mock date")
}
