use std::error::Error;

use migration::MigratorTrait;
use sea_orm::{Database, Statement};
use sea_orm::prelude::*;
use club_entities::{prelude::*, mock::{self, MockOption, mock_date, mock_match}, schema};


pub async fn set_up_db(with_mock_env: bool) -> Result<DatabaseConnection, Box<dyn Error>> {
    let db = Database::connect("sqlite::memory:").await?;
    migration::Migrator::up(&db, None).await?;
    let _r = db.execute(Statement::from_sql_and_values(
        db.get_database_backend(),
        "PRAGMA foreign_keys = ON;",
        vec![])
    ).await?;

    if with_mock_env {
        mock::make_mock_club_with_options(MockOption {
            deterministic_uuids: true,
            pending_members_per_team: 1,
            ..Default::default()
        }).save_all(&db).await?;
    }
    Ok(db)
}

#[tokio::test]
async fn test_roster_contains_only_active_members() -> Result<(), Box<dyn Error>> {
    let db = set_up_db(true).await?;

    let all = TeamMember::get_all_in_team(&db, Uuid::from_u128(1000)).await?;
    let roster = TeamMember::get_roster(&db, Uuid::from_u128(1000)).await?;

    assert_eq!(all.len(), 4);
    assert_eq!(roster.len(), 3);
    assert!(roster.iter().all(|m| m.status == MemberStatus::Active));
    assert_eq!(roster[0].role, MemberRole::Owner);

    Ok(())
}

#[tokio::test]
async fn test_saving_member_twice_updates_row() -> Result<(), Box<dyn Error>> {
    let db = set_up_db(true).await?;

    let mut member = TeamMember::get(&db, Uuid::from_u128(1000), Uuid::from_u128(2003)).await?.unwrap();
    assert_eq!(member.status, MemberStatus::Pending);

    member.status = MemberStatus::Active;
    member.role = MemberRole::Admin;
    member.save(&db, false).await?;

    let all = TeamMember::get_all_in_team(&db, Uuid::from_u128(1000)).await?;
    assert_eq!(all.len(), 4);
    let member = TeamMember::get(&db, Uuid::from_u128(1000), Uuid::from_u128(2003)).await?.unwrap();
    assert_eq!(member.status, MemberStatus::Active);
    assert_eq!(member.role, MemberRole::Admin);

    Ok(())
}

#[tokio::test]
async fn test_match_opponent_and_score_are_stored() -> Result<(), Box<dyn Error>> {
    let db = set_up_db(true).await?;

    let mut m = mock_match(Uuid::from_u128(3000), Uuid::from_u128(1000), mock_date(2024, 3, 4, 19));
    m.save(&db, true).await?;

    let loaded = Match::get(&db, Uuid::from_u128(3000)).await?.unwrap();
    assert_eq!(loaded.opponent, Opponent::Tbd);
    assert_eq!(loaded.score, None);

    m.opponent = Opponent::Registered(Uuid::from_u128(1001));
    m.score = Some(MatchScore { home: 2, away: 1 });
    m.save(&db, false).await?;

    let loaded = Match::get(&db, Uuid::from_u128(3000)).await?.unwrap();
    assert_eq!(loaded.opponent, Opponent::Registered(Uuid::from_u128(1001)));
    assert_eq!(loaded.score, Some(MatchScore { home: 2, away: 1 }));

    let row = schema::matches::Entity::find_by_id(Uuid::from_u128(3000)).one(&db).await?.unwrap();
    assert!(row.is_finished);
    assert!(!row.is_tbd);
    assert_eq!(row.opponent_guest_team_id, None);

    Ok(())
}

#[tokio::test]
async fn test_matches_of_team_include_matches_as_opponent() -> Result<(), Box<dyn Error>> {
    let db = set_up_db(true).await?;

    let own = mock_match(Uuid::from_u128(3000), Uuid::from_u128(1000), mock_date(2024, 3, 4, 19));
    let as_opponent = Match {
        opponent: Opponent::Registered(Uuid::from_u128(1000)),
        ..mock_match(Uuid::from_u128(3001), Uuid::from_u128(1001), mock_date(2024, 3, 11, 19))
    };
    let unrelated = mock_match(Uuid::from_u128(3002), Uuid::from_u128(1001), mock_date(2024, 3, 12, 19));
    let outside_window = mock_match(Uuid::from_u128(3003), Uuid::from_u128(1000), mock_date(2024, 5, 1, 19));

    EntityGroup::new_with_entities(vec![
        Entity::Match(own),
        Entity::Match(as_opponent),
        Entity::Match(unrelated),
        Entity::Match(outside_window),
    ]).save_all(&db).await?;

    let matches = Match::get_all_for_team(&db, Uuid::from_u128(1000), Some(mock_date(2024, 3, 1, 0)), Some(mock_date(2024, 3, 31, 23))).await?;

    assert_eq!(matches.iter().map(|m| m.uuid).collect::<Vec<_>>(), vec![Uuid::from_u128(3000), Uuid::from_u128(3001)]);

    Ok(())
}

#[tokio::test]
async fn test_attendance_is_not_duplicated() -> Result<(), Box<dyn Error>> {
    let db = set_up_db(true).await?;

    mock_match(Uuid::from_u128(3000), Uuid::from_u128(1000), mock_date(2024, 3, 4, 19)).save(&db, true).await?;

    Attendance::placeholder(Uuid::from_u128(3000), Uuid::from_u128(2000), Uuid::from_u128(1000)).save(&db, false).await?;
    Attendance {
        status: AttendanceStatus::Attending,
        ..Attendance::placeholder(Uuid::from_u128(3000), Uuid::from_u128(2000), Uuid::from_u128(1000))
    }.save(&db, false).await?;

    let rows = Attendance::get_all_for_match(&db, Uuid::from_u128(3000)).await?;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].status, AttendanceStatus::Attending);

    Ok(())
}

#[tokio::test]
async fn test_guest_club_is_resolved_case_insensitively() -> Result<(), Box<dyn Error>> {
    let db = set_up_db(true).await?;

    let first = GuestClub::resolve_or_create(&db, Uuid::from_u128(1000), "Sunday Rovers", None).await?;
    let second = GuestClub::resolve_or_create(&db, Uuid::from_u128(1000), "  sunday ROVERS ", None).await?;
    let other_team = GuestClub::resolve_or_create(&db, Uuid::from_u128(1001), "Sunday Rovers", None).await?;

    assert_eq!(first.uuid, second.uuid);
    assert_eq!(second.name, "Sunday Rovers");
    assert_ne!(first.uuid, other_team.uuid);
    assert_eq!(GuestClub::get_all_in_team(&db, Uuid::from_u128(1000)).await?.len(), 1);

    Ok(())
}

#[tokio::test]
async fn test_goals_are_returned_in_insertion_order() -> Result<(), Box<dyn Error>> {
    let db = set_up_db(true).await?;

    mock_match(Uuid::from_u128(3000), Uuid::from_u128(1000), mock_date(2024, 3, 4, 19)).save(&db, true).await?;

    let goals = vec![
        Goal { match_id: Uuid::from_u128(3000), user_id: Uuid::from_u128(2002), team_id: Uuid::from_u128(1000), goal_type: Some(GoalType::Penalty) },
        Goal { match_id: Uuid::from_u128(3000), user_id: Uuid::from_u128(2000), team_id: Uuid::from_u128(1000), goal_type: None },
        Goal { match_id: Uuid::from_u128(3000), user_id: Uuid::from_u128(2001), team_id: Uuid::from_u128(1000), goal_type: Some(GoalType::Field) },
    ];
    EntityGroup::new_with_entities(goals.iter().cloned().map(Entity::Goal).collect()).save_all(&db).await?;

    let loaded = Goal::get_all_for_matches(&db, vec![Uuid::from_u128(3000)]).await?;
    assert_eq!(loaded, goals);

    Ok(())
}

#[tokio::test]
async fn test_large_batches_are_saved_and_loaded() -> Result<(), Box<dyn Error>> {
    let db = set_up_db(true).await?;

    let user_ids = (0..1500u128).map(|i| Uuid::from_u128(5000 + i)).collect::<Vec<_>>();
    EntityGroup::new_with_entities(
        user_ids.iter().map(|id| Entity::Profile(Profile { uuid: *id, display_name: format!("Player {}", id.as_u128()) })).collect()
    ).save_all(&db).await?;

    // Repeated ids resolve to the same row instead of going missing
    let mut lookup = user_ids.clone();
    lookup.extend(user_ids.iter().take(10).copied());
    let names = Profile::get_display_names(&db, lookup).await?;
    assert_eq!(names.len(), 1500);
    assert_eq!(names[&Uuid::from_u128(6499)], "Player 6499");

    let m = mock_match(Uuid::from_u128(3000), Uuid::from_u128(1000), mock_date(2024, 3, 4, 19));
    let mut group = EntityGroup::new_with_entities(vec![Entity::Match(m)]);
    for id in user_ids.iter() {
        group.add(Entity::Attendance(Attendance::placeholder(Uuid::from_u128(3000), *id, Uuid::from_u128(1000))));
    }
    group.save_all(&db).await?;

    let rows = Attendance::get_all_for_match(&db, Uuid::from_u128(3000)).await?;
    assert_eq!(rows.len(), 1500);
    assert!(rows.windows(2).all(|w| w[0].user_id < w[1].user_id));

    Ok(())
}
