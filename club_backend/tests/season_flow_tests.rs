use std::error::Error;

use chrono::{NaiveDate, NaiveTime, Weekday};
use migration::MigratorTrait;
use sea_orm::{prelude::*, Database, Statement, TransactionTrait};

use club_entities::prelude::*;
use club_backend::actions::*;
use club_backend::schedule::{ScheduleRequest, TimeSlot};
use club_backend::views::{DateWindow, SeasonRecord, AttendanceSummary};


pub async fn set_up_db() -> Result<DatabaseConnection, Box<dyn Error>> {
    let db = Database::connect("sqlite::memory:").await?;
    migration::Migrator::up(&db, None).await.unwrap();
    let _r = db.execute(Statement::from_sql_and_values(
        db.get_database_backend(),
        "PRAGMA foreign_keys = ON;",
        vec![])
    ).await?;
    Ok(db)
}

async fn run<A: ActionTrait + Send + 'static>(db: &DatabaseConnection, action: A) -> Result<EntityGroup, Box<dyn Error>> {
    let txn = db.begin().await?;
    let changes = action.get_changes(&txn).await?;
    changes.save_all(&txn).await?;
    txn.commit().await?;
    Ok(changes)
}

#[tokio::test]
async fn test_team_schedule_and_result() -> Result<(), Box<dyn Error>> {
    let db = set_up_db().await?;

    let home_team = Uuid::from_u128(1000);
    let away_team = Uuid::from_u128(1001);
    let owner = Uuid::from_u128(2000);
    let players = [Uuid::from_u128(2001), Uuid::from_u128(2002)];

    run(&db, CreateTeamAction { uuid: home_team, name: "Riverside FC".into(), city: None, gu: None, leader_id: owner }).await?;
    for player in players {
        run(&db, RequestMembershipAction { team_id: home_team, user_id: player }).await?;
        run(&db, UpdateMemberAction { team_id: home_team, user_id: player, role: None, status: Some(MemberStatus::Active) }).await?;
    }
    run(&db, CreateTeamAction { uuid: away_team, name: "Hillside United".into(), city: None, gu: None, leader_id: Uuid::from_u128(2010) }).await?;

    let changes = run(&db, ConfirmScheduleAction {
        request: ScheduleRequest {
            team_id: home_team,
            venue: "Riverside".into(),
            stadium_id: None,
            is_home: true,
            competition_type: "league".into(),
            game_type: "11v11".into(),
            description: None,
            start_date: NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
            days_of_week: vec![Weekday::Mon, Weekday::Fri],
            time_slots: vec![TimeSlot { start_time: NaiveTime::from_hms_opt(19, 0, 0).unwrap(), end_time: NaiveTime::from_hms_opt(21, 0, 0).unwrap() }],
        },
        options: Default::default(),
    }).await?;

    let matches = Match::get_all_for_team(&db, home_team, None, None).await?;
    assert_eq!(matches.len(), 2);
    assert_eq!(changes.attendances.len(), 6);

    let mut total_rows = 0;
    for m in matches.iter() {
        let summary = AttendanceSummary::load(&db, m.uuid).await?;
        assert_eq!(summary.maybe, 3);
        total_rows += summary.lines.len();
    }
    assert_eq!(total_rows, 6);

    let first = matches[0].uuid;
    run(&db, AssignOpponentAction { match_id: first, opponent: OpponentSelection::registered(away_team) }).await?;
    run(&db, UpdateAttendanceAction { match_id: first, user_id: Uuid::from_u128(2010), status: AttendanceStatus::Attending }).await?;
    run(&db, UpdateAttendanceAction { match_id: first, user_id: players[0], status: AttendanceStatus::Attending }).await?;

    run(&db, FinishMatchAction {
        match_id: first,
        goals: vec![
            GoalEntry { user_id: players[0], goal_type: Some(GoalType::Field) },
            GoalEntry { user_id: Uuid::from_u128(2010), goal_type: Some(GoalType::Field) },
        ],
        assists: vec![],
        man_of_the_match: Some(players[0]),
        score: ScoreMode::Computed,
    }).await?;

    let finished = Match::get(&db, first).await?.unwrap();
    assert_eq!(finished.score, Some(MatchScore { home: 1, away: 1 }));

    let record = SeasonRecord::load(&db, home_team, DateWindow::all_time()).await?;
    assert_eq!((record.wins, record.draws, record.losses), (0, 1, 0));

    Ok(())
}
