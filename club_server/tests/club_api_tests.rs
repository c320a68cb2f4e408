mod common;

use assert_matches::assert_matches;
use club_backend::views::{AttendanceSummary, Leaderboards, MatchDetailView, MatchListView, SeasonRecord, TeamView};
use club_entities::prelude::*;
use club_server::response::APIErrorResponse;
use club_server::schedule::{ScheduleConfirmResponse, SchedulePreviewResponse};
use sea_orm::prelude::Uuid;
use serde_json::json;
use tracing_test::traced_test;

use crate::common::{Fixture, FixtureOptions};


fn schedule_body(team_id: Uuid) -> serde_json::Value {
    json!({
        "team_id": team_id,
        "venue": "Riverside",
        "competition_type": "league",
        "game_type": "11v11",
        "start_date": "2024-03-04",
        "end_date": "2024-03-10",
        "days_of_week": ["Mon", "Fri"],
        "time_slots": [{"start_time": "19:00:00", "end_time": "21:00:00"}]
    })
}

async fn mock_fixture() -> Fixture {
    Fixture::new(FixtureOptions { mock_default_club: true }).await
}

#[tokio::test]
#[traced_test]
async fn test_create_team_returns_owner_roster() {
    let mut fixture = Fixture::default().await;

    let mut response = fixture.post_json("/api/teams", json!({
        "name": "Riverside FC",
        "leader_id": Uuid::from_u128(2000),
    })).await;

    assert_eq!(response.status(), 200);
    let view: TeamView = response.json().await;
    assert_eq!(view.team.name, "Riverside FC");
    assert_eq!(view.active_members, 1);
    assert_eq!(view.members[0].role, MemberRole::Owner);
}

#[tokio::test]
#[traced_test]
async fn test_create_team_without_name_is_bad_request() {
    let mut fixture = Fixture::default().await;

    let mut response = fixture.post_json("/api/teams", json!({
        "name": "  ",
        "leader_id": Uuid::from_u128(2000),
    })).await;

    assert_eq!(response.status(), 400);
    let body: APIErrorResponse = response.json().await;
    assert_eq!(body.message, "Invalid name: Team name must not be empty");
}

#[tokio::test]
#[traced_test]
async fn test_duplicate_membership_is_conflict() {
    let mut fixture = mock_fixture().await;

    let response = fixture.post_json(&format!("/api/teams/{}/members", Uuid::from_u128(1000)), json!({ "user_id": Uuid::from_u128(2001) })).await;
    assert_eq!(response.status(), 409);

    let mut response = fixture.post_json(&format!("/api/teams/{}/members", Uuid::from_u128(1000)), json!({ "user_id": Uuid::from_u128(2010) })).await;
    assert_eq!(response.status(), 200);
    let view: TeamView = response.json().await;
    assert_eq!(view.members.len(), 4);
    assert_eq!(view.active_members, 3);

    let mut response = fixture.patch_json(
        &format!("/api/teams/{}/members/{}", Uuid::from_u128(1000), Uuid::from_u128(2010)),
        json!({ "status": "active" })
    ).await;
    assert_eq!(response.status(), 200);
    let view: TeamView = response.json().await;
    assert_eq!(view.active_members, 4);
}

#[tokio::test]
#[traced_test]
async fn test_unknown_team_is_not_found() {
    let mut fixture = mock_fixture().await;

    let response = fixture.get(&format!("/api/teams/{}", Uuid::from_u128(4242))).await;
    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[traced_test]
async fn test_schedule_preview_does_not_store() {
    let mut fixture = mock_fixture().await;
    let team_id = Uuid::from_u128(1000);

    let mut response = fixture.post_json(&format!("/api/teams/{}/schedule/preview", team_id), schedule_body(team_id)).await;
    assert_eq!(response.status(), 200);
    let preview: SchedulePreviewResponse = response.json().await;
    assert_eq!(preview.drafts.len(), 2);

    let mut response = fixture.get(&format!("/api/teams/{}/matches", team_id)).await;
    let list: MatchListView = response.json().await;
    assert!(list.matches.is_empty());
}

#[tokio::test]
#[traced_test]
async fn test_invalid_schedule_is_bad_request() {
    let mut fixture = mock_fixture().await;
    let team_id = Uuid::from_u128(1000);

    let mut body = schedule_body(team_id);
    body["days_of_week"] = json!([]);

    let response = fixture.post_json(&format!("/api/teams/{}/schedule/confirm", team_id), body).await;
    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[traced_test]
async fn test_schedule_then_finish_match() {
    let mut fixture = mock_fixture().await;
    let team_id = Uuid::from_u128(1000);

    let mut response = fixture.post_json(&format!("/api/teams/{}/schedule/confirm", team_id), schedule_body(team_id)).await;
    assert_eq!(response.status(), 200);
    let confirmed: ScheduleConfirmResponse = response.json().await;
    assert_eq!(confirmed.matches.len(), 2);
    assert_eq!(confirmed.attendance_rows, 6);

    let match_id = confirmed.matches[0].uuid;

    let response = fixture.put_json(&format!("/api/matches/{}/opponent", match_id), json!({ "opponent_team_id": Uuid::from_u128(1001) })).await;
    assert_eq!(response.status(), 200);

    for user_id in [2000u128, 2010] {
        let response = fixture.put_json(
            &format!("/api/matches/{}/attendance/{}", match_id, Uuid::from_u128(user_id)),
            json!({ "status": "attending" })
        ).await;
        assert_eq!(response.status(), 200);
    }

    let mut response = fixture.post_json(&format!("/api/matches/{}/finish", match_id), json!({
        "goals": [
            { "user_id": Uuid::from_u128(2000), "goal_type": "field" },
            { "user_id": Uuid::from_u128(2010), "goal_type": "penalty" }
        ],
        "man_of_the_match": Uuid::from_u128(2000),
        "score": { "mode": "computed" }
    })).await;
    assert_eq!(response.status(), 200);
    let detail: MatchDetailView = response.json().await;
    assert_eq!(detail.details.score, Some(MatchScore { home: 1, away: 1 }));
    assert_eq!(detail.goals.len(), 2);
    assert_eq!(detail.opponent_name, Some("Team 1".to_string()));

    let mut response = fixture.get(&format!("/api/teams/{}/record", team_id)).await;
    let record: SeasonRecord = response.json().await;
    assert_eq!((record.wins, record.draws, record.losses), (0, 1, 0));

    let mut response = fixture.get(&format!("/api/teams/{}/leaderboards?size=1", team_id)).await;
    let boards: Leaderboards = response.json().await;
    assert_eq!(boards.goals.len(), 1);
    assert_eq!(boards.goals[0].user_id, Uuid::from_u128(2000));

    let response = fixture.put_json(
        &format!("/api/matches/{}/attendance/{}", match_id, Uuid::from_u128(2001)),
        json!({ "status": "attending" })
    ).await;
    assert_eq!(response.status(), 409);

    let response = fixture.post_json(&format!("/api/matches/{}/finish", match_id), json!({
        "score": { "mode": "manual", "home": 3, "away": 0 }
    })).await;
    assert_eq!(response.status(), 409);

    let mut response = fixture.get(&format!("/api/matches/{}/attendance", match_id)).await;
    let summary: AttendanceSummary = response.json().await;
    assert!(summary.is_finished);
    assert_eq!(summary.attending, 2);
}

#[tokio::test]
#[traced_test]
async fn test_guest_opponent_is_reused() {
    let mut fixture = mock_fixture().await;
    let team_id = Uuid::from_u128(1000);

    let mut ids = vec![];
    for name in ["Sunday Rovers", "SUNDAY ROVERS "] {
        let mut response = fixture.post_json(&format!("/api/teams/{}/matches", team_id), json!({
            "match_date": "2024-03-09T15:00:00",
            "venue": "Riverside",
            "is_home": true,
            "opponent": { "guest_club_name": name },
            "competition_type": "friendly",
            "game_type": "11v11"
        })).await;
        assert_eq!(response.status(), 200);
        let detail: MatchDetailView = response.json().await;
        assert_eq!(detail.opponent_name, Some("Sunday Rovers".to_string()));
        ids.push(detail.details.opponent);
    }
    assert_eq!(ids[0], ids[1]);
    assert_matches!(ids[0], Opponent::Guest(_));

    let mut response = fixture.get(&format!("/api/teams/{}/guest-clubs", team_id)).await;
    let body: serde_json::Value = response.json().await;
    assert_eq!(body["clubs"].as_array().map(|c| c.len()), Some(1));
}

#[tokio::test]
#[traced_test]
async fn test_match_without_opponent_is_rejected() {
    let mut fixture = mock_fixture().await;

    let mut response = fixture.post_json(&format!("/api/teams/{}/matches", Uuid::from_u128(1000)), json!({
        "match_date": "2024-03-09T15:00:00",
        "venue": "Riverside",
        "is_home": true,
        "opponent": {},
        "competition_type": "friendly",
        "game_type": "11v11"
    })).await;

    assert_eq!(response.status(), 400);
    let body: APIErrorResponse = response.json().await;
    assert_eq!(body.message, "Invalid opponent: No opponent selected");
}

#[tokio::test]
#[traced_test]
async fn test_profiles_and_stadiums() {
    let mut fixture = Fixture::default().await;

    let mut response = fixture.put_json(&format!("/api/profiles/{}", Uuid::from_u128(2000)), json!({ "display_name": "Min-jun" })).await;
    assert_eq!(response.status(), 200);
    let profile: Profile = response.json().await;
    assert_eq!(profile.display_name, "Min-jun");

    let response = fixture.post_json("/api/stadiums", json!({ "name": "Hangang Park" })).await;
    assert_eq!(response.status(), 200);

    let mut response = fixture.get("/api/stadiums").await;
    let stadiums: Vec<Stadium> = response.json().await;
    assert_eq!(stadiums.len(), 1);

    assert_eq!(Profile::get_display_names(&fixture.db, vec![Uuid::from_u128(2000)]).await.unwrap()[&Uuid::from_u128(2000)], "Min-jun");
}
