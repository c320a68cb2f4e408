use axum::{extract::{Path, Query, State}, Json, Router, routing::get};
use chrono::NaiveDateTime;
use club_backend::views::{AttendanceRates, DateWindow, HeadToHead, Leaderboards, PlayerSummary, SeasonRecord};
use sea_orm::{prelude::Uuid, DatabaseConnection};
use serde::{Serialize, Deserialize};

use crate::{response::APIError, state::{AppState, Settings}};


#[derive(Debug, Serialize, Deserialize)]
pub struct LeaderboardQuery {
    #[serde(default)]
    pub start: Option<NaiveDateTime>,
    #[serde(default)]
    pub end: Option<NaiveDateTime>,
    /// Falls back to the configured leaderboard size.
    #[serde(default)]
    pub size: Option<usize>,
}

async fn get_record(
    State(db): State<DatabaseConnection>,
    Path(team_id): Path<Uuid>,
    Query(window): Query<DateWindow>,
) -> Result<Json<SeasonRecord>, APIError> {
    Ok(Json(SeasonRecord::load(&db, team_id, window).await?))
}

async fn get_head_to_head(
    State(db): State<DatabaseConnection>,
    Path((team_id, other_team_id)): Path<(Uuid, Uuid)>,
    Query(window): Query<DateWindow>,
) -> Result<Json<HeadToHead>, APIError> {
    Ok(Json(HeadToHead::load(&db, team_id, other_team_id, window).await?))
}

async fn get_leaderboards(
    State(db): State<DatabaseConnection>,
    State(settings): State<Settings>,
    Path(team_id): Path<Uuid>,
    Query(query): Query<LeaderboardQuery>,
) -> Result<Json<Leaderboards>, APIError> {
    let size = query.size.unwrap_or(settings.leaderboard_size);
    let window = DateWindow { start: query.start, end: query.end };
    Ok(Json(Leaderboards::load(&db, team_id, window, size).await?))
}

async fn get_attendance_rates(
    State(db): State<DatabaseConnection>,
    Path(team_id): Path<Uuid>,
    Query(window): Query<DateWindow>,
) -> Result<Json<AttendanceRates>, APIError> {
    Ok(Json(AttendanceRates::load(&db, team_id, window).await?))
}

async fn get_player_summary(
    State(db): State<DatabaseConnection>,
    Path((team_id, user_id)): Path<(Uuid, Uuid)>,
    Query(window): Query<DateWindow>,
) -> Result<Json<PlayerSummary>, APIError> {
    Ok(Json(PlayerSummary::load(&db, team_id, user_id, window).await?))
}

pub fn router() -> Router<AppState> {
    Router::new()
    .route("/teams/:team_id/record", get(get_record))
    .route("/teams/:team_id/head-to-head/:other_team_id", get(get_head_to_head))
    .route("/teams/:team_id/leaderboards", get(get_leaderboards))
    .route("/teams/:team_id/attendance-rates", get(get_attendance_rates))
    .route("/teams/:team_id/players/:user_id", get(get_player_summary))
}
