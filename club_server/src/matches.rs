use axum::{extract::{Path, Query, State}, Json, Router, routing::{get, post, put}};
use chrono::NaiveDateTime;
use club_backend::actions::{AssignOpponentAction, CreateMatchAction, FinishMatchAction, GoalEntry, OpponentSelection, ScoreMode, UpdateAttendanceAction};
use club_backend::views::{AttendanceSummary, DateWindow, MatchDetailView, MatchListView};
use club_entities::prelude::*;
use sea_orm::{prelude::Uuid, DatabaseConnection};
use serde::{Serialize, Deserialize};

use crate::{mutation::execute_action, response::APIError, state::AppState};


#[derive(Debug, Serialize, Deserialize)]
pub struct CreateMatchRequest {
    pub match_date: NaiveDateTime,
    #[serde(default)]
    pub registration_deadline: Option<NaiveDateTime>,
    pub venue: String,
    #[serde(default)]
    pub stadium_id: Option<Uuid>,
    pub is_home: bool,
    pub opponent: OpponentSelection,
    pub competition_type: String,
    pub game_type: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FinishMatchRequest {
    #[serde(default)]
    pub goals: Vec<GoalEntry>,
    #[serde(default)]
    pub assists: Vec<Uuid>,
    #[serde(default)]
    pub man_of_the_match: Option<Uuid>,
    #[serde(default)]
    pub score: ScoreMode,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AttendanceRequest {
    pub status: AttendanceStatus,
}

async fn create_match(
    State(state): State<AppState>,
    Path(team_id): Path<Uuid>,
    Json(request): Json<CreateMatchRequest>,
) -> Result<Json<MatchDetailView>, APIError> {
    let db = &state.db;
    let match_id = Uuid::new_v4();
    execute_action(db, CreateMatchAction {
        uuid: match_id,
        team_id,
        match_date: request.match_date,
        registration_deadline: request.registration_deadline,
        venue: request.venue,
        stadium_id: request.stadium_id,
        is_home: request.is_home,
        opponent: request.opponent,
        competition_type: request.competition_type,
        game_type: request.game_type,
        description: request.description,
        options: state.settings.schedule,
    }).await?;
    Ok(Json(MatchDetailView::load(db, match_id).await?))
}

async fn list_matches(
    State(db): State<DatabaseConnection>,
    Path(team_id): Path<Uuid>,
    Query(window): Query<DateWindow>,
) -> Result<Json<MatchListView>, APIError> {
    Ok(Json(MatchListView::load(&db, team_id, window).await?))
}

async fn get_match(
    State(db): State<DatabaseConnection>,
    Path(match_id): Path<Uuid>,
) -> Result<Json<MatchDetailView>, APIError> {
    Ok(Json(MatchDetailView::load(&db, match_id).await?))
}

async fn assign_opponent(
    State(db): State<DatabaseConnection>,
    Path(match_id): Path<Uuid>,
    Json(opponent): Json<OpponentSelection>,
) -> Result<Json<MatchDetailView>, APIError> {
    execute_action(&db, AssignOpponentAction { match_id, opponent }).await?;
    Ok(Json(MatchDetailView::load(&db, match_id).await?))
}

async fn finish_match(
    State(db): State<DatabaseConnection>,
    Path(match_id): Path<Uuid>,
    Json(request): Json<FinishMatchRequest>,
) -> Result<Json<MatchDetailView>, APIError> {
    execute_action(&db, FinishMatchAction {
        match_id,
        goals: request.goals,
        assists: request.assists,
        man_of_the_match: request.man_of_the_match,
        score: request.score,
    }).await?;
    Ok(Json(MatchDetailView::load(&db, match_id).await?))
}

async fn get_attendance(
    State(db): State<DatabaseConnection>,
    Path(match_id): Path<Uuid>,
) -> Result<Json<AttendanceSummary>, APIError> {
    Ok(Json(AttendanceSummary::load(&db, match_id).await?))
}

async fn update_attendance(
    State(db): State<DatabaseConnection>,
    Path((match_id, user_id)): Path<(Uuid, Uuid)>,
    Json(request): Json<AttendanceRequest>,
) -> Result<Json<AttendanceSummary>, APIError> {
    execute_action(&db, UpdateAttendanceAction { match_id, user_id, status: request.status }).await?;
    Ok(Json(AttendanceSummary::load(&db, match_id).await?))
}

pub fn router() -> Router<AppState> {
    Router::new()
    .route("/teams/:team_id/matches", post(create_match).get(list_matches))
    .route("/matches/:match_id", get(get_match))
    .route("/matches/:match_id/opponent", put(assign_opponent))
    .route("/matches/:match_id/finish", post(finish_match))
    .route("/matches/:match_id/attendance", get(get_attendance))
    .route("/matches/:match_id/attendance/:user_id", put(update_attendance))
}
