use axum::{extract::{Path, State}, Json, Router, routing::post};
use club_backend::actions::ConfirmScheduleAction;
use club_backend::schedule::{generate_schedule, DraftMatch, ScheduleRequest};
use club_entities::prelude::*;
use sea_orm::prelude::Uuid;
use serde::{Serialize, Deserialize};

use crate::{mutation::execute_action, response::APIError, state::AppState};


#[derive(Debug, Serialize, Deserialize)]
pub struct SchedulePreviewResponse {
    pub drafts: Vec<DraftMatch>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ScheduleConfirmResponse {
    pub matches: Vec<Match>,
    pub attendance_rows: usize,
}

fn check_team(team_id: Uuid, request: &ScheduleRequest) -> Result<(), APIError> {
    if request.team_id != team_id {
        return Err(APIError::new_with_status(hyper::StatusCode::BAD_REQUEST, "Team id in body does not match path"));
    }
    Ok(())
}

/// Drafts only, nothing is stored.
async fn preview_schedule(
    State(state): State<AppState>,
    Path(team_id): Path<Uuid>,
    Json(request): Json<ScheduleRequest>,
) -> Result<Json<SchedulePreviewResponse>, APIError> {
    check_team(team_id, &request)?;
    let drafts = generate_schedule(&request, &state.settings.schedule).map_err(anyhow::Error::from)?;
    Ok(Json(SchedulePreviewResponse { drafts }))
}

async fn confirm_schedule(
    State(state): State<AppState>,
    Path(team_id): Path<Uuid>,
    Json(request): Json<ScheduleRequest>,
) -> Result<Json<ScheduleConfirmResponse>, APIError> {
    check_team(team_id, &request)?;
    let changes = execute_action(&state.db, ConfirmScheduleAction { request, options: state.settings.schedule }).await?;
    Ok(Json(ScheduleConfirmResponse {
        attendance_rows: changes.attendances.len(),
        matches: changes.matches,
    }))
}

pub fn router() -> Router<AppState> {
    Router::new()
    .route("/teams/:team_id/schedule/preview", post(preview_schedule))
    .route("/teams/:team_id/schedule/confirm", post(confirm_schedule))
}
