use axum::{extract::{Path, State}, Json, Router, routing::{get, post, patch}};
use club_backend::actions::{CreateTeamAction, RequestMembershipAction, UpdateMemberAction, UpdateTeamAction};
use club_backend::views::{GuestClubListView, TeamView};
use club_entities::prelude::*;
use sea_orm::{prelude::Uuid, DatabaseConnection};
use serde::{Serialize, Deserialize};

use crate::{mutation::execute_action, response::APIError, state::AppState};


#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateTeamRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub gu: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MembershipRequest {
    pub user_id: Uuid,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateMemberRequest {
    #[serde(default)]
    pub role: Option<MemberRole>,
    #[serde(default)]
    pub status: Option<MemberStatus>,
}

async fn create_team(
    State(db): State<DatabaseConnection>,
    Json(request): Json<CreateTeamAction>,
) -> Result<Json<TeamView>, APIError> {
    let team_id = request.uuid;
    execute_action(&db, request).await?;
    Ok(Json(TeamView::load(&db, team_id).await?))
}

async fn get_team(
    State(db): State<DatabaseConnection>,
    Path(team_id): Path<Uuid>,
) -> Result<Json<TeamView>, APIError> {
    Ok(Json(TeamView::load(&db, team_id).await?))
}

async fn update_team(
    State(db): State<DatabaseConnection>,
    Path(team_id): Path<Uuid>,
    Json(request): Json<UpdateTeamRequest>,
) -> Result<Json<TeamView>, APIError> {
    execute_action(&db, UpdateTeamAction { team_id, name: request.name, city: request.city, gu: request.gu }).await?;
    Ok(Json(TeamView::load(&db, team_id).await?))
}

async fn request_membership(
    State(db): State<DatabaseConnection>,
    Path(team_id): Path<Uuid>,
    Json(request): Json<MembershipRequest>,
) -> Result<Json<TeamView>, APIError> {
    execute_action(&db, RequestMembershipAction { team_id, user_id: request.user_id }).await?;
    Ok(Json(TeamView::load(&db, team_id).await?))
}

async fn update_member(
    State(db): State<DatabaseConnection>,
    Path((team_id, user_id)): Path<(Uuid, Uuid)>,
    Json(request): Json<UpdateMemberRequest>,
) -> Result<Json<TeamView>, APIError> {
    execute_action(&db, UpdateMemberAction { team_id, user_id, role: request.role, status: request.status }).await?;
    Ok(Json(TeamView::load(&db, team_id).await?))
}

async fn list_guest_clubs(
    State(db): State<DatabaseConnection>,
    Path(team_id): Path<Uuid>,
) -> Result<Json<GuestClubListView>, APIError> {
    Ok(Json(GuestClubListView::load(&db, team_id).await?))
}

pub fn router() -> Router<AppState> {
    Router::new()
    .route("/teams", post(create_team))
    .route("/teams/:team_id", get(get_team).patch(update_team))
    .route("/teams/:team_id/members", post(request_membership))
    .route("/teams/:team_id/members/:user_id", patch(update_member))
    .route("/teams/:team_id/guest-clubs", get(list_guest_clubs))
}
