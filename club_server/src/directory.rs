use axum::{extract::{Path, State}, Json, Router, routing::{get, post, put}};
use club_backend::actions::{CreateStadiumAction, UpsertProfileAction};
use club_entities::prelude::*;
use sea_orm::{prelude::Uuid, DatabaseConnection};
use serde::{Serialize, Deserialize};

use crate::{mutation::execute_action, response::APIError, state::AppState};


#[derive(Debug, Serialize, Deserialize)]
pub struct ProfileRequest {
    pub display_name: String,
}

async fn upsert_profile(
    State(db): State<DatabaseConnection>,
    Path(user_id): Path<Uuid>,
    Json(request): Json<ProfileRequest>,
) -> Result<Json<Profile>, APIError> {
    let changes = execute_action(&db, UpsertProfileAction { user_id, display_name: request.display_name }).await?;
    changes.profiles.into_iter().next()
        .map(Json)
        .ok_or_else(|| APIError::new("Profile was not saved".into()))
}

async fn create_stadium(
    State(db): State<DatabaseConnection>,
    Json(request): Json<CreateStadiumAction>,
) -> Result<Json<Stadium>, APIError> {
    let changes = execute_action(&db, request).await?;
    changes.stadiums.into_iter().next()
        .map(Json)
        .ok_or_else(|| APIError::new("Stadium was not saved".into()))
}

async fn list_stadiums(
    State(db): State<DatabaseConnection>,
) -> Result<Json<Vec<Stadium>>, APIError> {
    Ok(Json(Stadium::get_all(&db).await?))
}

pub fn router() -> Router<AppState> {
    Router::new()
    .route("/profiles/:user_id", put(upsert_profile))
    .route("/stadiums", post(create_stadium).get(list_stadiums))
}
