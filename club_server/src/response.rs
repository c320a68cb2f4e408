use axum::{Json, response::{IntoResponse, Response}};
use hyper::StatusCode;
use sea_orm::DbErr;
use serde::{Serialize, Deserialize};
use tracing::{error, warn};

use club_backend::actions::ActionError;
use club_backend::schedule::ScheduleError;


#[derive(Debug, Clone)]
pub struct APIError {
    pub message: String,
    pub code: StatusCode
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct APIErrorResponse {
    pub message: String
}

impl APIError {
    pub fn new(message: String) -> Self {
        APIError {
            message,
            code: StatusCode::INTERNAL_SERVER_ERROR
        }
    }

    pub fn new_with_status(code: StatusCode, message: &str) -> Self {
        APIError { message: message.to_string(), code }
    }
}

fn status_for_action_error(err: &ActionError) -> StatusCode {
    match err {
        ActionError::Validation { .. } => StatusCode::BAD_REQUEST,
        ActionError::NotFound { .. } => StatusCode::NOT_FOUND,
        ActionError::MatchFinished { .. }
        | ActionError::MatchAlreadyFinished { .. }
        | ActionError::DuplicateMembership { .. } => StatusCode::CONFLICT,
    }
}

impl From<anyhow::Error> for APIError {
    fn from(err: anyhow::Error) -> Self {
        let code = if let Some(action_err) = err.downcast_ref::<ActionError>() {
            status_for_action_error(action_err)
        }
        else if err.downcast_ref::<ScheduleError>().is_some() {
            StatusCode::BAD_REQUEST
        }
        else {
            StatusCode::INTERNAL_SERVER_ERROR
        };

        if code.is_server_error() {
            error!("Error while handling request: {:?}", err);
        }
        else {
            warn!("Rejected request: {}", err);
        }
        APIError { message: err.to_string(), code }
    }
}

impl From<DbErr> for APIError {
    fn from(err: DbErr) -> Self {
        error!("Database error while handling request: {}", err);
        APIError::new(err.to_string())
    }
}

impl IntoResponse for APIError
{
    fn into_response(self) -> Response {
        (self.code, Json(APIErrorResponse { message: self.message })).into_response()
    }
}

impl From<(StatusCode, &str)> for APIError {
    fn from((code, message): (StatusCode, &str)) -> Self {
        APIError::new_with_status(code, message)
    }
}
