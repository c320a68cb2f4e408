use axum::Router;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod db;
pub mod response;
pub mod state;
mod mutation;
pub mod teams;
pub mod directory;
pub mod schedule;
pub mod matches;
pub mod stats;

use state::AppState;


pub fn api_router() -> Router<AppState> {
    Router::new()
    .merge(teams::router())
    .merge(directory::router())
    .merge(schedule::router())
    .merge(matches::router())
    .merge(stats::router())
}

pub async fn app_with_state(state: AppState) -> Router {
    Router::new()
    .nest("/api", api_router())
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

pub async fn app(config: &config::Config) -> Result<Router, anyhow::Error> {
    let state = AppState::new(config).await?;
    Ok(app_with_state(state).await)
}
