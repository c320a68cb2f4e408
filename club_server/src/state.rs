use axum::extract::FromRef;
use club_backend::schedule::ScheduleOptions;
use sea_orm::DatabaseConnection;

use crate::{config::Config, db};


/// Settings that handlers need from the configuration.
#[derive(Debug, Clone, Copy)]
pub struct Settings {
    pub leaderboard_size: usize,
    pub schedule: ScheduleOptions,
}

impl From<&Config> for Settings {
    fn from(config: &Config) -> Self {
        Settings {
            leaderboard_size: config.leaderboard_size,
            schedule: ScheduleOptions { registration_deadline_hours: config.registration_deadline_hours },
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub settings: Settings,
}

impl AppState {
    pub async fn new(config: &Config) -> Result<AppState, anyhow::Error> {
        let db = db::set_up_db(&config.db_url).await?;
        Ok(AppState { db, settings: config.into() })
    }

    pub async fn new_test_app() -> Result<AppState, anyhow::Error> {
        Self::new(&Config { db_url: "sqlite::memory:".into(), ..Default::default() }).await
    }
}

impl FromRef<AppState> for DatabaseConnection {
    fn from_ref(app_state: &AppState) -> DatabaseConnection {
        app_state.db.clone()
    }
}

impl FromRef<AppState> for Settings {
    fn from_ref(app_state: &AppState) -> Settings {
        app_state.settings
    }
}
