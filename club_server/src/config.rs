#[derive(Debug, serde::Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub db_url: String,
    pub host: String,
    pub port: u16,
    pub logging_config: String,
    /// Entries per leaderboard.
    pub leaderboard_size: usize,
    /// Hours between registration closing and kick-off for generated schedules.
    pub registration_deadline_hours: i64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            db_url: "sqlite://./club.sqlite3?mode=rwc".into(),
            host: "0.0.0.0".into(),
            port: 3000,
            logging_config: "debug,sqlx::query=error,hyper=error,tower_http=debug,axum::rejection=trace".into(),
            leaderboard_size: club_backend::views::DEFAULT_LEADERBOARD_SIZE,
            registration_deadline_hours: club_backend::schedule::DEFAULT_REGISTRATION_DEADLINE_HOURS,
        }
    }
}

pub(crate) fn read_config_inner() -> Result<Config, anyhow::Error> {
    let config_path = std::env::var("CLUB_SERVER_CONFIG")?;
    let config = std::fs::read_to_string(config_path)?;
    let config = serde_yaml::from_str::<Config>(&config)?;
    Ok(config)
}

pub fn read_config() -> Config {
    match read_config_inner() {
        Ok(config) => config,
        Err(e) => {
            //Print to stderr, since logging is set up in the config
            eprintln!("Warning: Failed to read config: {}", e);
            Config::default()
        }
    }
}
