use std::env;
use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for the environment variable {0}: {1}")]
    InvalidValue(String, String),
}

#[derive(Clone, Debug)]
pub struct Config {
    pub database_path: String,
    /// How long a blocked SQLite call may wait on a locked database.
    pub busy_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            database_path: "./friends.db".to_string(),
            busy_timeout: Duration::from_millis(5000),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Config::default();
        if let Ok(path) = env::var("DATABASE_URL") {
            config.database_path = path;
        }
        if let Ok(raw) = env::var("DATABASE_BUSY_TIMEOUT_MS") {
            let millis = raw.parse::<u64>().map_err(|e| {
                ConfigError::InvalidValue("DATABASE_BUSY_TIMEOUT_MS".to_string(), e.to_string())
            })?;
            config.busy_timeout = Duration::from_millis(millis);
        }
        Ok(config)
    }
}
