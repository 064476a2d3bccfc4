use crate::error::AppError;
use std::env;
use std::path::PathBuf;

pub const DEFAULT_LOG_PATH: &str = "year.bgsplay";

#[derive(Debug, Clone)]
pub struct Config {
    pub log_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let log_path = match env::var("BGSTATS_LOG") {
            Ok(path) if path.trim().is_empty() => {
                return Err(AppError::Config("BGSTATS_LOG is set but empty".to_string()));
            }
            Ok(path) => PathBuf::from(path),
            Err(_) => PathBuf::from(DEFAULT_LOG_PATH),
        };

        Ok(Config { log_path })
    }
}
