use crate::error::AppError;
use log::debug;
use std::fs;
use std::path::Path;

use super::models::PlayLog;

pub fn load(path: &Path) -> Result<PlayLog, AppError> {
    let content = fs::read_to_string(path).map_err(|source| AppError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let log = parse(&content).map_err(|source| AppError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(
        "Loaded {} plays, {} games, {} players from {}",
        log.plays.len(),
        log.games.len(),
        log.players.len(),
        path.display()
    );

    Ok(log)
}

pub fn parse(content: &str) -> Result<PlayLog, serde_json::Error> {
    serde_json::from_str(content)
}
