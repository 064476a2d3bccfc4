use chrono::NaiveDate;
use serde::Deserialize;

// BG Stats export root
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayLog {
    pub user_info: UserInfo,
    pub players: Vec<Player>,
    pub games: Vec<Game>,
    pub locations: Vec<Location>,
    pub plays: Vec<Play>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub me_ref_id: i64,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
pub struct Player {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub is_anonymous: bool,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub min_play_time: u32,
    #[serde(default)]
    pub max_play_time: u32,
}

impl Game {
    /// Midpoint of the catalog's play time range, in minutes.
    pub fn average_play_time(&self) -> f64 {
        (self.min_play_time as f64 + self.max_play_time as f64) / 2.0
    }
}

#[derive(Debug, Deserialize, Clone)]
#[allow(dead_code)]
pub struct Location {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Play {
    pub uuid: String,
    pub game_ref_id: i64,
    #[serde(default)]
    pub location_ref_id: Option<i64>,
    pub play_date: String,
    #[serde(default)]
    pub ignored: bool,
    #[serde(default)]
    pub player_scores: Vec<PlayerScore>,
    // Game format (e.g. "Blitz"); the export calls it the board
    #[serde(default)]
    pub board: Option<String>,
}

impl Play {
    /// Date portion of `playDate`, with the time of day dropped.
    pub fn day(&self) -> String {
        let raw = self.play_date.split(' ').next().unwrap_or_default();
        match self.date() {
            Some(date) => date.format("%Y-%m-%d").to_string(),
            None => raw.to_string(),
        }
    }

    pub fn date(&self) -> Option<NaiveDate> {
        let raw = self.play_date.split(' ').next()?;
        NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PlayerScore {
    pub player_ref_id: i64,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub winner: bool,
    #[serde(default)]
    pub start_player: bool,
    #[serde(default)]
    pub new_player: bool,
}

impl PlayLog {
    pub fn self_id(&self) -> i64 {
        self.user_info.me_ref_id
    }

    /// Id of the anonymous placeholder player; the last one wins if several are flagged.
    pub fn anonymous_id(&self) -> Option<i64> {
        self.players.iter().rev().find(|p| p.is_anonymous).map(|p| p.id)
    }
}
