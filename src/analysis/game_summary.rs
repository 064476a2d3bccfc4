use crate::error::AppError;
use crate::playlog::models::{Game, Play, PlayLog};
use std::collections::{BTreeSet, HashMap, HashSet};

use super::PlayFilter;

#[derive(Debug, Clone)]
pub struct GameStats {
    pub game_id: i64,
    pub name: String,
    pub plays: u32,
    pub unique_locations: HashSet<i64>,
    pub unique_players: HashSet<i64>,
    pub first_time: bool,
    pub average_play_time: f64, // minutes
}

impl GameStats {
    pub fn new(game: &Game) -> Self {
        GameStats {
            game_id: game.id,
            name: game.name.clone(),
            plays: 0,
            unique_locations: HashSet::new(),
            unique_players: HashSet::new(),
            first_time: false,
            average_play_time: game.average_play_time(),
        }
    }

    /// Estimated minutes spent on this game.
    pub fn total_time_played(&self) -> f64 {
        self.plays as f64 * self.average_play_time
    }

    pub fn hours_played(&self) -> i64 {
        minutes_to_hours(self.total_time_played())
    }

    /// Unique players excluding self, who is in every play.
    pub fn friends_played_with(&self) -> usize {
        self.unique_players.len().saturating_sub(1)
    }
}

#[derive(Debug, Clone)]
pub struct GameSummary {
    /// Every catalog game, in catalog order, played or not.
    pub games: Vec<GameStats>,
    pub total_plays: u32,
    pub friends_played_with: usize,
    pub unique_locations: usize,
    pub days_played_on: BTreeSet<String>,
}

impl GameSummary {
    pub fn unique_games(&self) -> usize {
        self.games.iter().filter(|g| g.plays > 0).count()
    }

    pub fn new_games_played(&self) -> usize {
        self.games.iter().filter(|g| g.first_time).count()
    }

    pub fn estimated_minutes_played(&self) -> f64 {
        self.games.iter().map(GameStats::total_time_played).sum()
    }

    pub fn estimated_hours_played(&self) -> i64 {
        minutes_to_hours(self.estimated_minutes_played())
    }

    /// Played games, most played first. Equal counts keep catalog order.
    pub fn ranked_games(&self) -> Vec<&GameStats> {
        let mut ranked: Vec<&GameStats> = self.games.iter().filter(|g| g.plays > 0).collect();
        ranked.sort_by(|a, b| b.plays.cmp(&a.plays));
        ranked
    }
}

pub struct GameSummaryTracker {
    self_id: i64,
    anonymous_id: Option<i64>,
    games: Vec<GameStats>,
    index: HashMap<i64, usize>,
    total_plays: u32,
    days_played_on: BTreeSet<String>,
}

impl GameSummaryTracker {
    pub fn new(log: &PlayLog) -> Self {
        let games: Vec<GameStats> = log.games.iter().map(GameStats::new).collect();
        let index = games
            .iter()
            .enumerate()
            .map(|(idx, g)| (g.game_id, idx))
            .collect();

        GameSummaryTracker {
            self_id: log.self_id(),
            anonymous_id: log.anonymous_id(),
            games,
            index,
            total_plays: 0,
            days_played_on: BTreeSet::new(),
        }
    }

    pub fn add_play(&mut self, play: &Play) -> Result<(), AppError> {
        let idx = *self
            .index
            .get(&play.game_ref_id)
            .ok_or_else(|| AppError::UnknownGame {
                play: play.uuid.clone(),
                game: play.game_ref_id,
            })?;
        let game = &mut self.games[idx];

        game.plays += 1;
        self.total_plays += 1;

        if let Some(location) = play.location_ref_id {
            game.unique_locations.insert(location);
        }

        self.days_played_on.insert(play.day());

        for score in &play.player_scores {
            if Some(score.player_ref_id) != self.anonymous_id {
                game.unique_players.insert(score.player_ref_id);
            }

            if score.player_ref_id == self.self_id && score.new_player {
                game.first_time = true;
            }
        }

        Ok(())
    }

    /// Without a year the friend and location counts cover the whole roster
    /// and catalog; with one they cover only the plays counted.
    pub fn finish(self, log: &PlayLog, filter: PlayFilter) -> GameSummary {
        let (friends_played_with, unique_locations) = if filter.year.is_some() {
            let players: HashSet<i64> = self
                .games
                .iter()
                .flat_map(|g| g.unique_players.iter().copied())
                .filter(|&id| id != self.self_id)
                .collect();
            let locations: HashSet<i64> = self
                .games
                .iter()
                .flat_map(|g| g.unique_locations.iter().copied())
                .collect();
            (players.len(), locations.len())
        } else {
            let friends: HashSet<i64> = log
                .players
                .iter()
                .map(|p| p.id)
                .filter(|&id| id != self.self_id && Some(id) != self.anonymous_id)
                .collect();
            (friends.len(), log.locations.len())
        };

        GameSummary {
            games: self.games,
            total_plays: self.total_plays,
            friends_played_with,
            unique_locations,
            days_played_on: self.days_played_on,
        }
    }
}

pub fn summarize_games(log: &PlayLog, filter: PlayFilter) -> Result<GameSummary, AppError> {
    let mut tracker = GameSummaryTracker::new(log);

    for play in log.plays.iter().filter(|p| filter.includes(p)) {
        tracker.add_play(play)?;
    }

    Ok(tracker.finish(log, filter))
}

// Halves round to even
fn minutes_to_hours(minutes: f64) -> i64 {
    (minutes / 60.0).round_ties_even() as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::playlog::fixtures::*;
    use serde_json::json;

    fn azul_play(uuid: &str, date: &str, location: Option<i64>, scores: Vec<serde_json::Value>) -> serde_json::Value {
        json!({
            "uuid": uuid,
            "gameRefId": AZUL,
            "locationRefId": location,
            "playDate": date,
            "playerScores": scores
        })
    }

    fn stats<'a>(summary: &'a GameSummary, id: i64) -> &'a GameStats {
        summary.games.iter().find(|g| g.game_id == id).unwrap()
    }

    #[test]
    fn test_counts_plays_locations_and_players() {
        let log = log_with(json!([
            azul_play("a", "2024-01-01 10:00:00", Some(7), vec![score(ME, "", true, true), score(ALICE, "", false, false)]),
            azul_play("b", "2024-01-01 20:00:00", Some(8), vec![score(ME, "", false, true), score(BOB, "", true, false)]),
            azul_play("c", "2024-01-02 20:00:00", None, vec![score(ME, "", false, true), score(ANON, "", true, false)]),
        ]));

        let summary = summarize_games(&log, PlayFilter::default()).unwrap();
        let azul = stats(&summary, AZUL);

        assert_eq!(azul.plays, 3);
        assert_eq!(azul.unique_locations.len(), 2);
        assert_eq!(azul.unique_players.len(), 3);
        assert_eq!(azul.friends_played_with(), 2);
        assert_eq!(summary.total_plays, 3);
        assert_eq!(summary.days_played_on.len(), 2);
        assert_eq!(summary.unique_games(), 1);
    }

    #[test]
    fn test_ignored_plays_do_not_count() {
        let log = log_with(json!([
            fab_play("a", "Blitz", vec![score(ME, "Viserai", true, true)]),
            {
                "uuid": "b",
                "gameRefId": AZUL,
                "playDate": "2024-02-02 10:00:00",
                "ignored": true,
                "playerScores": []
            }
        ]));

        let summary = summarize_games(&log, PlayFilter::default()).unwrap();
        assert_eq!(summary.total_plays, 1);
        assert_eq!(stats(&summary, AZUL).plays, 0);

        let per_game: u32 = summary.games.iter().map(|g| g.plays).sum();
        assert_eq!(per_game, summary.total_plays);
    }

    #[test]
    fn test_first_time_flag_only_from_self() {
        let mut me_new = score(ME, "", false, false);
        me_new["newPlayer"] = json!(true);
        let mut alice_new = score(ALICE, "", false, false);
        alice_new["newPlayer"] = json!(true);

        let log = log_with(json!([
            azul_play("a", "2024-01-01 10:00:00", None, vec![me_new]),
            fab_play("b", "Blitz", vec![score(ME, "Viserai", true, true), alice_new]),
        ]));

        let summary = summarize_games(&log, PlayFilter::default()).unwrap();
        assert!(stats(&summary, AZUL).first_time);
        assert!(!stats(&summary, FAB).first_time);
        assert_eq!(summary.new_games_played(), 1);
    }

    #[test]
    fn test_time_played_estimates() {
        // Azul averages 37.5 minutes, Flesh and Blood 30
        let log = log_with(json!([
            azul_play("a", "2024-01-01 10:00:00", None, vec![score(ME, "", true, false)]),
            azul_play("b", "2024-01-02 10:00:00", None, vec![score(ME, "", true, false)]),
            fab_play("c", "Blitz", vec![score(ME, "Viserai", true, true)]),
        ]));

        let summary = summarize_games(&log, PlayFilter::default()).unwrap();
        assert_eq!(stats(&summary, AZUL).total_time_played(), 75.0);
        assert_eq!(stats(&summary, AZUL).hours_played(), 1);
        assert_eq!(summary.estimated_minutes_played(), 105.0);
        assert_eq!(summary.estimated_hours_played(), 2);
    }

    #[test]
    fn test_hours_round_half_to_even() {
        assert_eq!(minutes_to_hours(90.0), 2);
        assert_eq!(minutes_to_hours(150.0), 2);
        assert_eq!(minutes_to_hours(30.0), 0);
        assert_eq!(minutes_to_hours(31.0), 1);
    }

    #[test]
    fn test_ranked_games_sorted_by_plays() {
        let log = log_with(json!([
            fab_play("a", "Blitz", vec![score(ME, "Viserai", true, true)]),
            azul_play("b", "2024-01-01 10:00:00", None, vec![score(ME, "", true, false)]),
            azul_play("c", "2024-01-02 10:00:00", None, vec![score(ME, "", true, false)]),
        ]));

        let summary = summarize_games(&log, PlayFilter::default()).unwrap();
        let names: Vec<&str> = summary.ranked_games().iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["Azul", "Flesh and Blood"]);
    }

    #[test]
    fn test_friends_exclude_self_and_anonymous() {
        let log = log_with(json!([]));
        let summary = summarize_games(&log, PlayFilter::default()).unwrap();
        assert_eq!(summary.friends_played_with, 2);
        assert_eq!(summary.unique_locations, 2);
        assert_eq!(summary.unique_games(), 0);
    }

    #[test]
    fn test_year_scopes_friends_and_locations() {
        let log = log_with(json!([
            azul_play("old", "2023-06-01 10:00:00", Some(7), vec![score(ME, "", true, false), score(BOB, "", false, false)]),
            azul_play("new", "2024-02-01 10:00:00", Some(8), vec![score(ME, "", true, false), score(ALICE, "", false, false), score(ANON, "", false, false)]),
        ]));

        let summary = summarize_games(&log, PlayFilter { year: Some(2024) }).unwrap();
        assert_eq!(summary.total_plays, 1);
        assert_eq!(summary.friends_played_with, 1);
        assert_eq!(summary.unique_locations, 1);

        let everything = summarize_games(&log, PlayFilter::default()).unwrap();
        assert_eq!(everything.friends_played_with, 2);
        assert_eq!(everything.unique_locations, 2);
    }

    #[test]
    fn test_unknown_game_is_error() {
        let log = log_with(json!([
            {
                "uuid": "ghost",
                "gameRefId": 999,
                "playDate": "2024-01-01 10:00:00",
                "playerScores": []
            }
        ]));

        let err = summarize_games(&log, PlayFilter::default()).unwrap_err();
        assert!(matches!(err, AppError::UnknownGame { game: 999, .. }));
    }
}
