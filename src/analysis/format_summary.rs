use crate::playlog::models::{Play, PlayLog, PlayerScore};
use log::{debug, warn};
use std::collections::{BTreeMap, BTreeSet};

use super::{percent, PlayFilter};

pub const UNKNOWN_HERO: &str = "Unknown";

/// Win/loss counters for one view of a format or hero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    pub played: u32,
    pub times_went_first: u32,
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
    pub wins_when_first: u32,
}

impl Record {
    pub fn win_percent(&self) -> f64 {
        percent(self.wins, self.played)
    }

    pub fn win_percent_when_first(&self) -> f64 {
        percent(self.wins_when_first, self.times_went_first)
    }
}

/// Counters for one hero within a format.
///
/// `as_self` counts the plays where self used the hero. `against` counts the
/// plays where an opponent used it, scored from self's point of view: its
/// wins, first-player and wins-when-first counters follow self's own result
/// in those plays, while `against.losses` counts opposing players on this hero
/// who won.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeroStats {
    pub as_self: Record,
    pub against: Record,
}

#[derive(Debug, Clone, Default)]
pub struct FormatStats {
    pub overall: Record,
    pub heroes: BTreeMap<String, HeroStats>,
}

impl FormatStats {
    /// Heroes self played at least once, alphabetically.
    pub fn heroes_as(&self) -> impl Iterator<Item = (&str, &Record)> {
        self.heroes
            .iter()
            .filter(|(_, h)| h.as_self.played > 0)
            .map(|(name, h)| (name.as_str(), &h.as_self))
    }

    /// Heroes faced at least once, alphabetically.
    pub fn heroes_against(&self) -> impl Iterator<Item = (&str, &Record)> {
        self.heroes
            .iter()
            .filter(|(_, h)| h.against.played > 0)
            .map(|(name, h)| (name.as_str(), &h.against))
    }
}

#[derive(Debug, Clone, Default)]
pub struct FormatSummary {
    pub formats: BTreeMap<String, FormatStats>,
}

pub struct FormatSummaryTracker {
    self_id: i64,
    formats: BTreeMap<String, FormatStats>,
}

impl FormatSummaryTracker {
    pub fn new(self_id: i64) -> Self {
        FormatSummaryTracker {
            self_id,
            formats: BTreeMap::new(),
        }
    }

    /// Returns false when the play has no format and was skipped.
    pub fn add_play(&mut self, play: &Play) -> bool {
        let Some(format) = play.board.as_deref() else {
            warn!("Missing format for game {}", play.uuid);
            return false;
        };

        let stats = self.formats.entry(format.to_string()).or_default();
        stats.overall.played += 1;

        let winner_exists = play.player_scores.iter().any(|s| s.winner);
        let mut self_hero: Option<String> = None;
        let mut self_went_first = false;
        let mut self_won = false;
        let mut heroes_against: BTreeSet<String> = BTreeSet::new();

        for score in &play.player_scores {
            let name = hero_name(score);
            let hero = stats.heroes.entry(name.clone()).or_default();

            if score.player_ref_id == self.self_id {
                hero.as_self.played += 1;

                if score.start_player {
                    self_went_first = true;
                    stats.overall.times_went_first += 1;
                    hero.as_self.times_went_first += 1;
                }
                if score.winner {
                    self_won = true;
                    stats.overall.wins += 1;
                    hero.as_self.wins += 1;
                }
                if score.start_player && score.winner {
                    stats.overall.wins_when_first += 1;
                    hero.as_self.wins_when_first += 1;
                }

                self_hero = Some(name);
            } else {
                if score.winner {
                    hero.against.losses += 1;
                }
                heroes_against.insert(name);
            }
        }

        for name in &heroes_against {
            let against = &mut stats.heroes.entry(name.clone()).or_default().against;
            against.played += 1;

            if self_went_first {
                against.times_went_first += 1;
            }
            if self_won {
                against.wins += 1;
            }
            if self_went_first && self_won {
                against.wins_when_first += 1;
            }
        }

        if self_hero.is_none() {
            debug!("Play {} has no score for self", play.uuid);
        }

        if !winner_exists {
            stats.overall.ties += 1;

            if let Some(hero) = self_hero.as_ref().and_then(|name| stats.heroes.get_mut(name)) {
                hero.as_self.ties += 1;
            }
            for name in &heroes_against {
                if let Some(hero) = stats.heroes.get_mut(name) {
                    hero.against.ties += 1;
                }
            }
        } else if !self_won {
            stats.overall.losses += 1;

            if let Some(hero) = self_hero.as_ref().and_then(|name| stats.heroes.get_mut(name)) {
                hero.as_self.losses += 1;
            }
        }

        true
    }

    pub fn finish(self) -> FormatSummary {
        FormatSummary {
            formats: self.formats,
        }
    }
}

pub fn summarize_formats(log: &PlayLog, filter: PlayFilter) -> FormatSummary {
    let mut tracker = FormatSummaryTracker::new(log.self_id());

    for play in log.plays.iter().filter(|p| filter.includes(p)) {
        tracker.add_play(play);
    }

    tracker.finish()
}

fn hero_name(score: &PlayerScore) -> String {
    score
        .role
        .clone()
        .unwrap_or_else(|| UNKNOWN_HERO.to_string())
}
