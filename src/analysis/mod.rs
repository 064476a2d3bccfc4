pub mod format_summary;
pub mod game_summary;

use crate::playlog::models::Play;
use chrono::Datelike;
use log::debug;

/// Which plays a report counts.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlayFilter {
    pub year: Option<i32>,
}

impl PlayFilter {
    pub fn includes(&self, play: &Play) -> bool {
        if play.ignored {
            debug!("Skipping ignored play {}", play.uuid);
            return false;
        }

        if let Some(year) = self.year {
            let in_year = play.date().map(|d| d.year() == year).unwrap_or(false);
            if !in_year {
                debug!("Skipping play {} dated {} (outside {})", play.uuid, play.play_date, year);
                return false;
            }
        }

        true
    }
}

/// Percentage of `part` over `whole`, rounded to two decimals. Zero when `whole` is zero.
///
/// Rounds the exact binary value half-to-even, so `1/32` gives `3.12`.
pub fn percent(part: u32, whole: u32) -> f64 {
    if whole == 0 {
        return 0.0;
    }

    let value = part as f64 / whole as f64 * 100.0;
    format!("{:.2}", value).parse().unwrap_or(value)
}
