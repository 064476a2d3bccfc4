//! Markdown report text. Everything here is pure string building.

use crate::analysis::format_summary::{FormatStats, FormatSummary, Record};
use crate::analysis::game_summary::GameSummary;

const GAME_HEADER: &str = "| Game | Time | Plays | Locations | Friends Played With | First Time? |\n";
const OVERALL_HEADER: &str = "| Plays | Wins | Losses | Ties | Win Percentage | Times Went First | Wins When First Player | Win % When First Player |\n";
const HERO_HEADER: &str = "| Hero | Plays | Wins | Losses | Ties | Win Percentage | Times Went First | Wins When First Player | Win % When First Player |\n";

/// Percentage with at least one decimal place, e.g. `100.0%` or `66.67%`.
pub fn format_percent(value: f64) -> String {
    format!("{:?}%", value)
}

pub fn checkmark(flag: bool) -> &'static str {
    if flag {
        "✓"
    } else {
        ""
    }
}

fn separator(columns: usize) -> String {
    let mut line = String::from("|");
    for _ in 0..columns {
        line.push_str(" --- |");
    }
    line.push('\n');
    line
}

pub fn render_game_summary(summary: &GameSummary) -> String {
    let mut out = String::new();

    out.push_str(&format!("Total Plays: {}\n\n", summary.total_plays));
    out.push_str(&format!("Friends Played With: {}\n\n", summary.friends_played_with));
    out.push_str(&format!("Unique Games: {}\n\n", summary.unique_games()));
    out.push_str(&format!("Unique Locations: {}\n\n", summary.unique_locations));
    out.push_str(&format!("New Games Played: {}\n\n", summary.new_games_played()));
    out.push_str(&format!("Estimated Time Played: {} hours\n\n", summary.estimated_hours_played()));
    out.push_str(&format!("Days Played On: {}\n\n", summary.days_played_on.len()));

    out.push_str(GAME_HEADER);
    out.push_str(&separator(6));

    for game in summary.ranked_games() {
        out.push_str(&format!(
            "| {} | {} | {} | {} | {} | {} |\n",
            game.name,
            game.hours_played(),
            game.plays,
            game.unique_locations.len(),
            game.friends_played_with(),
            checkmark(game.first_time)
        ));
    }

    out
}

fn record_cells(record: &Record) -> String {
    format!(
        "{} | {} | {} | {} | {} | {} | {} | {}",
        record.played,
        record.wins,
        record.losses,
        record.ties,
        format_percent(record.win_percent()),
        record.times_went_first,
        record.wins_when_first,
        format_percent(record.win_percent_when_first())
    )
}

pub fn overall_row(record: &Record) -> String {
    format!("| {} |", record_cells(record))
}

pub fn hero_row(hero: &str, record: &Record) -> String {
    format!("| {} | {} |", hero, record_cells(record))
}

fn hero_table<'a>(title: &str, rows: impl Iterator<Item = (&'a str, &'a Record)>) -> String {
    let mut out = format!("#### {}\n", title);
    out.push_str(HERO_HEADER);
    out.push_str(&separator(9));
    for (hero, record) in rows {
        out.push_str(&hero_row(hero, record));
        out.push('\n');
    }
    out.push('\n');
    out
}

pub fn render_format(name: &str, stats: &FormatStats) -> String {
    let mut out = format!("### {}\n", name);

    out.push_str("#### Overall\n");
    out.push_str(OVERALL_HEADER);
    out.push_str(&separator(8));
    out.push_str(&overall_row(&stats.overall));
    out.push_str("\n\n");

    out.push_str(&hero_table("Hero Stats As", stats.heroes_as()));
    out.push_str(&hero_table("Hero Stats Against", stats.heroes_against()));

    out
}

pub fn render_format_summary(summary: &FormatSummary) -> String {
    let mut out = String::new();
    for (name, stats) in &summary.formats {
        out.push_str(&render_format(name, stats));
        out.push('\n');
    }
    out
}
