use crate::analysis::format_summary::{FormatSummary, Record};
use crate::analysis::game_summary::GameSummary;
use colored::*;
use tabled::{settings::Style, Table, Tabled};

use super::markdown::{checkmark, format_percent};

#[derive(Tabled)]
struct GameRow {
    game: String,
    #[tabled(rename = "time (h)")]
    hours: String,
    plays: String,
    locations: String,
    #[tabled(rename = "friends")]
    friends_played_with: String,
    #[tabled(rename = "first time?")]
    first_time: String,
}

#[derive(Tabled)]
struct RecordRow {
    hero: String,
    plays: String,
    wins: String,
    losses: String,
    ties: String,
    #[tabled(rename = "win %")]
    win_percent: String,
    #[tabled(rename = "first")]
    times_went_first: String,
    #[tabled(rename = "wins first")]
    wins_when_first: String,
    #[tabled(rename = "win % first")]
    win_percent_when_first: String,
}

impl RecordRow {
    fn new(hero: &str, record: &Record) -> Self {
        RecordRow {
            hero: hero.to_string(),
            plays: record.played.to_string(),
            wins: record.wins.to_string(),
            losses: record.losses.to_string(),
            ties: record.ties.to_string(),
            win_percent: format_percent(record.win_percent()),
            times_went_first: record.times_went_first.to_string(),
            wins_when_first: record.wins_when_first.to_string(),
            win_percent_when_first: format_percent(record.win_percent_when_first()),
        }
    }
}

fn heading(title: &str) -> String {
    format!("\n{}\n{}\n", title.bold().cyan(), "=".repeat(60).cyan())
}

fn rounded<T: Tabled>(rows: Vec<T>) -> String {
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.to_string()
}

pub fn pretty_game_summary(summary: &GameSummary) -> String {
    let mut out = heading("🎲 GAME SUMMARY");

    out.push_str(&format!(
        "{} {}   {} {}   {} {}   {} {}\n",
        "Plays:".bold(),
        summary.total_plays,
        "Games:".bold(),
        summary.unique_games(),
        "Friends:".bold(),
        summary.friends_played_with,
        "Locations:".bold(),
        summary.unique_locations,
    ));
    out.push_str(&format!(
        "{} {}   {} ~{}h   {} {}\n\n",
        "New games:".bold(),
        summary.new_games_played(),
        "Time played:".bold(),
        summary.estimated_hours_played(),
        "Days:".bold(),
        summary.days_played_on.len(),
    ));

    let rows: Vec<GameRow> = summary
        .ranked_games()
        .into_iter()
        .map(|g| GameRow {
            game: g.name.clone(),
            hours: g.hours_played().to_string(),
            plays: g.plays.to_string(),
            locations: g.unique_locations.len().to_string(),
            friends_played_with: g.friends_played_with().to_string(),
            first_time: checkmark(g.first_time).to_string(),
        })
        .collect();

    if rows.is_empty() {
        out.push_str(&format!("{}\n", "No games played".yellow()));
    } else {
        out.push_str(&rounded(rows));
        out.push('\n');
    }

    out
}

pub fn pretty_format_summary(summary: &FormatSummary) -> String {
    let mut out = String::new();

    if summary.formats.is_empty() {
        out.push_str(&heading("⚔️  FORMAT SUMMARY"));
        out.push_str(&format!("{}\n", "No plays with a format".yellow()));
        return out;
    }

    for (name, stats) in &summary.formats {
        out.push_str(&heading(&format!("⚔️  {}", name)));

        out.push_str(&format!("{}\n", "Overall".bold().yellow()));
        out.push_str(&rounded(vec![RecordRow::new("all", &stats.overall)]));
        out.push_str("\n\n");

        let as_rows: Vec<RecordRow> = stats.heroes_as().map(|(h, r)| RecordRow::new(h, r)).collect();
        if !as_rows.is_empty() {
            out.push_str(&format!("{}\n", "Playing as".bold().green()));
            out.push_str(&rounded(as_rows));
            out.push_str("\n\n");
        }

        let against_rows: Vec<RecordRow> = stats
            .heroes_against()
            .map(|(h, r)| RecordRow::new(h, r))
            .collect();
        if !against_rows.is_empty() {
            out.push_str(&format!("{}\n", "Playing against".bold().red()));
            out.push_str(&rounded(against_rows));
            out.push_str("\n\n");
        }
    }

    out
}

pub fn display_error(error: &str) {
    eprintln!("{} {}", "❌ Error:".red().bold(), error);
}

pub fn display_info(message: &str) {
    eprintln!("{} {}", "ℹ️".cyan(), message);
}

pub fn display_success(message: &str) {
    eprintln!("{} {}", "✓".green(), message);
}
