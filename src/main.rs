mod analysis;
mod config;
mod display;
mod error;
mod playlog;

use analysis::format_summary::summarize_formats;
use analysis::game_summary::summarize_games;
use analysis::PlayFilter;
use anyhow::Context;
use clap::{Parser, ValueEnum};
use config::Config;
use display::markdown::{render_format_summary, render_game_summary};
use display::output::{display_error, display_info, display_success, pretty_format_summary, pretty_game_summary};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Report {
    /// Per-game totals across the whole log
    Games,
    /// Win/loss/tie breakdown per game format and hero
    Formats,
    All,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputStyle {
    Markdown,
    Pretty,
}

#[derive(Parser, Debug)]
#[command(name = "bgstats")]
#[command(about = "Summarize a BG Stats play-log export as markdown tables", long_about = None)]
struct Args {
    /// Play-log export (default: $BGSTATS_LOG or ./year.bgsplay)
    log: Option<PathBuf>,

    /// Which report to print
    #[arg(short, long, value_enum, default_value_t = Report::All)]
    report: Report,

    /// Output style
    #[arg(short, long, value_enum, default_value_t = OutputStyle::Markdown)]
    style: OutputStyle,

    /// Only count plays from this calendar year (friend and location totals follow the same plays)
    #[arg(short, long)]
    year: Option<i32>,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    if let Err(e) = run(args) {
        display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let config = Config::from_env()?;
    let log_path = args.log.unwrap_or(config.log_path);

    if args.verbose {
        display_info(&format!("Reading play log {}", log_path.display()));
    }

    let log = playlog::loader::load(&log_path)?;
    let filter = PlayFilter { year: args.year };

    if args.verbose {
        display_success(&format!("Loaded {} plays", log.plays.len()));
    }

    let mut output = Vec::new();

    if matches!(args.report, Report::Games | Report::All) {
        let summary = summarize_games(&log, filter)
            .with_context(|| format!("Game summary of {} failed", log_path.display()))?;
        output.push(match args.style {
            OutputStyle::Markdown => render_game_summary(&summary),
            OutputStyle::Pretty => pretty_game_summary(&summary),
        });
    }

    if matches!(args.report, Report::Formats | Report::All) {
        let summary = summarize_formats(&log, filter);
        output.push(match args.style {
            OutputStyle::Markdown => render_format_summary(&summary),
            OutputStyle::Pretty => pretty_format_summary(&summary),
        });
    }

    for text in output {
        println!("{}", text);
    }

    Ok(())
}
