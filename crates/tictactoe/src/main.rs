//! tictactoe - terminal tic-tac-toe
//!
//! Opens the terminal UI by default; `stats` and `reset` work on the
//! recorded results without a UI.

#![warn(missing_docs)]

mod cli;

use anyhow::{Result, bail};
use clap::Parser;
use cli::{Cli, Command, PlayArgs};
use serde::Serialize;
use tictactoe::tui::{self, App, leaderboard_line};
use tictactoe::{AppConfig, DEFAULT_CONFIG_FILE, Scoreboard};
use tictactoe_core::{Difficulty, GameSettings};
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "info,tictactoe=debug,tictactoe_core=debug";

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = load_config(&cli)?;

    match cli.command.unwrap_or(Command::Play(PlayArgs::default())) {
        Command::Play(args) => run_play(config, args),
        Command::Stats { json } => run_stats(config, json),
        Command::Reset => run_reset(config),
    }
}

/// Reads the config file and applies command-line overrides.
fn load_config(cli: &Cli) -> Result<AppConfig> {
    let path = cli
        .config
        .clone()
        .unwrap_or_else(|| DEFAULT_CONFIG_FILE.into());
    let mut config = if cli.config.is_some() {
        AppConfig::from_file(&path)?
    } else {
        AppConfig::load_or_default(&path)?
    };

    if let Some(file) = &cli.leaderboard_file {
        config = config.with_leaderboard_file(file);
    }
    if let Some(file) = &cli.results_file {
        config = config.with_results_file(file);
    }
    Ok(config)
}

/// Logs to a file so output does not corrupt the terminal UI.
fn init_file_tracing(config: &AppConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file())?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

fn init_stderr_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

/// Run the terminal UI
fn run_play(config: AppConfig, args: PlayArgs) -> Result<()> {
    init_file_tracing(&config)?;
    info!(
        leaderboard = %config.leaderboard_file().display(),
        results = %config.results_file().display(),
        "Starting tictactoe"
    );

    let quick_start = quick_start(&args, *config.default_difficulty())?;
    let scoreboard = Scoreboard::open(&config)?;
    let mut app = App::new(scoreboard, *config.default_difficulty());
    if let Some(settings) = quick_start {
        app = app.with_game(settings);
    }
    tui::run(&mut app)
}

/// Builds settings for `play --pvp` / `play --ai`, or `None` for the menus.
#[instrument]
fn quick_start(args: &PlayArgs, default_difficulty: Difficulty) -> Result<Option<GameSettings>> {
    let name = |value: &Option<String>, flag: &str| -> Result<String> {
        match value.as_deref().map(str::trim) {
            Some(name) if name.chars().any(char::is_control) => {
                bail!("{} must not contain control characters", flag)
            }
            Some(name) if !name.is_empty() => Ok(name.to_string()),
            _ => bail!("{} needs a non-empty name", flag),
        }
    };

    if args.pvp {
        let player1 = name(&args.player1, "--player1")?;
        let player2 = name(&args.player2, "--player2")?;
        return Ok(Some(GameSettings::player_vs_player(player1, player2)));
    }
    if args.ai {
        let player1 = name(&args.player1, "--player1")?;
        let difficulty = args
            .difficulty
            .as_deref()
            .map(Difficulty::from_label)
            .unwrap_or(default_difficulty);
        return Ok(Some(GameSettings::player_vs_ai(player1, difficulty)));
    }
    if args.player1.is_some() {
        warn!("--player1 ignored without --pvp or --ai");
    }
    Ok(None)
}

/// Stats output for `stats --json`.
#[derive(Debug, Serialize)]
struct StatsReport {
    results: Vec<String>,
    leaderboard: Vec<LeaderboardEntry>,
}

#[derive(Debug, Serialize)]
struct LeaderboardEntry {
    name: String,
    wins: u32,
}

/// Print the result history and leaderboard
fn run_stats(config: AppConfig, json: bool) -> Result<()> {
    init_stderr_tracing();
    let scoreboard = Scoreboard::open(&config)?;
    let results = scoreboard.stats().game_results();
    let counts = scoreboard.leaderboard().win_counts();

    if json {
        let report = StatsReport {
            results,
            leaderboard: counts
                .into_iter()
                .map(|(name, wins)| LeaderboardEntry { name, wins })
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Game results:");
    if results.is_empty() {
        println!("  (none)");
    }
    for (i, result) in results.iter().enumerate() {
        println!("  {:>3}. {}", i + 1, result);
    }
    println!();
    println!("Leaderboard:");
    if counts.is_empty() {
        println!("  (none)");
    }
    for (name, wins) in &counts {
        println!("  {}", leaderboard_line(name, *wins));
    }
    Ok(())
}

/// Clear the leaderboard and the result history
fn run_reset(config: AppConfig) -> Result<()> {
    init_stderr_tracing();
    let mut scoreboard = Scoreboard::open(&config)?;
    scoreboard.reset()?;
    println!(
        "Cleared {} and {}",
        config.leaderboard_file().display(),
        config.results_file().display()
    );
    Ok(())
}
