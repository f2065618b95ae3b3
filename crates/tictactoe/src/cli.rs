//! Command-line interface for tictactoe.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe in the terminal, against a friend or a minimax AI
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Terminal tic-tac-toe with leaderboard and game history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the leaderboard file
    #[arg(long, global = true)]
    pub leaderboard_file: Option<PathBuf>,

    /// Override the results file
    #[arg(long, global = true)]
    pub results_file: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Open the terminal UI
    Play(PlayArgs),

    /// Print the result history and leaderboard
    Stats {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete every recorded result and win
    Reset,
}

/// Options for starting straight into a game.
#[derive(Args, Debug, Default, Clone)]
pub struct PlayArgs {
    /// Two players on one keyboard
    #[arg(long, conflicts_with = "ai")]
    pub pvp: bool,

    /// Play against the AI
    #[arg(long)]
    pub ai: bool,

    /// AI difficulty ("Easy" or "Hard"; anything else plays Easy)
    #[arg(long, requires = "ai")]
    pub difficulty: Option<String>,

    /// Name of player 1 (X)
    #[arg(long)]
    pub player1: Option<String>,

    /// Name of player 2 (O), player-vs-player only
    #[arg(long, requires = "pvp")]
    pub player2: Option<String>,
}
