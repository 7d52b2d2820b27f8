//! Octacore CLI - run, batch, and inspect chain-reaction games.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]

mod cli;

use clap::{Parser, Subcommand};
use std::process::ExitCode;

/// Octacore - a chain-reaction capture game engine
#[derive(Parser, Debug)]
#[command(name = "octacore")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a single random self-play game
    Run {
        /// Board radius (cells span Chebyshev distance <= radius)
        #[arg(short, long, default_value = "4")]
        radius: i32,

        /// Random seed (default: derived from the clock)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Turn limit for the majority win condition
        #[arg(short, long, default_value = "100")]
        turn_limit: u32,

        /// Win condition
        #[arg(short, long, default_value = "turn-limit")]
        win_condition: cli::WinConditionArg,

        /// Shield opponent cells from explosions
        #[arg(long)]
        stop_on_enemy: bool,

        /// Transactional safety tier
        #[arg(long, default_value = "validate")]
        safety: cli::SafetyArg,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,

        /// Suppress turn-by-turn output
        #[arg(short, long)]
        quiet: bool,
    },

    /// Run mass parallel games and aggregate statistics
    Batch {
        /// Number of games to run
        #[arg(short, long, default_value = "1000")]
        games: u64,

        /// Board radius
        #[arg(short, long, default_value = "4")]
        radius: i32,

        /// Starting seed (increments for each game)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Turn limit per game
        #[arg(short, long, default_value = "100")]
        turn_limit: u32,

        /// Parallel threads (default: CPU count)
        #[arg(short = 'j', long)]
        threads: Option<usize>,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,
    },

    /// Print board topology information
    Info {
        /// Board radius
        #[arg(short, long, default_value = "4")]
        radius: i32,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    let result = match args.command {
        Commands::Run {
            radius,
            seed,
            turn_limit,
            win_condition,
            stop_on_enemy,
            safety,
            format,
            quiet,
        } => cli::run::execute(cli::run::RunOptions {
            radius,
            seed,
            turn_limit,
            win_condition: win_condition.into(),
            stop_on_enemy,
            safety: safety.into(),
            format,
            quiet,
        }),

        Commands::Batch {
            games,
            radius,
            seed,
            turn_limit,
            threads,
            format,
        } => cli::batch::execute(games, radius, seed, turn_limit, threads, format),

        Commands::Info { radius } => cli::info::execute(radius),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
