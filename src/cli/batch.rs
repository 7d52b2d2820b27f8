//! Batch command implementation.

use super::{resolve_seed, CliError, OutputFormat};
use octacore::game::{run_match, RandomSource};
use octacore::{GameConfig, GameEngine, GameResult, GraphBoard, Player};
use rayon::prelude::*;
use serde::Serialize;
use std::time::Instant;

/// Aggregated outcomes over a batch of games.
#[derive(Debug, Default, Clone, Serialize)]
struct BatchStats {
    games: u64,
    player_one_wins: u64,
    player_two_wins: u64,
    ties: u64,
    conceded: u64,
    failed: u64,
    total_turns: u64,
}

impl BatchStats {
    fn add(&mut self, result: &GameResult, turn_limit: u32) {
        self.games += 1;
        self.total_turns += u64::from(result.turns);
        match result.winner {
            Some(Player::One) => self.player_one_wins += 1,
            Some(Player::Two) => self.player_two_wins += 1,
            // Under the majority rule a drawn game runs the full turn
            // limit, so a no-winner result short of it is a concession.
            None if result.turns < turn_limit => self.conceded += 1,
            None => self.ties += 1,
        }
    }

    fn add_failure(&mut self) {
        self.games += 1;
        self.failed += 1;
    }

    fn merge(&mut self, other: &Self) {
        self.games += other.games;
        self.player_one_wins += other.player_one_wins;
        self.player_two_wins += other.player_two_wins;
        self.ties += other.ties;
        self.conceded += other.conceded;
        self.failed += other.failed;
        self.total_turns += other.total_turns;
    }
}

#[derive(Debug, Serialize)]
struct JsonBatchReport {
    seed: u64,
    radius: i32,
    games_per_sec: f64,
    stats: BatchStats,
}

/// Run the batch and aggregate per-game outcomes.
///
/// The configuration is validated once up front; a bad configuration is
/// an error for the whole batch, not a quiet run of zero games. Per-game
/// faults are counted in `failed` rather than dropped.
fn run_games(
    games: u64,
    radius: i32,
    base_seed: u64,
    turn_limit: u32,
) -> Result<BatchStats, CliError> {
    let config = GameConfig {
        turn_limit,
        ..GameConfig::default()
    };
    config
        .validate()
        .map_err(|e| CliError::new(e.to_string()))?;

    // Lock-free fold/reduce: each thread accumulates its own stats, merged
    // once at the end.
    let stats = (0..games)
        .into_par_iter()
        .fold(BatchStats::default, |mut local, i| {
            let game_seed = base_seed.wrapping_add(i);
            let outcome = GameEngine::new(GraphBoard::new(radius), config).and_then(
                |mut engine| {
                    let mut one = RandomSource::new(game_seed);
                    let mut two = RandomSource::new(game_seed ^ 0xdead_beef_cafe_f00d);
                    run_match(&mut engine, &mut one, &mut two)
                },
            );
            match outcome {
                Ok(result) => local.add(&result, turn_limit),
                Err(_) => local.add_failure(),
            }
            local
        })
        .reduce(BatchStats::default, |mut a, b| {
            a.merge(&b);
            a
        });
    Ok(stats)
}

/// Execute the batch command.
///
/// # Errors
///
/// Returns an error for an invalid configuration or if serialization of
/// the report fails.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn execute(
    games: u64,
    radius: i32,
    seed: Option<u64>,
    turn_limit: u32,
    threads: Option<usize>,
    format: OutputFormat,
) -> Result<(), CliError> {
    // Set thread pool size if specified
    if let Some(num_threads) = threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build_global()
            .ok(); // Ignore error if already initialized
    }

    let base_seed = resolve_seed(seed);
    let start = Instant::now();
    let stats = run_games(games, radius, base_seed, turn_limit)?;
    let duration = start.elapsed();
    let games_per_sec = if duration.as_secs_f64() > 0.0 {
        stats.games as f64 / duration.as_secs_f64()
    } else {
        0.0
    };

    match format {
        OutputFormat::Text => {
            let percent = |n: u64| {
                if stats.games == 0 {
                    0.0
                } else {
                    100.0 * n as f64 / stats.games as f64
                }
            };
            let completed = stats.games - stats.failed;
            let avg_turns = stats.total_turns / completed.max(1);
            println!("Games:        {}", stats.games);
            println!(
                "P1 wins:      {} ({:.1}%)",
                stats.player_one_wins,
                percent(stats.player_one_wins)
            );
            println!(
                "P2 wins:      {} ({:.1}%)",
                stats.player_two_wins,
                percent(stats.player_two_wins)
            );
            println!("Ties:         {} ({:.1}%)", stats.ties, percent(stats.ties));
            println!(
                "Conceded:     {} ({:.1}%)",
                stats.conceded,
                percent(stats.conceded)
            );
            if stats.failed > 0 {
                println!(
                    "Failed:       {} ({:.1}%)",
                    stats.failed,
                    percent(stats.failed)
                );
            }
            println!("Avg turns:    {avg_turns}");
            println!(
                "Duration:     {:.2}s ({games_per_sec:.0} games/sec)",
                duration.as_secs_f64()
            );
        }
        OutputFormat::Json => {
            let report = JsonBatchReport {
                seed: base_seed,
                radius,
                games_per_sec,
                stats,
            };
            let json = serde_json::to_string_pretty(&report)
                .map_err(|e| CliError::new(format!("JSON serialization failed: {e}")))?;
            println!("{json}");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_turn_limit_is_rejected_up_front() {
        let err = run_games(5, 1, 7, 0).expect_err("invalid config must fail the batch");
        assert!(err.to_string().contains("turn limit"));
    }

    #[test]
    fn test_every_game_is_accounted_for() {
        let stats = run_games(8, 1, 42, 20).expect("valid batch");
        assert_eq!(stats.games, 8);
        assert_eq!(stats.failed, 0);
        assert_eq!(
            stats.player_one_wins + stats.player_two_wins + stats.ties + stats.conceded,
            8
        );
    }

    #[test]
    fn test_concession_distinguished_from_tie_by_turns() {
        let tie = GameResult {
            winner: None,
            reason: "turn limit 10 reached, cell counts tied".to_string(),
            turns: 10,
            player_one_cells: 2,
            player_two_cells: 2,
        };
        let concession = GameResult {
            winner: None,
            reason: "player 2 offered no move".to_string(),
            turns: 4,
            player_one_cells: 9,
            player_two_cells: 0,
        };

        let mut stats = BatchStats::default();
        stats.add(&tie, 10);
        stats.add(&concession, 10);
        assert_eq!(stats.ties, 1);
        assert_eq!(stats.conceded, 1);
        assert_eq!(stats.games, 2);
    }
}
