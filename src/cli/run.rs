//! Run command implementation.

use super::{resolve_seed, CliError, OutputFormat};
use octacore::game::{MoveSource, RandomSource};
use octacore::{
    Coordinate, GameBoard, GameConfig, GameEngine, GameResult, GraphBoard, Player, SafetyTier,
    WinCondition,
};
use serde::Serialize;

/// Options for a single self-play game.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RunOptions {
    pub(crate) radius: i32,
    pub(crate) seed: Option<u64>,
    pub(crate) turn_limit: u32,
    pub(crate) win_condition: WinCondition,
    pub(crate) stop_on_enemy: bool,
    pub(crate) safety: SafetyTier,
    pub(crate) format: OutputFormat,
    pub(crate) quiet: bool,
}

#[derive(Debug, Serialize)]
struct JsonGameReport<'a> {
    seed: u64,
    radius: i32,
    result: &'a GameResult,
}

/// Execute the run command.
///
/// # Errors
///
/// Returns an error for an invalid configuration or an engine fault.
pub(crate) fn execute(options: RunOptions) -> Result<(), CliError> {
    let seed = resolve_seed(options.seed);
    let config = GameConfig {
        win_condition: options.win_condition,
        turn_limit: options.turn_limit,
        stop_on_enemy: options.stop_on_enemy,
        safety: options.safety,
    };
    let mut engine = GameEngine::new(GraphBoard::new(options.radius), config)?;

    // Elimination only resolves once both players hold cells, so seed one
    // starting cell per player in opposite corners.
    if options.win_condition == WinCondition::Elimination {
        let r = engine.board().radius();
        for (coord, player) in [
            (Coordinate::new(-r, -r), Player::One),
            (Coordinate::new(r, r), Player::Two),
        ] {
            if let Some(id) = engine.board().lookup(coord) {
                let cell = engine.board_mut().cell_mut(id);
                cell.state = player.owned();
                cell.charge = 1;
            }
        }
    }

    let mut one = RandomSource::new(seed);
    let mut two = RandomSource::new(seed.wrapping_add(0x9e37_79b9_7f4a_7c15));

    let result = loop {
        let player = engine.current_player();
        let source: &mut dyn MoveSource = match player {
            Player::One => &mut one,
            Player::Two => &mut two,
        };
        let Some(coord) = source.next_move(engine.board(), player) else {
            break GameResult {
                winner: None,
                reason: format!("{player} offered no move"),
                turns: engine.turn_count(),
                player_one_cells: engine.count_cells(Player::One),
                player_two_cells: engine.count_cells(Player::Two),
            };
        };
        let result = engine.make_move(coord, player)?;
        if !options.quiet {
            println!(
                "turn {:>4}  {player} -> {coord}   cells {} / {}",
                result.turns, result.player_one_cells, result.player_two_cells
            );
        }
        if engine.is_game_over() {
            break result;
        }
    };

    match options.format {
        OutputFormat::Text => {
            println!();
            match result.winner {
                Some(player) => println!("Winner: {player} ({})", result.reason),
                None => println!("No winner: {}", result.reason),
            }
            println!("Turns:  {}", result.turns);
            println!(
                "Cells:  player 1 = {}, player 2 = {}",
                result.player_one_cells, result.player_two_cells
            );
            println!("Seed:   {seed}");
        }
        OutputFormat::Json => {
            let report = JsonGameReport {
                seed,
                radius: options.radius,
                result: &result,
            };
            let json = serde_json::to_string_pretty(&report)
                .map_err(|e| CliError::new(format!("JSON serialization failed: {e}")))?;
            println!("{json}");
        }
    }

    Ok(())
}
