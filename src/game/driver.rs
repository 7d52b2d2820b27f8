//! Self-play drivers: move sources and the match loop.

use crate::error::GameError;
use crate::game::{
    CellState, Coordinate, GameBoard, GameEngine, GameResult, Player,
};

/// Supplies moves for one player.
///
/// Sources see the board read-only and the player they act for; returning
/// `None` means the source has no move to offer, which ends the match
/// without a winner.
pub trait MoveSource {
    /// Produce the next move, or `None` to concede the match.
    fn next_move(&mut self, board: &dyn GameBoard, player: Player) -> Option<Coordinate>;
}

/// Deterministic xorshift64 generator.
///
/// Not cryptographic; used so that matches and benchmarks replay exactly
/// from a seed.
#[derive(Debug, Clone, Copy)]
pub struct Rng {
    state: u64,
}

impl Rng {
    /// Seed the generator. Zero would trap xorshift in a fixed point, so
    /// it is mapped to an arbitrary non-zero constant.
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        let state = if seed == 0 { 0x5555_5555_5555_5555 } else { seed };
        Self { state }
    }

    /// Next raw value in the sequence.
    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Uniform-ish index in `0..bound`. A zero bound yields zero.
    pub fn below(&mut self, bound: usize) -> usize {
        let bound = u64::try_from(bound).unwrap_or(u64::MAX).max(1);
        usize::try_from(self.next_u64() % bound).unwrap_or(0)
    }
}

/// Move source that plays a uniformly random playable cell.
///
/// Playable means neutral or already owned by the acting player; the
/// scan runs in cell-id order, so the choice is fully determined by the
/// seed and the board state.
#[derive(Debug, Clone, Copy)]
pub struct RandomSource {
    rng: Rng,
}

impl RandomSource {
    /// Create a source from a seed.
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self {
            rng: Rng::new(seed),
        }
    }
}

impl MoveSource for RandomSource {
    fn next_move(&mut self, board: &dyn GameBoard, player: Player) -> Option<Coordinate> {
        let mut playable = Vec::new();
        for id in 0..board.count() {
            let cell = board.cell(id);
            match cell.state {
                CellState::Neutral => playable.push(cell.coordinate()),
                CellState::Owned(owner) if owner == player => playable.push(cell.coordinate()),
                CellState::Owned(_) | CellState::Blocked => {}
            }
        }
        if playable.is_empty() {
            None
        } else {
            Some(playable[self.rng.below(playable.len())])
        }
    }
}

/// Drive a game to completion with one source per player.
///
/// Alternates sources according to the engine's current player until a
/// win condition fires. If a source returns `None`, the match ends
/// immediately with no winner and a reason naming the player; the engine
/// itself is not mutated in that case.
///
/// # Errors
///
/// Propagates any error from the engine, including moves the sources
/// produced that fail validation.
pub fn run_match<B: GameBoard>(
    engine: &mut GameEngine<B>,
    player_one: &mut dyn MoveSource,
    player_two: &mut dyn MoveSource,
) -> Result<GameResult, GameError> {
    loop {
        if let Some(result) = engine.game_result() {
            return Ok(result.clone());
        }
        let player = engine.current_player();
        let source: &mut dyn MoveSource = match player {
            Player::One => &mut *player_one,
            Player::Two => &mut *player_two,
        };
        let Some(coord) = source.next_move(engine.board(), player) else {
            return Ok(GameResult {
                winner: None,
                reason: format!("{player} offered no move"),
                turns: engine.turn_count(),
                player_one_cells: engine.count_cells(Player::One),
                player_two_cells: engine.count_cells(Player::Two),
            });
        };
        let result = engine.make_move(coord, player)?;
        if engine.is_game_over() {
            return Ok(result);
        }
    }
}
