//! Move validation, the chain-reaction cascade, and win conditions.

use std::collections::{HashSet, VecDeque};

use crate::error::{EngineFault, GameError, MoveError};
use crate::game::safety::{strategy_for, CellCommand, SafetyStrategy};
use crate::game::{
    CellId, CellState, Coordinate, Direction, GameBoard, GameConfig, GameResult, GraphBoard,
    Player, WinCondition,
};

/// Hard cap on distinct cells a single move may affect.
///
/// A cascade that grows past this bound is rejected outright (the move
/// fails with [`EngineFault::ChainOverflow`] and is rolled back per the
/// active safety tier) rather than truncated, because truncation would
/// leave unstable cells on the board.
pub const MAX_CHAIN_CELLS: usize = 1000;

/// The game engine: owns the board, applies moves, and tracks turn state.
///
/// A move runs to completion or fails within a single call; the engine is
/// fully synchronous. Multiple engines are independent, so concurrent
/// games never share state. For multi-threaded hosts, wrap the engine in
/// [`SharedGame`](crate::sync::SharedGame).
#[derive(Debug)]
pub struct GameEngine<B = GraphBoard> {
    board: B,
    config: GameConfig,
    strategy: Box<dyn SafetyStrategy>,
    current_player: Player,
    turn_count: u32,
    result: Option<GameResult>,
}

impl<B: GameBoard> GameEngine<B> {
    /// Create an engine over a board.
    ///
    /// Player one moves first. The safety strategy is selected here from
    /// `config.safety` and lives for the engine's lifetime.
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidConfig` if the configuration is invalid
    /// (for example, a zero turn limit). Configuration problems are
    /// always rejected here, never at the first move.
    pub fn new(board: B, config: GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        Ok(Self {
            board,
            config,
            strategy: strategy_for(config.safety),
            current_player: Player::One,
            turn_count: 0,
            result: None,
        })
    }

    /// Check whether a move is legal without touching any state.
    ///
    /// A move is valid iff the cell exists, the game is not over, it is
    /// `player`'s turn, and the cell is neutral or owned by `player`.
    #[must_use]
    pub fn is_valid_move(&self, coord: Coordinate, player: Player) -> bool {
        self.validate(coord, player).is_ok()
    }

    /// Apply a move for `player` at `coord`.
    ///
    /// Increments the target cell's charge (capturing it if neutral),
    /// runs the chain reaction to quiescence, advances the turn, and
    /// evaluates win conditions. On success the returned result carries
    /// the current cell counts; once a win condition fires it is also
    /// retained and the game is over.
    ///
    /// # Errors
    ///
    /// - `GameError::InvalidMove`: validation failed; nothing was
    ///   mutated.
    /// - `GameError::Inconsistency`: the cascade exceeded
    ///   [`MAX_CHAIN_CELLS`]; the board was restored according to the
    ///   active safety tier before returning.
    pub fn make_move(&mut self, coord: Coordinate, player: Player) -> Result<GameResult, GameError> {
        let start = self.validate(coord, player)?;

        self.strategy.begin();
        if let Err(fault) = self.run_cascade(start, player) {
            self.strategy.rollback(&mut self.board);
            return Err(fault);
        }

        self.turn_count += 1;
        if let Some(result) = self.evaluate_win() {
            self.result = Some(result.clone());
            return Ok(result);
        }
        self.current_player = self.current_player.opponent();
        Ok(GameResult::ongoing(
            self.turn_count,
            self.count_cells(Player::One),
            self.count_cells(Player::Two),
        ))
    }

    /// True once a win condition has fired.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.result.is_some()
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Hand the turn to the opponent without making a move.
    pub fn switch_player(&mut self) {
        self.current_player = self.current_player.opponent();
    }

    /// Number of completed moves.
    #[must_use]
    pub fn turn_count(&self) -> u32 {
        self.turn_count
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The final result, once the game is over.
    #[must_use]
    pub fn game_result(&self) -> Option<&GameResult> {
        self.result.as_ref()
    }

    /// Borrow the board for inspection.
    #[must_use]
    pub fn board(&self) -> &B {
        &self.board
    }

    /// Mutably borrow the board.
    ///
    /// Intended for pre-game setup: seeding starting cells or placing
    /// blocked cells. Mutating cells mid-game bypasses the safety
    /// subsystem.
    pub fn board_mut(&mut self) -> &mut B {
        &mut self.board
    }

    /// Cells currently owned by `player`.
    #[must_use]
    pub fn count_cells(&self, player: Player) -> u32 {
        let mut count = 0;
        for id in 0..self.board.count() {
            if self.board.cell(id).state == player.owned() {
                count += 1;
            }
        }
        count
    }

    /// Start a fresh game on the existing topology.
    ///
    /// Every cell returns to its initial state; the adjacency graph is
    /// not rebuilt. With `new_config`, the configuration (and safety
    /// strategy) is replaced after validation.
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidConfig` if `new_config` is invalid; the
    /// game is left untouched in that case.
    pub fn reset_game(&mut self, new_config: Option<GameConfig>) -> Result<(), GameError> {
        if let Some(config) = new_config {
            config.validate()?;
            self.config = config;
            self.strategy = strategy_for(config.safety);
        }
        self.board.reset();
        self.reset_state();
        Ok(())
    }

    /// Replace the board entirely and start a fresh game on it.
    ///
    /// The supplied board is used as-is, so hosts can pre-seed starting
    /// positions before play begins.
    pub fn install_board(&mut self, board: B) {
        self.board = board;
        self.reset_state();
    }

    fn reset_state(&mut self) {
        self.current_player = Player::One;
        self.turn_count = 0;
        self.result = None;
    }

    fn validate(&self, coord: Coordinate, player: Player) -> Result<CellId, MoveError> {
        let id = self
            .board
            .lookup(coord)
            .ok_or(MoveError::NoSuchCell(coord))?;
        if self.is_game_over() {
            return Err(MoveError::GameOver);
        }
        if player != self.current_player {
            return Err(MoveError::NotYourTurn {
                current: self.current_player,
            });
        }
        match self.board.cell(id).state {
            CellState::Neutral => Ok(id),
            CellState::Owned(owner) if owner == player => Ok(id),
            CellState::Owned(_) | CellState::Blocked => Err(MoveError::WrongOwner(coord)),
        }
    }

    /// Charge the target cell and propagate explosions breadth-first.
    ///
    /// Cells are processed in FIFO order so propagation is deterministic
    /// and wave-fair. Every mutation flows through the safety strategy.
    fn run_cascade(&mut self, start: CellId, player: Player) -> Result<(), GameError> {
        let owner = player.owned();
        let enemy = player.opponent().owned();

        let mut affected: Vec<CellId> = Vec::new();
        let mut touched: HashSet<CellId> = HashSet::new();
        let mut queue: VecDeque<CellId> = VecDeque::new();
        let mut queued: HashSet<CellId> = HashSet::new();

        record_affected(&mut affected, &mut touched, start)?;
        let prior = self.board.cell(start).state;
        if prior != owner {
            self.strategy.apply(
                &mut self.board,
                CellCommand::Capture {
                    id: start,
                    prior,
                    state: owner,
                },
            );
        }
        self.strategy
            .apply(&mut self.board, CellCommand::AddCharge { id: start, amount: 1 });

        if self.board.cell(start).is_unstable() {
            queue.push_back(start);
            queued.insert(start);
        }

        while let Some(current) = queue.pop_front() {
            queued.remove(&current);
            // A queued cell may have been stabilized by the time it is
            // popped; re-check before exploding.
            if !self.board.cell(current).is_unstable() {
                continue;
            }

            let prior_charge = self.board.cell(current).charge;
            self.strategy.apply(
                &mut self.board,
                CellCommand::Discharge {
                    id: current,
                    prior: prior_charge,
                },
            );

            for dir in Direction::ALL {
                let Some(neighbor) = self.board.cell(current).neighbor(dir) else {
                    continue;
                };
                let neighbor_state = self.board.cell(neighbor).state;
                if neighbor_state == CellState::Blocked {
                    continue;
                }
                if self.config.stop_on_enemy && neighbor_state == enemy {
                    continue;
                }

                record_affected(&mut affected, &mut touched, neighbor)?;
                if neighbor_state != owner {
                    self.strategy.apply(
                        &mut self.board,
                        CellCommand::Capture {
                            id: neighbor,
                            prior: neighbor_state,
                            state: owner,
                        },
                    );
                }
                self.strategy.apply(
                    &mut self.board,
                    CellCommand::AddCharge {
                        id: neighbor,
                        amount: 1,
                    },
                );

                if self.board.cell(neighbor).is_unstable() && queued.insert(neighbor) {
                    queue.push_back(neighbor);
                }
            }
        }
        Ok(())
    }

    fn evaluate_win(&self) -> Option<GameResult> {
        let player_one_cells = self.count_cells(Player::One);
        let player_two_cells = self.count_cells(Player::Two);

        match self.config.win_condition {
            WinCondition::Elimination => {
                if self.turn_count == 0 {
                    return None;
                }
                let (winner, reason) = if player_two_cells == 0 && player_one_cells > 0 {
                    (Player::One, "player 2 eliminated")
                } else if player_one_cells == 0 && player_two_cells > 0 {
                    (Player::Two, "player 1 eliminated")
                } else {
                    return None;
                };
                Some(GameResult {
                    winner: Some(winner),
                    reason: reason.to_string(),
                    turns: self.turn_count,
                    player_one_cells,
                    player_two_cells,
                })
            }
            WinCondition::TurnLimitMajority => {
                if self.turn_count < self.config.turn_limit {
                    return None;
                }
                let limit = self.config.turn_limit;
                let (winner, reason) = if player_one_cells > player_two_cells {
                    (
                        Some(Player::One),
                        format!("turn limit {limit} reached, player 1 holds the majority"),
                    )
                } else if player_two_cells > player_one_cells {
                    (
                        Some(Player::Two),
                        format!("turn limit {limit} reached, player 2 holds the majority"),
                    )
                } else {
                    (None, format!("turn limit {limit} reached, cell counts tied"))
                };
                Some(GameResult {
                    winner,
                    reason,
                    turns: self.turn_count,
                    player_one_cells,
                    player_two_cells,
                })
            }
        }
    }
}

/// Track a touched cell, enforcing the per-move cap.
fn record_affected(
    affected: &mut Vec<CellId>,
    touched: &mut HashSet<CellId>,
    id: CellId,
) -> Result<(), GameError> {
    if touched.insert(id) {
        if affected.len() >= MAX_CHAIN_CELLS {
            return Err(EngineFault::ChainOverflow {
                affected: affected.len() + 1,
                cap: MAX_CHAIN_CELLS,
            }
            .into());
        }
        affected.push(id);
    }
    Ok(())
}
