//! Error types for the game engine.

use std::fmt;

use crate::game::{Coordinate, Player};

/// Reasons a move is rejected before any state is touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// No cell exists at the requested coordinate.
    NoSuchCell(Coordinate),
    /// The game has already ended.
    GameOver,
    /// It is not the acting player's turn.
    NotYourTurn {
        /// The player whose turn it actually is.
        current: Player,
    },
    /// The target cell is blocked or owned by the opponent.
    WrongOwner(Coordinate),
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::NoSuchCell(coord) => write!(f, "no cell at {coord}"),
            MoveError::GameOver => write!(f, "game is already over"),
            MoveError::NotYourTurn { current } => {
                write!(f, "not your turn (current player: {current})")
            }
            MoveError::WrongOwner(coord) => {
                write!(f, "cell at {coord} is not playable by the acting player")
            }
        }
    }
}

/// Reasons a configuration is rejected at construction or reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// The turn limit must be a positive number of turns.
    ZeroTurnLimit,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroTurnLimit => write!(f, "turn limit must be greater than zero"),
        }
    }
}

/// Internal invariant violations detected mid-move.
///
/// These are recovered according to the active safety tier before being
/// surfaced: `LightUndo` and `FullRollback` restore the pre-move board,
/// `ValidateOnly` leaves the partial state behind (a documented risk).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineFault {
    /// A chain reaction touched more cells than the per-move cap allows.
    ChainOverflow {
        /// Number of distinct cells affected when the cap was hit.
        affected: usize,
        /// The configured cap.
        cap: usize,
    },
}

impl fmt::Display for EngineFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineFault::ChainOverflow { affected, cap } => {
                write!(
                    f,
                    "chain reaction affected {affected} cells, exceeding the cap of {cap}"
                )
            }
        }
    }
}

/// Top-level error type for all engine operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// The move was rejected during validation; nothing was mutated.
    InvalidMove(MoveError),
    /// The configuration was rejected; nothing was mutated.
    InvalidConfig(ConfigError),
    /// An internal invariant failed mid-move; the board was restored
    /// according to the active safety tier before this was returned.
    Inconsistency(EngineFault),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InvalidMove(e) => write!(f, "invalid move: {e}"),
            GameError::InvalidConfig(e) => write!(f, "invalid configuration: {e}"),
            GameError::Inconsistency(e) => write!(f, "internal inconsistency: {e}"),
        }
    }
}

impl std::error::Error for GameError {}

impl From<MoveError> for GameError {
    fn from(e: MoveError) -> Self {
        GameError::InvalidMove(e)
    }
}

impl From<ConfigError> for GameError {
    fn from(e: ConfigError) -> Self {
        GameError::InvalidConfig(e)
    }
}

impl From<EngineFault> for GameError {
    fn from(e: EngineFault) -> Self {
        GameError::Inconsistency(e)
    }
}
