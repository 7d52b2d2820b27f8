//! The game model: board topology, cells, configuration, the engine, and
//! self-play drivers.

mod board;
mod cell;
mod config;
mod coord;
mod direction;
mod driver;
mod engine;
mod safety;

pub use board::{GameBoard, GraphBoard};
pub use cell::{Cell, CellId, CellState, Player};
pub use config::{GameConfig, GameResult, SafetyTier, WinCondition};
pub use coord::Coordinate;
pub use direction::{Direction, NUM_DIRECTIONS};
pub use driver::{run_match, MoveSource, RandomSource, Rng};
pub use engine::{GameEngine, MAX_CHAIN_CELLS};
pub use safety::{
    strategy_for, CellCommand, FullRollback, LightUndo, SafetyStrategy, ValidateOnly,
};
