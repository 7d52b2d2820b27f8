// Allow unwrap and unreadable literals in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::unreadable_literal))]
//! Octacore: a chain-reaction capture game engine on a bounded 8-neighbor
//! grid.
//!
//! Two players claim cells by charging them; a cell whose charge exceeds
//! its neighbor count explodes, capturing and charging its neighbors and
//! possibly cascading across the board. The crate provides:
//! - Deterministic move application with breadth-first cascades
//! - Tiered transactional safety (validate-only, undo log, command log)
//! - Pluggable board storage behind the [`GameBoard`](game::GameBoard) trait
//! - Self-play drivers and a thread-safe shared handle
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │   Drivers / SharedGame handle       │
//! ├─────────────────────────────────────┤
//! │   GameEngine (moves, cascades,      │
//! │   win conditions, safety tiers)     │
//! ├─────────────────────────────────────┤
//! │   Board topology (GraphBoard)       │
//! └─────────────────────────────────────┘
//! ```

mod error;
pub mod game;
pub mod sync;

pub use error::{ConfigError, EngineFault, GameError, MoveError};

// Re-export key game types at crate root for convenience
pub use game::{
    Cell, CellState, Coordinate, Direction, GameBoard, GameConfig, GameEngine, GameResult,
    GraphBoard, Player, SafetyTier, WinCondition,
};
