//! Shared-state wrapper for multi-threaded hosts.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::GameError;
use crate::game::{
    Cell, Coordinate, GameBoard, GameConfig, GameEngine, GameResult, GraphBoard, Player,
};

/// A cloneable handle to an engine behind a reader-writer lock.
///
/// Clones share the same game. Reads (validity checks, turn queries) take
/// the lock shared; moves and resets take it exclusively, so a move is
/// observed either not at all or fully applied, never mid-cascade.
///
/// A thread panicking while holding the lock poisons it; since the engine
/// rolls back or rejects failed moves itself, the wrapper recovers the
/// guard and keeps serving rather than propagating the poison.
#[derive(Debug)]
pub struct SharedGame<B = GraphBoard> {
    inner: Arc<RwLock<GameEngine<B>>>,
}

impl<B> Clone for SharedGame<B> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<B: GameBoard> SharedGame<B> {
    /// Wrap an engine for shared use.
    #[must_use]
    pub fn new(engine: GameEngine<B>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(engine)),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, GameEngine<B>> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, GameEngine<B>> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Apply a move under the write lock.
    ///
    /// # Errors
    ///
    /// Same contract as [`GameEngine::make_move`].
    pub fn make_move(&self, coord: Coordinate, player: Player) -> Result<GameResult, GameError> {
        self.write().make_move(coord, player)
    }

    /// Check a move's validity under the read lock.
    #[must_use]
    pub fn is_valid_move(&self, coord: Coordinate, player: Player) -> bool {
        self.read().is_valid_move(coord, player)
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> Player {
        self.read().current_player()
    }

    /// Number of completed moves.
    #[must_use]
    pub fn turn_count(&self) -> u32 {
        self.read().turn_count()
    }

    /// True once a win condition has fired.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.read().is_game_over()
    }

    /// A copy of the final result, once the game is over.
    #[must_use]
    pub fn game_result(&self) -> Option<GameResult> {
        self.read().game_result().cloned()
    }

    /// Cells currently owned by `player`.
    #[must_use]
    pub fn count_cells(&self, player: Player) -> u32 {
        self.read().count_cells(player)
    }

    /// A copy of the cell at `coord`, if it exists.
    #[must_use]
    pub fn cell_at(&self, coord: Coordinate) -> Option<Cell> {
        let engine = self.read();
        let id = engine.board().lookup(coord)?;
        Some(*engine.board().cell(id))
    }

    /// Start a fresh game under the write lock.
    ///
    /// # Errors
    ///
    /// Same contract as [`GameEngine::reset_game`].
    pub fn reset_game(&self, new_config: Option<GameConfig>) -> Result<(), GameError> {
        self.write().reset_game(new_config)
    }

    /// Run a closure with shared read access to the engine.
    pub fn with_engine<T>(&self, f: impl FnOnce(&GameEngine<B>) -> T) -> T {
        f(&self.read())
    }
}
