//! Game configuration and result values.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::game::Player;

/// How a game is won.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WinCondition {
    /// A player with zero cells loses, once at least one move has been
    /// made. Hosts normally seed both players with starting cells before
    /// play in this mode.
    Elimination,
    /// When the turn limit is reached, the player holding strictly more
    /// cells wins; equal counts end in a tie.
    TurnLimitMajority,
}

/// Safety tier governing what happens when a move fails partway.
///
/// All tiers produce identical results on successful moves; they differ
/// only in failure-path guarantees and bookkeeping overhead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SafetyTier {
    /// No change tracking. After a mid-move failure the board state is
    /// undefined; validation makes such failures effectively unreachable
    /// in normal play.
    ValidateOnly,
    /// Snapshot every cell before mutating it and replay the snapshots in
    /// reverse on failure, restoring the exact pre-move board.
    LightUndo,
    /// Run every mutation as a reversible command and undo the applied
    /// prefix in reverse on failure. Same guarantee as `LightUndo`, with
    /// per-command overhead but an extensible command log.
    FullRollback,
}

/// Configuration consumed at engine construction and reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Win condition to evaluate after every completed move.
    pub win_condition: WinCondition,
    /// Number of completed moves after which `TurnLimitMajority` resolves.
    /// Must be positive.
    pub turn_limit: u32,
    /// When set, explosions never touch opponent-owned neighbors: no
    /// charge transfer and no capture.
    pub stop_on_enemy: bool,
    /// Active safety tier.
    pub safety: SafetyTier,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            win_condition: WinCondition::TurnLimitMajority,
            turn_limit: 100,
            stop_on_enemy: false,
            safety: SafetyTier::ValidateOnly,
        }
    }
}

impl GameConfig {
    /// Check the configuration for values the engine rejects.
    ///
    /// # Errors
    ///
    /// Returns an error if the turn limit is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.turn_limit == 0 {
            return Err(ConfigError::ZeroTurnLimit);
        }
        Ok(())
    }
}

/// Outcome snapshot returned after every completed move.
///
/// While the game is running `winner` is `None` and the reason says so;
/// once a win condition fires, the result is also retained by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    /// The winning player, if any. `None` means the game continues or
    /// ended in a tie (see `reason`).
    pub winner: Option<Player>,
    /// Human-readable explanation of the outcome.
    pub reason: String,
    /// Completed moves at the time this result was produced.
    pub turns: u32,
    /// Cells owned by player one.
    pub player_one_cells: u32,
    /// Cells owned by player two.
    pub player_two_cells: u32,
}

impl GameResult {
    /// Result for a game still in progress.
    #[must_use]
    pub fn ongoing(turns: u32, player_one_cells: u32, player_two_cells: u32) -> Self {
        Self {
            winner: None,
            reason: "game continues".to_string(),
            turns,
            player_one_cells,
            player_two_cells,
        }
    }
}
