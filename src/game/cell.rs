//! Players, cell ownership, and the board cell itself.

use serde::{Deserialize, Serialize};

use crate::game::{Coordinate, Direction, NUM_DIRECTIONS};

/// Index of a cell in its board's storage.
///
/// Cells reference their neighbors through these indices rather than
/// owning pointers, which keeps the adjacency graph free of reference
/// cycles: neighbor links never extend a cell's lifetime beyond the
/// board's.
pub type CellId = usize;

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// First player (moves first).
    One,
    /// Second player.
    Two,
}

impl Player {
    /// The opposing player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// The cell state representing ownership by this player.
    #[must_use]
    pub const fn owned(self) -> CellState {
        CellState::Owned(self)
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::One => write!(f, "player 1"),
            Player::Two => write!(f, "player 2"),
        }
    }
}

/// Ownership state of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellState {
    /// Unowned and capturable by either player.
    Neutral,
    /// Owned by a player.
    Owned(Player),
    /// Permanently blocked: never explodes and never receives charge.
    Blocked,
}

impl CellState {
    /// The owning player, if this state is player-owned.
    #[must_use]
    pub const fn owner(self) -> Option<Player> {
        match self {
            CellState::Owned(player) => Some(player),
            CellState::Neutral | CellState::Blocked => None,
        }
    }
}

/// A single cell on the board.
///
/// Ownership, charge, and orientation change during play; the coordinate
/// and the neighbor table are fixed at board construction. A cell becomes
/// unstable (and explodes) when its charge strictly exceeds its in-bounds
/// neighbor count, so boundary cells destabilize sooner than interior
/// ones.
#[derive(Debug, Clone, Copy)]
pub struct Cell {
    /// Current ownership state.
    pub state: CellState,
    /// Charge counter; always stable (`<= neighbor_count`) between moves.
    pub charge: u32,
    /// Facing of the cell. Not consulted by the cascade rules; carried
    /// for hosts and renderers, and restored on rollback.
    pub orientation: Direction,
    coordinate: Coordinate,
    neighbors: [Option<CellId>; NUM_DIRECTIONS],
}

impl Cell {
    /// Create a neutral, uncharged cell at the given coordinate.
    #[must_use]
    pub const fn new(coordinate: Coordinate) -> Self {
        Self {
            state: CellState::Neutral,
            charge: 0,
            orientation: Direction::North,
            coordinate,
            neighbors: [None; NUM_DIRECTIONS],
        }
    }

    /// The cell's fixed position.
    #[must_use]
    pub const fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    /// The neighbor in the given direction, if one is in bounds.
    #[must_use]
    pub fn neighbor(&self, direction: Direction) -> Option<CellId> {
        self.neighbors[direction.index()]
    }

    /// Number of in-bounds neighbors; the cell's instability threshold.
    #[must_use]
    pub fn neighbor_count(&self) -> usize {
        self.neighbors.iter().filter(|n| n.is_some()).count()
    }

    /// True when the charge strictly exceeds the neighbor count.
    ///
    /// Blocked cells are never unstable regardless of charge.
    #[must_use]
    pub fn is_unstable(&self) -> bool {
        self.state != CellState::Blocked && self.charge as usize > self.neighbor_count()
    }

    /// Restore the mutable fields to their initial values.
    pub(crate) fn reset(&mut self) {
        self.state = CellState::Neutral;
        self.charge = 0;
        self.orientation = Direction::North;
    }

    /// Install a neighbor link. Called only during board construction.
    pub(crate) fn set_neighbor(&mut self, direction: Direction, id: CellId) {
        self.neighbors[direction.index()] = Some(id);
    }
}
