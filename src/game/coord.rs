//! Grid coordinates.

use serde::{Deserialize, Serialize};

use crate::game::Direction;

/// A position on the board.
///
/// Coordinates are centered on the origin: a board of radius `R` holds
/// every coordinate whose Chebyshev distance from `(0, 0)` is at most `R`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    /// X coordinate (east positive).
    pub x: i32,
    /// Y coordinate (north positive).
    pub y: i32,
}

impl Coordinate {
    /// Create a new coordinate.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The coordinate one step away in the given direction.
    #[must_use]
    pub const fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.offset();
        Self::new(self.x + dx, self.y + dy)
    }

    /// Chebyshev distance from the origin.
    #[must_use]
    pub const fn radius(self) -> i32 {
        let ax = self.x.abs();
        let ay = self.y.abs();
        if ax > ay { ax } else { ay }
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
