//! Compass directions for the 8-neighbor grid.

use serde::{Deserialize, Serialize};

/// One of the eight compass directions, arranged clockwise from north.
///
/// The discriminants are sequential so rotation is plain modular
/// arithmetic over the direction index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Direction {
    /// North (0 degrees).
    North = 0,
    /// North-east (45 degrees).
    NorthEast = 1,
    /// East (90 degrees).
    East = 2,
    /// South-east (135 degrees).
    SouthEast = 3,
    /// South (180 degrees).
    South = 4,
    /// South-west (225 degrees).
    SouthWest = 5,
    /// West (270 degrees).
    West = 6,
    /// North-west (315 degrees).
    NorthWest = 7,
}

/// Total number of compass directions.
pub const NUM_DIRECTIONS: usize = 8;

impl Direction {
    /// All directions in clockwise order starting from north.
    pub const ALL: [Direction; NUM_DIRECTIONS] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// Index of this direction in clockwise order (north = 0).
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Direction at the given clockwise index, wrapping modulo 8.
    #[must_use]
    #[inline]
    pub const fn from_index(index: usize) -> Self {
        Self::ALL[index % NUM_DIRECTIONS]
    }

    /// Rotate by the given number of 45-degree steps.
    ///
    /// Positive steps rotate clockwise, negative steps counter-clockwise.
    #[must_use]
    pub fn rotated(self, steps: i32) -> Self {
        // rem_euclid folds any step count into 0..8, so the sum below
        // never overflows and the cast is always in range.
        let steps = usize::try_from(steps.rem_euclid(8)).unwrap_or(0);
        Self::from_index(self.index() + steps)
    }

    /// The opposite direction (180-degree rotation).
    #[must_use]
    pub fn opposite(self) -> Self {
        self.rotated(4)
    }

    /// Grid offset `(dx, dy)` of a step in this direction, with y
    /// increasing northward.
    #[must_use]
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Direction::North => (0, 1),
            Direction::NorthEast => (1, 1),
            Direction::East => (1, 0),
            Direction::SouthEast => (1, -1),
            Direction::South => (0, -1),
            Direction::SouthWest => (-1, -1),
            Direction::West => (-1, 0),
            Direction::NorthWest => (-1, 1),
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::North => "N",
            Direction::NorthEast => "NE",
            Direction::East => "E",
            Direction::SouthEast => "SE",
            Direction::South => "S",
            Direction::SouthWest => "SW",
            Direction::West => "W",
            Direction::NorthWest => "NW",
        };
        write!(f, "{name}")
    }
}
