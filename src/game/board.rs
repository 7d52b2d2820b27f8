//! Board storage and static adjacency.

use std::collections::HashMap;

use crate::game::{Cell, CellId, Coordinate, Direction};

/// Abstraction over board storage.
///
/// The engine only needs coordinate lookup and id-based cell access, so
/// the backing structure is swappable: [`GraphBoard`] keys cells by
/// coordinate in a hash table, and a dense array-backed implementation
/// could satisfy the same contract.
///
/// Implementations hand out dense cell ids: every id in `0..count()` is
/// valid, which lets callers iterate the whole board without an iterator
/// method on the trait.
pub trait GameBoard {
    /// Resolve a coordinate to a cell id.
    ///
    /// Returns `None` for any coordinate outside the board; out-of-bounds
    /// lookups are an expected, non-error case.
    fn lookup(&self, coord: Coordinate) -> Option<CellId>;

    /// Borrow a cell by id. Ids come from [`lookup`](Self::lookup) or the
    /// dense range `0..count()`.
    fn cell(&self, id: CellId) -> &Cell;

    /// Mutably borrow a cell by id.
    fn cell_mut(&mut self, id: CellId) -> &mut Cell;

    /// Total number of cells, fixed at construction.
    fn count(&self) -> usize;

    /// The board radius the topology was built for.
    fn radius(&self) -> i32;

    /// Restore every cell to its initial state without rebuilding the
    /// adjacency graph.
    fn reset(&mut self);
}

/// Graph-backed board: a coordinate-keyed table over owned cell storage.
///
/// For radius `R` the board contains exactly the coordinates with
/// Chebyshev distance at most `R` from the origin, `(2R+1)²` cells in
/// total. Construction runs in two passes: create every cell, then link
/// every neighbor pair, which guarantees bidirectional adjacency
/// regardless of creation order.
#[derive(Debug, Clone)]
pub struct GraphBoard {
    radius: i32,
    cells: Vec<Cell>,
    index: HashMap<Coordinate, CellId>,
}

impl GraphBoard {
    /// Build a board of the given radius.
    ///
    /// A negative radius is clamped to zero (a single-cell board).
    #[must_use]
    pub fn new(radius: i32) -> Self {
        let radius = radius.max(0);
        let side = 2 * radius + 1;
        let expected = usize::try_from(side * side).unwrap_or(0);

        let mut cells = Vec::with_capacity(expected);
        let mut index = HashMap::with_capacity(expected);

        // Pass one: create every in-bounds cell.
        for x in -radius..=radius {
            for y in -radius..=radius {
                let coord = Coordinate::new(x, y);
                let id = cells.len();
                cells.push(Cell::new(coord));
                index.insert(coord, id);
            }
        }

        // Pass two: link neighbors now that every cell exists.
        for cell in &mut cells {
            let coord = cell.coordinate();
            for dir in Direction::ALL {
                if let Some(&neighbor_id) = index.get(&coord.step(dir)) {
                    cell.set_neighbor(dir, neighbor_id);
                }
            }
        }

        Self {
            radius,
            cells,
            index,
        }
    }

    /// Borrow the cell at a coordinate, if it exists.
    #[must_use]
    pub fn cell_at(&self, coord: Coordinate) -> Option<&Cell> {
        self.lookup(coord).map(|id| &self.cells[id])
    }

    /// Iterate over every cell with its id.
    #[must_use]
    pub fn iter(&self) -> impl Iterator<Item = (CellId, &Cell)> {
        self.cells.iter().enumerate()
    }
}

impl GameBoard for GraphBoard {
    fn lookup(&self, coord: Coordinate) -> Option<CellId> {
        self.index.get(&coord).copied()
    }

    fn cell(&self, id: CellId) -> &Cell {
        &self.cells[id]
    }

    fn cell_mut(&mut self, id: CellId) -> &mut Cell {
        &mut self.cells[id]
    }

    fn count(&self) -> usize {
        self.cells.len()
    }

    fn radius(&self) -> i32 {
        self.radius
    }

    fn reset(&mut self) {
        for cell in &mut self.cells {
            cell.reset();
        }
    }
}
