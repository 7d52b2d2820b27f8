//! Info command implementation.

use super::CliError;
use octacore::game::NUM_DIRECTIONS;
use octacore::{Coordinate, GameBoard, GraphBoard};

/// Execute the info command: print the topology a radius produces.
///
/// # Errors
///
/// Currently infallible; the signature matches the other commands.
pub(crate) fn execute(radius: i32) -> Result<(), CliError> {
    let board = GraphBoard::new(radius);

    println!("Board radius:  {}", board.radius());
    println!("Total cells:   {}", board.count());

    let mut histogram = [0usize; NUM_DIRECTIONS + 1];
    for (_, cell) in board.iter() {
        histogram[cell.neighbor_count()] += 1;
    }
    println!("Neighbor counts:");
    for (neighbors, count) in histogram.iter().enumerate() {
        if *count > 0 {
            println!("  {neighbors} neighbors: {count} cells");
        }
    }

    let r = board.radius();
    println!("Sample cells:");
    for coord in [
        Coordinate::new(0, 0),
        Coordinate::new(r, 0),
        Coordinate::new(r, r),
    ] {
        if let Some(cell) = board.cell_at(coord) {
            println!(
                "  {coord}: explodes above charge {}",
                cell.neighbor_count()
            );
        }
    }

    Ok(())
}
