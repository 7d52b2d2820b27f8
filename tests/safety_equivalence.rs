//! Cross-tier tests for the transactional safety subsystem.
//!
//! The three tiers must produce identical boards on every successful
//! move, and the tracking tiers must restore the exact pre-move board
//! when a move fails mid-cascade.
//!
//! Run with: cargo test --release safety_equivalence

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use octacore::game::{run_match, RandomSource, MAX_CHAIN_CELLS};
use octacore::{
    Coordinate, EngineFault, GameBoard, GameConfig, GameEngine, GameError, GraphBoard, Player,
    SafetyTier,
};

const ALL_TIERS: [SafetyTier; 3] = [
    SafetyTier::ValidateOnly,
    SafetyTier::LightUndo,
    SafetyTier::FullRollback,
];

fn snapshot(board: &GraphBoard) -> Vec<(octacore::CellState, u32)> {
    (0..board.count())
        .map(|id| {
            let cell = board.cell(id);
            (cell.state, cell.charge)
        })
        .collect()
}

/// A board where every cell sits exactly at its explosion threshold, so
/// one more charge anywhere cascades across the whole board.
fn saturated_board(radius: i32, owner: Player) -> GraphBoard {
    let mut board = GraphBoard::new(radius);
    for id in 0..board.count() {
        let threshold = u32::try_from(board.cell(id).neighbor_count()).unwrap();
        let cell = board.cell_mut(id);
        cell.state = owner.owned();
        cell.charge = threshold;
    }
    board
}

#[test]
fn test_tiers_agree_on_full_random_games() {
    let mut outcomes = Vec::new();
    for tier in ALL_TIERS {
        let config = GameConfig {
            safety: tier,
            turn_limit: 50,
            ..GameConfig::default()
        };
        let mut engine = GameEngine::new(GraphBoard::new(2), config).unwrap();
        let mut one = RandomSource::new(2024);
        let mut two = RandomSource::new(4048);
        let result = run_match(&mut engine, &mut one, &mut two).unwrap();
        outcomes.push((result, snapshot(engine.board())));
    }
    assert_eq!(outcomes[0], outcomes[1]);
    assert_eq!(outcomes[1], outcomes[2]);
}

#[test]
fn test_oversized_cascade_is_rejected() {
    // 41 x 41 = 1681 cells, all at threshold: the cascade must blow
    // through the cap long before it settles.
    let board = saturated_board(20, Player::One);
    let config = GameConfig {
        safety: SafetyTier::ValidateOnly,
        ..GameConfig::default()
    };
    let mut engine = GameEngine::new(GraphBoard::new(0), config).unwrap();
    engine.install_board(board);

    let err = engine
        .make_move(Coordinate::new(0, 0), Player::One)
        .unwrap_err();
    assert_eq!(
        err,
        GameError::Inconsistency(EngineFault::ChainOverflow {
            affected: MAX_CHAIN_CELLS + 1,
            cap: MAX_CHAIN_CELLS,
        })
    );
    // The failed move consumed no turn.
    assert_eq!(engine.turn_count(), 0);
    assert_eq!(engine.current_player(), Player::One);
}

#[test]
fn test_tracking_tiers_restore_the_exact_board() {
    for tier in [SafetyTier::LightUndo, SafetyTier::FullRollback] {
        let board = saturated_board(20, Player::One);
        let before = snapshot(&board);

        let config = GameConfig {
            safety: tier,
            ..GameConfig::default()
        };
        let mut engine = GameEngine::new(GraphBoard::new(0), config).unwrap();
        engine.install_board(board);

        let err = engine
            .make_move(Coordinate::new(0, 0), Player::One)
            .unwrap_err();
        assert!(
            matches!(err, GameError::Inconsistency(EngineFault::ChainOverflow { .. })),
            "{tier:?} returned the wrong error: {err}"
        );
        assert_eq!(
            snapshot(engine.board()),
            before,
            "{tier:?} failed to restore the pre-move board"
        );
        assert_eq!(engine.turn_count(), 0);

        // The engine is still playable after the rollback: a quiet corner
        // of a fresh board accepts a normal move.
        engine.reset_game(None).unwrap();
        engine.make_move(Coordinate::new(0, 0), Player::One).unwrap();
        assert_eq!(engine.turn_count(), 1);
    }
}

#[test]
fn test_rollback_preserves_orientation() {
    let mut board = saturated_board(20, Player::One);
    let probe = board.lookup(Coordinate::new(1, 1)).unwrap();
    board.cell_mut(probe).orientation = octacore::Direction::SouthWest;

    let config = GameConfig {
        safety: SafetyTier::LightUndo,
        ..GameConfig::default()
    };
    let mut engine = GameEngine::new(GraphBoard::new(0), config).unwrap();
    engine.install_board(board);

    engine
        .make_move(Coordinate::new(0, 0), Player::One)
        .unwrap_err();
    assert_eq!(
        engine.board().cell(probe).orientation,
        octacore::Direction::SouthWest
    );
}
