//! Multi-turn integration tests for the game engine.
//!
//! These tests play whole games and scripted scenarios, checking that
//! cascades settle, win conditions fire, and rejected moves leave the
//! board untouched.
//!
//! Run with: cargo test --release engine_integration

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use octacore::game::{run_match, RandomSource};
use octacore::{
    CellState, Coordinate, GameBoard, GameConfig, GameEngine, GameError, GraphBoard, MoveError,
    Player, WinCondition,
};

fn snapshot(board: &GraphBoard) -> Vec<(CellState, u32)> {
    (0..board.count())
        .map(|id| {
            let cell = board.cell(id);
            (cell.state, cell.charge)
        })
        .collect()
}

#[test]
fn test_first_move_claims_the_cell() {
    let mut engine =
        GameEngine::new(GraphBoard::new(1), GameConfig::default()).unwrap();
    let result = engine.make_move(Coordinate::new(0, 0), Player::One).unwrap();

    assert_eq!(result.winner, None);
    assert_eq!(engine.turn_count(), 1);
    assert_eq!(engine.current_player(), Player::Two);
    let cell = engine.board().cell_at(Coordinate::new(0, 0)).unwrap();
    assert_eq!(cell.state, Player::One.owned());
    assert_eq!(cell.charge, 1);
}

#[test]
fn test_alternating_play_builds_charge_until_explosion() {
    // Corner (1, 1) on a radius-1 board has 3 neighbors, so the fourth
    // charge makes it explode.
    let mut engine =
        GameEngine::new(GraphBoard::new(1), GameConfig::default()).unwrap();
    let corner = Coordinate::new(1, 1);
    let far = Coordinate::new(-1, -1);

    for _ in 0..3 {
        engine.make_move(corner, Player::One).unwrap();
        engine.make_move(far, Player::Two).unwrap();
    }
    let before = engine.board().cell_at(corner).unwrap();
    assert_eq!(before.charge, 3);
    assert!(!before.is_unstable());

    engine.make_move(corner, Player::One).unwrap();

    let board = engine.board();
    assert_eq!(board.cell_at(corner).unwrap().charge, 0);
    for coord in [
        Coordinate::new(0, 0),
        Coordinate::new(0, 1),
        Coordinate::new(1, 0),
    ] {
        let cell = board.cell_at(coord).unwrap();
        assert_eq!(cell.state, Player::One.owned());
        assert_eq!(cell.charge, 1);
    }
    // The far corner is out of the blast radius.
    assert_eq!(board.cell_at(far).unwrap().state, Player::Two.owned());
}

#[test]
fn test_elimination_via_cascade_capture() {
    let config = GameConfig {
        win_condition: WinCondition::Elimination,
        ..GameConfig::default()
    };
    let mut engine = GameEngine::new(GraphBoard::new(1), config).unwrap();
    {
        let board = engine.board_mut();
        let attacker = board.lookup(Coordinate::new(1, 1)).unwrap();
        board.cell_mut(attacker).state = Player::One.owned();
        board.cell_mut(attacker).charge = 3;
        let victim = board.lookup(Coordinate::new(0, 0)).unwrap();
        board.cell_mut(victim).state = Player::Two.owned();
        board.cell_mut(victim).charge = 1;
    }

    // The explosion captures (0, 0), leaving player two with no cells.
    let result = engine.make_move(Coordinate::new(1, 1), Player::One).unwrap();
    assert_eq!(result.winner, Some(Player::One));
    assert_eq!(result.player_two_cells, 0);
    assert!(engine.is_game_over());
}

#[test]
fn test_rejected_moves_leave_no_trace() {
    let mut engine =
        GameEngine::new(GraphBoard::new(2), GameConfig::default()).unwrap();
    engine.make_move(Coordinate::new(0, 0), Player::One).unwrap();

    let before = snapshot(engine.board());
    let turn = engine.turn_count();

    // Out of bounds.
    let err = engine
        .make_move(Coordinate::new(9, 9), Player::Two)
        .unwrap_err();
    assert!(matches!(
        err,
        GameError::InvalidMove(MoveError::NoSuchCell(_))
    ));
    // Out of turn.
    let err = engine
        .make_move(Coordinate::new(1, 1), Player::One)
        .unwrap_err();
    assert!(matches!(
        err,
        GameError::InvalidMove(MoveError::NotYourTurn { .. })
    ));
    // Opponent-owned target.
    let err = engine
        .make_move(Coordinate::new(0, 0), Player::Two)
        .unwrap_err();
    assert!(matches!(
        err,
        GameError::InvalidMove(MoveError::WrongOwner(_))
    ));

    assert_eq!(snapshot(engine.board()), before);
    assert_eq!(engine.turn_count(), turn);
    assert_eq!(engine.current_player(), Player::Two);
}

#[test]
fn test_blocked_cells_survive_adjacent_explosions() {
    let mut engine =
        GameEngine::new(GraphBoard::new(1), GameConfig::default()).unwrap();
    let blocked = engine.board().lookup(Coordinate::new(0, 0)).unwrap();
    engine.board_mut().cell_mut(blocked).state = CellState::Blocked;
    let corner = engine.board().lookup(Coordinate::new(1, 1)).unwrap();
    {
        let cell = engine.board_mut().cell_mut(corner);
        cell.state = Player::One.owned();
        cell.charge = 3;
    }

    engine.make_move(Coordinate::new(1, 1), Player::One).unwrap();

    let cell = engine.board().cell(blocked);
    assert_eq!(cell.state, CellState::Blocked);
    assert_eq!(cell.charge, 0);
    // Non-blocked neighbors were still hit.
    let side = engine.board().cell_at(Coordinate::new(1, 0)).unwrap();
    assert_eq!(side.state, Player::One.owned());
    assert_eq!(side.charge, 1);
}

#[test]
fn test_random_games_end_at_the_turn_limit() {
    for seed in 0..30u64 {
        let config = GameConfig {
            turn_limit: 60,
            ..GameConfig::default()
        };
        let mut engine = GameEngine::new(GraphBoard::new(2), config).unwrap();
        let mut one = RandomSource::new(seed);
        let mut two = RandomSource::new(seed.wrapping_add(1));

        let result = run_match(&mut engine, &mut one, &mut two)
            .unwrap_or_else(|e| panic!("seed {seed} failed: {e}"));

        assert!(result.turns <= 60, "seed {seed} overran the limit");
        for id in 0..engine.board().count() {
            assert!(
                !engine.board().cell(id).is_unstable(),
                "seed {seed} left an unstable cell"
            );
        }
    }
}

#[test]
fn test_same_seed_replays_identically() {
    let play = |seed: u64| {
        let config = GameConfig {
            turn_limit: 40,
            stop_on_enemy: true,
            ..GameConfig::default()
        };
        let mut engine = GameEngine::new(GraphBoard::new(2), config).unwrap();
        let mut one = RandomSource::new(seed);
        let mut two = RandomSource::new(seed ^ 0xff);
        let result = run_match(&mut engine, &mut one, &mut two).unwrap();
        (result, snapshot(engine.board()))
    };
    assert_eq!(play(1234), play(1234));
}

#[test]
fn test_reset_then_replay_from_scratch() {
    let mut engine =
        GameEngine::new(GraphBoard::new(1), GameConfig::default()).unwrap();
    engine.make_move(Coordinate::new(0, 0), Player::One).unwrap();
    engine.make_move(Coordinate::new(1, 1), Player::Two).unwrap();

    engine.reset_game(None).unwrap();
    assert_eq!(engine.turn_count(), 0);
    assert_eq!(engine.count_cells(Player::One), 0);
    assert_eq!(engine.count_cells(Player::Two), 0);

    // The same opening is legal again.
    let result = engine.make_move(Coordinate::new(0, 0), Player::One).unwrap();
    assert_eq!(result.turns, 1);
}
