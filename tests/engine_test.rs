//! Integration tests for the vanishing tic-tac-toe engine.

use vanishing_tictactoe::{
    GameEngine, GameStatus, MoveError, MoveOutcome, PieceQueue, Player, Position,
};

/// Plays a scripted sequence, panicking on invalid indices.
fn play_all(engine: &mut GameEngine, indices: &[usize]) {
    for &index in indices {
        engine.apply_move(index).expect("index in range");
    }
}

#[test]
fn test_diagonal_win() {
    let mut engine = GameEngine::new();
    // X takes 0, 4, 8; O interleaves 1, 2.
    play_all(&mut engine, &[0, 1, 4, 2]);
    assert_eq!(engine.status(), GameStatus::InProgress);

    let delta = engine.apply_move(8).unwrap().delta().expect("valid move");
    assert_eq!(delta.status, GameStatus::Won(Player::X));
    assert_eq!(engine.status(), GameStatus::Won(Player::X));
    // No turn switch after a winning move.
    assert_eq!(delta.to_move, Player::X);
    assert_eq!(engine.to_move(), Player::X);
}

#[test]
fn test_fourth_piece_evicts_oldest() {
    let mut engine = GameEngine::new();
    // X: 0, 1, 3. O: 4, 5, 6. No line completes.
    play_all(&mut engine, &[0, 4, 1, 5, 3, 6]);

    // X's fourth piece at 2 evicts the piece at 0.
    let delta = engine.apply_move(2).unwrap().delta().expect("valid move");
    assert_eq!(delta.placed, Position::TopRight);
    assert_eq!(delta.evicted, Some(Position::TopLeft));
    assert!(engine.board().is_empty(Position::TopLeft));

    let live: Vec<_> = engine.pieces(Player::X).collect();
    assert_eq!(
        live,
        vec![Position::TopCenter, Position::MiddleLeft, Position::TopRight]
    );
}

#[test]
fn test_win_is_checked_after_eviction() {
    let mut engine = GameEngine::new();
    // X holds 0, 1, 3; the fourth piece at 2 would complete the top row
    // were cell 0 not evicted in the same move.
    play_all(&mut engine, &[0, 4, 1, 5, 3, 6, 2]);

    assert_eq!(engine.status(), GameStatus::InProgress);
    assert_eq!(engine.to_move(), Player::O);
}

#[test]
fn test_opponent_cell_click_is_pure_noop() {
    let mut engine = GameEngine::new();
    engine.apply_move(0).unwrap();
    let before = engine.clone();

    // O cannot play into X's cell.
    assert_eq!(engine.apply_move(0).unwrap(), MoveOutcome::Ignored);
    assert_eq!(engine, before);
    assert_eq!(engine.to_move(), Player::O);
}

#[test]
fn test_own_cell_click_triggers_no_eviction() {
    let mut engine = GameEngine::new();
    // X: 0, 1, 3 — at capacity. O: 4, 5.
    play_all(&mut engine, &[0, 4, 1, 5, 3, 6]);
    let before = engine.clone();

    // X clicking an existing X piece removes nothing.
    assert_eq!(engine.apply_move(1).unwrap(), MoveOutcome::Ignored);
    assert_eq!(engine, before);
    assert_eq!(engine.pieces(Player::X).count(), 3);
}

#[test]
fn test_decided_game_ignores_every_cell() {
    let mut engine = GameEngine::new();
    play_all(&mut engine, &[0, 1, 4, 2, 8]);
    assert_eq!(engine.status(), GameStatus::Won(Player::X));
    let frozen = engine.clone();

    for index in 0..9 {
        assert_eq!(engine.apply_move(index).unwrap(), MoveOutcome::Ignored);
    }
    assert_eq!(engine, frozen);
}

#[test]
fn test_reset_recovers_from_any_state() {
    let mut engine = GameEngine::new();
    play_all(&mut engine, &[0, 1, 4, 2, 8]);
    assert_eq!(engine.status(), GameStatus::Won(Player::X));

    engine.reset();
    assert_eq!(engine.status(), GameStatus::InProgress);
    assert_eq!(engine.to_move(), Player::X);
    assert_eq!(engine.board().occupied(), 0);
    assert_eq!(engine.pieces(Player::X).count(), 0);
    assert_eq!(engine.pieces(Player::O).count(), 0);
}

#[test]
fn test_invalid_index_is_an_error_not_a_noop() {
    let mut engine = GameEngine::new();
    assert_eq!(engine.apply_move(9), Err(MoveError::InvalidIndex(9)));
    assert_eq!(engine.apply_move(100), Err(MoveError::InvalidIndex(100)));
    assert_eq!(engine, GameEngine::new());
}

#[test]
fn test_piece_counts_never_exceed_capacity() {
    let mut engine = GameEngine::new();
    // Sweep the board repeatedly; occupied and decided inputs fall out
    // as no-ops, the rest churn the queues through many evictions.
    for index in (0..9).cycle().take(60) {
        if engine.status().is_over() {
            engine.reset();
        }
        engine.apply_move(index).unwrap();

        for player in [Player::X, Player::O] {
            assert!(engine.pieces(player).count() <= PieceQueue::CAPACITY);
        }
        assert!(engine.board().occupied() <= 2 * PieceQueue::CAPACITY);
    }
}

#[test]
fn test_board_agrees_with_queues() {
    let mut engine = GameEngine::new();
    play_all(&mut engine, &[0, 4, 1, 5, 3, 6, 2, 7]);

    let x_cells: Vec<_> = engine.pieces(Player::X).collect();
    let o_cells: Vec<_> = engine.pieces(Player::O).collect();
    for pos in Position::ALL {
        let in_x = x_cells.contains(&pos);
        let in_o = o_cells.contains(&pos);
        assert!(!(in_x && in_o));
        assert_eq!(engine.board().is_empty(pos), !in_x && !in_o);
    }
}

#[test]
fn test_snapshot_carries_view_contract() {
    let mut engine = GameEngine::new();
    engine.apply_move(4).unwrap();

    let json = serde_json::to_value(engine.snapshot()).unwrap();
    assert_eq!(json["to_move"], "O");
    assert_eq!(json["status"], "InProgress");
    assert_eq!(json["board"]["squares"][4], serde_json::json!({ "Occupied": "X" }));

    let snapshot = engine.snapshot();
    assert_eq!(snapshot.status_string(), "Player O to move");
    assert!(!snapshot.is_over());
}
