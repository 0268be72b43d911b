//! The game-state machine.

use crate::action::{MoveDelta, MoveError, MoveOutcome};
use crate::position::Position;
use crate::queue::PieceQueue;
use crate::rules::check_winner;
use crate::snapshot::GameSnapshot;
use crate::types::{Board, GameStatus, Player, Square};
use tracing::{debug, instrument};

/// State machine for vanishing tic-tac-toe.
///
/// Owns the board, the turn, and one [`PieceQueue`] per player. The
/// only mutating entry points are [`GameEngine::apply_move`] (and its
/// typed twin [`GameEngine::play`]) and [`GameEngine::reset`]; every
/// invalid input leaves the state untouched.
///
/// The engine is synchronous and single-threaded. Callers that share
/// one engine across threads must serialize access externally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    board: Board,
    to_move: Player,
    pieces: [PieceQueue; 2],
    status: GameStatus,
}

impl GameEngine {
    /// Creates a fresh game: empty board, X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
            pieces: [PieceQueue::new(), PieceQueue::new()],
            status: GameStatus::InProgress,
        }
    }

    /// Applies a move by raw cell index (0-8).
    ///
    /// This is the view-facing entry point: the view forwards click
    /// indices without interpreting them.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::InvalidIndex`] for indices outside 0-8.
    /// In-range rule violations are not errors; they come back as
    /// `Ok(MoveOutcome::Ignored)`.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, index: usize) -> Result<MoveOutcome, MoveError> {
        let Some(pos) = Position::from_index(index) else {
            return Err(MoveError::InvalidIndex(index));
        };
        Ok(self.play(pos))
    }

    /// Applies a move at a typed position.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn play(&mut self, pos: Position) -> MoveOutcome {
        if self.status.is_over() {
            debug!("Ignoring input: game already decided");
            return MoveOutcome::Ignored;
        }
        // Occupied cells are no-ops whichever player owns them.
        // Clicking one's own piece never removes it; removal is
        // FIFO-driven only.
        if !self.board.is_empty(pos) {
            debug!(%pos, "Ignoring input: cell occupied");
            return MoveOutcome::Ignored;
        }

        let player = self.to_move;
        self.board.set(pos, Square::Occupied(player));
        let evicted = self.pieces[player.index()].push(pos);
        if let Some(old) = evicted {
            self.board.set(old, Square::Empty);
            debug!(%old, "Evicted oldest piece");
        }

        // Eviction only empties a cell, so any line the scan finds was
        // completed by this placement and belongs to the mover.
        if let Some(winner) = check_winner(&self.board) {
            self.status = GameStatus::Won(winner);
            debug!(%winner, "Game won");
        } else {
            self.to_move = player.opponent();
        }

        MoveOutcome::Applied(MoveDelta {
            player,
            placed: pos,
            evicted,
            status: self.status,
            to_move: self.to_move,
        })
    }

    /// Restarts the game: empty board, empty queues, X to move.
    ///
    /// Idempotent; safe to call in any state.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::new();
        debug!("Game reset");
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move.
    ///
    /// After a winning move this stays on the winner; the turn only
    /// alternates on moves that keep the game in progress.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Iterates a player's live pieces, oldest first.
    pub fn pieces(&self, player: Player) -> impl Iterator<Item = Position> + '_ {
        self.pieces[player.index()].iter()
    }

    /// The cell that will vanish if the current player places a fourth
    /// piece, or `None` while they are below capacity or the game is
    /// over.
    pub fn next_eviction(&self) -> Option<Position> {
        if self.status.is_over() {
            return None;
        }
        let queue = &self.pieces[self.to_move.index()];
        if queue.is_full() { queue.oldest() } else { None }
    }

    /// Captures the current state for the view.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::from(self)
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_is_fresh() {
        let engine = GameEngine::new();
        assert_eq!(engine.to_move(), Player::X);
        assert_eq!(engine.status(), GameStatus::InProgress);
        assert_eq!(engine.board().occupied(), 0);
    }

    #[test]
    fn test_invalid_index_rejected_without_state_change() {
        let mut engine = GameEngine::new();
        let result = engine.apply_move(9);
        assert_eq!(result, Err(MoveError::InvalidIndex(9)));
        assert_eq!(engine, GameEngine::new());
    }

    #[test]
    fn test_applied_move_places_and_passes_turn() {
        let mut engine = GameEngine::new();
        let outcome = engine.apply_move(4).unwrap();
        let delta = outcome.delta().unwrap();
        assert_eq!(delta.player, Player::X);
        assert_eq!(delta.placed, Position::Center);
        assert_eq!(delta.evicted, None);
        assert_eq!(delta.to_move, Player::O);
        assert_eq!(engine.to_move(), Player::O);
    }

    #[test]
    fn test_occupied_cell_is_silent_noop() {
        let mut engine = GameEngine::new();
        engine.apply_move(4).unwrap();
        let before = engine.clone();
        assert_eq!(engine.apply_move(4).unwrap(), MoveOutcome::Ignored);
        assert_eq!(engine, before);
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut engine = GameEngine::new();
        engine.apply_move(0).unwrap();
        engine.apply_move(4).unwrap();
        engine.reset();
        assert_eq!(engine, GameEngine::new());
        engine.reset();
        assert_eq!(engine, GameEngine::new());
    }

    #[test]
    fn test_next_eviction_tracks_current_player() {
        let mut engine = GameEngine::new();
        assert_eq!(engine.next_eviction(), None);
        // X: 0, 1, 3 with O interleaved on 2, 5. No line completes.
        for index in [0, 2, 1, 5, 3] {
            engine.apply_move(index).unwrap();
        }
        // O to move with two pieces: no eviction pending.
        assert_eq!(engine.to_move(), Player::O);
        assert_eq!(engine.next_eviction(), None);
        engine.apply_move(7).unwrap();
        // X at capacity: the oldest piece (cell 0) is on the block.
        assert_eq!(engine.next_eviction(), Some(Position::TopLeft));
    }
}
