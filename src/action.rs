//! Move results as first-class values.
//!
//! The engine reports what a move did, not just whether it succeeded:
//! the view re-renders exactly the cells named in the delta.

use crate::position::Position;
use crate::types::{GameStatus, Player};
use serde::{Deserialize, Serialize};

/// Result of feeding one input to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The input violated a rule and was silently dropped: the game is
    /// already decided, or the target cell is occupied. No state
    /// changed, no turn passed, nothing to re-render.
    Ignored,
    /// The move was applied.
    Applied(MoveDelta),
}

impl MoveOutcome {
    /// Returns the delta if the move was applied.
    pub fn delta(self) -> Option<MoveDelta> {
        match self {
            MoveOutcome::Ignored => None,
            MoveOutcome::Applied(delta) => Some(delta),
        }
    }
}

/// State change produced by an applied move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveDelta {
    /// Player who made the move.
    pub player: Player,
    /// Cell the mark was placed on.
    pub placed: Position,
    /// Cell vacated by FIFO eviction, if the move was the player's
    /// fourth piece.
    pub evicted: Option<Position>,
    /// Status after the move.
    pub status: GameStatus,
    /// Player to move next. Unchanged from `player` when the move won
    /// the game.
    pub to_move: Player,
}

/// Error that can occur when applying a move.
///
/// Rule violations on in-range cells are deliberately not errors; they
/// are [`MoveOutcome::Ignored`]. Only an index outside the board is
/// rejected loudly, for callers that want to catch wiring bugs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The cell index is outside 0-8.
    #[display("Cell index {_0} is out of range (0-8)")]
    InvalidIndex(usize),
}

impl std::error::Error for MoveError {}
