//! Serializable view of the game state.

use crate::engine::GameEngine;
use crate::types::{Board, GameStatus, Player};
use serde::{Deserialize, Serialize};

/// Point-in-time state capture for the view layer.
///
/// Carries everything the engine-to-view contract names: each cell's
/// occupant, the player to move, and the status. Views that prefer
/// diffs use the [`MoveDelta`](crate::MoveDelta) returned per move
/// instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// The board.
    pub board: Board,
    /// Player to move.
    pub to_move: Player,
    /// Game status.
    pub status: GameStatus,
}

impl GameSnapshot {
    /// Returns true if the game is over.
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Returns the winner, if the game is won.
    pub fn winner(&self) -> Option<Player> {
        match self.status {
            GameStatus::InProgress => None,
            GameStatus::Won(player) => Some(player),
        }
    }

    /// Returns a status string for display.
    pub fn status_string(&self) -> String {
        match self.status {
            GameStatus::InProgress => format!("Player {} to move", self.to_move),
            GameStatus::Won(winner) => format!("Player {} wins!", winner),
        }
    }
}

impl From<&GameEngine> for GameSnapshot {
    fn from(engine: &GameEngine) -> Self {
        Self {
            board: engine.board().clone(),
            to_move: engine.to_move(),
            status: engine.status(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_snapshot() {
        let snapshot = GameEngine::new().snapshot();
        assert!(!snapshot.is_over());
        assert_eq!(snapshot.winner(), None);
        assert_eq!(snapshot.status_string(), "Player X to move");
    }
}
