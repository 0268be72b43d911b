//! Vanishing tic-tac-toe game engine.
//!
//! A tic-tac-toe variant where each player keeps at most three pieces
//! on the board: placing a fourth evicts that player's oldest surviving
//! piece, first in, first out. The board can never stall full, so there
//! is no draw.
//!
//! The crate is the game core only: a synchronous state machine with no
//! I/O. A view layer (such as the `vanishing_tui` frontend in this
//! workspace) renders [`GameSnapshot`]s or [`MoveDelta`]s and forwards
//! raw cell indices and restart requests.
//!
//! # Example
//!
//! ```
//! use vanishing_tictactoe::{GameEngine, GameStatus, MoveOutcome, Player};
//!
//! let mut engine = GameEngine::new();
//!
//! // X takes the center; the turn passes to O.
//! let outcome = engine.apply_move(4)?;
//! assert!(matches!(outcome, MoveOutcome::Applied(_)));
//! assert_eq!(engine.to_move(), Player::O);
//!
//! // O clicking the same cell is a silent no-op.
//! assert_eq!(engine.apply_move(4)?, MoveOutcome::Ignored);
//! assert_eq!(engine.status(), GameStatus::InProgress);
//! # Ok::<(), vanishing_tictactoe::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod engine;
mod position;
mod queue;
pub mod rules;
mod snapshot;
mod types;

pub use action::{MoveDelta, MoveError, MoveOutcome};
pub use engine::GameEngine;
pub use position::Position;
pub use queue::PieceQueue;
pub use snapshot::GameSnapshot;
pub use types::{Board, GameStatus, Player, Square};
