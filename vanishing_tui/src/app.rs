//! Application state for the TUI.

use crossterm::event::KeyCode;
use tracing::{debug, info};
use vanishing_tictactoe::{GameEngine, GameStatus, MoveOutcome};

/// View-model wrapping the engine.
///
/// Translates key presses into engine inputs and keeps a transient
/// hint line for inputs the engine ignored.
pub struct App {
    engine: GameEngine,
    hint: Option<String>,
}

impl App {
    /// Creates the app with a fresh game.
    pub fn new() -> Self {
        Self {
            engine: GameEngine::new(),
            hint: None,
        }
    }

    /// Returns the engine for rendering.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Returns the transient hint line, if any.
    pub fn hint(&self) -> Option<&str> {
        self.hint.as_deref()
    }

    /// Status line for the header.
    pub fn status_line(&self) -> String {
        self.engine.snapshot().status_string()
    }

    /// Handles a key press. Digits 1-9 map to cells 0-8, matching the
    /// hints rendered in empty squares.
    pub fn handle_key(&mut self, code: KeyCode) {
        let KeyCode::Char(c @ '1'..='9') = code else {
            return;
        };
        let index = c as usize - '1' as usize;

        // Indices from the key map are always in range.
        let outcome = self.engine.apply_move(index).expect("digit key in range");
        match outcome {
            MoveOutcome::Applied(delta) => {
                debug!(?delta, "Move applied");
                self.hint = delta.evicted.map(|old| format!("{} vanished", old.label()));
                if let GameStatus::Won(winner) = delta.status {
                    info!(%winner, "Game over");
                }
            }
            MoveOutcome::Ignored => {
                self.hint = Some(if self.engine.status().is_over() {
                    "Game over - press r to play again".to_string()
                } else {
                    format!("Cell {} is taken", index + 1)
                });
            }
        }
    }

    /// Restarts the game.
    pub fn restart(&mut self) {
        info!("Restarting game");
        self.engine.reset();
        self.hint = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vanishing_tictactoe::Player;

    #[test]
    fn test_digit_keys_map_to_cells() {
        let mut app = App::new();
        app.handle_key(KeyCode::Char('5'));
        assert_eq!(app.engine().to_move(), Player::O);
        assert_eq!(app.engine().board().occupied(), 1);
    }

    #[test]
    fn test_ignored_input_sets_hint() {
        let mut app = App::new();
        app.handle_key(KeyCode::Char('1'));
        app.handle_key(KeyCode::Char('1'));
        assert_eq!(app.hint(), Some("Cell 1 is taken"));
    }

    #[test]
    fn test_non_digit_keys_are_ignored() {
        let mut app = App::new();
        app.handle_key(KeyCode::Char('x'));
        app.handle_key(KeyCode::Up);
        assert_eq!(app.engine().board().occupied(), 0);
    }

    #[test]
    fn test_restart_clears_hint() {
        let mut app = App::new();
        app.handle_key(KeyCode::Char('1'));
        app.handle_key(KeyCode::Char('1'));
        app.restart();
        assert_eq!(app.hint(), None);
        assert_eq!(app.engine().board().occupied(), 0);
    }
}
