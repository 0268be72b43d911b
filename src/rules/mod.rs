//! Game rules.
//!
//! Pure functions over board state, separated from storage so the
//! engine and tests can evaluate positions independently.

pub mod win;

pub use win::check_winner;
