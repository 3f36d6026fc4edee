//! Word Bingo - a single-page bingo board game
//!
//! Core modules:
//! - `game`: Board generation, win detection, and the game state controller
//! - `storage`: Persistence port (LocalStorage on web, in-memory elsewhere)
//! - `words`: Build-time word pool

pub mod game;
pub mod storage;
pub mod words;

pub use game::{Cell, GameController, GamePhase, GameState, Grid, has_won};
pub use storage::StateStore;

/// Game configuration constants
pub mod consts {
    /// Board dimension - the grid is always GRID_SIZE x GRID_SIZE
    pub const GRID_SIZE: usize = 4;
}
