//! Game state and persisted snapshot format
//!
//! All state that must survive a reload lives here. The JSON layout is
//! `{"grid": [[{"word": .., "selected": ..}, ..], ..], "winner": bool}` -
//! no versioning, so format changes are breaking.

use serde::{Deserialize, Serialize};

use super::grid::Grid;

/// Current phase of gameplay, derived from the winner flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Accepting cell toggles
    Playing,
    /// Board is frozen until reset
    Won,
}

/// Complete game state (serializable).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub grid: Grid,
    pub winner: bool,
}

impl GameState {
    /// Fresh state around a newly generated grid.
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            winner: false,
        }
    }

    pub fn phase(&self) -> GamePhase {
        if self.winner {
            GamePhase::Won
        } else {
            GamePhase::Playing
        }
    }

    /// Serialize for the persistence slot.
    pub fn to_json(&self) -> Option<String> {
        serde_json::to_string(self).ok()
    }

    /// Decode a persisted snapshot, trusting it only if the grid is exactly
    /// `size` x `size`. Corrupt encoding or a shape mismatch yields None -
    /// callers fall back to a fresh board, never an error.
    pub fn from_json(raw: &str, size: usize) -> Option<Self> {
        let state: Self = serde_json::from_str(raw).ok()?;
        if !state.grid.has_shape(size) {
            log::warn!("discarding saved game with unexpected board shape");
            return None;
        }
        Some(state)
    }
}
