//! Game state controller
//!
//! Owns the live `GameState` and the injected persistence port. Exactly two
//! events exist: toggle a cell and reset the board. Every state change is
//! mirrored to the port on the same step that produced it - no batching.

use anyhow::{Result, ensure};

use crate::consts::GRID_SIZE;
use crate::storage::StateStore;

use super::grid::Grid;
use super::state::{GamePhase, GameState};
use super::win::has_won;

pub struct GameController<S: StateStore> {
    state: GameState,
    words: Vec<String>,
    store: S,
}

impl<S: StateStore> GameController<S> {
    /// Build a controller, restoring a prior session from the store when a
    /// structurally valid snapshot exists, otherwise generating a fresh
    /// board from `words` with the given seed.
    ///
    /// Fails only on an empty word pool.
    pub fn new(store: S, words: &[&str], seed: u64) -> Result<Self> {
        ensure!(!words.is_empty(), "word pool must not be empty");
        let words: Vec<String> = words.iter().map(|w| w.to_string()).collect();

        let state = match store.read().and_then(|raw| GameState::from_json(&raw, GRID_SIZE)) {
            Some(state) => {
                log::info!("Restored saved game (winner: {})", state.winner);
                state
            }
            None => {
                log::info!("No usable saved game - generating fresh board (seed {seed})");
                GameState::new(Grid::generate(&words, GRID_SIZE, seed)?)
            }
        };

        let controller = Self { state, words, store };
        controller.persist();
        Ok(controller)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase()
    }

    /// Flip the cell at (row, col). No-op once the game is won; the board
    /// stays frozen until `reset`. Re-evaluates the win condition and
    /// persists the new state.
    pub fn toggle_cell(&mut self, row: usize, col: usize) {
        if self.state.winner {
            return;
        }
        if row >= GRID_SIZE || col >= GRID_SIZE {
            log::warn!("ignoring toggle outside the board: ({row}, {col})");
            return;
        }

        let grid = self.state.grid.with_toggled(row, col);
        let winner = has_won(&grid);
        self.state = GameState { grid, winner };
        if winner {
            log::info!("Bingo! Board frozen until reset");
        }
        self.persist();
    }

    /// Replace the whole state with a fresh board. Valid in any phase, and
    /// persisted immediately.
    pub fn reset(&mut self, seed: u64) -> Result<()> {
        self.state = GameState::new(Grid::generate(&self.words, GRID_SIZE, seed)?);
        log::info!("Board reset (seed {seed})");
        self.persist();
        Ok(())
    }

    /// Mirror the live state to the persistence slot. Write failures are
    /// the store's problem; the in-memory game keeps going either way.
    fn persist(&self) {
        if let Some(json) = self.state.to_json() {
            self.store.write(&json);
        }
    }
}
