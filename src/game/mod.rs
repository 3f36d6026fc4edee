//! Core game logic
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only (board shuffles replay exactly under a fixed seed)
//! - No rendering or platform dependencies
//! - Win detection is a pure function over an immutable grid snapshot

pub mod controller;
pub mod grid;
pub mod state;
pub mod win;

pub use controller::GameController;
pub use grid::{Cell, Grid};
pub use state::{GamePhase, GameState};
pub use win::has_won;
