//! Board grid and seeded generation
//!
//! A grid is a fixed N x N block of word cells, filled row-major from a
//! uniformly shuffled word pool. Shuffles are driven by a seeded Pcg32 so a
//! given seed always reproduces the same board.

use anyhow::{Result, ensure};
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

/// A single board cell. The word never changes once placed; `selected` is
/// the only mutable field, flipped by user toggles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub word: String,
    pub selected: bool,
}

/// An N x N board of cells, row-major.
///
/// Serialized transparently as a bare array-of-arrays so the on-disk format
/// stays `[[{"word": .., "selected": ..}, ..], ..]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grid {
    rows: Vec<Vec<Cell>>,
}

impl Grid {
    /// Generate a fresh board from a word pool.
    ///
    /// The pool is shuffled with a uniform Fisher-Yates shuffle, then cells
    /// are filled row-major, cycling through the shuffled pool with
    /// wraparound when the pool holds fewer than `size * size` words. Every
    /// cell starts unselected.
    ///
    /// An empty pool is a configuration error and fails fast.
    pub fn generate(pool: &[String], size: usize, seed: u64) -> Result<Self> {
        ensure!(
            !pool.is_empty(),
            "word pool is empty - cannot generate a {size}x{size} board"
        );

        let mut shuffled: Vec<&String> = pool.iter().collect();
        let mut rng = Pcg32::seed_from_u64(seed);
        shuffled.shuffle(&mut rng);

        let rows = (0..size)
            .map(|row| {
                (0..size)
                    .map(|col| Cell {
                        word: shuffled[(row * size + col) % shuffled.len()].clone(),
                        selected: false,
                    })
                    .collect()
            })
            .collect();

        Ok(Self { rows })
    }

    /// Number of rows (boards are square, so also the number of columns).
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// Cell at (row, col). Panics if out of bounds; callers bounds-check
    /// against `size()` first.
    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        &self.rows[row][col]
    }

    /// Iterate rows in order.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.rows.iter().map(|r| r.as_slice())
    }

    /// Copy-on-write toggle: a new grid identical to this one except the
    /// cell at (row, col) has `selected` flipped. The original is untouched,
    /// so historical snapshots never alias live state.
    pub fn with_toggled(&self, row: usize, col: usize) -> Self {
        let mut rows = self.rows.clone();
        rows[row][col].selected = !rows[row][col].selected;
        Self { rows }
    }

    /// True if the grid is exactly `size` rows of exactly `size` cells.
    /// Restored snapshots must pass this before being trusted.
    pub fn has_shape(&self, size: usize) -> bool {
        self.rows.len() == size && self.rows.iter().all(|r| r.len() == size)
    }

    /// Build a grid directly from rows.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Self {
        Self { rows }
    }
}
