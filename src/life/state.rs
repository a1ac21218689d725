//! A single generation of a board: the grid plus its generation number.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

use crate::life::types::Grid;

/// Lowest generation number a board state can carry. Fresh boards start here.
pub const GENERATION_MIN: i32 = 1;

/// Error returned when a generation below [`GENERATION_MIN`] is supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display(
    "Generation value {} is invalid. It must be greater than or equal to {}",
    generation,
    GENERATION_MIN
)]
pub struct InvalidGeneration {
    /// The rejected generation value.
    pub generation: i32,
}

/// One computed generation of the board.
///
/// Immutable once constructed; advancing the simulation produces a new
/// value via [`BoardState::next_with`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct BoardState {
    /// The grid for this generation.
    grid: Grid,
    /// Generation number, starting at [`GENERATION_MIN`].
    generation: i32,
}

impl BoardState {
    /// Creates a board state with an explicit generation number.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidGeneration`] if `generation` is below
    /// [`GENERATION_MIN`].
    pub fn new(grid: Grid, generation: i32) -> Result<Self, InvalidGeneration> {
        if generation < GENERATION_MIN {
            return Err(InvalidGeneration { generation });
        }
        Ok(Self { grid, generation })
    }

    /// Creates the first generation for a fresh board.
    pub fn initial(grid: Grid) -> Self {
        Self {
            grid,
            generation: GENERATION_MIN,
        }
    }

    /// Builds the successor state carrying `grid` one generation later.
    pub fn next_with(&self, grid: Grid) -> Self {
        Self {
            grid,
            generation: self.generation + 1,
        }
    }
}
