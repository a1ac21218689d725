//! Core domain types for the Game of Life grid.

use derive_more::{Display, Error};
use serde::de::{Deserializer, Error as DeError};
use serde::{Deserialize, Serialize, Serializer};

/// State of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellState {
    /// Cell is dead.
    Dead = 0,
    /// Cell is alive.
    Alive = 1,
}

impl CellState {
    /// Returns true if the cell is alive.
    pub fn is_alive(self) -> bool {
        matches!(self, CellState::Alive)
    }
}

// Cells travel as bare integers (0/1) in both the API and the stored
// history, so the serde forms are written by hand instead of derived.
impl Serialize for CellState {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(*self as u8)
    }
}

impl<'de> Deserialize<'de> for CellState {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match i64::deserialize(deserializer)? {
            0 => Ok(CellState::Dead),
            1 => Ok(CellState::Alive),
            other => Err(D::Error::custom(format!(
                "invalid cell value {other}, expected 0 or 1"
            ))),
        }
    }
}

/// Errors produced when converting raw input into a [`Grid`].
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum GridError {
    /// Input had no rows, or its first row had no columns.
    #[display("Grid must have at least one row and one column")]
    Empty,
    /// A cell held a value other than 0 or 1.
    #[display(
        "Invalid cell value {} at row {}, column {}. It must be 0 (dead) or 1 (alive)",
        value,
        row,
        col
    )]
    InvalidCellValue {
        /// Row index of the offending cell.
        row: usize,
        /// Column index of the offending cell.
        col: usize,
        /// The rejected value.
        value: i32,
    },
}

/// Rectangular matrix of cell states.
///
/// The column count is taken from the first row. Remaining rows are not
/// cross-checked against it, so a jagged input converts successfully and
/// only fails once the simulation indexes past the end of a short row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grid(Vec<Vec<CellState>>);

impl Grid {
    /// Creates a grid from already-typed cells.
    ///
    /// Dimensions are whatever the nested shape carries; use the
    /// `TryFrom<Vec<Vec<i32>>>` conversion for validated caller input.
    pub fn new(cells: Vec<Vec<CellState>>) -> Self {
        Self(cells)
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.0.len()
    }

    /// Number of columns, taken from the first row.
    pub fn columns(&self) -> usize {
        self.0.first().map_or(0, Vec::len)
    }

    /// Cell at the given position.
    ///
    /// # Panics
    ///
    /// Panics if the position lies outside the grid.
    pub fn cell(&self, row: usize, col: usize) -> CellState {
        self.0[row][col]
    }

    /// Rows of cells as a slice.
    pub fn cells(&self) -> &[Vec<CellState>] {
        &self.0
    }

    /// Returns true if every cell is dead.
    pub fn is_lifeless(&self) -> bool {
        self.0.iter().flatten().all(|cell| !cell.is_alive())
    }
}

impl TryFrom<Vec<Vec<i32>>> for Grid {
    type Error = GridError;

    fn try_from(raw: Vec<Vec<i32>>) -> Result<Self, Self::Error> {
        if raw.is_empty() || raw[0].is_empty() {
            return Err(GridError::Empty);
        }

        let mut cells = Vec::with_capacity(raw.len());
        for (row, values) in raw.into_iter().enumerate() {
            let mut converted = Vec::with_capacity(values.len());
            for (col, value) in values.into_iter().enumerate() {
                let cell = match value {
                    0 => CellState::Dead,
                    1 => CellState::Alive,
                    other => {
                        return Err(GridError::InvalidCellValue {
                            row,
                            col,
                            value: other,
                        });
                    }
                };
                converted.push(cell);
            }
            cells.push(converted);
        }

        Ok(Self(cells))
    }
}
