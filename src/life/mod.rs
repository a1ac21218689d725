//! Game of Life domain: grids, generations, the board aggregate, and the
//! transition rule.

mod board;
mod rules;
mod state;
mod types;

pub use board::{Board, BoardId};
pub use rules::{ConwayEngine, Transition};
pub use state::{BoardState, GENERATION_MIN, InvalidGeneration};
pub use types::{CellState, Grid, GridError};
