//! Transition rule for advancing a board by one generation.

use std::ops::Range;

use tracing::{debug, instrument};

use crate::life::state::BoardState;
use crate::life::types::{CellState, Grid};

/// Live-neighbor count at which a dead cell comes to life.
const REPRODUCTION_COUNT: usize = 3;
/// Fewest live neighbors a live cell needs to survive.
const SURVIVAL_MIN: usize = 2;
/// Most live neighbors a live cell can have and still survive.
const SURVIVAL_MAX: usize = 3;
/// Row count at which stepping fans out over worker threads.
const PARALLEL_ROW_THRESHOLD: usize = 32;

/// Computes the next generation from the current one.
///
/// Implementations are pure: the input state is read-only and the result
/// carries `current.generation() + 1`.
pub trait Transition: Send + Sync {
    /// Returns the successor of `current`, one generation later.
    fn next_state(&self, current: &BoardState) -> BoardState;
}

/// Conway's rule on a bounded grid.
///
/// A dead cell comes to life on exactly three live neighbors; a live cell
/// survives on two or three. Cells beyond the edge count as dead, so
/// patterns interact with the boundary rather than wrapping around.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConwayEngine;

impl ConwayEngine {
    /// Creates the engine.
    pub fn new() -> Self {
        Self
    }

    fn next_cell(grid: &Grid, row: usize, col: usize) -> CellState {
        let alive = grid.cell(row, col).is_alive();
        let neighbors = grid.live_neighbors(row, col);

        let survives = alive && (SURVIVAL_MIN..=SURVIVAL_MAX).contains(&neighbors);
        let revives = !alive && neighbors == REPRODUCTION_COUNT;

        if survives || revives {
            CellState::Alive
        } else {
            CellState::Dead
        }
    }

    /// Fills `out` with the successors of the given row range.
    fn step_rows(grid: &Grid, rows: Range<usize>, cols: usize, out: &mut [Vec<CellState>]) {
        for (target, row) in out.iter_mut().zip(rows) {
            for col in 0..cols {
                target.push(Self::next_cell(grid, row, col));
            }
        }
    }

    /// Worker threads to use for a grid of `rows` rows.
    fn worker_count(rows: usize) -> usize {
        if rows < PARALLEL_ROW_THRESHOLD {
            return 1;
        }
        std::thread::available_parallelism()
            .map_or(1, |n| n.get())
            .min(rows)
    }
}

impl Transition for ConwayEngine {
    #[instrument(skip(self, current), fields(generation = *current.generation()))]
    fn next_state(&self, current: &BoardState) -> BoardState {
        let grid = current.grid();
        let rows = grid.rows();
        let cols = grid.columns();

        let mut cells: Vec<Vec<CellState>> =
            (0..rows).map(|_| Vec::with_capacity(cols)).collect();

        let workers = Self::worker_count(rows);
        if workers <= 1 {
            Self::step_rows(grid, 0..rows, cols, &mut cells);
        } else {
            // Workers write disjoint chunks of output rows and only read
            // the previous grid.
            let chunk = rows.div_ceil(workers);
            std::thread::scope(|scope| {
                for (index, slice) in cells.chunks_mut(chunk).enumerate() {
                    let start = index * chunk;
                    scope.spawn(move || {
                        Self::step_rows(grid, start..start + slice.len(), cols, slice);
                    });
                }
            });
        }

        debug!(rows, cols, workers, "Computed next generation");
        current.next_with(Grid::new(cells))
    }
}

impl Grid {
    /// Counts live cells in the Moore neighborhood of `(row, col)`.
    ///
    /// Neighbors beyond the grid bounds count as dead.
    pub fn live_neighbors(&self, row: usize, col: usize) -> usize {
        let mut count = 0;
        for dr in [-1isize, 0, 1] {
            for dc in [-1isize, 0, 1] {
                if dr == 0 && dc == 0 {
                    continue;
                }
                let Some(r) = row.checked_add_signed(dr) else {
                    continue;
                };
                let Some(c) = col.checked_add_signed(dc) else {
                    continue;
                };
                if r >= self.rows() || c >= self.columns() {
                    continue;
                }
                if self.cell(r, c).is_alive() {
                    count += 1;
                }
            }
        }
        count
    }
}
