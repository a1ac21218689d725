//! Use case: create a board from a caller-supplied grid.

use std::sync::Arc;

use derive_getters::Getters;
use derive_new::new;
use serde::Serialize;
use tracing::{info, instrument};

use crate::life::{Board, BoardState, Grid};
use crate::store::BoardService;
use crate::usecases::UseCaseError;

/// Input for [`CreateBoard`].
#[derive(Debug, Clone, new)]
pub struct CreateBoardInput {
    /// Raw cell values, 0 for dead and 1 for alive. `None` when the
    /// request carried no grid at all.
    pub grid: Option<Vec<Vec<i32>>>,
}

/// Output of [`CreateBoard`].
#[derive(Debug, Clone, Serialize, Getters)]
pub struct CreateBoardOutput {
    /// The created board, one generation of history deep.
    board: Board,
}

/// Builds a generation-1 board from an initial grid and persists it.
pub struct CreateBoard {
    boards: Arc<BoardService>,
}

impl CreateBoard {
    /// Creates the use case over the given board service.
    pub fn new(boards: Arc<BoardService>) -> Self {
        Self { boards }
    }

    /// Validates the grid, builds the board, and persists it.
    ///
    /// # Errors
    ///
    /// Returns [`UseCaseError::MissingGrid`] when no grid was supplied,
    /// [`UseCaseError::Grid`] when the grid fails validation, and
    /// [`UseCaseError::Store`] when persistence fails.
    #[instrument(skip(self, input))]
    pub async fn execute(
        &self,
        input: CreateBoardInput,
    ) -> Result<CreateBoardOutput, UseCaseError> {
        let raw = input.grid.ok_or(UseCaseError::MissingGrid)?;
        let grid = Grid::try_from(raw)?;

        let board = Board::create(BoardState::initial(grid));
        self.boards.create(&board).await?;

        info!(
            board_id = %board.id(),
            rows = *board.rows(),
            columns = *board.columns(),
            "Board created"
        );
        Ok(CreateBoardOutput { board })
    }
}
