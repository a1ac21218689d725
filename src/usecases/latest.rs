//! Use case: advance a board until it concludes or a generation cap is
//! reached.

use std::sync::Arc;

use derive_getters::Getters;
use derive_new::new;
use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::life::{Board, BoardId, Transition};
use crate::store::BoardService;
use crate::usecases::UseCaseError;

/// Input for [`GetLatestBoardState`].
#[derive(Debug, Clone, Copy, new)]
pub struct LatestBoardStateInput {
    /// The board to advance.
    pub id: BoardId,
    /// Upper bound on generations to compute. Zero or negative computes
    /// nothing.
    pub max_generations: i32,
}

/// Output of [`GetLatestBoardState`].
#[derive(Debug, Clone, Serialize, Getters)]
pub struct LatestBoardStateOutput {
    /// The whole board, including every generation computed on the way.
    board: Board,
}

/// Advances a board generation by generation, stopping early once it
/// concludes by extinction, stability, or oscillation.
pub struct GetLatestBoardState {
    boards: Arc<BoardService>,
    engine: Arc<dyn Transition>,
}

impl GetLatestBoardState {
    /// Creates the use case over the given board service and engine.
    pub fn new(boards: Arc<BoardService>, engine: Arc<dyn Transition>) -> Self {
        Self { boards, engine }
    }

    /// Steps the board up to `max_generations` times, checking for a
    /// conclusion after every step, then persists and returns the whole
    /// board.
    ///
    /// The board is persisted even when no generation was computed.
    ///
    /// # Errors
    ///
    /// Returns [`UseCaseError::NotFound`] if the board does not exist and
    /// [`UseCaseError::Store`] if the storage layer fails.
    #[instrument(skip(self, input), fields(board_id = %input.id, max_generations = input.max_generations))]
    pub async fn execute(
        &self,
        input: LatestBoardStateInput,
    ) -> Result<LatestBoardStateOutput, UseCaseError> {
        let mut board = self.boards.get_by_id(input.id).await?;

        for _ in 0..input.max_generations {
            let next = self.engine.next_state(board.current_state());
            board.add_state(next);

            if board.is_concluded() {
                info!(
                    generation = *board.current_state().generation(),
                    "Board concluded"
                );
                break;
            }
        }

        self.boards.update(&board).await?;

        debug!(generations = board.history().len(), "Latest state computed");
        Ok(LatestBoardStateOutput { board })
    }
}
