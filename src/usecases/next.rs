//! Use case: advance a board by exactly one generation.

use std::sync::Arc;

use derive_getters::Getters;
use derive_new::new;
use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::life::{BoardId, BoardState, Transition};
use crate::store::BoardService;
use crate::usecases::UseCaseError;

/// Input for [`GetNextBoardState`].
#[derive(Debug, Clone, Copy, new)]
pub struct NextBoardStateInput {
    /// The board to advance.
    pub id: BoardId,
}

/// Output of [`GetNextBoardState`].
#[derive(Debug, Clone, Serialize, Getters)]
pub struct NextBoardStateOutput {
    /// The board that was advanced.
    id: BoardId,
    /// The state one generation past the previous current state.
    state: BoardState,
}

/// Advances a board one generation, reusing a stored state when the
/// target generation is already in the history.
pub struct GetNextBoardState {
    boards: Arc<BoardService>,
    engine: Arc<dyn Transition>,
}

impl GetNextBoardState {
    /// Creates the use case over the given board service and engine.
    pub fn new(boards: Arc<BoardService>, engine: Arc<dyn Transition>) -> Self {
        Self { boards, engine }
    }

    /// Loads the board and returns its next state.
    ///
    /// When the next generation is already stored, it is returned without
    /// recomputation or persistence. Otherwise the engine runs once, the
    /// new state is appended, and the board is persisted.
    ///
    /// # Errors
    ///
    /// Returns [`UseCaseError::NotFound`] if the board does not exist and
    /// [`UseCaseError::Store`] if the storage layer fails.
    #[instrument(skip(self, input), fields(board_id = %input.id))]
    pub async fn execute(
        &self,
        input: NextBoardStateInput,
    ) -> Result<NextBoardStateOutput, UseCaseError> {
        let mut board = self.boards.get_by_id(input.id).await?;

        let target = board.current_state().generation().saturating_add(1);
        if let Some(existing) = self.boards.find_existing_state(&board, target) {
            debug!(generation = target, "Reusing stored generation");
            return Ok(NextBoardStateOutput {
                id: *existing.id(),
                state: existing.current_state().clone(),
            });
        }

        let next = self.engine.next_state(board.current_state());
        board.add_state(next.clone());
        self.boards.update(&board).await?;

        info!(generation = *next.generation(), "Board advanced");
        Ok(NextBoardStateOutput {
            id: input.id,
            state: next,
        })
    }
}
