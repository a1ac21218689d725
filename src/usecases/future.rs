//! Use case: advance a board by a caller-chosen number of generations.

use std::sync::Arc;

use derive_getters::Getters;
use derive_new::new;
use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::life::{BoardId, BoardState, Transition};
use crate::store::BoardService;
use crate::usecases::UseCaseError;

/// Input for [`GetFutureBoardState`].
#[derive(Debug, Clone, Copy, new)]
pub struct FutureBoardStateInput {
    /// The board to advance.
    pub id: BoardId,
    /// How many generations to advance. Must be at least 1.
    pub generations: i32,
}

/// Output of [`GetFutureBoardState`].
#[derive(Debug, Clone, Serialize, Getters)]
pub struct FutureBoardStateOutput {
    /// The board that was advanced.
    id: BoardId,
    /// The state `generations` past the previous current state.
    state: BoardState,
}

/// Advances a board several generations in one request, reusing a stored
/// state when the target generation is already in the history.
pub struct GetFutureBoardState {
    boards: Arc<BoardService>,
    engine: Arc<dyn Transition>,
}

impl GetFutureBoardState {
    /// Creates the use case over the given board service and engine.
    pub fn new(boards: Arc<BoardService>, engine: Arc<dyn Transition>) -> Self {
        Self { boards, engine }
    }

    /// Loads the board and returns the state `generations` ahead.
    ///
    /// Intermediate states are appended to the history; persistence
    /// happens once, after the final state. When the target generation is
    /// already stored, it is returned unchanged with nothing recomputed.
    ///
    /// # Errors
    ///
    /// Returns [`UseCaseError::InvalidFutureState`] if `generations` is
    /// below 1, [`UseCaseError::NotFound`] if the board does not exist,
    /// and [`UseCaseError::Store`] if the storage layer fails.
    #[instrument(skip(self, input), fields(board_id = %input.id, generations = input.generations))]
    pub async fn execute(
        &self,
        input: FutureBoardStateInput,
    ) -> Result<FutureBoardStateOutput, UseCaseError> {
        if input.generations < 1 {
            return Err(UseCaseError::InvalidFutureState(input.generations));
        }

        let mut board = self.boards.get_by_id(input.id).await?;

        let target_generation = board
            .current_state()
            .generation()
            .saturating_add(input.generations);
        if let Some(existing) = self.boards.find_existing_state(&board, target_generation) {
            debug!(generation = target_generation, "Reusing stored generation");
            return Ok(FutureBoardStateOutput {
                id: *existing.id(),
                state: existing.current_state().clone(),
            });
        }

        for _ in 0..input.generations {
            let next = self.engine.next_state(board.current_state());
            board.add_state(next);
        }
        self.boards.update(&board).await?;

        let state = board.current_state().clone();
        info!(generation = *state.generation(), "Board advanced");
        Ok(FutureBoardStateOutput {
            id: input.id,
            state,
        })
    }
}
