//! Board aggregate: identity, dimensions, and the generation history.

use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use uuid::Uuid;

use crate::life::state::BoardState;

/// Unique identifier for a board.
pub type BoardId = Uuid;

/// History length below which oscillation detection stays quiet.
const OSCILLATION_MIN_HISTORY: usize = 4;

/// A board: identity plus the full ordered generation history.
///
/// Dimensions are fixed at creation and every state in the history shares
/// them. The aggregate is persisted and reloaded as one unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, new)]
pub struct Board {
    /// Board identity.
    id: BoardId,
    /// Row count, fixed at creation.
    rows: usize,
    /// Column count, fixed at creation.
    columns: usize,
    /// Every computed generation, oldest first.
    history: Vec<BoardState>,
}

impl Board {
    /// Creates a board around its first generation, assigning a fresh id.
    ///
    /// Dimensions are taken from the initial state's grid.
    #[instrument(skip(initial))]
    pub fn create(initial: BoardState) -> Self {
        let id = Uuid::new_v4();
        let rows = initial.grid().rows();
        let columns = initial.grid().columns();
        debug!(board_id = %id, rows, columns, "Creating board");
        Self {
            id,
            rows,
            columns,
            history: vec![initial],
        }
    }

    /// Appends a computed generation to the history.
    ///
    /// Callers append generations in increasing order; the chain is not
    /// re-validated here.
    pub fn add_state(&mut self, state: BoardState) {
        self.history.push(state);
    }

    /// The most recent generation.
    ///
    /// # Panics
    ///
    /// Panics if the history is empty, which cannot happen for a board
    /// built through [`Board::create`].
    pub fn current_state(&self) -> &BoardState {
        self.history
            .last()
            .expect("Board history must not be empty")
    }

    /// True once the board has reached extinction, stability, or
    /// oscillation.
    #[instrument(skip(self), fields(board_id = %self.id))]
    pub fn is_concluded(&self) -> bool {
        if self.is_extinct() {
            debug!("Board extinct");
            return true;
        }
        if self.is_stable() {
            debug!("Board stable");
            return true;
        }
        if self.is_oscillating() {
            debug!("Board oscillating");
            return true;
        }
        false
    }

    /// True when every cell of the current generation is dead.
    pub fn is_extinct(&self) -> bool {
        self.current_state().grid().is_lifeless()
    }

    /// True when the current generation's grid equals the one immediately
    /// before it.
    pub fn is_stable(&self) -> bool {
        let n = self.history.len();
        n >= 2 && self.history[n - 1].grid() == self.history[n - 2].grid()
    }

    /// True when the current generation's grid matches any state in the
    /// history other than the two most recent.
    ///
    /// Detection waits for at least four generations of history; a repeat
    /// of the immediately preceding state counts as stability instead.
    pub fn is_oscillating(&self) -> bool {
        let n = self.history.len();
        if n < OSCILLATION_MIN_HISTORY {
            return false;
        }
        let current = self.history[n - 1].grid();
        self.history[..n - 2]
            .iter()
            .any(|state| state.grid() == current)
    }
}
