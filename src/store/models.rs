//! Database models for persisted boards.

use chrono::NaiveDateTime;
use derive_getters::Getters;
use derive_new::new;
use diesel::prelude::*;

use crate::life::{Board, BoardId, BoardState};
use crate::store::{StoreError, schema};

/// Board database model.
///
/// The generation history is stored as a JSON text column and decoded
/// back into domain states on load.
#[derive(Debug, Clone, Queryable, Identifiable, Selectable, Getters)]
#[diesel(table_name = schema::boards)]
pub struct BoardRow {
    id: String,
    rows: i32,
    cols: i32,
    history: String,
    created_at: NaiveDateTime,
    updated_at: NaiveDateTime,
}

impl BoardRow {
    /// Rebuilds the domain aggregate from the stored row.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the id or the history column fails to
    /// parse.
    pub fn into_board(self) -> Result<Board, StoreError> {
        let id: BoardId = self.id.parse()?;
        let history: Vec<BoardState> = serde_json::from_str(&self.history)?;
        Ok(Board::new(
            id,
            self.rows as usize,
            self.cols as usize,
            history,
        ))
    }
}

/// Insertable board model, also used as the changeset for updates.
#[derive(Debug, Clone, Insertable, AsChangeset, new, Getters)]
#[diesel(table_name = schema::boards)]
pub struct NewBoardRow {
    id: String,
    rows: i32,
    cols: i32,
    history: String,
}

impl NewBoardRow {
    /// Serializes the domain aggregate into its row form.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the history fails to serialize.
    pub fn from_board(board: &Board) -> Result<Self, StoreError> {
        let history = serde_json::to_string(board.history())?;
        Ok(Self::new(
            board.id().to_string(),
            *board.rows() as i32,
            *board.columns() as i32,
            history,
        ))
    }
}
