//! Persistence layer: store and cache contracts with their SQLite and
//! in-memory implementations.

mod error;
mod memory;
mod models;
mod schema; // Diesel generated schema - internal use only
mod service;
mod sqlite;

pub use error::StoreError;
pub use memory::{MemoryBoardCache, MemoryBoardStore};
pub use models::{BoardRow, NewBoardRow};
pub use service::{BoardService, ServiceError};
pub use sqlite::SqliteBoardStore;

use async_trait::async_trait;

use crate::life::{Board, BoardId};

/// Durable storage contract for board aggregates.
///
/// Implementations persist the whole aggregate, identity plus full
/// generation history, on every write.
#[async_trait]
pub trait BoardStore: Send + Sync {
    /// Loads a board by id, or `None` if absent.
    async fn get_by_id(&self, id: BoardId) -> Result<Option<Board>, StoreError>;

    /// Persists a board that does not exist yet.
    async fn save(&self, board: &Board) -> Result<(), StoreError>;

    /// Persists the current state of an existing board.
    async fn update(&self, board: &Board) -> Result<(), StoreError>;
}

/// Cache contract for board aggregates, keyed by the id's string form.
pub trait BoardCache: Send + Sync {
    /// Returns the cached board for `key`, if present.
    fn get(&self, key: &str) -> Option<Board>;

    /// Stores `board` under `key`, replacing any existing entry.
    fn put(&self, key: &str, board: Board);
}
