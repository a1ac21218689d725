//! In-memory store and cache implementations.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::life::{Board, BoardId};
use crate::store::{BoardCache, BoardStore, StoreError};

/// Durable-store stand-in holding boards in process memory.
///
/// Backs the server's `--memory` mode and keeps tests off the filesystem.
#[derive(Debug, Default)]
pub struct MemoryBoardStore {
    boards: RwLock<HashMap<BoardId, Board>>,
}

impl MemoryBoardStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BoardStore for MemoryBoardStore {
    #[instrument(skip(self), fields(board_id = %id))]
    async fn get_by_id(&self, id: BoardId) -> Result<Option<Board>, StoreError> {
        let boards = self.boards.read().expect("lock poisoned");
        Ok(boards.get(&id).cloned())
    }

    #[instrument(skip(self, board), fields(board_id = %board.id()))]
    async fn save(&self, board: &Board) -> Result<(), StoreError> {
        let mut boards = self.boards.write().expect("lock poisoned");
        boards.insert(*board.id(), board.clone());
        Ok(())
    }

    #[instrument(skip(self, board), fields(board_id = %board.id()))]
    async fn update(&self, board: &Board) -> Result<(), StoreError> {
        let mut boards = self.boards.write().expect("lock poisoned");
        if !boards.contains_key(board.id()) {
            return Err(StoreError::new(format!(
                "Board {} not found for update",
                board.id()
            )));
        }
        boards.insert(*board.id(), board.clone());
        Ok(())
    }
}

/// In-memory cache of full board aggregates, keyed by id string.
#[derive(Debug, Default)]
pub struct MemoryBoardCache {
    entries: RwLock<HashMap<String, Board>>,
}

impl MemoryBoardCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }
}

impl BoardCache for MemoryBoardCache {
    #[instrument(skip(self))]
    fn get(&self, key: &str) -> Option<Board> {
        let entries = self.entries.read().expect("lock poisoned");
        let hit = entries.get(key).cloned();
        debug!(key, hit = hit.is_some(), "Cache lookup");
        hit
    }

    #[instrument(skip(self, board))]
    fn put(&self, key: &str, board: Board) {
        debug!(key, "Cache write");
        let mut entries = self.entries.write().expect("lock poisoned");
        entries.insert(key.to_string(), board);
    }
}
