//! Board access service merging the durable store and the write-through
//! cache behind one read/write surface.

use std::sync::Arc;

use derive_more::{Display, Error};
use tracing::{debug, info, instrument, warn};

use crate::life::{Board, BoardId};
use crate::store::{BoardCache, BoardStore, StoreError};

/// Errors surfaced by [`BoardService`].
#[derive(Debug, Display, Error)]
pub enum ServiceError {
    /// No board exists under the requested id.
    #[display("Board {} not found", _0)]
    NotFound(#[error(not(source))] BoardId),
    /// The durable store failed.
    #[display("{}", _0)]
    Store(StoreError),
}

impl From<StoreError> for ServiceError {
    fn from(err: StoreError) -> Self {
        Self::Store(err)
    }
}

/// Read/write access to boards through the cache and the durable store.
///
/// Reads consult the cache first and fall back to the store, populating
/// the cache on a store hit. Writes go to the store first and then
/// refresh the cache, so the cache never runs ahead of durable state.
pub struct BoardService {
    store: Arc<dyn BoardStore>,
    cache: Arc<dyn BoardCache>,
}

impl BoardService {
    /// Creates a service over the given store and cache.
    pub fn new(store: Arc<dyn BoardStore>, cache: Arc<dyn BoardCache>) -> Self {
        Self { store, cache }
    }

    /// Loads a board by id.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::NotFound`] if neither the cache nor the
    /// store holds the board, or [`ServiceError::Store`] if the store
    /// fails.
    #[instrument(skip(self), fields(board_id = %id))]
    pub async fn get_by_id(&self, id: BoardId) -> Result<Board, ServiceError> {
        if let Some(board) = self.cache.get(&id.to_string()) {
            debug!("Cache hit");
            return Ok(board);
        }

        debug!("Cache miss, querying store");
        match self.store.get_by_id(id).await? {
            Some(board) => {
                self.cache.put(&id.to_string(), board.clone());
                Ok(board)
            }
            None => {
                warn!("Board not found");
                Err(ServiceError::NotFound(id))
            }
        }
    }

    /// Persists a new board and primes the cache with it.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Store`] if the store fails.
    #[instrument(skip(self, board), fields(board_id = %board.id()))]
    pub async fn create(&self, board: &Board) -> Result<(), ServiceError> {
        self.store.save(board).await?;
        self.cache.put(&board.id().to_string(), board.clone());
        info!("Board created");
        Ok(())
    }

    /// Persists a mutated board and refreshes its cache entry.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Store`] if the store fails.
    #[instrument(skip(self, board), fields(board_id = %board.id(), generations = board.history().len()))]
    pub async fn update(&self, board: &Board) -> Result<(), ServiceError> {
        self.store.update(board).await?;
        self.cache.put(&board.id().to_string(), board.clone());
        debug!("Board updated");
        Ok(())
    }

    /// Looks up an already-computed generation in the board's history.
    ///
    /// On a hit, returns a board carrying just that state; on a miss
    /// returns `None` and the caller must compute forward.
    #[instrument(skip(self, board), fields(board_id = %board.id(), generation))]
    pub fn find_existing_state(&self, board: &Board, generation: i32) -> Option<Board> {
        let state = board
            .history()
            .iter()
            .find(|s| *s.generation() == generation)?;

        debug!("Generation already computed");
        Some(Board::new(
            *board.id(),
            state.grid().rows(),
            state.grid().columns(),
            vec![state.clone()],
        ))
    }
}
