//! Tests for the board access service and its in-memory backends.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use lifeboard::{
    Board, BoardCache, BoardId, BoardService, BoardState, BoardStore, Grid, MemoryBoardCache,
    MemoryBoardStore, ServiceError, StoreError,
};
use uuid::Uuid;

fn sample_board() -> Board {
    let grid = Grid::try_from(vec![vec![0, 1], vec![1, 0]]).expect("Valid grid");
    Board::create(BoardState::initial(grid))
}

fn lifeless_grid() -> Grid {
    Grid::try_from(vec![vec![0, 0], vec![0, 0]]).expect("Valid grid")
}

/// Store wrapper that counts reads, to observe cache behavior.
struct CountingStore {
    inner: MemoryBoardStore,
    reads: AtomicUsize,
}

impl CountingStore {
    fn new() -> Self {
        Self {
            inner: MemoryBoardStore::new(),
            reads: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl BoardStore for CountingStore {
    async fn get_by_id(&self, id: BoardId) -> Result<Option<Board>, StoreError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.inner.get_by_id(id).await
    }

    async fn save(&self, board: &Board) -> Result<(), StoreError> {
        self.inner.save(board).await
    }

    async fn update(&self, board: &Board) -> Result<(), StoreError> {
        self.inner.update(board).await
    }
}

#[tokio::test]
async fn test_get_unknown_board_is_not_found() {
    let service = BoardService::new(
        Arc::new(MemoryBoardStore::new()),
        Arc::new(MemoryBoardCache::new()),
    );
    let result = service.get_by_id(Uuid::new_v4()).await;
    assert!(matches!(result, Err(ServiceError::NotFound(_))));
}

#[tokio::test]
async fn test_create_then_get_round_trips() {
    let service = BoardService::new(
        Arc::new(MemoryBoardStore::new()),
        Arc::new(MemoryBoardCache::new()),
    );
    let board = sample_board();
    service.create(&board).await.expect("Create failed");

    let loaded = service.get_by_id(*board.id()).await.expect("Get failed");
    assert_eq!(loaded, board);
}

#[tokio::test]
async fn test_create_primes_cache() {
    let store = Arc::new(CountingStore::new());
    let service = BoardService::new(store.clone(), Arc::new(MemoryBoardCache::new()));

    let board = sample_board();
    service.create(&board).await.expect("Create failed");
    service.get_by_id(*board.id()).await.expect("Get failed");

    // The read was served from the cache
    assert_eq!(store.reads.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_store_hit_populates_cache() {
    let store = Arc::new(CountingStore::new());
    let board = sample_board();
    // Seed the store directly, bypassing the service and its cache
    store.inner.save(&board).await.expect("Seed failed");

    let service = BoardService::new(store.clone(), Arc::new(MemoryBoardCache::new()));
    service
        .get_by_id(*board.id())
        .await
        .expect("First get failed");
    service
        .get_by_id(*board.id())
        .await
        .expect("Second get failed");

    // Only the first read reached the store
    assert_eq!(store.reads.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_update_refreshes_cache() {
    let cache = Arc::new(MemoryBoardCache::new());
    let service = BoardService::new(Arc::new(MemoryBoardStore::new()), cache.clone());

    let mut board = sample_board();
    service.create(&board).await.expect("Create failed");

    let next = board.current_state().next_with(lifeless_grid());
    board.add_state(next);
    service.update(&board).await.expect("Update failed");

    let cached = cache
        .get(&board.id().to_string())
        .expect("Cache entry missing");
    assert_eq!(cached.history().len(), 2);
}

#[tokio::test]
async fn test_update_unknown_board_fails() {
    let service = BoardService::new(
        Arc::new(MemoryBoardStore::new()),
        Arc::new(MemoryBoardCache::new()),
    );
    let result = service.update(&sample_board()).await;
    assert!(matches!(result, Err(ServiceError::Store(_))));
}

#[tokio::test]
async fn test_store_failure_is_exposed_as_the_error_cause() {
    let service = BoardService::new(
        Arc::new(MemoryBoardStore::new()),
        Arc::new(MemoryBoardCache::new()),
    );
    let err = service
        .update(&sample_board())
        .await
        .expect_err("Update of an unsaved board should fail");

    let cause = std::error::Error::source(&err).expect("Cause should be attached");
    assert!(cause.to_string().contains("not found for update"));
}

#[test]
fn test_find_existing_state_hit() {
    let service = BoardService::new(
        Arc::new(MemoryBoardStore::new()),
        Arc::new(MemoryBoardCache::new()),
    );

    let mut board = sample_board();
    let next = board.current_state().next_with(lifeless_grid());
    board.add_state(next);

    let found = service
        .find_existing_state(&board, 2)
        .expect("Generation 2 should be stored");
    assert_eq!(found.id(), board.id());
    assert_eq!(found.history().len(), 1);
    assert_eq!(*found.current_state().generation(), 2);
    assert_eq!(*found.rows(), 2);
    assert_eq!(*found.columns(), 2);
}

#[test]
fn test_find_existing_state_miss() {
    let service = BoardService::new(
        Arc::new(MemoryBoardStore::new()),
        Arc::new(MemoryBoardCache::new()),
    );
    let board = sample_board();
    assert!(service.find_existing_state(&board, 5).is_none());
}
