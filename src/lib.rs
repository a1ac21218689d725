//! Lifeboard - Conway's Game of Life as a board service.
//!
//! Boards are created from an initial grid and advanced on demand, one
//! generation at a time or until they conclude by extinction, stability,
//! or oscillation. Every computed generation is kept as board history and
//! the whole aggregate is persisted through a write-through cache over a
//! durable store.
//!
//! # Architecture
//!
//! - **Life**: grid and cell types, the board aggregate, and the Conway
//!   transition rule
//! - **Store**: store and cache contracts with SQLite and in-memory backends
//! - **Use cases**: create / next / future / latest orchestration
//! - **Server**: REST surface exposing the use cases over axum
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use lifeboard::{AppState, ConwayEngine, MemoryBoardCache, MemoryBoardStore, router};
//!
//! # async fn serve() -> anyhow::Result<()> {
//! let state = AppState::new(
//!     Arc::new(MemoryBoardStore::new()),
//!     Arc::new(MemoryBoardCache::new()),
//!     Arc::new(ConwayEngine::new()),
//! );
//! let listener = tokio::net::TcpListener::bind(("127.0.0.1", 3000)).await?;
//! axum::serve(listener, router(state)).await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod life;
mod server;
mod store;
mod usecases;

// Crate-level exports - Domain
pub use life::{
    Board, BoardId, BoardState, CellState, ConwayEngine, GENERATION_MIN, Grid, GridError,
    InvalidGeneration, Transition,
};

// Crate-level exports - Persistence
pub use store::{
    BoardCache, BoardRow, BoardService, BoardStore, MemoryBoardCache, MemoryBoardStore,
    NewBoardRow, ServiceError, SqliteBoardStore, StoreError,
};

// Crate-level exports - Use cases
pub use usecases::{
    CreateBoard, CreateBoardInput, CreateBoardOutput, FutureBoardStateInput,
    FutureBoardStateOutput, GetFutureBoardState, GetLatestBoardState, GetNextBoardState,
    LatestBoardStateInput, LatestBoardStateOutput, NextBoardStateInput, NextBoardStateOutput,
    UseCaseError,
};

// Crate-level exports - HTTP server
pub use server::{AppState, CreateBoardRequest, CreateBoardResponse, LatestStateQuery, router};
