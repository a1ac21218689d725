//! Orchestration use cases composing the domain, the transition engine,
//! and the board access service.

mod create;
mod error;
mod future;
mod latest;
mod next;

pub use create::{CreateBoard, CreateBoardInput, CreateBoardOutput};
pub use error::UseCaseError;
pub use future::{FutureBoardStateInput, FutureBoardStateOutput, GetFutureBoardState};
pub use latest::{GetLatestBoardState, LatestBoardStateInput, LatestBoardStateOutput};
pub use next::{GetNextBoardState, NextBoardStateInput, NextBoardStateOutput};
