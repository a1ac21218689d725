//! Error taxonomy shared by the orchestration use cases.

use derive_more::{Display, Error};

use crate::life::{BoardId, GridError, InvalidGeneration};
use crate::store::{ServiceError, StoreError};

/// Errors surfaced by the board use cases.
///
/// `MissingGrid`, `Grid`, `InvalidGeneration`, and `InvalidFutureState`
/// reject caller input; `NotFound` is a domain error; `Store` wraps
/// infrastructure failures.
#[derive(Debug, Display, Error)]
pub enum UseCaseError {
    /// The request carried no grid.
    #[display("Board must have a grid")]
    MissingGrid,
    /// The grid failed validation.
    #[display("{}", _0)]
    Grid(GridError),
    /// A generation number below the minimum was supplied.
    #[display("{}", _0)]
    InvalidGeneration(InvalidGeneration),
    /// A future-state request asked for fewer than one generation.
    #[display("Future state {} is invalid", _0)]
    InvalidFutureState(#[error(not(source))] i32),
    /// No board exists under the requested id.
    #[display("Board {} not found", _0)]
    NotFound(#[error(not(source))] BoardId),
    /// The storage layer failed.
    #[display("{}", _0)]
    Store(StoreError),
}

impl From<GridError> for UseCaseError {
    fn from(err: GridError) -> Self {
        Self::Grid(err)
    }
}

impl From<InvalidGeneration> for UseCaseError {
    fn from(err: InvalidGeneration) -> Self {
        Self::InvalidGeneration(err)
    }
}

impl From<ServiceError> for UseCaseError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::NotFound(id) => Self::NotFound(id),
            ServiceError::Store(err) => Self::Store(err),
        }
    }
}
