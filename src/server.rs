//! HTTP surface: router, handlers, and error-to-status mapping.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tracing::{error, instrument, warn};
use uuid::Uuid;

use crate::life::{BoardId, Transition};
use crate::store::{BoardCache, BoardService, BoardStore};
use crate::usecases::{
    CreateBoard, CreateBoardInput, FutureBoardStateInput, FutureBoardStateOutput,
    GetFutureBoardState, GetLatestBoardState, GetNextBoardState, LatestBoardStateInput,
    LatestBoardStateOutput, NextBoardStateInput, NextBoardStateOutput, UseCaseError,
};

/// Rejection message for nil board ids.
const INVALID_BOARD_ID: &str = "Invalid board id";

/// Shared handler state: the four wired use cases.
#[derive(Clone)]
pub struct AppState {
    create: Arc<CreateBoard>,
    next: Arc<GetNextBoardState>,
    future: Arc<GetFutureBoardState>,
    latest: Arc<GetLatestBoardState>,
}

impl AppState {
    /// Wires the use cases over the given store, cache, and engine.
    pub fn new(
        store: Arc<dyn BoardStore>,
        cache: Arc<dyn BoardCache>,
        engine: Arc<dyn Transition>,
    ) -> Self {
        let boards = Arc::new(BoardService::new(store, cache));
        Self {
            create: Arc::new(CreateBoard::new(boards.clone())),
            next: Arc::new(GetNextBoardState::new(boards.clone(), engine.clone())),
            future: Arc::new(GetFutureBoardState::new(boards.clone(), engine.clone())),
            latest: Arc::new(GetLatestBoardState::new(boards, engine)),
        }
    }
}

/// Builds the application router.
///
/// Routes mirror the logical operations: `POST /boards` creates a board,
/// and the three state routes advance or inspect it. The static `next`
/// and `latest` segments take precedence over the numeric
/// `{generations}` segment.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/boards", post(create_board))
        .route("/boards/{board_id}/states/next", get(next_state))
        .route("/boards/{board_id}/states/latest", get(latest_state))
        .route("/boards/{board_id}/states/{generations}", get(future_state))
        .with_state(state)
}

/// Request body for board creation.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBoardRequest {
    /// Raw grid of 0/1 cell values.
    #[serde(default)]
    pub grid: Option<Vec<Vec<i32>>>,
}

/// Response body for board creation.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBoardResponse {
    /// Id of the created board.
    pub id: Uuid,
}

/// Query parameters for the latest-state route.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LatestStateQuery {
    /// Cap on generations to compute; absent binds to zero.
    #[serde(default)]
    pub max_generations: i32,
}

/// JSON error envelope returned for every failed request.
#[derive(Debug, Serialize)]
struct ErrorBody {
    message: String,
}

/// A failed request: HTTP status plus the error message to report.
#[derive(Debug)]
struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }
}

impl From<UseCaseError> for ApiError {
    fn from(err: UseCaseError) -> Self {
        let status = match &err {
            UseCaseError::MissingGrid
            | UseCaseError::Grid(_)
            | UseCaseError::InvalidGeneration(_)
            | UseCaseError::InvalidFutureState(_) => StatusCode::BAD_REQUEST,
            UseCaseError::NotFound(_) => StatusCode::NOT_FOUND,
            UseCaseError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!(message = %self.message, "Request failed");
        } else {
            warn!(status = %self.status, message = %self.message, "Request rejected");
        }
        (
            self.status,
            Json(ErrorBody {
                message: self.message,
            }),
        )
            .into_response()
    }
}

/// Rejects the nil board id before any use case runs.
fn require_board_id(id: Uuid) -> Result<BoardId, ApiError> {
    if id.is_nil() {
        warn!("Rejected nil board id");
        return Err(ApiError::bad_request(INVALID_BOARD_ID));
    }
    Ok(id)
}

/// `POST /boards`
#[instrument(skip(state, body))]
async fn create_board(
    State(state): State<AppState>,
    body: Result<Json<CreateBoardRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = body.map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;

    let output = state
        .create
        .execute(CreateBoardInput::new(request.grid))
        .await?;
    let response = CreateBoardResponse {
        id: *output.board().id(),
    };
    Ok((StatusCode::CREATED, Json(response)))
}

/// `GET /boards/{board_id}/states/next`
#[instrument(skip(state))]
async fn next_state(
    State(state): State<AppState>,
    Path(board_id): Path<Uuid>,
) -> Result<Json<NextBoardStateOutput>, ApiError> {
    let board_id = require_board_id(board_id)?;
    let output = state
        .next
        .execute(NextBoardStateInput::new(board_id))
        .await?;
    Ok(Json(output))
}

/// `GET /boards/{board_id}/states/latest?maxGenerations=N`
#[instrument(skip(state))]
async fn latest_state(
    State(state): State<AppState>,
    Path(board_id): Path<Uuid>,
    Query(query): Query<LatestStateQuery>,
) -> Result<Json<LatestBoardStateOutput>, ApiError> {
    let board_id = require_board_id(board_id)?;
    let output = state
        .latest
        .execute(LatestBoardStateInput::new(board_id, query.max_generations))
        .await?;
    Ok(Json(output))
}

/// `GET /boards/{board_id}/states/{generations}`
#[instrument(skip(state))]
async fn future_state(
    State(state): State<AppState>,
    Path((board_id, generations)): Path<(Uuid, i32)>,
) -> Result<Json<FutureBoardStateOutput>, ApiError> {
    let board_id = require_board_id(board_id)?;
    let output = state
        .future
        .execute(FutureBoardStateInput::new(board_id, generations))
        .await?;
    Ok(Json(output))
}
