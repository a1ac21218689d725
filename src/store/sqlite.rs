//! SQLite-backed durable store for boards.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::{debug, info, instrument};

use crate::life::{Board, BoardId};
use crate::store::{BoardRow, BoardStore, NewBoardRow, StoreError, schema};

/// Bundled schema migrations, applied at startup.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Durable board store backed by a SQLite database file.
///
/// A fresh connection is established per call; the store itself holds
/// only the database path.
#[derive(Debug, Clone)]
pub struct SqliteBoardStore {
    db_path: String,
}

impl SqliteBoardStore {
    /// Creates a store for the database at the given path.
    ///
    /// Use `":memory:"` for an in-memory database (useful for tests).
    #[instrument(skip(db_path), fields(db_path = %db_path))]
    pub fn new(db_path: String) -> Self {
        info!(path = %db_path, "Creating SqliteBoardStore");
        Self { db_path }
    }

    /// Applies any pending schema migrations.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the connection or a migration fails.
    #[instrument(skip(self))]
    pub fn run_migrations(&self) -> Result<(), StoreError> {
        let mut conn = self.connection()?;
        let applied = conn
            .run_pending_migrations(MIGRATIONS)
            .map_err(|e| StoreError::new(format!("Migration error: {}", e)))?;
        info!(count = applied.len(), "Migrations applied");
        Ok(())
    }

    /// Establishes a database connection.
    #[instrument(skip(self))]
    fn connection(&self) -> Result<SqliteConnection, StoreError> {
        debug!(path = %self.db_path, "Establishing connection");
        SqliteConnection::establish(&self.db_path)
            .map_err(|e| StoreError::new(format!("Failed to connect to '{}': {}", self.db_path, e)))
    }
}

#[async_trait]
impl BoardStore for SqliteBoardStore {
    #[instrument(skip(self), fields(board_id = %id))]
    async fn get_by_id(&self, id: BoardId) -> Result<Option<Board>, StoreError> {
        debug!("Loading board");
        let mut conn = self.connection()?;

        let row = schema::boards::table
            .find(id.to_string())
            .first::<BoardRow>(&mut conn)
            .optional()?;

        match row {
            Some(row) => {
                let board = row.into_board()?;
                debug!(generations = board.history().len(), "Board found");
                Ok(Some(board))
            }
            None => {
                debug!("Board not found");
                Ok(None)
            }
        }
    }

    #[instrument(skip(self, board), fields(board_id = %board.id()))]
    async fn save(&self, board: &Board) -> Result<(), StoreError> {
        debug!("Saving new board");
        let row = NewBoardRow::from_board(board)?;
        let mut conn = self.connection()?;

        diesel::insert_into(schema::boards::table)
            .values(&row)
            .execute(&mut conn)?;

        info!(generations = board.history().len(), "Board saved");
        Ok(())
    }

    #[instrument(skip(self, board), fields(board_id = %board.id()))]
    async fn update(&self, board: &Board) -> Result<(), StoreError> {
        debug!("Updating board");
        let row = NewBoardRow::from_board(board)?;
        let mut conn = self.connection()?;

        let updated = diesel::update(schema::boards::table.find(board.id().to_string()))
            .set((&row, schema::boards::updated_at.eq(diesel::dsl::now)))
            .execute(&mut conn)?;

        if updated == 0 {
            return Err(StoreError::new(format!(
                "Board {} not found for update",
                board.id()
            )));
        }

        info!(generations = board.history().len(), "Board updated");
        Ok(())
    }
}
