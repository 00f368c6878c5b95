//! Test context structure and utilities.
//!
//! The context returned by [`TestBuilder`](crate::TestBuilder) holds an in-memory SQLite
//! database and a session backed by a memory store, so handlers and services can be
//! exercised without any external services.

use std::sync::Arc;

use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use tower_sessions::{MemoryStore, Session};

use crate::error::TestError;

/// Test context structure returned by `TestBuilder`
///
/// ```ignore
/// let test = TestBuilder::new().with_match_tables().build().await?;
///
/// let (team, players) = test.team().insert_mock_team_with_players(1, 18).await?;
/// let match_model = test.matches().insert_mock_match(team.id).await?;
/// ```
pub struct TestContext {
    /// Database connection to in-memory SQLite database
    pub db: DatabaseConnection,
    /// Session used to carry the authenticated user ID
    pub session: Session,
}

impl TestContext {
    /// Convert the database connection into any type that can be constructed from it
    ///
    /// Avoids a circular dependency between the test-utils crate and the main crate,
    /// `AppState` implements `From<DatabaseConnection>`.
    pub fn to_app_state<T>(&self) -> T
    where
        T: From<DatabaseConnection>,
    {
        T::from(self.db.clone())
    }
}

impl TestContext {
    /// Create a new test context with an empty in-memory database.
    pub(crate) async fn new() -> Result<Self, TestError> {
        let store = Arc::new(MemoryStore::default());
        let session = Session::new(None, store, None);

        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestContext { db, session })
    }

    /// Create database tables from schema statements.
    pub(crate) async fn with_tables(
        &self,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }
}
