//! Declarative test builder.
//!
//! Tables are queued on the builder and created in dependency order during `build()`.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_match_tables: bool,
    authenticated_user: Option<i32>,
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_match_tables: false,
            authenticated_user: None,
        }
    }

    /// Add every table required for match management.
    ///
    /// Creates Team, Player, FootballMatch, MatchPlayer, Goal, Assist, Card and Substitution.
    pub fn with_match_tables(mut self) -> Self {
        self.include_match_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// ```no_run
    /// use touchline_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), touchline_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(Team)
    ///     .with_table(Player)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Store a user ID in the test session, as the external auth system would.
    pub fn with_authenticated_user(mut self, user_id: i32) -> Self {
        self.authenticated_user = Some(user_id);
        self
    }

    /// Build the test context by creating all configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Database connection or table creation failed
    /// - `Err(TestError::SessionError)` - Writing the user ID into the session failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let setup = TestContext::new().await?;

        let mut all_tables = Vec::new();

        if self.include_match_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Team),
                schema.create_table_from_entity(entity::prelude::Player),
                schema.create_table_from_entity(entity::prelude::FootballMatch),
                schema.create_table_from_entity(entity::prelude::MatchPlayer),
                schema.create_table_from_entity(entity::prelude::Goal),
                schema.create_table_from_entity(entity::prelude::Assist),
                schema.create_table_from_entity(entity::prelude::Card),
                schema.create_table_from_entity(entity::prelude::Substitution),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        if let Some(user_id) = self.authenticated_user {
            setup.insert_session_user(user_id).await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
