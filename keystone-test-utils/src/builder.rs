//! Declarative test builder for test setup.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! The builder pattern allows chaining multiple configuration methods together, with all operations
//! queued and executed during the final `build()` call.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with database tables and
/// role & user fixtures. Methods can be chained together and finalized with `build()`.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_user_tables: bool,

    // Database fixtures to insert
    roles: Vec<(String, String)>,       // (slug, name)
    users: Vec<(String, Vec<String>)>, // (email, role slugs)
}

impl TestBuilder {
    /// Create a new TestBuilder.
    ///
    /// Initializes an empty builder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_user_tables: false,
            roles: Vec::new(),
            users: Vec::new(),
        }
    }

    /// Add the user, role & user role tables to the test database.
    pub fn with_user_tables(mut self) -> Self {
        self.include_user_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be executed during `build()`.
    /// Chain multiple calls to add multiple tables.
    ///
    /// ```no_run
    /// use keystone_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), keystone_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(DashboardUser)
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

    /// Insert a role into the database.
    ///
    /// Roles are inserted in the order they are added, before any users.
    pub fn with_role(mut self, slug: &str, name: &str) -> Self {
        self.roles.push((slug.to_string(), name.to_string()));
        self
    }

    /// Insert a user holding the given roles into the database.
    ///
    /// The user's password is [`TEST_PASSWORD`](crate::constant::TEST_PASSWORD), every role
    /// slug must be added with `with_role`.
    pub fn with_user(mut self, email: &str, roles: &[&str]) -> Self {
        self.users.push((
            email.to_string(),
            roles.iter().map(|slug| slug.to_string()).collect(),
        ));
        self
    }

    /// Build the test setup by creating all configured tables and fixtures.
    ///
    /// Executes all queued operations in the following order:
    /// 1. Creates database tables (user tables if specified, then custom tables)
    /// 2. Inserts roles
    /// 3. Inserts users & their role assignments
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Database table creation or fixture insertion failed
    /// - `Err(TestError::FixtureNotFound)` - A user references a role that was not added
    pub async fn build(self) -> Result<TestContext, TestError> {
        let setup = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_user_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::DashboardUser),
                schema.create_table_from_entity(entity::prelude::DashboardRole),
                schema.create_table_from_entity(entity::prelude::DashboardUserRole),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert roles
        for (slug, name) in &self.roles {
            setup.role().insert_role(slug, name).await?;
        }

        // 3. Insert users
        for (email, role_slugs) in &self.users {
            let user = setup.user().insert_user(email).await?;

            for slug in role_slugs {
                let role = setup.role().find_by_slug(slug).await?;
                setup.user().assign_role(user.id, role.id).await?;
            }
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
