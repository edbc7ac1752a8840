//! Declarative test builder.
//!
//! Configures the tables a test needs before execution; fixture rows are
//! inserted afterwards through [`crate::fixtures::factory`], which returns
//! the created models for assertions.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestSetup};

pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_registry_tables: bool,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_registry_tables: false,
        }
    }

    /// Create every registry and workflow table during `build()`.
    pub fn with_registry_tables(mut self) -> Self {
        self.include_registry_tables = true;
        self
    }

    /// Add a single entity table to the test database.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    pub async fn build(self) -> Result<TestSetup, TestError> {
        let setup = TestSetup::new().await?;

        if self.include_registry_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                schema.create_table_from_entity(entity::prelude::Department),
                schema.create_table_from_entity(entity::prelude::Location),
                schema.create_table_from_entity(entity::prelude::AppUser),
                schema.create_table_from_entity(entity::prelude::StatusValue),
                schema.create_table_from_entity(entity::prelude::Asset),
                schema.create_table_from_entity(entity::prelude::AssetTransfer),
                schema.create_table_from_entity(entity::prelude::AssetAudit),
                schema.create_table_from_entity(entity::prelude::EditWindow),
            ];
            setup.with_tables(stmts).await?;
        }

        if !self.tables.is_empty() {
            setup.with_tables(self.tables).await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
