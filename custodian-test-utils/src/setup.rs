use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::error::TestError;

/// Shared test environment: an isolated in-memory SQLite database with the
/// schema generated straight from the entity definitions.
pub struct TestSetup {
    pub db: DatabaseConnection,
}

impl TestSetup {
    pub async fn new() -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestSetup { db })
    }

    pub async fn with_tables(&self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }
}

#[macro_export]
macro_rules! test_setup_with_tables {
    // Pattern 1: No entities provided
    () => {{
        $crate::TestSetup::new().await
    }};

    // Pattern 2: Entities provided
    ($($entity:expr),+ $(,)?) => {{
        async {
            let setup = $crate::TestSetup::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                $(schema.create_table_from_entity($entity),)+
            ];
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}

/// Creates every registry and workflow table.
#[macro_export]
macro_rules! test_setup_with_registry_tables {
    () => {{
        $crate::test_setup_with_tables!(
            entity::prelude::Department,
            entity::prelude::Location,
            entity::prelude::AppUser,
            entity::prelude::StatusValue,
            entity::prelude::Asset,
            entity::prelude::AssetTransfer,
            entity::prelude::AssetAudit,
            entity::prelude::EditWindow
        )
    }};
}
