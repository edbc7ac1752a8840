use sea_orm_migration::{prelude::*, schema::*};

static IDX_STATUS_VALUE_VALUE: &str = "idx_status_value_value";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StatusValue::Table)
                    .if_not_exists()
                    .col(pk_auto(StatusValue::Id))
                    .col(string(StatusValue::Value))
                    .col(string(StatusValue::Label))
                    .col(string_len(StatusValue::Color, 16))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_STATUS_VALUE_VALUE)
                    .table(StatusValue::Table)
                    .col(StatusValue::Value)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Baseline catalog; admins extend or edit it at runtime.
        let seed = Query::insert()
            .into_table(StatusValue::Table)
            .columns([StatusValue::Value, StatusValue::Label, StatusValue::Color])
            .values_panic(["available".into(), "Available".into(), "#22c55e".into()])
            .values_panic(["in_repair".into(), "In repair".into(), "#f59e0b".into()])
            .values_panic(["damaged".into(), "Damaged".into(), "#ef4444".into()])
            .values_panic(["retired".into(), "Retired".into(), "#9ca3af".into()])
            .values_panic(["lost".into(), "Lost".into(), "#64748b".into()])
            .to_owned();

        manager.exec_stmt(seed).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_STATUS_VALUE_VALUE)
                    .table(StatusValue::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(StatusValue::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum StatusValue {
    Table,
    Id,
    Value,
    Label,
    Color,
}
