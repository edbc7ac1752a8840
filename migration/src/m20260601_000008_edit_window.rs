use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EditWindow::Table)
                    .if_not_exists()
                    .col(string_len(EditWindow::Name, 32).primary_key())
                    .col(timestamp(EditWindow::StartAt))
                    .col(timestamp(EditWindow::EndAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EditWindow::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum EditWindow {
    Table,
    Name,
    StartAt,
    EndAt,
}
