use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260601_000001_department::Department;

static IDX_APP_USER_DEPARTMENT_ID: &str = "idx_app_user_department_id";
static FK_APP_USER_DEPARTMENT_ID: &str = "fk_app_user_department_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AppUser::Table)
                    .if_not_exists()
                    .col(pk_auto(AppUser::Id))
                    .col(string(AppUser::Name))
                    .col(string_len(AppUser::Role, 16))
                    .col(integer_null(AppUser::DepartmentId))
                    .col(timestamp(AppUser::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_APP_USER_DEPARTMENT_ID)
                    .table(AppUser::Table)
                    .col(AppUser::DepartmentId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_APP_USER_DEPARTMENT_ID)
                    .from_tbl(AppUser::Table)
                    .from_col(AppUser::DepartmentId)
                    .to_tbl(Department::Table)
                    .to_col(Department::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_APP_USER_DEPARTMENT_ID)
                    .table(AppUser::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_APP_USER_DEPARTMENT_ID)
                    .table(AppUser::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(AppUser::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum AppUser {
    Table,
    Id,
    Name,
    Role,
    DepartmentId,
    CreatedAt,
}
