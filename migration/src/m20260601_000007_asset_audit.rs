use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260601_000001_department::Department, m20260601_000003_app_user::AppUser,
    m20260601_000005_asset::Asset,
};

static IDX_ASSET_AUDIT_ASSET_ID: &str = "idx_asset_audit_asset_id";
static IDX_ASSET_AUDIT_CHECKED_AT: &str = "idx_asset_audit_checked_at";
static FK_ASSET_AUDIT_ASSET_ID: &str = "fk_asset_audit_asset_id";
static FK_ASSET_AUDIT_USER_ID: &str = "fk_asset_audit_user_id";
static FK_ASSET_AUDIT_DEPARTMENT_ID: &str = "fk_asset_audit_department_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AssetAudit::Table)
                    .if_not_exists()
                    .col(pk_auto(AssetAudit::Id))
                    .col(integer(AssetAudit::AssetId))
                    .col(integer(AssetAudit::UserId))
                    .col(integer_null(AssetAudit::DepartmentId))
                    .col(string(AssetAudit::Status))
                    .col(text_null(AssetAudit::Note))
                    .col(timestamp(AssetAudit::CheckedAt))
                    .col(boolean(AssetAudit::Confirmed))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ASSET_AUDIT_ASSET_ID)
                    .table(AssetAudit::Table)
                    .col(AssetAudit::AssetId)
                    .col(AssetAudit::Confirmed)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ASSET_AUDIT_CHECKED_AT)
                    .table(AssetAudit::Table)
                    .col(AssetAudit::CheckedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ASSET_AUDIT_ASSET_ID)
                    .from_tbl(AssetAudit::Table)
                    .from_col(AssetAudit::AssetId)
                    .to_tbl(Asset::Table)
                    .to_col(Asset::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ASSET_AUDIT_USER_ID)
                    .from_tbl(AssetAudit::Table)
                    .from_col(AssetAudit::UserId)
                    .to_tbl(AppUser::Table)
                    .to_col(AppUser::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ASSET_AUDIT_DEPARTMENT_ID)
                    .from_tbl(AssetAudit::Table)
                    .from_col(AssetAudit::DepartmentId)
                    .to_tbl(Department::Table)
                    .to_col(Department::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for fk in [
            FK_ASSET_AUDIT_DEPARTMENT_ID,
            FK_ASSET_AUDIT_USER_ID,
            FK_ASSET_AUDIT_ASSET_ID,
        ] {
            manager
                .drop_foreign_key(
                    ForeignKey::drop()
                        .name(fk)
                        .table(AssetAudit::Table)
                        .to_owned(),
                )
                .await?;
        }

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ASSET_AUDIT_CHECKED_AT)
                    .table(AssetAudit::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ASSET_AUDIT_ASSET_ID)
                    .table(AssetAudit::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(AssetAudit::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum AssetAudit {
    Table,
    Id,
    AssetId,
    UserId,
    DepartmentId,
    Status,
    Note,
    CheckedAt,
    Confirmed,
}
