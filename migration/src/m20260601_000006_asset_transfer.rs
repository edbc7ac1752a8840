use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260601_000001_department::Department, m20260601_000003_app_user::AppUser,
    m20260601_000005_asset::Asset,
};

static IDX_ASSET_TRANSFER_ASSET_ID: &str = "idx_asset_transfer_asset_id";
static IDX_ASSET_TRANSFER_STATUS: &str = "idx_asset_transfer_status";
static FK_ASSET_TRANSFER_ASSET_ID: &str = "fk_asset_transfer_asset_id";
static FK_ASSET_TRANSFER_FROM_DEPARTMENT_ID: &str = "fk_asset_transfer_from_department_id";
static FK_ASSET_TRANSFER_TO_DEPARTMENT_ID: &str = "fk_asset_transfer_to_department_id";
static FK_ASSET_TRANSFER_REQUESTED_BY: &str = "fk_asset_transfer_requested_by";
static FK_ASSET_TRANSFER_APPROVED_BY: &str = "fk_asset_transfer_approved_by";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AssetTransfer::Table)
                    .if_not_exists()
                    .col(pk_auto(AssetTransfer::Id))
                    .col(integer(AssetTransfer::AssetId))
                    .col(integer_null(AssetTransfer::FromDepartmentId))
                    .col(integer(AssetTransfer::ToDepartmentId))
                    .col(integer(AssetTransfer::RequestedBy))
                    .col(string_len(AssetTransfer::Status, 16))
                    .col(text_null(AssetTransfer::Note))
                    .col(timestamp(AssetTransfer::RequestedAt))
                    .col(integer_null(AssetTransfer::ApprovedBy))
                    .col(timestamp_null(AssetTransfer::ApprovedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ASSET_TRANSFER_ASSET_ID)
                    .table(AssetTransfer::Table)
                    .col(AssetTransfer::AssetId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ASSET_TRANSFER_STATUS)
                    .table(AssetTransfer::Table)
                    .col(AssetTransfer::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ASSET_TRANSFER_ASSET_ID)
                    .from_tbl(AssetTransfer::Table)
                    .from_col(AssetTransfer::AssetId)
                    .to_tbl(Asset::Table)
                    .to_col(Asset::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ASSET_TRANSFER_FROM_DEPARTMENT_ID)
                    .from_tbl(AssetTransfer::Table)
                    .from_col(AssetTransfer::FromDepartmentId)
                    .to_tbl(Department::Table)
                    .to_col(Department::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ASSET_TRANSFER_TO_DEPARTMENT_ID)
                    .from_tbl(AssetTransfer::Table)
                    .from_col(AssetTransfer::ToDepartmentId)
                    .to_tbl(Department::Table)
                    .to_col(Department::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ASSET_TRANSFER_REQUESTED_BY)
                    .from_tbl(AssetTransfer::Table)
                    .from_col(AssetTransfer::RequestedBy)
                    .to_tbl(AppUser::Table)
                    .to_col(AppUser::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ASSET_TRANSFER_APPROVED_BY)
                    .from_tbl(AssetTransfer::Table)
                    .from_col(AssetTransfer::ApprovedBy)
                    .to_tbl(AppUser::Table)
                    .to_col(AppUser::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for fk in [
            FK_ASSET_TRANSFER_APPROVED_BY,
            FK_ASSET_TRANSFER_REQUESTED_BY,
            FK_ASSET_TRANSFER_TO_DEPARTMENT_ID,
            FK_ASSET_TRANSFER_FROM_DEPARTMENT_ID,
            FK_ASSET_TRANSFER_ASSET_ID,
        ] {
            manager
                .drop_foreign_key(
                    ForeignKey::drop()
                        .name(fk)
                        .table(AssetTransfer::Table)
                        .to_owned(),
                )
                .await?;
        }

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ASSET_TRANSFER_STATUS)
                    .table(AssetTransfer::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ASSET_TRANSFER_ASSET_ID)
                    .table(AssetTransfer::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(AssetTransfer::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum AssetTransfer {
    Table,
    Id,
    AssetId,
    FromDepartmentId,
    ToDepartmentId,
    RequestedBy,
    Status,
    Note,
    RequestedAt,
    ApprovedBy,
    ApprovedAt,
}
