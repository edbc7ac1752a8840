use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260601_000001_department::Department, m20260601_000002_location::Location,
    m20260601_000003_app_user::AppUser,
};

static IDX_ASSET_CODE: &str = "idx_asset_code";
static IDX_ASSET_DEPARTMENT_ID: &str = "idx_asset_department_id";
static IDX_ASSET_LOCATION_ID: &str = "idx_asset_location_id";
static IDX_ASSET_OWNER_ID: &str = "idx_asset_owner_id";
static FK_ASSET_DEPARTMENT_ID: &str = "fk_asset_department_id";
static FK_ASSET_LOCATION_ID: &str = "fk_asset_location_id";
static FK_ASSET_OWNER_ID: &str = "fk_asset_owner_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Asset::Table)
                    .if_not_exists()
                    .col(pk_auto(Asset::Id))
                    .col(string(Asset::Code))
                    .col(string_null(Asset::InventoryNumber))
                    .col(string_null(Asset::SerialNumber))
                    .col(string(Asset::Name))
                    .col(text_null(Asset::Description))
                    .col(integer_null(Asset::DepartmentId))
                    .col(integer_null(Asset::LocationId))
                    .col(string_null(Asset::Room))
                    .col(integer_null(Asset::OwnerId))
                    // No foreign key to status_value: the catalog is editable
                    // without referential checks, validation happens at write
                    // time in the service layer.
                    .col(string(Asset::Status))
                    .col(string_null(Asset::ImageRef))
                    .col(timestamp_null(Asset::AcquiredAt))
                    .col(timestamp(Asset::CreatedAt))
                    .col(timestamp(Asset::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ASSET_CODE)
                    .table(Asset::Table)
                    .col(Asset::Code)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ASSET_DEPARTMENT_ID)
                    .table(Asset::Table)
                    .col(Asset::DepartmentId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ASSET_LOCATION_ID)
                    .table(Asset::Table)
                    .col(Asset::LocationId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ASSET_OWNER_ID)
                    .table(Asset::Table)
                    .col(Asset::OwnerId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ASSET_DEPARTMENT_ID)
                    .from_tbl(Asset::Table)
                    .from_col(Asset::DepartmentId)
                    .to_tbl(Department::Table)
                    .to_col(Department::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ASSET_LOCATION_ID)
                    .from_tbl(Asset::Table)
                    .from_col(Asset::LocationId)
                    .to_tbl(Location::Table)
                    .to_col(Location::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ASSET_OWNER_ID)
                    .from_tbl(Asset::Table)
                    .from_col(Asset::OwnerId)
                    .to_tbl(AppUser::Table)
                    .to_col(AppUser::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_ASSET_OWNER_ID)
                    .table(Asset::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_ASSET_LOCATION_ID)
                    .table(Asset::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_ASSET_DEPARTMENT_ID)
                    .table(Asset::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ASSET_OWNER_ID)
                    .table(Asset::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ASSET_LOCATION_ID)
                    .table(Asset::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ASSET_DEPARTMENT_ID)
                    .table(Asset::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ASSET_CODE)
                    .table(Asset::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Asset::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Asset {
    Table,
    Id,
    Code,
    InventoryNumber,
    SerialNumber,
    Name,
    Description,
    DepartmentId,
    LocationId,
    Room,
    OwnerId,
    Status,
    ImageRef,
    AcquiredAt,
    CreatedAt,
    UpdatedAt,
}
