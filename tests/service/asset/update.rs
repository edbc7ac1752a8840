//! Tests for AssetService::update, the dispatch point between plain edits,
//! the transfer workflow, and direct status writes.

use custodian::{
    model::asset::UpdateAssetDto,
    server::{
        data::asset::AssetRepository,
        error::Error,
        service::{asset::AssetService, resolver},
    },
};
use custodian_test_utils::prelude::*;
use entity::{app_user::Role, asset_transfer::TransferStatus};
use sea_orm::EntityTrait;

use crate::service::principal_for;

/// An edit changing both the department and the status is rejected before
/// any write; the asset row is provably unchanged.
#[tokio::test]
async fn rejects_combined_department_and_status_edit() -> Result<(), TestError> {
    let test = test_setup_with_registry_tables!()?;
    factory::status(&test.db, "available", "Available").await?;
    factory::status(&test.db, "damaged", "Damaged").await?;
    let facilities = factory::department(&test.db, "Facilities").await?;
    let engineering = factory::department(&test.db, "Engineering").await?;
    let editor = factory::user(&test.db, "Riley", Role::User, Some(facilities.id)).await?;
    let asset = factory::asset(&test.db, "AST-001", "Desk", Some(facilities.id), None).await?;

    let service = AssetService::new(&test.db);
    let result = service
        .update(
            &principal_for(&editor),
            asset.id,
            UpdateAssetDto {
                department_id: Some(engineering.id),
                status: Some("damaged".to_string()),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(Error::ValidationError(_))));

    let reloaded = AssetRepository::new(&test.db).find_by_id(asset.id).await?.unwrap();
    assert_eq!(reloaded.status, asset.status);
    assert_eq!(reloaded.department_id, asset.department_id);
    assert_eq!(reloaded.updated_at, asset.updated_at);

    let transfers = entity::prelude::AssetTransfer::find().all(&test.db).await?;
    assert!(transfers.is_empty());

    Ok(())
}

/// A department change spawns a pending transfer instead of moving the
/// asset; the display status flips to Transferring.
#[tokio::test]
async fn department_change_spawns_pending_transfer() -> Result<(), TestError> {
    let test = test_setup_with_registry_tables!()?;
    factory::status(&test.db, "available", "Available").await?;
    let facilities = factory::department(&test.db, "Facilities").await?;
    let engineering = factory::department(&test.db, "Engineering").await?;
    let editor = factory::user(&test.db, "Riley", Role::User, Some(facilities.id)).await?;
    let asset = factory::asset(&test.db, "AST-001", "Desk", Some(facilities.id), None).await?;

    let service = AssetService::new(&test.db);
    let updated = service
        .update(
            &principal_for(&editor),
            asset.id,
            UpdateAssetDto {
                department_id: Some(engineering.id),
                note: Some("moving floors".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    // Ownership has not changed yet; only the displayed status has.
    assert_eq!(updated.department_id, Some(facilities.id));
    assert_eq!(updated.display_status, resolver::DISPLAY_TRANSFERRING);

    let transfers = entity::prelude::AssetTransfer::find().all(&test.db).await?;
    assert_eq!(transfers.len(), 1);
    assert_eq!(transfers[0].status, TransferStatus::Pending);
    assert_eq!(transfers[0].from_department_id, Some(facilities.id));
    assert_eq!(transfers[0].to_department_id, engineering.id);
    assert_eq!(transfers[0].requested_by, editor.id);
    assert_eq!(transfers[0].note, Some("moving floors".to_string()));

    Ok(())
}

/// A second department change while a transfer is pending is a conflict.
#[tokio::test]
async fn department_change_conflicts_with_pending_transfer() -> Result<(), TestError> {
    let test = test_setup_with_registry_tables!()?;
    factory::status(&test.db, "available", "Available").await?;
    let facilities = factory::department(&test.db, "Facilities").await?;
    let engineering = factory::department(&test.db, "Engineering").await?;
    let editor = factory::user(&test.db, "Riley", Role::User, Some(facilities.id)).await?;
    let asset = factory::asset(&test.db, "AST-001", "Desk", Some(facilities.id), None).await?;
    factory::transfer(&test.db, &asset, engineering.id, editor.id, TransferStatus::Pending)
        .await?;

    let service = AssetService::new(&test.db);
    let result = service
        .update(
            &principal_for(&editor),
            asset.id,
            UpdateAssetDto {
                department_id: Some(engineering.id),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(Error::ConflictError(_))));

    Ok(())
}

/// A status change outside any audit window writes the authoritative status
/// directly and records no audit assertion.
#[tokio::test]
async fn status_change_is_direct_outside_window() -> Result<(), TestError> {
    let test = test_setup_with_registry_tables!()?;
    factory::status(&test.db, "available", "Available").await?;
    factory::status(&test.db, "damaged", "Damaged").await?;
    let facilities = factory::department(&test.db, "Facilities").await?;
    let editor = factory::user(&test.db, "Riley", Role::User, Some(facilities.id)).await?;
    let asset = factory::asset(&test.db, "AST-001", "Desk", Some(facilities.id), None).await?;

    let service = AssetService::new(&test.db);
    let updated = service
        .update(
            &principal_for(&editor),
            asset.id,
            UpdateAssetDto {
                status: Some("damaged".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.status, "damaged");
    assert_eq!(updated.display_status, "Damaged");

    let audits = entity::prelude::AssetAudit::find().all(&test.db).await?;
    assert!(audits.is_empty());

    Ok(())
}

/// An unknown status value is rejected.
#[tokio::test]
async fn rejects_unknown_status_value() -> Result<(), TestError> {
    let test = test_setup_with_registry_tables!()?;
    factory::status(&test.db, "available", "Available").await?;
    let facilities = factory::department(&test.db, "Facilities").await?;
    let editor = factory::user(&test.db, "Riley", Role::User, Some(facilities.id)).await?;
    let asset = factory::asset(&test.db, "AST-001", "Desk", Some(facilities.id), None).await?;

    let service = AssetService::new(&test.db);
    let result = service
        .update(
            &principal_for(&editor),
            asset.id,
            UpdateAssetDto {
                status: Some("vaporized".to_string()),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(Error::ValidationError(_))));

    Ok(())
}
