//! Tests for TransferService::request.

use custodian::{
    model::transfer::CreateTransferDto,
    server::{error::Error, service::transfer::TransferService},
};
use custodian_test_utils::prelude::*;
use entity::app_user::Role;

use crate::service::principal_for;

/// A transfer to the asset's current department is a validation error, not
/// a silent no-op.
#[tokio::test]
async fn rejects_self_transfer() -> Result<(), TestError> {
    let test = test_setup_with_registry_tables!()?;
    let facilities = factory::department(&test.db, "Facilities").await?;
    let requester = factory::user(&test.db, "Riley", Role::User, Some(facilities.id)).await?;
    let asset = factory::asset(&test.db, "AST-001", "Desk", Some(facilities.id), None).await?;

    let service = TransferService::new(&test.db);
    let result = service
        .request(
            &principal_for(&requester),
            CreateTransferDto {
                asset_id: asset.id,
                to_department_id: facilities.id,
                note: None,
            },
        )
        .await;

    assert!(matches!(result, Err(Error::ValidationError(_))));

    Ok(())
}

/// At most one pending transfer may exist per asset.
#[tokio::test]
async fn rejects_second_pending_transfer() -> Result<(), TestError> {
    let test = test_setup_with_registry_tables!()?;
    let facilities = factory::department(&test.db, "Facilities").await?;
    let engineering = factory::department(&test.db, "Engineering").await?;
    let workshop = factory::department(&test.db, "Workshop").await?;
    let requester = factory::user(&test.db, "Riley", Role::User, Some(facilities.id)).await?;
    let asset = factory::asset(&test.db, "AST-001", "Desk", Some(facilities.id), None).await?;

    let service = TransferService::new(&test.db);

    let first = service
        .request(
            &principal_for(&requester),
            CreateTransferDto {
                asset_id: asset.id,
                to_department_id: engineering.id,
                note: None,
            },
        )
        .await;
    assert!(first.is_ok());

    let second = service
        .request(
            &principal_for(&requester),
            CreateTransferDto {
                asset_id: asset.id,
                to_department_id: workshop.id,
                note: None,
            },
        )
        .await;
    assert!(matches!(second, Err(Error::ConflictError(_))));

    Ok(())
}

/// A request targeting a nonexistent asset or department reports not-found.
#[tokio::test]
async fn rejects_unknown_targets() -> Result<(), TestError> {
    let test = test_setup_with_registry_tables!()?;
    let facilities = factory::department(&test.db, "Facilities").await?;
    let requester =
        factory::user(&test.db, "Riley", Role::SuperAdmin, Some(facilities.id)).await?;
    let asset = factory::asset(&test.db, "AST-001", "Desk", Some(facilities.id), None).await?;

    let service = TransferService::new(&test.db);

    let missing_asset = service
        .request(
            &principal_for(&requester),
            CreateTransferDto {
                asset_id: asset.id + 100,
                to_department_id: facilities.id,
                note: None,
            },
        )
        .await;
    assert!(matches!(missing_asset, Err(Error::NotFoundError(_))));

    let missing_department = service
        .request(
            &principal_for(&requester),
            CreateTransferDto {
                asset_id: asset.id,
                to_department_id: facilities.id + 100,
                note: None,
            },
        )
        .await;
    assert!(matches!(missing_department, Err(Error::NotFoundError(_))));

    Ok(())
}

/// A successful request is pending and carries the requester.
#[tokio::test]
async fn creates_pending_request() -> Result<(), TestError> {
    let test = test_setup_with_registry_tables!()?;
    let facilities = factory::department(&test.db, "Facilities").await?;
    let engineering = factory::department(&test.db, "Engineering").await?;
    let requester = factory::user(&test.db, "Riley", Role::User, Some(facilities.id)).await?;
    let asset = factory::asset(&test.db, "AST-001", "Desk", Some(facilities.id), None).await?;

    let service = TransferService::new(&test.db);
    let transfer = service
        .request(
            &principal_for(&requester),
            CreateTransferDto {
                asset_id: asset.id,
                to_department_id: engineering.id,
                note: None,
            },
        )
        .await
        .unwrap();

    assert_eq!(transfer.status, "pending");
    assert_eq!(transfer.from_department_id, Some(facilities.id));
    assert_eq!(transfer.requested_by, requester.id);

    Ok(())
}
