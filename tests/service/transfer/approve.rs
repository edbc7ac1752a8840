//! Tests for TransferService::approve, including the end-to-end approval
//! scenario.

use custodian::{
    model::transfer::CreateTransferDto,
    server::{
        data::asset::AssetRepository,
        error::Error,
        service::{asset::AssetService, resolver, transfer::TransferService},
    },
};
use custodian_test_utils::prelude::*;
use entity::{app_user::Role, asset_transfer::TransferStatus};

use crate::service::principal_for;

/// Request, observe "Transferring", approve, observe ownership moved and
/// the display back to the catalog label; a second approval is not-found.
#[tokio::test]
async fn approval_moves_ownership_exactly_once() -> Result<(), TestError> {
    let test = test_setup_with_registry_tables!()?;
    factory::status(&test.db, "available", "Available").await?;
    let facilities = factory::department(&test.db, "Facilities").await?;
    let engineering = factory::department(&test.db, "Engineering").await?;
    let requester = factory::user(&test.db, "Riley", Role::User, Some(facilities.id)).await?;
    let super_admin = factory::user(&test.db, "Ade", Role::SuperAdmin, None).await?;
    let asset = factory::asset(&test.db, "AST-001", "Desk", Some(facilities.id), None).await?;

    let transfer_service = TransferService::new(&test.db);
    let asset_service = AssetService::new(&test.db);

    let transfer = transfer_service
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

    let displayed = asset_service
        .get(&principal_for(&super_admin), asset.id)
        .await
        .unwrap();
    assert_eq!(displayed.display_status, resolver::DISPLAY_TRANSFERRING);

    let approved = transfer_service
        .approve(&principal_for(&super_admin), transfer.id)
        .await
        .unwrap();
    assert_eq!(approved.status, "approved");
    assert_eq!(approved.approved_by, Some(super_admin.id));
    assert!(approved.approved_at.is_some());

    let moved = AssetRepository::new(&test.db).find_by_id(asset.id).await?.unwrap();
    assert_eq!(moved.department_id, Some(engineering.id));

    let displayed = asset_service
        .get(&principal_for(&super_admin), asset.id)
        .await
        .unwrap();
    assert_eq!(displayed.display_status, "Available");

    // Approving again targets a transfer that is no longer pending.
    let again = transfer_service
        .approve(&principal_for(&super_admin), transfer.id)
        .await;
    assert!(matches!(again, Err(Error::NotFoundError(_))));

    let untouched = AssetRepository::new(&test.db).find_by_id(asset.id).await?.unwrap();
    assert_eq!(untouched.department_id, Some(engineering.id));

    Ok(())
}

/// Only the receiving department's admin (or a superadmin) may approve.
#[tokio::test]
async fn approval_requires_receiving_department_admin() -> Result<(), TestError> {
    let test = test_setup_with_registry_tables!()?;
    let facilities = factory::department(&test.db, "Facilities").await?;
    let engineering = factory::department(&test.db, "Engineering").await?;
    let requester = factory::user(&test.db, "Riley", Role::User, Some(facilities.id)).await?;
    let sending_admin =
        factory::user(&test.db, "Sam", Role::Admin, Some(facilities.id)).await?;
    let receiving_admin =
        factory::user(&test.db, "Morgan", Role::Admin, Some(engineering.id)).await?;
    let asset = factory::asset(&test.db, "AST-001", "Desk", Some(facilities.id), None).await?;
    let transfer =
        factory::transfer(&test.db, &asset, engineering.id, requester.id, TransferStatus::Pending)
            .await?;

    let service = TransferService::new(&test.db);

    let forbidden = service
        .approve(&principal_for(&sending_admin), transfer.id)
        .await;
    assert!(matches!(forbidden, Err(Error::AuthorizationError(_))));

    let approved = service
        .approve(&principal_for(&receiving_admin), transfer.id)
        .await;
    assert!(approved.is_ok());

    Ok(())
}
