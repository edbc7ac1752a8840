//! Tests for TransferService::reject.

use custodian::server::{
    data::asset::AssetRepository, error::Error, service::transfer::TransferService,
};
use custodian_test_utils::prelude::*;
use entity::{app_user::Role, asset_transfer::TransferStatus};

use crate::service::principal_for;

/// Rejection stamps the resolver but never touches the asset.
#[tokio::test]
async fn rejection_never_mutates_the_asset() -> Result<(), TestError> {
    let test = test_setup_with_registry_tables!()?;
    let facilities = factory::department(&test.db, "Facilities").await?;
    let engineering = factory::department(&test.db, "Engineering").await?;
    let requester = factory::user(&test.db, "Riley", Role::User, Some(facilities.id)).await?;
    let super_admin = factory::user(&test.db, "Ade", Role::SuperAdmin, None).await?;
    let asset = factory::asset(&test.db, "AST-001", "Desk", Some(facilities.id), None).await?;
    let transfer =
        factory::transfer(&test.db, &asset, engineering.id, requester.id, TransferStatus::Pending)
            .await?;

    let service = TransferService::new(&test.db);
    let rejected = service
        .reject(&principal_for(&super_admin), transfer.id)
        .await
        .unwrap();

    assert_eq!(rejected.status, "rejected");
    assert_eq!(rejected.approved_by, Some(super_admin.id));

    let untouched = AssetRepository::new(&test.db).find_by_id(asset.id).await?.unwrap();
    assert_eq!(untouched.department_id, Some(facilities.id));

    Ok(())
}

/// A resolved transfer cannot be re-opened through the other verb.
#[tokio::test]
async fn resolved_transfer_is_terminal() -> Result<(), TestError> {
    let test = test_setup_with_registry_tables!()?;
    let facilities = factory::department(&test.db, "Facilities").await?;
    let engineering = factory::department(&test.db, "Engineering").await?;
    let requester = factory::user(&test.db, "Riley", Role::User, Some(facilities.id)).await?;
    let super_admin = factory::user(&test.db, "Ade", Role::SuperAdmin, None).await?;
    let asset = factory::asset(&test.db, "AST-001", "Desk", Some(facilities.id), None).await?;
    let transfer =
        factory::transfer(&test.db, &asset, engineering.id, requester.id, TransferStatus::Pending)
            .await?;

    let service = TransferService::new(&test.db);
    service
        .reject(&principal_for(&super_admin), transfer.id)
        .await
        .unwrap();

    let approve_after = service
        .approve(&principal_for(&super_admin), transfer.id)
        .await;
    assert!(matches!(approve_after, Err(Error::NotFoundError(_))));

    let untouched = AssetRepository::new(&test.db).find_by_id(asset.id).await?.unwrap();
    assert_eq!(untouched.department_id, Some(facilities.id));

    Ok(())
}
