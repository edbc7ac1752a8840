use custodian_test_utils::prelude::*;
use entity::{app_user::Role, asset_transfer::TransferStatus};

use crate::server::data::transfer::TransferRepository;

/// A new request is pending and freezes the asset's current department
#[tokio::test]
async fn creates_pending_transfer() -> Result<(), TestError> {
    let test = test_setup_with_registry_tables!()?;
    let facilities = factory::department(&test.db, "Facilities").await?;
    let engineering = factory::department(&test.db, "Engineering").await?;
    let requester = factory::user(&test.db, "Riley", Role::User, Some(facilities.id)).await?;
    let asset = factory::asset(&test.db, "AST-001", "Desk", Some(facilities.id), None).await?;

    let repository = TransferRepository::new(&test.db);
    let transfer = repository
        .create(&asset, engineering.id, requester.id, Some("relocation".to_string()))
        .await?;

    assert_eq!(transfer.status, TransferStatus::Pending);
    assert_eq!(transfer.from_department_id, Some(facilities.id));
    assert_eq!(transfer.to_department_id, engineering.id);
    assert_eq!(transfer.requested_by, requester.id);
    assert!(transfer.approved_by.is_none());
    assert!(transfer.approved_at.is_none());

    Ok(())
}

/// `pending_asset_ids` reports only assets with a live pending transfer
#[tokio::test]
async fn pending_asset_ids_skips_resolved_transfers() -> Result<(), TestError> {
    let test = test_setup_with_registry_tables!()?;
    let facilities = factory::department(&test.db, "Facilities").await?;
    let engineering = factory::department(&test.db, "Engineering").await?;
    let requester = factory::user(&test.db, "Riley", Role::User, Some(facilities.id)).await?;
    let moving = factory::asset(&test.db, "AST-001", "Desk", Some(facilities.id), None).await?;
    let settled = factory::asset(&test.db, "AST-002", "Chair", Some(facilities.id), None).await?;

    factory::transfer(&test.db, &moving, engineering.id, requester.id, TransferStatus::Pending)
        .await?;
    factory::transfer(&test.db, &settled, engineering.id, requester.id, TransferStatus::Approved)
        .await?;

    let repository = TransferRepository::new(&test.db);
    let pending = repository.pending_asset_ids(&[moving.id, settled.id]).await?;

    assert_eq!(pending, vec![moving.id]);

    Ok(())
}
