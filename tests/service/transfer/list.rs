//! Tests for TransferService::list and ::history.

use custodian::{
    model::transfer::{TransferDirection, TransferListQuery},
    server::service::transfer::TransferService,
};
use custodian_test_utils::prelude::*;
use entity::{app_user::Role, asset_transfer::TransferStatus};

use crate::service::{principal, principal_for};

fn query(
    direction: Option<TransferDirection>,
    status: Option<&str>,
    department_id: Option<i32>,
) -> TransferListQuery {
    TransferListQuery {
        direction,
        status: status.map(str::to_string),
        department_id,
    }
}

/// Direction filters are relative to the caller's own department.
#[tokio::test]
async fn list_filters_by_direction_and_status() -> Result<(), TestError> {
    let test = test_setup_with_registry_tables!()?;
    let facilities = factory::department(&test.db, "Facilities").await?;
    let engineering = factory::department(&test.db, "Engineering").await?;
    let requester = factory::user(&test.db, "Riley", Role::User, Some(facilities.id)).await?;
    let admin = factory::user(&test.db, "Morgan", Role::Admin, Some(facilities.id)).await?;
    let outbound_asset =
        factory::asset(&test.db, "AST-001", "Desk", Some(facilities.id), None).await?;
    let inbound_asset =
        factory::asset(&test.db, "AST-002", "Scope", Some(engineering.id), None).await?;

    // Out of facilities, and into facilities.
    factory::transfer(&test.db, &outbound_asset, engineering.id, requester.id, TransferStatus::Pending)
        .await?;
    factory::transfer(&test.db, &inbound_asset, facilities.id, requester.id, TransferStatus::Approved)
        .await?;

    let service = TransferService::new(&test.db);
    let caller = principal_for(&admin);

    let outgoing = service
        .list(&caller, query(Some(TransferDirection::Outgoing), None, None))
        .await?;
    assert_eq!(outgoing.len(), 1);
    assert_eq!(outgoing[0].asset_id, outbound_asset.id);

    let incoming = service
        .list(&caller, query(Some(TransferDirection::Incoming), None, None))
        .await?;
    assert_eq!(incoming.len(), 1);
    assert_eq!(incoming[0].asset_id, inbound_asset.id);

    let pending_only = service.list(&caller, query(None, Some("pending"), None)).await?;
    assert_eq!(pending_only.len(), 1);
    assert_eq!(pending_only[0].status, "pending");

    // Without a department there is nothing to see.
    let unaffiliated = principal(42, Role::User, None);
    let nothing = service.list(&unaffiliated, query(None, None, None)).await?;
    assert!(nothing.is_empty());

    Ok(())
}

/// History is chronological and unscoped by department.
#[tokio::test]
async fn history_is_chronological_and_unscoped() -> Result<(), TestError> {
    let test = test_setup_with_registry_tables!()?;
    let facilities = factory::department(&test.db, "Facilities").await?;
    let engineering = factory::department(&test.db, "Engineering").await?;
    let requester = factory::user(&test.db, "Riley", Role::User, Some(facilities.id)).await?;
    let asset = factory::asset(&test.db, "AST-001", "Desk", Some(facilities.id), None).await?;

    let rejected =
        factory::transfer(&test.db, &asset, engineering.id, requester.id, TransferStatus::Rejected)
            .await?;
    let pending =
        factory::transfer(&test.db, &asset, engineering.id, requester.id, TransferStatus::Pending)
            .await?;

    let service = TransferService::new(&test.db);
    let log = service.history(asset.id).await?;

    assert_eq!(log.len(), 2);
    assert_eq!(log[0].id, rejected.id);
    assert_eq!(log[1].id, pending.id);

    Ok(())
}
