//! Tests for AuditService::submit, including the verification-log
//! asymmetry: assertions never touch the asset's authoritative status.

use custodian::{
    model::audit::CreateAuditDto,
    server::{
        data::asset::AssetRepository,
        error::Error,
        service::{asset::AssetService, audit::AuditService, resolver},
    },
};
use custodian_test_utils::prelude::*;
use entity::app_user::Role;

use crate::service::principal_for;

/// An assertion flips the display to Pending while leaving the asset's
/// authoritative status untouched; confirmation reverts the display to the
/// catalog label of the unchanged status.
#[tokio::test]
async fn assertion_is_a_log_entry_not_a_status_write() -> Result<(), TestError> {
    let test = test_setup_with_registry_tables!()?;
    factory::status(&test.db, "available", "Available").await?;
    factory::status(&test.db, "damaged", "Damaged").await?;
    let facilities = factory::department(&test.db, "Facilities").await?;
    let auditor = factory::user(&test.db, "Riley", Role::User, Some(facilities.id)).await?;
    let admin = factory::user(&test.db, "Morgan", Role::Admin, Some(facilities.id)).await?;
    let asset = factory::asset(&test.db, "AST-001", "Desk", Some(facilities.id), None).await?;

    let audit_service = AuditService::new(&test.db);
    let asset_service = AssetService::new(&test.db);

    let audit = audit_service
        .submit(
            &principal_for(&auditor),
            CreateAuditDto {
                asset_id: asset.id,
                status: "damaged".to_string(),
                note: Some("scratched surface".to_string()),
            },
        )
        .await
        .unwrap();

    assert!(!audit.confirmed);
    assert_eq!(audit.status, "damaged");
    assert_eq!(audit.department_id, Some(facilities.id));

    let displayed = asset_service
        .get(&principal_for(&admin), asset.id)
        .await
        .unwrap();
    assert_eq!(displayed.display_status, resolver::DISPLAY_PENDING);

    // The authoritative status never moved.
    let stored = AssetRepository::new(&test.db).find_by_id(asset.id).await?.unwrap();
    assert_eq!(stored.status, "available");

    let confirmed = audit_service
        .confirm(&principal_for(&admin), vec![audit.id])
        .await
        .unwrap();
    assert_eq!(confirmed, 1);

    // With nothing outstanding, the display reverts to the catalog label of
    // the unchanged authoritative status.
    let displayed = asset_service
        .get(&principal_for(&admin), asset.id)
        .await
        .unwrap();
    assert_eq!(displayed.display_status, "Available");

    let stored = AssetRepository::new(&test.db).find_by_id(asset.id).await?.unwrap();
    assert_eq!(stored.status, "available");

    Ok(())
}

/// The asserted status must resolve against the live catalog.
#[tokio::test]
async fn rejects_unknown_status() -> Result<(), TestError> {
    let test = test_setup_with_registry_tables!()?;
    let facilities = factory::department(&test.db, "Facilities").await?;
    let auditor = factory::user(&test.db, "Riley", Role::User, Some(facilities.id)).await?;
    let asset = factory::asset(&test.db, "AST-001", "Desk", Some(facilities.id), None).await?;

    let service = AuditService::new(&test.db);
    let result = service
        .submit(
            &principal_for(&auditor),
            CreateAuditDto {
                asset_id: asset.id,
                status: "vaporized".to_string(),
                note: None,
            },
        )
        .await;

    assert!(matches!(result, Err(Error::ValidationError(_))));

    Ok(())
}

/// Only department-eligible principals may audit an asset.
#[tokio::test]
async fn requires_department_eligibility() -> Result<(), TestError> {
    let test = test_setup_with_registry_tables!()?;
    factory::status(&test.db, "available", "Available").await?;
    let facilities = factory::department(&test.db, "Facilities").await?;
    let engineering = factory::department(&test.db, "Engineering").await?;
    let outsider = factory::user(&test.db, "Riley", Role::User, Some(engineering.id)).await?;
    let asset = factory::asset(&test.db, "AST-001", "Desk", Some(facilities.id), None).await?;

    let service = AuditService::new(&test.db);
    let result = service
        .submit(
            &principal_for(&outsider),
            CreateAuditDto {
                asset_id: asset.id,
                status: "available".to_string(),
                note: None,
            },
        )
        .await;

    assert!(matches!(result, Err(Error::AuthorizationError(_))));

    Ok(())
}
