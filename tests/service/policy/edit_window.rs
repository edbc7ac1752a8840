//! Tests for the one-edit-per-asset rule of the active audit window.

use chrono::{Duration, Utc};
use custodian::{
    model::asset::UpdateAssetDto,
    server::{
        data::edit_window::EditWindowRepository,
        error::Error,
        service::asset::AssetService,
    },
};
use custodian_test_utils::prelude::*;
use entity::app_user::Role;
use sea_orm::EntityTrait;

use crate::service::principal_for;

fn rename(name: &str) -> UpdateAssetDto {
    UpdateAssetDto {
        name: Some(name.to_string()),
        ..Default::default()
    }
}

/// Inside an active window the first edit succeeds and records a count
/// assertion; a second edit of the same asset by the same principal is
/// forbidden.
#[tokio::test]
async fn one_edit_per_asset_per_window() -> Result<(), TestError> {
    let test = test_setup_with_registry_tables!()?;
    factory::status(&test.db, "available", "Available").await?;
    let facilities = factory::department(&test.db, "Facilities").await?;
    let editor = factory::user(&test.db, "Riley", Role::User, Some(facilities.id)).await?;
    let asset = factory::asset(&test.db, "AST-001", "Desk", Some(facilities.id), None).await?;
    factory::active_edit_window(&test.db).await?;

    let service = AssetService::new(&test.db);

    let first = service
        .update(&principal_for(&editor), asset.id, rename("Desk A"))
        .await;
    assert!(first.is_ok(), "Error: {:?}", first.err());

    // The counted edit left an unconfirmed assertion of the asset's status.
    let audits = entity::prelude::AssetAudit::find().all(&test.db).await?;
    assert_eq!(audits.len(), 1);
    assert_eq!(audits[0].user_id, editor.id);
    assert_eq!(audits[0].status, "available");
    assert!(!audits[0].confirmed);

    let second = service
        .update(&principal_for(&editor), asset.id, rename("Desk B"))
        .await;
    assert!(matches!(second, Err(Error::AuthorizationError(_))));

    Ok(())
}

/// The restriction is per asset and per principal.
#[tokio::test]
async fn restriction_is_per_asset_and_principal() -> Result<(), TestError> {
    let test = test_setup_with_registry_tables!()?;
    factory::status(&test.db, "available", "Available").await?;
    let facilities = factory::department(&test.db, "Facilities").await?;
    let riley = factory::user(&test.db, "Riley", Role::User, Some(facilities.id)).await?;
    let morgan = factory::user(&test.db, "Morgan", Role::User, Some(facilities.id)).await?;
    let desk = factory::asset(&test.db, "AST-001", "Desk", Some(facilities.id), None).await?;
    let chair = factory::asset(&test.db, "AST-002", "Chair", Some(facilities.id), None).await?;
    factory::active_edit_window(&test.db).await?;

    let service = AssetService::new(&test.db);

    service
        .update(&principal_for(&riley), desk.id, rename("Desk A"))
        .await
        .unwrap();

    // Same principal, different asset: allowed.
    let other_asset = service
        .update(&principal_for(&riley), chair.id, rename("Chair A"))
        .await;
    assert!(other_asset.is_ok());

    // Different principal, same asset: allowed.
    let other_user = service
        .update(&principal_for(&morgan), desk.id, rename("Desk B"))
        .await;
    assert!(other_user.is_ok());

    Ok(())
}

/// Super administrators edit at any time, without leaving count markers.
#[tokio::test]
async fn super_admin_bypasses_the_window() -> Result<(), TestError> {
    let test = test_setup_with_registry_tables!()?;
    factory::status(&test.db, "available", "Available").await?;
    let facilities = factory::department(&test.db, "Facilities").await?;
    let super_admin = factory::user(&test.db, "Ade", Role::SuperAdmin, None).await?;
    let asset = factory::asset(&test.db, "AST-001", "Desk", Some(facilities.id), None).await?;
    factory::active_edit_window(&test.db).await?;

    let service = AssetService::new(&test.db);

    for name in ["Desk A", "Desk B", "Desk C"] {
        let result = service
            .update(&principal_for(&super_admin), asset.id, rename(name))
            .await;
        assert!(result.is_ok());
    }

    let audits = entity::prelude::AssetAudit::find().all(&test.db).await?;
    assert!(audits.is_empty());

    Ok(())
}

/// Outside any active window ordinary permissions apply without the
/// once-only restriction, and no assertions are recorded.
#[tokio::test]
async fn no_restriction_outside_the_window() -> Result<(), TestError> {
    let test = test_setup_with_registry_tables!()?;
    factory::status(&test.db, "available", "Available").await?;
    let facilities = factory::department(&test.db, "Facilities").await?;
    let editor = factory::user(&test.db, "Riley", Role::User, Some(facilities.id)).await?;
    let asset = factory::asset(&test.db, "AST-001", "Desk", Some(facilities.id), None).await?;

    // A window that already closed.
    let now = Utc::now().naive_utc();
    factory::edit_window(&test.db, now - Duration::days(30), now - Duration::days(20)).await?;

    let service = AssetService::new(&test.db);

    for name in ["Desk A", "Desk B"] {
        let result = service
            .update(&principal_for(&editor), asset.id, rename(name))
            .await;
        assert!(result.is_ok());
    }

    let audits = entity::prelude::AssetAudit::find().all(&test.db).await?;
    assert!(audits.is_empty());

    Ok(())
}

/// Replacing the window resets the restriction: markers from the old range
/// no longer count.
#[tokio::test]
async fn replacing_the_window_resets_the_restriction() -> Result<(), TestError> {
    let test = test_setup_with_registry_tables!()?;
    factory::status(&test.db, "available", "Available").await?;
    let facilities = factory::department(&test.db, "Facilities").await?;
    let editor = factory::user(&test.db, "Riley", Role::User, Some(facilities.id)).await?;
    let asset = factory::asset(&test.db, "AST-001", "Desk", Some(facilities.id), None).await?;
    factory::active_edit_window(&test.db).await?;

    let service = AssetService::new(&test.db);

    service
        .update(&principal_for(&editor), asset.id, rename("Desk A"))
        .await
        .unwrap();

    let blocked = service
        .update(&principal_for(&editor), asset.id, rename("Desk B"))
        .await;
    assert!(matches!(blocked, Err(Error::AuthorizationError(_))));

    // A new window starting after the existing marker.
    let now = Utc::now().naive_utc();
    EditWindowRepository::new(&test.db)
        .upsert(now + chrono::Duration::hours(1), now + chrono::Duration::hours(2))
        .await?;

    // The new window is not active yet, so ordinary permissions apply.
    let after_reset = service
        .update(&principal_for(&editor), asset.id, rename("Desk C"))
        .await;
    assert!(after_reset.is_ok());

    Ok(())
}
