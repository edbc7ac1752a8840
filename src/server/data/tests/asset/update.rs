use custodian_test_utils::prelude::*;
use entity::app_user::Role;

use crate::server::data::asset::{AssetChanges, AssetRepository};

/// Only the supplied fields change; everything else is preserved
#[tokio::test]
async fn applies_partial_changes() -> Result<(), TestError> {
    let test = test_setup_with_registry_tables!()?;
    let department = factory::department(&test.db, "Facilities").await?;
    let owner = factory::user(&test.db, "Riley", Role::User, Some(department.id)).await?;
    let asset =
        factory::asset(&test.db, "AST-001", "Standing desk", Some(department.id), Some(owner.id))
            .await?;

    let repository = AssetRepository::new(&test.db);
    let updated = repository
        .update(
            asset.clone(),
            AssetChanges {
                name: Some("Adjustable desk".to_string()),
                room: Some("B-204".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.name, "Adjustable desk");
    assert_eq!(updated.room, Some("B-204".to_string()));
    assert_eq!(updated.code, asset.code);
    assert_eq!(updated.status, asset.status);
    assert_eq!(updated.department_id, asset.department_id);

    Ok(())
}

/// `set_department` moves ownership and reports the affected row
#[tokio::test]
async fn set_department_moves_asset() -> Result<(), TestError> {
    let test = test_setup_with_registry_tables!()?;
    let facilities = factory::department(&test.db, "Facilities").await?;
    let engineering = factory::department(&test.db, "Engineering").await?;
    let asset =
        factory::asset(&test.db, "AST-001", "Standing desk", Some(facilities.id), None).await?;

    let repository = AssetRepository::new(&test.db);
    let moved = repository.set_department(asset.id, engineering.id).await?;

    assert_eq!(moved, 1);
    let reloaded = repository.find_by_id(asset.id).await?.unwrap();
    assert_eq!(reloaded.department_id, Some(engineering.id));

    Ok(())
}
