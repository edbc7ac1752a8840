use custodian_test_utils::prelude::*;
use entity::app_user::Role;

use crate::server::data::asset::{AssetRepository, NewAsset};

fn new_asset(code: &str, name: &str, department_id: Option<i32>, owner_id: i32) -> NewAsset {
    NewAsset {
        code: code.to_string(),
        name: name.to_string(),
        inventory_number: None,
        serial_number: None,
        description: None,
        department_id,
        location_id: None,
        room: None,
        owner_id,
        status: "available".to_string(),
        image_ref: None,
        acquired_at: None,
    }
}

/// Expect Ok when inserting an asset with a department and owner
#[tokio::test]
async fn creates_asset_with_department_and_owner() -> Result<(), TestError> {
    let test = test_setup_with_registry_tables!()?;
    let department = factory::department(&test.db, "Facilities").await?;
    let owner = factory::user(&test.db, "Riley", Role::User, Some(department.id)).await?;

    let repository = AssetRepository::new(&test.db);
    let result = repository
        .create(new_asset("AST-001", "Standing desk", Some(department.id), owner.id))
        .await;

    assert!(result.is_ok(), "Error: {:?}", result);
    let created = result.unwrap();
    assert_eq!(created.code, "AST-001");
    assert_eq!(created.department_id, Some(department.id));
    assert_eq!(created.owner_id, Some(owner.id));
    assert_eq!(created.status, "available");

    Ok(())
}

/// Expect Error when inserting without required tables being created
#[tokio::test]
async fn fails_without_tables() -> Result<(), TestError> {
    let test = TestSetup::new().await?;

    let repository = AssetRepository::new(&test.db);
    let result = repository.create(new_asset("AST-001", "Standing desk", None, 1)).await;

    assert!(result.is_err());

    Ok(())
}
