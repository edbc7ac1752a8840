//! Tests for DepartmentService, chiefly the count-guarded delete.

use custodian::{
    model::department::SaveDepartmentDto,
    server::{error::Error, service::department::DepartmentService},
};
use custodian_test_utils::prelude::*;
use entity::app_user::Role;

use crate::service::principal;

/// A department with assets or users cannot be deleted.
#[tokio::test]
async fn delete_is_refused_while_referenced() -> Result<(), TestError> {
    let test = test_setup_with_registry_tables!()?;
    let department = factory::department(&test.db, "Facilities").await?;
    factory::user(&test.db, "Riley", Role::User, Some(department.id)).await?;
    factory::asset(&test.db, "AST-001", "Desk", Some(department.id), None).await?;

    let super_admin = principal(99, Role::SuperAdmin, None);

    let service = DepartmentService::new(&test.db);
    let result = service.delete(&super_admin, department.id).await;

    assert!(matches!(result, Err(Error::ValidationError(_))));
    assert!(service.get(department.id).await.is_ok());

    Ok(())
}

/// An empty department deletes cleanly.
#[tokio::test]
async fn delete_succeeds_when_empty() -> Result<(), TestError> {
    let test = test_setup_with_registry_tables!()?;
    let department = factory::department(&test.db, "Facilities").await?;

    let super_admin = principal(99, Role::SuperAdmin, None);

    let service = DepartmentService::new(&test.db);
    service.delete(&super_admin, department.id).await.unwrap();

    let result = service.get(department.id).await;
    assert!(matches!(result, Err(Error::NotFoundError(_))));

    Ok(())
}

/// Only super administrators manage departments.
#[tokio::test]
async fn mutations_require_super_admin() -> Result<(), TestError> {
    let test = test_setup_with_registry_tables!()?;
    let admin = principal(1, Role::Admin, Some(1));

    let service = DepartmentService::new(&test.db);
    let result = service
        .create(
            &admin,
            SaveDepartmentDto {
                name_native: "Facilities".to_string(),
                name_alt: "FAC".to_string(),
                description: None,
            },
        )
        .await;

    assert!(matches!(result, Err(Error::AuthorizationError(_))));

    Ok(())
}
