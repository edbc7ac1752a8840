use custodian_test_utils::prelude::*;
use entity::app_user::Role;

use crate::server::data::asset::AssetRepository;

/// Substring match is case-insensitive and reaches joined department names
#[tokio::test]
async fn matches_across_fields_and_joined_names() -> Result<(), TestError> {
    let test = test_setup_with_registry_tables!()?;
    let department = factory::department(&test.db, "Facilities").await?;
    let owner = factory::user(&test.db, "Riley", Role::User, Some(department.id)).await?;
    factory::asset(&test.db, "AST-001", "Standing desk", Some(department.id), Some(owner.id))
        .await?;
    factory::asset(&test.db, "AST-002", "Projector", None, None).await?;

    let repository = AssetRepository::new(&test.db);

    // Matches by asset name, any case.
    let by_name = repository.search("DESK", None).await?;
    assert_eq!(by_name.len(), 1);
    assert_eq!(by_name[0].code, "AST-001");

    // Matches by department name through the join.
    let by_department = repository.search("facilities", None).await?;
    assert_eq!(by_department.len(), 1);
    assert_eq!(by_department[0].department_name, Some("Facilities".to_string()));

    // Matches by owner name through the join.
    let by_owner = repository.search("riley", None).await?;
    assert_eq!(by_owner.len(), 1);

    Ok(())
}

/// Rows whose code/inventory/name start with the term sort ahead of
/// substring-only matches
#[tokio::test]
async fn ranks_prefix_matches_first() -> Result<(), TestError> {
    let test = test_setup_with_registry_tables!()?;
    // Substring match only: "desk" appears mid-name.
    factory::asset(&test.db, "AST-001", "Office desk", None, None).await?;
    // Prefix match on name; sorts after "Office desk" alphabetically, so a
    // plain name ordering would put it last.
    factory::asset(&test.db, "ZZ-900", "Desk", None, None).await?;

    let repository = AssetRepository::new(&test.db);
    let results = repository.search("desk", None).await?;

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].code, "ZZ-900");
    assert_eq!(results[1].code, "AST-001");

    Ok(())
}

/// A department filter restricts the result set
#[tokio::test]
async fn respects_department_filter() -> Result<(), TestError> {
    let test = test_setup_with_registry_tables!()?;
    let facilities = factory::department(&test.db, "Facilities").await?;
    let engineering = factory::department(&test.db, "Engineering").await?;
    factory::asset(&test.db, "AST-001", "Desk", Some(facilities.id), None).await?;
    factory::asset(&test.db, "AST-002", "Desk", Some(engineering.id), None).await?;

    let repository = AssetRepository::new(&test.db);
    let results = repository.search("desk", Some(facilities.id)).await?;

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].department_id, Some(facilities.id));

    Ok(())
}
