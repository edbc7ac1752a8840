use sea_orm::DatabaseConnection;

use crate::{
    model::department::{DepartmentDto, SaveDepartmentDto},
    server::{
        data::{
            asset::AssetRepository, department::DepartmentRepository, user::UserRepository,
        },
        error::{validation::ValidationError, workflow::NotFoundError, Error},
        model::principal::Principal,
        service::policy::{self, Action},
    },
};

pub struct DepartmentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DepartmentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<DepartmentDto>, Error> {
        let departments = DepartmentRepository::new(self.db).all().await?;

        Ok(departments.into_iter().map(to_dto).collect())
    }

    pub async fn get(&self, id: i32) -> Result<DepartmentDto, Error> {
        let department = DepartmentRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or(NotFoundError::record("Department", id))?;

        Ok(to_dto(department))
    }

    pub async fn create(
        &self,
        principal: &Principal,
        input: SaveDepartmentDto,
    ) -> Result<DepartmentDto, Error> {
        policy::authorize(principal, &Action::ManageStructure)?;
        validate_fields(&input)?;

        let department = DepartmentRepository::new(self.db)
            .create(&input.name_native, &input.name_alt, input.description)
            .await?;

        Ok(to_dto(department))
    }

    pub async fn update(
        &self,
        principal: &Principal,
        id: i32,
        input: SaveDepartmentDto,
    ) -> Result<DepartmentDto, Error> {
        policy::authorize(principal, &Action::ManageStructure)?;
        validate_fields(&input)?;

        let repository = DepartmentRepository::new(self.db);

        let department = repository
            .find_by_id(id)
            .await?
            .ok_or(NotFoundError::record("Department", id))?;

        let department = repository
            .update(department, &input.name_native, &input.name_alt, input.description)
            .await?;

        Ok(to_dto(department))
    }

    /// Deletes a department, refused while any asset or user still
    /// references it.
    pub async fn delete(&self, principal: &Principal, id: i32) -> Result<(), Error> {
        policy::authorize(principal, &Action::ManageStructure)?;

        let repository = DepartmentRepository::new(self.db);

        repository
            .find_by_id(id)
            .await?
            .ok_or(NotFoundError::record("Department", id))?;

        let assets = AssetRepository::new(self.db).count_by_department(id).await?;
        let users = UserRepository::new(self.db).count_by_department(id).await?;

        if assets + users > 0 {
            return Err(ValidationError::StillReferenced {
                entity: "Department",
                id,
                count: assets + users,
            }
            .into());
        }

        repository.delete(id).await?;

        Ok(())
    }
}

fn validate_fields(input: &SaveDepartmentDto) -> Result<(), ValidationError> {
    if input.name_native.trim().is_empty() {
        return Err(ValidationError::MissingField("name_native"));
    }
    if input.name_alt.trim().is_empty() {
        return Err(ValidationError::MissingField("name_alt"));
    }

    Ok(())
}

fn to_dto(department: entity::department::Model) -> DepartmentDto {
    DepartmentDto {
        id: department.id,
        name_native: department.name_native,
        name_alt: department.name_alt,
        description: department.description,
    }
}
