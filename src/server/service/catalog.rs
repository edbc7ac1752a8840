//! Status catalog: the admin-editable list of valid lifecycle statuses.
//!
//! Every write path that touches a status value validates it here against
//! the live table. Catalog deletion is deliberately unguarded: assets left
//! pointing at a removed value keep working, the resolver falls back to the
//! raw value for display.

use sea_orm::{ConnectionTrait, DatabaseConnection};

use crate::{
    model::status::{SaveStatusValueDto, StatusValueDto},
    server::{
        data::status::StatusRepository,
        error::{validation::ValidationError, workflow::NotFoundError, Error},
        model::principal::Principal,
        service::policy::{self, Action},
    },
};

/// Neutral gray applied when a catalog entry is saved without a color.
pub static DEFAULT_COLOR: &str = "#9ca3af";

/// Rejects a status value that does not resolve against the live catalog.
pub async fn require_status<C: ConnectionTrait>(db: &C, value: &str) -> Result<(), Error> {
    match StatusRepository::new(db).find_by_value(value).await? {
        Some(_) => Ok(()),
        None => Err(ValidationError::UnknownStatus(value.to_string()).into()),
    }
}

pub struct CatalogService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CatalogService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<StatusValueDto>, Error> {
        let statuses = StatusRepository::new(self.db).all().await?;

        Ok(statuses.into_iter().map(to_dto).collect())
    }

    pub async fn get(&self, id: i32) -> Result<StatusValueDto, Error> {
        let status = StatusRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or(NotFoundError::record("Status", id))?;

        Ok(to_dto(status))
    }

    pub async fn create(
        &self,
        principal: &Principal,
        input: SaveStatusValueDto,
    ) -> Result<StatusValueDto, Error> {
        policy::authorize(principal, &Action::EditCatalog)?;
        validate_fields(&input)?;

        let repository = StatusRepository::new(self.db);

        if repository.find_by_value(&input.value).await?.is_some() {
            return Err(ValidationError::DuplicateStatusValue(input.value).into());
        }

        let color = input.color.as_deref().unwrap_or(DEFAULT_COLOR);
        let status = repository
            .create(&input.value, &input.label, color)
            .await?;

        Ok(to_dto(status))
    }

    /// Updates a catalog entry. The legacy behavior of skipping a
    /// uniqueness re-check on the value is preserved: an update may collide
    /// with an existing value and fail on the database constraint.
    pub async fn update(
        &self,
        principal: &Principal,
        id: i32,
        input: SaveStatusValueDto,
    ) -> Result<StatusValueDto, Error> {
        policy::authorize(principal, &Action::EditCatalog)?;
        validate_fields(&input)?;

        let repository = StatusRepository::new(self.db);

        let status = repository
            .find_by_id(id)
            .await?
            .ok_or(NotFoundError::record("Status", id))?;

        let color = input.color.as_deref().unwrap_or(DEFAULT_COLOR);
        let status = repository
            .update(status, &input.value, &input.label, color)
            .await?;

        Ok(to_dto(status))
    }

    /// Deletes a catalog entry without checking whether assets still use the
    /// value.
    pub async fn delete(&self, principal: &Principal, id: i32) -> Result<(), Error> {
        policy::authorize(principal, &Action::EditCatalog)?;

        let result = StatusRepository::new(self.db).delete(id).await?;

        if result.rows_affected == 0 {
            return Err(NotFoundError::record("Status", id).into());
        }

        Ok(())
    }
}

fn validate_fields(input: &SaveStatusValueDto) -> Result<(), ValidationError> {
    if input.value.trim().is_empty() {
        return Err(ValidationError::MissingField("value"));
    }
    if input.label.trim().is_empty() {
        return Err(ValidationError::MissingField("label"));
    }

    Ok(())
}

fn to_dto(status: entity::status_value::Model) -> StatusValueDto {
    StatusValueDto {
        id: status.id,
        value: status.value,
        label: status.label,
        color: status.color,
    }
}
