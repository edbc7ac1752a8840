use sea_orm::DatabaseConnection;

use crate::{
    model::location::{LocationDto, SaveLocationDto},
    server::{
        data::{asset::AssetRepository, location::LocationRepository},
        error::{validation::ValidationError, workflow::NotFoundError, Error},
        model::principal::Principal,
        service::policy::{self, Action},
    },
};

pub struct LocationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LocationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<LocationDto>, Error> {
        let locations = LocationRepository::new(self.db).all().await?;

        Ok(locations.into_iter().map(to_dto).collect())
    }

    pub async fn get(&self, id: i32) -> Result<LocationDto, Error> {
        let location = LocationRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or(NotFoundError::record("Location", id))?;

        Ok(to_dto(location))
    }

    pub async fn create(
        &self,
        principal: &Principal,
        input: SaveLocationDto,
    ) -> Result<LocationDto, Error> {
        policy::authorize(principal, &Action::ManageStructure)?;

        if input.name.trim().is_empty() {
            return Err(ValidationError::MissingField("name").into());
        }

        let location = LocationRepository::new(self.db)
            .create(&input.name, input.description)
            .await?;

        Ok(to_dto(location))
    }

    pub async fn update(
        &self,
        principal: &Principal,
        id: i32,
        input: SaveLocationDto,
    ) -> Result<LocationDto, Error> {
        policy::authorize(principal, &Action::ManageStructure)?;

        if input.name.trim().is_empty() {
            return Err(ValidationError::MissingField("name").into());
        }

        let repository = LocationRepository::new(self.db);

        let location = repository
            .find_by_id(id)
            .await?
            .ok_or(NotFoundError::record("Location", id))?;

        let location = repository
            .update(location, &input.name, input.description)
            .await?;

        Ok(to_dto(location))
    }

    /// Deletes a location, refused while any asset still references it.
    pub async fn delete(&self, principal: &Principal, id: i32) -> Result<(), Error> {
        policy::authorize(principal, &Action::ManageStructure)?;

        let repository = LocationRepository::new(self.db);

        repository
            .find_by_id(id)
            .await?
            .ok_or(NotFoundError::record("Location", id))?;

        let assets = AssetRepository::new(self.db).count_by_location(id).await?;

        if assets > 0 {
            return Err(ValidationError::StillReferenced {
                entity: "Location",
                id,
                count: assets,
            }
            .into());
        }

        repository.delete(id).await?;

        Ok(())
    }
}

fn to_dto(location: entity::location::Model) -> LocationDto {
    LocationDto {
        id: location.id,
        name: location.name,
        description: location.description,
    }
}
