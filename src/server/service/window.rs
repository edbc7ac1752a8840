use sea_orm::DatabaseConnection;

use crate::{
    model::window::EditWindowDto,
    server::{
        data::edit_window::EditWindowRepository,
        error::{validation::ValidationError, Error},
        model::principal::Principal,
        service::policy::{self, Action},
    },
};

pub struct WindowService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WindowService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// The currently configured audit window, if one has been set.
    pub async fn get(&self) -> Result<Option<EditWindowDto>, Error> {
        let window = EditWindowRepository::new(self.db).get().await?;

        Ok(window.map(|window| EditWindowDto {
            start_at: window.start_at,
            end_at: window.end_at,
        }))
    }

    /// Replaces the audit window. Replacing it also resets every
    /// once-per-window edit restriction, since markers are matched against
    /// the new range.
    pub async fn set(
        &self,
        principal: &Principal,
        input: EditWindowDto,
    ) -> Result<EditWindowDto, Error> {
        policy::authorize(principal, &Action::SetEditWindow)?;

        if input.start_at >= input.end_at {
            return Err(ValidationError::InvalidWindowRange.into());
        }

        let window = EditWindowRepository::new(self.db)
            .upsert(input.start_at, input.end_at)
            .await?;

        tracing::info!(start_at = %window.start_at, end_at = %window.end_at, "edit window updated");

        Ok(EditWindowDto {
            start_at: window.start_at,
            end_at: window.end_at,
        })
    }
}
