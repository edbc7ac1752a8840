use chrono::NaiveDateTime;
use migration::OnConflict;
use sea_orm::{ActiveValue, ConnectionTrait, DbErr, EntityTrait};

/// Fixed key of the singleton configuration row.
pub static WINDOW_NAME: &str = "audit-window";

pub struct EditWindowRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EditWindowRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get(&self) -> Result<Option<entity::edit_window::Model>, DbErr> {
        entity::prelude::EditWindow::find_by_id(WINDOW_NAME).one(self.db).await
    }

    /// Inserts or replaces the singleton window row.
    pub async fn upsert(
        &self,
        start_at: NaiveDateTime,
        end_at: NaiveDateTime,
    ) -> Result<entity::edit_window::Model, DbErr> {
        let window = entity::edit_window::ActiveModel {
            name: ActiveValue::Set(WINDOW_NAME.to_string()),
            start_at: ActiveValue::Set(start_at),
            end_at: ActiveValue::Set(end_at),
        };

        entity::prelude::EditWindow::insert(window)
            .on_conflict(
                OnConflict::column(entity::edit_window::Column::Name)
                    .update_columns([
                        entity::edit_window::Column::StartAt,
                        entity::edit_window::Column::EndAt,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(self.db)
            .await
    }
}
