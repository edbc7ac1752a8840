use chrono::Utc;
use entity::app_user::Role;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, user_id: i32) -> Result<Option<entity::app_user::Model>, DbErr> {
        entity::prelude::AppUser::find_by_id(user_id).one(self.db).await
    }

    pub async fn create(
        &self,
        name: &str,
        role: Role,
        department_id: Option<i32>,
    ) -> Result<entity::app_user::Model, DbErr> {
        let user = entity::app_user::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            role: ActiveValue::Set(role),
            department_id: ActiveValue::Set(department_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    pub async fn count_by_department(&self, department_id: i32) -> Result<u64, DbErr> {
        entity::prelude::AppUser::find()
            .filter(entity::app_user::Column::DepartmentId.eq(department_id))
            .count(self.db)
            .await
    }
}
