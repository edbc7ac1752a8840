//! Fixture factories: insert one row and return the created model.

use chrono::{NaiveDateTime, Utc};
use entity::{app_user::Role, asset_transfer::TransferStatus};
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait};

use crate::error::TestError;

pub async fn department<C: ConnectionTrait>(
    db: &C,
    name: &str,
) -> Result<entity::department::Model, TestError> {
    let department = entity::department::ActiveModel {
        name_native: ActiveValue::Set(name.to_string()),
        name_alt: ActiveValue::Set(name.to_uppercase()),
        description: ActiveValue::Set(None),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    };

    Ok(department.insert(db).await?)
}

pub async fn location<C: ConnectionTrait>(
    db: &C,
    name: &str,
) -> Result<entity::location::Model, TestError> {
    let location = entity::location::ActiveModel {
        name: ActiveValue::Set(name.to_string()),
        description: ActiveValue::Set(None),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    };

    Ok(location.insert(db).await?)
}

pub async fn user<C: ConnectionTrait>(
    db: &C,
    name: &str,
    role: Role,
    department_id: Option<i32>,
) -> Result<entity::app_user::Model, TestError> {
    let user = entity::app_user::ActiveModel {
        name: ActiveValue::Set(name.to_string()),
        role: ActiveValue::Set(role),
        department_id: ActiveValue::Set(department_id),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    };

    Ok(user.insert(db).await?)
}

pub async fn status<C: ConnectionTrait>(
    db: &C,
    value: &str,
    label: &str,
) -> Result<entity::status_value::Model, TestError> {
    let status = entity::status_value::ActiveModel {
        value: ActiveValue::Set(value.to_string()),
        label: ActiveValue::Set(label.to_string()),
        color: ActiveValue::Set("#9ca3af".to_string()),
        ..Default::default()
    };

    Ok(status.insert(db).await?)
}

pub async fn asset<C: ConnectionTrait>(
    db: &C,
    code: &str,
    name: &str,
    department_id: Option<i32>,
    owner_id: Option<i32>,
) -> Result<entity::asset::Model, TestError> {
    asset_with_status(db, code, name, department_id, owner_id, "available").await
}

pub async fn asset_with_status<C: ConnectionTrait>(
    db: &C,
    code: &str,
    name: &str,
    department_id: Option<i32>,
    owner_id: Option<i32>,
    status: &str,
) -> Result<entity::asset::Model, TestError> {
    let now = Utc::now().naive_utc();

    let asset = entity::asset::ActiveModel {
        code: ActiveValue::Set(code.to_string()),
        inventory_number: ActiveValue::Set(None),
        serial_number: ActiveValue::Set(None),
        name: ActiveValue::Set(name.to_string()),
        description: ActiveValue::Set(None),
        department_id: ActiveValue::Set(department_id),
        location_id: ActiveValue::Set(None),
        room: ActiveValue::Set(None),
        owner_id: ActiveValue::Set(owner_id),
        status: ActiveValue::Set(status.to_string()),
        image_ref: ActiveValue::Set(None),
        acquired_at: ActiveValue::Set(None),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    };

    Ok(asset.insert(db).await?)
}

pub async fn transfer<C: ConnectionTrait>(
    db: &C,
    asset: &entity::asset::Model,
    to_department_id: i32,
    requested_by: i32,
    transfer_status: TransferStatus,
) -> Result<entity::asset_transfer::Model, TestError> {
    let transfer = entity::asset_transfer::ActiveModel {
        asset_id: ActiveValue::Set(asset.id),
        from_department_id: ActiveValue::Set(asset.department_id),
        to_department_id: ActiveValue::Set(to_department_id),
        requested_by: ActiveValue::Set(requested_by),
        status: ActiveValue::Set(transfer_status),
        note: ActiveValue::Set(None),
        requested_at: ActiveValue::Set(Utc::now().naive_utc()),
        approved_by: ActiveValue::Set(None),
        approved_at: ActiveValue::Set(None),
        ..Default::default()
    };

    Ok(transfer.insert(db).await?)
}

pub async fn audit<C: ConnectionTrait>(
    db: &C,
    asset: &entity::asset::Model,
    user_id: i32,
    status: &str,
    confirmed: bool,
) -> Result<entity::asset_audit::Model, TestError> {
    let audit = entity::asset_audit::ActiveModel {
        asset_id: ActiveValue::Set(asset.id),
        user_id: ActiveValue::Set(user_id),
        department_id: ActiveValue::Set(asset.department_id),
        status: ActiveValue::Set(status.to_string()),
        note: ActiveValue::Set(None),
        checked_at: ActiveValue::Set(Utc::now().naive_utc()),
        confirmed: ActiveValue::Set(confirmed),
        ..Default::default()
    };

    Ok(audit.insert(db).await?)
}

/// Sets the singleton edit window to the given range.
pub async fn edit_window<C: ConnectionTrait>(
    db: &C,
    start_at: NaiveDateTime,
    end_at: NaiveDateTime,
) -> Result<entity::edit_window::Model, TestError> {
    let window = entity::edit_window::ActiveModel {
        name: ActiveValue::Set("audit-window".to_string()),
        start_at: ActiveValue::Set(start_at),
        end_at: ActiveValue::Set(end_at),
    };

    Ok(window.insert(db).await?)
}

/// An edit window spanning the current moment.
pub async fn active_edit_window<C: ConnectionTrait>(
    db: &C,
) -> Result<entity::edit_window::Model, TestError> {
    let now = Utc::now().naive_utc();

    edit_window(db, now - chrono::Duration::hours(1), now + chrono::Duration::hours(1)).await
}
