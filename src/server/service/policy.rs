//! Visibility and edit policy.
//!
//! All role/department branching funnels through [`authorize`], evaluated
//! once per request, instead of being repeated inside handlers. The
//! edit-window restriction needs the database and lives on
//! [`PolicyService`].

use chrono::Utc;
use entity::app_user::Role;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        audit::AuditRepository, edit_window::EditWindowRepository, transfer::TransferRepository,
    },
    error::{policy::AuthorizationError, Error},
    model::principal::Principal,
};

/// A protected operation, carrying the resource the check depends on.
pub enum Action<'a> {
    CreateAsset { department_id: Option<i32> },
    EditAsset(&'a entity::asset::Model),
    DeleteAsset,
    SubmitAudit(&'a entity::asset::Model),
    ConfirmAudits,
    ResolveTransfer(&'a entity::asset_transfer::Model),
    EditCatalog,
    ManageStructure,
    SetEditWindow,
}

/// Capability resolution: may `principal` perform `action`?
pub fn authorize(principal: &Principal, action: &Action<'_>) -> Result<(), AuthorizationError> {
    if principal.is_super_admin() {
        return Ok(());
    }

    match action {
        Action::CreateAsset { department_id } => {
            let own = own_department(principal)?;
            match department_id {
                Some(department) if *department != own => {
                    Err(AuthorizationError::OutsideDepartment)
                }
                _ => Ok(()),
            }
        }
        Action::EditAsset(asset) | Action::SubmitAudit(asset) => {
            let own = own_department(principal)?;
            if asset.department_id == Some(own) {
                Ok(())
            } else {
                Err(AuthorizationError::OutsideDepartment)
            }
        }
        Action::ResolveTransfer(transfer) => {
            if principal.role != Role::Admin {
                return Err(AuthorizationError::RoleForbidden);
            }
            if principal.department_id == Some(transfer.to_department_id) {
                Ok(())
            } else {
                Err(AuthorizationError::OutsideDepartment)
            }
        }
        Action::ConfirmAudits => match principal.role {
            Role::Admin => Ok(()),
            _ => Err(AuthorizationError::RoleForbidden),
        },
        Action::EditCatalog => match principal.role {
            Role::Admin => Ok(()),
            _ => Err(AuthorizationError::RoleForbidden),
        },
        Action::DeleteAsset | Action::ManageStructure | Action::SetEditWindow => {
            Err(AuthorizationError::RoleForbidden)
        }
    }
}

fn own_department(principal: &Principal) -> Result<i32, AuthorizationError> {
    principal
        .department_id
        .ok_or(AuthorizationError::RoleForbidden)
}

/// What a principal may see when reading assets without an explicit
/// department filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadScope {
    All,
    Department(i32),
    Nothing,
}

pub fn asset_read_scope(principal: &Principal) -> ReadScope {
    match principal.role {
        Role::SuperAdmin => ReadScope::All,
        Role::Admin => principal
            .department_id
            .map(ReadScope::Department)
            .unwrap_or(ReadScope::Nothing),
        // Unaffiliated users keep a global read-only view.
        Role::User => principal
            .department_id
            .map(ReadScope::Department)
            .unwrap_or(ReadScope::All),
    }
}

/// Effective department for a department-scoped read. `None` means the
/// caller sees an empty result set: no department, no data.
pub fn department_read_scope(principal: &Principal, department_id: i32) -> Option<i32> {
    match principal.role {
        Role::SuperAdmin => Some(department_id),
        _ => match principal.department_id {
            Some(own) if own == department_id => Some(department_id),
            _ => None,
        },
    }
}

pub struct PolicyService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PolicyService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Enforces the one-edit-per-asset rule of the active audit window.
    ///
    /// Returns the active window, if any, after checking that the principal
    /// has not already touched `asset_id` inside it. The marker is an audit
    /// assertion or transfer request authored by the principal with a
    /// timestamp inside the window, so the restriction resets by itself
    /// when the window closes or is replaced. Super administrators edit at
    /// any time.
    pub async fn check_edit_window(
        &self,
        principal: &Principal,
        asset_id: i32,
    ) -> Result<Option<entity::edit_window::Model>, Error> {
        let Some(window) = EditWindowRepository::new(self.db).get().await? else {
            return Ok(None);
        };

        let now = Utc::now().naive_utc();
        if now < window.start_at || now > window.end_at {
            return Ok(None);
        }

        if principal.is_super_admin() {
            return Ok(Some(window));
        }

        let audited = AuditRepository::new(self.db)
            .checked_in_range(principal.id, asset_id, window.start_at, window.end_at)
            .await?;
        let requested = TransferRepository::new(self.db)
            .requested_in_range(principal.id, asset_id, window.start_at, window.end_at)
            .await?;

        if audited || requested {
            return Err(AuthorizationError::EditWindowExhausted { asset_id }.into());
        }

        Ok(Some(window))
    }
}
