use axum::{extract::FromRequestParts, http::request::Parts};
use entity::app_user::Role;

use crate::server::{
    data::user::UserRepository, error::policy::AuthorizationError, error::Error,
    model::app::AppState,
};

/// Header carrying the authenticated user id, injected by the fronting auth
/// layer. Session/token handling happens entirely outside this crate.
pub static PRINCIPAL_HEADER: &str = "x-user-id";

/// The already-authenticated caller. Everything the authorization layer
/// needs: identity, role, and department affiliation.
#[derive(Clone, Debug)]
pub struct Principal {
    pub id: i32,
    pub role: Role,
    pub department_id: Option<i32>,
}

impl Principal {
    pub fn is_super_admin(&self) -> bool {
        self.role == Role::SuperAdmin
    }
}

impl From<entity::app_user::Model> for Principal {
    fn from(user: entity::app_user::Model) -> Self {
        Self {
            id: user.id,
            role: user.role,
            department_id: user.department_id,
        }
    }
}

impl FromRequestParts<AppState> for Principal {
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Error> {
        let user_id: i32 = parts
            .headers
            .get(PRINCIPAL_HEADER)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.parse().ok())
            .ok_or(AuthorizationError::MissingPrincipal)?;

        let user = UserRepository::new(&state.db)
            .find_by_id(user_id)
            .await?
            .ok_or(AuthorizationError::UnknownPrincipal(user_id))?;

        Ok(user.into())
    }
}
