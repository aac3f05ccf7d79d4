use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entity::user;
use crate::error::AppError;
use crate::models::shared::present;

/// Request body for creating a user. Every field is required.
#[derive(Deserialize, utoipa::ToSchema)]
pub struct CreateUserRequest {
    #[schema(example = "lskywalker")]
    pub username: Option<String>,
    #[schema(example = "Luke Skywalker")]
    pub name: Option<String>,
    #[schema(example = "luke@rebellion.org")]
    pub email: Option<String>,
    #[schema(example = "usetheforce")]
    pub password: Option<String>,
}

/// Fields of a [`CreateUserRequest`] after presence checks.
#[derive(Debug, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub name: String,
    pub email: String,
    pub password: String,
}

fn missing(field: &str) -> AppError {
    AppError::Validation(format!("Se debe enviar correctamente el {field}"))
}

/// Check that each field is present, in declaration order, and trim the text fields.
pub fn validate_create_user(payload: &CreateUserRequest) -> Result<NewUser, AppError> {
    let username = present(payload.username.as_deref()).ok_or_else(|| missing("username"))?;
    let name = present(payload.name.as_deref()).ok_or_else(|| missing("name"))?;
    let email = present(payload.email.as_deref()).ok_or_else(|| missing("email"))?;
    // Passwords are kept byte for byte; only emptiness is rejected.
    let password = payload
        .password
        .as_deref()
        .filter(|p| !p.is_empty())
        .ok_or_else(|| missing("password"))?;

    Ok(NewUser {
        username: username.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        password: password.to_string(),
    })
}

/// A user as exposed by the API. The password is never serialized.
#[derive(Serialize, utoipa::ToSchema)]
pub struct UserResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "lskywalker")]
    pub username: String,
    #[schema(example = "Luke Skywalker")]
    pub name: String,
    #[schema(example = "luke@rebellion.org")]
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<user::Model> for UserResponse {
    fn from(m: user::Model) -> Self {
        Self {
            id: m.id,
            username: m.username,
            name: m.name,
            email: m.email,
            created_at: m.created_at,
        }
    }
}
