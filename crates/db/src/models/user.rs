//! User account entity model and DTOs.

use cpms_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Full user row from the `users` table.
///
/// Contains the password hash and salt -- NEVER serialize this to API
/// responses directly. Use [`UserResponse`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub email: String,
    pub password_hash: String,
    pub salt: String,
    pub created_at: Timestamp,
}

/// Safe user representation for API responses (no credential material).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: DbId,
    pub email: String,
    pub created_at: Timestamp,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            created_at: user.created_at,
        }
    }
}

/// Request body for registering a new user.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterUser {
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    #[validate(length(min = 6, message = "password must be at least 6 characters"))]
    pub password: String,
}

/// Credentials stored for a new user (hash and salt already derived).
#[derive(Debug)]
pub struct CreateUser {
    pub email: String,
    pub password_hash: String,
    pub salt: String,
}
