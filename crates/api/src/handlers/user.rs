//! Handlers for the `/users` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use cpms_core::credentials;
use cpms_core::error::CoreError;
use cpms_core::types::DbId;
use cpms_db::models::user::{CreateUser, RegisterUser, UserResponse};
use cpms_db::repositories::UserRepo;

use super::validate_payload;
use crate::error::{AppError, AppResult};
use crate::extract::Json;
use crate::state::AppState;

/// POST /users
///
/// Register a new account. The email pre-check gives a friendly 409; the
/// `uq_users_email` constraint closes the remaining race (the error layer
/// maps that violation to 409 as well).
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterUser>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    validate_payload(&input)?;

    if UserRepo::email_exists(&state.pool, &input.email).await? {
        return Err(AppError::Core(CoreError::Conflict(
            "A user with this email already exists".into(),
        )));
    }

    let salt = credentials::generate_salt(credentials::DEFAULT_SALT_LEN);
    let password_hash = credentials::hash_password(&input.password, &salt);

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            email: input.email,
            password_hash,
            salt,
        },
    )
    .await?;

    tracing::info!(id = user.id, "User registered");
    Ok((StatusCode::CREATED, Json(user.into())))
}

/// GET /users
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<UserResponse>>> {
    let users = UserRepo::list(&state.pool).await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// GET /users/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<UserResponse>> {
    let user = UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;
    Ok(Json(user.into()))
}

/// DELETE /users/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = UserRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "User", id }))
    }
}
