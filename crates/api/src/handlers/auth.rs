//! Handlers for authentication (`POST /users/login`).

use axum::extract::State;
use cpms_core::credentials::verify_password;
use cpms_core::error::CoreError;
use cpms_db::repositories::UserRepo;
use serde::{Deserialize, Serialize};

use crate::auth::jwt::generate_access_token;
use crate::error::{AppError, AppResult};
use crate::extract::Json;
use crate::state::AppState;

/// Single failure message for both unknown email and wrong password, so
/// responses carry no user-enumeration signal.
const LOGIN_FAILED_MESSAGE: &str = "Invalid email or password";

/// Request body for `POST /users/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful authentication response.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    /// Signed, time-bounded access token.
    pub token: String,
}

/// POST /users/login
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    // 1. Find user by email.
    let user = UserRepo::find_by_email(&state.pool, &input.email)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized(LOGIN_FAILED_MESSAGE.into())))?;

    // 2. Verify password against the stored hash and per-user salt.
    if !verify_password(&input.password, &user.password_hash, &user.salt) {
        return Err(AppError::Core(CoreError::Unauthorized(
            LOGIN_FAILED_MESSAGE.into(),
        )));
    }

    // 3. Issue a signed access token.
    let token = generate_access_token(user.id, &user.email, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::info!(id = user.id, "User logged in");
    Ok(Json(LoginResponse { token }))
}
