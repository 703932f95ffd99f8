//! Handlers for the `/constructions` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use chrono::Utc;
use cpms_core::error::CoreError;
use cpms_core::schedule;
use cpms_core::types::{DbId, Timestamp};
use cpms_db::models::construction::{Construction, ConstructionInput};
use cpms_db::repositories::ConstructionRepo;

use super::validate_payload;
use crate::error::{AppError, AppResult};
use crate::extract::Json;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Validate the payload structurally, then run the scheduling rule against
/// the proposed stage and start date. Returns the effective UTC start date
/// to persist.
fn check_input(input: &ConstructionInput) -> Result<Timestamp, AppError> {
    validate_payload(input)?;
    let start_utc = input.start_date.map(|d| d.with_timezone(&Utc));
    let effective = schedule::validate_start_date(input.stage, start_utc, Utc::now())?;
    Ok(effective)
}

/// POST /constructions
pub async fn create(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(input): Json<ConstructionInput>,
) -> AppResult<(StatusCode, Json<Construction>)> {
    let start_date = check_input(&input)?;
    let construction =
        ConstructionRepo::create(&state.pool, &input, start_date, auth_user.user_id)
            .await
            .map_err(|err| match &err {
                // The creator row can vanish between token issuance and the
                // insert; a 23503 on creator_id means the user is gone, not
                // that the server broke.
                sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some("23503") => {
                    AppError::Core(CoreError::Unauthorized("User no longer exists".into()))
                }
                _ => AppError::Database(err),
            })?;
    tracing::info!(id = construction.id, creator = auth_user.user_id, "Construction created");
    Ok((StatusCode::CREATED, Json(construction)))
}

/// GET /constructions
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Construction>>> {
    let constructions = ConstructionRepo::list(&state.pool).await?;
    Ok(Json(constructions))
}

/// GET /constructions/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Construction>> {
    let construction = ConstructionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Construction",
            id,
        }))?;
    Ok(Json(construction))
}

/// PUT /constructions/{id}
///
/// Full replacement with the same body shape as create. The scheduling
/// rule runs against the newly proposed values, not the stored ones.
pub async fn update(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<ConstructionInput>,
) -> AppResult<Json<Construction>> {
    let start_date = check_input(&input)?;
    let construction = ConstructionRepo::update(&state.pool, id, &input, start_date)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Construction",
            id,
        }))?;
    Ok(Json(construction))
}

/// DELETE /constructions/{id}
pub async fn delete(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ConstructionRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Construction",
            id,
        }))
    }
}
