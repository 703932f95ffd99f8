//! Route definitions for the `/users` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{auth, user};
use crate::state::AppState;

/// Routes mounted at `/users`.
///
/// ```text
/// GET    /         -> list
/// POST   /         -> register
/// POST   /login    -> login
/// GET    /{id}     -> get_by_id
/// DELETE /{id}     -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(user::list).post(user::register))
        .route("/login", post(auth::login))
        .route("/{id}", get(user::get_by_id).delete(user::delete))
}
