//! Route definitions.

pub mod construction;
pub mod health;
pub mod user;

use axum::Router;

use crate::state::AppState;

/// Build the API route tree.
///
/// Route hierarchy:
///
/// ```text
/// /healthz                       liveness probe
///
/// /constructions                 list (public), create (auth)
/// /constructions/{id}            get (public), update, delete (auth)
///
/// /users                         list, register
/// /users/{id}                    get, delete
/// /users/login                   login (public)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/constructions", construction::router())
        .nest("/users", user::router())
}
