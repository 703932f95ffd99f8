//! Route definitions for the `/constructions` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::construction;
use crate::state::AppState;

/// Routes mounted at `/constructions`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(construction::list).post(construction::create))
        .route(
            "/{id}",
            get(construction::get_by_id)
                .put(construction::update)
                .delete(construction::delete),
        )
}
