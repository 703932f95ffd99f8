//! Request extractors shared across handlers.

use axum::extract::rejection::JsonRejection;
use axum::extract::FromRequest;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::error::AppError;

/// Drop-in replacement for [`axum::Json`] whose rejection is an
/// [`AppError`].
///
/// A request body that is malformed or missing required fields fails
/// inside the extractor, before any handler code runs; routing the
/// rejection through [`AppError`] keeps those failures on the same
/// 400 `{"message": ...}` shape as the validation layer.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct Json<T>(pub T);

impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> Response {
        axum::Json(self.0).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Core(cpms_core::error::CoreError::Validation(
            rejection.body_text(),
        ))
    }
}
