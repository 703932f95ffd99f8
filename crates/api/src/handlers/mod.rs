//! HTTP request handlers.

pub mod auth;
pub mod construction;
pub mod user;

use cpms_core::error::CoreError;
use validator::Validate;

use crate::error::AppError;

/// Run structural validation on a request DTO, mapping field-level
/// violations to a 400 response.
fn validate_payload<T: Validate>(payload: &T) -> Result<(), AppError> {
    payload.validate().map_err(|errors| {
        let detail: Vec<String> = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| match &e.message {
                    Some(msg) => format!("{field}: {msg}"),
                    None => format!("{field}: invalid value"),
                })
            })
            .collect();
        AppError::Core(CoreError::Validation(detail.join("; ")))
    })
}
