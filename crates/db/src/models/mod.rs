//! Entity models and request DTOs.

pub mod construction;
pub mod user;
