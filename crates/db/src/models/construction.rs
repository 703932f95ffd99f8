//! Construction project entity model and DTOs.

use chrono::{DateTime, FixedOffset};
use cpms_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A construction project row from the `constructions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Construction {
    pub id: DbId,
    pub name: String,
    pub location: String,
    pub category: String,
    /// Lifecycle stage (1=Concept .. 4=Construction). See `cpms_core::stage`.
    pub stage: i32,
    pub details: String,
    /// Always stored and served in UTC.
    pub start_date: Timestamp,
    /// The authenticated user who created the project. Cleared when that
    /// user is deleted.
    pub creator_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Request body for creating or fully replacing a construction project.
///
/// `start_date` accepts an RFC 3339 datetime with any UTC offset; the
/// handler converts it to UTC before the scheduling rule runs. When absent
/// the current instant is used.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ConstructionInput {
    #[validate(length(min = 1, max = 200, message = "name is required and must be at most 200 characters"))]
    pub name: String,
    #[validate(length(min = 1, max = 500, message = "location is required and must be at most 500 characters"))]
    pub location: String,
    #[validate(length(min = 1, max = 100, message = "category is required and must be at most 100 characters"))]
    pub category: String,
    pub stage: i32,
    #[validate(length(min = 1, max = 2000, message = "details is required and must be at most 2000 characters"))]
    pub details: String,
    pub start_date: Option<DateTime<FixedOffset>>,
}
