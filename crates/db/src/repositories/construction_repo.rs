//! Repository for the `constructions` table.

use cpms_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::construction::{Construction, ConstructionInput};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, location, category, stage, details, start_date, \
                        creator_id, created_at, updated_at";

/// Provides CRUD operations for construction projects.
pub struct ConstructionRepo;

impl ConstructionRepo {
    /// Insert a new construction project, returning the created row.
    ///
    /// `start_date` is the effective UTC start date already vetted by the
    /// scheduling rule; `creator_id` is the authenticated creator.
    pub async fn create(
        pool: &PgPool,
        input: &ConstructionInput,
        start_date: Timestamp,
        creator_id: DbId,
    ) -> Result<Construction, sqlx::Error> {
        let query = format!(
            "INSERT INTO constructions (name, location, category, stage, details, start_date, creator_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Construction>(&query)
            .bind(&input.name)
            .bind(&input.location)
            .bind(&input.category)
            .bind(input.stage)
            .bind(&input.details)
            .bind(start_date)
            .bind(creator_id)
            .fetch_one(pool)
            .await
    }

    /// Find a construction project by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Construction>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM constructions WHERE id = $1");
        sqlx::query_as::<_, Construction>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all construction projects ordered by most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Construction>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM constructions ORDER BY created_at DESC");
        sqlx::query_as::<_, Construction>(&query).fetch_all(pool).await
    }

    /// Fully replace a construction project's fields.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &ConstructionInput,
        start_date: Timestamp,
    ) -> Result<Option<Construction>, sqlx::Error> {
        let query = format!(
            "UPDATE constructions SET
                name = $2,
                location = $3,
                category = $4,
                stage = $5,
                details = $6,
                start_date = $7,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Construction>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.location)
            .bind(&input.category)
            .bind(input.stage)
            .bind(&input.details)
            .bind(start_date)
            .fetch_optional(pool)
            .await
    }

    /// Delete a construction project by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM constructions WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
