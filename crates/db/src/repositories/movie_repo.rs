//! Repository for the `movies` table.

use async_trait::async_trait;
use marquee_core::gateway::{GatewayError, MovieGateway};
use marquee_core::movie::{Movie, MovieInput};
use marquee_core::types::DbId;

use crate::error::map_sqlx_error;
use crate::models::movie::MovieRow;
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, name, duration, description, classification, created_at, updated_at";

/// Provides CRUD operations for movies.
#[derive(Clone)]
pub struct MovieRepo {
    pool: DbPool,
}

impl MovieRepo {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MovieGateway for MovieRepo {
    /// List all movies, ordered by name ascending.
    async fn list(&self) -> Result<Vec<Movie>, GatewayError> {
        let query = format!("SELECT {COLUMNS} FROM movies ORDER BY name ASC");
        let rows = sqlx::query_as::<_, MovieRow>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;
        Ok(rows.into_iter().map(Movie::from).collect())
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Movie>, GatewayError> {
        let query = format!("SELECT {COLUMNS} FROM movies WHERE id = $1");
        let row = sqlx::query_as::<_, MovieRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;
        Ok(row.map(Movie::from))
    }

    /// Matches against the same expression as `uq_movies_normalized_name`.
    async fn exists_by_name(&self, normalized_name: &str) -> Result<bool, GatewayError> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM movies WHERE LOWER(BTRIM(name, E' \\t\\n\\r')) = $1)",
        )
        .bind(normalized_name)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)
    }

    async fn exists_by_id(&self, id: DbId) -> Result<bool, GatewayError> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM movies WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)
    }

    /// Insert a new movie, returning the created row.
    async fn create(&self, input: &MovieInput) -> Result<Option<Movie>, GatewayError> {
        let query = format!(
            "INSERT INTO movies (name, duration, description, classification) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, MovieRow>(&query)
            .bind(&input.name)
            .bind(input.duration)
            .bind(&input.description)
            .bind(&input.classification)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;
        Ok(row.map(Movie::from))
    }

    /// Overwrite every column and refresh `updated_at`.
    ///
    /// Returns `None` if no row with the given `id` exists.
    async fn update(&self, id: DbId, input: &MovieInput) -> Result<Option<Movie>, GatewayError> {
        let query = format!(
            "UPDATE movies SET \
                name = $2, \
                duration = $3, \
                description = $4, \
                classification = $5, \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, MovieRow>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.duration)
            .bind(&input.description)
            .bind(&input.classification)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;
        Ok(row.map(Movie::from))
    }

    /// Delete a movie by ID. Returns `true` if a row was deleted.
    async fn delete(&self, id: DbId) -> Result<bool, GatewayError> {
        let result = sqlx::query("DELETE FROM movies WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;
        Ok(result.rows_affected() > 0)
    }
}
