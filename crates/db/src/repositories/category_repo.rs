//! Repository for the `categories` table.

use async_trait::async_trait;
use marquee_core::category::{Category, CategoryInput};
use marquee_core::gateway::{CategoryGateway, GatewayError};
use marquee_core::types::DbId;

use crate::error::map_sqlx_error;
use crate::models::category::CategoryRow;
use crate::DbPool;

/// Column list for categories queries.
const COLUMNS: &str = "id, name, created_at, updated_at";

/// Provides CRUD operations for categories.
#[derive(Clone)]
pub struct CategoryRepo {
    pool: DbPool,
}

impl CategoryRepo {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryGateway for CategoryRepo {
    /// List all categories, ordered by name ascending.
    async fn list(&self) -> Result<Vec<Category>, GatewayError> {
        let query = format!("SELECT {COLUMNS} FROM categories ORDER BY name ASC");
        let rows = sqlx::query_as::<_, CategoryRow>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;
        Ok(rows.into_iter().map(Category::from).collect())
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Category>, GatewayError> {
        let query = format!("SELECT {COLUMNS} FROM categories WHERE id = $1");
        let row = sqlx::query_as::<_, CategoryRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;
        Ok(row.map(Category::from))
    }

    async fn exists_by_name(&self, name: &str) -> Result<bool, GatewayError> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM categories WHERE name = $1)")
            .bind(name)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)
    }

    async fn exists_by_id(&self, id: DbId) -> Result<bool, GatewayError> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM categories WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)
    }

    async fn create(&self, input: &CategoryInput) -> Result<Option<Category>, GatewayError> {
        let query = format!("INSERT INTO categories (name) VALUES ($1) RETURNING {COLUMNS}");
        let row = sqlx::query_as::<_, CategoryRow>(&query)
            .bind(&input.name)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;
        Ok(row.map(Category::from))
    }

    async fn update(
        &self,
        id: DbId,
        input: &CategoryInput,
    ) -> Result<Option<Category>, GatewayError> {
        let query = format!(
            "UPDATE categories SET name = $2, updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, CategoryRow>(&query)
            .bind(id)
            .bind(&input.name)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;
        Ok(row.map(Category::from))
    }

    async fn delete(&self, id: DbId) -> Result<bool, GatewayError> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;
        Ok(result.rows_affected() > 0)
    }
}
