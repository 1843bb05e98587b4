use std::sync::Arc;

use crate::category::{CategoryDto, CategoryInput, ENTITY};
use crate::error::CoreError;
use crate::gateway::CategoryGateway;
use crate::types::DbId;

use super::{store_error, write_error};

/// Category operations with exact-match name uniqueness.
///
/// Names are not normalized: `"Action"` and `"action"` may coexist.
#[derive(Clone)]
pub struct CategoryService {
    gateway: Arc<dyn CategoryGateway>,
}

impl CategoryService {
    pub fn new(gateway: Arc<dyn CategoryGateway>) -> Self {
        Self { gateway }
    }

    /// All categories, ordered by name ascending.
    pub async fn list(&self) -> Result<Vec<CategoryDto>, CoreError> {
        let categories = self
            .gateway
            .list()
            .await
            .map_err(|e| store_error(ENTITY, e))?;
        Ok(categories.into_iter().map(CategoryDto::from).collect())
    }

    pub async fn get(&self, id: DbId) -> Result<Option<CategoryDto>, CoreError> {
        let category = self
            .gateway
            .find_by_id(id)
            .await
            .map_err(|e| store_error(ENTITY, e))?;
        Ok(category.map(CategoryDto::from))
    }

    pub async fn create(&self, input: &CategoryInput) -> Result<CategoryDto, CoreError> {
        if self.name_taken(&input.name).await? {
            tracing::warn!(name = %input.name, "Category name already exists");
            return Err(CoreError::conflict(ENTITY, &input.name));
        }

        let category = self
            .gateway
            .create(input)
            .await
            .map_err(|e| write_error(ENTITY, &input.name, e))?
            .ok_or_else(|| {
                tracing::warn!(name = %input.name, "Category create was not acknowledged");
                CoreError::Internal(format!(
                    "Category with name {} could not be created",
                    input.name
                ))
            })?;

        tracing::info!(category_id = category.id, name = %category.name, "Category created");
        Ok(category.into())
    }

    /// Rename category `id`.
    ///
    /// Submitting the category's current name unchanged succeeds and only
    /// refreshes `updated_at`; any other existing name is a conflict.
    pub async fn update(
        &self,
        id: DbId,
        input: &CategoryInput,
    ) -> Result<CategoryDto, CoreError> {
        let current = self
            .gateway
            .find_by_id(id)
            .await
            .map_err(|e| store_error(ENTITY, e))?
            .ok_or(CoreError::not_found(ENTITY, id))?;

        if current.name != input.name && self.name_taken(&input.name).await? {
            tracing::warn!(category_id = id, name = %input.name, "Category rename collides with another category");
            return Err(CoreError::conflict(ENTITY, &input.name));
        }

        let category = self
            .gateway
            .update(id, input)
            .await
            .map_err(|e| write_error(ENTITY, &input.name, e))?
            .ok_or_else(|| {
                tracing::warn!(category_id = id, "Category update was not acknowledged");
                CoreError::Internal(format!("Category with id {id} could not be updated"))
            })?;

        tracing::info!(category_id = category.id, name = %category.name, "Category updated");
        Ok(category.into())
    }

    /// Remove category `id`. Returns `true` on success.
    pub async fn delete(&self, id: DbId) -> Result<bool, CoreError> {
        let exists = self
            .gateway
            .exists_by_id(id)
            .await
            .map_err(|e| store_error(ENTITY, e))?;
        if !exists {
            return Err(CoreError::not_found(ENTITY, id));
        }

        let deleted = self
            .gateway
            .delete(id)
            .await
            .map_err(|e| store_error(ENTITY, e))?;
        if !deleted {
            tracing::warn!(category_id = id, "Delete was not acknowledged");
            return Err(CoreError::Internal(format!(
                "Category with id {id} could not be deleted"
            )));
        }

        tracing::info!(category_id = id, "Category deleted");
        Ok(true)
    }

    async fn name_taken(&self, name: &str) -> Result<bool, CoreError> {
        self.gateway
            .exists_by_name(name)
            .await
            .map_err(|e| store_error(ENTITY, e))
    }
}
