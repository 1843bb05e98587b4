//! Persistence gateway ports.
//!
//! One trait per entity. Implementations execute CRUD against a store and
//! carry no business rules; the services in [`crate::services`] decide what
//! a missing row or a duplicate name means.

use async_trait::async_trait;

use crate::category::{Category, CategoryInput};
use crate::movie::{Movie, MovieInput};
use crate::types::DbId;

/// Failure reported by a gateway implementation.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// The store rejected a write because a unique constraint was violated.
    #[error("unique constraint violated: {constraint}")]
    UniqueViolation { constraint: String },

    /// Any other store fault (connection loss, bad SQL, ...).
    #[error("store error: {0}")]
    Backend(String),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MovieGateway: Send + Sync {
    /// All movies ordered by name ascending.
    async fn list(&self) -> Result<Vec<Movie>, GatewayError>;

    async fn find_by_id(&self, id: DbId) -> Result<Option<Movie>, GatewayError>;

    /// Whether a movie whose normalized name equals `normalized_name` exists.
    async fn exists_by_name(&self, normalized_name: &str) -> Result<bool, GatewayError>;

    async fn exists_by_id(&self, id: DbId) -> Result<bool, GatewayError>;

    /// Insert a movie. `None` means the store did not acknowledge the write.
    async fn create(&self, input: &MovieInput) -> Result<Option<Movie>, GatewayError>;

    /// Overwrite every field and refresh `updated_at`. `None` means no row
    /// was affected.
    async fn update(&self, id: DbId, input: &MovieInput) -> Result<Option<Movie>, GatewayError>;

    /// Remove a movie. Returns `true` if a row was deleted.
    async fn delete(&self, id: DbId) -> Result<bool, GatewayError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryGateway: Send + Sync {
    /// All categories ordered by name ascending.
    async fn list(&self) -> Result<Vec<Category>, GatewayError>;

    async fn find_by_id(&self, id: DbId) -> Result<Option<Category>, GatewayError>;

    /// Exact-match name lookup.
    async fn exists_by_name(&self, name: &str) -> Result<bool, GatewayError>;

    async fn exists_by_id(&self, id: DbId) -> Result<bool, GatewayError>;

    /// Insert a category. `None` means the store did not acknowledge the write.
    async fn create(&self, input: &CategoryInput) -> Result<Option<Category>, GatewayError>;

    /// Rename a category and refresh `updated_at`. `None` means no row was
    /// affected.
    async fn update(
        &self,
        id: DbId,
        input: &CategoryInput,
    ) -> Result<Option<Category>, GatewayError>;

    /// Remove a category. Returns `true` if a row was deleted.
    async fn delete(&self, id: DbId) -> Result<bool, GatewayError>;
}
