//! Category entity record, input, and transfer object.
//!
//! Unlike movies, category names are compared exactly: `"Action"` and
//! `"action"` are distinct categories.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::{DbId, Timestamp};

/// Entity name used in errors and logs.
pub const ENTITY: &str = "Category";

/// A stored category.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Input for creating or renaming a category.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CategoryInput {
    #[serde(default)]
    #[validate(
        custom(
            function = "crate::validation::not_blank",
            message = "The category name is required"
        ),
        length(max = 100, message = "The category name cannot exceed 100 characters")
    )]
    pub name: String,
}

/// Category as returned to API clients.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryDto {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<Category> for CategoryDto {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
            created_at: category.created_at,
            updated_at: category.updated_at,
        }
    }
}
