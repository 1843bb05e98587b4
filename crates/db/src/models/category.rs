use marquee_core::category::Category;
use marquee_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `categories` table.
#[derive(Debug, Clone, FromRow)]
pub struct CategoryRow {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<CategoryRow> for Category {
    fn from(row: CategoryRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
