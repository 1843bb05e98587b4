use marquee_core::movie::Movie;
use marquee_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `movies` table.
#[derive(Debug, Clone, FromRow)]
pub struct MovieRow {
    pub id: DbId,
    pub name: String,
    pub duration: i32,
    pub description: Option<String>,
    pub classification: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<MovieRow> for Movie {
    fn from(row: MovieRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            duration: row.duration,
            description: row.description,
            classification: row.classification,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
