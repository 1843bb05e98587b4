//! Movie entity record, input, and transfer object.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::{DbId, Timestamp};

/// Entity name used in errors and logs.
pub const ENTITY: &str = "Movie";

/// A stored movie. Identity and timestamps are assigned by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct Movie {
    pub id: DbId,
    pub name: String,
    pub duration: i32,
    pub description: Option<String>,
    pub classification: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Input for creating or replacing a movie. Update writes every field.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct MovieInput {
    #[serde(default)]
    #[validate(
        custom(function = "crate::validation::not_blank", message = "The name is required"),
        length(max = 100, message = "The name cannot exceed 100 characters")
    )]
    pub name: String,
    pub duration: i32,
    pub description: Option<String>,
    #[serde(default)]
    #[validate(
        custom(
            function = "crate::validation::not_blank",
            message = "The classification is required"
        ),
        length(max = 10, message = "The classification cannot exceed 10 characters")
    )]
    pub classification: String,
}

/// Movie as returned to API clients.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieDto {
    pub id: DbId,
    pub name: String,
    pub duration: i32,
    pub description: Option<String>,
    pub classification: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<Movie> for MovieDto {
    fn from(movie: Movie) -> Self {
        Self {
            id: movie.id,
            name: movie.name,
            duration: movie.duration,
            description: movie.description,
            classification: movie.classification,
            created_at: movie.created_at,
            updated_at: movie.updated_at,
        }
    }
}

/// Characters stripped from both ends of a movie name before comparison.
///
/// Must match the set passed to `BTRIM` in the `uq_movies_normalized_name`
/// index and in the gateway's name lookup.
pub const NAME_TRIM_CHARS: [char; 4] = [' ', '\t', '\n', '\r'];

/// Key under which movie names are compared for uniqueness.
///
/// Surrounding whitespace and letter case are ignored, so `"  Inception "`
/// and `"inception"` collide.
pub fn normalize_name(name: &str) -> String {
    name.trim_matches(NAME_TRIM_CHARS).to_lowercase()
}
