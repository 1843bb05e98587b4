//! Route definitions for movies.

use axum::routing::get;
use axum::Router;

use crate::handlers::movie;
use crate::state::AppState;

/// Routes mounted at `/movies`.
///
/// ```text
/// GET    /       -> list
/// POST   /       -> create
/// GET    /{id}   -> get
/// PUT    /{id}   -> update
/// DELETE /{id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(movie::list).post(movie::create))
        .route(
            "/{id}",
            get(movie::get).put(movie::update).delete(movie::delete),
        )
}
