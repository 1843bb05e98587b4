pub mod category;
pub mod health;
pub mod movie;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /movies              list, create
/// /movies/{id}         get, update, delete
///
/// /categories          list, create
/// /categories/{id}     get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/movies", movie::router())
        .nest("/categories", category::router())
}
