//! Handlers for the `/movies` resource.

use axum::extract::State;
use axum::http::header::LOCATION;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use marquee_core::error::CoreError;
use marquee_core::movie::{MovieInput, ENTITY};

use crate::error::{AppError, AppResult};
use crate::extract::{IdPath, ValidJson};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/movies
///
/// List all movies ordered by name.
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let movies = state.movies.list().await?;
    Ok(Json(DataResponse { data: movies }))
}

/// GET /api/v1/movies/{id}
pub async fn get(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<impl IntoResponse> {
    let movie = state
        .movies
        .get(id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: ENTITY, id }))?;
    Ok(Json(DataResponse { data: movie }))
}

/// POST /api/v1/movies
///
/// Create a movie. Returns 201 with a `Location` header for the new resource.
pub async fn create(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<MovieInput>,
) -> AppResult<impl IntoResponse> {
    let movie = state.movies.create(&input).await?;
    let location = format!("/api/v1/movies/{}", movie.id);
    Ok((
        StatusCode::CREATED,
        [(LOCATION, location)],
        Json(DataResponse { data: movie }),
    ))
}

/// PUT /api/v1/movies/{id}
///
/// Replace every field of a movie.
pub async fn update(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidJson(input): ValidJson<MovieInput>,
) -> AppResult<impl IntoResponse> {
    let movie = state.movies.update(id, &input).await?;
    Ok(Json(DataResponse { data: movie }))
}

/// DELETE /api/v1/movies/{id}
///
/// Responds with `{ "data": true }` once the movie is gone.
pub async fn delete(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<impl IntoResponse> {
    let deleted = state.movies.delete(id).await?;
    Ok(Json(DataResponse { data: deleted }))
}
