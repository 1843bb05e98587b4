//! Handlers for the `/categories` resource.

use axum::extract::State;
use axum::http::header::LOCATION;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use marquee_core::category::{CategoryInput, ENTITY};
use marquee_core::error::CoreError;

use crate::error::{AppError, AppResult};
use crate::extract::{IdPath, ValidJson};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/categories
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let categories = state.categories.list().await?;
    Ok(Json(DataResponse { data: categories }))
}

/// GET /api/v1/categories/{id}
pub async fn get(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<impl IntoResponse> {
    let category = state
        .categories
        .get(id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: ENTITY, id }))?;
    Ok(Json(DataResponse { data: category }))
}

/// POST /api/v1/categories
///
/// Create a category. Returns 201 with a `Location` header for the new resource.
pub async fn create(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<CategoryInput>,
) -> AppResult<impl IntoResponse> {
    let category = state.categories.create(&input).await?;
    let location = format!("/api/v1/categories/{}", category.id);
    Ok((
        StatusCode::CREATED,
        [(LOCATION, location)],
        Json(DataResponse { data: category }),
    ))
}

/// PUT /api/v1/categories/{id}
///
/// Rename a category.
pub async fn update(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidJson(input): ValidJson<CategoryInput>,
) -> AppResult<impl IntoResponse> {
    let category = state.categories.update(id, &input).await?;
    Ok(Json(DataResponse { data: category }))
}

/// DELETE /api/v1/categories/{id}
///
/// Responds with `{ "data": true }` once the category is gone.
pub async fn delete(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<impl IntoResponse> {
    let deleted = state.categories.delete(id).await?;
    Ok(Json(DataResponse { data: deleted }))
}
