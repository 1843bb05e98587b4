use std::sync::Arc;

use marquee_core::services::{CategoryService, MovieService};
use marquee_db::repositories::{CategoryRepo, MovieRepo};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: marquee_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Movie service backed by the Postgres movie repository.
    pub movies: MovieService,
    /// Category service backed by the Postgres category repository.
    pub categories: CategoryService,
}

impl AppState {
    /// Wire the entity services to repositories sharing `pool`.
    pub fn new(pool: marquee_db::DbPool, config: ServerConfig) -> Self {
        Self {
            movies: MovieService::new(Arc::new(MovieRepo::new(pool.clone()))),
            categories: CategoryService::new(Arc::new(CategoryRepo::new(pool.clone()))),
            pool,
            config: Arc::new(config),
        }
    }
}
