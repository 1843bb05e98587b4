//! In-memory gateways for service tests.
//!
//! They mirror the Postgres repositories: ids start at 1, rows are kept
//! ordered by name on `list`, and every write stamps `updated_at` from a
//! clock that never repeats a value.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{Duration, Utc};

use crate::category::{Category, CategoryInput};
use crate::gateway::{CategoryGateway, GatewayError, MovieGateway};
use crate::movie::{normalize_name, Movie, MovieInput};
use crate::types::{DbId, Timestamp};

struct Table<R> {
    rows: Vec<R>,
    next_id: DbId,
    last_tick: Option<Timestamp>,
}

impl<R> Default for Table<R> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            next_id: 0,
            last_tick: None,
        }
    }
}

impl<R> Table<R> {
    fn next_id(&mut self) -> DbId {
        self.next_id += 1;
        self.next_id
    }

    fn tick(&mut self) -> Timestamp {
        let mut now = Utc::now();
        if let Some(last) = self.last_tick {
            if now <= last {
                now = last + Duration::microseconds(1);
            }
        }
        self.last_tick = Some(now);
        now
    }
}

#[derive(Default)]
pub struct InMemoryMovies {
    table: Mutex<Table<Movie>>,
}

#[async_trait]
impl MovieGateway for InMemoryMovies {
    async fn list(&self) -> Result<Vec<Movie>, GatewayError> {
        let mut rows = self.table.lock().unwrap().rows.clone();
        rows.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(rows)
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Movie>, GatewayError> {
        let table = self.table.lock().unwrap();
        Ok(table.rows.iter().find(|m| m.id == id).cloned())
    }

    async fn exists_by_name(&self, normalized_name: &str) -> Result<bool, GatewayError> {
        let table = self.table.lock().unwrap();
        Ok(table
            .rows
            .iter()
            .any(|m| normalize_name(&m.name) == normalized_name))
    }

    async fn exists_by_id(&self, id: DbId) -> Result<bool, GatewayError> {
        let table = self.table.lock().unwrap();
        Ok(table.rows.iter().any(|m| m.id == id))
    }

    async fn create(&self, input: &MovieInput) -> Result<Option<Movie>, GatewayError> {
        let mut table = self.table.lock().unwrap();
        let now = table.tick();
        let movie = Movie {
            id: table.next_id(),
            name: input.name.clone(),
            duration: input.duration,
            description: input.description.clone(),
            classification: input.classification.clone(),
            created_at: now,
            updated_at: now,
        };
        table.rows.push(movie.clone());
        Ok(Some(movie))
    }

    async fn update(&self, id: DbId, input: &MovieInput) -> Result<Option<Movie>, GatewayError> {
        let mut table = self.table.lock().unwrap();
        let now = table.tick();
        let Some(movie) = table.rows.iter_mut().find(|m| m.id == id) else {
            return Ok(None);
        };
        movie.name = input.name.clone();
        movie.duration = input.duration;
        movie.description = input.description.clone();
        movie.classification = input.classification.clone();
        movie.updated_at = now;
        Ok(Some(movie.clone()))
    }

    async fn delete(&self, id: DbId) -> Result<bool, GatewayError> {
        let mut table = self.table.lock().unwrap();
        let before = table.rows.len();
        table.rows.retain(|m| m.id != id);
        Ok(table.rows.len() < before)
    }
}

#[derive(Default)]
pub struct InMemoryCategories {
    table: Mutex<Table<Category>>,
}

#[async_trait]
impl CategoryGateway for InMemoryCategories {
    async fn list(&self) -> Result<Vec<Category>, GatewayError> {
        let mut rows = self.table.lock().unwrap().rows.clone();
        rows.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(rows)
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Category>, GatewayError> {
        let table = self.table.lock().unwrap();
        Ok(table.rows.iter().find(|c| c.id == id).cloned())
    }

    async fn exists_by_name(&self, name: &str) -> Result<bool, GatewayError> {
        let table = self.table.lock().unwrap();
        Ok(table.rows.iter().any(|c| c.name == name))
    }

    async fn exists_by_id(&self, id: DbId) -> Result<bool, GatewayError> {
        let table = self.table.lock().unwrap();
        Ok(table.rows.iter().any(|c| c.id == id))
    }

    async fn create(&self, input: &CategoryInput) -> Result<Option<Category>, GatewayError> {
        let mut table = self.table.lock().unwrap();
        let now = table.tick();
        let category = Category {
            id: table.next_id(),
            name: input.name.clone(),
            created_at: now,
            updated_at: now,
        };
        table.rows.push(category.clone());
        Ok(Some(category))
    }

    async fn update(
        &self,
        id: DbId,
        input: &CategoryInput,
    ) -> Result<Option<Category>, GatewayError> {
        let mut table = self.table.lock().unwrap();
        let now = table.tick();
        let Some(category) = table.rows.iter_mut().find(|c| c.id == id) else {
            return Ok(None);
        };
        category.name = input.name.clone();
        category.updated_at = now;
        Ok(Some(category.clone()))
    }

    async fn delete(&self, id: DbId) -> Result<bool, GatewayError> {
        let mut table = self.table.lock().unwrap();
        let before = table.rows.len();
        table.rows.retain(|c| c.id != id);
        Ok(table.rows.len() < before)
    }
}
