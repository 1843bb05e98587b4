use std::sync::Arc;

use crate::error::CoreError;
use crate::gateway::MovieGateway;
use crate::movie::{normalize_name, MovieDto, MovieInput, ENTITY};
use crate::types::DbId;

use super::{store_error, write_error};

/// Movie operations with case- and whitespace-insensitive name uniqueness.
#[derive(Clone)]
pub struct MovieService {
    gateway: Arc<dyn MovieGateway>,
}

impl MovieService {
    pub fn new(gateway: Arc<dyn MovieGateway>) -> Self {
        Self { gateway }
    }

    /// All movies, ordered by name ascending.
    pub async fn list(&self) -> Result<Vec<MovieDto>, CoreError> {
        let movies = self
            .gateway
            .list()
            .await
            .map_err(|e| store_error(ENTITY, e))?;
        Ok(movies.into_iter().map(MovieDto::from).collect())
    }

    /// The movie with `id`, or `None` if it does not exist.
    pub async fn get(&self, id: DbId) -> Result<Option<MovieDto>, CoreError> {
        let movie = self
            .gateway
            .find_by_id(id)
            .await
            .map_err(|e| store_error(ENTITY, e))?;
        Ok(movie.map(MovieDto::from))
    }

    pub async fn create(&self, input: &MovieInput) -> Result<MovieDto, CoreError> {
        let normalized = normalize_name(&input.name);
        if self.name_taken(&normalized).await? {
            tracing::warn!(name = %input.name, "Movie name already exists");
            return Err(CoreError::conflict(ENTITY, &input.name));
        }

        let movie = self
            .gateway
            .create(input)
            .await
            .map_err(|e| write_error(ENTITY, &input.name, e))?
            .ok_or_else(|| unacknowledged("saving", &input.name))?;

        tracing::info!(movie_id = movie.id, name = %movie.name, "Movie created");
        Ok(movie.into())
    }

    /// Replace every field of movie `id`.
    ///
    /// Keeping the movie's own name (under normalization) is not a conflict.
    pub async fn update(&self, id: DbId, input: &MovieInput) -> Result<MovieDto, CoreError> {
        let current = self
            .gateway
            .find_by_id(id)
            .await
            .map_err(|e| store_error(ENTITY, e))?
            .ok_or(CoreError::not_found(ENTITY, id))?;

        let normalized = normalize_name(&input.name);
        if normalize_name(&current.name) != normalized && self.name_taken(&normalized).await? {
            tracing::warn!(movie_id = id, name = %input.name, "Movie rename collides with another movie");
            return Err(CoreError::conflict(ENTITY, &input.name));
        }

        let movie = self
            .gateway
            .update(id, input)
            .await
            .map_err(|e| write_error(ENTITY, &input.name, e))?
            .ok_or_else(|| unacknowledged("updating", &input.name))?;

        tracing::info!(movie_id = movie.id, name = %movie.name, "Movie updated");
        Ok(movie.into())
    }

    /// Remove movie `id`. Returns `true` on success.
    pub async fn delete(&self, id: DbId) -> Result<bool, CoreError> {
        let exists = self
            .gateway
            .exists_by_id(id)
            .await
            .map_err(|e| store_error(ENTITY, e))?;
        if !exists {
            return Err(CoreError::not_found(ENTITY, id));
        }

        let deleted = self
            .gateway
            .delete(id)
            .await
            .map_err(|e| store_error(ENTITY, e))?;
        if !deleted {
            tracing::warn!(movie_id = id, "Delete was not acknowledged");
            return Err(CoreError::Internal(format!(
                "Something went wrong deleting the movie {id}"
            )));
        }

        tracing::info!(movie_id = id, "Movie deleted");
        Ok(true)
    }

    async fn name_taken(&self, normalized: &str) -> Result<bool, CoreError> {
        self.gateway
            .exists_by_name(normalized)
            .await
            .map_err(|e| store_error(ENTITY, e))
    }
}

fn unacknowledged(action: &str, name: &str) -> CoreError {
    tracing::warn!(name, action, "Movie write was not acknowledged");
    CoreError::Internal(format!("Something went wrong {action} the movie {name}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    use crate::gateway::{GatewayError, MockMovieGateway};
    use crate::testing::InMemoryMovies;

    fn service() -> MovieService {
        MovieService::new(Arc::new(InMemoryMovies::default()))
    }

    fn input(name: &str) -> MovieInput {
        MovieInput {
            name: name.to_string(),
            duration: 155,
            description: None,
            classification: "PG-13".to_string(),
        }
    }

    #[tokio::test]
    async fn create_then_get_returns_the_same_record() {
        let svc = service();
        let created = svc.create(&input("Dune")).await.unwrap();

        assert!(created.id > 0);
        assert_eq!(created.created_at, created.updated_at);

        let fetched = svc.get(created.id).await.unwrap();
        assert_eq!(fetched, Some(created));
    }

    #[tokio::test]
    async fn get_missing_movie_is_none() {
        assert_eq!(service().get(42).await.unwrap(), None);
    }

    #[tokio::test]
    async fn duplicate_name_ignores_case_and_whitespace() {
        let svc = service();
        svc.create(&input("Inception")).await.unwrap();

        let err = svc.create(&input("  inception  ")).await.unwrap_err();
        assert_matches!(err, CoreError::Conflict { entity: "Movie", name } if name == "  inception  ");
    }

    #[tokio::test]
    async fn distinct_names_create_independently() {
        let svc = service();
        let a = svc.create(&input("Alien")).await.unwrap();
        let b = svc.create(&input("Aliens")).await.unwrap();
        assert_ne!(a.id, b.id);
    }

    #[tokio::test]
    async fn dune_walkthrough() {
        let svc = service();
        let created = svc.create(&input("Dune")).await.unwrap();
        assert!(created.id > 0);
        assert_eq!(created.created_at, created.updated_at);

        let updated = svc
            .update(created.id, &input("Dune: Part Two"))
            .await
            .unwrap();
        assert_eq!(updated.name, "Dune: Part Two");
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at > updated.created_at);

        let err = svc.create(&input("dune: part two ")).await.unwrap_err();
        assert_matches!(err, CoreError::Conflict { .. });
    }

    #[tokio::test]
    async fn update_missing_movie_is_not_found() {
        let err = service().update(99, &input("Heat")).await.unwrap_err();
        assert_matches!(err, CoreError::NotFound { entity: "Movie", id: 99 });
    }

    #[tokio::test]
    async fn update_to_own_name_is_allowed() {
        let svc = service();
        let created = svc.create(&input("Heat")).await.unwrap();

        let same = svc.update(created.id, &input("Heat")).await.unwrap();
        assert_eq!(same.name, "Heat");

        let recased = svc.update(created.id, &input(" HEAT ")).await.unwrap();
        assert_eq!(recased.name, " HEAT ");
    }

    #[tokio::test]
    async fn update_to_another_movies_name_conflicts() {
        let svc = service();
        svc.create(&input("Heat")).await.unwrap();
        let other = svc.create(&input("Ronin")).await.unwrap();

        let err = svc.update(other.id, &input("heat")).await.unwrap_err();
        assert_matches!(err, CoreError::Conflict { .. });
    }

    #[tokio::test]
    async fn update_writes_every_field() {
        let svc = service();
        let created = svc.create(&input("Heat")).await.unwrap();

        let replacement = MovieInput {
            name: "Heat".into(),
            duration: 170,
            description: Some("Los Angeles, 1995".into()),
            classification: "R".into(),
        };
        let updated = svc.update(created.id, &replacement).await.unwrap();
        assert_eq!(updated.duration, 170);
        assert_eq!(updated.description.as_deref(), Some("Los Angeles, 1995"));
        assert_eq!(updated.classification, "R");
    }

    #[tokio::test]
    async fn delete_removes_the_movie() {
        let svc = service();
        let created = svc.create(&input("Heat")).await.unwrap();

        assert!(svc.delete(created.id).await.unwrap());
        assert_eq!(svc.get(created.id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn delete_missing_movie_is_not_found() {
        let err = service().delete(5).await.unwrap_err();
        assert_matches!(err, CoreError::NotFound { id: 5, .. });
    }

    #[tokio::test]
    async fn list_is_ordered_by_name() {
        let svc = service();
        for name in ["Zodiac", "Alien", "Memento"] {
            svc.create(&input(name)).await.unwrap();
        }
        let names: Vec<_> = svc
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|m| m.name)
            .collect();
        assert_eq!(names, ["Alien", "Memento", "Zodiac"]);
    }

    #[tokio::test]
    async fn unacknowledged_create_is_internal() {
        let mut gateway = MockMovieGateway::new();
        gateway.expect_exists_by_name().returning(|_| Ok(false));
        gateway.expect_create().returning(|_| Ok(None));

        let svc = MovieService::new(Arc::new(gateway));
        let err = svc.create(&input("Dune")).await.unwrap_err();
        assert_matches!(err, CoreError::Internal(msg) if msg.contains("saving the movie Dune"));
    }

    #[tokio::test]
    async fn store_unique_violation_maps_to_conflict() {
        let mut gateway = MockMovieGateway::new();
        gateway.expect_exists_by_name().returning(|_| Ok(false));
        gateway.expect_create().returning(|_| {
            Err(GatewayError::UniqueViolation {
                constraint: "uq_movies_normalized_name".into(),
            })
        });

        let svc = MovieService::new(Arc::new(gateway));
        let err = svc.create(&input("Dune")).await.unwrap_err();
        assert_matches!(err, CoreError::Conflict { name, .. } if name == "Dune");
    }

    #[tokio::test]
    async fn list_fault_is_internal() {
        let mut gateway = MockMovieGateway::new();
        gateway
            .expect_list()
            .returning(|| Err(GatewayError::Backend("connection reset".into())));

        let svc = MovieService::new(Arc::new(gateway));
        assert_matches!(svc.list().await, Err(CoreError::Internal(_)));
    }

    #[tokio::test]
    async fn unacknowledged_delete_is_internal() {
        let mut gateway = MockMovieGateway::new();
        gateway.expect_exists_by_id().returning(|_| Ok(true));
        gateway.expect_delete().returning(|_| Ok(false));

        let svc = MovieService::new(Arc::new(gateway));
        assert_matches!(svc.delete(1).await, Err(CoreError::Internal(_)));
    }

    #[tokio::test]
    async fn conflict_check_skips_the_write() {
        let mut gateway = MockMovieGateway::new();
        gateway
            .expect_exists_by_name()
            .withf(|name| name == "inception")
            .returning(|_| Ok(true));
        gateway.expect_create().never();

        let svc = MovieService::new(Arc::new(gateway));
        assert_matches!(
            svc.create(&input(" Inception")).await,
            Err(CoreError::Conflict { .. })
        );
    }
}
