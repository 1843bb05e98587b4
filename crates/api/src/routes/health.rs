//! Liveness probe for the catalog service, mounted at the root.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Body of `GET /health`.
///
/// The endpoint always answers 200. A catalog whose database cannot be
/// reached reports `"degraded"` so load balancers can tell it apart from
/// a process that is down.
#[derive(Serialize)]
pub struct Health {
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
}

async fn catalog_health(State(state): State<AppState>) -> Json<Health> {
    let db_healthy = match marquee_db::health_check(&state.pool).await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "Catalog database unreachable");
            false
        }
    };

    Json(Health {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(catalog_health))
}
