//! Entity services.
//!
//! Each service enforces the uniqueness and existence rules for one entity,
//! drives its [`gateway`](crate::gateway) and converts records into transfer
//! objects. Failures are reported as [`CoreError`] variants so callers can
//! branch on the kind without reading the message.

pub mod category_service;
pub mod movie_service;

pub use category_service::CategoryService;
pub use movie_service::MovieService;

use crate::error::CoreError;
use crate::gateway::GatewayError;

/// Map a gateway failure from a lookup or delete. These cannot violate
/// uniqueness, so every failure is internal.
fn store_error(entity: &'static str, err: GatewayError) -> CoreError {
    tracing::error!(entity, error = %err, "Gateway operation failed");
    CoreError::Internal(format!("Store operation on {entity} failed"))
}

/// Map a gateway failure on a write path.
///
/// A unique violation here means a concurrent writer claimed `name` between
/// the existence check and the write; it is reported as the same conflict
/// the check would have raised.
fn write_error(entity: &'static str, name: &str, err: GatewayError) -> CoreError {
    match err {
        GatewayError::UniqueViolation { constraint } => {
            tracing::warn!(entity, name, constraint = %constraint, "Store rejected duplicate name");
            CoreError::conflict(entity, name)
        }
        GatewayError::Backend(msg) => {
            tracing::error!(entity, name, error = %msg, "Gateway write failed");
            CoreError::Internal(format!("Something went wrong saving the {entity} {name}"))
        }
    }
}
