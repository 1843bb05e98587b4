use marquee_core::gateway::GatewayError;

/// PostgreSQL SQLSTATE for `unique_violation`.
const UNIQUE_VIOLATION: &str = "23505";

/// Classify a sqlx error into a [`GatewayError`].
///
/// Unique violations on `uq_`-prefixed constraints or indexes become
/// [`GatewayError::UniqueViolation`]; everything else is a backend fault.
pub fn map_sqlx_error(err: sqlx::Error) -> GatewayError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.code().as_deref() == Some(UNIQUE_VIOLATION) {
            let constraint = db_err.constraint().unwrap_or("unknown");
            if constraint.starts_with("uq_") {
                return GatewayError::UniqueViolation {
                    constraint: constraint.to_string(),
                };
            }
        }
    }
    GatewayError::Backend(err.to_string())
}
