//! Field-level input validation shared by the movie and category inputs.
//!
//! Validation runs in the transport layer before a service is invoked; a
//! failure never reaches the store.

use std::borrow::Cow;

use validator::{Validate, ValidationError, ValidationErrors};

use crate::error::CoreError;

/// Reject strings that are empty or contain only whitespace.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// Run `Validate` on an input and fold any failures into a single
/// [`CoreError::Validation`].
pub fn validate_input<T: Validate>(input: &T) -> Result<(), CoreError> {
    input
        .validate()
        .map_err(|errors| CoreError::Validation(describe(&errors)))
}

/// Render validation errors as `field: message` pairs, sorted by field name.
fn describe(errors: &ValidationErrors) -> String {
    let mut parts: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                let message = e
                    .message
                    .clone()
                    .unwrap_or_else(|| Cow::Owned(format!("invalid value ({})", e.code)));
                format!("{field}: {message}")
            })
        })
        .collect();
    parts.sort();
    parts.join("; ")
}
