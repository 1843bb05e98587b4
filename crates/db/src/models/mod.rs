//! Row types.
//!
//! Each submodule holds a `FromRow` struct matching a table row and its
//! conversion into the matching `marquee_core` record.

pub mod category;
pub mod movie;
