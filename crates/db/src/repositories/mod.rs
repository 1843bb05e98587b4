//! Repository layer.
//!
//! Each repository wraps a [`DbPool`](crate::DbPool) and implements the
//! matching gateway trait from `marquee_core::gateway`.

pub mod category_repo;
pub mod movie_repo;

pub use category_repo::CategoryRepo;
pub use movie_repo::MovieRepo;
