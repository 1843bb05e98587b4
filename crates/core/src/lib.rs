//! Domain layer for the movie catalog.
//!
//! Holds the entity records and transfer objects, the persistence gateway
//! ports, and the services that enforce name uniqueness and existence rules
//! before anything is written.

pub mod category;
pub mod error;
pub mod gateway;
pub mod movie;
pub mod services;
pub mod types;
pub mod validation;

#[cfg(test)]
mod testing;
