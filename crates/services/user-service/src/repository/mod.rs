//! Repository layer for user records.

pub mod entities;
mod error;
mod memory;
mod postgres;

pub use memory::InMemoryUserRepository;
pub use postgres::PostgresUserRepository;
