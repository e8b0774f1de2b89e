//! Persistence adapters for the `UserRepository` port.
//!
//! The production adapter targets PostgreSQL via the Diesel ORM with async
//! support through `diesel-async` and `bb8` connection pooling. Diesel row
//! structs and schema definitions stay internal to this module; only domain
//! types cross the boundary. [`MemoryUserRepository`] offers the same
//! contract without a database.

mod diesel_user_repository;
mod memory;
mod models;
mod pool;
mod schema;

pub use diesel_user_repository::DieselUserRepository;
pub use memory::MemoryUserRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
