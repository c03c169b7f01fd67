//! Database layer - connection pool, schema and repositories
//!
//! - One pool, created at startup and passed explicitly
//! - Rely on DB constraints, handle conflicts - no check-then-insert
//! - Transactions for multi-step operations

pub mod pool;
pub mod repos;
pub mod schema;

pub use pool::{connect, create_pool};
pub use repos::*;
