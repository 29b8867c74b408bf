//! Database layer - connection pool, schema bootstrap and repositories
//!
//! # Design Principles
//!
//! - Connection pool, passed in explicitly - no global client
//! - Counter updates are a single `UPDATE ... RETURNING` - no read-then-write
//! - Singleton tables resolve "the row" as the lowest id, consistently

pub mod migrations;
pub mod pool;
pub mod repos;

pub use pool::{create_pool, create_pool_with_options, ping};
pub use repos::*;
