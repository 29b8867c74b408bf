//! Store trait and implementations
//!
//! Provides a trait over the hosted table store, with:
//! - Postgres implementation backed by the repositories
//! - In-memory implementation for tests and local previews

mod memory;
mod postgres;

use async_trait::async_trait;
use vicoworks_core::{HomeProfile, Project, Statistics};

use crate::db::DbError;

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Access to the three portfolio tables.
///
/// Increments are atomic per call: implementations must never lose an
/// update when invoked concurrently.
#[async_trait]
pub trait PortfolioStore: Send + Sync {
    /// Check the store answers at all.
    async fn ping(&self) -> Result<(), DbError>;

    /// The singleton home profile row.
    async fn home_profile(&self) -> Result<Option<HomeProfile>, DbError>;

    /// The singleton statistics row.
    async fn statistics(&self) -> Result<Option<Statistics>, DbError>;

    /// All projects, most liked first (unset counts last, ties by id).
    async fn projects(&self) -> Result<Vec<Project>, DbError>;

    /// Increment the visitor count; returns the new value.
    async fn increment_visitor_count(&self) -> Result<i64, DbError>;

    /// Increment a project's like count; returns the new value.
    async fn increment_like_count(&self, project_id: &str) -> Result<i64, DbError>;
}
