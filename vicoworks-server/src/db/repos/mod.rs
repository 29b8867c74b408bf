//! Repository implementations for database access
//!
//! Each repository borrows the pool and maps one table:
//! - Singleton tables (`home_view`, `statistics`) fetch "the" row
//! - Counter updates increment server-side in one statement

pub mod profile;
pub mod projects;
pub mod statistics;

pub use profile::ProfileRepo;
pub use projects::ProjectRepo;
pub use statistics::StatisticsRepo;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },

    /// Store could not be reached (used by non-SQL stores)
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl DbError {
    pub fn not_found(resource: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            resource,
            id: id.into(),
        }
    }
}
