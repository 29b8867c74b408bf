//! Visitor and like counters
//!
//! Each increment is a single atomic store call: read the counter (unset
//! reads as 0), add one, write it back matched on the row id. On success
//! the dependent view is revalidated. Failures are logged and returned as a
//! typed error; nothing panics and nothing is retried.

use crate::db::DbError;
use crate::revalidate::{Revalidator, View};
use crate::store::PortfolioStore;

/// Why a counter was not incremented
#[derive(Debug, thiserror::Error)]
pub enum CounterError {
    /// No row to increment (unknown project, empty statistics table)
    #[error("{resource} '{id}' not found")]
    NotFound { resource: &'static str, id: String },

    /// The store could not be read or written; the stored value is unchanged
    #[error("store error: {0}")]
    Store(DbError),
}

impl From<DbError> for CounterError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { resource, id } => Self::NotFound { resource, id },
            other => Self::Store(other),
        }
    }
}

/// Count one visit. Returns the new visitor count.
pub async fn increment_visitor_count(
    store: &dyn PortfolioStore,
    views: &Revalidator,
) -> Result<i64, CounterError> {
    match store.increment_visitor_count().await {
        Ok(count) => {
            views.revalidate(View::Home);
            tracing::debug!(visitor_count = count, "visitor counted");
            Ok(count)
        }
        Err(e) => {
            let err = CounterError::from(e);
            match &err {
                CounterError::NotFound { .. } => {
                    tracing::warn!("No statistics row to count visit against")
                }
                CounterError::Store(e) => {
                    tracing::error!(error = %e, "Error updating visitor count")
                }
            }
            Err(err)
        }
    }
}

/// Like a project. Returns the project's new like count.
pub async fn increment_project_like(
    store: &dyn PortfolioStore,
    views: &Revalidator,
    project_id: &str,
) -> Result<i64, CounterError> {
    match store.increment_like_count(project_id).await {
        Ok(count) => {
            views.revalidate(View::Projects);
            tracing::debug!(project_id, like_count = count, "project liked");
            Ok(count)
        }
        Err(e) => {
            let err = CounterError::from(e);
            match &err {
                CounterError::NotFound { .. } => {
                    tracing::warn!(project_id, "Like for unknown project")
                }
                CounterError::Store(e) => {
                    tracing::error!(project_id, error = %e, "Error updating like count")
                }
            }
            Err(err)
        }
    }
}
