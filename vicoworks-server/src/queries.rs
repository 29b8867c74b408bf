//! Read queries that never fail the caller
//!
//! Store errors are logged and degrade to `None` (singleton rows) or an
//! empty list (projects), so pages can fall back to a loading/empty state.

use vicoworks_core::{HomeProfile, Project, Statistics};

use crate::store::PortfolioStore;

/// The home profile, or `None` when missing or unreadable.
pub async fn home_profile(store: &dyn PortfolioStore) -> Option<HomeProfile> {
    match store.home_profile().await {
        Ok(profile) => profile,
        Err(e) => {
            tracing::error!(error = %e, "Error fetching home_view");
            None
        }
    }
}

/// The statistics row, or `None` when missing or unreadable.
pub async fn statistics(store: &dyn PortfolioStore) -> Option<Statistics> {
    match store.statistics().await {
        Ok(stats) => stats,
        Err(e) => {
            tracing::error!(error = %e, "Error fetching statistics");
            None
        }
    }
}

/// All projects by descending like count; empty when unreadable.
pub async fn projects(store: &dyn PortfolioStore) -> Vec<Project> {
    match store.projects().await {
        Ok(projects) => projects,
        Err(e) => {
            tracing::error!(error = %e, "Error fetching projects");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[tokio::test]
    async fn missing_singletons_are_none() {
        let store = MemoryStore::new();
        assert!(home_profile(&store).await.is_none());
        assert!(statistics(&store).await.is_none());
    }

    #[tokio::test]
    async fn failing_store_degrades() {
        let store = MemoryStore::new()
            .with_statistics(Statistics {
                id: "s1".into(),
                visitor_count: Some(3),
                project_count: Some(1),
            })
            .with_project(Project {
                id: "p1".into(),
                ..Default::default()
            });
        store.set_fail_reads(true);

        assert!(statistics(&store).await.is_none());
        assert!(home_profile(&store).await.is_none());
        assert_eq!(projects(&store).await, Vec::<Project>::new());
    }

    #[tokio::test]
    async fn unreachable_store_lists_no_projects() {
        let store = MemoryStore::new();
        store.set_fail_reads(true);
        assert_eq!(projects(&store).await.len(), 0);
    }

    #[tokio::test]
    async fn returns_rows_verbatim() {
        let stats = Statistics {
            id: "s1".into(),
            visitor_count: None,
            project_count: Some(12),
        };
        let store = MemoryStore::new().with_statistics(stats.clone());
        assert_eq!(statistics(&store).await, Some(stats));
    }
}
