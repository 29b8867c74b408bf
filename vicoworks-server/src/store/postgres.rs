use async_trait::async_trait;
use sqlx::PgPool;
use vicoworks_core::{HomeProfile, Project, Statistics};

use super::PortfolioStore;
use crate::db::{self, DbError, ProfileRepo, ProjectRepo, StatisticsRepo};

/// Postgres-backed store
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl PortfolioStore for PgStore {
    async fn ping(&self) -> Result<(), DbError> {
        db::ping(&self.pool).await?;
        Ok(())
    }

    async fn home_profile(&self) -> Result<Option<HomeProfile>, DbError> {
        ProfileRepo::new(&self.pool).fetch().await
    }

    async fn statistics(&self) -> Result<Option<Statistics>, DbError> {
        StatisticsRepo::new(&self.pool).fetch().await
    }

    async fn projects(&self) -> Result<Vec<Project>, DbError> {
        ProjectRepo::new(&self.pool).list_by_likes().await
    }

    async fn increment_visitor_count(&self) -> Result<i64, DbError> {
        StatisticsRepo::new(&self.pool).increment_visitors().await
    }

    async fn increment_like_count(&self, project_id: &str) -> Result<i64, DbError> {
        ProjectRepo::new(&self.pool).increment_likes(project_id).await
    }
}
