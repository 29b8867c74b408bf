//! Statistics repository (`statistics`)
//!
//! `project_count` is maintained outside this system; only
//! `visitor_count` is ever written here. Ids and counts are cast to
//! text/bigint so uuid or int4 columns decode the same way.

use sqlx::PgPool;
use vicoworks_core::Statistics;

use super::DbError;

pub struct StatisticsRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> StatisticsRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Fetch the singleton statistics row, if present.
    pub async fn fetch(&self) -> Result<Option<Statistics>, DbError> {
        let stats = sqlx::query_as::<_, Statistics>(
            r#"
            SELECT id::text AS id,
                   visitor_count::bigint AS visitor_count,
                   project_count::bigint AS project_count
            FROM statistics
            ORDER BY id::text
            LIMIT 1
            "#,
        )
        .fetch_optional(self.pool)
        .await?;

        Ok(stats)
    }

    /// Add one to the visitor count and return the new value.
    ///
    /// A NULL count is treated as 0. The increment happens inside the
    /// UPDATE, so concurrent visits are never lost.
    pub async fn increment_visitors(&self) -> Result<i64, DbError> {
        let count: Option<i64> = sqlx::query_scalar(
            r#"
            UPDATE statistics
            SET visitor_count = COALESCE(visitor_count, 0) + 1
            WHERE id = (SELECT id FROM statistics ORDER BY id::text LIMIT 1)
            RETURNING visitor_count::bigint
            "#,
        )
        .fetch_optional(self.pool)
        .await?;

        count.ok_or_else(|| DbError::not_found("statistics", "singleton"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn setup() -> PgPool {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = crate::db::create_pool(&url).await.expect("pool creation failed");
        crate::db::migrations::run(&pool).await.expect("bootstrap failed");
        pool
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn increment_adds_exactly_one() {
        let pool = setup().await;
        let repo = StatisticsRepo::new(&pool);

        let Some(before) = repo.fetch().await.expect("fetch failed") else {
            // Nothing to increment in an unseeded database
            return;
        };
        let after = repo.increment_visitors().await.expect("increment failed");
        assert!(after >= before.visitors() + 1);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn concurrent_increments_are_not_lost() {
        let pool = setup().await;
        if StatisticsRepo::new(&pool).fetch().await.expect("fetch failed").is_none() {
            return;
        }

        let before = StatisticsRepo::new(&pool)
            .fetch()
            .await
            .expect("fetch failed")
            .map(|s| s.visitors())
            .unwrap_or(0);

        let handles: Vec<_> = (0..10)
            .map(|_| {
                let pool = pool.clone();
                tokio::spawn(async move {
                    StatisticsRepo::new(&pool)
                        .increment_visitors()
                        .await
                        .expect("increment failed")
                })
            })
            .collect();
        for handle in handles {
            handle.await.expect("task panicked");
        }

        let after = StatisticsRepo::new(&pool)
            .fetch()
            .await
            .expect("fetch failed")
            .map(|s| s.visitors())
            .unwrap_or(0);
        assert!(after >= before + 10);
    }
}
