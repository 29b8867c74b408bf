//! Home profile repository (`home_view`, read-only)

use sqlx::PgPool;
use vicoworks_core::HomeProfile;

use super::DbError;

pub struct ProfileRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ProfileRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Fetch the singleton profile row, if present.
    pub async fn fetch(&self) -> Result<Option<HomeProfile>, DbError> {
        let profile = sqlx::query_as::<_, HomeProfile>(
            r#"
            SELECT id::text AS id, overview, image_url, core, skill,
                   whatsapp, gmail, "linkedIn", "Github"
            FROM home_view
            ORDER BY id::text
            LIMIT 1
            "#,
        )
        .fetch_optional(self.pool)
        .await?;

        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore = "requires database"]
    async fn fetch_succeeds_after_bootstrap() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = crate::db::create_pool(&url).await.expect("pool creation failed");
        crate::db::migrations::run(&pool).await.expect("bootstrap failed");

        // Row presence depends on the database; the query itself must succeed
        ProfileRepo::new(&pool).fetch().await.expect("fetch failed");
    }
}
