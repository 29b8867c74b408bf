//! Project repository (`projects`)
//!
//! The hosted table's id may be text or uuid and its counts int4 or int8;
//! every read casts to the record's types and ids are compared as text.

use sqlx::PgPool;
use vicoworks_core::Project;

use super::DbError;

const PROJECT_COLUMNS: &str = r#"
    id::text AS id, "projectName",
    "startedAt"::timestamptz AS "startedAt",
    "finishedAt"::timestamptz AS "finishedAt",
    status, description, video_url, category, skill,
    like_count::bigint AS like_count, project_url
"#;

pub struct ProjectRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ProjectRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All projects, most liked first. Unset like counts sort last;
    /// ties fall back to id order.
    pub async fn list_by_likes(&self) -> Result<Vec<Project>, DbError> {
        let sql = format!(
            "SELECT {} FROM projects ORDER BY like_count DESC NULLS LAST, id::text ASC",
            PROJECT_COLUMNS
        );
        let projects = sqlx::query_as::<_, Project>(&sql)
            .fetch_all(self.pool)
            .await?;

        Ok(projects)
    }

    /// Get a single project by id.
    pub async fn get(&self, id: &str) -> Result<Project, DbError> {
        let sql = format!("SELECT {} FROM projects WHERE id::text = $1", PROJECT_COLUMNS);
        sqlx::query_as::<_, Project>(&sql)
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| DbError::not_found("project", id))
    }

    /// Add one to a project's like count and return the new value.
    ///
    /// A NULL count is treated as 0; the row is matched by id.
    pub async fn increment_likes(&self, id: &str) -> Result<i64, DbError> {
        let count: Option<i64> = sqlx::query_scalar(
            r#"
            UPDATE projects
            SET like_count = COALESCE(like_count, 0) + 1
            WHERE id::text = $1
            RETURNING like_count::bigint
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        count.ok_or_else(|| DbError::not_found("project", id))
    }
}
