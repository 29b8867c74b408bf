//! Schema bootstrap for local development
//!
//! The hosted store owns these tables in production. This only creates
//! them when absent so a fresh Postgres can back the server; it never
//! touches existing rows.

use sqlx::PgPool;

use super::repos::DbError;

const CREATE_HOME_VIEW: &str = r#"
    CREATE TABLE IF NOT EXISTS home_view (
        id TEXT PRIMARY KEY DEFAULT gen_random_uuid()::text,
        overview TEXT,
        image_url TEXT,
        core TEXT,
        skill TEXT,
        whatsapp TEXT,
        gmail TEXT,
        "linkedIn" TEXT,
        "Github" TEXT
    )
"#;

const CREATE_STATISTICS: &str = r#"
    CREATE TABLE IF NOT EXISTS statistics (
        id TEXT PRIMARY KEY DEFAULT gen_random_uuid()::text,
        visitor_count BIGINT CHECK (visitor_count >= 0),
        project_count BIGINT CHECK (project_count >= 0)
    )
"#;

const CREATE_PROJECTS: &str = r#"
    CREATE TABLE IF NOT EXISTS projects (
        id TEXT PRIMARY KEY DEFAULT gen_random_uuid()::text,
        "projectName" TEXT,
        "startedAt" TIMESTAMPTZ,
        "finishedAt" TIMESTAMPTZ,
        status TEXT,
        description TEXT,
        video_url TEXT,
        category TEXT,
        skill TEXT,
        like_count BIGINT CHECK (like_count >= 0),
        project_url TEXT
    )
"#;

const CREATE_PROJECTS_LIKE_INDEX: &str = r#"
    CREATE INDEX IF NOT EXISTS projects_like_count_idx
    ON projects (like_count DESC NULLS LAST, id)
"#;

/// Create the portfolio tables if they don't exist.
pub async fn run(pool: &PgPool) -> Result<(), DbError> {
    tracing::info!("Running portfolio schema bootstrap...");

    for statement in [
        CREATE_HOME_VIEW,
        CREATE_STATISTICS,
        CREATE_PROJECTS,
        CREATE_PROJECTS_LIKE_INDEX,
    ] {
        sqlx::query(statement).execute(pool).await?;
    }

    tracing::info!("Schema bootstrap complete");
    Ok(())
}
