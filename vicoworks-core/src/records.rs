//! Records read from (and, for two counters, written to) the hosted store.
//!
//! Field names follow Rust conventions; `#[sqlx(rename)]` maps them onto the
//! store's camel-case columns.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::tags::split_tags;

/// Singleton `home_view` row: hero text, tags and contact fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct HomeProfile {
    pub id: String,
    pub overview: Option<String>,
    pub image_url: Option<String>,
    pub core: Option<String>,
    pub skill: Option<String>,
    pub whatsapp: Option<String>,
    pub gmail: Option<String>,
    #[sqlx(rename = "linkedIn")]
    pub linkedin: Option<String>,
    #[sqlx(rename = "Github")]
    pub github: Option<String>,
}

impl HomeProfile {
    /// Hero "core" tags.
    pub fn core_tags(&self) -> Vec<String> {
        split_tags(self.core.as_deref())
    }

    /// Skill tags.
    pub fn skills(&self) -> Vec<String> {
        split_tags(self.skill.as_deref())
    }
}

/// Singleton `statistics` row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Statistics {
    pub id: String,
    pub visitor_count: Option<i64>,
    pub project_count: Option<i64>,
}

impl Statistics {
    /// Visitor count, with an unset value read as zero.
    pub fn visitors(&self) -> i64 {
        self.visitor_count.unwrap_or(0)
    }

    pub fn projects(&self) -> i64 {
        self.project_count.unwrap_or(0)
    }
}

/// One `projects` row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Project {
    pub id: String,
    #[sqlx(rename = "projectName")]
    pub name: Option<String>,
    #[sqlx(rename = "startedAt")]
    pub started_at: Option<DateTime<Utc>>,
    #[sqlx(rename = "finishedAt")]
    pub finished_at: Option<DateTime<Utc>>,
    pub status: Option<String>,
    pub description: Option<String>,
    pub video_url: Option<String>,
    pub category: Option<String>,
    pub skill: Option<String>,
    pub like_count: Option<i64>,
    pub project_url: Option<String>,
}

impl Project {
    /// Like count, with an unset value read as zero.
    pub fn likes(&self) -> i64 {
        self.like_count.unwrap_or(0)
    }

    pub fn categories(&self) -> Vec<String> {
        split_tags(self.category.as_deref())
    }

    pub fn skills(&self) -> Vec<String> {
        split_tags(self.skill.as_deref())
    }

    /// Name for display and search; unnamed projects read as "".
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }
}
