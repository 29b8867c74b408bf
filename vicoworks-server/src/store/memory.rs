use std::cmp::Reverse;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use vicoworks_core::{HomeProfile, Project, Statistics};

use super::PortfolioStore;
use crate::db::DbError;

#[derive(Debug, Default)]
struct Tables {
    home: Vec<HomeProfile>,
    statistics: Vec<Statistics>,
    projects: Vec<Project>,
}

/// In-memory store with failure injection.
///
/// Reads and increments hold one lock, so increments are atomic like the
/// Postgres store's. `fail_reads`/`fail_writes` make every read or write
/// return `DbError::Unavailable` without touching the data.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_home_profile(self, profile: HomeProfile) -> Self {
        self.lock().home.push(profile);
        self
    }

    pub fn with_statistics(self, stats: Statistics) -> Self {
        self.lock().statistics.push(stats);
        self
    }

    pub fn with_project(self, project: Project) -> Self {
        self.lock().projects.push(project);
        self
    }

    /// Make every read fail (simulates an unreachable store).
    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Make every write fail; stored values stay untouched.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Stored visitor count of the singleton statistics row.
    pub fn stored_visitor_count(&self) -> Option<i64> {
        let mut tables = self.lock();
        singleton(&mut tables.statistics, |s| s.id.as_str()).and_then(|s| s.visitor_count)
    }

    /// Stored like count of a project.
    pub fn stored_like_count(&self, project_id: &str) -> Option<i64> {
        self.lock()
            .projects
            .iter()
            .find(|p| p.id == project_id)
            .and_then(|p| p.like_count)
    }

    fn lock(&self) -> MutexGuard<'_, Tables> {
        self.tables.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn check_reads(&self) -> Result<(), DbError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(DbError::Unavailable("memory store reads disabled".into()));
        }
        Ok(())
    }

    fn check_writes(&self) -> Result<(), DbError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(DbError::Unavailable("memory store writes disabled".into()));
        }
        Ok(())
    }
}

/// Lowest id wins, matching the Postgres singleton lookup.
fn singleton<T, F>(rows: &mut [T], id: F) -> Option<&mut T>
where
    F: Fn(&T) -> &str,
{
    rows.iter_mut().min_by(|a, b| id(a).cmp(id(b)))
}

#[async_trait]
impl PortfolioStore for MemoryStore {
    async fn ping(&self) -> Result<(), DbError> {
        self.check_reads()
    }

    async fn home_profile(&self) -> Result<Option<HomeProfile>, DbError> {
        self.check_reads()?;
        let mut tables = self.lock();
        Ok(singleton(&mut tables.home, |p| p.id.as_str()).map(|p| p.clone()))
    }

    async fn statistics(&self) -> Result<Option<Statistics>, DbError> {
        self.check_reads()?;
        let mut tables = self.lock();
        Ok(singleton(&mut tables.statistics, |s| s.id.as_str()).map(|s| s.clone()))
    }

    async fn projects(&self) -> Result<Vec<Project>, DbError> {
        self.check_reads()?;
        let mut projects = self.lock().projects.clone();
        // Same order as the SQL: count desc, nulls last, then id asc
        projects.sort_by(|a, b| {
            let key = |p: &Project| (p.like_count.is_none(), Reverse(p.likes()));
            key(a).cmp(&key(b)).then_with(|| a.id.cmp(&b.id))
        });
        Ok(projects)
    }

    async fn increment_visitor_count(&self) -> Result<i64, DbError> {
        self.check_writes()?;
        let mut tables = self.lock();
        let stats = singleton(&mut tables.statistics, |s| s.id.as_str())
            .ok_or_else(|| DbError::not_found("statistics", "singleton"))?;
        let next = stats.visitors() + 1;
        stats.visitor_count = Some(next);
        Ok(next)
    }

    async fn increment_like_count(&self, project_id: &str) -> Result<i64, DbError> {
        self.check_writes()?;
        let mut tables = self.lock();
        let project = tables
            .projects
            .iter_mut()
            .find(|p| p.id == project_id)
            .ok_or_else(|| DbError::not_found("project", project_id))?;
        let next = project.likes() + 1;
        project.like_count = Some(next);
        Ok(next)
    }
}
