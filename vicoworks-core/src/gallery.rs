//! Project gallery search and category filtering.
//!
//! Filtering always runs over the complete, already-ordered project list;
//! it never reorders.

use serde::Deserialize;

use crate::records::Project;

/// Category facet that matches every project.
pub const ALL_CATEGORIES: &str = "All";

/// Category facets for a project list: `"All"` first, then each distinct
/// category in first-seen order.
pub fn category_facets(projects: &[Project]) -> Vec<String> {
    let mut facets = vec![ALL_CATEGORIES.to_string()];
    for category in projects.iter().flat_map(Project::categories) {
        if !facets.contains(&category) {
            facets.push(category);
        }
    }
    facets
}

/// Name search plus category selection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectFilter {
    /// Case-insensitive substring matched against the project name only
    #[serde(default, alias = "q")]
    pub query: Option<String>,
    /// Exact category; `None` or `"All"` matches everything
    #[serde(default)]
    pub category: Option<String>,
}

impl ProjectFilter {
    pub fn new(query: Option<String>, category: Option<String>) -> Self {
        Self { query, category }
    }

    /// True when the filter lets every project through.
    pub fn is_empty(&self) -> bool {
        self.query.as_deref().map_or(true, str::is_empty) && self.selected_category().is_none()
    }

    fn selected_category(&self) -> Option<&str> {
        self.category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty() && *c != ALL_CATEGORIES)
    }

    pub fn matches(&self, project: &Project) -> bool {
        let matches_search = match self.query.as_deref() {
            Some(query) if !query.is_empty() => project
                .display_name()
                .to_lowercase()
                .contains(&query.to_lowercase()),
            _ => true,
        };

        let matches_category = match self.selected_category() {
            Some(category) => project.categories().iter().any(|c| c == category),
            None => true,
        };

        matches_search && matches_category
    }

    /// Keep the matching projects, preserving order.
    pub fn apply(&self, projects: Vec<Project>) -> Vec<Project> {
        if self.is_empty() {
            return projects;
        }
        projects.into_iter().filter(|p| self.matches(p)).collect()
    }
}
