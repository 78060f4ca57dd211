//! List filters applied to query results.
//!
//! Filters compare raw query text against record labels with exact,
//! case-sensitive equality and AND-combine. Empty values are treated as
//! absent, and a value outside an enumeration simply matches nothing.

use super::{FinancingScheme, Project};

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn matches(filter: Option<&String>, actual: &str) -> bool {
    filter.is_none_or(|expected| expected == actual)
}

/// Filter over [`Project`] listings.
///
/// # Examples
/// ```
/// use backend::domain::ProjectFilter;
///
/// let filter = ProjectFilter::new(None, Some(String::new()), Some("Operational".into()));
/// assert!(filter.technology.is_none());
/// assert_eq!(filter.status.as_deref(), Some("Operational"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectFilter {
    pub state: Option<String>,
    pub technology: Option<String>,
    pub status: Option<String>,
}

impl ProjectFilter {
    /// Build a filter, dropping empty values.
    pub fn new(
        state: Option<String>,
        technology: Option<String>,
        status: Option<String>,
    ) -> Self {
        Self {
            state: non_empty(state),
            technology: non_empty(technology),
            status: non_empty(status),
        }
    }

    /// Whether `project` satisfies every populated criterion.
    pub fn matches(&self, project: &Project) -> bool {
        matches(self.state.as_ref(), &project.state)
            && matches(self.technology.as_ref(), project.technology.as_str())
            && matches(self.status.as_ref(), project.status.as_str())
    }

    /// Keep matching projects, preserving order.
    pub fn apply(&self, projects: Vec<Project>) -> Vec<Project> {
        projects.into_iter().filter(|p| self.matches(p)).collect()
    }
}

/// Filter over [`FinancingScheme`] listings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemeFilter {
    pub category: Option<String>,
}

impl SchemeFilter {
    /// Build a filter, dropping an empty category.
    pub fn new(category: Option<String>) -> Self {
        Self {
            category: non_empty(category),
        }
    }

    /// Keep matching schemes, preserving order.
    pub fn apply(&self, schemes: Vec<FinancingScheme>) -> Vec<FinancingScheme> {
        schemes
            .into_iter()
            .filter(|s| matches(self.category.as_ref(), s.category.as_str()))
            .collect()
    }
}
