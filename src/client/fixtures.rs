//! Test fixtures and builders for API model types
//!
//! Provides builder patterns for creating test data with sensible defaults.
//! Import via `use crate::client::fixtures::*` in test modules.

use chrono::{DateTime, TimeZone, Utc};
use serde_json::json;

use super::models::{Variable, Visibility};

/// Fixed timestamp used by fixtures: 2024-03-15T09:30:00Z
pub fn fixture_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 15, 9, 30, 0)
        .single()
        .expect("valid fixture timestamp")
}

// ============================================================================
// VariableBuilder
// ============================================================================

/// Builder for creating test Variable instances and their wire JSON.
///
/// # Example
/// ```ignore
/// let var = VariableBuilder::new("DEPLOY_ENV")
///     .value("production")
///     .selected("https://api.github.com/orgs/acme/actions/variables/DEPLOY_ENV/repositories")
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct VariableBuilder {
    name: String,
    value: String,
    updated_at: DateTime<Utc>,
    visibility: Visibility,
    selected_repositories_url: Option<String>,
}

impl VariableBuilder {
    /// Create a new builder with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            value: format!("value-of-{}", name.to_lowercase()),
            name,
            updated_at: fixture_time(),
            visibility: Visibility::Unset,
            selected_repositories_url: None,
        }
    }

    /// Set the value.
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Set the visibility without a selected-repositories reference.
    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Mark as `selected` with the given sub-resource URL.
    pub fn selected(mut self, url: impl Into<String>) -> Self {
        self.visibility = Visibility::Selected;
        self.selected_repositories_url = Some(url.into());
        self
    }

    /// Build the Variable.
    pub fn build(self) -> Variable {
        Variable {
            name: self.name,
            value: self.value,
            created_at: None,
            updated_at: self.updated_at,
            visibility: self.visibility,
            selected_repositories_url: self.selected_repositories_url,
            selected_repo_count: None,
        }
    }

    /// Render the variable as the API would.
    pub fn to_json(&self) -> serde_json::Value {
        let mut value = json!({
            "name": self.name,
            "value": self.value,
            "created_at": self.updated_at.to_rfc3339(),
            "updated_at": self.updated_at.to_rfc3339(),
        });
        if self.visibility != Visibility::Unset {
            value["visibility"] = json!(self.visibility.as_str());
        }
        if let Some(url) = &self.selected_repositories_url {
            value["selected_repositories_url"] = json!(url);
        }
        value
    }
}

/// JSON body for a page holding the given variables.
pub fn page_of(vars: &[VariableBuilder]) -> String {
    json!({
        "total_count": vars.len(),
        "variables": vars.iter().map(VariableBuilder::to_json).collect::<Vec<_>>(),
    })
    .to_string()
}

/// JSON body for a page of `count` variables named `VAR_{start..}`.
pub fn variables_page(start: usize, count: usize) -> String {
    let vars: Vec<VariableBuilder> = (start..start + count)
        .map(|i| VariableBuilder::new(format!("VAR_{:03}", i)))
        .collect();
    page_of(&vars)
}

/// JSON body of a selected-repositories lookup.
pub fn selected_repos_body(total_count: u64) -> String {
    json!({ "total_count": total_count, "repositories": [] }).to_string()
}
