//! Variable models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Which repositories may read an organization variable
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    All,
    Private,
    Selected,
    /// Repository and environment variables carry no visibility
    #[default]
    #[serde(other)]
    Unset,
}

impl Visibility {
    /// Wire name of the visibility, empty when unset
    pub fn as_str(&self) -> &'static str {
        match self {
            Visibility::All => "all",
            Visibility::Private => "private",
            Visibility::Selected => "selected",
            Visibility::Unset => "",
        }
    }
}

/// A named configuration value exposed to Actions runs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Variable {
    /// Variable name, unique within its scope
    pub name: String,

    /// Variable value (may be empty)
    #[serde(default)]
    pub value: String,

    /// Creation time, when the API reports it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// Last modification time
    pub updated_at: DateTime<Utc>,

    /// Organization visibility; `Unset` for other scopes
    #[serde(default)]
    pub visibility: Visibility,

    /// Sub-resource listing the selected repositories (only for `selected`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_repositories_url: Option<String>,

    /// Number of selected repositories, filled in by enrichment only
    #[serde(skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub selected_repo_count: Option<u64>,
}

impl Variable {
    /// The selected-repositories URL, if the API supplied a non-empty one
    pub fn selected_repos_ref(&self) -> Option<&str> {
        self.selected_repositories_url
            .as_deref()
            .filter(|url| !url.is_empty())
    }
}

/// One page of the variables listing.
///
/// The envelope's `total_count` is not needed to walk the pages and is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct VariablesPayload {
    pub variables: Vec<Variable>,
}

/// Response of a selected-repositories lookup; only the count is used
#[derive(Debug, Clone, Deserialize)]
pub struct SelectedReposPayload {
    pub total_count: u64,
}
