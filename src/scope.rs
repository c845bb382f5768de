//! Variable scope selection
//!
//! Variables live at exactly one of three levels. The level is decided once,
//! from the `--org`/`--env` inputs, and everything downstream matches on the
//! resulting [`Scope`].

use std::fmt;

use crate::error::Result;
use crate::repo::RepoRef;

/// The level at which variables are listed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scope {
    /// Repository-level Actions variables (the default)
    Repository(RepoRef),
    /// Variables of a deployment environment within a repository
    Environment { repo: RepoRef, name: String },
    /// Organization-level Actions variables
    Organization(String),
}

impl Scope {
    /// Select the scope from the organization and environment inputs.
    ///
    /// The two inputs are mutually exclusive; callers validate that before
    /// getting here. `base_repo` is only invoked for repository and
    /// environment scopes.
    pub fn resolve<F>(org: Option<&str>, env: Option<&str>, base_repo: F) -> Result<Self>
    where
        F: FnOnce() -> Result<RepoRef>,
    {
        let org = org.filter(|o| !o.is_empty());
        let env = env.filter(|e| !e.is_empty());

        match (org, env) {
            (Some(org), _) => Ok(Scope::Organization(org.to_string())),
            (None, Some(env)) => Ok(Scope::Environment {
                repo: base_repo()?,
                name: env.to_string(),
            }),
            (None, None) => Ok(Scope::Repository(base_repo()?)),
        }
    }

    /// REST path of the variables collection, relative to the API base
    pub fn path(&self) -> String {
        match self {
            Scope::Repository(repo) => format!("repos/{}/actions/variables", repo.full_name()),
            Scope::Environment { repo, name } => format!(
                "repositories/{}/environments/{}/variables",
                repo.full_name(),
                name
            ),
            Scope::Organization(org) => format!("orgs/{}/actions/variables", org),
        }
    }

    /// Host to query: the repository's host, or `default_host` for organizations
    pub fn host<'a>(&'a self, default_host: &'a str) -> &'a str {
        match self {
            Scope::Repository(repo) | Scope::Environment { repo, .. } => repo.host(),
            Scope::Organization(_) => default_host,
        }
    }

    pub fn is_organization(&self) -> bool {
        matches!(self, Scope::Organization(_))
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Repository(repo) => write!(f, "repository {}", repo.full_name()),
            Scope::Environment { repo, name } => {
                write!(f, "environment {} of {}", name, repo.full_name())
            }
            Scope::Organization(org) => write!(f, "organization {}", org),
        }
    }
}
