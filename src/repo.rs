//! Base repository resolution
//!
//! Repository and environment variables live under a specific repository.
//! It comes from `--repo` (or `GH_REPO`) when given, otherwise from the git
//! remotes of the current working directory.

use std::fmt;
use std::process::Command;

use log::debug;
use reqwest::Url;

use crate::error::{Result, ScopeError};

/// Remote names tried first, in order, before falling back to the first remote
const PREFERRED_REMOTES: [&str; 3] = ["upstream", "github", "origin"];

/// A repository on a specific GitHub host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    host: String,
    owner: String,
    name: String,
}

impl RepoRef {
    pub fn new(host: impl Into<String>, owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            host: normalize_host(&host.into()),
            owner: owner.into(),
            name: name.into(),
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// `OWNER/REPO`
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner(), self.name())
    }

    /// Parse `OWNER/REPO`, `HOST/OWNER/REPO` or a repository URL.
    ///
    /// `default_host` applies to the two-part form.
    pub fn parse(input: &str, default_host: &str) -> Result<Self> {
        let input = input.trim();
        if input.contains("://") || input.starts_with("git@") {
            return Self::from_url(input);
        }

        let parts: Vec<&str> = input.split('/').collect();
        if parts.iter().any(|p| p.is_empty()) {
            return Err(ScopeError::InvalidRepo(input.to_string()).into());
        }

        match parts.as_slice() {
            [owner, name] => Ok(Self::new(default_host, *owner, *name)),
            [host, owner, name] => Ok(Self::new(*host, *owner, *name)),
            _ => Err(ScopeError::InvalidRepo(input.to_string()).into()),
        }
    }

    /// Parse a git remote URL (`https://`, `ssh://` or scp-like `git@host:owner/repo`).
    pub fn from_url(remote: &str) -> Result<Self> {
        let normalized = match remote.strip_prefix("git@") {
            Some(rest) if !rest.contains("://") => format!("ssh://git@{}", rest.replacen(':', "/", 1)),
            _ => remote.to_string(),
        };

        let url = Url::parse(&normalized)
            .map_err(|_| ScopeError::InvalidRepo(remote.to_string()))?;
        let host = url
            .host_str()
            .ok_or_else(|| ScopeError::InvalidRepo(remote.to_string()))?;

        let segments: Vec<&str> = url
            .path_segments()
            .map(|s| s.filter(|p| !p.is_empty()).collect())
            .unwrap_or_default();

        match segments.as_slice() {
            [owner, name] => {
                let name = name.strip_suffix(".git").unwrap_or(*name);
                if name.is_empty() {
                    return Err(ScopeError::InvalidRepo(remote.to_string()).into());
                }
                Ok(Self::new(host, *owner, name))
            }
            _ => Err(ScopeError::InvalidRepo(remote.to_string()).into()),
        }
    }
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.host, self.owner, self.name)
    }
}

fn normalize_host(host: &str) -> String {
    let host = host.to_lowercase();
    host.strip_prefix("www.").map(str::to_string).unwrap_or(host)
}

/// Resolve the repository to query.
///
/// An explicit override wins; otherwise the git remotes of the working
/// directory are consulted.
pub fn resolve_base_repo(repo_override: Option<&str>, default_host: &str) -> Result<RepoRef> {
    if let Some(repo) = repo_override.filter(|r| !r.trim().is_empty()) {
        return RepoRef::parse(repo, default_host);
    }

    let output = Command::new("git")
        .args(["remote", "-v"])
        .output()
        .map_err(|e| ScopeError::NoBaseRepo(format!("failed to run git: {}", e)))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(ScopeError::NoBaseRepo(stderr.trim().to_string()).into());
    }

    let remotes = parse_remotes(&String::from_utf8_lossy(&output.stdout));
    let repo = pick_remote(&remotes)?;
    debug!("Resolved base repository {} from git remotes", repo);
    Ok(repo)
}

/// Parse `git remote -v` output into `(name, url)` pairs, fetch URLs only.
pub fn parse_remotes(output: &str) -> Vec<(String, String)> {
    output
        .lines()
        .filter_map(|line| {
            let mut fields = line.split_whitespace();
            let name = fields.next()?;
            let url = fields.next()?;
            match fields.next() {
                Some("(push)") => None,
                _ => Some((name.to_string(), url.to_string())),
            }
        })
        .collect()
}

/// Choose the base repository among parsed remotes.
fn pick_remote(remotes: &[(String, String)]) -> Result<RepoRef> {
    let candidates: Vec<(&str, RepoRef)> = remotes
        .iter()
        .filter_map(|(name, url)| RepoRef::from_url(url).ok().map(|r| (name.as_str(), r)))
        .collect();

    PREFERRED_REMOTES
        .iter()
        .find_map(|preferred| {
            candidates
                .iter()
                .find(|(name, _)| name == preferred)
                .map(|(_, repo)| repo.clone())
        })
        .or_else(|| candidates.first().map(|(_, repo)| repo.clone()))
        .ok_or_else(|| {
            ScopeError::NoBaseRepo(
                "no git remotes found; use --repo to specify a repository".to_string(),
            )
            .into()
        })
}
