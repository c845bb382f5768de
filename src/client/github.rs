//! GitHub API client implementation

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderValue, USER_AGENT};
use reqwest::{Client as HttpClient, Request, Response};

use super::enrich;
use super::models::{Variable, VariablesPayload};
use super::pagination::walk_collection;
use super::{HttpTransport, VariablesApi};
use crate::error::{ApiError, ConfigError, Result};
use crate::scope::Scope;

/// Per-request timeout applied by the default transport
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Media type requested from the REST API
const GITHUB_JSON: &str = "application/vnd.github+json";

/// GitHub API client.
///
/// Wraps a transport and decorates every request with credentials and the
/// headers GitHub expects.
pub struct GitHubClient<T: HttpTransport = HttpClient> {
    transport: T,
    token: Option<String>,
    api_url: Option<String>,
    enrich_concurrency: usize,
}

impl GitHubClient<HttpClient> {
    /// Create a client backed by reqwest with the default timeout
    pub fn new(token: Option<String>) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self::with_transport(http, token))
    }
}

impl<T: HttpTransport> GitHubClient<T> {
    /// Create a client over an arbitrary transport
    pub fn with_transport(transport: T, token: Option<String>) -> Self {
        Self {
            transport,
            token,
            api_url: None,
            enrich_concurrency: 1,
        }
    }

    /// Send every request to `url` instead of the host's usual API base
    pub fn api_url(mut self, url: Option<String>) -> Self {
        self.api_url = url.filter(|u| !u.is_empty());
        self
    }

    /// Number of selected-repository lookups kept in flight at once
    pub fn enrich_concurrency(mut self, max_concurrent: usize) -> Self {
        self.enrich_concurrency = max_concurrent.max(1);
        self
    }

    /// Host (or API base URL) that requests for `host` should target
    fn target<'a>(&'a self, host: &'a str) -> &'a str {
        self.api_url.as_deref().unwrap_or(host)
    }
}

#[async_trait]
impl<T: HttpTransport> HttpTransport for GitHubClient<T> {
    async fn send(&self, mut request: Request) -> Result<Response> {
        let headers = request.headers_mut();
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_JSON));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("ghvars/", env!("CARGO_PKG_VERSION"))),
        );
        if let Some(token) = &self.token {
            let mut value = HeaderValue::from_str(&format!("token {}", token)).map_err(|_| {
                ConfigError::Invalid("token contains invalid characters".to_string())
            })?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        self.transport.send(request).await
    }
}

#[async_trait]
impl<T: HttpTransport> VariablesApi for GitHubClient<T> {
    async fn list_variables(
        &self,
        scope: &Scope,
        host: &str,
        enrich_selected_repo_counts: bool,
    ) -> Result<Vec<Variable>> {
        let path = scope.path();
        debug!("Listing {} variables from {}", scope, path);

        let mut variables =
            walk_collection::<VariablesPayload, _>(self, self.target(host), &path).await?;

        let wants_counts = match scope {
            Scope::Organization(_) => enrich_selected_repo_counts,
            Scope::Repository(_) | Scope::Environment { .. } => false,
        };
        if wants_counts {
            enrich::enrich_selected_repo_counts(self, &mut variables, self.enrich_concurrency)
                .await?;
        }

        Ok(variables)
    }
}
