//! GitHub REST client
//!
//! The listing core only needs something that can send a request and hand
//! back a response ([`HttpTransport`]). Authentication, timeouts and TLS live
//! in whatever implements it.

use async_trait::async_trait;
use reqwest::{Request, Response};

use crate::error::{ApiError, Result};

pub mod api;
pub mod enrich;
pub mod fetch;
#[cfg(test)]
pub mod fixtures;
pub mod github;
pub mod link;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod pagination;

pub use api::VariablesApi;
pub use github::GitHubClient;

/// Capability to perform a single HTTP request/response exchange.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Send `request` and return the raw response, whatever its status.
    async fn send(&self, request: Request) -> Result<Response>;
}

#[async_trait]
impl HttpTransport for reqwest::Client {
    async fn send(&self, request: Request) -> Result<Response> {
        Ok(self.execute(request).await.map_err(ApiError::from)?)
    }
}

/// Base URL of the REST API served for `host`, always ending in `/`.
///
/// A value that already carries a scheme is taken as the API base itself.
pub fn rest_prefix(host: &str) -> String {
    if host.starts_with("http://") || host.starts_with("https://") {
        return if host.ends_with('/') {
            host.to_string()
        } else {
            format!("{}/", host)
        };
    }

    let host = host.to_lowercase();
    if host == "github.com" {
        "https://api.github.com/".to_string()
    } else if host == "github.localhost" {
        "http://api.github.localhost/".to_string()
    } else if host.ends_with(".ghe.com") {
        format!("https://api.{}/", host)
    } else {
        format!("https://{}/api/v3/", host)
    }
}
