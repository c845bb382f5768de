//! Mock HTTP transport for testing
//!
//! Serves canned responses keyed by exact URL and records every request so
//! tests can assert on ordering and request counts without a network.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::{Method, Request, Response};

use super::HttpTransport;
use crate::error::{ApiError, Result};

/// Canned outcome for one URL
#[derive(Debug, Clone)]
enum Canned {
    Reply {
        status: u16,
        body: String,
        link: Option<String>,
    },
    NetworkError(String),
}

/// A request observed by the mock.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: Method,
    pub url: String,
    pub headers: HeaderMap,
}

impl CapturedRequest {
    /// Header value as a string, if present and valid UTF-8
    pub fn header(&self, name: &str) -> Option<String> {
        self.headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    }
}

/// Mock transport for testing.
///
/// # Example
/// ```ignore
/// let mock = MockTransport::new()
///     .with_page("https://api.github.com/x?per_page=100", r#"{"variables":[]}"#, None);
///
/// let page: Page<VariablesPayload> = get_page(&mock, "https://api.github.com/x?per_page=100").await?;
/// assert_eq!(mock.request_count(), 1);
/// ```
#[derive(Default)]
pub struct MockTransport {
    routes: Mutex<HashMap<String, Canned>>,
    captured: Mutex<Vec<CapturedRequest>>,
}

impl MockTransport {
    /// Create a mock with no routes; unknown URLs answer 404.
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `url` with `status` and a JSON body.
    pub fn with_json(self, url: &str, status: u16, body: &str) -> Self {
        self.insert(
            url,
            Canned::Reply {
                status,
                body: body.to_string(),
                link: None,
            },
        )
    }

    /// Answer `url` with a 200 page, optionally linking to the next one.
    pub fn with_page(self, url: &str, body: &str, next: Option<&str>) -> Self {
        self.insert(
            url,
            Canned::Reply {
                status: 200,
                body: body.to_string(),
                link: next.map(|n| {
                    format!(r#"<{}>; rel="next", <{}>; rel="last""#, n, n)
                }),
            },
        )
    }

    /// Fail requests to `url` at the transport level.
    pub fn with_network_error(self, url: &str, message: &str) -> Self {
        self.insert(url, Canned::NetworkError(message.to_string()))
    }

    fn insert(self, url: &str, canned: Canned) -> Self {
        self.routes
            .lock()
            .expect("routes lock poisoned")
            .insert(url.to_string(), canned);
        self
    }

    /// All requests seen so far, in order.
    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.captured.lock().expect("capture lock poisoned").clone()
    }

    /// URLs requested so far, in order.
    pub fn request_urls(&self) -> Vec<String> {
        self.requests().into_iter().map(|r| r.url).collect()
    }

    /// Number of requests seen so far.
    pub fn request_count(&self) -> usize {
        self.captured.lock().expect("capture lock poisoned").len()
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn send(&self, request: Request) -> Result<Response> {
        let url = request.url().to_string();
        self.captured
            .lock()
            .expect("capture lock poisoned")
            .push(CapturedRequest {
                method: request.method().clone(),
                url: url.clone(),
                headers: request.headers().clone(),
            });

        let canned = self
            .routes
            .lock()
            .expect("routes lock poisoned")
            .get(&url)
            .cloned()
            .unwrap_or(Canned::Reply {
                status: 404,
                body: r#"{"message":"Not Found"}"#.to_string(),
                link: None,
            });

        match canned {
            Canned::NetworkError(message) => Err(ApiError::Network(message).into()),
            Canned::Reply { status, body, link } => {
                let mut builder = http::Response::builder()
                    .status(status)
                    .header("content-type", "application/json; charset=utf-8");
                if let Some(link) = link {
                    builder = builder.header("link", link);
                }
                let response = builder.body(body).expect("valid canned response");
                Ok(Response::from(response))
            }
        }
    }
}
