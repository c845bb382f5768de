//! Single-page GET requests
//!
//! Issues one request, maps failures onto [`ApiError`] and decodes the JSON
//! body into the caller's envelope type. The `Link` header of the response is
//! reduced to a [`Continuation`] so callers never see header text.

use log::debug;
use reqwest::header::{CONTENT_TYPE, HeaderValue, LINK};
use reqwest::{Method, Request, Response, Url};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use super::HttpTransport;
use super::link::{Continuation, find_next_page};
use crate::error::{ApiError, Result};

/// A decoded response body plus the pointer to the following page
#[derive(Debug)]
pub struct Page<T> {
    pub data: T,
    pub next: Option<Continuation>,
}

/// GET `url` and decode the JSON body as `T`.
pub async fn get_page<T, C>(client: &C, url: &str) -> Result<Page<T>>
where
    T: DeserializeOwned,
    C: HttpTransport + ?Sized,
{
    let parsed = Url::parse(url).map_err(|e| ApiError::InvalidUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })?;

    let mut request = Request::new(Method::GET, parsed);
    request.headers_mut().insert(
        CONTENT_TYPE,
        HeaderValue::from_static("application/json; charset=utf-8"),
    );

    debug!("GET {}", url);
    let response = client.send(request).await?;

    let status = response.status();
    if !status.is_success() {
        return Err(http_error(response, url).await.into());
    }

    let next = response
        .headers()
        .get(LINK)
        .and_then(|v| v.to_str().ok())
        .and_then(find_next_page);

    let body = response.bytes().await.map_err(ApiError::from)?;
    let data = serde_json::from_slice(&body).map_err(|e| {
        ApiError::InvalidResponse(format!("Failed to parse response from {}: {}", url, e))
    })?;

    Ok(Page { data, next })
}

/// Error body returned by the GitHub REST API
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    errors: Vec<ErrorDetail>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ErrorDetail {
    Text(String),
    Object {
        #[serde(default)]
        message: Option<String>,
        #[serde(default)]
        resource: Option<String>,
        #[serde(default)]
        field: Option<String>,
        #[serde(default)]
        code: Option<String>,
    },
}

impl ErrorDetail {
    fn describe(&self) -> Option<String> {
        match self {
            ErrorDetail::Text(text) if !text.is_empty() => Some(text.clone()),
            ErrorDetail::Text(_) => None,
            ErrorDetail::Object {
                message: Some(message),
                ..
            } if !message.is_empty() => Some(message.clone()),
            ErrorDetail::Object {
                resource,
                field,
                code,
                ..
            } => {
                let code = code.as_deref()?;
                match (resource.as_deref(), field.as_deref()) {
                    (Some(resource), Some(field)) => {
                        Some(format!("{}.{} {}", resource, field, code))
                    }
                    (None, Some(field)) => Some(format!("{} {}", field, code)),
                    _ => Some(code.to_string()),
                }
            }
        }
    }
}

/// Build an [`ApiError::Http`] from a non-success response, consuming it.
async fn http_error(response: Response, url: &str) -> ApiError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let parsed: ErrorBody = serde_json::from_str(&body).unwrap_or_default();

    let message = parsed
        .message
        .filter(|m| !m.is_empty())
        .or_else(|| status.canonical_reason().map(str::to_string))
        .unwrap_or_else(|| "Unexpected status".to_string());

    ApiError::Http {
        status: status.as_u16(),
        message,
        url: url.to_string(),
        errors: parsed.errors.iter().filter_map(ErrorDetail::describe).collect(),
    }
}
