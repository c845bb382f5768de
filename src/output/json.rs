//! JSON output formatting
//!
//! Listings are wrapped in an envelope so scripts can tell which build
//! produced them and when.

use chrono::Utc;
use serde::Serialize;

/// Envelope around JSON output
#[derive(Debug, Serialize)]
pub struct JsonOutput<T> {
    pub data: T,
    pub meta: Metadata,
}

#[derive(Debug, Serialize)]
pub struct Metadata {
    /// RFC 3339 time the output was produced
    pub timestamp: String,
    pub version: String,
}

impl<T> JsonOutput<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            meta: Metadata {
                timestamp: Utc::now().to_rfc3339(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        }
    }
}

/// Format data as pretty-printed JSON inside the envelope
pub fn format_json<T: Serialize + ?Sized>(data: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonOutput::new(data))
}
