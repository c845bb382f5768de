//! Error types for ghvars

use thiserror::Error;

/// Result type alias for ghvars operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Scope(#[from] ScopeError),

    /// A selected-repositories lookup failed for one variable.
    #[error("failed determining selected repositories for {name}: {source}")]
    Enrichment {
        name: String,
        #[source]
        source: Box<Error>,
    },

    /// Listing the variables of a scope failed.
    #[error("failed to get variables: {source}")]
    Listing {
        #[source]
        source: Box<Error>,
    },

    /// The listing succeeded but returned nothing.
    #[error("{0}")]
    NoResults(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Wrap a failure of the listing step
    pub fn listing(source: Error) -> Self {
        Error::Listing {
            source: Box::new(source),
        }
    }

    /// HTTP status of the underlying API failure, looking through added context.
    pub fn http_status(&self) -> Option<u16> {
        match self {
            Error::Api(ApiError::Http { status, .. }) => Some(*status),
            Error::Listing { source } | Error::Enrichment { source, .. } => source.http_status(),
            _ => None,
        }
    }

    /// Suggested next step for API failures the user can usually fix
    pub fn hint(&self) -> Option<&'static str> {
        match self.http_status()? {
            401 => Some("check that GH_TOKEN or the token in the config file is valid"),
            403 => Some("the token may lack permission to read Actions variables, or the rate limit was hit"),
            404 => Some("check the repository, environment or organization name and that the token can access it"),
            _ => None,
        }
    }
}

/// API-related errors
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a non-success status.
    #[error("HTTP {status}: {message} ({url}){}", format_details(.errors))]
    Http {
        status: u16,
        message: String,
        url: String,
        errors: Vec<String>,
    },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),

    #[error("Invalid URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },
}

fn format_details(errors: &[String]) -> String {
    if errors.is_empty() {
        String::new()
    } else {
        format!("\n{}", errors.join("\n"))
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Network("Request timed out".to_string())
        } else if err.is_connect() {
            ApiError::Network(format!("Failed to connect to API: {}", err))
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

/// Errors raised while deciding which repository, environment or organization to query
#[derive(Debug, Error)]
pub enum ScopeError {
    #[error("expected the \"[HOST/]OWNER/REPO\" format, got \"{0}\"")]
    InvalidRepo(String),

    #[error("could not determine base repository: {0}")]
    NoBaseRepo(String),
}
