//! Command execution context
//!
//! Loads configuration once and settles the output format, the default host
//! and the credentials used to build API clients.

use std::io::IsTerminal;

use log::debug;

use crate::cli::{GlobalOptions, OutputFormat};
use crate::client::GitHubClient;
use crate::config::Config;
use crate::error::{ConfigError, Result};

/// Environment variables consulted for a token, in order
const TOKEN_ENV_VARS: [&str; 2] = ["GH_TOKEN", "GITHUB_TOKEN"];

/// Context for command execution containing config and runtime options.
pub struct CommandContext {
    /// Loaded configuration (defaults when no file exists)
    pub config: Config,
    /// Resolved output format
    pub format: OutputFormat,
    /// Host for requests not tied to a repository
    pub default_host: String,
    api_url: Option<String>,
}

impl CommandContext {
    /// Load config and resolve global options.
    ///
    /// # Errors
    /// Returns error if the config file cannot be read or holds invalid values.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config = Config::load_at(opts.config_ref())?;
        let format = resolve_format(opts.format, &config, std::io::stdout().is_terminal())?;
        let default_host = config.default_host(opts.hostname_ref());
        debug!("Using default host {} and {:?} output", default_host, format);

        Ok(Self {
            config,
            format,
            default_host,
            api_url: opts.api_url.clone(),
        })
    }

    /// API client authenticated for `host`
    pub fn client_for(&self, host: &str) -> Result<GitHubClient> {
        let token = self.config.token_for(host, env_token());
        if token.is_none() {
            debug!("No token configured for {}; sending unauthenticated requests", host);
        }

        Ok(GitHubClient::new(token)?
            .api_url(self.api_url.clone())
            .enrich_concurrency(self.config.preferences.enrich_concurrency))
    }
}

/// Output format precedence: flag or `GHVARS_FORMAT`, config preference,
/// then `pretty` on a terminal and `table` otherwise.
fn resolve_format(
    requested: Option<OutputFormat>,
    config: &Config,
    stdout_is_terminal: bool,
) -> Result<OutputFormat> {
    if let Some(format) = requested {
        return Ok(format);
    }
    if let Some(preferred) = &config.preferences.format {
        let format = preferred.parse().map_err(|_| {
            ConfigError::Invalid(format!("unknown output format '{}'", preferred))
        })?;
        return Ok(format);
    }
    Ok(if stdout_is_terminal {
        OutputFormat::Pretty
    } else {
        OutputFormat::Table
    })
}

fn env_token() -> Option<String> {
    TOKEN_ENV_VARS
        .iter()
        .find_map(|name| std::env::var(name).ok().filter(|t| !t.is_empty()))
}
