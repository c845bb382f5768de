//! Global CLI options shared across all commands
//!
//! Handlers take one `GlobalOptions` instead of the individual global flags.

use crate::cli::{Cli, OutputFormat};

/// Global CLI options passed to all command handlers.
///
/// # Precedence
///
/// For most options, the precedence is: CLI flag > environment variable > config file > default.
/// This struct captures the CLI/env layer; config file defaults are resolved later in
/// `CommandContext`.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Output format; `None` defers to config and terminal detection
    pub format: Option<OutputFormat>,

    /// Custom config file path
    pub config: Option<String>,

    /// Base repository override (`[HOST/]OWNER/REPO`)
    pub repo: Option<String>,

    /// Default GitHub host override
    pub hostname: Option<String>,

    /// API base URL override for development/testing
    pub api_url: Option<String>,
}

impl GlobalOptions {
    /// Create GlobalOptions from a parsed CLI struct.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            config: cli.config.clone(),
            repo: cli.repo.clone(),
            hostname: cli.hostname.clone(),
            api_url: cli.api_url.clone(),
        }
    }

    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }

    pub fn repo_ref(&self) -> Option<&str> {
        self.repo.as_deref()
    }

    pub fn hostname_ref(&self) -> Option<&str> {
        self.hostname.as_deref()
    }
}
