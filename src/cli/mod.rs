//! CLI command definitions and handlers

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, Subcommand};
pub use clap_complete::Shell;

pub mod args;
pub mod context;
pub mod status;
pub mod variable;

pub use args::{GlobalOptions, OutputFormat};
pub use context::CommandContext;

/// ghvars - list GitHub Actions variables for a repository, environment or organization
#[derive(Parser, Debug)]
#[command(name = "ghvars")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (pretty, table, json)
    #[arg(
        long,
        global = true,
        env = "GHVARS_FORMAT",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: Option<OutputFormat>,

    /// Select another repository using the [HOST/]OWNER/REPO format
    #[arg(short = 'R', long, global = true, env = "GH_REPO", hide_env = true)]
    pub repo: Option<String>,

    /// GitHub host used for organization requests
    #[arg(long, global = true, env = "GH_HOST", hide_env = true)]
    pub hostname: Option<String>,

    /// Override config file location
    #[arg(long, global = true, env = "GHVARS_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Send API requests to this base URL instead of the host's API
    #[arg(long, global = true, env = "GHVARS_API_URL", hide = true)]
    pub api_url: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "GHVARS_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Work with GitHub Actions variables
    #[command(subcommand, visible_alias = "var")]
    Variable(VariableCommands),

    /// Show configuration and authentication status
    Status,

    /// Display version information
    Version,

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Variable subcommands
#[derive(Subcommand, Debug)]
pub enum VariableCommands {
    /// List variables for a repository, environment or organization
    #[command(visible_alias = "ls")]
    List {
        /// List variables for an organization
        #[arg(short, long)]
        org: Option<String>,

        /// List variables for an environment
        #[arg(short, long)]
        env: Option<String>,
    },
}

impl VariableCommands {
    /// Check flag combinations clap cannot express.
    ///
    /// `--org` and `--env` only conflict when both carry a non-empty value.
    pub fn validate(&self) -> Result<(), clap::Error> {
        match self {
            VariableCommands::List { org, env } => {
                let given = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.is_empty());
                if given(org) && given(env) {
                    return Err(Cli::command().error(
                        ErrorKind::ArgumentConflict,
                        "specify only one of `--org` or `--env`",
                    ));
                }
                Ok(())
            }
        }
    }
}
