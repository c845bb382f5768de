//! Common CLI types shared across commands

use std::str::FromStr;

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pretty format - human-optimized table (default on a terminal)
    Pretty,
    /// Table format - tab-separated rows for scripts and pipes
    Table,
    /// JSON format - structured for scripts/APIs
    Json,
}

impl OutputFormat {
    /// Whether this format is meant for a human reading a terminal
    pub fn is_interactive(self) -> bool {
        matches!(self, OutputFormat::Pretty)
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as clap::ValueEnum>::from_str(s, true)
    }
}
