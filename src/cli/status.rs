//! Status command implementation

use colored::Colorize;

use crate::cli::args::GlobalOptions;
use crate::client::rest_prefix;
use crate::config::Config;
use crate::error::Result;

/// Run the status command to display configuration status
pub fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}\n", "ghvars Configuration Status".bold());

    let config_path = Config::resolve_path(opts.config_ref())?;
    if config_path.exists() {
        println!("Config file: {}", config_path.display().to_string().cyan());
    } else {
        println!(
            "Config file: {} {}",
            config_path.display().to_string().cyan(),
            "(not found, using defaults)".dimmed()
        );
    }

    let config = Config::load_at(opts.config_ref())?;
    let host = config.default_host(opts.hostname_ref());
    println!("Default host: {}", host.bold());
    match &opts.api_url {
        Some(url) => println!("API base: {} {}", url.cyan(), "(override)".dimmed()),
        None => println!("API base: {}", rest_prefix(&host).cyan()),
    }
    println!();

    if ["GH_TOKEN", "GITHUB_TOKEN"]
        .iter()
        .any(|name| std::env::var(name).is_ok_and(|t| !t.is_empty()))
    {
        println!("{} Token provided by environment", "✓".green());
    } else if config.token_for(&host, None).is_some() {
        println!("{} Token configured for {}", "✓".green(), host);
    } else {
        println!("{} No token for {}", "✗".red(), host);
        println!("  → Set GH_TOKEN or add hosts.{}.token to the config file", host);
    }

    if let Some(user) = config.hosts.get(&host).and_then(|h| h.user.as_deref()) {
        println!("{} Logged in as {}", "✓".green(), user);
    }

    if let Some(repo) = opts.repo_ref() {
        println!("{} Base repository: {}", "○".dimmed(), repo);
    }
    println!(
        "{} Selected-repository lookups in flight: {}",
        "○".dimmed(),
        config.preferences.enrich_concurrency
    );
    println!();

    Ok(())
}
