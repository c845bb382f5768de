//! ghvars - list GitHub Actions variables from the command line

use std::io::IsTerminal;

use clap::{CommandFactory, Parser};

mod cli;
mod client;
mod config;
mod error;
mod models;
mod output;
mod repo;
mod scope;

use cli::{Cli, Commands, GlobalOptions, VariableCommands};
use error::{Error, Result};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    if let Commands::Variable(cmd) = &cli.command {
        if let Err(err) = cmd.validate() {
            err.exit();
        }
    }
    init_logging(cli.debug);

    match run(cli).await {
        Ok(()) => {}
        Err(Error::NoResults(msg)) => {
            if std::io::stdout().is_terminal() {
                eprintln!("{}", msg);
            }
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            if let Some(hint) = err.hint() {
                eprintln!("Hint: {}", hint);
            }
            std::process::exit(1);
        }
    }
}

/// `RUST_LOG` wins; otherwise `--debug` turns on this crate's debug output.
fn init_logging(debug: bool) {
    let default_filter = if debug { "ghvars=debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Variable(VariableCommands::List { org, env }) => {
            cli::variable::list(&opts, org.as_deref(), env.as_deref()).await
        }
        Commands::Status => cli::status::run(&opts),
        Commands::Version => {
            println!("ghvars version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Completion { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "ghvars", &mut std::io::stdout());
            Ok(())
        }
    }
}
