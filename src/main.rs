mod auth;
mod classify;
mod cli;
mod client;
mod commands;
mod config;
mod error;
mod handler;
mod logging;
mod output;
mod types;

use std::io;

use clap::{CommandFactory, Parser};
use clap_complete::generate;
use colored::Colorize;

use cli::{Cli, Commands};
use config::Config;
use error::Result;
use std::error::Error;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    let verbose = cli.verbose;

    if let Err(e) = run(cli).await {
        eprintln!("{} {e}", "Error:".red().bold());

        // Show error chain if verbose flag was passed
        if verbose {
            let mut source = e.source();
            while let Some(cause) = source {
                eprintln!("Caused by: {cause}");
                source = std::error::Error::source(cause);
            }
        }

        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    output::set_json_output(cli.json);
    logging::init(cli.log_json);

    match cli.command {
        // Commands that don't require settings
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "glassbot", &mut io::stdout());
        }
        Commands::Init => {
            commands::init::run()?;
        }
        // Commands that require settings; missing credentials are fatal here
        command => {
            let settings = Config::load()?.resolve()?;

            match command {
                Commands::Handle(args) => {
                    commands::handle::run(&settings, args).await?;
                }
                Commands::Sign(args) => {
                    commands::sign::run(&settings, args)?;
                }
                Commands::Completions { .. } | Commands::Init => {
                    // Already handled above
                }
            }
        }
    }

    Ok(())
}
