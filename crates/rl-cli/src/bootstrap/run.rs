//! Process entry: parse arguments, bootstrap, dispatch the command.

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::debug;

use crate::bootstrap::config::load_config;
use crate::bootstrap::tracing::init_tracing_subscriber;
use crate::bootstrap::wiring::wire_dependencies;
use crate::cli::{Cli, Commands, SubmitArgs};
use crate::commands::{initialize, submit, SubmitRequest};

/// Run the CLI with arguments from the process environment.
///
/// A `.env` file in the working directory is loaded first, so it may
/// carry `RELINK_CONFIG` and the secret overrides.
pub async fn run() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();
    run_with(Cli::parse()).await
}

pub async fn run_with(cli: Cli) -> anyhow::Result<ExitCode> {
    let Cli { config, command } = cli;

    match command {
        Commands::Form => {
            let form = serde_json::to_string_pretty(&initialize())?;
            println!("{form}");
            Ok(ExitCode::SUCCESS)
        }
        Commands::Submit(args) => {
            let app_config = load_config(&config)?;
            init_tracing_subscriber(&app_config.logging)
                .context("Failed to initialize tracing")?;
            debug!(config = %config.display(), "Configuration loaded");

            let app = wire_dependencies(&app_config)?;
            let json = args.json;
            let response = submit(&app, into_request(args)).await;

            if json {
                println!("{}", serde_json::to_string_pretty(&response)?);
            } else {
                print!("{}", response.to_text());
            }
            Ok(ExitCode::from(response.exit_status()))
        }
    }
}

fn into_request(args: SubmitArgs) -> SubmitRequest {
    SubmitRequest {
        article_id: args.article_id,
        old_image: args.old_image,
        new_image: args.new_image,
    }
}
