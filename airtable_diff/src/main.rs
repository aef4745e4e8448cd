use anyhow::Context;
use clap::Parser;
use std::process;

use airtable_diff::cli::{self, Cli};
use airtable_diff::{config, utils};

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(output) => {
            if !output.is_empty() {
                println!("{}", output);
            }
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(1);
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<String> {
    let mut config =
        config::resolve(cli.config.as_deref()).context("Failed to load configuration")?;
    cli::apply_overrides(&cli, &mut config);

    utils::init_logging(&config.logging).context("Failed to initialize logging")?;

    let output = cli::run_command(&cli, &config).await?;
    Ok(output)
}
