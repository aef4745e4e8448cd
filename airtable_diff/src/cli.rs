//! Command line interface for airtable_diff

use clap::{Parser, Subcommand};

use crate::airtable::AirtableClient;
use crate::config::Config;
use crate::error::Result;
use crate::schema::render::{render, OutputFormat};
use crate::service::SchemaComparer;

/// Compare the table and field schemas of two Airtable bases
#[derive(Parser, Debug)]
#[command(name = "airtable_diff")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Compare the table and field schemas of two Airtable bases")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<String>,

    /// Airtable personal access token (overrides config and AIRTABLE_API_KEY)
    #[arg(long, global = true, value_name = "TOKEN")]
    pub api_key: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the bases visible to the API key
    Bases,

    /// Show what must change to turn BASE1's schema into BASE2's
    Compare {
        /// Baseline base id
        base1: String,

        /// Target base id
        base2: String,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },

    /// Serve the JSON API
    Serve {
        /// Address to bind (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind (overrides config)
        #[arg(long)]
        port: Option<u16>,
    },
}

/// Apply command line overrides on top of resolved configuration
pub fn apply_overrides(cli: &Cli, config: &mut Config) {
    if let Some(key) = &cli.api_key {
        config.airtable.api_key = Some(key.clone());
    }
    if let Commands::Serve { host, port } = &cli.command {
        if let Some(host) = host {
            config.server.host = host.clone();
        }
        if let Some(port) = port {
            config.server.port = *port;
        }
    }
}

/// Run a command, returning the text to print on success
pub async fn run_command(cli: &Cli, config: &Config) -> Result<String> {
    match &cli.command {
        Commands::Bases => {
            let credential = config.credential()?;
            let comparer = comparer(config)?;
            let bases = comparer.list_bases(&credential).await?;

            let lines: Vec<String> = bases
                .iter()
                .map(|b| format!("{}  {}  ({})", b.id, b.name, b.permission_level))
                .collect();
            Ok(lines.join("\n"))
        }

        Commands::Compare {
            base1,
            base2,
            format,
            no_color,
        } => {
            let credential = config.credential()?;
            let comparer = comparer(config)?;
            let result = comparer.compare_bases(base1, base2, &credential).await?;
            render(&result, *format, !no_color)
        }

        Commands::Serve { .. } => {
            crate::server::run(config).await?;
            Ok(String::new())
        }
    }
}

fn comparer(config: &Config) -> Result<SchemaComparer<AirtableClient>> {
    let client = AirtableClient::new(&config.airtable)?;
    tracing::debug!(api_url = client.api_url(), "Using Airtable API");
    Ok(SchemaComparer::new(client, config.diff.clone()))
}
