//! Storecheck CLI - Main Entry Point
//!
//! Operational companion to the acceptance suite: probe the catalog API,
//! inspect and maintain visual baselines, and validate product documents
//! against the schema, without running any scenario.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

use commands::{catalog, schema, snapshot};

/// Storecheck - acceptance-suite companion
#[derive(Parser)]
#[command(name = "storecheck")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(long, default_value = "storecheck.toml", global = true)]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Probe the catalog API's availability
    Probe(catalog::ProbeArgs),

    /// Fetch a single product and print it
    Product(catalog::ProductArgs),

    /// Inspect and maintain visual snapshots
    #[command(subcommand)]
    Snapshot(snapshot::SnapshotCommands),

    /// Validate documents against the product schema
    #[command(subcommand)]
    Schema(schema::SchemaCommands),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    let config = storecheck_common::SuiteConfig::load(&cli.config)?.apply_env();

    match cli.command {
        Commands::Probe(args) => catalog::probe(&config, args).await,
        Commands::Product(args) => catalog::product(&config, args).await,
        Commands::Snapshot(cmd) => snapshot::run(&config, cmd),
        Commands::Schema(cmd) => schema::run(cmd),
    }
}
