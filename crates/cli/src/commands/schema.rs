//! Product schema commands

use std::path::PathBuf;

use anyhow::Context;
use clap::Subcommand;
use colored::Colorize;

use storecheck_harness::ProductSchema;

#[derive(Subcommand)]
pub enum SchemaCommands {
    /// Validate a JSON document against the product schema
    Validate {
        /// Path to the JSON document
        file: PathBuf,

        /// Directory holding product.schema.json
        #[arg(long, default_value = "schemas")]
        schemas_dir: PathBuf,
    },
}

pub fn run(cmd: SchemaCommands) -> anyhow::Result<()> {
    match cmd {
        SchemaCommands::Validate { file, schemas_dir } => {
            let schema = ProductSchema::load(&schemas_dir)?;
            let content = std::fs::read_to_string(&file)
                .with_context(|| format!("reading {}", file.display()))?;
            let instance: serde_json::Value =
                serde_json::from_str(&content).context("document is not valid JSON")?;

            match schema.validate(&instance) {
                Ok(()) => {
                    println!("{} {} conforms to the product schema", "✓".green(), file.display());
                    Ok(())
                }
                Err(e) => {
                    println!("{} {}", "✗".red(), e);
                    Err(e.into())
                }
            }
        }
    }
}
