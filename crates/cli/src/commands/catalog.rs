//! Catalog API commands

use anyhow::Context;
use clap::Args;
use colored::Colorize;

use storecheck_common::SuiteConfig;
use storecheck_harness::CatalogClient;

#[derive(Args)]
pub struct ProbeArgs {
    /// Probe the fallback API instead of the primary
    #[arg(long)]
    pub fallback: bool,
}

#[derive(Args)]
pub struct ProductArgs {
    /// Product ID to fetch
    pub id: String,

    /// Print the raw JSON instead of the summary line
    #[arg(long)]
    pub json: bool,
}

fn client(config: &SuiteConfig, fallback: bool) -> anyhow::Result<CatalogClient> {
    let client = if fallback {
        CatalogClient::fallback(&config.api)?
    } else {
        CatalogClient::new(&config.api)?
    };
    Ok(client)
}

pub async fn probe(config: &SuiteConfig, args: ProbeArgs) -> anyhow::Result<()> {
    let client = client(config, args.fallback)?;
    println!("Probing {} ...", client.base_url());

    match client.availability_check().await {
        Ok(()) => {
            println!("{} catalog is available", "✓".green());
            Ok(())
        }
        Err(e) => {
            println!("{} {}", "✗".red(), e);
            Err(e.into())
        }
    }
}

pub async fn product(config: &SuiteConfig, args: ProductArgs) -> anyhow::Result<()> {
    let client = client(config, false)?;

    if args.json {
        let recorded = client.get_product(&args.id).await?;
        let value = recorded.json().context("response body is not JSON")?;
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    let product = client.fetch_product(&args.id).await?;
    println!(
        "#{} {} — {:.2} ({})",
        product.id,
        product.title.bold(),
        product.price,
        if product.category.is_empty() {
            "uncategorized"
        } else {
            &product.category
        }
    );
    Ok(())
}
