use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use commerce_integrations::adapters::HostSnapshot;
use commerce_integrations::application::{CalculateOrderCogsQuery, IntegrationServices};
use commerce_integrations::config::AppConfig;
use commerce_integrations::domain::foundation::ProductId;
use commerce_integrations::telemetry::init_tracing;
use serde::Serialize;

/// Inspect storefront integrations against a host snapshot.
#[derive(Parser, Debug)]
#[command(name = "commerce-integrations", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute the cost of goods of an order
    Cogs {
        /// Host snapshot (JSON or YAML)
        #[arg(long)]
        snapshot: PathBuf,

        /// Order line product ids; defaults to every product in the snapshot
        #[arg(long = "product")]
        products: Vec<ProductId>,
    },
    /// Report which integrations are available
    Integrations {
        /// Host snapshot (JSON or YAML)
        #[arg(long)]
        snapshot: PathBuf,
    },
}

/// CLI entry point
fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load_validated().context("failed to load configuration")?;
    init_tracing(&config.logging);

    match cli.command {
        Command::Cogs { snapshot, products } => {
            let host = load_snapshot(&snapshot)?;
            let product_ids = if products.is_empty() {
                host.products.iter().map(|product| product.id.clone()).collect()
            } else {
                products
            };

            let services = IntegrationServices::build(&config, host.clone());
            let view = services
                .order_cogs_handler(host)
                .handle(CalculateOrderCogsQuery { product_ids })?;
            print_json(&view)
        }
        Command::Integrations { snapshot } => {
            let host = load_snapshot(&snapshot)?;
            let services = IntegrationServices::build(&config, host);
            print_json(&services.report_handler().handle())
        }
    }
}

fn load_snapshot(path: &Path) -> Result<Arc<HostSnapshot>> {
    let snapshot = HostSnapshot::from_path(path)
        .with_context(|| format!("failed to read host snapshot {}", path.display()))?;
    Ok(Arc::new(snapshot))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
