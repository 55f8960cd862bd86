//! Order Generator Binary
//!
//! Prompts for trade names and writes the matching thinkorswim CUSTOM
//! order lines to the order file.
//!
//! # Usage
//!
//! ```bash
//! cargo run -p order-generator -- --config order-generator.yaml
//! cargo run -p order-generator -- --trade "put spread"
//! ```
//!
//! # Environment Variables
//!
//! ## Required
//! - `TOS_API_KEY`: Quote provider API key (not needed with `--chain-file`)
//!
//! ## Optional
//! - `TOS_GEN_ORDER_FILE_PATH`: Directory of the order file (default: current directory)
//! - `RUST_LOG`: Log filter (default: `observability.logging.level`)

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, bail};
use clap::Parser;

use order_generator::application::ports::{
    OrderSinkPort, QuoteProviderPort, TradeCatalogPort, WriteMode,
};
use order_generator::application::services::InteractiveSession;
use order_generator::application::use_cases::GenerateOrderUseCase;
use order_generator::config::{Config, load_config, require_api_key};
use order_generator::domain::order_entry::OrderAssembler;
use order_generator::domain::shared::Symbol;
use order_generator::error::GeneratorError;
use order_generator::infrastructure::persistence::{FileOrderSink, JsonTradeCatalog};
use order_generator::infrastructure::quote_provider::{
    FixtureQuoteProvider, TdaConfig, TdaQuoteProvider,
};
use order_generator::telemetry::init_telemetry;

/// Generate thinkorswim CUSTOM option orders from named trade structures.
#[derive(Parser)]
#[command(name = "order-generator", version, about)]
struct Cli {
    /// Path to the YAML config file (default: order-generator.yaml if present)
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Trade structures JSON file, overriding `catalog.path`
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Directory of the order file, overriding `output.directory`
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Serve the option chain from a saved provider response instead of the API
    #[arg(long)]
    chain_file: Option<PathBuf>,

    /// Generate this one trade, write it, and exit without prompting
    #[arg(long, short = 't')]
    trade: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    load_dotenv();

    let mut config = load_config(cli.config.as_deref()).context("loading configuration")?;
    if let Some(path) = &cli.catalog {
        config.catalog.path.clone_from(path);
    }
    if let Some(dir) = &cli.output_dir {
        config.output.directory.clone_from(dir);
    }

    init_telemetry(&config.observability.logging);
    log_config(&config);

    let catalog = Arc::new(JsonTradeCatalog::new(config.catalog.path.clone()));
    let sink = Arc::new(FileOrderSink::new(config.output.file_path()));

    if let Some(chain_file) = &cli.chain_file {
        let provider = FixtureQuoteProvider::from_file(chain_file)
            .with_context(|| format!("loading chain file {}", chain_file.display()))?;
        run(Arc::new(provider), &config, catalog, sink, cli.trade).await
    } else {
        require_api_key(&config)?;
        let provider = TdaQuoteProvider::new(&TdaConfig::from(&config.provider))
            .context("creating quote provider")?;
        run(Arc::new(provider), &config, catalog, sink, cli.trade).await
    }
}

/// Wire the use case and run either one trade or the interactive session.
async fn run<P, C, S>(
    provider: Arc<P>,
    config: &Config,
    catalog: Arc<C>,
    sink: Arc<S>,
    trade: Option<String>,
) -> anyhow::Result<()>
where
    P: QuoteProviderPort,
    C: TradeCatalogPort,
    S: OrderSinkPort,
{
    let assembler = OrderAssembler::new(config.order.symbol.clone(), config.order.multiplier);
    let use_case = GenerateOrderUseCase::new(
        provider,
        Symbol::new(config.provider.symbol.clone()),
        assembler,
        config.provider.max_fetch_attempts,
    );

    let Some(name) = trade else {
        let stdin = std::io::stdin();
        let session = InteractiveSession::new(use_case, catalog, sink);
        let summary = session.run(stdin.lock(), std::io::stdout()).await?;
        if summary.trades_written == 0 && summary.failures > 0 {
            tracing::warn!(failures = summary.failures, "No orders written");
        }
        return Ok(());
    };

    let catalog = catalog.load().await?;
    let structure = catalog.find(&name).map_err(GeneratorError::from)?;
    let lines = use_case.execute(structure).await?;
    if lines.is_empty() {
        bail!("trade '{name}' produced no order lines");
    }
    sink.write(&lines, WriteMode::Overwrite).await?;

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "The following order was written to {}:", sink.location())?;
    for line in &lines {
        writeln!(stdout, "{line}")?;
    }
    Ok(())
}

/// Log the effective configuration.
fn log_config(config: &Config) {
    tracing::info!(
        provider = %config.provider.base_url,
        symbol = %config.provider.symbol,
        catalog = %config.catalog.path.display(),
        output = %config.output.file_path().display(),
        "Configuration loaded"
    );
}

/// Load .env file from current or ancestor directories.
fn load_dotenv() {
    if dotenvy::dotenv().is_ok() {
        return;
    }

    if let Ok(cwd) = std::env::current_dir() {
        let mut dir = cwd.as_path();
        while let Some(parent) = dir.parent() {
            let env_path = parent.join(".env");
            if env_path.exists() {
                let _ = dotenvy::from_path(&env_path);
                return;
            }
            dir = parent;
        }
    }
}
