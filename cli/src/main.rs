//! CLI entrypoint for Silfira
//!
//! This is the main binary that wires together all layers: configuration,
//! a catalog source, the listing use cases and the console formatters.

use anyhow::{Context, Result};
use clap::Parser;
use silfira_application::{
    BrowseListingsUseCase, CatalogSource, FeaturedListingsUseCase, ListingParams,
    ViewPropertyUseCase,
};
use silfira_domain::{Catalog, PropertyId};
use silfira_infrastructure::{ConfigLoader, FileConfig, JsonCatalogLoader, SeedCatalog};
use silfira_presentation::{Cli, Command, ConsoleFormatter, OutputFormat};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    // Load configuration
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("failed to load configuration")?
    };
    config.validate().context("invalid configuration")?;

    if !config.output.color {
        colored::control::set_override(false);
    }

    let params = config.listing_params();
    let catalog = Arc::new(load_catalog(&config)?);
    info!(properties = catalog.len(), "catalog ready");

    let output = run_command(&cli, catalog, &params);
    print!("{}", output);

    Ok(())
}

/// Pick the catalog source: a configured JSON file, or the embedded seed.
fn load_catalog(config: &FileConfig) -> Result<Catalog> {
    let catalog = match &config.catalog.path {
        Some(path) => JsonCatalogLoader::new(path)
            .load()
            .with_context(|| format!("failed to load catalog from {}", path))?,
        None => SeedCatalog.load().context("failed to load seed catalog")?,
    };
    Ok(catalog)
}

/// Dispatch the subcommand through its use case and format the result.
fn run_command(cli: &Cli, catalog: Arc<Catalog>, params: &ListingParams) -> String {
    match &cli.command {
        Command::Browse { .. } => {
            let criteria = cli.command.criteria(params);
            let use_case = BrowseListingsUseCase::new(catalog);
            let output = use_case.execute(&criteria);
            match cli.output {
                OutputFormat::Table => ConsoleFormatter::format_browse(&output, cli.quiet),
                OutputFormat::Json => ConsoleFormatter::format_listings_json(output.properties()),
            }
        }
        Command::Featured { limit } => {
            let use_case = FeaturedListingsUseCase::new(catalog);
            let featured = use_case.execute(limit.unwrap_or(params.featured_limit));
            match cli.output {
                OutputFormat::Table => ConsoleFormatter::format_featured(&featured, cli.quiet),
                OutputFormat::Json => ConsoleFormatter::format_listings_json(&featured),
            }
        }
        Command::Show { id } => {
            let use_case = ViewPropertyUseCase::new(catalog);
            let view = use_case.execute(&PropertyId::new(id.clone()));
            match cli.output {
                OutputFormat::Table => ConsoleFormatter::format_detail(&view),
                OutputFormat::Json => ConsoleFormatter::format_detail_json(&view),
            }
        }
        Command::Agents => {
            let agents = catalog.agents().all();
            match cli.output {
                OutputFormat::Table => ConsoleFormatter::format_agents(agents, cli.quiet),
                OutputFormat::Json => ConsoleFormatter::format_agents_json(agents),
            }
        }
    }
}
